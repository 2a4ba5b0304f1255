use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use genop_contracts::CONFIG_SCHEMA_VERSION;

pub const DEFAULT_GENERATED_BY: &str = "genop";
pub const DEFAULT_PACKAGE: &str = "op";
pub const DEFAULT_RUNTIME_IMPORT: &str = "github.com/tensorflow/tensorflow/tensorflow/go";

/// Ops that are never wrapped even when otherwise eligible.
pub const DEFAULT_DENY_LIST: &[&str] = &["Const", "PyFunc", "PyFuncStateless"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Named in the header as the generator of the file.
    pub generated_by: String,
    /// Go package clause of the generated file.
    pub package: String,
    /// Import path of the runtime package, imported as `tf`.
    pub runtime_import: String,
    pub deny_list: Vec<String>,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            generated_by: DEFAULT_GENERATED_BY.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            runtime_import: DEFAULT_RUNTIME_IMPORT.to_string(),
            deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GenConfig {
    pub fn is_denied(&self, op_name: &str) -> bool {
        self.deny_list.iter().any(|d| d == op_name)
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    schema_version: String,
    #[serde(flatten)]
    config: GenConfig,
}

/// Reads a JSON config file. Fields it leaves out keep their defaults.
pub fn load_config(path: &Path) -> Result<GenConfig> {
    let bytes = std::fs::read(path).with_context(|| format!("read config: {}", path.display()))?;
    let file: ConfigFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse config JSON: {}", path.display()))?;
    if file.schema_version.trim() != CONFIG_SCHEMA_VERSION {
        anyhow::bail!(
            "config schema_version mismatch: expected {CONFIG_SCHEMA_VERSION} got {:?}",
            file.schema_version
        );
    }
    Ok(file.config)
}
