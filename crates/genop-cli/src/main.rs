use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use genop_contracts::{GENOP_REPORT_SCHEMA_VERSION, MANIFEST_SCHEMA_VERSION};
use genop_core::config::{self, GenConfig};
use genop_core::diagnostics::Skipped;
use genop_core::{catalog, diagnostics, driver, util};

#[derive(Parser, Debug)]
#[command(name = "genop")]
#[command(about = "Generates Go wrapper functions from an operation catalog.", long_about = None)]
struct Cli {
    /// Log skipped ops and pass summaries (overrides GENOP_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one Go file from a JSON catalog.
    Generate {
        #[arg(long)]
        catalog: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// JSON config file (tool name, package, runtime import, deny-list).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Go package name; overrides the config file.
        #[arg(long)]
        package: Option<String>,
        /// Generator name written into the header; overrides the config file.
        #[arg(long)]
        generated_by: Option<String>,
        /// If set, fail if output differs; do not write.
        #[arg(long, default_value_t = false)]
        check: bool,
        /// Print a JSON report to stdout.
        #[arg(long, default_value_t = false)]
        report_json: bool,
    },
    /// Generate several files from a manifest.
    Batch {
        #[arg(long)]
        manifest: PathBuf,
        /// If set, fail if any output differs; do not write.
        #[arg(long, default_value_t = false)]
        check: bool,
    },
    /// Print the catalog of skip codes as Markdown.
    Diagnostics,
}

#[derive(Debug, Serialize)]
struct GenopReport<'a> {
    schema_version: &'static str,
    catalog: String,
    catalog_sha256: String,
    out: String,
    out_sha256: String,
    check: bool,
    emitted: &'a [String],
    skipped: &'a [Skipped],
}

fn main() -> Result<()> {
    try_main().map_err(|err| {
        eprintln!("{err:#}");
        err
    })
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Command::Generate {
            catalog,
            out,
            config: config_path,
            package,
            generated_by,
            check,
            report_json,
        } => {
            let mut cfg = match &config_path {
                Some(path) => config::load_config(path)?,
                None => GenConfig::default(),
            };
            if let Some(package) = package {
                cfg.package = package;
            }
            if let Some(generated_by) = generated_by {
                cfg.generated_by = generated_by;
            }
            run_generate(&catalog, &out, &cfg, check, report_json)
        }
        Command::Batch { manifest, check } => run_batch(&manifest, check),
        Command::Diagnostics => {
            print!("{}", diagnostics::render_skip_codes_md());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("GENOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_generate(
    catalog_path: &Path,
    out_path: &Path,
    cfg: &GenConfig,
    check: bool,
    report_json: bool,
) -> Result<()> {
    let catalog_bytes = std::fs::read(catalog_path)
        .with_context(|| format!("read catalog: {}", catalog_path.display()))?;
    let ops = catalog::parse_catalog(&catalog_bytes)
        .with_context(|| format!("decode catalog: {}", catalog_path.display()))?;
    let (src, report) = driver::render_ops(&ops, cfg)?;
    driver::write_or_check(out_path, &src, check)?;

    tracing::info!(
        out = %out_path.display(),
        emitted = report.emitted.len(),
        skipped = report.skipped.len(),
        check,
        "done"
    );

    if report_json {
        let r = GenopReport {
            schema_version: GENOP_REPORT_SCHEMA_VERSION,
            catalog: catalog_path.display().to_string(),
            catalog_sha256: util::sha256_hex(&catalog_bytes),
            out: out_path.display().to_string(),
            out_sha256: util::sha256_hex(src.as_bytes()),
            check,
            emitted: &report.emitted,
            skipped: &report.skipped,
        };
        println!("{}", serde_json::to_string(&r)?);
    }
    Ok(())
}

#[derive(Debug, serde::Deserialize)]
struct Manifest {
    schema_version: String,
    #[serde(default)]
    config: Option<GenConfig>,
    entries: Vec<ManifestEntry>,
}

#[derive(Debug, serde::Deserialize)]
struct ManifestEntry {
    catalog: String,
    out: String,
    #[serde(default)]
    package: Option<String>,
}

fn run_batch(manifest_path: &Path, check: bool) -> Result<()> {
    let bytes = std::fs::read(manifest_path)
        .with_context(|| format!("read manifest: {}", manifest_path.display()))?;
    let m: Manifest = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse manifest JSON: {}", manifest_path.display()))?;
    if m.schema_version.trim() != MANIFEST_SCHEMA_VERSION {
        anyhow::bail!(
            "manifest schema_version mismatch: expected {MANIFEST_SCHEMA_VERSION} got {:?}",
            m.schema_version
        );
    }

    // Relative entry paths resolve against the manifest's directory.
    let base = manifest_path.parent().unwrap_or_else(|| Path::new(""));
    let base_cfg = m.config.unwrap_or_default();
    for (idx, e) in m.entries.iter().enumerate() {
        let mut cfg = base_cfg.clone();
        if let Some(package) = &e.package {
            cfg.package = package.clone();
        }
        run_generate(&base.join(&e.catalog), &base.join(&e.out), &cfg, check, false)
            .with_context(|| format!("manifest entry[{idx}] {}", e.catalog))?;
    }
    Ok(())
}
