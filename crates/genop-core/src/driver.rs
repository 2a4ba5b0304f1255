use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::catalog::{OpDef, OpList};
use crate::classify::ClassifiedOp;
use crate::config::GenConfig;
use crate::diagnostics::{SkipCode, Skipped};
use crate::emit::Emitter;
use crate::types::go_type;

/// Marks ops that are internal to the runtime.
const INTERNAL_OP_PREFIX: char = '_';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    /// Wrapped ops, in emission order.
    pub emitted: Vec<String>,
    pub skipped: Vec<Skipped>,
}

/// Decides whether `op` can be wrapped; `Some` names the reason it cannot.
pub fn screen(op: &OpDef, config: &GenConfig) -> Option<Skipped> {
    if config.is_denied(&op.name) {
        return Some(Skipped::new(
            &op.name,
            SkipCode::GOP0001DenyListed,
            SkipCode::GOP0001DenyListed.default_message(),
        ));
    }
    if op.name.starts_with(INTERNAL_OP_PREFIX) {
        return Some(Skipped::new(
            &op.name,
            SkipCode::GOP0002InternalOp,
            SkipCode::GOP0002InternalOp.default_message(),
        ));
    }
    for attr in &op.attr {
        if let Err(err) = go_type(&attr.ty) {
            return Some(Skipped::new(
                &op.name,
                SkipCode::GOP0003UnsupportedAttrType,
                format!("attribute {:?}: {err}", attr.name),
            ));
        }
    }
    if let Some(arg) = op
        .input_arg
        .iter()
        .chain(op.output_arg.iter())
        .find(|a| a.is_ref)
    {
        return Some(Skipped::new(
            &op.name,
            SkipCode::GOP0004RefTypedArg,
            format!("argument {:?} is reference-typed", arg.name),
        ));
    }
    if op.summary.is_empty() {
        return Some(Skipped::new(
            &op.name,
            SkipCode::GOP0005Undocumented,
            SkipCode::GOP0005Undocumented.default_message(),
        ));
    }
    None
}

/// Renders the Go source for every wrappable op in `ops`, in catalog order.
///
/// Rendering happens entirely in memory; any error leaves no output.
pub fn render_ops(ops: &OpList, config: &GenConfig) -> Result<(String, GenerateReport)> {
    let emitter = Emitter::new(config);
    let mut src = String::new();
    let mut report = GenerateReport::default();

    emitter.header(&mut src).context("render header")?;
    for op in &ops.op {
        if let Some(skip) = screen(op, config) {
            tracing::debug!(op = %op.name, code = skip.code.code_str(), "skip: {}", skip.message);
            report.skipped.push(skip);
            continue;
        }
        let classified = ClassifiedOp::new(op);
        emitter
            .op(&mut src, &classified)
            .with_context(|| format!("generate wrapper for op {}", op.name))?;
        report.emitted.push(op.name.clone());
    }

    tracing::info!(
        emitted = report.emitted.len(),
        skipped = report.skipped.len(),
        "generated op wrappers"
    );
    Ok((src, report))
}

/// Writes a Go source file with a function for each op in `ops` to `w`.
pub fn generate_functions_for_ops<W: Write>(
    w: &mut W,
    ops: &OpList,
    config: &GenConfig,
) -> Result<GenerateReport> {
    let (src, report) = render_ops(ops, config)?;
    w.write_all(src.as_bytes())
        .context("write generated source")?;
    Ok(report)
}

/// Writes `src` to `out_path`, or with `check` set, only verifies that the
/// existing file already has exactly that content.
pub fn write_or_check(out_path: &Path, src: &str, check: bool) -> Result<()> {
    if check {
        let cur = std::fs::read_to_string(out_path)
            .with_context(|| format!("read existing output: {}", out_path.display()))?;
        if cur != src {
            anyhow::bail!("generated output differs: {}", out_path.display());
        }
        return Ok(());
    }

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir: {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, src.as_bytes())
        .with_context(|| format!("write output: {}", out_path.display()))?;
    Ok(())
}
