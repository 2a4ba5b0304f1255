use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an operation was left out of the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SkipCode {
    GOP0001DenyListed,
    GOP0002InternalOp,
    GOP0003UnsupportedAttrType,
    GOP0004RefTypedArg,
    GOP0005Undocumented,
}

impl SkipCode {
    pub fn code_str(self) -> &'static str {
        match self {
            SkipCode::GOP0001DenyListed => "GOP0001",
            SkipCode::GOP0002InternalOp => "GOP0002",
            SkipCode::GOP0003UnsupportedAttrType => "GOP0003",
            SkipCode::GOP0004RefTypedArg => "GOP0004",
            SkipCode::GOP0005Undocumented => "GOP0005",
        }
    }

    pub fn default_message(self) -> &'static str {
        match self {
            SkipCode::GOP0001DenyListed => "op is on the deny-list",
            SkipCode::GOP0002InternalOp => "internal op (name starts with '_')",
            SkipCode::GOP0003UnsupportedAttrType => "attribute type has no Go mapping",
            SkipCode::GOP0004RefTypedArg => "reference-typed input or output",
            SkipCode::GOP0005Undocumented => "op has no summary",
        }
    }

    pub fn default_help(self) -> Option<&'static str> {
        match self {
            SkipCode::GOP0001DenyListed => {
                Some("Remove the op from `deny_list` in the genop config to wrap it.")
            }
            SkipCode::GOP0005Undocumented => {
                Some("Add a summary to the op registration; undocumented ops are not exported.")
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skipped {
    pub op: String,
    pub code: SkipCode,
    pub message: String,
}

impl Skipped {
    pub fn new(op: &str, code: SkipCode, message: impl Into<String>) -> Self {
        Skipped {
            op: op.to_string(),
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.code.code_str(), self.op, self.message)
    }
}

pub fn render_skip_codes_md() -> String {
    let mut out = String::new();
    out.push_str("# genop skip codes\n\n");
    out.push_str("This document is generated from `crates/genop-core/src/diagnostics.rs`.\n\n");
    out.push_str("| Code | Message | Help |\n");
    out.push_str("| ---- | ------- | ---- |\n");
    for code in all_codes() {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            code.code_str(),
            code.default_message(),
            code.default_help().unwrap_or("")
        ));
    }
    out
}

fn all_codes() -> &'static [SkipCode] {
    &[
        SkipCode::GOP0001DenyListed,
        SkipCode::GOP0002InternalOp,
        SkipCode::GOP0003UnsupportedAttrType,
        SkipCode::GOP0004RefTypedArg,
        SkipCode::GOP0005Undocumented,
    ]
}
