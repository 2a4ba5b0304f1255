use std::collections::BTreeSet;

use crate::catalog::{AttrDef, OpDef};

/// An operation with its attributes split by how a caller supplies them.
///
/// Attributes that drive an input's type or count are inferred from the
/// inputs and appear in neither list.
#[derive(Debug, Clone)]
pub struct ClassifiedOp<'a> {
    pub op: &'a OpDef,
    /// No default; part of the function signature.
    pub required_attrs: Vec<&'a AttrDef>,
    /// Has a default; settable through a generated setter.
    pub optional_attrs: Vec<&'a AttrDef>,
}

/// Attribute names some input derives its type, type list or count from.
pub fn inferred_attrs(op: &OpDef) -> BTreeSet<&str> {
    op.input_arg
        .iter()
        .flat_map(|arg| arg.referenced_attrs())
        .collect()
}

impl<'a> ClassifiedOp<'a> {
    pub fn new(op: &'a OpDef) -> Self {
        let inferred = inferred_attrs(op);
        let mut required_attrs = Vec::new();
        let mut optional_attrs = Vec::new();
        for attr in &op.attr {
            if inferred.contains(attr.name.as_str()) {
                continue;
            }
            if attr.default_value.is_none() {
                required_attrs.push(attr);
            } else {
                optional_attrs.push(attr);
            }
        }
        ClassifiedOp {
            op,
            required_attrs,
            optional_attrs,
        }
    }

    pub fn has_attrs(&self) -> bool {
        !self.required_attrs.is_empty() || !self.optional_attrs.is_empty()
    }

    /// True if any input or required attribute carries a description.
    pub fn describe_arguments(&self) -> bool {
        self.op.input_arg.iter().any(|a| !a.description.is_empty())
            || self.required_attrs.iter().any(|a| !a.description.is_empty())
    }

    pub fn describe_outputs(&self) -> bool {
        self.op.output_arg.iter().any(|a| !a.description.is_empty())
    }

    pub fn has_list_output(&self) -> bool {
        self.op.output_arg.iter().any(|a| a.is_list())
    }
}
