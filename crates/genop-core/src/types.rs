//! Mapping from catalog attribute type tags to Go types.

use crate::catalog::AttrDef;
use crate::error::{GenError, Result};

const LIST_PREFIX: &str = "list(";
const LIST_SUFFIX: &str = ")";

/// Splits a type tag into its list flag and element tag:
/// `list(int)` is `(true, "int")`, `shape` is `(false, "shape")`.
pub fn parse_type_tag(tag: &str) -> (bool, &str) {
    match tag
        .strip_prefix(LIST_PREFIX)
        .and_then(|rest| rest.strip_suffix(LIST_SUFFIX))
    {
        Some(inner) => (true, inner),
        None => (false, tag),
    }
}

/// Converts an attribute type tag (`string`, `int`, `list(string)`, ...)
/// into the corresponding Go type.
pub fn go_type(tag: &str) -> Result<String> {
    let (list, elem) = parse_type_tag(tag);
    let go = match elem {
        "int" => "int64",
        "float" => "float32",
        "bool" => "bool",
        "type" => "tf.DataType",
        "shape" => "tf.Shape",
        "tensor" => "tf.Tensor",
        "string" => "string",
        _ => {
            return Err(GenError::UnsupportedType {
                tag: tag.to_string(),
            })
        }
    };
    Ok(if list {
        format!("[]{go}")
    } else {
        go.to_string()
    })
}

pub fn is_list_attr(attr: &AttrDef) -> bool {
    parse_type_tag(&attr.ty).0
}
