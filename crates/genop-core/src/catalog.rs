use std::fmt;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use genop_contracts::CATALOG_SCHEMA_VERSION;

use crate::ident::go_quote;

/// A registry listing: every operation definition, in registry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OpList {
    #[serde(default)]
    pub op: Vec<OpDef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpDef {
    pub name: String,
    pub input_arg: Vec<ArgDef>,
    pub output_arg: Vec<ArgDef>,
    pub attr: Vec<AttrDef>,
    pub deprecation: Option<OpDeprecation>,
    pub summary: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpDeprecation {
    /// GraphDef version at which the op was deprecated.
    pub version: i32,
    pub explanation: String,
}

/// An input or output of an operation.
///
/// At most one of `type`, `type_attr` and `type_list_attr` is set;
/// `number_attr` may accompany `type` or `type_attr`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgDef {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: Option<DataType>,
    pub type_attr: String,
    pub number_attr: String,
    pub type_list_attr: String,
    pub is_ref: bool,
}

impl ArgDef {
    /// True if the argument is a sequence of tensors rather than a single one.
    pub fn is_list(&self) -> bool {
        !self.type_list_attr.is_empty() || !self.number_attr.is_empty()
    }

    /// Names of the attributes this argument derives its type or count from.
    pub fn referenced_attrs(&self) -> impl Iterator<Item = &str> {
        [
            self.type_attr.as_str(),
            self.type_list_attr.as_str(),
            self.number_attr.as_str(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttrDef {
    pub name: String,
    /// Type tag such as `int`, `type` or `list(shape)`.
    #[serde(rename = "type")]
    pub ty: String,
    pub default_value: Option<AttrValue>,
    pub description: String,
    pub minimum: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataType(pub String);

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Dimensions of a shape; `None` means the rank itself is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TensorShape(pub Option<Vec<i64>>);

impl fmt::Display for TensorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("<unknown>"),
            Some(dims) => write_list(f, dims, |f, d| write!(f, "{d}")),
        }
    }
}

/// Summary of a constant tensor value. Only its type and shape are
/// ever rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TensorValue {
    pub dtype: DataType,
    #[serde(default)]
    pub shape: TensorShape,
}

impl fmt::Display for TensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<tensor {} {}>", self.dtype, self.shape)
    }
}

/// A typed attribute value, used for attribute defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    Int(i64),
    Float(f32),
    Bool(bool),
    Type(DataType),
    Shape(TensorShape),
    Tensor(TensorValue),
    String(String),
    IntList(Vec<i64>),
    FloatList(Vec<f32>),
    BoolList(Vec<bool>),
    TypeList(Vec<DataType>),
    ShapeList(Vec<TensorShape>),
    TensorList(Vec<TensorValue>),
    StringList(Vec<String>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Float(v) => write_float(f, *v),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::Type(v) => write!(f, "{v}"),
            AttrValue::Shape(v) => write!(f, "{v}"),
            AttrValue::Tensor(v) => write!(f, "{v}"),
            AttrValue::String(v) => f.write_str(&go_quote(v)),
            AttrValue::IntList(xs) => write_list(f, xs, |f, v| write!(f, "{v}")),
            AttrValue::FloatList(xs) => write_list(f, xs, |f, v| write_float(f, *v)),
            AttrValue::BoolList(xs) => write_list(f, xs, |f, v| write!(f, "{v}")),
            AttrValue::TypeList(xs) => write_list(f, xs, |f, v| write!(f, "{v}")),
            AttrValue::ShapeList(xs) => write_list(f, xs, |f, v| write!(f, "{v}")),
            AttrValue::TensorList(xs) => write_list(f, xs, |f, v| write!(f, "{v}")),
            AttrValue::StringList(xs) => write_list(f, xs, |f, v| f.write_str(&go_quote(v))),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, v: f32) -> fmt::Result {
    // Debug keeps a fractional part on whole numbers (`1.0`, not `1`).
    write!(f, "{v:?}")
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    mut item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, x) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item(f, x)?;
    }
    f.write_str("]")
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    schema_version: String,
    #[serde(default)]
    op: Vec<OpDef>,
}

/// Decodes a JSON catalog document.
pub fn parse_catalog(bytes: &[u8]) -> Result<OpList> {
    let file: CatalogFile = serde_json::from_slice(bytes).context("parse catalog JSON")?;
    if file.schema_version.trim() != CATALOG_SCHEMA_VERSION {
        anyhow::bail!(
            "catalog schema_version mismatch: expected {CATALOG_SCHEMA_VERSION} got {:?}",
            file.schema_version
        );
    }
    Ok(OpList { op: file.op })
}

pub fn load_catalog(path: &std::path::Path) -> Result<OpList> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read catalog: {}", path.display()))?;
    parse_catalog(&bytes).with_context(|| format!("decode catalog: {}", path.display()))
}
