//! Error types for the generation engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    /// The attribute type tag is outside the supported vocabulary.
    #[error("{tag:?} is not a recognized attribute type")]
    UnsupportedType { tag: String },

    /// An op that passed screening could not be rendered.
    #[error("render {op}: {message}")]
    Render { op: String, message: String },

    #[error("format generated source")]
    Fmt(#[from] std::fmt::Error),
}

impl GenError {
    pub fn render(op: &str, message: impl Into<String>) -> Self {
        GenError::Render {
            op: op.to_string(),
            message: message.into(),
        }
    }
}
