//! Generates Go wrapper functions from an operation catalog.
//!
//! Each wrappable op becomes one Go function taking its inputs and required
//! attributes; optional attributes get a setter each, passed through a
//! trailing variadic parameter. Attributes that follow from the inputs'
//! types or counts never appear in the signature.
//!
//! ```no_run
//! use genop_core::{catalog, config::GenConfig, driver};
//!
//! # fn main() -> anyhow::Result<()> {
//! let ops = catalog::load_catalog(std::path::Path::new("ops.json"))?;
//! let mut out = Vec::new();
//! let report = driver::generate_functions_for_ops(&mut out, &ops, &GenConfig::default())?;
//! println!("{} ops wrapped", report.emitted.len());
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod classify;
pub mod comment;
pub mod config;
pub mod diagnostics;
pub mod driver;
pub mod emit;
pub mod error;
pub mod ident;
pub mod layout;
pub mod types;
pub mod util;

pub use driver::{generate_functions_for_ops, render_ops, GenerateReport};
pub use error::GenError;
