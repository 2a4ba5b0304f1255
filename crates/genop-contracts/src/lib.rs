//! Shared, version-pinned schema identifiers.
//!
//! These constants are the single source of truth for schema/version strings that
//! appear in machine-readable I/O (catalogs, config files, batch manifests and
//! tool reports).

pub const CATALOG_SCHEMA_VERSION: &str = "genop.catalog@0.1.0";
pub const CONFIG_SCHEMA_VERSION: &str = "genop.config@0.1.0";
pub const MANIFEST_SCHEMA_VERSION: &str = "genop.manifest@0.1.0";

pub const GENOP_REPORT_SCHEMA_VERSION: &str = "genop.report@0.1.0";
