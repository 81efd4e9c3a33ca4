/// Environment variable pointing at the project root
pub const DEVO_DIR_VAR: &str = "DEVO_DIR";

/// Directory (relative to the project root) receiving generated files
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of [`DATA_GENERATED`] holding optimization records
pub const RECORDS: &str = "records";
