//! Export generation for schemas: SQL DDL, JSON, and Markdown documentation.

mod dialect;
mod json;
mod markdown;
mod sql;

pub use dialect::SqlDialect;
pub use json::to_json;
pub use markdown::to_documentation;
pub use sql::to_sql;

use crate::schema::Schema;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;

/// Output format for schema export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// SQL DDL script
    #[default]
    Sql,
    /// Pretty-printed JSON serialization of the schema
    Json,
    /// Markdown documentation
    Documentation,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sql" => Ok(ExportFormat::Sql),
            "json" => Ok(ExportFormat::Json),
            "documentation" | "doc" | "markdown" | "md" => Ok(ExportFormat::Documentation),
            _ => Err(format!(
                "Unknown format: {}. Valid options: sql, json, documentation",
                s
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Sql => write!(f, "sql"),
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Documentation => write!(f, "documentation"),
        }
    }
}

impl ExportFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Sql => "sql",
            ExportFormat::Json => "json",
            ExportFormat::Documentation => "md",
        }
    }
}

/// Options controlling export generation.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Dialect label echoed into the SQL header. Type mapping and quoting
    /// are dialect-agnostic; the enum is the seam for per-dialect
    /// strategies later.
    pub dialect: SqlDialect,
    /// Timestamp for the `Generated on` header; `None` means now.
    pub generated_at: Option<DateTime<Utc>>,
    /// Prepend `DROP TABLE IF EXISTS` statements before the CREATE block.
    pub include_drop_statements: bool,
}

impl ExportOptions {
    pub fn with_dialect(mut self, dialect: SqlDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }

    pub fn with_drop_statements(mut self) -> Self {
        self.include_drop_statements = true;
        self
    }

    /// ISO-8601 generation timestamp (millisecond precision, `Z` suffix).
    pub(crate) fn timestamp(&self) -> String {
        self.generated_at
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Generate the export text for a schema in the requested format.
pub fn generate(schema: &Schema, format: ExportFormat, options: &ExportOptions) -> String {
    match format {
        ExportFormat::Sql => to_sql(schema, options),
        ExportFormat::Json => to_json(schema),
        ExportFormat::Documentation => to_documentation(schema, options),
    }
}

/// Suggested download file name: `<schema name or "schema">.<ext>`.
pub fn export_file_name(schema: &Schema, format: ExportFormat) -> String {
    let name = if schema.name.is_empty() {
        "schema"
    } else {
        &schema.name
    };
    format!("{}.{}", name, format.extension())
}

/// Display name used in headers when the schema has an empty name.
pub(crate) fn display_name(schema: &Schema) -> &str {
    if schema.name.is_empty() {
        crate::schema::DEFAULT_SCHEMA_NAME
    } else {
        &schema.name
    }
}
