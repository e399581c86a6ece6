//! Structural validation for schemas.
//!
//! This module provides:
//! - Missing primary key detection per table
//! - Dangling relationship endpoint checks (table ids that resolve to nothing)
//! - Duplicate column name detection (case-insensitive)
//! - Identifier hygiene warnings for table and column names
//!
//! Validation is advisory: export never blocks on a failed check, and
//! callers decide which issues to surface.

use crate::schema::{Schema, Table};
use ahash::{AHashMap, AHashSet};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Names that can be emitted into DDL without quoting.
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// A validation issue found in the schema.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
}

impl ValidationIssue {
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Error,
            message: message.into(),
            table: None,
        }
    }

    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            message: message.into(),
            table: None,
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.severity, self.code)?;
        if let Some(ref table) = self.table {
            write!(f, " table={}", table)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Result of validating a schema.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }
}

/// Validate a schema, returning every issue found.
///
/// An empty schema short-circuits with a single warning; no further
/// checks run against it.
pub fn validate(schema: &Schema) -> ValidationReport {
    let mut report = ValidationReport::default();

    if schema.is_empty() {
        report.push(ValidationIssue::warning(
            "no_tables",
            "schema has no tables",
        ));
        return report;
    }

    let table_ids: AHashMap<&str, &str> = schema
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();

    for table in schema.iter() {
        check_table(table, &mut report);
    }

    for rel in &schema.relationships {
        for endpoint in [&rel.from_table, &rel.to_table] {
            if !table_ids.contains_key(endpoint.as_str()) {
                report.push(ValidationIssue::error(
                    "missing_table",
                    format!(
                        "relationship {} references missing table {}",
                        rel.id, endpoint
                    ),
                ));
            }
        }
    }

    report
}

fn check_table(table: &Table, report: &mut ValidationReport) {
    if table.name.trim().is_empty() {
        report.push(
            ValidationIssue::error("empty_table_name", "table has an empty name")
                .with_table(&table.id),
        );
    } else if !IDENTIFIER_RE.is_match(&table.name) {
        report.push(
            ValidationIssue::warning(
                "invalid_identifier",
                format!("table name {:?} is not a valid SQL identifier", table.name),
            )
            .with_table(&table.name),
        );
    }

    if table.columns.is_empty() {
        report.push(
            ValidationIssue::warning(
                "no_columns",
                format!("table {} has no columns", table.name),
            )
            .with_table(&table.name),
        );
        return;
    }

    if !table.has_primary_key() {
        report.push(
            ValidationIssue::warning(
                "missing_primary_key",
                format!("table {} has no primary key", table.name),
            )
            .with_table(&table.name),
        );
    }

    let mut seen = AHashSet::new();
    for col in &table.columns {
        if col.name.trim().is_empty() {
            report.push(
                ValidationIssue::error(
                    "empty_column_name",
                    format!("table {} has a column with an empty name", table.name),
                )
                .with_table(&table.name),
            );
            continue;
        }
        if !seen.insert(col.name.to_lowercase()) {
            report.push(
                ValidationIssue::warning(
                    "duplicate_column",
                    format!("table {} has duplicate column {}", table.name, col.name),
                )
                .with_table(&table.name),
            );
        }
        if !IDENTIFIER_RE.is_match(&col.name) {
            report.push(
                ValidationIssue::warning(
                    "invalid_identifier",
                    format!(
                        "column name {:?} in table {} is not a valid SQL identifier",
                        col.name, table.name
                    ),
                )
                .with_table(&table.name),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, Relationship, Table};

    #[test]
    fn test_empty_schema_short_circuits() {
        let report = validate(&Schema::default());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].code, "no_tables");
        assert_eq!(report.issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_missing_primary_key_is_one_warning() {
        let schema = Schema::default().add_table(
            Table::new("users")
                .with_column(Column::new("name", "VARCHAR(255)"))
                .with_column(Column::new("email", "VARCHAR(255)")),
        );
        let report = validate(&schema);

        assert!(report.errors().is_empty());
        let warnings = report.warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, "missing_primary_key");
        assert!(warnings[0].message.contains("users"));
    }

    #[test]
    fn test_dangling_relationship_is_error() {
        let users = Table::new("users").with_column(Column::new("id", "INT").primary_key());
        let users_id = users.id.clone();
        let schema = Schema::default()
            .add_table(users)
            .add_relationship(Relationship::new("gone", "user_id", &users_id, "id"));

        let report = validate(&schema);
        let errors = report.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "missing_table");
        assert!(errors[0].message.contains("gone"));
    }

    #[test]
    fn test_duplicate_columns_detected_case_insensitively() {
        let schema = Schema::default().add_table(
            Table::new("users")
                .with_column(Column::new("id", "INT").primary_key())
                .with_column(Column::new("Email", "VARCHAR(255)"))
                .with_column(Column::new("email", "TEXT")),
        );
        let report = validate(&schema);

        let dup: Vec<_> = report
            .issues
            .iter()
            .filter(|i| i.code == "duplicate_column")
            .collect();
        assert_eq!(dup.len(), 1);
    }

    #[test]
    fn test_clean_schema_has_no_issues() {
        let schema = Schema::default().add_table(
            Table::new("users")
                .with_column(Column::new("id", "INT").primary_key())
                .with_column(Column::new("email", "VARCHAR(255)").not_null()),
        );
        assert!(validate(&schema).is_clean());
    }
}
