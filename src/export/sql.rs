//! SQL DDL script generation.

use super::{display_name, ExportOptions};
use crate::schema::{Column, Schema, Table};
use ahash::AHashMap;

/// Literal emitted when the schema has no tables.
pub const NO_TABLES_PLACEHOLDER: &str = "-- No tables to export";

/// Type tokens whose default values are emitted as quoted string literals.
const QUOTED_TYPE_TOKENS: [&str; 3] = ["VARCHAR", "TEXT", "CHAR"];

/// Generate a SQL DDL script for the schema.
///
/// Emits a header comment block, one `CREATE TABLE` statement per table in
/// schema order, then an `ALTER TABLE ... ADD CONSTRAINT` block for the
/// relationships. Relationships whose endpoints no longer resolve to a
/// table are skipped; validation reports them separately.
pub fn to_sql(schema: &Schema, options: &ExportOptions) -> String {
    if schema.is_empty() {
        return NO_TABLES_PLACEHOLDER.to_string();
    }

    let mut sql = String::new();
    sql.push_str(&format!("-- Schema: {}\n", display_name(schema)));
    sql.push_str(&format!("-- Generated on: {}\n", options.timestamp()));
    sql.push_str(&format!("-- Dialect: {}\n\n", options.dialect.header_label()));

    if options.include_drop_statements {
        for table in schema.iter() {
            sql.push_str(&format!("DROP TABLE IF EXISTS {};\n", table.name));
        }
        sql.push('\n');
    }

    for table in schema.iter() {
        sql.push_str(&create_table(table));
    }

    // Resolve relationship endpoints (table ids) to names.
    let names: AHashMap<&str, &str> = schema
        .iter()
        .map(|t| (t.id.as_str(), t.name.as_str()))
        .collect();

    let constraints: Vec<String> = schema
        .relationships
        .iter()
        .filter_map(|rel| {
            let from = names.get(rel.from_table.as_str())?;
            let to = names.get(rel.to_table.as_str())?;
            Some(format!(
                "ALTER TABLE {from} ADD CONSTRAINT fk_{from}_{col} FOREIGN KEY ({col}) REFERENCES {to}({tocol});\n",
                col = rel.from_column,
                tocol = rel.to_column,
            ))
        })
        .collect();

    if !constraints.is_empty() {
        sql.push_str("-- Foreign Key Constraints\n");
        for line in constraints {
            sql.push_str(&line);
        }
        sql.push('\n');
    }

    sql
}

/// Render one `CREATE TABLE` statement, trailing blank line included.
fn create_table(table: &Table) -> String {
    let mut definitions: Vec<String> = table.columns.iter().map(column_definition).collect();

    let primary_keys: Vec<&str> = table
        .primary_key_columns()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    if !primary_keys.is_empty() {
        definitions.push(format!("  PRIMARY KEY ({})", primary_keys.join(", ")));
    }

    format!("CREATE TABLE {} (\n{}\n);\n\n", table.name, definitions.join(",\n"))
}

/// Render one column definition line.
fn column_definition(column: &Column) -> String {
    let mut def = format!("  {} {}", column.name, column.column_type);

    if column.is_not_null {
        def.push_str(" NOT NULL");
    }

    if column.has_default() {
        let value = column.default_value.as_deref().unwrap_or_default();
        if is_string_type(&column.column_type) {
            def.push_str(&format!(" DEFAULT '{}'", value));
        } else {
            def.push_str(&format!(" DEFAULT {}", value));
        }
    }

    def
}

/// String-ish types get quoted defaults (case-insensitive substring match).
fn is_string_type(column_type: &str) -> bool {
    let upper = column_type.to_uppercase();
    QUOTED_TYPE_TOKENS.iter().any(|t| upper.contains(t))
}
