//! Markdown documentation export.

use super::{display_name, ExportOptions};
use crate::schema::{Column, Schema};

/// Literal emitted when the schema has no tables.
pub const NO_TABLES_PLACEHOLDER: &str = "# No tables to document";

/// Generate a Markdown document: header block, then one section per table
/// rendered as a Markdown table of columns.
pub fn to_documentation(schema: &Schema, options: &ExportOptions) -> String {
    if schema.is_empty() {
        return NO_TABLES_PLACEHOLDER.to_string();
    }

    let mut doc = String::new();
    doc.push_str("# Database Schema Documentation\n\n");
    doc.push_str(&format!("**Schema Name:** {}\n", display_name(schema)));
    doc.push_str(&format!("**Generated on:** {}\n", options.timestamp()));
    doc.push_str(&format!("**Total Tables:** {}\n\n", schema.len()));

    for table in schema.iter() {
        doc.push_str(&format!("## Table: {}\n\n", table.name));

        if table.columns.is_empty() {
            continue;
        }

        doc.push_str("| Column | Type | Constraints | Description |\n");
        doc.push_str("|--------|------|-------------|-------------|\n");
        for column in &table.columns {
            doc.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                column.name,
                column.column_type,
                constraint_cell(column),
                column.comment.as_deref().filter(|c| !c.is_empty()).unwrap_or("-"),
            ));
        }
        doc.push('\n');
    }

    doc
}

/// Constraint flags joined by `, ` in fixed order, or `-` if none.
fn constraint_cell(column: &Column) -> String {
    let mut constraints = Vec::new();
    if column.is_primary_key {
        constraints.push("PK");
    }
    if column.is_foreign_key {
        constraints.push("FK");
    }
    if column.is_not_null {
        constraints.push("NOT NULL");
    }
    if column.is_unique {
        constraints.push("UNIQUE");
    }
    if column.is_auto_increment {
        constraints.push("AUTO_INCREMENT");
    }

    if constraints.is_empty() {
        "-".to_string()
    } else {
        constraints.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, Table};

    #[test]
    fn test_empty_schema_placeholder() {
        let doc = to_documentation(&Schema::default(), &ExportOptions::default());
        assert_eq!(doc, "# No tables to document");
    }

    #[test]
    fn test_header_and_sections() {
        let schema = Schema::default()
            .rename("shop")
            .add_table(Table::new("users").with_column(Column::new("id", "INT").primary_key()))
            .add_table(Table::new("orders"));

        let doc = to_documentation(&schema, &ExportOptions::default());
        assert!(doc.starts_with("# Database Schema Documentation\n\n"));
        assert!(doc.contains("**Schema Name:** shop\n"));
        assert!(doc.contains("**Total Tables:** 2\n"));
        assert!(doc.contains("## Table: users\n"));
        assert!(doc.contains("## Table: orders\n"));
    }

    #[test]
    fn test_constraint_cell_fixed_order() {
        let column = Column::new("id", "INT")
            .primary_key()
            .not_null()
            .unique()
            .auto_increment();
        assert_eq!(constraint_cell(&column), "PK, NOT NULL, UNIQUE, AUTO_INCREMENT");

        let plain = Column::new("note", "TEXT");
        assert_eq!(constraint_cell(&plain), "-");
    }

    #[test]
    fn test_column_rows() {
        let schema = Schema::default().add_table(
            Table::new("users").with_column(
                Column::new("email", "VARCHAR(255)")
                    .not_null()
                    .with_comment("login address"),
            ),
        );

        let doc = to_documentation(&schema, &ExportOptions::default());
        assert!(doc.contains("| email | VARCHAR(255) | NOT NULL | login address |"));
    }

    #[test]
    fn test_table_without_columns_has_no_markdown_table() {
        let schema = Schema::default().add_table(Table::new("empty"));
        let doc = to_documentation(&schema, &ExportOptions::default());
        assert!(doc.contains("## Table: empty\n"));
        assert!(!doc.contains("| Column |"));
    }
}
