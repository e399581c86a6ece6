//! Unit tests for SQL, JSON, and Markdown export.

use chrono::{TimeZone, Utc};
use schema_flow::export::{
    export_file_name, generate, ExportFormat, ExportOptions, SqlDialect,
};
use schema_flow::schema::{Column, Relationship, Schema, Table};

fn sample_schema() -> Schema {
    let users = Table::new("users")
        .at(50.0, 50.0)
        .with_column(Column::new("id", "INT").primary_key())
        .with_column(Column::new("email", "VARCHAR(255)").not_null());
    let orders = Table::new("orders")
        .at(350.0, 50.0)
        .with_column(Column::new("id", "INT").primary_key())
        .with_column(Column::new("user_id", "INT").foreign_key());
    let (users_id, orders_id) = (users.id.clone(), orders.id.clone());

    Schema::default()
        .rename("shop")
        .add_table(users)
        .add_table(orders)
        .add_relationship(Relationship::new(orders_id, "user_id", users_id, "id"))
}

fn fixed_options() -> ExportOptions {
    ExportOptions::default().generated_at(Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap())
}

mod sql_tests {
    use super::*;

    #[test]
    fn test_empty_schema_returns_placeholder_literal() {
        let sql = generate(&Schema::default(), ExportFormat::Sql, &fixed_options());
        assert_eq!(sql, "-- No tables to export");
    }

    #[test]
    fn test_create_table_statement_body() {
        let sql = generate(&sample_schema(), ExportFormat::Sql, &fixed_options());
        assert!(sql.contains(
            "CREATE TABLE users (\n  id INT,\n  email VARCHAR(255) NOT NULL,\n  PRIMARY KEY (id)\n);\n"
        ));
    }

    #[test]
    fn test_header_block() {
        let sql = generate(&sample_schema(), ExportFormat::Sql, &fixed_options());
        assert!(sql.starts_with("-- Schema: shop\n-- Generated on: 2026-08-07T12:00:00.000Z\n"));
        assert!(sql.contains("-- Dialect: MYSQL\n"));
    }

    #[test]
    fn test_dialect_label_only_changes_header() {
        let mysql = generate(&sample_schema(), ExportFormat::Sql, &fixed_options());
        let oracle = generate(
            &sample_schema(),
            ExportFormat::Sql,
            &fixed_options().with_dialect(SqlDialect::Oracle),
        );

        assert!(oracle.contains("-- Dialect: ORACLE"));
        // Identical apart from the header label
        assert_eq!(
            mysql.replace("-- Dialect: MYSQL", ""),
            oracle.replace("-- Dialect: ORACLE", "")
        );
    }

    #[test]
    fn test_default_value_quoting_rules() {
        let schema = Schema::default().add_table(
            Table::new("settings")
                .with_column(Column::new("status", "VARCHAR(50)").with_default("active"))
                .with_column(Column::new("retries", "INT").with_default("0")),
        );

        let sql = generate(&schema, ExportFormat::Sql, &fixed_options());
        assert!(sql.contains("  status VARCHAR(50) DEFAULT 'active'"));
        assert!(sql.contains("  retries INT DEFAULT 0"));
    }

    #[test]
    fn test_foreign_key_constraint_block() {
        let sql = generate(&sample_schema(), ExportFormat::Sql, &fixed_options());
        assert!(sql.contains("-- Foreign Key Constraints\n"));
        assert!(sql.contains(
            "ALTER TABLE orders ADD CONSTRAINT fk_orders_user_id FOREIGN KEY (user_id) REFERENCES users(id);"
        ));
    }

    #[test]
    fn test_constraints_follow_all_create_statements() {
        let sql = generate(&sample_schema(), ExportFormat::Sql, &fixed_options());
        let fk = sql.find("-- Foreign Key Constraints").unwrap();
        let last_create = sql.rfind("CREATE TABLE").unwrap();
        assert!(fk > last_create);
    }

    #[test]
    fn test_drop_statements_precede_creates() {
        let sql = generate(
            &sample_schema(),
            ExportFormat::Sql,
            &fixed_options().with_drop_statements(),
        );
        assert!(sql.contains("DROP TABLE IF EXISTS users;\nDROP TABLE IF EXISTS orders;\n"));
        assert!(sql.find("DROP TABLE").unwrap() < sql.find("CREATE TABLE").unwrap());
    }
}

mod json_tests {
    use super::*;

    #[test]
    fn test_json_round_trips_through_serde() {
        let schema = sample_schema();
        let text = generate(&schema, ExportFormat::Json, &fixed_options());

        let parsed: Schema = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, schema);
    }

    #[test]
    fn test_json_serializes_dates_as_iso_8601() {
        let text = generate(&sample_schema(), ExportFormat::Json, &fixed_options());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        let created = value["createdAt"].as_str().unwrap();
        assert!(created.contains('T'));
        assert!(chrono::DateTime::parse_from_rfc3339(created).is_ok());
    }
}

mod documentation_tests {
    use super::*;

    #[test]
    fn test_empty_schema_returns_placeholder_literal() {
        let doc = generate(&Schema::default(), ExportFormat::Documentation, &fixed_options());
        assert_eq!(doc, "# No tables to document");
    }

    #[test]
    fn test_constraint_cell_order_and_fallbacks() {
        let schema = Schema::default().add_table(
            Table::new("users")
                .with_column(
                    Column::new("id", "INT")
                        .primary_key()
                        .not_null()
                        .auto_increment(),
                )
                .with_column(Column::new("bio", "TEXT").with_comment("profile text")),
        );

        let doc = generate(&schema, ExportFormat::Documentation, &fixed_options());
        assert!(doc.contains("| id | INT | PK, NOT NULL, AUTO_INCREMENT | - |"));
        assert!(doc.contains("| bio | TEXT | - | profile text |"));
    }

    #[test]
    fn test_header_counts_tables() {
        let doc = generate(&sample_schema(), ExportFormat::Documentation, &fixed_options());
        assert!(doc.contains("**Schema Name:** shop"));
        assert!(doc.contains("**Total Tables:** 2"));
    }
}

mod file_name_tests {
    use super::*;

    #[test]
    fn test_file_name_uses_schema_name_and_extension() {
        let schema = sample_schema();
        assert_eq!(export_file_name(&schema, ExportFormat::Sql), "shop.sql");
        assert_eq!(export_file_name(&schema, ExportFormat::Json), "shop.json");
        assert_eq!(export_file_name(&schema, ExportFormat::Documentation), "shop.md");
    }
}
