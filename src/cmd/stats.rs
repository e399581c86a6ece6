use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// JSON output shape for `stats --json`.
#[derive(Debug, Serialize)]
pub struct StatsJsonOutput {
    pub schema: String,
    pub table_count: usize,
    pub column_count: usize,
    pub relationship_count: usize,
    pub tables_without_primary_key: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub fn run(json: bool, store_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let store = super::open_store(store_dir)?;
    let schema = super::load_required(&store)?;

    let column_count: usize = schema.iter().map(|t| t.columns.len()).sum();
    let without_pk = schema.iter().filter(|t| !t.has_primary_key()).count();

    let output = StatsJsonOutput {
        schema: schema.name.clone(),
        table_count: schema.len(),
        column_count,
        relationship_count: schema.relationships.len(),
        tables_without_primary_key: without_pk,
        created_at: schema.created_at,
        updated_at: schema.updated_at,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!("Schema: {}", output.schema);
        eprintln!("  Tables: {}", output.table_count);
        eprintln!("  Columns: {}", output.column_count);
        eprintln!("  Relationships: {}", output.relationship_count);
        eprintln!("  Tables without primary key: {}", output.tables_without_primary_key);
        eprintln!("  Created: {}", output.created_at);
        eprintln!("  Updated: {}", output.updated_at);
    }

    Ok(())
}
