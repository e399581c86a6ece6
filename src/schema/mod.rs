//! In-memory schema model for the canvas designer.
//!
//! This module provides:
//! - Data models for schemas, tables, columns, and relationships
//! - Pure copy-on-write operations (every edit returns a new `Schema`)
//! - Cascade removal of relationships when a table is deleted
//! - Grid auto-arrangement of table positions
//!
//! Relationships reference tables by their stable id, not by name, so
//! renaming a table never detaches its relationships.

mod arrange;

pub use arrange::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Default schema name shown before the user renames it.
pub const DEFAULT_SCHEMA_NAME: &str = "Untitled Schema";

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// Generate a unique entity id with the given prefix.
///
/// Ids embed a millisecond timestamp plus a process-local sequence number
/// so that entities created within the same millisecond stay distinct.
pub fn fresh_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}_{millis}_{seq}")
}

/// Column definition within a table.
///
/// `column_type` is a free-form SQL type token (`VARCHAR(255)`, `INT`, ...);
/// no normalization happens at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_foreign_key: bool,
    #[serde(default)]
    pub is_not_null: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub is_auto_increment: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

impl Column {
    /// Create a plain column with no constraint flags set.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            id: fresh_id("col"),
            name: name.into(),
            column_type: column_type.into(),
            is_primary_key: false,
            is_foreign_key: false,
            is_not_null: false,
            is_unique: false,
            is_auto_increment: false,
            default_value: None,
            comment: None,
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn foreign_key(mut self) -> Self {
        self.is_foreign_key = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.is_not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.is_auto_increment = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Whether a `DEFAULT` clause should be emitted for this column.
    /// An empty default value counts as absent.
    pub fn has_default(&self) -> bool {
        self.default_value.as_deref().is_some_and(|v| !v.is_empty())
    }
}

/// A named set of columns with a canvas position.
///
/// `x`/`y` are canvas coordinates in pixels at 100% zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    /// Create an empty table at the canvas origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: fresh_id("table"),
            name: name.into(),
            x: 0.0,
            y: 0.0,
            columns: Vec::new(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Get a column by name (case-insensitive).
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Columns flagged as primary key, in table order.
    pub fn primary_key_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_primary_key).collect()
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(|c| c.is_primary_key)
    }
}

/// A directed foreign-key link between two table/column pairs.
///
/// `from_table`/`to_table` are table ids; `from_column`/`to_column` are
/// column names within those tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: String,
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub created_at: DateTime<Utc>,
}

impl Relationship {
    pub fn new(
        from_table: impl Into<String>,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
    ) -> Self {
        Self {
            id: fresh_id("rel"),
            from_table: from_table.into(),
            from_column: from_column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
            created_at: Utc::now(),
        }
    }
}

/// The full document being edited: tables plus relationships.
///
/// The schema exclusively owns its tables and relationships; every
/// operation replaces them wholesale and stamps `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: fresh_id("schema"),
            name: name.into(),
            tables: Vec::new(),
            relationships: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Get a table by id.
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// Get a table by name (case-insensitive).
    pub fn table_by_name(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    /// Build a table with the next default name (`Table_<n+1>`) and a
    /// random canvas position in `x ∈ [100, 500)`, `y ∈ [100, 400)`.
    pub fn new_table(&self) -> Table {
        use rand::RngExt;
        let mut rng = rand::rng();
        Table::new(format!("Table_{}", self.tables.len() + 1)).at(
            rng.random_range(100.0..500.0),
            rng.random_range(100.0..400.0),
        )
    }

    /// Add a table, returning the new schema.
    pub fn add_table(&self, table: Table) -> Schema {
        let mut next = self.clone();
        next.tables.push(table);
        next.touch()
    }

    /// Upsert a table by id: replaces an existing table with the same id,
    /// or appends it if no table matches.
    pub fn update_table(&self, table: Table) -> Schema {
        let mut next = self.clone();
        match next.tables.iter_mut().find(|t| t.id == table.id) {
            Some(slot) => *slot = table,
            None => next.tables.push(table),
        }
        next.touch()
    }

    /// Remove a table by id, cascading removal of every relationship whose
    /// `from_table` or `to_table` matches that id.
    pub fn remove_table(&self, table_id: &str) -> Schema {
        let mut next = self.clone();
        next.tables.retain(|t| t.id != table_id);
        next.relationships
            .retain(|r| r.from_table != table_id && r.to_table != table_id);
        next.touch()
    }

    /// Move a table to a new canvas position.
    pub fn move_table(&self, table_id: &str, x: f64, y: f64) -> Schema {
        let mut next = self.clone();
        if let Some(table) = next.tables.iter_mut().find(|t| t.id == table_id) {
            table.x = x;
            table.y = y;
        }
        next.touch()
    }

    pub fn add_relationship(&self, relationship: Relationship) -> Schema {
        let mut next = self.clone();
        next.relationships.push(relationship);
        next.touch()
    }

    pub fn remove_relationship(&self, relationship_id: &str) -> Schema {
        let mut next = self.clone();
        next.relationships.retain(|r| r.id != relationship_id);
        next.touch()
    }

    /// Rename the schema itself.
    pub fn rename(&self, name: impl Into<String>) -> Schema {
        let mut next = self.clone();
        next.name = name.into();
        next.touch()
    }

    /// Reposition all tables using the given layout algorithm.
    pub fn auto_arrange(&self, algorithm: ArrangeAlgorithm) -> Schema {
        let mut next = self.clone();
        arrange(&mut next.tables, algorithm);
        next.touch()
    }

    fn touch(mut self) -> Schema {
        self.updated_at = Utc::now();
        self
    }
}

impl Default for Schema {
    /// The initial document: id `default`, name `Untitled Schema`, empty.
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: "default".to_string(),
            name: DEFAULT_SCHEMA_NAME.to_string(),
            tables: Vec::new(),
            relationships: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
