//! JSON export: the canonical serialization of the schema value.

use crate::schema::Schema;

/// Pretty-print the schema as JSON.
///
/// Field order follows the model's declaration order; dates serialize as
/// ISO-8601 strings. This is the same shape the persistence adapter
/// stores, so an exported file can be re-imported as a saved schema.
pub fn to_json(schema: &Schema) -> String {
    serde_json::to_string_pretty(schema).unwrap_or_else(|_| "{}".to_string())
}
