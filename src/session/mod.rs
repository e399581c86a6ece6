//! Single-session editing state on top of the store.
//!
//! This module provides:
//! - Dirty tracking across schema mutations
//! - The debounced auto-save deadline (2 s after the last mutation,
//!   restarted on every mutation)
//! - Confirmation-gated destructive operations (delete table, clear
//!   canvas); declining leaves state unchanged
//!
//! Time is injected by the caller so the debounce is testable without
//! sleeping.

use crate::schema::Schema;
use crate::store::{KvStore, PersistenceError, SchemaStore};
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

/// Debounce window between the last mutation and the auto-save.
pub const AUTOSAVE_DEBOUNCE_MS: i64 = 2000;

/// Session-level failure.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The user declined a confirmation dialog for a destructive action.
    #[error("operation cancelled")]
    Cancelled,
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// The active editing session: one schema, one store, no concurrency.
#[derive(Debug)]
pub struct Session<S: KvStore> {
    schema: Schema,
    store: SchemaStore<S>,
    dirty: bool,
    autosave_at: Option<DateTime<Utc>>,
}

impl<S: KvStore> Session<S> {
    /// Start a session with the default empty schema.
    pub fn new(store: SchemaStore<S>) -> Self {
        Self {
            schema: Schema::default(),
            store,
            dirty: false,
            autosave_at: None,
        }
    }

    /// Start a session from the stored schema, falling back to the
    /// default document when nothing has been saved yet.
    pub fn open(store: SchemaStore<S>) -> Result<Self, SessionError> {
        let schema = store.load()?.unwrap_or_default();
        Ok(Self {
            schema,
            store,
            dirty: false,
            autosave_at: None,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Replace the schema with the result of a mutation, marking the
    /// session dirty and restarting the auto-save debounce.
    pub fn apply(&mut self, next: Schema, now: DateTime<Utc>) {
        self.schema = next;
        self.dirty = true;
        self.autosave_at = Some(now + Duration::milliseconds(AUTOSAVE_DEBOUNCE_MS));
    }

    /// Whether the debounced auto-save deadline has passed.
    pub fn autosave_due(&self, now: DateTime<Utc>) -> bool {
        self.autosave_at.is_some_and(|at| now >= at)
    }

    /// Run the auto-save if it is due. Returns whether a save happened.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<bool, SessionError> {
        if !self.autosave_due(now) {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Save immediately, clearing the dirty flag and any pending
    /// auto-save.
    pub fn save(&mut self) -> Result<(), SessionError> {
        self.schema = self.store.save(&self.schema)?;
        self.dirty = false;
        self.autosave_at = None;
        Ok(())
    }

    /// Replace the working schema with the stored one. Returns `false`
    /// (leaving state unchanged) when nothing has been saved.
    pub fn reload(&mut self) -> Result<bool, SessionError> {
        match self.store.load()? {
            Some(schema) => {
                self.schema = schema;
                self.dirty = false;
                self.autosave_at = None;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a table after confirmation. Declining returns
    /// [`SessionError::Cancelled`] and leaves the schema untouched.
    pub fn remove_table(
        &mut self,
        table_id: &str,
        now: DateTime<Utc>,
        confirm: impl FnOnce() -> bool,
    ) -> Result<(), SessionError> {
        if !confirm() {
            return Err(SessionError::Cancelled);
        }
        self.apply(self.schema.remove_table(table_id), now);
        Ok(())
    }

    /// Reset the canvas to the default empty document after confirmation.
    pub fn clear_canvas(
        &mut self,
        now: DateTime<Utc>,
        confirm: impl FnOnce() -> bool,
    ) -> Result<(), SessionError> {
        if !confirm() {
            return Err(SessionError::Cancelled);
        }
        self.apply(Schema::default(), now);
        Ok(())
    }
}
