//! Relationship-drawing gesture.

/// Endpoints of a relationship the user just drew. Tables are referenced
/// by id; the caller turns this into a `schema::Relationship`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRequest {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
}

/// Global relationship-creation mode, one at a time.
///
/// Clicking a foreign-key indicator starts the mode; clicking a column on
/// a *different* table emits a [`LinkRequest`] and exits; clicking empty
/// canvas cancels. Clicking a column on the source table is a no-op and
/// the mode stays active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LinkMode {
    #[default]
    Idle,
    Drawing {
        from_table: String,
        from_column: String,
    },
}

impl LinkMode {
    pub fn is_active(&self) -> bool {
        matches!(self, LinkMode::Drawing { .. })
    }

    /// Start drawing from a column's foreign-key indicator. Restarting
    /// while active re-anchors the gesture to the new source.
    pub fn begin(&mut self, table_id: impl Into<String>, column: impl Into<String>) {
        *self = LinkMode::Drawing {
            from_table: table_id.into(),
            from_column: column.into(),
        };
    }

    /// Click on a target column. Emits the request and exits the mode when
    /// the target sits on another table.
    pub fn complete(
        &mut self,
        table_id: impl Into<String>,
        column: impl Into<String>,
    ) -> Option<LinkRequest> {
        let (to_table, to_column) = (table_id.into(), column.into());
        match self {
            LinkMode::Drawing { from_table, .. } if *from_table == to_table => None,
            LinkMode::Drawing {
                from_table,
                from_column,
            } => {
                let request = LinkRequest {
                    from_table: std::mem::take(from_table),
                    from_column: std::mem::take(from_column),
                    to_table,
                    to_column,
                };
                *self = LinkMode::Idle;
                Some(request)
            }
            LinkMode::Idle => None,
        }
    }

    /// Click on empty canvas: exit without emitting.
    pub fn cancel(&mut self) {
        *self = LinkMode::Idle;
    }
}
