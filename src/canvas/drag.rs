//! Table drag state machine.

use super::{snap_to_grid, Point};

/// Final position committed when a drag ends.
///
/// Exactly one event per completed drag; intermediate frames only update
/// the transient position.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMoved {
    pub table_id: String,
    pub position: Point,
}

/// Per-table drag state: `Idle → Dragging → Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        table_id: String,
        /// Pointer offset relative to the table origin, captured at press.
        grab: Point,
        /// Transient position, updated every pointer-move.
        position: Point,
    },
}

/// Drives one drag gesture from pointer events.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    state: DragState,
    snap: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable snap-to-grid: moved positions round to the nearest grid
    /// multiple before being applied.
    pub fn with_snap(mut self) -> Self {
        self.snap = true;
        self
    }

    pub fn set_snap(&mut self, snap: bool) {
        self.snap = snap;
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer-down within a table's hit region; captures the pointer
    /// offset relative to the table's current position. Ignored while a
    /// drag is already active.
    pub fn press(&mut self, table_id: impl Into<String>, table_position: Point, pointer: Point) {
        if self.is_dragging() {
            return;
        }
        self.state = DragState::Dragging {
            table_id: table_id.into(),
            grab: pointer - table_position,
            position: table_position,
        };
    }

    /// Pointer-move while dragging. Returns the transient position for
    /// visual feedback, or `None` when idle.
    pub fn drag(&mut self, pointer: Point) -> Option<Point> {
        let snap = self.snap;
        match &mut self.state {
            DragState::Dragging { grab, position, .. } => {
                let mut next = pointer - *grab;
                if snap {
                    next = snap_to_grid(next);
                }
                *position = next;
                Some(next)
            }
            DragState::Idle => None,
        }
    }

    /// Pointer-up: commits the final position as a single [`TableMoved`]
    /// event and returns to idle. `None` when no drag was active.
    pub fn release(&mut self) -> Option<TableMoved> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging {
                table_id, position, ..
            } => Some(TableMoved { table_id, position }),
            DragState::Idle => None,
        }
    }
}
