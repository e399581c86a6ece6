//! Canvas interaction engine.
//!
//! This module provides:
//! - Pointer-driven table dragging with snap-to-grid
//! - Canvas panning and stepped zoom, combined into one affine transform
//! - The relationship-drawing gesture (one global mode at a time)
//! - Search visibility filtering and minimap projection
//!
//! Everything here is pure state over `Point` values; rendering and DOM
//! event plumbing live outside this crate.

mod drag;
mod link;
mod minimap;

pub use drag::{DragSession, DragState, TableMoved};
pub use link::{LinkMode, LinkRequest};
pub use minimap::{
    minimap_markers, recenter_request, viewport_indicator, MinimapMarker, MinimapRect,
    MINIMAP_BOUNDS, MINIMAP_SCALE,
};

use crate::schema::Table;
use std::ops::{Add, Sub};

/// Grid unit for snap-to-grid, in canvas pixels.
pub const GRID_SIZE: f64 = 20.0;

/// Horizontal offset from a table's origin to its visual center.
pub const TABLE_CENTER_X: f64 = 125.0;

/// Vertical offset from a table's origin to its visual center.
pub const TABLE_CENTER_Y: f64 = 100.0;

/// Zoom bounds and step, in percent.
const ZOOM_MIN: u32 = 25;
const ZOOM_MAX: u32 = 200;
const ZOOM_STEP: u32 = 25;

/// A point in canvas or screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Round both coordinates to the nearest grid multiple.
pub fn snap_to_grid(p: Point) -> Point {
    Point::new(
        (p.x / GRID_SIZE).round() * GRID_SIZE,
        (p.y / GRID_SIZE).round() * GRID_SIZE,
    )
}

/// A table's visual center on the canvas.
pub fn table_center(table: &Table) -> Point {
    Point::new(table.x + TABLE_CENTER_X, table.y + TABLE_CENTER_Y)
}

/// Pan offset and zoom, combined into `translate(pan) then scale(zoom/100)`.
///
/// The same transform applies to the table layer and the relationship-line
/// overlay so both stay visually synchronized.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub pan: Point,
    zoom: u32,
    pan_grab: Option<Point>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            pan: Point::default(),
            zoom: 100,
            pan_grab: None,
        }
    }

    /// Zoom percentage (25–200).
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Scale factor applied after translation.
    pub fn scale(&self) -> f64 {
        self.zoom as f64 / 100.0
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(ZOOM_MIN);
    }

    pub fn zoom_reset(&mut self) {
        self.zoom = 100;
    }

    /// Canvas point to screen point.
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x * self.scale(), p.y * self.scale()) + self.pan
    }

    /// Screen point back to canvas coordinates.
    pub fn to_canvas(&self, p: Point) -> Point {
        let translated = p - self.pan;
        Point::new(translated.x / self.scale(), translated.y / self.scale())
    }

    /// Start a pan gesture from a pointer-down on empty canvas; captures
    /// the pointer offset relative to the current pan.
    pub fn begin_pan(&mut self, pointer: Point) {
        self.pan_grab = Some(pointer - self.pan);
    }

    /// Update the pan from a pointer-move. No-op outside a pan gesture.
    pub fn pan_to(&mut self, pointer: Point) {
        if let Some(grab) = self.pan_grab {
            self.pan = pointer - grab;
        }
    }

    /// Finish the pan gesture.
    pub fn end_pan(&mut self) {
        self.pan_grab = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_grab.is_some()
    }
}

/// Cubic curve between two table centers for the relationship overlay.
///
/// Control points sit at 30% of the horizontal delta, keeping the curve
/// flat near each endpoint. Rendering data only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelationshipCurve {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

/// Compute the relationship curve between two tables.
pub fn relationship_curve(from: &Table, to: &Table) -> RelationshipCurve {
    let start = table_center(from);
    let end = table_center(to);
    let dx = end.x - start.x;

    RelationshipCurve {
        start,
        control1: Point::new(start.x + dx * 0.3, start.y),
        control2: Point::new(end.x - dx * 0.3, end.y),
        end,
    }
}

/// Whether a table is visible under the given search term.
///
/// A table matches if its name or any column name contains the term,
/// case-insensitively. An empty term shows everything. Filtering affects
/// visibility only; the schema data is untouched.
pub fn matches_search(table: &Table, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    table.name.to_lowercase().contains(&needle)
        || table
            .columns
            .iter()
            .any(|c| c.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Column, Table};

    #[test]
    fn test_snap_rounds_to_nearest_twenty() {
        assert_eq!(snap_to_grid(Point::new(29.0, 31.0)), Point::new(20.0, 40.0));
        assert_eq!(snap_to_grid(Point::new(-9.0, 10.0)), Point::new(0.0, 20.0));
        assert_eq!(snap_to_grid(Point::new(40.0, 60.0)), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_zoom_steps_and_clamps() {
        let mut view = Viewport::new();
        assert_eq!(view.zoom(), 100);

        for _ in 0..10 {
            view.zoom_in();
        }
        assert_eq!(view.zoom(), 200);

        for _ in 0..10 {
            view.zoom_out();
        }
        assert_eq!(view.zoom(), 25);

        view.zoom_reset();
        assert_eq!(view.zoom(), 100);
    }

    #[test]
    fn test_transform_round_trip() {
        let mut view = Viewport::new();
        view.pan = Point::new(40.0, -10.0);
        view.zoom_out(); // 75%

        let p = Point::new(260.0, 140.0);
        let screen = view.to_screen(p);
        let back = view.to_canvas(screen);
        assert!((back.x - p.x).abs() < 1e-9);
        assert!((back.y - p.y).abs() < 1e-9);
    }

    #[test]
    fn test_pan_gesture_tracks_pointer() {
        let mut view = Viewport::new();
        view.pan = Point::new(10.0, 10.0);

        view.begin_pan(Point::new(100.0, 100.0));
        view.pan_to(Point::new(130.0, 90.0));
        assert_eq!(view.pan, Point::new(40.0, 0.0));

        view.end_pan();
        view.pan_to(Point::new(500.0, 500.0));
        assert_eq!(view.pan, Point::new(40.0, 0.0));
    }

    #[test]
    fn test_relationship_curve_control_points() {
        let from = Table::new("a").at(0.0, 0.0);
        let to = Table::new("b").at(400.0, 200.0);
        let curve = relationship_curve(&from, &to);

        assert_eq!(curve.start, Point::new(125.0, 100.0));
        assert_eq!(curve.end, Point::new(525.0, 300.0));
        // dx = 400; control points offset by 30% of dx, flat in y
        assert_eq!(curve.control1, Point::new(245.0, 100.0));
        assert_eq!(curve.control2, Point::new(405.0, 300.0));
    }

    #[test]
    fn test_search_matches_name_and_columns() {
        let table = Table::new("orders").with_column(Column::new("customer_email", "VARCHAR(255)"));

        assert!(matches_search(&table, ""));
        assert!(matches_search(&table, "ORD"));
        assert!(matches_search(&table, "Email"));
        assert!(!matches_search(&table, "invoice"));
    }
}
