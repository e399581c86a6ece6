//! Minimap projection of the canvas.

use super::{table_center, Point, Viewport};
use crate::schema::Table;

/// Scale factor from canvas coordinates to minimap coordinates.
pub const MINIMAP_SCALE: f64 = 0.1;

/// Minimap drawing area (width, height) the markers are clamped into.
pub const MINIMAP_BOUNDS: (f64, f64) = (180.0, 80.0);

/// A table marker inside the minimap bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimapMarker {
    pub table_id: String,
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned rectangle in minimap coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Project each table to a marker, scaled by [`MINIMAP_SCALE`] and clamped
/// into the minimap bounds.
pub fn minimap_markers(tables: &[Table]) -> Vec<MinimapMarker> {
    tables
        .iter()
        .map(|t| MinimapMarker {
            table_id: t.id.clone(),
            x: (t.x * MINIMAP_SCALE).clamp(0.0, MINIMAP_BOUNDS.0),
            y: (t.y * MINIMAP_SCALE).clamp(0.0, MINIMAP_BOUNDS.1),
        })
        .collect()
}

/// The viewport indicator rectangle: where the visible canvas area sits
/// within the minimap, given the view size in screen pixels.
pub fn viewport_indicator(viewport: &Viewport, view_width: f64, view_height: f64) -> MinimapRect {
    MinimapRect {
        left: (-viewport.pan.x * MINIMAP_SCALE).max(0.0),
        top: (-viewport.pan.y * MINIMAP_SCALE).max(0.0),
        width: (view_width * MINIMAP_SCALE / viewport.scale()).min(MINIMAP_BOUNDS.0),
        height: (view_height * MINIMAP_SCALE / viewport.scale()).min(MINIMAP_BOUNDS.1),
    }
}

/// Pan offset that would center the given table in the view.
///
/// Clicking a minimap marker requests recentering; applying the returned
/// pan is left to the caller.
pub fn recenter_request(table: &Table, viewport: &Viewport, view_width: f64, view_height: f64) -> Point {
    let center = table_center(table);
    Point::new(
        view_width / 2.0 - center.x * viewport.scale(),
        view_height / 2.0 - center.y * viewport.scale(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_scale_and_clamp() {
        let tables = vec![
            Table::new("near").at(300.0, 200.0),
            Table::new("far").at(5000.0, -100.0),
        ];

        let markers = minimap_markers(&tables);
        assert_eq!((markers[0].x, markers[0].y), (30.0, 20.0));
        // Clamped into the minimap bounds
        assert_eq!((markers[1].x, markers[1].y), (180.0, 0.0));
    }

    #[test]
    fn test_viewport_indicator_tracks_pan() {
        let mut viewport = Viewport::new();
        viewport.pan = Point::new(-400.0, -100.0);

        let rect = viewport_indicator(&viewport, 1280.0, 720.0);
        assert_eq!(rect.left, 40.0);
        assert_eq!(rect.top, 10.0);
        assert_eq!(rect.width, 128.0);
        assert_eq!(rect.height, 72.0);
    }

    #[test]
    fn test_recenter_request_centers_table() {
        let table = Table::new("users").at(500.0, 300.0);
        let viewport = Viewport::new();

        let pan = recenter_request(&table, &viewport, 1280.0, 720.0);
        // center = (625, 400); pan = view/2 - center at 100% zoom
        assert_eq!(pan, Point::new(15.0, -40.0));
    }
}
