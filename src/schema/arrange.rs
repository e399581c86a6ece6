//! Table auto-arrangement algorithms.

use super::Table;
use std::fmt;
use std::str::FromStr;

/// Origin of the arranged layout, in canvas pixels.
const GRID_ORIGIN: (f64, f64) = (50.0, 50.0);

/// Fixed cell spacing between arranged tables.
const GRID_SPACING: (f64, f64) = (300.0, 200.0);

/// Layout algorithm for repositioning tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArrangeAlgorithm {
    /// Square-ish grid: `columns = ceil(sqrt(n))`, row-major placement.
    #[default]
    Grid,
}

impl FromStr for ArrangeAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(ArrangeAlgorithm::Grid),
            _ => Err(format!("Unknown algorithm: {}. Valid options: grid", s)),
        }
    }
}

impl fmt::Display for ArrangeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArrangeAlgorithm::Grid => write!(f, "grid"),
        }
    }
}

/// Reposition tables in place using the given algorithm.
pub fn arrange(tables: &mut [Table], algorithm: ArrangeAlgorithm) {
    match algorithm {
        ArrangeAlgorithm::Grid => arrange_grid(tables),
    }
}

/// Lay tables out in a square-ish grid.
///
/// Table *i* lands at row `i / columns`, column `i % columns`, with
/// `columns = ceil(sqrt(n))`, fixed spacing and origin.
fn arrange_grid(tables: &mut [Table]) {
    if tables.is_empty() {
        return;
    }

    let columns = (tables.len() as f64).sqrt().ceil() as usize;

    for (i, table) in tables.iter_mut().enumerate() {
        let row = i / columns;
        let col = i % columns;
        table.x = GRID_ORIGIN.0 + col as f64 * GRID_SPACING.0;
        table.y = GRID_ORIGIN.1 + row as f64 * GRID_SPACING.1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(n: usize) -> Vec<Table> {
        (0..n)
            .map(|i| Table::new(format!("t{}", i)).at(999.0, 999.0))
            .collect()
    }

    #[test]
    fn test_grid_five_tables_uses_three_columns() {
        let mut tables = tables(5);
        arrange(&mut tables, ArrangeAlgorithm::Grid);

        // columns = ceil(sqrt(5)) = 3; index 3 lands at row 1, col 0
        assert_eq!((tables[0].x, tables[0].y), (50.0, 50.0));
        assert_eq!((tables[1].x, tables[1].y), (350.0, 50.0));
        assert_eq!((tables[2].x, tables[2].y), (650.0, 50.0));
        assert_eq!((tables[3].x, tables[3].y), (50.0, 250.0));
        assert_eq!((tables[4].x, tables[4].y), (350.0, 250.0));
    }

    #[test]
    fn test_grid_single_table_at_origin() {
        let mut tables = tables(1);
        arrange(&mut tables, ArrangeAlgorithm::Grid);
        assert_eq!((tables[0].x, tables[0].y), (50.0, 50.0));
    }

    #[test]
    fn test_grid_empty_is_noop() {
        let mut tables = tables(0);
        arrange(&mut tables, ArrangeAlgorithm::Grid);
        assert!(tables.is_empty());
    }

    #[test]
    fn test_algorithm_parsing() {
        assert_eq!("grid".parse::<ArrangeAlgorithm>(), Ok(ArrangeAlgorithm::Grid));
        assert_eq!("GRID".parse::<ArrangeAlgorithm>(), Ok(ArrangeAlgorithm::Grid));
        assert!("circle".parse::<ArrangeAlgorithm>().is_err());
    }
}
