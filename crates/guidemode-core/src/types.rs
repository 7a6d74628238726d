//! Core types shared across the GuideMode pipeline.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A discretised refractive-index field over the cross-section.
///
/// Cell `(i, j)` holds the index at the sample point
/// `x = (i + 0.5) dx`, `y = (j + 0.5) dy`; the first axis runs over x
/// (`nx` rows), the second over y (`ny` columns), matching the row-major
/// `index_map[i, j]` ordering the solver expects.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexGrid {
    data: Array2<f64>,
}

impl IndexGrid {
    /// Allocate an `nx × ny` grid with every cell set to `background_index`.
    pub fn filled(nx: usize, ny: usize, background_index: f64) -> Self {
        Self { data: Array2::from_elem((nx, ny), background_index) }
    }

    pub fn nx(&self) -> usize {
        self.data.nrows()
    }

    pub fn ny(&self) -> usize {
        self.data.ncols()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[[i, j]]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[[i, j]] = value;
    }

    /// Row-major nested copy of the grid (`nx` rows of `ny` values), the
    /// form the request boundary carries.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.data.iter()
    }
}

/// Immutable snapshot handed to the external mode solver.
///
/// Built once per "run" action; later layer-stack mutations do not affect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Refractive-index grid, row-major, `nx` rows of `ny` positive finite
    /// values.
    pub grid: Vec<Vec<f64>>,
    /// Design wavelength (nm).
    pub wavelength: f64,
    /// Grid spacing along x (µm).
    pub dx: f64,
    /// Grid spacing along y (µm).
    pub dy: f64,
}

/// Mode data returned by the external solver. Opaque to this crate; it is
/// forwarded to the display layer unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeSet {
    pub modes: Vec<Vec<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_grid_dimensions_and_values() {
        let grid = IndexGrid::filled(4, 3, 1.44);
        assert_eq!(grid.nx(), 4);
        assert_eq!(grid.ny(), 3);
        assert!(grid.iter().all(|&v| v == 1.44));
    }

    #[test]
    fn to_rows_is_row_major() {
        let mut grid = IndexGrid::filled(2, 3, 1.0);
        grid.set(1, 2, 3.48);
        let rows = grid.to_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![1.0, 1.0, 1.0]);
        assert_eq!(rows[1], vec![1.0, 1.0, 3.48]);
    }

    #[test]
    fn request_serialises_with_expected_fields() {
        let request = SimulationRequest {
            grid: vec![vec![1.0, 2.0]],
            wavelength: 1550.0,
            dx: 0.05,
            dy: 0.05,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["grid"][0][1], 2.0);
        assert_eq!(json["wavelength"], 1550.0);
        assert_eq!(json["dx"], 0.05);
    }

    #[test]
    fn mode_set_round_trips_opaquely() {
        let raw = r#"{"modes": [[0.0, 0.5], [1.0, 0.25]]}"#;
        let modes: ModeSet = serde_json::from_str(raw).unwrap();
        assert_eq!(modes.modes[1][0], 1.0);
    }
}
