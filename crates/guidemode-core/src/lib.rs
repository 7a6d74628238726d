//! # GuideMode Core
//!
//! The pipeline backbone of the GuideMode waveguide editor: it turns a
//! [`LayerStack`](guidemode_geometry::LayerStack) snapshot into a discrete
//! refractive-index grid and packages that grid for submission to an external
//! electromagnetic mode solver.
//!
//! ## Modules
//!
//! - [`types`] — Grid and request/response containers.
//! - [`raster`] — Painter's-algorithm rasterisation of the layer stack.
//! - [`export`] — Building the immutable solver request.
//! - [`solver`] — The [`solver::ModeSolver`] seam to the external service.
//!
//! The solver itself is an opaque collaborator: this crate validates nothing
//! about the returned mode data and forwards it unmodified.

pub mod export;
pub mod raster;
pub mod solver;
pub mod types;

pub use export::{build_request, validate_parameters};
pub use raster::{rasterise, rasterise_bounded, Domain};
pub use solver::{ModeSolver, SolverRequestError};
pub use types::{IndexGrid, ModeSet, SimulationRequest};
