//! Building the solver request from a rasterised grid.
//!
//! The request is an immutable snapshot: once built, later layer-stack
//! mutations cannot affect it. Grid values are copied out row-major,
//! consistent with the `nx × ny` dimensions the solver expects.

use guidemode_geometry::ValidationError;

use crate::types::{IndexGrid, SimulationRequest};

/// Package a grid and simulation parameters into a [`SimulationRequest`].
///
/// `wavelength` is in nanometres and must be finite and > 0; `dx`/`dy` are
/// the grid spacings in micrometres and are re-checked at this boundary
/// since the request may travel far from the rasteriser that produced it.
pub fn build_request(
    grid: &IndexGrid,
    wavelength: f64,
    dx: f64,
    dy: f64,
) -> Result<SimulationRequest, ValidationError> {
    validate_parameters(wavelength, dx, dy)?;
    Ok(SimulationRequest { grid: grid.to_rows(), wavelength, dx, dy })
}

/// Check the request parameters without building anything, so a job can be
/// vetted up front with the same rules [`build_request`] enforces.
pub fn validate_parameters(wavelength: f64, dx: f64, dy: f64) -> Result<(), ValidationError> {
    if !wavelength.is_finite() {
        return Err(ValidationError::NonFinite { what: "wavelength" });
    }
    if wavelength <= 0.0 {
        return Err(ValidationError::NonPositive { what: "wavelength", value: wavelength });
    }
    for (what, value) in [("dx", dx), ("dy", dy)] {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { what });
        }
        if value <= 0.0 {
            return Err(ValidationError::NonPositive { what, value });
        }
    }
    Ok(())
}
