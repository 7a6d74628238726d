//! The seam to the external electromagnetic mode solver.
//!
//! The [`ModeSolver`] trait abstracts over how a [`SimulationRequest`]
//! reaches the solver service, so the pipeline and the editing session stay
//! transport-agnostic. There is no built-in retry: a failed call surfaces a
//! [`SolverRequestError`] to the caller and leaves the layer stack and grid
//! untouched.

use thiserror::Error;

use crate::types::{ModeSet, SimulationRequest};

/// Failure of the external solver call.
#[derive(Debug, Error)]
pub enum SolverRequestError {
    #[error("Could not reach the solver: {0}")]
    Transport(String),

    #[error("Solver rejected the request: {0}")]
    Rejected(String),

    #[error("Malformed solver response: {0}")]
    MalformedResponse(String),
}

/// Submits simulation requests to an external mode solver.
///
/// Implementations own the transport (HTTP endpoint, file exchange, an
/// in-process stub for tests); they never interpret the returned mode data.
pub trait ModeSolver {
    /// Submit a request and wait for the solver's `{modes}` result.
    fn solve(&self, request: &SimulationRequest) -> Result<ModeSet, SolverRequestError>;

    /// Human-readable name of the solver endpoint, for logs.
    fn endpoint(&self) -> &str;
}
