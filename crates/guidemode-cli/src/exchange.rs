//! File-exchange implementation of the [`ModeSolver`] seam.
//!
//! The external solver is reached by dropping the request JSON in a shared
//! location and reading back a `{"modes": [[..]]}` document. This is the
//! transport the CLI ships; a networked implementation plugs into the same
//! trait without touching the pipeline.

use std::path::PathBuf;

use guidemode_core::{ModeSet, ModeSolver, SimulationRequest, SolverRequestError};

/// Reads the solver's response from a JSON file.
pub struct FileExchangeSolver {
    response_path: PathBuf,
}

impl FileExchangeSolver {
    pub fn new(response_path: impl Into<PathBuf>) -> Self {
        Self { response_path: response_path.into() }
    }
}

impl ModeSolver for FileExchangeSolver {
    fn solve(&self, _request: &SimulationRequest) -> Result<ModeSet, SolverRequestError> {
        let raw = std::fs::read_to_string(&self.response_path).map_err(|e| {
            SolverRequestError::Transport(format!(
                "reading {}: {}",
                self.response_path.display(),
                e
            ))
        })?;

        let value: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| SolverRequestError::MalformedResponse(e.to_string()))?;

        // The service reports failures as an {"error": ...} document.
        if let Some(err) = value.get("error") {
            return Err(SolverRequestError::Rejected(err.to_string()));
        }

        serde_json::from_value(value)
            .map_err(|e| SolverRequestError::MalformedResponse(e.to_string()))
    }

    fn endpoint(&self) -> &str {
        "file exchange"
    }
}
