//! TOML configuration deserialisation for rasterisation jobs.

use serde::Deserialize;

use guidemode_core::Domain;

/// Top-level job configuration.
#[derive(Debug, Deserialize)]
pub struct JobConfig {
    pub domain: Domain,
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub layer: Vec<LayerConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub solver: SolverConfig,
}

/// Simulation parameters from TOML.
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    /// Design wavelength (nm).
    pub wavelength_nm: f64,
    /// Upper bound on grid cells before rasterisation is refused.
    #[serde(default = "default_max_cells")]
    pub max_cells: usize,
}

fn default_max_cells() -> usize {
    16_000_000
}

/// A single layer in the cross-section, bottom-to-top file order.
#[derive(Debug, Deserialize)]
pub struct LayerConfig {
    pub name: String,
    /// Material identifier: "Silicon", "Silica", "Air", or "Custom".
    pub material: String,
    /// Refractive index, required when material = "Custom".
    #[serde(default)]
    pub index: Option<f64>,
    #[serde(flatten)]
    pub shape: ShapeConfig,
}

/// Shape specification for a layer.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeConfig {
    Polygon { vertices: Vec<[f64; 2]> },
    Ellipse { centre: [f64; 2], radii: [f64; 2] },
}

/// Output configuration.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Output directory (default: "./output").
    #[serde(default = "default_output_dir")]
    pub directory: String,
    /// Whether to write the solver request as JSON (default: true).
    #[serde(default = "default_true")]
    pub save_request: bool,
    /// Whether to write returned modes as CSV (default: true).
    #[serde(default = "default_true")]
    pub save_modes_csv: bool,
    /// Whether to also pass the raw modes JSON through (default: false).
    #[serde(default)]
    pub save_modes_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_dir(),
            save_request: true,
            save_modes_csv: true,
            save_modes_json: false,
        }
    }
}

fn default_output_dir() -> String {
    "./output".into()
}
fn default_true() -> bool {
    true
}

/// External solver exchange configuration.
#[derive(Debug, Default, Deserialize)]
pub struct SolverConfig {
    /// Path to a solver response document (`{"modes": [[..]]}`). When unset,
    /// the run stops after writing the request.
    #[serde(default)]
    pub response_file: Option<String>,
}

/// Load and parse a TOML job configuration file.
pub fn load_config(path: &std::path::Path) -> anyhow::Result<JobConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: JobConfig = toml::from_str(&content)?;
    Ok(config)
}
