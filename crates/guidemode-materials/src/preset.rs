//! Material preset table and index resolution.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Refractive index of silicon at 1550 nm.
pub const SILICON_N: f64 = 3.48;
/// Refractive index of fused silica at 1550 nm.
pub const SILICA_N: f64 = 1.44;
/// Refractive index of air.
pub const AIR_N: f64 = 1.0;

/// Errors from material resolution.
#[derive(Debug, Error)]
pub enum MaterialError {
    #[error("Unknown material: '{0}'. Valid identifiers: Silicon, Silica, Air, Custom")]
    Unknown(String),

    #[error("Custom material requires a refractive index, none was given")]
    MissingCustomIndex,

    #[error("Refractive index must be finite and > 0, got {0}")]
    InvalidIndex(f64),
}

/// A material assignable to a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Silicon,
    Silica,
    Air,
    /// User-supplied index; the value lives on the primitive, not here.
    Custom,
}

impl Material {
    /// Parse a material identifier string (case-sensitive, as entered in the
    /// editor's material dropdown).
    pub fn from_name(name: &str) -> Result<Self, MaterialError> {
        match name {
            "Silicon" => Ok(Material::Silicon),
            "Silica" => Ok(Material::Silica),
            "Air" => Ok(Material::Air),
            "Custom" => Ok(Material::Custom),
            other => Err(MaterialError::Unknown(other.to_string())),
        }
    }

    /// Human-readable preset name.
    pub fn name(&self) -> &'static str {
        match self {
            Material::Silicon => "Silicon",
            Material::Silica => "Silica",
            Material::Air => "Air",
            Material::Custom => "Custom",
        }
    }

    /// Resolve the refractive index for this material.
    ///
    /// Presets ignore `custom`; `Custom` requires it to be present, finite
    /// and strictly positive.
    pub fn resolve_index(&self, custom: Option<f64>) -> Result<f64, MaterialError> {
        match self {
            Material::Silicon => Ok(SILICON_N),
            Material::Silica => Ok(SILICA_N),
            Material::Air => Ok(AIR_N),
            Material::Custom => {
                let n = custom.ok_or(MaterialError::MissingCustomIndex)?;
                if !n.is_finite() || n <= 0.0 {
                    return Err(MaterialError::InvalidIndex(n));
                }
                Ok(n)
            }
        }
    }
}
