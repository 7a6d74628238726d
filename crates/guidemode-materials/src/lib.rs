//! # GuideMode Materials
//!
//! Material presets for the GuideMode waveguide editor. Each preset maps to a
//! fixed real refractive index at telecom wavelengths; the `Custom` material
//! carries a user-supplied value instead.
//!
//! ## Available presets
//!
//! | Identifier | Refractive index |
//! |-----------|-----------------|
//! | `Silicon` | 3.48 |
//! | `Silica`  | 1.44 |
//! | `Air`     | 1.0  |
//! | `Custom`  | user-supplied, finite and > 0 |
//!
//! Dispersion is deliberately not modelled here: the editor composes a
//! cross-section at a single design wavelength and the external solver
//! receives plain index values.

pub mod preset;

pub use preset::{Material, MaterialError};
