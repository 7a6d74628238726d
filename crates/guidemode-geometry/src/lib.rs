//! # GuideMode Geometry
//!
//! Geometry handling for the GuideMode waveguide editor. This crate provides:
//!
//! - **Shape primitives** ([`primitives`]) — Polygons and ellipses in the 2D
//!   cross-section plane, with point-membership tests and bounding boxes.
//! - **Coordinate-spec parsing** ([`parse`]) — The validation boundary for
//!   textual coordinate input from editor forms.
//! - **Layer stack** ([`layers`]) — The ordered, id-addressed collection of
//!   primitives that defines the compositing z-order.
//!
//! Primitives are immutable once constructed; the only revision path is to
//! delete an entry from the stack and add a replacement.

pub mod error;
pub mod layers;
pub mod parse;
pub mod primitives;

pub use error::{IndexError, ValidationError};
pub use layers::{Layer, LayerId, LayerStack};
pub use primitives::{Primitive, Shape};
