//! Shape primitives for the waveguide cross-section.
//!
//! Each primitive defines a closed region of the 2D cross-section plane that
//! the rasteriser samples into a refractive-index grid. Shapes are fully
//! described by their parameters and carry no handle to any drawing surface;
//! a canvas holds id references into the layer stack and rebuilds its visuals
//! from here, never the reverse.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use guidemode_materials::Material;

/// A closed 2D region in the cross-section plane (coordinates in µm).
///
/// Deserialisation goes through the validated constructors, so a decoded
/// shape upholds the same invariants as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", try_from = "ShapeRepr")]
pub enum Shape {
    Polygon(Polygon),
    Ellipse(Ellipse),
}

/// Raw wire form of [`Shape`], before validation.
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ShapeRepr {
    Polygon(Polygon),
    Ellipse(Ellipse),
}

impl TryFrom<ShapeRepr> for Shape {
    type Error = ValidationError;

    fn try_from(repr: ShapeRepr) -> Result<Self, Self::Error> {
        match repr {
            ShapeRepr::Polygon(p) => Shape::polygon(p.vertices),
            ShapeRepr::Ellipse(e) => Shape::ellipse(e.centre, e.radii),
        }
    }
}

/// A simple polygon defined by its vertex ring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    /// Vertices in ring order (µm). The last vertex is implicitly joined to
    /// the first.
    pub vertices: Vec<[f64; 2]>,
}

/// An axis-aligned ellipse defined by its centre and semi-axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    /// Centre position (µm).
    pub centre: [f64; 2],
    /// Semi-axes along x and y (µm).
    pub radii: [f64; 2],
}

impl Shape {
    /// Construct a polygon, validating the vertex ring.
    ///
    /// Fails if any coordinate is non-finite or if fewer than 3 *distinct*
    /// vertices remain after collapsing exact duplicates.
    pub fn polygon(vertices: Vec<[f64; 2]>) -> Result<Self, ValidationError> {
        for v in &vertices {
            if !v[0].is_finite() || !v[1].is_finite() {
                return Err(ValidationError::NonFinite { what: "polygon vertex" });
            }
        }
        let mut distinct: Vec<[f64; 2]> = Vec::with_capacity(vertices.len());
        for v in &vertices {
            if !distinct.contains(v) {
                distinct.push(*v);
            }
        }
        if distinct.len() < 3 {
            return Err(ValidationError::TooFewVertices { got: distinct.len() });
        }
        Ok(Shape::Polygon(Polygon { vertices }))
    }

    /// Construct an ellipse, validating centre and semi-axes.
    pub fn ellipse(centre: [f64; 2], radii: [f64; 2]) -> Result<Self, ValidationError> {
        if !centre[0].is_finite() || !centre[1].is_finite() {
            return Err(ValidationError::NonFinite { what: "ellipse centre" });
        }
        for r in radii {
            if !r.is_finite() {
                return Err(ValidationError::NonFinite { what: "ellipse radius" });
            }
            if r <= 0.0 {
                return Err(ValidationError::NonPositive { what: "ellipse radius", value: r });
            }
        }
        Ok(Shape::Ellipse(Ellipse { centre, radii }))
    }

    /// Check whether a point lies inside this shape. Boundary points count
    /// as inside, which keeps rasterisation deterministic across shapes.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Shape::Polygon(p) => point_in_ring(x, y, &p.vertices),
            Shape::Ellipse(e) => {
                let u = (x - e.centre[0]) / e.radii[0];
                let v = (y - e.centre[1]) / e.radii[1];
                u * u + v * v <= 1.0
            }
        }
    }

    /// Axis-aligned bounding box: returns (min_corner, max_corner).
    pub fn bounding_box(&self) -> ([f64; 2], [f64; 2]) {
        match self {
            Shape::Polygon(p) => {
                let mut min = [f64::INFINITY, f64::INFINITY];
                let mut max = [f64::NEG_INFINITY, f64::NEG_INFINITY];
                for v in &p.vertices {
                    for axis in 0..2 {
                        min[axis] = min[axis].min(v[axis]);
                        max[axis] = max[axis].max(v[axis]);
                    }
                }
                (min, max)
            }
            Shape::Ellipse(e) => (
                [e.centre[0] - e.radii[0], e.centre[1] - e.radii[1]],
                [e.centre[0] + e.radii[0], e.centre[1] + e.radii[1]],
            ),
        }
    }
}

/// Even-odd (ray-casting) membership test against a vertex ring.
///
/// A horizontal ray is cast from the query point towards +x; an odd crossing
/// count means inside.
fn point_in_ring(x: f64, y: f64, ring: &[[f64; 2]]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// A shape tagged with its optical material.
///
/// Constructed only through [`Primitive::new`], which resolves and validates
/// the refractive index; immutable afterwards. Deserialisation re-runs the
/// same construction, so a decoded primitive cannot carry an index the
/// constructor would have refused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PrimitiveRepr")]
pub struct Primitive {
    shape: Shape,
    material: Material,
    refractive_index: f64,
}

/// Raw wire form of [`Primitive`], before validation.
#[derive(Deserialize)]
struct PrimitiveRepr {
    shape: Shape,
    material: Material,
    refractive_index: f64,
}

impl TryFrom<PrimitiveRepr> for Primitive {
    type Error = ValidationError;

    fn try_from(repr: PrimitiveRepr) -> Result<Self, Self::Error> {
        // Presets resolve to their fixed constant; Custom re-validates the
        // carried index.
        Primitive::new(repr.shape, repr.material, Some(repr.refractive_index))
    }
}

impl Primitive {
    /// Build a primitive from a validated shape and a material.
    ///
    /// `custom_index` is consulted only when `material` is
    /// [`Material::Custom`]; it must then be finite and > 0.
    pub fn new(
        shape: Shape,
        material: Material,
        custom_index: Option<f64>,
    ) -> Result<Self, ValidationError> {
        let refractive_index = material.resolve_index(custom_index)?;
        Ok(Self { shape, material, refractive_index })
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }

    /// Point-membership test, delegated to the shape.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.shape.contains(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Shape {
        Shape::polygon(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]).unwrap()
    }

    #[test]
    fn point_inside_square() {
        assert!(unit_square().contains(0.5, 0.5));
    }

    #[test]
    fn point_outside_square() {
        assert!(!unit_square().contains(2.0, 0.5));
        assert!(!unit_square().contains(0.5, -0.5));
    }

    #[test]
    fn point_inside_triangle() {
        let tri = Shape::polygon(vec![[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]]).unwrap();
        assert!(tri.contains(2.0, 1.0));
        assert!(!tri.contains(5.0, 5.0));
    }

    #[test]
    fn concave_polygon_even_odd() {
        // A "C" shape: the notch on the right is outside.
        let c = Shape::polygon(vec![
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [3.0, 2.0],
            [3.0, 3.0],
            [0.0, 3.0],
        ])
        .unwrap();
        assert!(c.contains(0.5, 1.5));
        assert!(!c.contains(2.0, 1.5));
    }

    #[test]
    fn polygon_rejects_degenerate_input() {
        assert!(Shape::polygon(vec![[0.0, 0.0], [1.0, 1.0]]).is_err());
        // Three points but only two distinct.
        assert!(Shape::polygon(vec![[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]]).is_err());
        assert!(Shape::polygon(vec![[0.0, 0.0], [f64::NAN, 1.0], [1.0, 0.0]]).is_err());
    }

    #[test]
    fn ellipse_membership_boundary_inclusive() {
        let e = Shape::ellipse([0.0, 0.0], [2.0, 1.0]).unwrap();
        assert!(e.contains(0.0, 0.0));
        assert!(e.contains(2.0, 0.0)); // on the boundary
        assert!(e.contains(0.0, -1.0)); // on the boundary
        assert!(!e.contains(2.0, 1.0));
        assert!(!e.contains(2.1, 0.0));
    }

    #[test]
    fn ellipse_rejects_bad_radii() {
        assert!(Shape::ellipse([0.0, 0.0], [0.0, 5.0]).is_err());
        assert!(Shape::ellipse([0.0, 0.0], [-1.0, 5.0]).is_err());
        assert!(Shape::ellipse([0.0, 0.0], [f64::INFINITY, 5.0]).is_err());
        assert!(Shape::ellipse([f64::NAN, 0.0], [1.0, 1.0]).is_err());
    }

    #[test]
    fn bounding_boxes() {
        let tri = Shape::polygon(vec![[0.0, 0.0], [4.0, 0.0], [2.0, 3.0]]).unwrap();
        assert_eq!(tri.bounding_box(), ([0.0, 0.0], [4.0, 3.0]));

        let e = Shape::ellipse([1.0, 2.0], [0.5, 1.5]).unwrap();
        assert_eq!(e.bounding_box(), ([0.5, 0.5], [1.5, 3.5]));
    }

    #[test]
    fn primitive_resolves_preset_index() {
        let p = Primitive::new(unit_square(), Material::Silicon, None).unwrap();
        assert_eq!(p.refractive_index(), 3.48);
        assert_eq!(p.material(), Material::Silicon);
    }

    #[test]
    fn primitive_rejects_bad_custom_index() {
        assert!(Primitive::new(unit_square(), Material::Custom, Some(-2.0)).is_err());
        assert!(Primitive::new(unit_square(), Material::Custom, None).is_err());
    }

    #[test]
    fn deserialisation_rejects_an_empty_vertex_ring() {
        let raw = r#"{"type": "polygon", "vertices": []}"#;
        assert!(serde_json::from_str::<Shape>(raw).is_err());
    }

    #[test]
    fn deserialisation_rejects_a_zero_radius() {
        let raw = r#"{"type": "ellipse", "centre": [0.0, 0.0], "radii": [0.0, 5.0]}"#;
        assert!(serde_json::from_str::<Shape>(raw).is_err());
    }

    #[test]
    fn deserialisation_rejects_a_negative_index() {
        let raw = r#"{
            "shape": {"type": "polygon", "vertices": [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]},
            "material": "Custom",
            "refractive_index": -1.0
        }"#;
        assert!(serde_json::from_str::<Primitive>(raw).is_err());
    }

    #[test]
    fn primitive_round_trips_through_serde() {
        let before = Primitive::new(unit_square(), Material::Silicon, None).unwrap();
        let json = serde_json::to_string(&before).unwrap();
        let after: Primitive = serde_json::from_str(&json).unwrap();
        assert_eq!(after, before);

        let custom =
            Primitive::new(Shape::ellipse([1.0, 2.0], [0.5, 0.5]).unwrap(), Material::Custom, Some(2.2))
                .unwrap();
        let json = serde_json::to_string(&custom).unwrap();
        let after: Primitive = serde_json::from_str(&json).unwrap();
        assert_eq!(after.refractive_index(), 2.2);
    }
}
