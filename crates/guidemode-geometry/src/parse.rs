//! Parsing of textual coordinate specifications.
//!
//! This is the input boundary between the editor's form fields and the typed
//! shape model. Specs are plain text:
//!
//! ```text
//! polygon:  "0,0; 2,0; 2,1; 0,1"    (pairs separated by ';')
//! ellipse:  centre "1.0,0.5"  radii "0.4,0.2"
//! ```
//!
//! All string re-parsing happens here; every consumer downstream works with
//! the closed [`Shape`](crate::primitives::Shape) variants only.

use crate::error::ValidationError;
use crate::primitives::Shape;

/// Parse a single `x,y` coordinate pair.
fn parse_pair(spec: &str) -> Result<[f64; 2], ValidationError> {
    let bad = || ValidationError::Coordinate { raw: spec.trim().to_string() };

    let (x, y) = spec.trim().split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(bad());
    }
    Ok([x, y])
}

/// Parse a polygon vertex list (`x,y` pairs separated by `;` or newlines)
/// into a validated polygon shape.
///
/// Fails if any pair is malformed or fewer than 3 distinct vertices result.
pub fn parse_polygon(spec: &str) -> Result<Shape, ValidationError> {
    let mut vertices = Vec::new();
    for part in spec.split([';', '\n']) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        vertices.push(parse_pair(part)?);
    }
    Shape::polygon(vertices)
}

/// Parse ellipse centre and radii specs (`"cx,cy"` and `"rx,ry"`) into a
/// validated ellipse shape.
///
/// Fails if any of the four values is non-finite or either radius is ≤ 0.
pub fn parse_ellipse(centre_spec: &str, radii_spec: &str) -> Result<Shape, ValidationError> {
    let centre = parse_pair(centre_spec)?;
    let radii = parse_pair(radii_spec)?;
    Shape::ellipse(centre, radii)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Shape;

    #[test]
    fn parses_polygon_spec() {
        let shape = parse_polygon("0,0; 2,0; 2,1; 0,1").unwrap();
        match &shape {
            Shape::Polygon(p) => assert_eq!(p.vertices.len(), 4),
            _ => panic!("expected a polygon"),
        }
        assert!(shape.contains(1.0, 0.5));
    }

    #[test]
    fn polygon_spec_accepts_newlines_and_blanks() {
        let shape = parse_polygon("0,0\n 4,0 ;\n2,3;").unwrap();
        assert!(shape.contains(2.0, 1.0));
    }

    #[test]
    fn polygon_spec_rejects_garbage() {
        assert!(parse_polygon("0,0; two,0; 2,1").is_err());
        assert!(parse_polygon("0,0; 1 1; 2,1").is_err());
        assert!(parse_polygon("").is_err());
    }

    #[test]
    fn polygon_spec_needs_three_distinct_points() {
        assert!(parse_polygon("0,0; 1,1").is_err());
        assert!(parse_polygon("0,0; 1,1; 0,0").is_err());
    }

    #[test]
    fn parses_ellipse_spec() {
        let shape = parse_ellipse("1.0, 0.5", "0.4, 0.2").unwrap();
        assert!(shape.contains(1.0, 0.5));
        assert!(!shape.contains(2.0, 0.5));
    }

    #[test]
    fn ellipse_spec_rejects_zero_radius() {
        assert!(parse_ellipse("0,0", "0,5").is_err());
    }

    #[test]
    fn ellipse_spec_rejects_malformed_pairs() {
        assert!(parse_ellipse("0;0", "1,1").is_err());
        assert!(parse_ellipse("0,0", "1,nan-ish").is_err());
        assert!(parse_ellipse("inf,0", "1,1").is_err());
    }
}
