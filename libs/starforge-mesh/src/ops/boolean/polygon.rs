//! # Polygon for BSP Operations
//!
//! Convex planar polygon carrying its supporting plane.

use super::plane::Plane;
use glam::DVec3;

/// A convex polygon with its plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    vertices: Vec<DVec3>,
    plane: Plane,
}

impl Polygon {
    /// Creates a polygon, deriving the plane from the first three vertices.
    ///
    /// Returns `None` for fewer than three vertices or a degenerate start.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    /// Creates a split piece that keeps its parent's plane.
    pub fn with_plane(vertices: Vec<DVec3>, plane: Plane) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices, plane })
    }

    /// Polygon vertices.
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Supporting plane.
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding and plane orientation.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane.flip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_from_vertices() {
        assert_eq!(triangle().vertices().len(), 3);
        assert!(Polygon::from_vertices(vec![DVec3::ZERO, DVec3::X]).is_none());
    }

    #[test]
    fn test_polygon_flip() {
        let poly = triangle();
        let mut flipped = poly.clone();
        flipped.flip();

        assert_eq!(flipped.vertices()[0], poly.vertices()[2]);
        assert_eq!(flipped.vertices()[2], poly.vertices()[0]);
        assert_eq!(flipped.plane().normal(), -DVec3::Z);
    }

    #[test]
    fn test_with_plane_rejects_slivers() {
        let plane = *triangle().plane();
        assert!(Polygon::with_plane(vec![DVec3::ZERO, DVec3::X], plane).is_none());
    }
}
