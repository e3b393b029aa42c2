//! # Plane for BSP Operations
//!
//! Oriented plane with point classification and polygon splitting.

use super::polygon::Polygon;
use config::constants::CSG_PLANE_EPSILON;
use glam::DVec3;

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Position of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Positive side.
    Front,
    /// Negative side.
    Back,
    /// Within [`CSG_PLANE_EPSILON`] of the plane.
    Coplanar,
}

/// Where a polygon ends up after splitting by a plane.
#[derive(Debug, Clone)]
pub enum Split {
    /// On the plane, facing the same way.
    CoplanarFront(Polygon),
    /// On the plane, facing the opposite way.
    CoplanarBack(Polygon),
    /// Entirely in front.
    Front(Polygon),
    /// Entirely behind.
    Back(Polygon),
    /// Cut in two; either piece may vanish if it degenerates.
    Spanning {
        /// Piece in front of the plane.
        front: Option<Polygon>,
        /// Piece behind the plane.
        back: Option<Polygon>,
    },
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane `normal · p = w` with unit normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: DVec3,
    w: f64,
}

impl Plane {
    /// Creates a plane from a unit normal and offset.
    pub fn new(normal: DVec3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Plane through three counter-clockwise points, `None` when collinear.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            w: normal.dot(a),
        })
    }

    /// Unit normal.
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Reverses orientation.
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance, positive in front.
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.w
    }

    /// Classifies a point with the boolean tolerance.
    pub fn classify_point(&self, point: DVec3) -> Classification {
        let dist = self.signed_distance(point);
        if dist > CSG_PLANE_EPSILON {
            Classification::Front
        } else if dist < -CSG_PLANE_EPSILON {
            Classification::Back
        } else {
            Classification::Coplanar
        }
    }

    /// Splits `polygon` by this plane.
    pub fn split(&self, polygon: Polygon) -> Split {
        let sides: Vec<Classification> = polygon
            .vertices()
            .iter()
            .map(|&v| self.classify_point(v))
            .collect();

        let has_front = sides.contains(&Classification::Front);
        let has_back = sides.contains(&Classification::Back);

        match (has_front, has_back) {
            (false, false) => {
                if self.normal.dot(polygon.plane().normal()) > 0.0 {
                    Split::CoplanarFront(polygon)
                } else {
                    Split::CoplanarBack(polygon)
                }
            }
            (true, false) => Split::Front(polygon),
            (false, true) => Split::Back(polygon),
            (true, true) => {
                let vertices = polygon.vertices();
                let mut front = Vec::with_capacity(vertices.len() + 1);
                let mut back = Vec::with_capacity(vertices.len() + 1);

                for (i, &vi) in vertices.iter().enumerate() {
                    let j = (i + 1) % vertices.len();
                    let vj = vertices[j];
                    let (ti, tj) = (sides[i], sides[j]);

                    if ti != Classification::Back {
                        front.push(vi);
                    }
                    if ti != Classification::Front {
                        back.push(vi);
                    }

                    let crosses = matches!(
                        (ti, tj),
                        (Classification::Front, Classification::Back)
                            | (Classification::Back, Classification::Front)
                    );
                    if crosses {
                        let di = self.signed_distance(vi);
                        let dj = self.signed_distance(vj);
                        let cut = vi.lerp(vj, di / (di - dj));
                        front.push(cut);
                        back.push(cut);
                    }
                }

                let plane = *polygon.plane();
                Split::Spanning {
                    front: Polygon::with_plane(front, plane),
                    back: Polygon::with_plane(back, plane),
                }
            }
        }
    }
}
