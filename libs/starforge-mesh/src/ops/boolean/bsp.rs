//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! Every traversal uses an explicit work stack. Trees built from thin
//! engine shells can get deep, and recursion would tie tree depth to the
//! thread's stack size.

use super::plane::{Plane, Split};
use super::polygon::Polygon;

/// A node in the BSP tree.
#[derive(Debug, Default)]
pub struct BspNode {
    plane: Option<Plane>,
    /// Polygons coplanar with this node's plane
    polygons: Vec<Polygon>,
    front: Option<Box<BspNode>>,
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into the tree, splitting them as they descend.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            if polys.is_empty() {
                continue;
            }

            let BspNode {
                plane,
                polygons,
                front,
                back,
            } = node;

            let plane = *plane.get_or_insert(*polys[0].plane());
            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in polys {
                match plane.split(poly) {
                    Split::CoplanarFront(p) | Split::CoplanarBack(p) => polygons.push(p),
                    Split::Front(p) => front_polys.push(p),
                    Split::Back(p) => back_polys.push(p),
                    Split::Spanning {
                        front: piece_front,
                        back: piece_back,
                    } => {
                        front_polys.extend(piece_front);
                        back_polys.extend(piece_back);
                    }
                }
            }

            if !front_polys.is_empty() {
                let child: &mut BspNode = front.get_or_insert_with(Box::default);
                stack.push((child, front_polys));
            }
            if !back_polys.is_empty() {
                let child: &mut BspNode = back.get_or_insert_with(Box::default);
                stack.push((child, back_polys));
            }
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            for poly in &mut node.polygons {
                poly.flip();
            }
            if let Some(plane) = &mut node.plane {
                plane.flip();
            }
            std::mem::swap(&mut node.front, &mut node.back);

            stack.extend(node.front.as_deref_mut());
            stack.extend(node.back.as_deref_mut());
        }
    }

    /// Removes the parts of `polygons` inside the solid this tree bounds.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut front_polys = Vec::new();
            let mut back_polys = Vec::new();

            for poly in polys {
                match plane.split(poly) {
                    Split::CoplanarFront(p) | Split::Front(p) => front_polys.push(p),
                    Split::CoplanarBack(p) | Split::Back(p) => back_polys.push(p),
                    Split::Spanning { front, back } => {
                        front_polys.extend(front);
                        back_polys.extend(back);
                    }
                }
            }

            match node.front.as_deref() {
                Some(front) => stack.push((front, front_polys)),
                None => result.extend(front_polys),
            }
            // Behind a leaf is inside the solid: those pieces are dropped.
            if let Some(back) = node.back.as_deref() {
                stack.push((back, back_polys));
            }
        }

        result
    }

    /// Removes this tree's polygons that lie inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));
            stack.extend(node.front.as_deref_mut());
            stack.extend(node.back.as_deref_mut());
        }
    }

    /// Collects every polygon in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        result
    }

    /// Number of polygons stored in the tree.
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            count += node.polygons.len();
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }

        count
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Iterative drop to avoid stack overflow
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::from_vertices(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::new(vec![]);
        assert_eq!(tree.polygon_count(), 0);
        assert!(tree.plane.is_none());
    }

    #[test]
    fn test_bsp_keeps_every_polygon() {
        let tree = BspNode::new(vec![triangle_at(0.0), triangle_at(1.0), triangle_at(-1.0)]);
        assert_eq!(tree.polygon_count(), 3);
        assert_eq!(tree.all_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_coplanar_share_node() {
        let tree = BspNode::new(vec![triangle_at(0.0), triangle_at(0.0)]);
        assert_eq!(tree.polygons.len(), 2);
        assert!(tree.front.is_none() && tree.back.is_none());
    }

    #[test]
    fn test_bsp_invert_flips_normals() {
        let mut tree = BspNode::new(vec![triangle_at(0.0)]);
        tree.invert();
        assert_eq!(tree.polygons[0].plane().normal(), -DVec3::Z);
    }

    #[test]
    fn test_bsp_clip_polygons_front_survives() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        assert_eq!(tree.clip_polygons(vec![triangle_at(1.0)]).len(), 1);
    }

    #[test]
    fn test_bsp_clip_polygons_back_removed() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        assert!(tree.clip_polygons(vec![triangle_at(-1.0)]).is_empty());
    }
}
