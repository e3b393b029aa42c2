//! JSON run summary.

use serde::Serialize;
use starforge_mesh::{Bounds, CombinedMesh, MeshResult};
use starforge_models::ModelKind;

/// Counts and extents of one combined model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Catalog name.
    pub model: ModelKind,
    /// Instances that went into the combiner.
    pub parts: usize,
    /// Combiner batches folded.
    pub batches: usize,
    /// Vertices in the combined mesh.
    pub vertices: usize,
    /// Triangles in the combined mesh.
    pub triangles: usize,
    /// Axis-aligned bounds.
    pub bounds: Bounds,
}

impl Summary {
    pub fn new(model: ModelKind, combined: &CombinedMesh) -> MeshResult<Self> {
        Ok(Self {
            model,
            parts: combined.instance_count(),
            batches: combined.batch_count(),
            vertices: combined.mesh().vertex_count(),
            triangles: combined.mesh().triangle_count(),
            bounds: combined.bounds()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use starforge_mesh::primitives::cylinder;
    use starforge_mesh::combine;

    #[test]
    fn test_summary_json_fields() {
        let combined = combine([cylinder(1.0, 4.0, 8).unwrap()]).unwrap();
        let summary = Summary::new(ModelKind::MerlinEngine, &combined).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["model"], "merlin-engine");
        assert_eq!(json["parts"], 1);
        assert_eq!(json["vertices"], 16);
        assert_eq!(json["triangles"], 28);
        assert_eq!(json["bounds"]["max"][2], 2.0);
    }
}
