//! # Assembly Combiner
//!
//! Concatenates placed instances into one vertex/face buffer.
//!
//! Every appended face has its indices shifted by the vertex count the
//! output held *before* that instance, so indices stay valid in the single
//! buffer. Nothing is deduplicated or unioned: overlapping parts stay as
//! separate triangles.
//!
//! ## Batching
//!
//! [`Combiner`] folds every `batch_size` instances into a partial mesh as
//! soon as the batch is full and drops the sources, then merges the
//! partials in order on [`Combiner::finish`]. Shield layers alone
//! contribute dozens of small tiles, so no more than one batch of source
//! meshes is held at a time.
//!
//! Generators write into an [`InstanceSink`]. Handing them a [`Combiner`]
//! merges parts as they are produced; an [`Assembly`] keeps them all for
//! inspection.
//!
//! ## Example
//!
//! ```rust
//! use starforge_mesh::assembly::{Assembly, Instance};
//! use starforge_mesh::primitives::{cone, cylinder};
//!
//! let mut assembly = Assembly::new("probe");
//! assembly.push(cylinder(1.0, 4.0, 8).unwrap());
//! assembly.push(Instance::colored(cone(1.0, 1.0, 8).unwrap(), [200, 50, 50, 255]));
//!
//! let combined = assembly.combine().unwrap();
//! assert_eq!(combined.mesh().vertex_count(), 16 + 9);
//! assert_eq!(combined.instance_count(), 2);
//! ```

use crate::bounds::Bounds;
use crate::error::{MeshError, MeshResult};
use crate::mesh::{Mesh, Rgba};
use crate::transform::Transform;
use config::constants::{DEFAULT_COMBINE_BATCH_SIZE, MAX_VERTICES};

// =============================================================================
// INSTANCE
// =============================================================================

/// A placed mesh with an optional color tag.
///
/// The color is carried through to the combined mesh as per-vertex colors
/// and never interpreted by the combiner.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    /// Geometry in the model frame.
    pub mesh: Mesh,
    /// Visual tag (RGBA).
    pub color: Option<Rgba>,
}

impl Instance {
    /// An untagged instance.
    pub fn new(mesh: Mesh) -> Self {
        Self { mesh, color: None }
    }

    /// An instance tagged with `color`.
    pub fn colored(mesh: Mesh, color: Rgba) -> Self {
        Self {
            mesh,
            color: Some(color),
        }
    }

    /// Places a template mesh without consuming it.
    pub fn placed(template: &Mesh, transform: &Transform, color: Option<Rgba>) -> Self {
        Self {
            mesh: transform.apply(template),
            color,
        }
    }

    /// The mesh with the color tag expanded to per-vertex colors.
    fn into_colored_mesh(self) -> Mesh {
        let mut mesh = self.mesh;
        if let Some(color) = self.color {
            mesh.set_uniform_color(color);
        }
        mesh
    }
}

impl From<Mesh> for Instance {
    fn from(mesh: Mesh) -> Self {
        Self::new(mesh)
    }
}

// =============================================================================
// SINK
// =============================================================================

/// Destination for instances as a model generates them.
pub trait InstanceSink {
    /// Takes the next instance.
    ///
    /// # Errors
    ///
    /// Whatever the destination reports, e.g. [`MeshError::TooManyVertices`]
    /// from a [`Combiner`].
    fn accept(&mut self, instance: Instance) -> MeshResult<()>;

    /// Takes every instance in order, stopping at the first error.
    fn accept_all<I>(&mut self, instances: I) -> MeshResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Instance>,
        Self: Sized,
    {
        for instance in instances {
            self.accept(instance.into())?;
        }
        Ok(())
    }
}

impl InstanceSink for Vec<Instance> {
    fn accept(&mut self, instance: Instance) -> MeshResult<()> {
        self.push(instance);
        Ok(())
    }
}

// =============================================================================
// COMBINED MESH
// =============================================================================

/// The single buffer produced by combining an assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedMesh {
    mesh: Mesh,
    instance_count: usize,
    batch_count: usize,
}

impl CombinedMesh {
    /// The merged mesh.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of instances that went in.
    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    /// Number of batches the combiner folded.
    pub fn batch_count(&self) -> usize {
        self.batch_count
    }

    /// Axis-aligned bounds of the merged mesh.
    pub fn bounds(&self) -> MeshResult<Bounds> {
        Bounds::of(&self.mesh)
    }

    /// Takes the merged mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

// =============================================================================
// COMBINER
// =============================================================================

/// Streaming combiner with bounded batches.
#[derive(Debug)]
pub struct Combiner {
    batch_size: usize,
    pending: Vec<Instance>,
    partials: Vec<Mesh>,
    instance_count: usize,
    vertex_total: usize,
}

impl Default for Combiner {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_COMBINE_BATCH_SIZE,
            pending: Vec::with_capacity(DEFAULT_COMBINE_BATCH_SIZE),
            partials: Vec::new(),
            instance_count: 0,
            vertex_total: 0,
        }
    }
}

impl Combiner {
    /// Creates a combiner folding `batch_size` instances at a time.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for a zero batch size.
    pub fn new(batch_size: usize) -> MeshResult<Self> {
        if batch_size == 0 {
            return Err(MeshError::invalid_parameter(
                "Combiner batch size must be at least 1",
            ));
        }
        Ok(Self {
            batch_size,
            pending: Vec::with_capacity(batch_size),
            ..Self::default()
        })
    }

    /// Adds the next instance, folding the batch once it is full.
    ///
    /// # Errors
    ///
    /// [`MeshError::TooManyVertices`] when the running total leaves the u32
    /// index range.
    pub fn push(&mut self, instance: impl Into<Instance>) -> MeshResult<()> {
        let instance = instance.into();
        let total = self.vertex_total + instance.mesh.vertex_count();
        if total > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: total,
                max: MAX_VERTICES,
            });
        }

        self.vertex_total = total;
        self.instance_count += 1;
        self.pending.push(instance);

        if self.pending.len() >= self.batch_size {
            self.flush()?;
        }
        Ok(())
    }

    /// Number of instances accepted so far.
    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    /// Instances waiting for the current batch to fill.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Instances folded per batch.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Vertices accepted so far.
    pub fn vertex_count(&self) -> usize {
        self.vertex_total
    }

    /// Merges the remaining batch and all partials in order.
    ///
    /// # Errors
    ///
    /// [`MeshError::IndexIntegrity`] if the merged buffer references a
    /// missing vertex, which indicates a defect in the offset arithmetic.
    pub fn finish(mut self) -> MeshResult<CombinedMesh> {
        self.flush()?;

        let batch_count = self.partials.len();
        let mesh = match self.partials.len() {
            1 => self.partials.pop().unwrap_or_default(),
            _ => {
                let mut merged = Mesh::with_capacity(self.vertex_total, 0);
                for partial in self.partials.drain(..) {
                    merged.merge(&partial)?;
                }
                merged
            }
        };
        mesh.validate()?;

        Ok(CombinedMesh {
            mesh,
            instance_count: self.instance_count,
            batch_count,
        })
    }

    fn flush(&mut self) -> MeshResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let count = self.pending.len();
        let mut partial = Mesh::new();
        for instance in self.pending.drain(..) {
            partial.merge(&instance.into_colored_mesh())?;
        }

        log::debug!(
            "Merged batch {} ({} instances, {} vertices, {} triangles)",
            self.partials.len() + 1,
            count,
            partial.vertex_count(),
            partial.triangle_count()
        );

        self.partials.push(partial);
        Ok(())
    }
}

impl InstanceSink for Combiner {
    fn accept(&mut self, instance: Instance) -> MeshResult<()> {
        self.push(instance)
    }
}

/// Combines instances in order with the default batch size.
///
/// # Example
///
/// ```rust
/// use starforge_mesh::assembly::combine;
/// use starforge_mesh::primitives::cylinder;
///
/// let a = cylinder(1.0, 2.0, 6).unwrap();
/// let combined = combine([a.clone()]).unwrap();
/// assert_eq!(combined.mesh(), &a);
/// ```
pub fn combine<I>(instances: impl IntoIterator<Item = I>) -> MeshResult<CombinedMesh>
where
    I: Into<Instance>,
{
    let mut combiner = Combiner::default();
    for instance in instances {
        combiner.push(instance)?;
    }
    combiner.finish()
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// An ordered, owned collection of instances destined for one model.
#[derive(Debug, Clone)]
pub struct Assembly {
    name: String,
    instances: Vec<Instance>,
    batch_size: usize,
}

impl Assembly {
    /// Creates an empty assembly.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instances: Vec::new(),
            batch_size: DEFAULT_COMBINE_BATCH_SIZE,
        }
    }

    /// Overrides the combiner batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends one instance.
    pub fn push(&mut self, instance: impl Into<Instance>) {
        self.instances.push(instance.into());
    }

    /// Appends a mesh tagged with `color`.
    pub fn push_colored(&mut self, mesh: Mesh, color: Rgba) {
        self.instances.push(Instance::colored(mesh, color));
    }

    /// Instances in insertion order.
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Number of instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// True when nothing has been added.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Total vertices across all instances.
    pub fn vertex_count(&self) -> usize {
        self.instances.iter().map(|i| i.mesh.vertex_count()).sum()
    }

    /// Total triangles across all instances.
    pub fn triangle_count(&self) -> usize {
        self.instances.iter().map(|i| i.mesh.triangle_count()).sum()
    }

    /// Consumes the assembly into one combined mesh.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidParameter`] for a zero batch size, otherwise the
    /// errors of [`Combiner::push`] and [`Combiner::finish`].
    pub fn combine(self) -> MeshResult<CombinedMesh> {
        log::debug!(
            "Combining '{}': {} instances in batches of {}",
            self.name,
            self.instances.len(),
            self.batch_size
        );

        let mut combiner = Combiner::new(self.batch_size)?;
        for instance in self.instances {
            combiner.push(instance)?;
        }
        combiner.finish()
    }
}

impl InstanceSink for Assembly {
    fn accept(&mut self, instance: Instance) -> MeshResult<()> {
        self.push(instance);
        Ok(())
    }
}

impl Extend<Instance> for Assembly {
    fn extend<T: IntoIterator<Item = Instance>>(&mut self, iter: T) {
        self.instances.extend(iter);
    }
}
