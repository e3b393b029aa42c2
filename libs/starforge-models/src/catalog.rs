//! # Catalog
//!
//! Model selection by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use starforge_mesh::{Assembly, InstanceSink};

use crate::error::{ModelError, ModelResult};
use crate::falcon::{falcon_parker, falcon_parker_into, FalconParkerConfig};
use crate::merlin::{merlin_engine, merlin_engine_into, MerlinConfig};

/// Every model the catalog can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    /// The reference spacecraft.
    FalconParker,
    /// The detailed engine.
    MerlinEngine,
}

impl ModelKind {
    /// All catalog entries.
    pub const ALL: [ModelKind; 2] = [ModelKind::FalconParker, ModelKind::MerlinEngine];

    /// Name used on the command line and in file names.
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::FalconParker => "falcon-parker",
            ModelKind::MerlinEngine => "merlin-engine",
        }
    }

    /// Builds the model with default parameters.
    pub fn build(self) -> ModelResult<Assembly> {
        match self {
            ModelKind::FalconParker => falcon_parker(&FalconParkerConfig::default()),
            ModelKind::MerlinEngine => merlin_engine(&MerlinConfig::default()),
        }
    }

    /// Streams the model with default parameters into `sink`.
    pub fn build_into<S: InstanceSink>(self, sink: &mut S) -> ModelResult<()> {
        match self {
            ModelKind::FalconParker => {
                falcon_parker_into(&FalconParkerConfig::default(), sink).map(drop)
            }
            ModelKind::MerlinEngine => merlin_engine_into(&MerlinConfig::default(), sink),
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = ModelError;

    /// Accepts the kebab-case name, case-insensitive, with `_` for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ModelError::UnknownModel {
                name: s.to_string(),
                expected: Self::ALL.map(ModelKind::name).join(", "),
            })
    }
}
