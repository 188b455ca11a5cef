//! World generation parameters and resource configuration.
//!
//! All fields are required. A parameter set is checked once by
//! [`WorldParams::validate`] and [`validate_resources`] before any chunk is
//! generated; the stages themselves assume validated input.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strata_voxel::BlockId;

use crate::error::GenerationError;

/// Largest trunk height or canopy radius accepted, in blocks.
pub const MAX_TREE_EXTENT: u32 = 4096;

/// Heightmap shape: `offset + magnitude * noise(world / scale)`, as a fraction
/// of world height.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Horizontal noise wavelength in blocks.
    pub scale: f64,
    /// Mean surface height as a fraction of world height.
    pub offset: f64,
    /// Surface height variation as a fraction of world height.
    pub magnitude: f64,
}

/// Thickness of a band: `offset + |noise * magnitude|` blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    /// Minimum thickness in blocks.
    pub offset: f64,
    /// Additional noise-driven thickness in blocks.
    pub magnitude: f64,
}

/// Inclusive integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    /// Smallest value.
    pub min: u32,
    /// Largest value.
    pub max: u32,
}

/// Leaf canopy shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanopyParams {
    /// Probability in `[0, 1]` that a canopy cell is left empty.
    pub density: f64,
    /// Canopy radius range in blocks.
    pub size: SizeRange,
}

/// Tree placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeParams {
    /// Fraction in `[0, 1]`; higher values plant more trees.
    pub frequency: f64,
    /// Trunk height range in blocks.
    pub trunk_height: SizeRange,
    /// Canopy shape.
    pub canopy: CanopyParams,
}

/// Everything a chunk needs besides its size, origin, and resource table.
///
/// One instance is shared read-only by every chunk of a world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldParams {
    /// World seed.
    pub seed: u64,
    /// Heightmap.
    pub terrain: TerrainParams,
    /// Dirt band beneath grass.
    pub surface: LayerParams,
    /// Bedrock band at the column base.
    pub bedrock: LayerParams,
    /// Trees.
    pub trees: TreeParams,
}

/// One ore vein layer stamped by the resource stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Unique name, used in logs and diagnostics.
    pub name: String,
    /// Block placed where the noise threshold passes.
    pub block: BlockId,
    /// Noise wavelength per axis `(x, y, z)` in blocks.
    pub scale: [f64; 3],
    /// Noise value in `[-1, 1]` a cell must strictly exceed. Higher is rarer.
    pub scarcity: f64,
}

impl WorldParams {
    /// The stock rolling-hills world.
    pub fn default_world(seed: u64) -> Self {
        Self {
            seed,
            terrain: TerrainParams {
                scale: 64.0,
                offset: 0.5,
                magnitude: 0.2,
            },
            surface: LayerParams {
                offset: 3.0,
                magnitude: 2.0,
            },
            bedrock: LayerParams {
                offset: 1.0,
                magnitude: 2.0,
            },
            trees: TreeParams {
                frequency: 0.1,
                trunk_height: SizeRange { min: 4, max: 6 },
                canopy: CanopyParams {
                    density: 0.3,
                    size: SizeRange { min: 2, max: 3 },
                },
            },
        }
    }

    /// Check every field, returning the first violation found.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] naming the offending field.
    pub fn validate(&self) -> Result<(), GenerationError> {
        finite("terrain.scale", self.terrain.scale)?;
        positive("terrain.scale", self.terrain.scale)?;
        finite("terrain.offset", self.terrain.offset)?;
        finite("terrain.magnitude", self.terrain.magnitude)?;

        finite("surface.offset", self.surface.offset)?;
        finite("surface.magnitude", self.surface.magnitude)?;
        finite("bedrock.offset", self.bedrock.offset)?;
        finite("bedrock.magnitude", self.bedrock.magnitude)?;

        unit_interval("trees.frequency", self.trees.frequency)?;
        ordered("trees.trunk_height", self.trees.trunk_height)?;
        at_most("trees.trunk_height.max", self.trees.trunk_height.max, MAX_TREE_EXTENT)?;
        unit_interval("trees.canopy.density", self.trees.canopy.density)?;
        ordered("trees.canopy.size", self.trees.canopy.size)?;
        at_most("trees.canopy.size.max", self.trees.canopy.size.max, MAX_TREE_EXTENT)?;
        Ok(())
    }
}

/// Check an ordered resource table.
///
/// # Errors
///
/// Returns a [`GenerationError`] for duplicate names, non-ore blocks,
/// non-positive or non-finite scales, and scarcity outside `[-1, 1]`.
pub fn validate_resources(resources: &[ResourceConfig]) -> Result<(), GenerationError> {
    let mut names = HashSet::new();
    for resource in resources {
        if !names.insert(resource.name.as_str()) {
            return Err(GenerationError::DuplicateResource(resource.name.clone()));
        }
        if !resource.block.is_resource() {
            return Err(GenerationError::NotAResource {
                name: resource.name.clone(),
                block: resource.block,
            });
        }
        for (axis, &scale) in ["x", "y", "z"].iter().zip(&resource.scale) {
            let field = format!("resources.{}.scale.{axis}", resource.name);
            finite(&field, scale)?;
            positive(&field, scale)?;
        }
        let field = format!("resources.{}.scarcity", resource.name);
        finite(&field, resource.scarcity)?;
        in_range(&field, resource.scarcity, -1.0, 1.0)?;
    }
    Ok(())
}

/// The stock ore table, common to rare. Later entries win ties.
pub fn default_resources() -> Vec<ResourceConfig> {
    vec![
        ResourceConfig {
            name: "coal".into(),
            block: BlockId::CoalOre,
            scale: [8.0, 8.0, 8.0],
            scarcity: 0.6,
        },
        ResourceConfig {
            name: "iron".into(),
            block: BlockId::IronOre,
            scale: [6.0, 6.0, 6.0],
            scarcity: 0.7,
        },
        ResourceConfig {
            name: "gold".into(),
            block: BlockId::GoldOre,
            scale: [4.0, 4.0, 4.0],
            scarcity: 0.85,
        },
        ResourceConfig {
            name: "diamond".into(),
            block: BlockId::DiamondOre,
            scale: [3.0, 3.0, 3.0],
            scarcity: 0.92,
        },
    ]
}

fn finite(field: &str, value: f64) -> Result<(), GenerationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GenerationError::NonFinite {
            field: field.to_string(),
            value,
        })
    }
}

fn positive(field: &str, value: f64) -> Result<(), GenerationError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(GenerationError::NonPositive {
            field: field.to_string(),
            value,
        })
    }
}

fn in_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), GenerationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        })
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), GenerationError> {
    finite(field, value)?;
    in_range(field, value, 0.0, 1.0)
}

fn ordered(field: &str, range: SizeRange) -> Result<(), GenerationError> {
    if range.min <= range.max {
        Ok(())
    } else {
        Err(GenerationError::InvertedRange {
            field: field.to_string(),
            min: range.min,
            max: range.max,
        })
    }
}

fn at_most(field: &str, value: u32, max: u32) -> Result<(), GenerationError> {
    if value <= max {
        Ok(())
    } else {
        Err(GenerationError::TooLarge {
            field: field.to_string(),
            value,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world_is_valid() {
        assert_eq!(WorldParams::default_world(42).validate(), Ok(()));
        assert_eq!(validate_resources(&default_resources()), Ok(()));
    }

    #[test]
    fn test_inverted_trunk_range_rejected() {
        let mut params = WorldParams::default_world(0);
        params.trees.trunk_height = SizeRange { min: 7, max: 3 };
        assert_eq!(
            params.validate(),
            Err(GenerationError::InvertedRange {
                field: "trees.trunk_height".into(),
                min: 7,
                max: 3
            })
        );
    }

    #[test]
    fn test_inverted_canopy_range_rejected() {
        let mut params = WorldParams::default_world(0);
        params.trees.canopy.size = SizeRange { min: 4, max: 1 };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_tree_extents_bounded() {
        let mut params = WorldParams::default_world(0);
        params.trees.trunk_height = SizeRange {
            min: 4,
            max: MAX_TREE_EXTENT,
        };
        assert_eq!(params.validate(), Ok(()));

        params.trees.trunk_height.max = MAX_TREE_EXTENT + 1;
        assert_eq!(
            params.validate(),
            Err(GenerationError::TooLarge {
                field: "trees.trunk_height.max".into(),
                value: MAX_TREE_EXTENT + 1,
                max: MAX_TREE_EXTENT
            })
        );

        let mut params = WorldParams::default_world(0);
        params.trees.canopy.size = SizeRange {
            min: u32::MAX,
            max: u32::MAX,
        };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::TooLarge { ref field, .. }) if field == "trees.canopy.size.max"
        ));
    }

    #[test]
    fn test_non_finite_terrain_scale_rejected() {
        let mut params = WorldParams::default_world(0);
        params.terrain.scale = f64::NAN;
        assert!(matches!(
            params.validate(),
            Err(GenerationError::NonFinite { ref field, .. }) if field == "terrain.scale"
        ));

        params.terrain.scale = 0.0;
        assert!(matches!(
            params.validate(),
            Err(GenerationError::NonPositive { .. })
        ));
    }

    #[test]
    fn test_probabilities_must_be_unit_interval() {
        let mut params = WorldParams::default_world(0);
        params.trees.frequency = 1.5;
        assert!(matches!(
            params.validate(),
            Err(GenerationError::OutOfRange { ref field, .. }) if field == "trees.frequency"
        ));

        let mut params = WorldParams::default_world(0);
        params.trees.canopy.density = -0.1;
        assert!(matches!(
            params.validate(),
            Err(GenerationError::OutOfRange { ref field, .. }) if field == "trees.canopy.density"
        ));
    }

    #[test]
    fn test_duplicate_resource_rejected() {
        let mut resources = default_resources();
        resources.push(resources[0].clone());
        assert_eq!(
            validate_resources(&resources),
            Err(GenerationError::DuplicateResource("coal".into()))
        );
    }

    #[test]
    fn test_non_ore_resource_rejected() {
        let mut resources = default_resources();
        resources[1].block = BlockId::Stone;
        assert_eq!(
            validate_resources(&resources),
            Err(GenerationError::NotAResource {
                name: "iron".into(),
                block: BlockId::Stone
            })
        );
    }

    #[test]
    fn test_resource_scale_and_scarcity_checked() {
        let mut resources = default_resources();
        resources[0].scale[1] = 0.0;
        assert!(matches!(
            validate_resources(&resources),
            Err(GenerationError::NonPositive { ref field, .. }) if field == "resources.coal.scale.y"
        ));

        let mut resources = default_resources();
        resources[2].scarcity = 1.2;
        assert!(matches!(
            validate_resources(&resources),
            Err(GenerationError::OutOfRange { .. })
        ));

        let mut resources = default_resources();
        resources[3].scale[2] = f64::INFINITY;
        assert!(matches!(
            validate_resources(&resources),
            Err(GenerationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_empty_resource_table_is_valid() {
        assert_eq!(validate_resources(&[]), Ok(()));
    }
}
