//! Block identifiers: the closed set of materials a grid cell can hold.
//!
//! Air is discriminant 0 so that a zeroed buffer represents empty space.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Material stored in a single chunk cell (1 byte).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum BlockId {
    /// Empty space.
    #[default]
    Air = 0,
    /// Indestructible floor at the base of every column.
    Bedrock = 1,
    /// Deep fill between bedrock and the dirt band.
    Stone = 2,
    /// Surface band beneath grass.
    Dirt = 3,
    /// Topmost solid cell of a column.
    Grass = 4,
    /// Tree trunk.
    OakLog = 5,
    /// Tree canopy.
    Leaves = 6,
    /// Common shallow ore.
    CoalOre = 7,
    /// Common ore.
    IronOre = 8,
    /// Rare ore.
    GoldOre = 9,
    /// Very rare ore.
    DiamondOre = 10,
}

impl BlockId {
    /// Every block identifier, in discriminant order.
    pub const ALL: [BlockId; 11] = [
        BlockId::Air,
        BlockId::Bedrock,
        BlockId::Stone,
        BlockId::Dirt,
        BlockId::Grass,
        BlockId::OakLog,
        BlockId::Leaves,
        BlockId::CoalOre,
        BlockId::IronOre,
        BlockId::GoldOre,
        BlockId::DiamondOre,
    ];

    /// Human-readable name (e.g. "stone", "oak_log").
    pub fn name(self) -> &'static str {
        match self {
            BlockId::Air => "air",
            BlockId::Bedrock => "bedrock",
            BlockId::Stone => "stone",
            BlockId::Dirt => "dirt",
            BlockId::Grass => "grass",
            BlockId::OakLog => "oak_log",
            BlockId::Leaves => "leaves",
            BlockId::CoalOre => "coal_ore",
            BlockId::IronOre => "iron_ore",
            BlockId::GoldOre => "gold_ore",
            BlockId::DiamondOre => "diamond_ore",
        }
    }

    /// Returns `true` for [`BlockId::Air`].
    #[inline]
    pub fn is_air(self) -> bool {
        self == BlockId::Air
    }

    /// Returns `true` for every block except Air.
    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_air()
    }

    /// Returns `true` if this block may be stamped by the resource layer.
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            BlockId::CoalOre | BlockId::IronOre | BlockId::GoldOre | BlockId::DiamondOre
        )
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_zero_and_default() {
        assert_eq!(BlockId::Air as u8, 0);
        assert_eq!(BlockId::default(), BlockId::Air);
    }

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, block) in BlockId::ALL.iter().enumerate() {
            assert_eq!(*block as usize, i, "{block} is out of order");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = BlockId::ALL.iter().map(|b| b.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BlockId::ALL.len());
    }

    #[test]
    fn test_only_ores_are_resources() {
        let resources: Vec<_> = BlockId::ALL.into_iter().filter(|b| b.is_resource()).collect();
        assert_eq!(
            resources,
            vec![
                BlockId::CoalOre,
                BlockId::IronOre,
                BlockId::GoldOre,
                BlockId::DiamondOre
            ]
        );
        assert!(!BlockId::Stone.is_resource());
    }

    #[test]
    fn test_solidity() {
        assert!(!BlockId::Air.is_solid());
        assert!(BlockId::Air.is_air());
        assert!(BlockId::Leaves.is_solid());
        assert!(BlockId::Bedrock.is_solid());
    }
}
