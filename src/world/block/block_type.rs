//! # Block Type Module
//!
//! This module defines the material taxonomy of the voxel world.
//! It provides functionality for material identification, conversion from the
//! compact storage format, and the per-type predicates the rest of the core
//! relies on (solidity, diggability, build feasibility).

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all materials a voxel can hold.
///
/// `NONE` is the sentinel for an empty cell (air) and must stay at
/// discriminant zero so that a zeroed storage cell reads back as empty.
/// The `FromPrimitive` derive allows conversion from the compact integer
/// form used by block storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An empty cell (air). Distinct from every solid material.
    NONE = 0,

    /// Still water, placed by the flood stage of the landscape generator.
    WATER,

    /// A grass-topped surface cell.
    GRASS,

    /// Plain dirt, the filler below grass surfaces.
    DIRT,

    /// Sand, found on beaches and below the waterline.
    SAND,

    /// Loose gravel, scattered through rock and dirt layers.
    GRAVEL,

    /// Base rock making up the lower map.
    ROCK,

    /// Snow cover above the snowline.
    SNOW,

    /// A tree trunk segment.
    TREE,

    /// Tree foliage.
    LEAVES,
}

impl BlockType {
    /// Converts a `BlockTypeSize` back to a `BlockType`.
    ///
    /// This is used when reading the compact storage format back into the
    /// rich enum type. Unknown values resolve to `NONE` so that corrupt or
    /// out-of-range data degrades to an empty cell instead of a panic.
    ///
    /// # Arguments
    /// * `btype` - The material as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `NONE` for unknown values.
    pub fn from_int(btype: BlockTypeSize) -> Self {
        num::FromPrimitive::from_u8(btype).unwrap_or(BlockType::NONE)
    }

    /// Whether this material participates in collision and ray targeting.
    ///
    /// Air and water are passable; everything else blocks.
    pub fn is_solid(self) -> bool {
        !matches!(self, BlockType::NONE | BlockType::WATER)
    }

    /// Whether this material can be removed by an edit operation.
    ///
    /// Air and water cannot be dug; removal requests against them are
    /// ignored by the world store.
    pub fn is_diggable(self) -> bool {
        !matches!(self, BlockType::NONE | BlockType::WATER)
    }

    /// Whether a structure may be placed on top of this material.
    ///
    /// Used only to classify selection entries for presentation. Grass is
    /// currently the single buildable surface.
    pub fn is_buildable(self) -> bool {
        matches!(self, BlockType::GRASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_compact_form() {
        for ty in [
            BlockType::NONE,
            BlockType::WATER,
            BlockType::GRASS,
            BlockType::DIRT,
            BlockType::SAND,
            BlockType::GRAVEL,
            BlockType::ROCK,
            BlockType::SNOW,
            BlockType::TREE,
            BlockType::LEAVES,
        ] {
            assert_eq!(BlockType::from_int(ty as BlockTypeSize), ty);
        }
    }

    #[test]
    fn unknown_values_read_as_empty() {
        assert_eq!(BlockType::from_int(200), BlockType::NONE);
    }

    #[test]
    fn water_and_air_are_neither_solid_nor_diggable() {
        assert!(!BlockType::NONE.is_solid());
        assert!(!BlockType::WATER.is_solid());
        assert!(!BlockType::NONE.is_diggable());
        assert!(!BlockType::WATER.is_diggable());
        assert!(BlockType::ROCK.is_solid());
        assert!(BlockType::ROCK.is_diggable());
    }
}
