//! # Block Module
//!
//! This module provides the per-voxel record and its supporting types:
//! the material taxonomy (`BlockType`) and the face enumeration
//! (`BlockSide`).
//!
//! ## Memory Layout
//!
//! A `Block` is three bytes: the material in its compact integer form, the
//! activity flag, and the face bitmask. The world grid holds one `Block`
//! per cell and mutates cells in place; blocks are never individually
//! destroyed, the owning cell is overwritten instead.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block materials in storage.
pub type BlockTypeSize = u8;

/// Represents a single voxel cell in the world.
///
/// The activity flag is distinct from the material: an inactive block does
/// not participate in collision or targeting even if it still carries a
/// material. `face_info` holds one bit per `BlockSide` marking faces that
/// border a non-solid neighbor; it is maintained by the world's edit
/// operations and consumed by the external mesh builder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// The material of this block, in its compact storage form.
    pub block_type: BlockTypeSize,

    /// Whether this block currently participates in collision and targeting.
    pub is_active: bool,

    /// Bitmask of exposed faces, one bit per `BlockSide`.
    pub face_info: u8,
}

/// The empty, inactive block every cell starts as and out-of-range lookups
/// resolve to.
pub const EMPTY_BLOCK: Block = Block {
    block_type: BlockType::NONE as BlockTypeSize,
    is_active: false,
    face_info: 0,
};

impl Block {
    /// Creates a new, inactive block of the specified material.
    ///
    /// # Arguments
    /// * `block_type` - The material to create the block with
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
            is_active: false,
            face_info: 0,
        }
    }

    /// The material of this block as the rich enum type.
    pub fn block_type(&self) -> BlockType {
        BlockType::from_int(self.block_type)
    }

    /// Whether this block is active and of a solid material.
    ///
    /// This is the predicate ray targeting stops on.
    pub fn is_solid(&self) -> bool {
        self.is_active && self.block_type().is_solid()
    }
}

impl Default for Block {
    fn default() -> Self {
        EMPTY_BLOCK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_blocks_start_inactive() {
        let block = Block::new(BlockType::ROCK);
        assert_eq!(block.block_type(), BlockType::ROCK);
        assert!(!block.is_active);
        assert!(!block.is_solid());
        assert_eq!(block.face_info, 0);
    }

    #[test]
    fn active_water_is_still_not_solid() {
        let mut block = Block::new(BlockType::WATER);
        block.is_active = true;
        assert!(!block.is_solid());
    }

    #[test]
    fn the_empty_block_reads_as_air() {
        assert_eq!(EMPTY_BLOCK.block_type(), BlockType::NONE);
        assert!(!EMPTY_BLOCK.is_solid());
    }
}
