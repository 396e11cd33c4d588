//! # Positioned Block Module
//!
//! This module provides `PositionedBlock`, the value type that pairs a
//! voxel coordinate with the material found there. Targeting queries
//! return it and the selection map is keyed by it, so equality and
//! hashing are structural.

use crate::world::block::block_type::BlockType;
use crate::world::block_index::BlockIndex;

/// A voxel coordinate together with the material at that coordinate.
///
/// Two `PositionedBlock`s are equal iff both the position and the material
/// match; the derived `Hash` agrees with that equality, which is what lets
/// the selection set use it as a map key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PositionedBlock {
    /// The cell this entry refers to.
    pub position: BlockIndex,
    /// The material observed at `position` when the entry was created.
    pub block_type: BlockType,
}

impl PositionedBlock {
    /// Creates a positioned block from a coordinate and a material.
    pub fn new(position: BlockIndex, block_type: BlockType) -> Self {
        PositionedBlock {
            position,
            block_type,
        }
    }
}
