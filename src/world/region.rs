//! # Region Module
//!
//! This module provides `Region`, the mutable rectangular view of the
//! world grid that region builders populate. The world carves itself
//! into full-height columns of `REGION_DIMENSION x REGION_DIMENSION`
//! cells and hands each column to the builder in turn.
//!
//! ## Isolation
//!
//! A builder must not touch voxels outside the region it was given;
//! parallel region construction relies on that. The view enforces the
//! rule at the seam: writes outside the region's bounds are ignored and
//! reads outside resolve to `NONE`.

use crate::world::block::block_type::BlockType;
use crate::world::block_index::BlockIndex;
use crate::world::World;

/// The horizontal extent of one region, in cells. Regions span the full
/// map height.
pub const REGION_DIMENSION: i32 = 16;

/// A writable rectangular sub-volume of the world grid.
///
/// Coordinates passed to the accessors are absolute world coordinates,
/// not region-local ones.
pub struct Region<'w> {
    origin: BlockIndex,
    size: BlockIndex,
    world: &'w mut World,
}

impl<'w> Region<'w> {
    pub(crate) fn new(origin: BlockIndex, size: BlockIndex, world: &'w mut World) -> Self {
        Region {
            origin,
            size,
            world,
        }
    }

    /// The minimum corner of this region, in world coordinates.
    pub fn origin(&self) -> BlockIndex {
        self.origin
    }

    /// The extent of this region along each axis, in cells.
    pub fn size(&self) -> BlockIndex {
        self.size
    }

    /// Whether a world coordinate lies inside this region.
    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= self.origin.x
            && x < self.origin.x + self.size.x
            && y >= self.origin.y
            && y < self.origin.y + self.size.y
            && z >= self.origin.z
            && z < self.origin.z + self.size.z
    }

    /// Writes a material into a cell of this region.
    ///
    /// The cell becomes active when the material is not `NONE`. Writes
    /// outside the region's bounds are ignored.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - Absolute world coordinates of the cell
    /// * `block_type` - The material to write
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        if self.contains(x, y, z) {
            self.world.write_block(x, y, z, block_type);
        }
    }

    /// Reads the material of a cell of this region.
    ///
    /// # Returns
    /// The material at the cell, or `NONE` outside the region's bounds.
    pub fn block_type_at(&self, x: i32, y: i32, z: i32) -> BlockType {
        if self.contains(x, y, z) {
            self.world.block_at(x, y, z).block_type()
        } else {
            BlockType::NONE
        }
    }
}
