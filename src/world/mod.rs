//! # World Module
//!
//! This module provides the `World` struct which owns the bounded 3D
//! voxel grid and serves as the central store every other component
//! reads from and writes to.
//!
//! ## Architecture
//!
//! The grid is a single flat allocation of `Block` cells covering
//! `[0, width) x [0, height) x [0, length)`. Cells are stored with the
//! Y axis contiguous so the generators' vertical column scans walk
//! memory in order.
//!
//! ## Out-of-range Policy
//!
//! Lookups never fail: any coordinate outside the map resolves to the
//! inactive empty block, so ray marches and selection sweeps that stray
//! past the world edge degrade to "nothing there" instead of panicking.

use cgmath::Point3;
use log::{debug, info};

use crate::settings::WorldSettings;
use crate::world::block::block_side::BlockSide;
use crate::world::block::block_type::BlockType;
use crate::world::block::{Block, BlockTypeSize, EMPTY_BLOCK};
use crate::world::block_index::BlockIndex;
use crate::world::generators::RegionBuilder;
use crate::world::region::{Region, REGION_DIMENSION};

pub mod aabb;
pub mod block;
pub mod block_index;
pub mod generators;
pub mod positioned_block;
pub mod region;
pub mod selection;

/// Represents the voxel world as one bounded grid of blocks.
///
/// The world owns the storage; generation and targeting components
/// receive it by reference. Regions are not stored separately, they are
/// views carved out of this grid on demand.
pub struct World {
    settings: WorldSettings,
    blocks: Vec<Block>,
}

impl World {
    /// Creates a new world with every cell empty and inactive.
    ///
    /// # Arguments
    /// * `settings` - The sanitized world configuration
    pub fn new(settings: WorldSettings) -> Self {
        let settings = settings.sanitized();
        World {
            blocks: vec![EMPTY_BLOCK; settings.cell_count()],
            settings,
        }
    }

    /// The settings this world was built with.
    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// Map extent along the X axis, in cells.
    pub fn width(&self) -> i32 {
        self.settings.map_width
    }

    /// Map extent along the Y axis, in cells.
    pub fn height(&self) -> i32 {
        self.settings.map_height
    }

    /// Map extent along the Z axis, in cells.
    pub fn length(&self) -> i32 {
        self.settings.map_length
    }

    /// Whether a coordinate lies inside the map bounds.
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height() && z >= 0 && z < self.length()
    }

    /// Y-contiguous flat index. Callers guarantee the coordinate is in
    /// bounds.
    fn cell_index(&self, x: i32, y: i32, z: i32) -> usize {
        ((x as usize * self.length() as usize) + z as usize) * self.height() as usize + y as usize
    }

    /// Looks up the block at a voxel coordinate.
    ///
    /// # Returns
    /// A copy of the cell, or the inactive empty block for any coordinate
    /// outside the map.
    pub fn block_at(&self, x: i32, y: i32, z: i32) -> Block {
        if self.in_bounds(x, y, z) {
            self.blocks[self.cell_index(x, y, z)]
        } else {
            EMPTY_BLOCK
        }
    }

    /// Looks up the block at a `BlockIndex`.
    pub fn block_at_index(&self, index: &BlockIndex) -> Block {
        self.block_at(index.x, index.y, index.z)
    }

    /// The material at a continuous position, after flooring it into its
    /// cell.
    pub fn block_type_at_point(&self, position: Point3<f32>) -> BlockType {
        self.block_at_index(&BlockIndex::from(position)).block_type()
    }

    /// Whether the cell containing a continuous position is active and
    /// solid.
    pub fn solid_at_point(&self, position: Point3<f32>) -> bool {
        self.block_at_index(&BlockIndex::from(position)).is_solid()
    }

    /// Places a block, activating the cell and refreshing the face
    /// bitmasks of the cell and its six neighbors.
    ///
    /// Writes outside the map are ignored.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The target cell
    /// * `block_type` - The material to place
    pub fn add_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        self.write_block(x, y, z, block_type);
        self.refresh_face_info_around(x, y, z);
    }

    /// Removes a diggable block, resetting the cell to empty and
    /// refreshing the neighboring face bitmasks.
    ///
    /// Requests against air, water, or out-of-range cells are ignored.
    pub fn remove_block(&mut self, x: i32, y: i32, z: i32) {
        if !self.in_bounds(x, y, z) {
            return;
        }
        if !self.block_at(x, y, z).block_type().is_diggable() {
            return;
        }
        let index = self.cell_index(x, y, z);
        self.blocks[index] = EMPTY_BLOCK;
        self.refresh_face_info_around(x, y, z);
    }

    /// Raw cell write used by region construction. Sets the material and
    /// the activity flag, leaving face bitmasks for the bulk pass that
    /// runs after all regions are built.
    pub(crate) fn write_block(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        let index = self.cell_index(x, y, z);
        self.blocks[index] = Block {
            block_type: block_type as BlockTypeSize,
            is_active: block_type != BlockType::NONE,
            face_info: 0,
        };
    }

    /// The number of regions `build_regions` will visit.
    pub fn region_count(&self) -> usize {
        let across = (self.width() + REGION_DIMENSION - 1) / REGION_DIMENSION;
        let deep = (self.length() + REGION_DIMENSION - 1) / REGION_DIMENSION;
        (across * deep) as usize
    }

    /// Populates every region of the world with the given builder.
    ///
    /// The map is carved into full-height columns of
    /// `REGION_DIMENSION x REGION_DIMENSION` cells; edge regions are
    /// clamped to the map bounds. The builder runs to completion on each
    /// region before the next one starts. Afterwards every active cell's
    /// face bitmask is recomputed in one pass.
    ///
    /// # Arguments
    /// * `builder` - The strategy that fills each region
    pub fn build_regions(&mut self, builder: &mut dyn RegionBuilder) {
        let start = std::time::Instant::now();
        let (width, height, length) = (self.width(), self.height(), self.length());
        let mut built = 0usize;

        let mut x = 0;
        while x < width {
            let mut z = 0;
            while z < length {
                let origin = BlockIndex::new(x, 0, z);
                let size = BlockIndex::new(
                    REGION_DIMENSION.min(width - x),
                    height,
                    REGION_DIMENSION.min(length - z),
                );
                let mut region = Region::new(origin, size, self);
                builder.build(&mut region);
                built += 1;
                z += REGION_DIMENSION;
            }
            x += REGION_DIMENSION;
        }

        self.refresh_all_face_info();
        info!(
            "built {} regions ({}x{}x{} cells) in {:?}",
            built,
            width,
            height,
            length,
            start.elapsed()
        );
    }

    /// Recomputes the exposed-face bitmask of one cell from its six
    /// neighbors. A face is exposed when the neighbor behind it is not an
    /// active solid block; map edges count as exposed.
    fn refresh_face_info(&mut self, x: i32, y: i32, z: i32) {
        let mut face_info = 0u8;
        let here = BlockIndex::new(x, y, z);
        for side in BlockSide::all() {
            let neighbor = here + side.offset();
            if !self.block_at_index(&neighbor).is_solid() {
                face_info |= side.mask();
            }
        }
        let index = self.cell_index(x, y, z);
        self.blocks[index].face_info = face_info;
    }

    /// Refreshes a cell and its six neighbors after an edit.
    fn refresh_face_info_around(&mut self, x: i32, y: i32, z: i32) {
        self.refresh_face_info(x, y, z);
        let here = BlockIndex::new(x, y, z);
        for side in BlockSide::all() {
            let neighbor = here + side.offset();
            if self.in_bounds(neighbor.x, neighbor.y, neighbor.z) {
                self.refresh_face_info(neighbor.x, neighbor.y, neighbor.z);
            }
        }
    }

    /// Recomputes the face bitmask of every active cell.
    fn refresh_all_face_info(&mut self) {
        let start = std::time::Instant::now();
        for x in 0..self.width() {
            for z in 0..self.length() {
                for y in 0..self.height() {
                    if self.blocks[self.cell_index(x, y, z)].is_active {
                        self.refresh_face_info(x, y, z);
                    }
                }
            }
        }
        debug!("face info pass took {:?}", start.elapsed());
    }
}
