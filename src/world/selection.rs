//! # Block Selection Module
//!
//! This module provides `BlockSelection`, the stateful targeting
//! component. Each update tick it marches a viewpoint ray through the
//! grid to find the voxel being aimed at, and while a grid selection is
//! in progress it expands the rectangle between the recorded start
//! corner and the currently aimed voxel into the selection set.
//!
//! ## Sampling Model
//!
//! The march samples the ray at fixed 0.2-unit steps out to the player
//! reach. Features thinner than the step size can in principle be
//! skipped; that is a known property of this targeting model. Swapping
//! in an exact cell traversal would change which voxel a grazing ray
//! reports, so any such change has to be treated as a behavior change,
//! not a fix.

use std::collections::HashMap;

use crate::world::aabb::Ray;
use crate::world::block::block_type::BlockType;
use crate::world::block_index::BlockIndex;
use crate::world::positioned_block::PositionedBlock;
use crate::world::World;

/// Distance between consecutive ray samples, in world units.
const RAY_STEP: f32 = 0.2;

/// Build-feasibility classification of one selection entry.
///
/// Derived from the material's `is_buildable` predicate and consumed
/// only by presentation (selection highlight tinting).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Buildability {
    /// A structure may be placed on this cell.
    Buildable,
    /// The cell is selected but cannot be built on.
    Obstructed,
}

impl From<BlockType> for Buildability {
    fn from(block_type: BlockType) -> Self {
        if block_type.is_buildable() {
            Buildability::Buildable
        } else {
            Buildability::Obstructed
        }
    }
}

/// Stateful voxel targeting and multi-block selection.
///
/// The component starts idle. Recording a start corner switches it into
/// grid-selecting mode, where each targeting update recomputes the
/// rectangle between the corner and the aimed voxel; cancelling returns
/// it to idle with all state cleared.
#[derive(Default)]
pub struct BlockSelection {
    aimed_solid_block: Option<PositionedBlock>,
    aimed_empty_block: Option<PositionedBlock>,
    start_block: Option<PositionedBlock>,
    selecting_grid: bool,
    selected_blocks: HashMap<PositionedBlock, Buildability>,
}

impl BlockSelection {
    /// Creates an idle selection component with no targets.
    pub fn new() -> Self {
        BlockSelection::default()
    }

    /// The first solid voxel the viewpoint ray strikes, if any.
    pub fn aimed_solid_block(&self) -> Option<PositionedBlock> {
        self.aimed_solid_block
    }

    /// The most recent empty cell the viewpoint ray passed through.
    pub fn aimed_empty_block(&self) -> Option<PositionedBlock> {
        self.aimed_empty_block
    }

    /// The recorded first corner of a grid selection, if any.
    pub fn start_block(&self) -> Option<PositionedBlock> {
        self.start_block
    }

    /// Whether a grid selection is in progress.
    pub fn is_selecting_grid(&self) -> bool {
        self.selecting_grid
    }

    /// The current selection set, keyed by position and material.
    pub fn selected_blocks(&self) -> &HashMap<PositionedBlock, Buildability> {
        &self.selected_blocks
    }

    /// Records the first corner of a grid selection and switches into
    /// grid-selecting mode.
    ///
    /// # Arguments
    /// * `world` - The world to read the corner's material from
    /// * `position` - The corner cell
    pub fn set_starting_point(&mut self, world: &World, position: BlockIndex) {
        let block_type = world.block_at_index(&position).block_type();
        self.start_block = Some(PositionedBlock::new(position, block_type));
        self.selecting_grid = true;
    }

    /// Clears the selection set, the start corner, and the aimed solid
    /// target, returning the component to idle.
    pub fn cancel_selection(&mut self) {
        self.selected_blocks.clear();
        self.start_block = None;
        self.aimed_solid_block = None;
        self.selecting_grid = false;
    }

    /// Marches the viewpoint ray to find the aimed voxel.
    ///
    /// Samples the ray every `RAY_STEP` units out to the player reach.
    /// Empty cells update the aimed-empty target as the march passes
    /// through them. The first active solid cell either becomes the
    /// aimed-solid target or, while a grid selection is in progress,
    /// the far corner of a recomputed selection rectangle. When the
    /// reach is exhausted without a hit the aimed-solid target is
    /// cleared.
    ///
    /// # Arguments
    /// * `world` - The world to sample
    /// * `ray` - The viewpoint ray for this tick
    pub fn find_aimed_block(&mut self, world: &World, ray: &Ray) {
        let reach = world.settings().player_reach;
        let mut distance = 0.0f32;

        while distance <= reach {
            let index = BlockIndex::from(ray.point_at(distance));
            let block = world.block_at_index(&index);
            let block_type = block.block_type();

            if block_type == BlockType::NONE {
                self.aimed_empty_block = Some(PositionedBlock::new(index, block_type));
            } else if block.is_active {
                let current = PositionedBlock::new(index, block_type);
                if self.selecting_grid {
                    if let Some(start) = self.start_block {
                        self.calculate_grid(world, start, current);
                    }
                } else {
                    self.aimed_solid_block = Some(current);
                }
                return;
            }

            distance += RAY_STEP;
        }

        self.aimed_solid_block = None;
    }

    /// Replaces the selection set with the rectangle between the start
    /// corner and the current corner, swept in the start corner's
    /// horizontal plane.
    ///
    /// The sweep direction per axis follows the corner ordering, so
    /// increasing and decreasing spans are enumerated without
    /// normalizing the corners first. Columns holding no material are
    /// skipped.
    fn calculate_grid(&mut self, world: &World, start: PositionedBlock, current: PositionedBlock) {
        self.selected_blocks.clear();

        let start_pos = start.position;
        let end_pos = current.position;

        if start_pos.x <= end_pos.x && start_pos.z <= end_pos.z {
            for x in start_pos.x..=end_pos.x {
                for z in start_pos.z..=end_pos.z {
                    self.add_selected_block(world, x, start_pos.y, z);
                }
            }
        } else if start_pos.x <= end_pos.x && start_pos.z >= end_pos.z {
            for x in start_pos.x..=end_pos.x {
                for z in (end_pos.z..=start_pos.z).rev() {
                    self.add_selected_block(world, x, start_pos.y, z);
                }
            }
        } else if start_pos.x >= end_pos.x && start_pos.z >= end_pos.z {
            for x in (end_pos.x..=start_pos.x).rev() {
                for z in (end_pos.z..=start_pos.z).rev() {
                    self.add_selected_block(world, x, start_pos.y, z);
                }
            }
        } else {
            for x in (end_pos.x..=start_pos.x).rev() {
                for z in start_pos.z..=end_pos.z {
                    self.add_selected_block(world, x, start_pos.y, z);
                }
            }
        }
    }

    /// Adds one cell to the selection set if it holds any material,
    /// classifying it by build feasibility.
    fn add_selected_block(&mut self, world: &World, x: i32, y: i32, z: i32) {
        let index = BlockIndex::new(x, y, z);
        let block_type = world.block_type_at_point(index.as_point());

        if block_type != BlockType::NONE {
            self.selected_blocks.insert(
                PositionedBlock::new(index, block_type),
                Buildability::from(block_type),
            );
        }
    }
}
