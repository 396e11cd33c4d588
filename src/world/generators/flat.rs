//! # Flat Builder Module
//!
//! The reference region builder: a completely flat terrain with a fixed
//! surface height. Useful as a predictable substrate for editor,
//! collision, and selection testing, and as the simplest demonstration
//! of the `RegionBuilder` contract.

use crate::world::block::block_type::BlockType;
use crate::world::region::Region;

use super::RegionBuilder;

/// Cells of rock below the dirt skin of each column.
const DIRT_DEPTH: i32 = 3;

/// Builds a flat world: rock up to a dirt skin, one grass cap per
/// column at `surface_height`.
pub struct FlatBuilder {
    surface_height: i32,
}

impl FlatBuilder {
    /// Creates a flat builder whose grass caps sit at `surface_height`.
    pub fn new(surface_height: i32) -> Self {
        FlatBuilder {
            surface_height: surface_height.max(0),
        }
    }
}

impl RegionBuilder for FlatBuilder {
    fn build(&mut self, region: &mut Region<'_>) {
        let origin = region.origin();
        let size = region.size();
        let surface = self.surface_height.min(origin.y + size.y - 1);

        for x in origin.x..origin.x + size.x {
            for z in origin.z..origin.z + size.z {
                for y in origin.y..=surface {
                    let block_type = if y == surface {
                        BlockType::GRASS
                    } else if y >= surface - DIRT_DEPTH {
                        BlockType::DIRT
                    } else {
                        BlockType::ROCK
                    };
                    region.set_block(x, y, z, block_type);
                }
            }
        }
    }
}
