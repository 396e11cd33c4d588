//! # Generators Module
//!
//! This module provides the region-construction contract and the
//! interchangeable strategies that implement it, together with the
//! noise utilities and the scratch volume they share.
//!
//! ## Strategy Contract
//!
//! A `RegionBuilder` is handed one writable region at a time and fills
//! it with material data. Builders must be deterministic given their
//! seed and the region's location, and must not touch voxels outside
//! the region they were given.

use crate::world::block::block_type::BlockType;
use crate::world::region::Region;

use map_volume::MapVolume;

pub mod caves;
pub mod flat;
pub mod landscape;
pub mod map_volume;
pub mod noise_fields;

mod tunnels;

/// The strategy contract for populating one region of the world.
///
/// Implementations may keep state across calls (the landscape builder
/// generates its full map once and serves every region from it), which
/// is why `build` takes `&mut self`.
pub trait RegionBuilder {
    /// Writes material data into the given region.
    ///
    /// Side effect only; the world owns the storage. The call runs to
    /// completion before the region is considered usable.
    fn build(&mut self, region: &mut Region<'_>);
}

/// Copies a region-sized window out of a generated map volume into the
/// region. Empty cells are skipped so the region keeps its default
/// inactive state there.
pub(crate) fn copy_into_region(map: &MapVolume, region: &mut Region<'_>) {
    let origin = region.origin();
    let size = region.size();
    for x in origin.x..origin.x + size.x {
        for z in origin.z..origin.z + size.z {
            for y in origin.y..origin.y + size.y {
                let block_type = map.get(x, y, z);
                if block_type != BlockType::NONE {
                    region.set_block(x, y, z, block_type);
                }
            }
        }
    }
}
