//! # Cave Terrain Builder Module
//!
//! A region builder that produces a uniform rock slab riddled with
//! carved tunnel systems. It exists mostly to exercise the cave carver
//! in isolation from the full landscape pipeline, and as a second
//! interchangeable strategy behind the `RegionBuilder` contract.

use fastrand::Rng;
use log::debug;

use crate::settings::WorldSettings;
use crate::world::block::block_type::BlockType;
use crate::world::region::Region;

use super::map_volume::MapVolume;
use super::tunnels;
use super::{copy_into_region, RegionBuilder};

/// Tunnels carved into the slab.
const TUNNEL_COUNT: u32 = 100;

/// Cells of dirt skin below the grass cap of the slab.
const DIRT_DEPTH: i32 = 2;

/// Builds a rock slab up to `sea_level + 20` and carves tunnels
/// through it. The full map is generated lazily on the first region
/// request and served to every region from then on.
pub struct CaveTerrainBuilder {
    settings: WorldSettings,
    map: Option<MapVolume>,
}

impl CaveTerrainBuilder {
    /// Creates a cave terrain builder for the given world configuration.
    pub fn new(settings: &WorldSettings) -> Self {
        CaveTerrainBuilder {
            settings: *settings,
            map: None,
        }
    }

    fn generate_map(settings: &WorldSettings) -> MapVolume {
        let mut map = MapVolume::new(
            settings.map_width,
            settings.map_height,
            settings.map_length,
        );
        let mut rng = Rng::with_seed(settings.seed);

        let surface = (settings.sea_level + 20).min(settings.map_height - 1);
        for x in 0..map.width() {
            for z in 0..map.length() {
                for y in 0..=surface {
                    let block_type = if y == surface {
                        BlockType::GRASS
                    } else if y >= surface - DIRT_DEPTH {
                        BlockType::DIRT
                    } else {
                        BlockType::ROCK
                    };
                    map.set(x, y, z, block_type);
                }
            }
        }

        tunnels::carve_tunnels(&mut map, &mut rng, TUNNEL_COUNT);
        debug!("cave terrain map generated (surface at y={surface})");
        map
    }
}

impl RegionBuilder for CaveTerrainBuilder {
    fn build(&mut self, region: &mut Region<'_>) {
        let settings = self.settings;
        let map = self.map.get_or_insert_with(|| Self::generate_map(&settings));
        copy_into_region(map, region);
    }
}
