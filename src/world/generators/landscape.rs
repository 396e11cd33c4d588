//! # Landscape Builder Module
//!
//! The full terrain pipeline: layered noise height fields laid down as
//! rock and dirt, valley carving between the dirt passes, tree
//! planting, tunnel carving, a sand layer, and a final water flood up
//! to `sea_level + 35`.
//!
//! ## Stage Discipline
//!
//! Stages run in a fixed order and, except for the carving stages,
//! only write cells that are still empty. The carvers are the two
//! stages allowed to erase earlier material.
//!
//! ## Determinism
//!
//! All randomness flows from one `fastrand::Rng` seeded with the world
//! seed; every noise octave derives its Perlin seed from the same seed
//! on its own lane. Rebuilding with identical settings reproduces the
//! volume cell for cell.

use fastrand::Rng;
use log::{debug, info};

use crate::settings::WorldSettings;
use crate::world::block::block_type::BlockType;
use crate::world::region::Region;

use super::map_volume::MapVolume;
use super::noise_fields::{sum_octaves, HeightField, PerlinOctave};
use super::tunnels;
use super::{copy_into_region, RegionBuilder};

/// Tunnels carved by the cave stage.
const TUNNEL_COUNT: u32 = 200;

/// Octave seed lanes, one block of 16 per height field.
const ROCK_LANE: u32 = 0;
const DIRT_LOWER_LANE: u32 = 16;
const VALLEY_FLOOR_LANE: u32 = 32;
const VALLEY_CEILING_LANE: u32 = 48;
const DIRT_UPPER_LANE: u32 = 64;
const SAND_LANE: u32 = 80;

const ROCK_OCTAVES: [PerlinOctave; 6] = [
    PerlinOctave { frequency: 4.0, amplitude: 5.0 },
    PerlinOctave { frequency: 8.0, amplitude: 0.5 },
    PerlinOctave { frequency: 12.0, amplitude: 0.25 },
    PerlinOctave { frequency: 26.0, amplitude: 0.125 },
    PerlinOctave { frequency: 34.0, amplitude: 0.0625 },
    PerlinOctave { frequency: 64.0, amplitude: 0.3825 },
];

const DIRT_OCTAVES: [PerlinOctave; 6] = [
    PerlinOctave { frequency: 4.0, amplitude: 2.0 },
    PerlinOctave { frequency: 8.0, amplitude: 0.5 },
    PerlinOctave { frequency: 12.0, amplitude: 0.25 },
    PerlinOctave { frequency: 26.0, amplitude: 0.125 },
    PerlinOctave { frequency: 34.0, amplitude: 0.0625 },
    PerlinOctave { frequency: 64.0, amplitude: 0.0125 },
];

const VALLEY_FLOOR_OCTAVES: [PerlinOctave; 6] = [
    PerlinOctave { frequency: 1.0, amplitude: 2.0 },
    PerlinOctave { frequency: 8.0, amplitude: 1.5 },
    PerlinOctave { frequency: 12.0, amplitude: 0.25 },
    PerlinOctave { frequency: 26.0, amplitude: 2.625 },
    PerlinOctave { frequency: 34.0, amplitude: 0.0625 },
    PerlinOctave { frequency: 64.0, amplitude: 0.1425 },
];

const VALLEY_CEILING_OCTAVES: [PerlinOctave; 6] = [
    PerlinOctave { frequency: 2.0, amplitude: 2.0 },
    PerlinOctave { frequency: 8.0, amplitude: 0.5 },
    PerlinOctave { frequency: 12.0, amplitude: 0.25 },
    PerlinOctave { frequency: 26.0, amplitude: 3.125 },
    PerlinOctave { frequency: 34.0, amplitude: 0.0625 },
    PerlinOctave { frequency: 64.0, amplitude: 0.1425 },
];

const SAND_OCTAVES: [PerlinOctave; 6] = [
    PerlinOctave { frequency: 4.0, amplitude: 2.0 },
    PerlinOctave { frequency: 8.0, amplitude: 0.5 },
    PerlinOctave { frequency: 12.0, amplitude: 0.25 },
    PerlinOctave { frequency: 26.0, amplitude: 0.125 },
    PerlinOctave { frequency: 34.0, amplitude: 0.0625 },
    PerlinOctave { frequency: 64.0, amplitude: 0.0425 },
];

/// Builds the full layered landscape. The map volume is generated once,
/// on the first region request, and every region is served from it.
pub struct LandscapeBuilder {
    settings: WorldSettings,
    map: Option<MapVolume>,
}

impl LandscapeBuilder {
    /// Creates a landscape builder for the given world configuration.
    pub fn new(settings: &WorldSettings) -> Self {
        LandscapeBuilder {
            settings: *settings,
            map: None,
        }
    }
}

impl RegionBuilder for LandscapeBuilder {
    fn build(&mut self, region: &mut Region<'_>) {
        let settings = self.settings;
        let map = self.map.get_or_insert_with(|| generate_landscape(&settings));
        copy_into_region(map, region);
    }
}

/// Runs the full pipeline and returns the finished material volume.
pub(crate) fn generate_landscape(settings: &WorldSettings) -> MapVolume {
    let start = std::time::Instant::now();
    let mut map = MapVolume::new(
        settings.map_width,
        settings.map_height,
        settings.map_length,
    );
    let mut rng = Rng::with_seed(settings.seed);

    map.clear();
    rock_layer(&mut map, &mut rng, settings);
    dirt_layer(&mut map, &mut rng, settings, 15, false, DIRT_LOWER_LANE);
    carve_valleys(&mut map, settings);
    dirt_layer(&mut map, &mut rng, settings, 10, true, DIRT_UPPER_LANE);
    tunnels::carve_tunnels(&mut map, &mut rng, TUNNEL_COUNT);
    sand_layer(&mut map, settings);
    flood_water(&mut map, settings);

    info!(
        "landscape generated for seed {} in {:?}",
        settings.seed,
        start.elapsed()
    );
    map
}

/// Converts a summed noise value to a column height.
fn column_height(field: &HeightField, x: i32, z: i32, scale: f64, base_offset: i32, settings: &WorldSettings) -> i32 {
    let height = (field.at(x, z) * scale) as i32 + base_offset + settings.sea_level;
    height.min(settings.map_height)
}

/// Lays down the base rock columns. Cells above the snowline (with a
/// small random jitter) become snow, and one cell in eight is gravel.
fn rock_layer(map: &mut MapVolume, rng: &mut Rng, settings: &WorldSettings) {
    let field = sum_octaves(
        &ROCK_OCTAVES,
        settings.map_width,
        settings.map_length,
        settings.seed,
        ROCK_LANE,
    );

    for x in 0..map.width() {
        for z in 0..map.length() {
            let height = column_height(&field, x, z, 10.0, 15, settings);
            for y in 0..height {
                if y > settings.snowline + rng.i32(0..3) {
                    map.set(x, y, z, BlockType::SNOW);
                } else if rng.i32(0..8) == 1 {
                    map.set(x, y, z, BlockType::GRAVEL);
                } else {
                    map.set(x, y, z, BlockType::ROCK);
                }
            }
        }
    }
    debug!("rock layer done");
}

/// Fills still-empty cells up to a dirt height field. The topmost cell
/// of each filled column becomes grass, or (when `trees` is set and a
/// rare roll hits) the root of a stamped tree.
fn dirt_layer(
    map: &mut MapVolume,
    rng: &mut Rng,
    settings: &WorldSettings,
    base_offset: i32,
    trees: bool,
    lane: u32,
) {
    let field = sum_octaves(
        &DIRT_OCTAVES,
        settings.map_width,
        settings.map_length,
        settings.seed,
        lane,
    );

    for x in 0..map.width() {
        for z in 0..map.length() {
            let height = column_height(&field, x, z, 20.0, base_offset, settings);
            for y in 0..height {
                if map.get(x, y, z) != BlockType::NONE {
                    continue;
                }
                if y == height - 1 {
                    if rng.i32(0..250) == 1 && trees {
                        build_tree(map, rng, x, y, z);
                    } else {
                        map.set(x, y, z, BlockType::GRASS);
                    }
                } else if rng.i32(0..20) == 1 {
                    map.set(x, y, z, BlockType::GRAVEL);
                } else {
                    map.set(x, y, z, BlockType::DIRT);
                }
            }
        }
    }
    debug!("dirt layer done (offset {base_offset}, trees {trees})");
}

/// Carves valleys: wherever the ceiling field rises above the floor
/// field, the band between the two heights is cleared back to air.
fn carve_valleys(map: &mut MapVolume, settings: &WorldSettings) {
    let floor = sum_octaves(
        &VALLEY_FLOOR_OCTAVES,
        settings.map_width,
        settings.map_length,
        settings.seed,
        VALLEY_FLOOR_LANE,
    );
    let ceiling = sum_octaves(
        &VALLEY_CEILING_OCTAVES,
        settings.map_width,
        settings.map_length,
        settings.seed,
        VALLEY_CEILING_LANE,
    );

    for x in 0..map.width() {
        for z in 0..map.length() {
            let low = column_height(&floor, x, z, 10.0, 3, settings);
            let high = column_height(&ceiling, x, z, 15.0, 5, settings);
            for y in low.max(0)..high {
                map.set(x, y, z, BlockType::NONE);
            }
        }
    }
    debug!("valley carving done");
}

/// Stamps one tree: a vertical trunk of randomized height topped by a
/// jittered, roughly spherical cluster of leaves. Leaves are only
/// written into in-bounds cells that are still empty.
fn build_tree(map: &mut MapVolume, rng: &mut Rng, x: i32, y: i32, z: i32) {
    let trunk_height = 4 + rng.i32(0..3);

    // A trunk that would poke out of the map is not planted at all.
    if y + trunk_height < map.height() {
        for trunk_y in y..y + trunk_height {
            map.set(x, trunk_y, z, BlockType::TREE);
        }
    }

    let radius = 3 + rng.i32(0..2);
    let crown_y = y + trunk_height;
    let cluster_size = 40 + rng.i32(0..4);

    for _ in 0..cluster_size {
        let leaf_x = x + rng.i32(0..radius) - rng.i32(0..radius);
        let leaf_y = crown_y + rng.i32(0..radius) - rng.i32(0..radius);
        let leaf_z = z + rng.i32(0..radius) - rng.i32(0..radius);

        if map.within_bounds(leaf_x, leaf_y, leaf_z)
            && map.get(leaf_x, leaf_y, leaf_z) == BlockType::NONE
        {
            map.set(leaf_x, leaf_y, leaf_z, BlockType::LEAVES);
        }
    }
}

/// Fills still-empty cells up to the sand height field.
fn sand_layer(map: &mut MapVolume, settings: &WorldSettings) {
    let field = sum_octaves(
        &SAND_OCTAVES,
        settings.map_width,
        settings.map_length,
        settings.seed,
        SAND_LANE,
    );

    for x in 0..map.width() {
        for z in 0..map.length() {
            let height = column_height(&field, x, z, 5.0, 20, settings);
            for y in 0..height {
                if map.get(x, y, z) == BlockType::NONE {
                    map.set(x, y, z, BlockType::SAND);
                }
            }
        }
    }
    debug!("sand layer done");
}

/// Floods each column downward from `sea_level + 35`: empty cells
/// become water until the first occupied cell. A grass blocker turns to
/// sand, since grass does not survive under water.
fn flood_water(map: &mut MapVolume, settings: &WorldSettings) {
    let surface = (settings.sea_level + 35).min(map.height() - 1);

    for x in 0..map.width() {
        for z in 0..map.length() {
            for y in (1..=surface).rev() {
                match map.get(x, y, z) {
                    BlockType::NONE => map.set(x, y, z, BlockType::WATER),
                    BlockType::GRASS => {
                        map.set(x, y, z, BlockType::SAND);
                        break;
                    }
                    _ => break,
                }
            }
        }
    }
    debug!("water flood done");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> WorldSettings {
        WorldSettings {
            map_width: 48,
            map_height: 96,
            map_length: 48,
            sea_level: 20,
            snowline: 60,
            seed: 0xA11CE,
            ..WorldSettings::default()
        }
    }

    #[test]
    fn identical_seeds_reproduce_the_volume() {
        let settings = test_settings();
        let first = generate_landscape(&settings);
        let second = generate_landscape(&settings);
        assert!(first == second);
    }

    #[test]
    fn different_seeds_change_the_volume() {
        let settings = test_settings();
        let other = WorldSettings {
            seed: settings.seed + 1,
            ..settings
        };
        assert!(generate_landscape(&settings) != generate_landscape(&other));
    }

    #[test]
    fn water_never_rests_directly_on_grass() {
        let map = generate_landscape(&test_settings());
        for x in 0..map.width() {
            for z in 0..map.length() {
                for y in 1..map.height() {
                    if map.get(x, y, z) == BlockType::WATER {
                        assert_ne!(
                            map.get(x, y - 1, z),
                            BlockType::GRASS,
                            "grass under water at ({x}, {y}, {z})"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn the_pipeline_lays_down_the_core_materials() {
        let map = generate_landscape(&test_settings());
        let mut seen = std::collections::HashSet::new();
        for x in 0..map.width() {
            for z in 0..map.length() {
                for y in 0..map.height() {
                    seen.insert(map.get(x, y, z));
                }
            }
        }
        for expected in [
            BlockType::ROCK,
            BlockType::DIRT,
            BlockType::SAND,
            BlockType::WATER,
            BlockType::NONE,
        ] {
            assert!(seen.contains(&expected), "missing {expected:?}");
        }
    }
}
