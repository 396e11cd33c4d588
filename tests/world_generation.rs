//! World construction tests: region tiling, builder isolation, and the
//! generation strategies exercised end to end through `build_regions`.

use voxel_world::settings::WorldSettings;
use voxel_world::world::block::block_type::BlockType;
use voxel_world::world::generators::caves::CaveTerrainBuilder;
use voxel_world::world::generators::flat::FlatBuilder;
use voxel_world::world::generators::landscape::LandscapeBuilder;
use voxel_world::world::generators::RegionBuilder;
use voxel_world::world::region::Region;
use voxel_world::world::World;

fn test_settings(seed: u64) -> WorldSettings {
    WorldSettings {
        map_width: 48,
        map_height: 96,
        map_length: 48,
        sea_level: 20,
        snowline: 60,
        seed,
        ..WorldSettings::default()
    }
}

fn landscape_world(seed: u64) -> World {
    let mut world = World::new(test_settings(seed));
    let mut builder = LandscapeBuilder::new(world.settings());
    world.build_regions(&mut builder);
    world
}

#[test]
fn landscape_worlds_are_deterministic_per_seed() {
    let first = landscape_world(42);
    let second = landscape_world(42);

    for x in 0..first.width() {
        for z in 0..first.length() {
            for y in 0..first.height() {
                assert_eq!(
                    first.block_at(x, y, z),
                    second.block_at(x, y, z),
                    "worlds diverged at ({x}, {y}, {z})"
                );
            }
        }
    }
}

#[test]
fn different_seeds_produce_different_worlds() {
    let first = landscape_world(42);
    let second = landscape_world(43);

    let mut differs = false;
    'scan: for x in 0..first.width() {
        for z in 0..first.length() {
            for y in 0..first.height() {
                if first.block_at(x, y, z) != second.block_at(x, y, z) {
                    differs = true;
                    break 'scan;
                }
            }
        }
    }
    assert!(differs, "seeds 42 and 43 generated identical worlds");
}

#[test]
fn landscape_floods_water_and_keeps_it_off_grass() {
    let world = landscape_world(7);

    let mut water_cells = 0usize;
    for x in 0..world.width() {
        for z in 0..world.length() {
            for y in 1..world.height() {
                if world.block_at(x, y, z).block_type() == BlockType::WATER {
                    water_cells += 1;
                    assert_ne!(
                        world.block_at(x, y - 1, z).block_type(),
                        BlockType::GRASS,
                        "water resting on grass at ({x}, {y}, {z})"
                    );
                }
            }
        }
    }
    assert!(water_cells > 0, "expected the flood stage to place water");
}

#[test]
fn landscape_cells_below_terrain_are_active_and_air_is_not() {
    let world = landscape_world(7);

    for x in 0..world.width() {
        for z in 0..world.length() {
            for y in 0..world.height() {
                let block = world.block_at(x, y, z);
                if block.block_type() == BlockType::NONE {
                    assert!(!block.is_active, "active air at ({x}, {y}, {z})");
                } else {
                    assert!(block.is_active, "inactive material at ({x}, {y}, {z})");
                }
            }
        }
    }
}

#[test]
fn flat_builder_caps_every_column_with_grass() {
    let settings = test_settings(1);
    let surface = settings.sea_level + 10;
    let mut world = World::new(settings);
    let mut builder = FlatBuilder::new(surface);
    world.build_regions(&mut builder);

    for x in 0..world.width() {
        for z in 0..world.length() {
            assert_eq!(world.block_at(x, surface, z).block_type(), BlockType::GRASS);
            assert_eq!(
                world.block_at(x, surface - 1, z).block_type(),
                BlockType::DIRT
            );
            assert_eq!(world.block_at(x, 0, z).block_type(), BlockType::ROCK);
            assert_eq!(
                world.block_at(x, surface + 1, z).block_type(),
                BlockType::NONE
            );
        }
    }
}

#[test]
fn cave_terrain_carves_air_pockets_into_the_slab() {
    let settings = test_settings(5);
    let mut world = World::new(settings);
    let mut builder = CaveTerrainBuilder::new(world.settings());
    world.build_regions(&mut builder);

    let surface = settings.sea_level + 20;
    let mut carved = 0usize;
    for x in 0..world.width() {
        for z in 0..world.length() {
            for y in 0..surface - 2 {
                if world.block_at(x, y, z).block_type() == BlockType::NONE {
                    carved += 1;
                }
            }
        }
    }
    assert!(carved > 0, "expected tunnels below the slab surface");
}

/// A builder that tries to write one marker outside its own region.
/// The region view must swallow the stray write.
struct TrespassingBuilder;

impl RegionBuilder for TrespassingBuilder {
    fn build(&mut self, region: &mut Region<'_>) {
        let origin = region.origin();
        if origin.x == 0 && origin.z == 0 {
            // (20, 0, 0) is inside the world but in a neighboring region.
            region.set_block(20, 0, 0, BlockType::ROCK);
            region.set_block(0, 0, 0, BlockType::ROCK);

            // Reads follow the same rule: in-region cells read back,
            // out-of-region cells resolve to air.
            assert_eq!(region.block_type_at(0, 0, 0), BlockType::ROCK);
            assert_eq!(region.block_type_at(20, 0, 0), BlockType::NONE);
        }
    }
}

#[test]
fn writes_outside_a_region_are_ignored() {
    let mut world = World::new(test_settings(0));
    let mut builder = TrespassingBuilder;
    world.build_regions(&mut builder);

    assert_eq!(world.block_at(0, 0, 0).block_type(), BlockType::ROCK);
    assert_eq!(world.block_at(20, 0, 0).block_type(), BlockType::NONE);
}

#[test]
fn region_tiling_covers_the_whole_map() {
    // A builder that writes one marker at its region origin proves every
    // region is visited, including clamped edge regions.
    struct OriginMarker;
    impl RegionBuilder for OriginMarker {
        fn build(&mut self, region: &mut Region<'_>) {
            let origin = region.origin();
            region.set_block(origin.x, 0, origin.z, BlockType::GRAVEL);
        }
    }

    let settings = WorldSettings {
        // 40 is not a multiple of the region dimension, forcing clamped
        // edge regions.
        map_width: 40,
        map_length: 40,
        ..test_settings(0)
    };
    let mut world = World::new(settings);
    assert_eq!(world.region_count(), 9);

    let mut builder = OriginMarker;
    world.build_regions(&mut builder);

    let mut markers = 0usize;
    for x in 0..world.width() {
        for z in 0..world.length() {
            if world.block_at(x, 0, z).block_type() == BlockType::GRAVEL {
                markers += 1;
            }
        }
    }
    assert_eq!(markers, 9);
}

#[test]
fn out_of_bounds_lookups_resolve_to_inactive_air() {
    let world = landscape_world(3);
    for (x, y, z) in [(-1, 0, 0), (0, -1, 0), (0, 0, -1), (48, 0, 0), (0, 96, 0)] {
        let block = world.block_at(x, y, z);
        assert_eq!(block.block_type(), BlockType::NONE);
        assert!(!block.is_active);
    }
}
