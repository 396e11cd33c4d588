#![warn(missing_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel World
//!
//! The engineering core of a voxel world: bounded 3D block storage,
//! procedural terrain generation, and the spatial queries that let a
//! viewpoint target and select blocks.
//!
//! ## Key Modules
//!
//! * `settings` - World configuration constants and the generator choice
//! * `world` - The block grid, region construction, and coordinate math
//! * `world::generators` - Interchangeable region-building strategies
//! * `world::selection` - Ray targeting and multi-block selection
//!
//! ## Architecture
//!
//! Rendering, audio, input, cameras, and UI are external collaborators.
//! They consume this core exclusively through the world's lookup and
//! edit operations and the selection component's targets; nothing here
//! depends on them.
//!
//! ## Usage
//!
//! ```no_run
//! use voxel_world::settings::WorldSettings;
//! use voxel_world::world::generators::landscape::LandscapeBuilder;
//! use voxel_world::world::World;
//!
//! let settings = WorldSettings::default();
//! let mut world = World::new(settings);
//! let mut builder = LandscapeBuilder::new(world.settings());
//! world.build_regions(&mut builder);
//! ```

use std::collections::HashMap;
use std::path::Path;

use cgmath::{Point3, Vector3};
use log::{info, warn};

use crate::settings::{GeneratorKind, WorldSettings};
use crate::world::aabb::Ray;
use crate::world::block::block_type::BlockType;
use crate::world::generators::caves::CaveTerrainBuilder;
use crate::world::generators::flat::FlatBuilder;
use crate::world::generators::landscape::LandscapeBuilder;
use crate::world::generators::RegionBuilder;
use crate::world::selection::BlockSelection;
use crate::world::World;

pub mod settings;
pub mod world;

/// Builds a demo world and logs what came out of it.
///
/// Settings are read from the JSON file named by the first command line
/// argument when one is given; a missing or unreadable file falls back
/// to the defaults with a warning. The configured generator strategy
/// populates every region, then a sample ray is dropped through the map
/// center to exercise targeting.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    let settings = match std::env::args().nth(1) {
        Some(path) => WorldSettings::load(Path::new(&path)).unwrap_or_else(|error| {
            warn!("could not load settings from {path}: {error}, using defaults");
            WorldSettings::default()
        }),
        None => WorldSettings::default(),
    };

    info!(
        "building a {} world, seed {}",
        settings.generator, settings.seed
    );

    let mut world = World::new(settings);
    let mut builder: Box<dyn RegionBuilder> = match settings.generator {
        GeneratorKind::Flat => Box::new(FlatBuilder::new(settings.sea_level + 10)),
        GeneratorKind::Caves => Box::new(CaveTerrainBuilder::new(world.settings())),
        GeneratorKind::Landscape => Box::new(LandscapeBuilder::new(world.settings())),
    };
    world.build_regions(builder.as_mut());

    for (block_type, count) in material_census(&world) {
        info!("{block_type:?}: {count} cells");
    }

    // Drop a ray onto the center column's surface to exercise targeting.
    let (center_x, center_z) = (world.width() / 2, world.length() / 2);
    let surface_y = (0..world.height())
        .rev()
        .find(|&y| world.block_at(center_x, y, center_z).is_solid())
        .unwrap_or(0);
    let origin = Point3::new(
        center_x as f32 + 0.5,
        surface_y as f32 + 3.5,
        center_z as f32 + 0.5,
    );
    let ray = Ray::new(origin, Vector3::new(0.0, -1.0, 0.0));
    let mut selection = BlockSelection::new();
    selection.find_aimed_block(&world, &ray);
    match selection.aimed_solid_block() {
        Some(block) => info!(
            "center ray hit {:?} at ({}, {}, {})",
            block.block_type, block.position.x, block.position.y, block.position.z
        ),
        None => info!("center ray hit nothing within reach"),
    }
}

/// Counts how many cells hold each material.
fn material_census(world: &World) -> HashMap<BlockType, usize> {
    let mut census = HashMap::new();
    for x in 0..world.width() {
        for z in 0..world.length() {
            for y in 0..world.height() {
                *census
                    .entry(world.block_at(x, y, z).block_type())
                    .or_insert(0) += 1;
            }
        }
    }
    census
}
