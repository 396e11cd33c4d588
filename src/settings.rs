//! # World Settings Module
//!
//! This module provides the configuration constants the world store and
//! the generators consume: map extents, sea level, snowline, player
//! reach, the generation seed, and the strategy used to populate
//! regions. Settings can be loaded from a JSON file; any missing field
//! falls back to its default.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::world::region::REGION_DIMENSION;

/// Selects which region-building strategy populates the world.
///
/// This is an explicit configuration value handed to the world-build
/// call, so strategies can be swapped without touching any caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratorKind {
    /// A flat reference terrain, useful for editor and collision testing.
    Flat,
    /// A uniform rock slab with carved tunnel systems.
    Caves,
    /// The full layered landscape pipeline.
    Landscape,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Flat => write!(f, "flat"),
            GeneratorKind::Caves => write!(f, "caves"),
            GeneratorKind::Landscape => write!(f, "landscape"),
        }
    }
}

/// Configuration for one voxel world.
///
/// The map occupies `[0, map_width) x [0, map_height) x [0, map_length)`;
/// everything outside is out of bounds and reads as empty. The remaining
/// fields parameterize generation and targeting but are consumed
/// read-only by this core.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    /// Map extent along the X axis, in cells.
    pub map_width: i32,
    /// Map extent along the Y axis, in cells.
    pub map_height: i32,
    /// Map extent along the Z axis, in cells.
    pub map_length: i32,
    /// Height the water flood and several generator layers key off.
    pub sea_level: i32,
    /// Height above which the rock layer turns to snow.
    pub snowline: i32,
    /// Maximum targeting distance for the ray march, in world units.
    pub player_reach: f32,
    /// Seed for every pseudorandom decision the generators make.
    pub seed: u64,
    /// The region-building strategy `run()` hands to the world build.
    pub generator: GeneratorKind,
}

impl Default for WorldSettings {
    fn default() -> Self {
        WorldSettings {
            map_width: 96,
            map_height: 128,
            map_length: 96,
            sea_level: 30,
            snowline: 80,
            player_reach: 6.0,
            seed: 0x5EED,
            generator: GeneratorKind::Landscape,
        }
    }
}

impl WorldSettings {
    /// Loads settings from a JSON file.
    ///
    /// Fields absent from the file keep their defaults. The loaded values
    /// are sanitized before being returned.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON settings file
    ///
    /// # Returns
    /// The sanitized settings, or the underlying I/O or parse error.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        let settings: WorldSettings = serde_json::from_str(&text)?;
        Ok(settings.sanitized())
    }

    /// Clamps out-of-range values to sane ones instead of failing.
    ///
    /// Map extents are held to at least one region horizontally and a
    /// minimal column vertically; sea level and snowline are clamped into
    /// the map; a non-positive reach is raised to one cell.
    pub fn sanitized(mut self) -> Self {
        let original = self;
        self.map_width = self.map_width.max(REGION_DIMENSION);
        self.map_length = self.map_length.max(REGION_DIMENSION);
        self.map_height = self.map_height.max(8);
        self.sea_level = self.sea_level.clamp(0, self.map_height - 1);
        self.snowline = self.snowline.clamp(0, self.map_height - 1);
        if self.player_reach <= 0.0 {
            self.player_reach = 1.0;
        }
        if self != original {
            log::warn!("world settings contained out-of-range values, clamped: {self:?}");
        }
        self
    }

    /// The total number of cells in the map.
    pub fn cell_count(&self) -> usize {
        self.map_width as usize * self.map_height as usize * self.map_length as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_already_sane() {
        let settings = WorldSettings::default();
        assert_eq!(settings, settings.sanitized());
    }

    #[test]
    fn sanitizing_clamps_degenerate_extents() {
        let settings = WorldSettings {
            map_width: 0,
            map_height: -4,
            map_length: 3,
            sea_level: 500,
            snowline: -2,
            player_reach: 0.0,
            ..WorldSettings::default()
        }
        .sanitized();
        assert_eq!(settings.map_width, REGION_DIMENSION);
        assert_eq!(settings.map_length, REGION_DIMENSION);
        assert_eq!(settings.map_height, 8);
        assert_eq!(settings.sea_level, settings.map_height - 1);
        assert_eq!(settings.snowline, 0);
        assert_eq!(settings.player_reach, 1.0);
    }

    #[test]
    fn settings_parse_from_partial_json() {
        let settings: WorldSettings =
            serde_json::from_str(r#"{ "seed": 99, "generator": "flat" }"#).unwrap();
        assert_eq!(settings.seed, 99);
        assert_eq!(settings.generator, GeneratorKind::Flat);
        assert_eq!(settings.map_width, WorldSettings::default().map_width);
    }
}
