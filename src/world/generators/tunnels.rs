//! # Tunnel Carving Module
//!
//! Shared cave carver used by the landscape and cave-terrain builders.
//! Each tunnel is a randomized 3D walk that paints spheres of empty
//! cells as it goes, biased permanently downward so tunnel systems sink
//! into the map.

use fastrand::Rng;
use log::debug;

use crate::world::block::block_type::BlockType;

use super::map_volume::MapVolume;

/// Steps each tunnel walk runs for before it is abandoned.
const TUNNEL_STEPS: u32 = 1000;

/// Smallest and largest radius a tunnel sphere may take.
const MIN_RADIUS: i32 = 1;
const MAX_RADIUS: i32 = 4;

/// Carves `count` independent tunnels into the volume.
pub(crate) fn carve_tunnels(map: &mut MapVolume, rng: &mut Rng, count: u32) {
    for _ in 0..count {
        let radius = rng.i32(0..5) + 2;
        carve_tunnel(map, rng, TUNNEL_STEPS, radius);
    }
    debug!("carved {count} tunnels");
}

/// Carves one tunnel: a random walk from a random start, painting a
/// sphere of empty cells at every step that keeps a safe margin from
/// the map edges. The radius drifts randomly and is clamped to
/// `[MIN_RADIUS, MAX_RADIUS]`.
fn carve_tunnel(map: &mut MapVolume, rng: &mut Rng, steps: u32, mut radius: i32) {
    let mut x = rng.i32(0..map.width());
    let mut y = rng.i32(0..map.height()) / 2;
    let mut z = rng.i32(0..map.length());

    let x_dir = if rng.bool() { 1 } else { -1 };
    let z_dir = if rng.bool() { 1 } else { -1 };

    for _ in 0..steps {
        let margin = radius + 5;
        if x > margin
            && y > margin
            && z > margin
            && x < map.width() - margin
            && y < map.height() - margin
            && z < map.length() - margin
        {
            map.paint_at_point(x, y, z, radius, BlockType::NONE);
        }

        x += rng.i32(0..3) * x_dir;
        y -= rng.i32(0..2);
        z += rng.i32(0..3) * z_dir;

        radius += rng.i32(0..2) - rng.i32(0..2);
        radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tunnels_empty_cells_out_of_a_solid_volume() {
        let mut map = MapVolume::new(64, 64, 64);
        for x in 0..64 {
            for z in 0..64 {
                for y in 0..64 {
                    map.set(x, y, z, BlockType::ROCK);
                }
            }
        }

        let mut rng = Rng::with_seed(11);
        carve_tunnels(&mut map, &mut rng, 20);

        let carved = (0..64)
            .flat_map(|x| (0..64).flat_map(move |z| (0..64).map(move |y| (x, y, z))))
            .filter(|&(x, y, z)| map.get(x, y, z) == BlockType::NONE)
            .count();
        assert!(carved > 0, "expected at least one carved cell");
    }

    #[test]
    fn carving_is_deterministic_per_seed() {
        let mut first = MapVolume::new(48, 48, 48);
        let mut second = first.clone();

        let mut rng = Rng::with_seed(23);
        carve_tunnels(&mut first, &mut rng, 10);
        let mut rng = Rng::with_seed(23);
        carve_tunnels(&mut second, &mut rng, 10);

        assert!(first == second);
    }
}
