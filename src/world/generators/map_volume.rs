//! # Map Volume Module
//!
//! This module provides the scratch volume the full-map generators
//! sculpt before their material data is copied into world regions. It
//! is a plain `width x height x length` grid of materials with the
//! small set of painting operations the pipeline stages need.

use crate::world::block::block_type::BlockType;

/// A dense 3D grid of materials, independent of the world store.
#[derive(Clone, PartialEq, Eq)]
pub struct MapVolume {
    width: i32,
    height: i32,
    length: i32,
    cells: Vec<BlockType>,
}

impl MapVolume {
    /// Creates a volume with every cell set to `NONE`.
    pub fn new(width: i32, height: i32, length: i32) -> Self {
        let (width, height, length) = (width.max(0), height.max(0), length.max(0));
        MapVolume {
            width,
            height,
            length,
            cells: vec![BlockType::NONE; (width * height * length) as usize],
        }
    }

    /// Volume extent along the X axis, in cells.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Volume extent along the Y axis, in cells.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Volume extent along the Z axis, in cells.
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Whether a coordinate lies inside the volume.
    pub fn within_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height && z >= 0 && z < self.length
    }

    fn cell_index(&self, x: i32, y: i32, z: i32) -> usize {
        ((x as usize * self.length as usize) + z as usize) * self.height as usize + y as usize
    }

    /// Reads a cell. Out-of-bounds coordinates read as `NONE`.
    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockType {
        if self.within_bounds(x, y, z) {
            self.cells[self.cell_index(x, y, z)]
        } else {
            BlockType::NONE
        }
    }

    /// Writes a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) {
        if self.within_bounds(x, y, z) {
            let index = self.cell_index(x, y, z);
            self.cells[index] = block_type;
        }
    }

    /// Resets every cell to `NONE`.
    pub fn clear(&mut self) {
        self.cells.fill(BlockType::NONE);
    }

    /// Paints a filled sphere of material around a center point.
    ///
    /// Cells whose center offset satisfies `dx² + dy² + dz² < radius²`
    /// are overwritten; the sphere is clipped to the volume bounds.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The sphere center
    /// * `radius` - The sphere radius, in cells
    /// * `block_type` - The material to paint
    pub fn paint_at_point(&mut self, x: i32, y: i32, z: i32, radius: i32, block_type: BlockType) {
        for dx in -radius..=radius {
            for dy in -radius..=radius {
                for dz in -radius..=radius {
                    if dx * dx + dy * dy + dz * dz < radius * radius {
                        self.set(x + dx, y + dy, z + dz, block_type);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_volumes_are_empty() {
        let map = MapVolume::new(4, 4, 4);
        assert_eq!(map.get(0, 0, 0), BlockType::NONE);
        assert_eq!(map.get(3, 3, 3), BlockType::NONE);
    }

    #[test]
    fn out_of_bounds_access_is_safe() {
        let mut map = MapVolume::new(4, 4, 4);
        map.set(-1, 0, 0, BlockType::ROCK);
        map.set(4, 0, 0, BlockType::ROCK);
        assert_eq!(map.get(-1, 0, 0), BlockType::NONE);
        assert_eq!(map.get(4, 0, 0), BlockType::NONE);
    }

    #[test]
    fn painting_fills_a_sphere_and_clips_at_the_edges() {
        let mut map = MapVolume::new(9, 9, 9);
        map.paint_at_point(4, 4, 4, 2, BlockType::ROCK);
        assert_eq!(map.get(4, 4, 4), BlockType::ROCK);
        assert_eq!(map.get(5, 4, 4), BlockType::ROCK);
        // The radius itself is outside the strict inequality.
        assert_eq!(map.get(6, 4, 4), BlockType::NONE);

        // Clipped at the corner without panicking.
        map.paint_at_point(0, 0, 0, 3, BlockType::SAND);
        assert_eq!(map.get(0, 0, 0), BlockType::SAND);
    }
}
