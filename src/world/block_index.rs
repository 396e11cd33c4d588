//! # Block Index Module
//!
//! This module provides `BlockIndex`, the integer coordinate of a voxel
//! cell, together with the conversion from continuous positions and the
//! componentwise arithmetic the generation and targeting code uses.
//!
//! ## Floor Invariant
//!
//! Converting a continuous position floors each component. Flooring, not
//! truncating, maps every point inside a unit cell to that cell's index,
//! including cells at negative coordinates: `(-0.3, 2.9, -1.0)` lies in
//! cell `(-1, 2, -1)`.

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use cgmath::Point3;

use crate::world::aabb::Aabb;

/// The integer coordinate of one voxel cell.
///
/// Equality is componentwise value equality. An absent coordinate is
/// modelled as `Option<BlockIndex>`, never as a sentinel value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockIndex {
    /// Cell coordinate along the X axis.
    pub x: i32,
    /// Cell coordinate along the Y axis.
    pub y: i32,
    /// Cell coordinate along the Z axis.
    pub z: i32,
}

impl BlockIndex {
    /// The origin cell.
    pub const ZERO: BlockIndex = BlockIndex::new(0, 0, 0);
    /// One step along each axis.
    pub const ONE: BlockIndex = BlockIndex::new(1, 1, 1);
    /// One step along the X axis.
    pub const UNIT_X: BlockIndex = BlockIndex::new(1, 0, 0);
    /// One step along the Y axis.
    pub const UNIT_Y: BlockIndex = BlockIndex::new(0, 1, 0);
    /// One step along the Z axis.
    pub const UNIT_Z: BlockIndex = BlockIndex::new(0, 0, 1);

    /// Creates an index from explicit cell coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        BlockIndex { x, y, z }
    }

    /// The continuous position of this cell's minimum corner.
    pub fn as_point(&self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// The axis-aligned box spanning exactly this cell.
    ///
    /// # Returns
    /// An `Aabb` from the cell's minimum corner to `min + (1, 1, 1)`.
    pub fn bounding_box(&self) -> Aabb {
        Aabb::new(self.as_point(), (*self + BlockIndex::ONE).as_point())
    }
}

impl From<Point3<f32>> for BlockIndex {
    /// Floors a continuous position into the cell containing it.
    fn from(position: Point3<f32>) -> Self {
        BlockIndex {
            x: position.x.floor() as i32,
            y: position.y.floor() as i32,
            z: position.z.floor() as i32,
        }
    }
}

impl Add for BlockIndex {
    type Output = BlockIndex;

    fn add(self, other: BlockIndex) -> BlockIndex {
        BlockIndex::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for BlockIndex {
    type Output = BlockIndex;

    fn sub(self, other: BlockIndex) -> BlockIndex {
        BlockIndex::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<i32> for BlockIndex {
    type Output = BlockIndex;

    fn mul(self, scalar: i32) -> BlockIndex {
        BlockIndex::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<i32> for BlockIndex {
    type Output = BlockIndex;

    fn div(self, scalar: i32) -> BlockIndex {
        BlockIndex::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Rem<i32> for BlockIndex {
    type Output = BlockIndex;

    fn rem(self, scalar: i32) -> BlockIndex {
        BlockIndex::new(self.x % scalar, self.y % scalar, self.z % scalar)
    }
}

impl Neg for BlockIndex {
    type Output = BlockIndex;

    fn neg(self) -> BlockIndex {
        BlockIndex::ZERO - self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flooring_maps_fractional_points_into_their_cell() {
        let index = BlockIndex::from(Point3::new(3.7f32, 0.2, 9.999));
        assert_eq!(index, BlockIndex::new(3, 0, 9));
    }

    #[test]
    fn flooring_handles_negative_components() {
        let index = BlockIndex::from(Point3::new(-0.3f32, 2.9, -1.0));
        assert_eq!(index, BlockIndex::new(-1, 2, -1));
    }

    #[test]
    fn componentwise_arithmetic() {
        let a = BlockIndex::new(1, 2, 3);
        let b = BlockIndex::new(4, 5, 6);
        assert_eq!(a + b, BlockIndex::new(5, 7, 9));
        assert_eq!(b - a, BlockIndex::new(3, 3, 3));
        assert_eq!(a * 2, BlockIndex::new(2, 4, 6));
        assert_eq!(b / 2, BlockIndex::new(2, 2, 3));
        assert_eq!(b % 2, BlockIndex::new(0, 1, 0));
        assert_eq!(-a, BlockIndex::new(-1, -2, -3));
    }

    #[test]
    fn optional_indices_compare_by_value() {
        let some = Some(BlockIndex::new(1, 1, 1));
        assert_eq!(some, Some(BlockIndex::new(1, 1, 1)));
        assert_ne!(some, None);
    }

    #[test]
    fn bounding_box_spans_one_cell() {
        let aabb = BlockIndex::new(2, -1, 0).bounding_box();
        assert_eq!(aabb.min, Point3::new(2.0, -1.0, 0.0));
        assert_eq!(aabb.max, Point3::new(3.0, 0.0, 1.0));
    }
}
