//! # Ray and Bounding Box Module
//!
//! This module provides the continuous-space geometry used by voxel
//! targeting: a ray with an origin and direction, and an axis-aligned
//! bounding box with slab-method ray intersection.

use cgmath::{Point3, Vector3};

/// A half-line in world space.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    /// The starting point of the ray.
    pub origin: Point3<f32>,
    /// The direction of travel. Not required to be normalized, but
    /// intersection distances are measured in multiples of its length.
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Ray { origin, direction }
    }

    /// The point reached after travelling `distance` along the ray.
    pub fn point_at(&self, distance: f32) -> Point3<f32> {
        self.origin + self.direction * distance
    }
}

/// An axis-aligned bounding box.
///
/// Voxel cells produce boxes spanning exactly one unit per axis, but the
/// type itself places no constraint on the extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// The corner with the smallest coordinates.
    pub min: Point3<f32>,
    /// The corner with the largest coordinates.
    pub max: Point3<f32>,
}

impl Aabb {
    /// Creates a box from its two extreme corners.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Aabb { min, max }
    }

    /// Intersects a ray with this box using the slab method.
    ///
    /// Each axis clips the ray's parametric interval against the pair of
    /// planes bounding the box on that axis; the box is hit when the
    /// interval stays non-empty.
    ///
    /// # Arguments
    /// * `ray` - The ray to test
    ///
    /// # Returns
    /// The distance along the ray to the entry point, `Some(0.0)` when the
    /// origin is already inside, or `None` on a miss.
    pub fn intersects(&self, ray: &Ray) -> Option<f32> {
        let origin: [f32; 3] = ray.origin.into();
        let direction: [f32; 3] = ray.direction.into();
        let min: [f32; 3] = self.min.into();
        let max: [f32; 3] = self.max.into();

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;

        for axis in 0..3 {
            if direction[axis] == 0.0 {
                // Parallel to this slab: hit only if the origin lies inside it.
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
                continue;
            }
            let inverse = 1.0 / direction[axis];
            let mut t_near = (min[axis] - origin[axis]) * inverse;
            let mut t_far = (max[axis] - origin[axis]) * inverse;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }
            t_enter = t_enter.max(t_near);
            t_exit = t_exit.min(t_far);
            if t_enter > t_exit {
                return None;
            }
        }

        // A box entirely behind the origin is not hit.
        if t_exit < 0.0 {
            return None;
        }
        Some(t_enter.max(0.0))
    }
}
