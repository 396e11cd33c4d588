//! # Noise Fields Module
//!
//! This module produces the deterministic 2D height fields the terrain
//! layers are built from. A field is the weighted sum of several Perlin
//! octaves, each octave sampling the map at its own frequency and
//! scaling the result by its amplitude.

use noise::{NoiseFn, Perlin};

/// One weighted frequency term of a summed height field.
#[derive(Copy, Clone, Debug)]
pub struct PerlinOctave {
    /// How many noise periods span the map along each horizontal axis.
    pub frequency: f64,
    /// Weight of this octave in the sum.
    pub amplitude: f64,
}

/// A `width x length` grid of summed noise values.
pub struct HeightField {
    data: Vec<f64>,
    length: usize,
}

impl HeightField {
    /// The summed noise value for one map column.
    ///
    /// # Arguments
    /// * `x`, `z` - Column coordinates, within the extents the field was
    ///   generated for
    pub fn at(&self, x: i32, z: i32) -> f64 {
        self.data[x as usize * self.length + z as usize]
    }
}

/// Derives the Perlin seed for one octave lane from the world seed.
///
/// Every octave of every stage gets its own lane so that stages sharing
/// an octave list still produce independent fields.
fn octave_seed(seed: u64, lane: u32) -> u32 {
    let mixed = seed ^ (u64::from(lane) + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    (mixed ^ (mixed >> 32)) as u32
}

/// Sums a list of Perlin octaves into one height field.
///
/// The result is fully determined by the octave list, the extents, the
/// seed, and the lane base; repeated calls produce identical fields.
///
/// # Arguments
/// * `octaves` - The frequency/amplitude terms to sum
/// * `width`, `length` - Horizontal map extents, in cells
/// * `seed` - The world seed
/// * `lane_base` - Offset separating this field's octave lanes from
///   other fields built from the same seed
pub fn sum_octaves(
    octaves: &[PerlinOctave],
    width: i32,
    length: i32,
    seed: u64,
    lane_base: u32,
) -> HeightField {
    let (width, length) = (width.max(0) as usize, length.max(0) as usize);
    let mut data = vec![0.0f64; width * length];

    for (lane, octave) in octaves.iter().enumerate() {
        let perlin = Perlin::new(octave_seed(seed, lane_base + lane as u32));
        for x in 0..width {
            for z in 0..length {
                let sample_x = x as f64 * octave.frequency / width as f64;
                let sample_z = z as f64 * octave.frequency / length as f64;
                data[x * length + z] += perlin.get([sample_x, sample_z]) * octave.amplitude;
            }
        }
    }

    HeightField { data, length }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const OCTAVES: [PerlinOctave; 3] = [
        PerlinOctave {
            frequency: 4.0,
            amplitude: 2.0,
        },
        PerlinOctave {
            frequency: 8.0,
            amplitude: 0.5,
        },
        PerlinOctave {
            frequency: 12.0,
            amplitude: 0.25,
        },
    ];

    #[test]
    fn fields_are_deterministic_per_seed_and_lane() {
        let a = sum_octaves(&OCTAVES, 32, 32, 7, 0);
        let b = sum_octaves(&OCTAVES, 32, 32, 7, 0);
        for x in 0..32 {
            for z in 0..32 {
                assert_relative_eq!(a.at(x, z), b.at(x, z));
            }
        }
    }

    #[test]
    fn different_lanes_decorrelate_identical_octave_lists() {
        let a = sum_octaves(&OCTAVES, 32, 32, 7, 0);
        let b = sum_octaves(&OCTAVES, 32, 32, 7, 16);
        let differs = (0..32)
            .flat_map(|x| (0..32).map(move |z| (x, z)))
            .any(|(x, z)| (a.at(x, z) - b.at(x, z)).abs() > 1e-9);
        assert!(differs);
    }

    #[test]
    fn amplitudes_bound_the_field() {
        let field = sum_octaves(&OCTAVES, 32, 32, 7, 0);
        let bound: f64 = OCTAVES.iter().map(|o| o.amplitude).sum();
        for x in 0..32 {
            for z in 0..32 {
                assert!(field.at(x, z).abs() <= bound);
            }
        }
    }
}
