//! Coherent-noise field sampled over the planet surface
//!
//! Multi-octave Perlin noise over the unit square. Each process run picks a
//! fresh seed, so planets differ between runs; tests pin the seed.

use fastnoise_lite::{FastNoiseLite, FractalType, NoiseType};
use serde::{Deserialize, Serialize};

/// Default octave count for planet surfaces
pub const DEFAULT_OCTAVES: u8 = 3;

/// Parameters for a noise layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseFieldConfig {
    /// Offset added to the base seed for this layer
    pub seed_offset: i32,
    /// Base frequency in lattice cells per unit of the sampling domain
    pub frequency: f32,
    /// Number of fractal octaves (1-8)
    pub octaves: u8,
    /// Frequency multiplier per octave
    pub lacunarity: f32,
    /// Amplitude multiplier per octave
    pub gain: f32,
}

impl Default for NoiseFieldConfig {
    fn default() -> Self {
        Self {
            seed_offset: 0,
            frequency: 3.0,
            octaves: DEFAULT_OCTAVES,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

/// Deterministic 2D coherent-noise field
///
/// Sampling is a pure function of (u, v) for a fixed seed and configuration.
pub struct NoiseField {
    noise: FastNoiseLite,
    octaves: u8,
}

impl NoiseField {
    /// Create a field with the default configuration at `octaves`
    pub fn new(seed: i32, octaves: u8) -> Self {
        Self::from_config(
            seed,
            &NoiseFieldConfig {
                octaves,
                ..NoiseFieldConfig::default()
            },
        )
    }

    /// Build a FastNoiseLite instance from a layer configuration
    pub fn from_config(seed: i32, config: &NoiseFieldConfig) -> Self {
        let mut noise = FastNoiseLite::with_seed(seed.wrapping_add(config.seed_offset));
        noise.set_noise_type(Some(NoiseType::Perlin));
        noise.set_frequency(Some(config.frequency));
        noise.set_fractal_type(Some(FractalType::FBm));
        noise.set_fractal_octaves(Some(config.octaves as i32));
        noise.set_fractal_lacunarity(Some(config.lacunarity));
        noise.set_fractal_gain(Some(config.gain));
        Self {
            noise,
            octaves: config.octaves,
        }
    }

    /// Sample the field at (u, v), nominally in [0,1)
    ///
    /// Output stays within [-1, 1]; nearby inputs give nearby outputs.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        self.noise.get_noise_2d(u, v)
    }

    pub fn octaves(&self) -> u8 {
        self.octaves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_sampling() {
        let field1 = NoiseField::new(42, DEFAULT_OCTAVES);
        let field2 = NoiseField::new(42, DEFAULT_OCTAVES);

        for y in 0..20 {
            for x in 0..20 {
                let (u, v) = (x as f32 / 20.0, y as f32 / 20.0);
                assert_eq!(field1.sample(u, v), field2.sample(u, v));
            }
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let field1 = NoiseField::new(1, DEFAULT_OCTAVES);
        let field2 = NoiseField::new(2, DEFAULT_OCTAVES);

        let mut any_difference = false;
        for y in 0..20 {
            for x in 0..20 {
                let (u, v) = (x as f32 / 20.0, y as f32 / 20.0);
                if field1.sample(u, v) != field2.sample(u, v) {
                    any_difference = true;
                }
            }
        }
        assert!(any_difference);
    }

    #[test]
    fn test_output_range() {
        let field = NoiseField::new(42, DEFAULT_OCTAVES);

        for y in 0..100 {
            for x in 0..100 {
                let n = field.sample(x as f32 / 100.0, y as f32 / 100.0);
                assert!((-1.0..=1.0).contains(&n), "sample {} out of range", n);
            }
        }
    }
}
