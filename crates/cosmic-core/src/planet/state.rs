//! Current planet surface and the parameters that produced it

use crate::planet::noise_field::{DEFAULT_OCTAVES, NoiseField};
use crate::planet::terrain::{self, PLANET_HEIGHT, PLANET_WIDTH, TerrainRaster};

/// Water fraction used for the initial surface, before any answer
pub const DEFAULT_WATER_FRACTION: u8 = 50;

/// Owns the current terrain raster
///
/// The raster is only ever replaced wholesale by `regenerate`, so renderers
/// never observe a partially built surface.
pub struct PlanetState {
    noise: NoiseField,
    water_fraction: u8,
    raster: TerrainRaster,
}

impl PlanetState {
    /// Generate the initial surface at the default water fraction
    pub fn new(seed: i32) -> Self {
        let noise = NoiseField::new(seed, DEFAULT_OCTAVES);
        let raster =
            terrain::generate_surface(&noise, DEFAULT_WATER_FRACTION, PLANET_WIDTH, PLANET_HEIGHT);
        log::debug!(
            "initial planet surface generated (seed {}, water fraction {})",
            seed,
            DEFAULT_WATER_FRACTION
        );
        Self {
            noise,
            water_fraction: DEFAULT_WATER_FRACTION,
            raster,
        }
    }

    /// Replace the surface with one generated at `water_fraction`
    ///
    /// The old raster stays valid until the new one is fully built.
    pub fn regenerate(&mut self, water_fraction: u8) {
        let water_fraction = water_fraction.min(100);
        log::info!("regenerating planet surface at water fraction {water_fraction}");
        self.raster =
            terrain::generate_surface(&self.noise, water_fraction, PLANET_WIDTH, PLANET_HEIGHT);
        self.water_fraction = water_fraction;
    }

    pub fn raster(&self) -> &TerrainRaster {
        &self.raster
    }

    pub fn water_fraction(&self) -> u8 {
        self.water_fraction
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_defaults() {
        let planet = PlanetState::new(42);

        assert_eq!(planet.water_fraction(), DEFAULT_WATER_FRACTION);
        assert_eq!(planet.noise().octaves(), DEFAULT_OCTAVES);
        assert_eq!(planet.raster().width(), PLANET_WIDTH);
        assert_eq!(planet.raster().height(), PLANET_HEIGHT);
    }

    #[test]
    fn test_regenerate_matches_direct_generation() {
        let mut planet = PlanetState::new(42);
        planet.regenerate(80);

        let expected =
            terrain::generate_surface(planet.noise(), 80, PLANET_WIDTH, PLANET_HEIGHT);
        assert_eq!(planet.water_fraction(), 80);
        assert_eq!(*planet.raster(), expected);
    }

    #[test]
    fn test_regenerate_clamps_water_fraction() {
        let mut planet = PlanetState::new(42);
        planet.regenerate(200);

        assert_eq!(planet.water_fraction(), 100);
        assert_eq!(planet.raster().land_count(), 0);
    }
}
