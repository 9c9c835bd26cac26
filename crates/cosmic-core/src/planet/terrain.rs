//! Land/water classification of the planet surface

use rayon::prelude::*;

use crate::planet::noise_field::NoiseField;

/// Planet raster width in pixels
pub const PLANET_WIDTH: usize = 400;
/// Planet raster height in pixels
pub const PLANET_HEIGHT: usize = 400;

/// Land threshold before the water fraction shifts it
const LAND_THRESHOLD_BASE: f32 = 0.1;

/// Discrete classification of one raster cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainClass {
    Land,
    Water,
}

/// Fixed-size grid of terrain classes
///
/// Dimensions never change after creation; the planet swaps in a whole new
/// raster rather than editing cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainRaster {
    width: usize,
    height: usize,
    cells: Vec<TerrainClass>,
}

impl TerrainRaster {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> TerrainClass {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[TerrainClass] {
        &self.cells
    }

    pub fn water_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == TerrainClass::Water)
            .count()
    }

    pub fn land_count(&self) -> usize {
        self.cells.len() - self.water_count()
    }
}

fn classify(n: f32, water_fraction: u8) -> TerrainClass {
    if n > LAND_THRESHOLD_BASE + water_fraction as f32 / 100.0 {
        TerrainClass::Land
    } else {
        TerrainClass::Water
    }
}

/// Generate a planet surface raster
///
/// Every pixel is classified independently from one noise sample at
/// (x/width, y/height), so rows are computed in parallel; the raster is only
/// returned once every row has been joined. `water_fraction` above 100 is
/// clamped (threshold 1.1 already exceeds the noise range, so anything higher
/// would change nothing).
pub fn generate_surface(
    noise: &NoiseField,
    water_fraction: u8,
    width: usize,
    height: usize,
) -> TerrainRaster {
    let water_fraction = water_fraction.min(100);

    let cells: Vec<TerrainClass> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            let v = y as f32 / height as f32;
            (0..width).map(move |x| {
                let u = x as f32 / width as f32;
                classify(noise.sample(u, v), water_fraction)
            })
        })
        .collect();

    TerrainRaster {
        width,
        height,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::noise_field::DEFAULT_OCTAVES;

    #[test]
    fn test_deterministic_generation() {
        let noise = NoiseField::new(42, DEFAULT_OCTAVES);

        let raster1 = generate_surface(&noise, 50, PLANET_WIDTH, PLANET_HEIGHT);
        let raster2 = generate_surface(&noise, 50, PLANET_WIDTH, PLANET_HEIGHT);

        assert_eq!(raster1, raster2);
    }

    #[test]
    fn test_raster_dimensions() {
        let noise = NoiseField::new(42, DEFAULT_OCTAVES);
        let raster = generate_surface(&noise, 50, PLANET_WIDTH, PLANET_HEIGHT);

        assert_eq!(raster.width(), PLANET_WIDTH);
        assert_eq!(raster.height(), PLANET_HEIGHT);
        assert_eq!(raster.cells().len(), PLANET_WIDTH * PLANET_HEIGHT);
        assert_eq!(
            raster.water_count() + raster.land_count(),
            PLANET_WIDTH * PLANET_HEIGHT
        );
    }

    #[test]
    fn test_water_count_monotonic_in_water_fraction() {
        let noise = NoiseField::new(42, DEFAULT_OCTAVES);

        // Raising the water fraction raises the land threshold, which can
        // only convert land cells to water, never the reverse.
        let mut previous = 0;
        for water_fraction in [0, 10, 25, 50, 80, 100] {
            let raster = generate_surface(&noise, water_fraction, PLANET_WIDTH, PLANET_HEIGHT);
            let count = raster.water_count();
            assert!(
                count >= previous,
                "water count decreased from {} to {} at fraction {}",
                previous,
                count,
                water_fraction
            );
            previous = count;
        }
    }

    #[test]
    fn test_full_water_fraction_floods_everything() {
        let noise = NoiseField::new(42, DEFAULT_OCTAVES);
        let raster = generate_surface(&noise, 100, PLANET_WIDTH, PLANET_HEIGHT);

        // Threshold 1.1 is above the noise range, so no cell can be land.
        assert_eq!(raster.water_count(), PLANET_WIDTH * PLANET_HEIGHT);
        assert_eq!(raster.land_count(), 0);
    }

    #[test]
    fn test_oversized_water_fraction_clamped() {
        let noise = NoiseField::new(42, DEFAULT_OCTAVES);

        let clamped = generate_surface(&noise, 255, PLANET_WIDTH, PLANET_HEIGHT);
        let full = generate_surface(&noise, 100, PLANET_WIDTH, PLANET_HEIGHT);
        assert_eq!(clamped, full);
    }
}
