//! Procedural planet surface and its driving parameters

mod conditions;
mod noise_field;
mod state;
mod terrain;

pub use conditions::{Atmosphere, Geology, PlanetConditions, Temperature};
pub use noise_field::{DEFAULT_OCTAVES, NoiseField, NoiseFieldConfig};
pub use state::{DEFAULT_WATER_FRACTION, PlanetState};
pub use terrain::{
    PLANET_HEIGHT, PLANET_WIDTH, TerrainClass, TerrainRaster, generate_surface,
};
