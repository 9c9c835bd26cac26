//! Planet conditions accumulated from answered questions

/// Atmosphere composition chosen during the formation phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Atmosphere {
    #[default]
    Unset,
    Thick,
    Thin,
    Balanced,
}

/// Surface temperature band chosen during the surface phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Temperature {
    #[default]
    Unset,
    Cold,
    Temperate,
    Hot,
}

/// Geological activity chosen during the formation phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Geology {
    #[default]
    Unset,
    Active,
    Dormant,
}

/// Scalar conditions describing the planet being built
///
/// Written only by the question flow. Terrain generation reads nothing from
/// here except the water fraction it is handed at regeneration time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetConditions {
    /// Water fraction 0-100; 0 means no water answer has been given yet
    pub water: u8,
    pub atmosphere: Atmosphere,
    pub temperature: Temperature,
    pub geology: Geology,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conditions_are_unset() {
        let conditions = PlanetConditions::default();

        assert_eq!(conditions.water, 0);
        assert_eq!(conditions.atmosphere, Atmosphere::Unset);
        assert_eq!(conditions.temperature, Temperature::Unset);
        assert_eq!(conditions.geology, Geology::Unset);
    }
}
