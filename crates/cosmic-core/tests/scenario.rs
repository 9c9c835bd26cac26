//! End-to-end scenario: answering through to the oceans choice

use cosmic_core::flow::QuestionFlow;
use cosmic_core::planet::{
    DEFAULT_WATER_FRACTION, PLANET_HEIGHT, PLANET_WIDTH, PlanetConditions, PlanetState,
    generate_surface,
};

#[test]
fn oceans_answer_raises_the_waterline() {
    let mut flow = QuestionFlow::new();
    let mut conditions = PlanetConditions::default();
    let mut planet = PlanetState::new(42);

    assert_eq!(planet.water_fraction(), DEFAULT_WATER_FRACTION);
    let default_water_cells = planet.raster().water_count();

    // Answer the four formation questions and the temperature question,
    // landing on the water-amount question.
    for _ in 0..5 {
        flow.choose(0, &mut conditions, &mut planet);
    }
    assert_eq!((flow.phase(), flow.question()), (1, 1));

    // Option 2 is "Oceans".
    flow.choose(2, &mut conditions, &mut planet);

    assert_eq!(conditions.water, 80);
    assert_eq!(planet.water_fraction(), 80);
    assert!(planet.raster().water_count() >= default_water_cells);

    // The stored raster is exactly what direct generation at 80 produces.
    let expected = generate_surface(planet.noise(), 80, PLANET_WIDTH, PLANET_HEIGHT);
    assert_eq!(*planet.raster(), expected);

    // Remaining questions leave the surface alone.
    let frozen = planet.raster().clone();
    flow.choose(0, &mut conditions, &mut planet);
    flow.choose(0, &mut conditions, &mut planet);
    assert!(flow.is_terminal());
    assert_eq!(*planet.raster(), frozen);
    assert_eq!(planet.water_fraction(), 80);
}
