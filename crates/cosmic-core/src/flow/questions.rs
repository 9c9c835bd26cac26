//! Static question tables for the two decision phases

/// One prompt with its ordered answer options
#[derive(Debug)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

/// Phase 0: planet formation
pub const FORMATION_QUESTIONS: &[Question] = &[
    Question {
        prompt: "Choose the size of your planet:",
        options: &["Small", "Medium", "Large"],
    },
    Question {
        prompt: "What is the composition of your atmosphere?",
        options: &[
            "Thick atmosphere (high CO2)",
            "Thin atmosphere",
            "Balanced atmosphere",
        ],
    },
    Question {
        prompt: "How far is the planet from its star?",
        options: &["Close to the star", "Moderate distance", "Far from the star"],
    },
    Question {
        prompt: "Does the planet have geological activity?",
        options: &["Active geology", "Dormant geology"],
    },
];

/// Phase 1: surface conditions
pub const SURFACE_QUESTIONS: &[Question] = &[
    Question {
        prompt: "Adjust the temperature of your planet:",
        options: &["-80°C to -20°C", "-10°C to 30°C", "30°C to 80°C"],
    },
    Question {
        prompt: "Decide the amount of water on the surface:",
        options: &["Dry", "Some water", "Oceans"],
    },
    Question {
        prompt: "Control the radiation level on the planet:",
        options: &["Low radiation", "Moderate radiation", "High radiation"],
    },
    Question {
        prompt: "Balance the presence of CHNOPS elements:",
        options: &["Limited", "Moderate", "Rich"],
    },
];

/// Phases in presentation order
pub const PHASES: &[&[Question]] = &[FORMATION_QUESTIONS, SURFACE_QUESTIONS];

/// (phase, question) coordinates of the water-amount question
pub const WATER_QUESTION: (usize, usize) = (1, 1);

/// Water fraction selected by each water-amount option, indexed by option
pub const WATER_FRACTION_BY_OPTION: [u8; 3] = [10, 50, 80];
