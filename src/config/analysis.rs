//! Heuristic analysis configuration

/// Multipliers used to turn the extracted numbers into a level triple.
pub struct LevelSettings {
    // Only the first N numeric matches in the OCR text are considered
    pub max_tokens: usize,
    // One number found: entry is the number itself
    pub single_take_profit: f64,
    pub single_stop_loss: f64,
    // Two numbers found: applied to the max / min respectively
    pub pair_take_profit: f64,
    pub pair_stop_loss: f64,
    // Three or more: applied to the lower-middle value
    pub median_take_profit: f64,
    pub median_stop_loss: f64,
}

/// Keyword sets scanned (as uppercase substrings) by the bias classifier.
pub struct BiasKeywords {
    pub bullish: &'static [&'static str],
    pub bearish: &'static [&'static str],
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub levels: LevelSettings,
    pub keywords: BiasKeywords,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    levels: LevelSettings {
        max_tokens: 12,
        single_take_profit: 1.02,
        single_stop_loss: 0.99,
        pair_take_profit: 1.01,
        pair_stop_loss: 0.99,
        median_take_profit: 1.02,
        median_stop_loss: 0.99,
    },

    keywords: BiasKeywords {
        bullish: &["BUY", "LONG", "BULL", "SUPPORT"],
        bearish: &["SELL", "SHORT", "BEAR", "RESISTANCE"],
    },
};
