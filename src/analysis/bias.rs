use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ANALYSIS;

/// Directional sentiment read from keyword presence in OCR text.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Default,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::EnumIter,
    strum_macros::IntoStaticStr,
)]
pub enum Bias {
    Long,
    Short,
    #[default]
    Neutral,
}

impl Bias {
    /// Short name used in logs and JSON ("Long", "Short", "Neutral").
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Report label
    pub fn label(&self) -> &'static str {
        match self {
            Bias::Long => "📈 Long bias",
            Bias::Short => "📉 Short bias",
            Bias::Neutral => "⚖️ Neutral",
        }
    }
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify `text` by bullish/bearish keyword presence.
///
/// Only one side present gives Long or Short. Both or neither gives Neutral,
/// even when one side clearly dominates.
pub fn classify_bias(text: &str) -> Bias {
    let upper = text.to_uppercase();
    let contains_any = |words: &[&str]| words.iter().any(|w| upper.contains(w));

    let bullish = contains_any(ANALYSIS.keywords.bullish);
    let bearish = contains_any(ANALYSIS.keywords.bearish);

    match (bullish, bearish) {
        (true, false) => Bias::Long,
        (false, true) => Bias::Short,
        _ => Bias::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_bullish_only_is_long() {
        assert_eq!(classify_bias("strong support, buy now"), Bias::Long);
    }

    #[test]
    fn test_bearish_only_is_short() {
        assert_eq!(classify_bias("resistance ahead, short it"), Bias::Short);
    }

    #[test]
    fn test_no_keywords_is_neutral() {
        assert_eq!(classify_bias("chart is flat"), Bias::Neutral);
        assert_eq!(classify_bias(""), Bias::Neutral);
    }

    #[test]
    fn test_both_sides_is_neutral() {
        assert_eq!(classify_bias("buy the dip but watch resistance"), Bias::Neutral);
    }

    #[test]
    fn test_substring_match_ignores_word_boundaries() {
        // "BULLET" contains "BULL"
        assert_eq!(classify_bias("bullet points"), Bias::Long);
    }

    #[test]
    fn test_repetition_does_not_outweigh() {
        assert_eq!(classify_bias("buy buy buy buy sell"), Bias::Neutral);
    }

    #[test]
    fn test_labels_and_names_are_distinct() {
        let labels: Vec<&str> = Bias::iter().map(|b| b.label()).collect();
        let names: Vec<&str> = Bias::iter().map(|b| b.name()).collect();
        assert_eq!(labels, vec!["📈 Long bias", "📉 Short bias", "⚖️ Neutral"]);
        assert_eq!(names, vec!["Long", "Short", "Neutral"]);
    }
}
