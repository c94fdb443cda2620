use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ANALYSIS;

// 1-6 integer digits with an optional 1-4 digit fraction. No sign, so "-5" yields 5.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[0-9]{1,6}(?:\.[0-9]{1,4})?\b").expect("valid number pattern"));

/// Heuristic (entry, take-profit, stop-loss) suggestion derived from OCR numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelTriple {
    pub entry: f64,
    pub take_profit: f64,
    pub stop_loss: f64,
}

impl LevelTriple {
    fn new(entry: f64, take_profit: f64, stop_loss: f64) -> Self {
        Self {
            entry,
            take_profit,
            stop_loss,
        }
    }
}

/// Positive numbers found in `text`, sorted ascending.
///
/// Thousands separators are stripped before matching and only the first
/// `ANALYSIS.levels.max_tokens` matches are considered.
pub fn extract_numbers(text: &str) -> Vec<f64> {
    let stripped = text.replace(',', "");

    let mut numbers: Vec<f64> = NUMBER_PATTERN
        .find_iter(&stripped)
        .take(ANALYSIS.levels.max_tokens)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| *value > 0.0)
        .collect();

    numbers.sort_by(f64::total_cmp);
    numbers
}

/// Derive a level triple from whatever numbers appear in `text`.
///
/// - one number `e`: `(e, e*1.02, e*0.99)`
/// - two numbers: entry is their mean, take-profit from the max, stop-loss from the min
/// - three or more: everything is anchored on the lower-middle value `sorted[len / 2]`
///
/// Returns `None` when no positive number is found. No statistical meaning is implied.
pub fn parse_levels(text: &str) -> Option<LevelTriple> {
    let numbers = extract_numbers(text);
    let cfg = &ANALYSIS.levels;

    match numbers.as_slice() {
        [] => None,
        [e] => Some(LevelTriple::new(
            *e,
            e * cfg.single_take_profit,
            e * cfg.single_stop_loss,
        )),
        [low, high] => Some(LevelTriple::new(
            (low + high) / 2.0,
            high * cfg.pair_take_profit,
            low * cfg.pair_stop_loss,
        )),
        sorted => {
            let mid = sorted[sorted.len() / 2];
            Some(LevelTriple::new(
                mid,
                mid * cfg.median_take_profit,
                mid * cfg.median_stop_loss,
            ))
        }
    }
}
