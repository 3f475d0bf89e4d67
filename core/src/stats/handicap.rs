use log::debug;
use serde::{Deserialize, Serialize};

use super::sort_utils::most_recent_first;
use crate::error::CoreError;
use crate::model::Round;

/// Use the best `best` differentials once at least `rounds` are available.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandicapStep {
    pub rounds: usize,
    pub best: usize,
}

/// Selection table for the handicap index.
///
/// Only the `window` most recent scored rounds are considered. The step with
/// the largest `rounds` not exceeding the number of considered rounds decides
/// how many of the lowest differentials are averaged.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HandicapConfig {
    pub min_rounds: usize,
    pub window: usize,
    pub table: Vec<HandicapStep>,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        let table = [(3, 1), (6, 2), (9, 3), (12, 4), (15, 5), (17, 6), (19, 7), (20, 8)]
            .into_iter()
            .map(|(rounds, best)| HandicapStep { rounds, best })
            .collect();
        Self {
            min_rounds: 3,
            window: 20,
            table,
        }
    }
}

impl HandicapConfig {
    /// # Errors
    /// Returns `CoreError::InvalidConfig` if some round count between
    /// `min_rounds` and `window` has no usable step.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min_rounds == 0 {
            return Err(CoreError::InvalidConfig("min_rounds must be at least 1".into()));
        }
        if self.window < self.min_rounds {
            return Err(CoreError::InvalidConfig(format!(
                "window ({}) is smaller than min_rounds ({})",
                self.window, self.min_rounds
            )));
        }
        let Some(first) = self.table.first() else {
            return Err(CoreError::InvalidConfig("table is empty".into()));
        };
        if first.rounds > self.min_rounds {
            return Err(CoreError::InvalidConfig(format!(
                "first step starts at {} rounds but min_rounds is {}",
                first.rounds, self.min_rounds
            )));
        }
        if self.table.windows(2).any(|w| w[0].rounds >= w[1].rounds) {
            return Err(CoreError::InvalidConfig(
                "steps must be in strictly ascending round order".into(),
            ));
        }
        if let Some(step) = self.table.iter().find(|s| s.best == 0 || s.best > s.rounds) {
            return Err(CoreError::InvalidConfig(format!(
                "step at {} rounds must use between 1 and {} differentials, got {}",
                step.rounds, step.rounds, step.best
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn best_of(&self, available: usize) -> Option<usize> {
        self.table
            .iter()
            .take_while(|step| step.rounds <= available)
            .last()
            .map(|step| step.best.min(available))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HandicapResult {
    pub handicap: Option<f64>,
    pub message: Option<String>,
}

impl HandicapResult {
    fn needs_more(missing: usize) -> Self {
        let noun = if missing == 1 { "round" } else { "rounds" };
        Self {
            handicap: None,
            message: Some(format!("Need {missing} more {noun} to calculate a handicap")),
        }
    }
}

/// Handicap index over rounds already normalized to combined mode, using the
/// default selection table.
#[must_use]
pub fn calculate_handicap(combined_rounds: &[Round]) -> HandicapResult {
    calculate_handicap_with(combined_rounds, &HandicapConfig::default())
}

/// Average of the lowest differentials among the most recent scored rounds,
/// rounded to one decimal. Negative values are plus handicaps. An invalid
/// table yields no handicap and the validation error as the message.
#[must_use]
pub fn calculate_handicap_with(combined_rounds: &[Round], config: &HandicapConfig) -> HandicapResult {
    if let Err(e) = config.validate() {
        return HandicapResult {
            handicap: None,
            message: Some(e.to_string()),
        };
    }

    let mut scored: Vec<(&Round, f64)> = combined_rounds
        .iter()
        .filter_map(|round| round.differential().map(|d| (round, d)))
        .collect();

    if scored.len() < config.min_rounds {
        return HandicapResult::needs_more(config.min_rounds - scored.len());
    }

    scored.sort_by(|(a, da), (b, db)| most_recent_first(a, b).then_with(|| da.total_cmp(db)));
    scored.truncate(config.window);

    let Some(best) = config.best_of(scored.len()) else {
        return HandicapResult {
            handicap: None,
            message: Some(format!("No handicap table step covers {} rounds", scored.len())),
        };
    };

    let mut differentials: Vec<f64> = scored.into_iter().map(|(_, d)| d).collect();
    differentials.sort_by(f64::total_cmp);
    let index = differentials.iter().take(best).sum::<f64>() / best as f64;
    debug!(
        "handicap from best {best} of {} differentials: {index:.3}",
        differentials.len()
    );

    HandicapResult {
        handicap: Some(round_to_tenth(index)),
        message: None,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        assert!(HandicapConfig::default().validate().is_ok());
    }

    #[test]
    fn test_best_of_steps() {
        let config = HandicapConfig::default();
        assert_eq!(config.best_of(2), None);
        assert_eq!(config.best_of(3), Some(1));
        assert_eq!(config.best_of(5), Some(1));
        assert_eq!(config.best_of(8), Some(2));
        assert_eq!(config.best_of(16), Some(5));
        assert_eq!(config.best_of(20), Some(8));
    }

    #[test]
    fn test_unordered_table_is_rejected() {
        let config = HandicapConfig {
            min_rounds: 3,
            window: 20,
            table: vec![
                HandicapStep { rounds: 6, best: 2 },
                HandicapStep { rounds: 3, best: 1 },
            ],
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn test_zero_best_step_is_rejected() {
        let config = HandicapConfig {
            min_rounds: 1,
            window: 20,
            table: vec![HandicapStep { rounds: 1, best: 0 }],
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
        assert_eq!(config.best_of(5), Some(0));
    }

    #[test]
    fn test_round_to_tenth() {
        assert!((round_to_tenth(12.345) - 12.3).abs() < 1e-9);
        assert!((round_to_tenth(-1.26) + 1.3).abs() < 1e-9);
    }
}
