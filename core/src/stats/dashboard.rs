use log::debug;

use super::handicap::{HandicapConfig, calculate_handicap_with};
use super::hbh::compile_hbh_stats;
use super::normalize::normalize;
use super::sort_utils::sort_chronologically;
use super::validation::validate_rounds;
use crate::error::CoreError;
use crate::model::{DashboardStats, HoleRow, Round, StatsMode};

/// Dashboard statistics for one user's rounds under `mode`, with the
/// default handicap table.
///
/// # Errors
/// Returns `CoreError::MalformedRound` if any input round breaks the round
/// contract. Missing data never errors; it shows up as `None`.
pub fn aggregate(
    rounds: &[Round],
    hole_rows: &[HoleRow],
    mode: StatsMode,
) -> Result<DashboardStats, CoreError> {
    aggregate_with(rounds, hole_rows, mode, &HandicapConfig::default())
}

/// # Errors
/// Returns `CoreError::InvalidConfig` if `handicap_config` is unusable, or
/// `CoreError::MalformedRound` if any input round breaks the round contract.
pub fn aggregate_with(
    rounds: &[Round],
    hole_rows: &[HoleRow],
    mode: StatsMode,
    handicap_config: &HandicapConfig,
) -> Result<DashboardStats, CoreError> {
    handicap_config.validate()?;
    validate_rounds(rounds)?;

    let mut normalized = normalize(rounds, mode);
    sort_chronologically(&mut normalized);
    debug!(
        "aggregating {} of {} rounds in {mode} mode",
        normalized.len(),
        rounds.len()
    );

    let scores: Vec<i32> = normalized.iter().filter_map(|r| r.score).collect();
    let fir_avg = ratio_of_sums(normalized.iter().filter_map(|r| r.fir_hit.zip(r.fir_total)));
    let gir_avg = ratio_of_sums(normalized.iter().filter_map(|r| r.gir_hit.zip(r.gir_total)));

    // handicap is always on a combined basis
    let combined = normalize(rounds, StatsMode::Combined);
    let handicap = calculate_handicap_with(&combined, handicap_config);
    let hbh_stats = compile_hbh_stats(&normalized, hole_rows);

    Ok(DashboardStats {
        mode,
        total_rounds: normalized.len(),
        scaled_rounds: normalized.iter().filter(|r| r.scaled_from_nine).count(),
        best_score: scores.iter().min().copied(),
        worst_score: scores.iter().max().copied(),
        average_score: mean(scores.iter().copied()),
        handicap: handicap.handicap,
        handicap_message: handicap.message,
        fir_avg,
        gir_avg,
        avg_putts: mean(normalized.iter().filter_map(|r| r.putts)),
        avg_penalties: mean(normalized.iter().filter_map(|r| r.penalties)),
        rounds: normalized,
        hbh_stats,
    })
}

/// `Σhit / Σtotal * 100`, so rounds with few opportunities are not overweighted.
#[must_use]
pub fn ratio_of_sums(pairs: impl Iterator<Item = (i32, i32)>) -> Option<f64> {
    let (hit, total) = pairs.fold((0_i64, 0_i64), |(hit, total), (h, t)| {
        (hit + i64::from(h), total + i64::from(t))
    });
    (total > 0).then(|| hit as f64 / total as f64 * 100.0)
}

#[must_use]
pub fn mean(values: impl Iterator<Item = i32>) -> Option<f64> {
    let (sum, n) = values.fold((0_i64, 0_usize), |(sum, n), v| (sum + i64::from(v), n + 1));
    (n > 0).then(|| sum as f64 / n as f64)
}
