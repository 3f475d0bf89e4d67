use log::debug;

use super::dashboard::aggregate_with;
use super::handicap::HandicapConfig;
use super::hbh::group_rows_by_round;
use super::hole_totals::apply_hole_totals;
use crate::error::CoreError;
use crate::model::{DashboardStats, HoleRow, Round, StatsMode};
use crate::storage::RoundStore;
use ahash::RandomState;
use std::collections::HashSet;

/// Fill each hole-by-hole round's missing aggregates from its hole rows.
#[must_use]
pub fn with_hole_totals(rounds: &[Round], hole_rows: &[HoleRow]) -> Vec<Round> {
    let ids: HashSet<i64, RandomState> = rounds
        .iter()
        .filter(|r| r.hole_by_hole)
        .map(|r| r.id)
        .collect();
    let grouped = group_rows_by_round(hole_rows, &ids);
    rounds
        .iter()
        .map(|round| match grouped.get(&round.id) {
            Some(rows) => apply_hole_totals(round, rows),
            None => round.clone(),
        })
        .collect()
}

/// Fetch a user's rounds and hole rows concurrently and build the dashboard.
///
/// # Errors
/// Returns an error if either fetch fails or a stored round is malformed.
pub async fn load_dashboard(
    store: &dyn RoundStore,
    user_id: i64,
    mode: StatsMode,
    handicap_config: &HandicapConfig,
) -> Result<DashboardStats, CoreError> {
    let (rounds, hole_rows) = futures::try_join!(
        store.get_rounds_for_user(user_id),
        store.get_hole_rows_for_user(user_id)
    )?;
    debug!(
        "user {user_id}: loaded {} rounds and {} hole rows",
        rounds.len(),
        hole_rows.len()
    );
    let rounds = with_hole_totals(&rounds, &hole_rows);
    aggregate_with(&rounds, &hole_rows, mode, handicap_config)
}
