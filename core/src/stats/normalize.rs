use crate::model::{Round, StatsMode};

/// Rewrite a round collection into a comparable series for `mode`.
///
/// `Nine` and `Eighteen` filter on the recorded hole count and leave the
/// rounds untouched. `Combined` keeps every round and doubles each 9-hole
/// round into an 18-hole equivalent. Output order follows input order.
#[must_use]
pub fn normalize(rounds: &[Round], mode: StatsMode) -> Vec<Round> {
    match mode {
        StatsMode::Nine => rounds.iter().filter(|r| r.holes == 9).cloned().collect(),
        StatsMode::Eighteen => rounds.iter().filter(|r| r.holes == 18).cloned().collect(),
        StatsMode::Combined => rounds.iter().map(scale_to_eighteen).collect(),
    }
}

fn scale_to_eighteen(round: &Round) -> Round {
    if round.holes != 9 {
        return round.clone();
    }
    // absent values stay absent
    let double = |v: Option<i32>| v.map(|v| v.saturating_mul(2));
    Round {
        holes: 18,
        score: double(round.score),
        par: double(round.par),
        rating: round.rating.map(|r| r * 2.0),
        fir_hit: double(round.fir_hit),
        fir_total: double(round.fir_total),
        gir_hit: double(round.gir_hit),
        gir_total: double(round.gir_total),
        putts: double(round.putts),
        penalties: double(round.penalties),
        scaled_from_nine: true,
        ..round.clone()
    }
}
