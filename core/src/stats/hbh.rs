use ahash::RandomState;
use std::collections::HashMap;
use std::collections::HashSet;

use crate::model::{HbhStats, HoleRow, Round, ScoreBucket};

#[derive(Clone, Copy, Debug, Default)]
struct ParTally {
    strokes: i64,
    holes: usize,
}

impl ParTally {
    fn add(self, score: i32) -> Self {
        Self {
            strokes: self.strokes + i64::from(score),
            holes: self.holes + 1,
        }
    }

    fn average(self) -> Option<f64> {
        (self.holes > 0).then(|| self.strokes as f64 / self.holes as f64)
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct HbhTally {
    holes_counted: usize,
    par3: ParTally,
    par4: ParTally,
    par5: ParTally,
    aces: usize,
    albatrosses: usize,
    eagles: usize,
    birdies: usize,
    pars: usize,
    bogeys: usize,
    double_bogeys_plus: usize,
}

impl HbhTally {
    fn with_row(self, row: &HoleRow) -> Self {
        let (Some(score), Some(par)) = (row.score, row.par) else {
            return self;
        };
        // a hole takes at least one stroke
        if score < 1 {
            return self;
        }
        let mut next = Self {
            holes_counted: self.holes_counted + 1,
            ..self
        };
        match par {
            3 => next.par3 = self.par3.add(score),
            4 => next.par4 = self.par4.add(score),
            5 => next.par5 = self.par5.add(score),
            _ => {}
        }
        match ScoreBucket::classify(score, par) {
            Some(ScoreBucket::Ace) => next.aces += 1,
            Some(ScoreBucket::Albatross) => next.albatrosses += 1,
            Some(ScoreBucket::Eagle) => next.eagles += 1,
            Some(ScoreBucket::Birdie) => next.birdies += 1,
            Some(ScoreBucket::Par) => next.pars += 1,
            Some(ScoreBucket::Bogey) => next.bogeys += 1,
            Some(ScoreBucket::DoubleBogeyPlus) => next.double_bogeys_plus += 1,
            None => {}
        }
        next
    }

    fn finish(self, hbh_rounds_count: usize) -> HbhStats {
        HbhStats {
            hbh_rounds_count,
            holes_counted: self.holes_counted,
            par3_avg: self.par3.average(),
            par4_avg: self.par4.average(),
            par5_avg: self.par5.average(),
            aces: self.aces,
            albatrosses: self.albatrosses,
            eagles: self.eagles,
            birdies: self.birdies,
            pars: self.pars,
            bogeys: self.bogeys,
            double_bogeys_plus: self.double_bogeys_plus,
        }
    }
}

/// Group hole rows by round, keeping only rounds in `round_ids`.
#[must_use]
pub fn group_rows_by_round<'a, S: std::hash::BuildHasher>(
    hole_rows: &'a [HoleRow],
    round_ids: &HashSet<i64, S>,
) -> HashMap<i64, Vec<&'a HoleRow>, RandomState> {
    let mut grouped: HashMap<i64, Vec<&HoleRow>, RandomState> = HashMap::default();
    for row in hole_rows.iter().filter(|row| round_ids.contains(&row.round_id)) {
        grouped.entry(row.round_id).or_default().push(row);
    }
    grouped
}

/// Scoring buckets and per-par averages over the hole-by-hole rounds in
/// `rounds`. Rounds with no hole rows are not counted.
#[must_use]
pub fn compile_hbh_stats(rounds: &[Round], hole_rows: &[HoleRow]) -> HbhStats {
    let hbh_ids: HashSet<i64, RandomState> = rounds
        .iter()
        .filter(|round| round.hole_by_hole)
        .map(|round| round.id)
        .collect();
    let grouped = group_rows_by_round(hole_rows, &hbh_ids);

    grouped
        .values()
        .flatten()
        .fold(HbhTally::default(), |tally, row| tally.with_row(row))
        .finish(grouped.len())
}
