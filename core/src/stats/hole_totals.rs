use serde::{Deserialize, Serialize};

use crate::model::{HoleRow, Round};

/// Round-level figures derived from a round's hole rows.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoleTotals {
    pub score: Option<i32>,
    pub par: Option<i32>,
    pub fir_hit: Option<i32>,
    pub fir_total: Option<i32>,
    pub gir_hit: Option<i32>,
    pub gir_total: Option<i32>,
    pub putts: Option<i32>,
    pub penalties: Option<i32>,
}

fn sum_recorded(values: impl Iterator<Item = Option<i32>>) -> Option<i32> {
    values.flatten().fold(None, |acc, v| Some(acc.unwrap_or(0) + v))
}

fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Every hole with a known par other than 3 counts as one fairway
/// opportunity; every hole counts as one green opportunity. A pair stays
/// absent when no hole recorded a hit/miss for it.
#[must_use]
pub fn totals_from_holes(rows: &[&HoleRow]) -> HoleTotals {
    let fairway_holes: Vec<&&HoleRow> = rows
        .iter()
        .filter(|row| matches!(row.par, Some(par) if par != 3))
        .collect();
    let fir_recorded = rows.iter().any(|row| row.fir_hit.is_some());
    let gir_recorded = rows.iter().any(|row| row.gir_hit.is_some());

    HoleTotals {
        score: sum_recorded(rows.iter().map(|row| row.score)),
        par: sum_recorded(rows.iter().map(|row| row.par)),
        fir_hit: fir_recorded.then(|| {
            count(fairway_holes.iter().filter(|row| row.fir_hit == Some(true)).count())
        }),
        fir_total: fir_recorded.then(|| count(fairway_holes.len())),
        gir_hit: gir_recorded
            .then(|| count(rows.iter().filter(|row| row.gir_hit == Some(true)).count())),
        gir_total: gir_recorded.then(|| count(rows.len())),
        putts: sum_recorded(rows.iter().map(|row| row.putts)),
        penalties: sum_recorded(rows.iter().map(|row| row.penalties)),
    }
}

/// Fill the fields a hole-by-hole round left empty from its hole rows.
/// Recorded round-level values always win; FIR/GIR pairs are filled as a pair.
/// Score and par are only derived from a complete card: one row per hole,
/// each with a par and a score of at least 1.
#[must_use]
pub fn apply_hole_totals(round: &Round, rows: &[&HoleRow]) -> Round {
    if !round.hole_by_hole || rows.is_empty() {
        return round.clone();
    }
    let totals = totals_from_holes(rows);
    let complete = rows.len() == usize::from(round.holes)
        && rows
            .iter()
            .all(|row| row.par.is_some() && row.score.is_some_and(|score| score >= 1));
    let (score, par) = if complete {
        (totals.score, totals.par)
    } else {
        (None, None)
    };
    let (fir_hit, fir_total) = match (round.fir_hit, round.fir_total) {
        (None, None) => (totals.fir_hit, totals.fir_total),
        recorded => recorded,
    };
    let (gir_hit, gir_total) = match (round.gir_hit, round.gir_total) {
        (None, None) => (totals.gir_hit, totals.gir_total),
        recorded => recorded,
    };
    let putts = round.putts.or(totals.putts);
    let penalties = round.penalties.or(totals.penalties);
    let advanced_stats = round.advanced_stats
        || [fir_hit, gir_hit, putts, penalties].iter().any(Option::is_some);

    Round {
        score: round.score.or(score),
        par: round.par.or(par),
        fir_hit,
        fir_total,
        gir_hit,
        gir_total,
        putts,
        penalties,
        advanced_stats,
        ..round.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(par: i32, score: i32, fir: Option<bool>, gir: Option<bool>, putts: i32) -> HoleRow {
        HoleRow {
            round_id: 1,
            score: Some(score),
            par: Some(par),
            hole_number: None,
            putts: Some(putts),
            penalties: None,
            fir_hit: fir,
            gir_hit: gir,
        }
    }

    #[test]
    fn test_par_three_is_not_a_fairway_opportunity() {
        let mut unknown_par = hole(4, 5, Some(true), Some(false), 2);
        unknown_par.par = None;
        let rows = [
            hole(4, 4, Some(true), Some(true), 2),
            hole(3, 3, None, Some(true), 2),
            hole(5, 6, Some(false), Some(false), 3),
            unknown_par,
        ];
        let refs: Vec<&HoleRow> = rows.iter().collect();
        let totals = totals_from_holes(&refs);
        assert_eq!(totals.fir_hit, Some(1));
        assert_eq!(totals.fir_total, Some(2));
        assert_eq!(totals.gir_hit, Some(2));
        assert_eq!(totals.gir_total, Some(4));
        assert_eq!(totals.putts, Some(9));
        assert_eq!(totals.penalties, None);
        assert_eq!(totals.score, Some(18));
        assert_eq!(totals.par, Some(12));
    }

    fn hbh_round(holes: u8) -> Round {
        Round {
            id: 1,
            date: chrono::NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            holes,
            score: None,
            par: None,
            rating: None,
            slope: None,
            fir_hit: None,
            fir_total: None,
            gir_hit: None,
            gir_total: None,
            putts: None,
            penalties: None,
            hole_by_hole: true,
            advanced_stats: false,
            scaled_from_nine: false,
        }
    }

    #[test]
    fn test_partial_card_leaves_score_absent() {
        let rows = [
            hole(4, 4, Some(true), Some(true), 2),
            hole(3, 3, None, Some(true), 2),
            hole(5, 6, Some(false), Some(false), 3),
        ];
        let refs: Vec<&HoleRow> = rows.iter().collect();
        let filled = apply_hole_totals(&hbh_round(18), &refs);
        assert_eq!(filled.score, None);
        assert_eq!(filled.par, None);
        assert_eq!(filled.putts, Some(7));
        assert_eq!((filled.gir_hit, filled.gir_total), (Some(2), Some(3)));
    }

    #[test]
    fn test_complete_card_sets_score_and_par() {
        let rows: Vec<HoleRow> = (0..9).map(|_| hole(4, 5, None, None, 2)).collect();
        let refs: Vec<&HoleRow> = rows.iter().collect();
        let filled = apply_hole_totals(&hbh_round(9), &refs);
        assert_eq!(filled.score, Some(45));
        assert_eq!(filled.par, Some(36));

        let mut unscored = rows.clone();
        unscored[4].score = Some(0);
        let refs: Vec<&HoleRow> = unscored.iter().collect();
        assert_eq!(apply_hole_totals(&hbh_round(9), &refs).score, None);
    }

    #[test]
    fn test_no_flags_leaves_pairs_absent() {
        let rows = [hole(4, 5, None, None, 2)];
        let refs: Vec<&HoleRow> = rows.iter().collect();
        let totals = totals_from_holes(&refs);
        assert_eq!(totals.fir_hit, None);
        assert_eq!(totals.fir_total, None);
        assert_eq!(totals.gir_total, None);
    }
}
