#![allow(dead_code)]

use chrono::NaiveDate;
use golf_stats_core::model::{HoleRow, Round};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn round(id: i64, day: NaiveDate, holes: u8, score: i32) -> Round {
    let (par, rating) = if holes == 9 { (36, 36.0) } else { (72, 72.0) };
    Round {
        id,
        date: day,
        holes,
        score: Some(score),
        par: Some(par),
        rating: Some(rating),
        slope: Some(113.0),
        fir_hit: None,
        fir_total: None,
        gir_hit: None,
        gir_total: None,
        putts: None,
        penalties: None,
        hole_by_hole: false,
        advanced_stats: false,
        scaled_from_nine: false,
    }
}

pub fn advanced(
    mut round: Round,
    fir: (i32, i32),
    gir: (i32, i32),
    putts: i32,
    penalties: i32,
) -> Round {
    round.fir_hit = Some(fir.0);
    round.fir_total = Some(fir.1);
    round.gir_hit = Some(gir.0);
    round.gir_total = Some(gir.1);
    round.putts = Some(putts);
    round.penalties = Some(penalties);
    round.advanced_stats = true;
    round
}

pub fn hole(round_id: i64, par: i32, score: i32) -> HoleRow {
    HoleRow {
        round_id,
        score: Some(score),
        par: Some(par),
        hole_number: None,
        putts: None,
        penalties: None,
        fir_hit: None,
        gir_hit: None,
    }
}
