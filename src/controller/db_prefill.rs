use chrono::NaiveDate;
use log::info;
use rusqlite::{Transaction, params};
use serde::Deserialize;
use serde_json::Value;

use crate::db::SqliteStore;
use crate::error::AppError;

#[derive(Deserialize)]
struct PrefillTee {
    name: String,
    holes: u8,
    par: Option<i32>,
    rating: Option<f64>,
    slope: Option<f64>,
}

#[derive(Deserialize)]
struct PrefillCourse {
    name: String,
    tees: Vec<PrefillTee>,
}

#[derive(Deserialize)]
struct PrefillHole {
    hole_number: u8,
    par: Option<i32>,
    score: Option<i32>,
    #[serde(default)]
    putts: Option<i32>,
    #[serde(default)]
    penalties: Option<i32>,
    #[serde(default)]
    fir_hit: Option<bool>,
    #[serde(default)]
    gir_hit: Option<bool>,
}

#[derive(Deserialize)]
struct PrefillRound {
    user_id: i64,
    course: String,
    tee: String,
    date: NaiveDate,
    holes: u8,
    score: Option<i32>,
    #[serde(default)]
    fir_hit: Option<i32>,
    #[serde(default)]
    fir_total: Option<i32>,
    #[serde(default)]
    gir_hit: Option<i32>,
    #[serde(default)]
    gir_total: Option<i32>,
    #[serde(default)]
    putts: Option<i32>,
    #[serde(default)]
    penalties: Option<i32>,
    #[serde(default)]
    hole_scores: Vec<PrefillHole>,
}

impl PrefillRound {
    fn has_advanced_stats(&self) -> bool {
        [self.fir_hit, self.gir_hit, self.putts, self.penalties]
            .iter()
            .any(Option::is_some)
            || self.hole_scores.iter().any(|h| {
                h.fir_hit.is_some()
                    || h.gir_hit.is_some()
                    || h.putts.is_some()
                    || h.penalties.is_some()
            })
    }
}

#[derive(Deserialize)]
struct Prefill {
    courses: Vec<PrefillCourse>,
    rounds: Vec<PrefillRound>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefillSummary {
    pub courses: usize,
    pub tees: usize,
    pub rounds: usize,
    pub hole_scores: usize,
}

fn upsert_course(tx: &Transaction<'_>, course: &PrefillCourse) -> Result<i64, AppError> {
    tx.execute(
        "INSERT INTO course (name) VALUES (?1) ON CONFLICT (name) DO NOTHING;",
        params![course.name],
    )?;
    Ok(tx.query_row(
        "SELECT course_id FROM course WHERE name = ?1;",
        params![course.name],
        |row| row.get(0),
    )?)
}

fn upsert_tee(tx: &Transaction<'_>, course_id: i64, tee: &PrefillTee) -> Result<(), AppError> {
    tx.execute(
        "INSERT INTO tee (course_id, name, holes, par, rating, slope)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT (course_id, name) DO UPDATE SET
            holes = excluded.holes, par = excluded.par,
            rating = excluded.rating, slope = excluded.slope;",
        params![course_id, tee.name, tee.holes, tee.par, tee.rating, tee.slope],
    )?;
    Ok(())
}

fn tee_id_and_holes(tx: &Transaction<'_>, course: &str, tee: &str) -> Result<(i64, u8), AppError> {
    let found = tx.query_row(
        "SELECT t.tee_id, t.holes FROM tee t JOIN course c ON c.course_id = t.course_id
         WHERE c.name = ?1 AND t.name = ?2;",
        params![course, tee],
        |row| Ok((row.get(0)?, row.get(1)?)),
    );
    match found {
        Ok(found) => Ok(found),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(AppError::Other(format!(
            "round references unknown tee '{tee}' at '{course}'"
        ))),
        Err(e) => Err(e.into()),
    }
}

fn insert_round(tx: &Transaction<'_>, round: &PrefillRound) -> Result<usize, AppError> {
    let (tee_id, tee_holes) = tee_id_and_holes(tx, &round.course, &round.tee)?;
    // par, rating and slope come from the tee, so they must describe the holes played
    if tee_holes != round.holes {
        return Err(AppError::Other(format!(
            "{}-hole round on {} is recorded against the {}-hole tee '{}' at '{}'",
            round.holes, round.date, tee_holes, round.tee, round.course
        )));
    }
    tx.execute(
        "INSERT INTO round (user_id, tee_id, date_played, holes, score, fir_hit, fir_total,
            gir_hit, gir_total, putts, penalties, hole_by_hole, advanced_stats)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
        params![
            round.user_id,
            tee_id,
            round.date,
            round.holes,
            round.score,
            round.fir_hit,
            round.fir_total,
            round.gir_hit,
            round.gir_total,
            round.putts,
            round.penalties,
            !round.hole_scores.is_empty(),
            round.has_advanced_stats(),
        ],
    )?;
    let round_id = tx.last_insert_rowid();

    let mut stmt = tx.prepare(
        "INSERT INTO hole_score (round_id, hole_number, par, score, putts, penalties, fir_hit, gir_hit)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
    )?;
    for hole in &round.hole_scores {
        stmt.execute(params![
            round_id,
            hole.hole_number,
            hole.par,
            hole.score,
            hole.putts,
            hole.penalties,
            hole.fir_hit,
            hole.gir_hit,
        ])?;
    }
    Ok(round.hole_scores.len())
}

/// Insert the courses, tees, rounds and hole scores of a prefill document.
/// format we have is this:
/// { "courses": [{ "name": "Course", "tees": [{ "name": "White", "holes": 18, "par": 72, "rating": 71.2, "slope": 125 }] }]
/// , "rounds": [{ "user_id": 1, "course": "Course", "tee": "White", "date": "2025-05-01", "holes": 18, "score": 88
///   , "hole_scores": [{ "hole_number": 1, "par": 4, "score": 5, "putts": 2, "fir_hit": true, "gir_hit": false }] }]
/// }
///
/// # Errors
///
/// Will return `Err` if the document does not deserialize, a round names an
/// unknown tee, or an insert fails. Nothing is committed on error.
pub fn db_prefill(json: &Value, store: &SqliteStore) -> Result<PrefillSummary, AppError> {
    let prefill: Prefill = serde_json::from_value(json.clone())?;

    let summary = store.with_connection(|conn| {
        let tx = conn.transaction()?;
        let mut summary = PrefillSummary::default();
        for course in &prefill.courses {
            let course_id = upsert_course(&tx, course)?;
            summary.courses += 1;
            for tee in &course.tees {
                upsert_tee(&tx, course_id, tee)?;
                summary.tees += 1;
            }
        }
        for round in &prefill.rounds {
            summary.hole_scores += insert_round(&tx, round)?;
            summary.rounds += 1;
        }
        tx.commit()?;
        Ok(summary)
    })?;

    info!(
        "prefilled {} courses, {} tees, {} rounds, {} hole scores",
        summary.courses, summary.tees, summary.rounds, summary.hole_scores
    );
    Ok(summary)
}
