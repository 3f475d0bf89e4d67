use async_trait::async_trait;
use golf_stats_core::model::{HoleRow, Round};
use golf_stats_core::storage::{RoundStore, StorageError};
use log::debug;
use rusqlite::{Connection, Row, params};
use std::sync::{Arc, Mutex};

use crate::error::AppError;

pub const SQLITE_TABLE_DROP: &str = include_str!("sql/schema/sqlite/00_table_drop.sql");

pub const SQLITE_DDL: [&str; 4] = [
    include_str!("sql/schema/sqlite/01_course.sql"),
    include_str!("sql/schema/sqlite/02_tee.sql"),
    include_str!("sql/schema/sqlite/03_round.sql"),
    include_str!("sql/schema/sqlite/04_hole_score.sql"),
];

const ROUNDS_FOR_USER: &str = "
    SELECT r.round_id, r.date_played, r.holes, r.score, t.par, t.rating, t.slope,
           r.fir_hit, r.fir_total, r.gir_hit, r.gir_total, r.putts, r.penalties,
           r.hole_by_hole, r.advanced_stats
    FROM round r
    JOIN tee t ON t.tee_id = r.tee_id
    WHERE r.user_id = ?1
    ORDER BY r.date_played, r.round_id;";

const HOLE_ROWS_FOR_USER: &str = "
    SELECT h.round_id, h.hole_number, h.par, h.score, h.putts, h.penalties, h.fir_hit, h.gir_hit
    FROM hole_score h
    JOIN round r ON r.round_id = h.round_id
    WHERE r.user_id = ?1 AND r.hole_by_hole = 1
    ORDER BY h.round_id, h.hole_number;";

/// Rounds, tees and hole scores kept in a single sqlite connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// # Errors
    ///
    /// Will return `Err` if the database cannot be opened
    pub fn open(db_name: &str) -> Result<Self, AppError> {
        Ok(Self::from_connection(Connection::open(db_name)?))
    }

    #[must_use]
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the connection lock is poisoned or `f` fails
    pub fn with_connection<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| AppError::Db("sqlite connection lock poisoned".into()))?;
        f(&mut conn)
    }

    async fn interact<T: Send + 'static>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, AppError> + Send + 'static,
    ) -> Result<T, AppError> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.with_connection(f))
            .await
            .map_err(|e| AppError::Other(format!("sqlite task failed: {e}")))?
    }

    /// Run a batch of statements in one transaction.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails; nothing is committed then
    pub fn execute_batch(&self, sql: &str) -> Result<(), AppError> {
        self.with_connection(|conn| {
            let tx = conn.transaction()?;
            tx.execute_batch(sql)?;
            tx.commit()?;
            Ok(())
        })
    }

    /// # Errors
    ///
    /// Will return `Err` if the ddl fails
    pub fn create_tables(&self) -> Result<(), AppError> {
        self.execute_batch(&SQLITE_DDL.join("\n"))
    }

    /// # Errors
    ///
    /// Will return `Err` if the drop fails
    pub fn drop_tables(&self) -> Result<(), AppError> {
        self.execute_batch(SQLITE_TABLE_DROP)
    }
}

fn round_from_row(row: &Row<'_>) -> rusqlite::Result<Round> {
    Ok(Round {
        id: row.get(0)?,
        date: row.get(1)?,
        holes: row.get(2)?,
        score: row.get(3)?,
        par: row.get(4)?,
        rating: row.get(5)?,
        slope: row.get(6)?,
        fir_hit: row.get(7)?,
        fir_total: row.get(8)?,
        gir_hit: row.get(9)?,
        gir_total: row.get(10)?,
        putts: row.get(11)?,
        penalties: row.get(12)?,
        hole_by_hole: row.get(13)?,
        advanced_stats: row.get(14)?,
        scaled_from_nine: false,
    })
}

fn hole_row_from_row(row: &Row<'_>) -> rusqlite::Result<HoleRow> {
    Ok(HoleRow {
        round_id: row.get(0)?,
        hole_number: row.get(1)?,
        par: row.get(2)?,
        score: row.get(3)?,
        putts: row.get(4)?,
        penalties: row.get(5)?,
        fir_hit: row.get(6)?,
        gir_hit: row.get(7)?,
    })
}

/// # Errors
///
/// Will return `Err` if the query fails or a row does not convert
pub fn rounds_for_user(conn: &Connection, user_id: i64) -> Result<Vec<Round>, AppError> {
    let mut stmt = conn.prepare(ROUNDS_FOR_USER)?;
    let rounds = stmt
        .query_map(params![user_id], round_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rounds)
}

/// # Errors
///
/// Will return `Err` if the query fails or a row does not convert
pub fn hole_rows_for_user(conn: &Connection, user_id: i64) -> Result<Vec<HoleRow>, AppError> {
    let mut stmt = conn.prepare(HOLE_ROWS_FOR_USER)?;
    let rows = stmt
        .query_map(params![user_id], hole_row_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

#[async_trait]
impl RoundStore for SqliteStore {
    async fn get_rounds_for_user(&self, user_id: i64) -> Result<Vec<Round>, StorageError> {
        let rounds = self
            .interact(move |conn| rounds_for_user(conn, user_id))
            .await?;
        debug!("user {user_id}: {} rounds from sqlite", rounds.len());
        Ok(rounds)
    }

    async fn get_hole_rows_for_user(&self, user_id: i64) -> Result<Vec<HoleRow>, StorageError> {
        let rows = self
            .interact(move |conn| hole_rows_for_user(conn, user_id))
            .await?;
        debug!("user {user_id}: {} hole rows from sqlite", rows.len());
        Ok(rows)
    }
}
