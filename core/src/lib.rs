pub mod error;
pub mod model;
pub mod stats;
pub mod storage;

pub use error::CoreError;
pub use model::{DashboardStats, HbhStats, HoleRow, Round, ScoreBucket, StatsMode};
pub use stats::{
    HandicapConfig, HandicapResult, aggregate, calculate_handicap, compile_hbh_stats, normalize,
};
