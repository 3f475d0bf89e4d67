use clap::Parser;
use golf_stats_core::model::StatsMode;
use golf_stats_core::stats::HandicapConfig;
use serde_json::Value;

use super::validation::{
    check_handicap_table, check_readable_file, check_readable_file_and_json, parse_mode,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The sqlite filename. Use :memory: for a throwaway database.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: String,
    /// If specified, this sql is run on program startup. Separate several files with `;`.
    #[arg(long, value_name = "DATABASE_STARTUP_SCRIPT", value_parser = check_readable_file)]
    pub db_startup_script: Option<String>,
    /// Courses, tees and rounds to insert on startup.
    #[arg(long, value_name = "DATABASE_POPULATE_JSON", value_parser = check_readable_file_and_json)]
    pub db_populate_json: Option<Value>,
    /// Replacement handicap selection table, as json.
    #[arg(long, value_name = "HANDICAP_TABLE_JSON", value_parser = check_handicap_table)]
    pub handicap_table: Option<HandicapConfig>,
    /// Print the dashboard for this user as json and exit instead of serving.
    #[arg(short = 'r', long, value_name = "USER_ID")]
    pub report_user: Option<i64>,
    /// Stats mode for --report-user: 9, 18 or combined.
    #[arg(short = 'm', long, value_name = "MODE", default_value = "combined", value_parser = parse_mode)]
    pub mode: StatsMode,
    #[arg(long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 8081)]
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub db_name: String,
    pub db_startup_script: Option<String>,
    pub combined_sql_script: String,
    pub db_populate_json: Option<Value>,
    pub handicap_config: HandicapConfig,
    pub report_user: Option<i64>,
    pub mode: StatsMode,
    pub bind: String,
    pub port: u16,
}
