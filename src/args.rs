pub mod types;
pub mod validation;

pub use types::*;

use clap::Parser;
use std::fs;

use crate::error::AppError;

/// Parse the command line and load any startup scripts it names.
///
/// # Errors
///
/// Will return `Err` if a startup script cannot be read
pub fn args_checks() -> Result<CleanArgs, AppError> {
    CleanArgs::try_from(Args::parse())
}

impl TryFrom<Args> for CleanArgs {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let combined_sql_script = match &args.db_startup_script {
            Some(files) => files
                .split(';')
                .map(fs::read_to_string)
                .collect::<Result<Vec<_>, _>>()?
                .join("\n"),
            None => String::new(),
        };

        Ok(CleanArgs {
            db_name: args.db_name,
            db_startup_script: args.db_startup_script,
            combined_sql_script,
            db_populate_json: args.db_populate_json,
            handicap_config: args.handicap_table.unwrap_or_default(),
            report_user: args.report_user,
            mode: args.mode,
            bind: args.bind,
            port: args.port,
        })
    }
}
