use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;

/// Handle the `db` subcommand (info and integrity checks).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            stats::check_db(&mut pool)?;
        }
    }

    Ok(())
}
