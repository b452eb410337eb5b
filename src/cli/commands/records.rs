use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard;
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::ClockRecord;
use crate::ui::messages;
use crate::utils::colors::{CYAN, GREEN, MAGENTA, RED, RESET, colorize_direction};
use crate::utils::table::{Column, Table};
use std::thread;
use std::time::Duration;

/// Handle the `records` command: the read-only admin view over the store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Records { watch, export } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let store = RecordStore::new(&pool.conn);

        if let Some(path) = export {
            let mut records = store.list_all()?;
            dashboard::sort_recent_first(&mut records);
            export_csv(path, &records)?;
            messages::success(format!("{} pointages exportés vers {}", records.len(), path));
            return Ok(());
        }

        print_view(&store)?;

        while *watch {
            thread::sleep(Duration::from_secs(cfg.records_refresh_secs.max(1)));
            println!();
            print_view(&store)?;
        }
    }

    Ok(())
}

fn print_view(store: &RecordStore) -> AppResult<()> {
    let mut records = store.list_all()?;
    dashboard::sort_recent_first(&mut records);

    messages::header("Tableau des Pointages");

    if records.is_empty() {
        messages::warning("Aucun pointage enregistré pour le moment.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Heure", 8),
        Column::new("Type", 6),
        Column::new("IP", 15),
        Column::new("Adresse", 40),
    ]);
    for rec in &records {
        table.add_row(vec![
            rec.date_str(),
            rec.time_str(),
            rec.direction.label().to_string(),
            rec.ip.clone(),
            rec.address.clone(),
        ]);
    }
    println!("{}", table.render());

    let summary = dashboard::summarize(&records);
    messages::header("Statistiques");
    println!("{CYAN}• Total des pointages:{RESET} {}", summary.total);
    println!(
        "{GREEN}• Entrées:{RESET} {}",
        colorize_direction(&summary.entries.to_string(), true)
    );
    println!(
        "{RED}• Sorties:{RESET} {}",
        colorize_direction(&summary.exits.to_string(), false)
    );
    println!("{MAGENTA}• Adresses IP uniques:{RESET} {}", summary.unique_ips);

    Ok(())
}

/// Write the record table to a CSV file.
fn export_csv(path: &str, records: &[ClockRecord]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "date", "heure", "type", "ip", "latitude", "longitude", "adresse", "token",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for rec in records {
        let (lat, lon) = match rec.position() {
            Some(p) => (p.latitude.to_string(), p.longitude.to_string()),
            None => (String::new(), String::new()),
        };
        wtr.write_record([
            rec.date_str(),
            rec.time_str(),
            rec.direction.as_str().to_string(),
            rec.ip.clone(),
            lat,
            lon,
            rec.address.clone(),
            rec.token.to_string(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    Ok(())
}
