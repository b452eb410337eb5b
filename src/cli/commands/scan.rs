use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workflow::{ClockInWorkflow, ScanOutcome};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::record::ClockRecord;
use crate::net::geocode::NominatimClient;
use crate::net::geolocate::ConfiguredLocator;
use crate::net::identity::IpifyClient;
use crate::ui::messages;

/// Handle the `scan` command: run the clock-in workflow for one scan.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan { token, direction } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let store = RecordStore::new(&pool.conn);

        let identity = IpifyClient::new(&cfg.ip_endpoint);
        let locator = ConfiguredLocator::new(cfg.device_position());
        let geocoder = NominatimClient::new(&cfg.geocode_endpoint);

        let workflow = ClockInWorkflow::new(&store, &identity, &locator, &geocoder);
        let outcome = workflow.run(token, direction)?;

        match &outcome {
            ScanOutcome::AlreadyRecorded(rec) => {
                messages::warning(format!(
                    "Pointage déjà effectué: votre {} a déjà été enregistrée aujourd'hui à {}.",
                    rec.direction.label().to_lowercase(),
                    rec.time_str()
                ));
            }
            ScanOutcome::Recorded(rec) => {
                messages::success(format!(
                    "Pointage réussi ! Votre {} a été enregistrée avec succès.",
                    rec.direction.label().to_lowercase()
                ));
                let _ = ttlog(
                    &pool.conn,
                    "record",
                    &rec.storage_key(),
                    &format!("{} recorded for {}", rec.direction.as_str(), rec.ip),
                );
            }
        }

        print_details(outcome.record());

        let _ = ttlog(
            &pool.conn,
            "scan",
            token,
            &format!("scan processed ({})", direction),
        );
    }

    Ok(())
}

fn print_details(rec: &ClockRecord) {
    println!();
    messages::header("Détails du pointage");
    messages::detail("Date et heure", format!("{} {}", rec.date_str(), rec.time_str()));
    messages::detail("Type", rec.direction.label());
    messages::detail("Adresse IP", &rec.ip);
    if let Some(p) = rec.position() {
        messages::detail(
            "Coordonnées GPS",
            format!("{:.6}, {:.6}", p.latitude, p.longitude),
        );
    }
    messages::detail("Adresse", &rec.address);
}
