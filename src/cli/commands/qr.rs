use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{schedule, token};
use crate::errors::AppResult;
use crate::ui::messages;
use std::thread;
use std::time::Duration;

/// Handle the `qr` command: show the payload the QR screen encodes right
/// now. With `--watch`, re-evaluate every refresh period so the direction
/// flips within a minute of the schedule boundary (16:30 Mon-Thu, 15:00 Fri).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Qr { watch } = cmd {
        print_payload(cfg);

        while *watch {
            thread::sleep(Duration::from_secs(cfg.qr_refresh_secs.max(1)));
            println!();
            print_payload(cfg);
        }
    }

    Ok(())
}

fn print_payload(cfg: &Config) {
    // Recomputed on every refresh, never cached.
    let direction = schedule::current_direction();
    let day_token = token::today_token();
    let url = token::scan_url(&cfg.base_url, &day_token, direction);

    messages::header(format!("Système de Pointage - {}", direction.label().to_uppercase()));
    messages::detail("Date", day_token.date().format("%Y-%m-%d"));
    messages::detail("Type", direction.label());
    messages::detail("Token", day_token);
    messages::detail("URL", &url);
    println!();
    messages::info("Scannez ce lien pour enregistrer votre pointage.");
    messages::info("QR de sortie à 16h30 (lundi au jeudi), 15h00 (vendredi).");
}
