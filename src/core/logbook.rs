use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI color per log operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "scan" => Colour::Green,
        "record" => Colour::Cyan,
        "storage_read" => Colour::Red,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogbookLogic;

impl LogbookLogic {
    /// Print the internal log table, oldest first.
    pub fn print_log(pool: &mut DbPool, _cfg: &Config) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + 1 + target.len())
            .max()
            .unwrap_or(10)
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);
            let plain = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} {target}")
            };

            let shown = if plain.len() > 60 {
                let mut s = plain.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                plain.clone()
            };

            // Only the operation word is colored; padding is computed on
            // the uncolored text so columns stay aligned.
            let colored = match shown.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(shown.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w.saturating_sub(shown.len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
