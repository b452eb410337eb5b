//! Day-token and scan-URL generation for the QR display.

use crate::models::{day_token::DayToken, direction::Direction};
use chrono::NaiveDate;

/// Token issued for a calendar day.
pub fn day_token_for(date: NaiveDate) -> DayToken {
    DayToken::for_date(date)
}

/// Token for today, the one the QR screen shows.
pub fn today_token() -> DayToken {
    day_token_for(crate::utils::date::today())
}

/// The full payload encoded into the QR image:
/// `<origin>/pointage?token=<dayToken>&type=<direction>`.
/// Same inputs always produce the same link, so regenerating every minute
/// is idempotent until the schedule boundary flips the direction.
pub fn scan_url(base_url: &str, token: &DayToken, direction: Direction) -> String {
    format!(
        "{}/pointage?token={}&type={}",
        base_url.trim_end_matches('/'),
        token,
        direction.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_scan_url() {
        let tok = day_token_for(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(
            scan_url("https://pointage.example.org", &tok, Direction::Entree),
            "https://pointage.example.org/pointage?token=QR-2024-06-21&type=entree"
        );
    }

    #[test]
    fn tolerates_trailing_slash_in_base_url() {
        let tok = day_token_for(NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(
            scan_url("http://localhost:8080/", &tok, Direction::Sortie),
            "http://localhost:8080/pointage?token=QR-2024-06-21&type=sortie"
        );
    }

    #[test]
    fn today_token_matches_the_wire_shape() {
        let re = regex::Regex::new(r"^QR-\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(re.is_match(&today_token().to_string()));
    }
}
