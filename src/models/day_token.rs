use chrono::NaiveDate;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^QR-(\d{4})-(\d{2})-(\d{2})$").expect("valid token regex"))
}

/// Opaque per-day identifier carried inside the QR payload.
/// Renders as `QR-YYYY-MM-DD` for the calendar day the code was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayToken(NaiveDate);

impl DayToken {
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a token received from a scan.
    ///
    /// The shape must be exactly `QR-` followed by a 4-digit year, 2-digit
    /// month and 2-digit day, and the digits must denote a real calendar
    /// date: `QR-2024-13-40` is rejected even though it matches the shape.
    pub fn parse(s: &str) -> Option<Self> {
        if !token_regex().is_match(s) {
            return None;
        }
        // Shape is right; chrono decides whether the date actually exists.
        NaiveDate::parse_from_str(&s[3..], "%Y-%m-%d").ok().map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QR-{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for DayToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

struct DayTokenVisitor;

impl Visitor<'_> for DayTokenVisitor {
    type Value = DayToken;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a token of the form QR-YYYY-MM-DD")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<DayToken, E> {
        DayToken::parse(v).ok_or_else(|| E::custom(format!("invalid day token: {}", v)))
    }
}

impl<'de> Deserialize<'de> for DayToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(DayTokenVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_valid_token() {
        let tok = DayToken::parse("QR-2024-06-21").expect("valid token");
        assert_eq!(tok.date(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap());
        assert_eq!(tok.to_string(), "QR-2024-06-21");
    }

    #[test]
    fn for_date_matches_wire_shape() {
        let tok = DayToken::for_date(NaiveDate::from_ymd_opt(2025, 1, 3).unwrap());
        let re = regex::Regex::new(r"^QR-\d{4}-\d{2}-\d{2}$").unwrap();
        assert!(re.is_match(&tok.to_string()));
    }

    #[test]
    fn rejects_impossible_calendar_dates() {
        assert!(DayToken::parse("QR-2024-13-40").is_none());
        assert!(DayToken::parse("QR-2024-02-30").is_none());
        assert!(DayToken::parse("QR-2023-00-10").is_none());
    }

    #[test]
    fn rejects_malformed_shapes() {
        assert!(DayToken::parse("QR-24-06-21").is_none());
        assert!(DayToken::parse("QR-2024-6-21").is_none());
        assert!(DayToken::parse("2024-06-21").is_none());
        assert!(DayToken::parse("QR-2024-06-21-extra").is_none());
        assert!(DayToken::parse("QR-aaaa-bb-cc").is_none());
        assert!(DayToken::parse("").is_none());
    }

    #[test]
    fn serde_uses_the_string_form() {
        let tok = DayToken::parse("QR-2024-06-21").unwrap();
        let json = serde_json::to_string(&tok).unwrap();
        assert_eq!(json, "\"QR-2024-06-21\"");
        let back: DayToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tok);
    }
}
