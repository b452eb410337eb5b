//! The weekly schedule rule: which direction the current QR code encodes.
//!
//! Exit windows open at 16:30 Monday through Thursday and at 15:00 on
//! Friday. Outside those windows the code is an entry code. Saturday and
//! Sunday have no exit window at all, so they always yield entry.

use crate::models::direction::Direction;
use chrono::{Datelike, Local, NaiveDateTime, NaiveTime, Timelike, Weekday};

const WEEKDAY_EXIT_HOUR: u32 = 16;
const WEEKDAY_EXIT_MIN: u32 = 30;
const FRIDAY_EXIT_HOUR: u32 = 15;
const FRIDAY_EXIT_MIN: u32 = 0;

/// Direction encoded by the schedule at the given wall-clock instant.
/// Total function: every instant maps to exactly one direction.
pub fn direction_at(now: NaiveDateTime) -> Direction {
    let after = |h: u32, m: u32| {
        let t: NaiveTime = now.time();
        t.hour() > h || (t.hour() == h && t.minute() >= m)
    };

    match now.weekday() {
        Weekday::Fri if after(FRIDAY_EXIT_HOUR, FRIDAY_EXIT_MIN) => Direction::Sortie,
        Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu
            if after(WEEKDAY_EXIT_HOUR, WEEKDAY_EXIT_MIN) =>
        {
            Direction::Sortie
        }
        _ => Direction::Entree,
    }
}

/// Direction right now. Recomputed on every call, never cached: the answer
/// flips minute-to-minute at the schedule boundary.
pub fn current_direction() -> Direction {
    direction_at(Local::now().naive_local())
}
