use crate::utils::colors::{BLUE, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", RED, BOLD, ICON_ERR, RESET, msg);
}

/// Section header for the QR and records screens.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}== {} =={}", BLUE, BOLD, msg, RESET);
}

/// One `label : value` line of a detail card.
pub fn detail<T: fmt::Display>(label: &str, value: T) {
    println!("  {}{:<16}{} {}", CYAN, label, RESET, value);
}
