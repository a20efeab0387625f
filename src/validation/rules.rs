use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;

/// `chrono` spelling of `yyyy-MM-dd HH:mm:ss`.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

lazy_static! {
    static ref E164: Regex = Regex::new(r"^\+[1-9]?[0-9]{7,14}$").unwrap();
}

/// `+` followed by digits only, no spaces or punctuation.
pub fn is_e164(value: &str) -> bool {
    E164.is_match(value)
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}
