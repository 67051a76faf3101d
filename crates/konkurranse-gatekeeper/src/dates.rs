//! Deadline date normalization
//!
//! Recognizes three date shapes, in priority order:
//!
//! 1. `15. oktober 2025` (Norwegian month name)
//! 2. `2025-10-15` (ISO, one- or two-digit month and day)
//! 3. `15/10/2025` (day first)
//!
//! A match whose month name is unknown, or whose numbers do not form a real
//! date, is skipped and scanning continues.

use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_MONTH_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})\.\s*(\w+)\s*(\d{4})").unwrap());

static RE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{4})-(\d{1,2})-(\d{1,2})").unwrap());

static RE_SLASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").unwrap());

const MONTHS: [&str; 12] = [
    "januar",
    "februar",
    "mars",
    "april",
    "mai",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "desember",
];

/// A date shape: the pattern and how to read its captures
struct DateShape {
    regex: &'static LazyLock<Regex>,
    build: fn(&Captures<'_>) -> Option<NaiveDate>,
}

static SHAPES: [DateShape; 3] = [
    DateShape {
        regex: &RE_MONTH_NAME,
        build: from_month_name,
    },
    DateShape {
        regex: &RE_ISO,
        build: from_iso,
    },
    DateShape {
        regex: &RE_SLASH,
        build: from_slash,
    },
];

/// Map a Norwegian month name to its number, case-insensitively
///
/// # Examples
///
/// ```
/// use konkurranse_gatekeeper::month_number;
///
/// assert_eq!(month_number("Oktober"), Some(10));
/// assert_eq!(month_number("october"), None);
/// ```
pub fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|idx| idx as u32 + 1)
}

/// Find the first recognizable date in free text
///
/// Returns `None` when the text holds no valid date; that means "no deadline
/// found", not an error.
///
/// # Examples
///
/// ```
/// use konkurranse_gatekeeper::normalize_date;
///
/// let date = normalize_date("Frist: 15. oktober 2025").unwrap();
/// assert_eq!(date.to_string(), "2025-10-15");
/// assert!(normalize_date("ingen dato her").is_none());
/// ```
pub fn normalize_date(text: &str) -> Option<NaiveDate> {
    SHAPES.iter().find_map(|shape| {
        shape
            .regex
            .captures_iter(text)
            .find_map(|caps| (shape.build)(&caps))
    })
}

/// Parse a deadline value: canonical `YYYY-MM-DD` first, then any shape
/// [`normalize_date`] recognizes
pub fn parse_deadline(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| normalize_date(value))
}

fn from_month_name(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn from_iso(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn from_slash(caps: &Captures<'_>) -> Option<NaiveDate> {
    let day = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let year = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
