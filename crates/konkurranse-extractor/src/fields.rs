//! Pattern-based field extractors
//!
//! Each extractor is an ordered ladder of regexes. The first rung that
//! matches decides the value.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

const TITLE_KEYWORDS: [&str; 4] = ["vinn", "konkurranse", "premie", "gavekort"];

/// Lines this short are never titles
const MIN_TITLE_LINE_CHARS: usize = 5;

static RE_PRIZE_WIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)vinn\s+([^.!?\n]{10,80})").unwrap());
static RE_PRIZE_PREMIE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)premie[^.!?\n]{0,20}([^.!?\n]{10,80})").unwrap());
static RE_PRIZE_GIFT_CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)gavekort[^.!?\n]{0,50}").unwrap());
static RE_PRIZE_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\s*kr[^.!?\n]{0,30})").unwrap());

static RE_ORGANIZER_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)arrangør[:\s]+([^\n.!?]{2,30})").unwrap());
static RE_ORGANIZER_BY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"av\s+([A-ZÆØÅ][a-zæøåA-ZÆØÅ\s]{2,30})").unwrap());
static RE_ORGANIZER_BRAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(ikea|apple|samsung|nintendo|sony|microsoft|google)").unwrap()
});

/// Which part of a match a rung yields
#[derive(Clone, Copy)]
enum Take {
    /// The whole matched text
    Whole,
    /// The first capture group, or the whole match without one
    Group,
}

/// One step of an extraction ladder
struct Rung {
    regex: &'static LazyLock<Regex>,
    take: Take,
}

static PRIZE_LADDER: [Rung; 4] = [
    Rung {
        regex: &RE_PRIZE_WIN,
        take: Take::Whole,
    },
    Rung {
        regex: &RE_PRIZE_PREMIE,
        take: Take::Whole,
    },
    Rung {
        regex: &RE_PRIZE_GIFT_CARD,
        take: Take::Whole,
    },
    Rung {
        regex: &RE_PRIZE_AMOUNT,
        take: Take::Whole,
    },
];

static ORGANIZER_LADDER: [Rung; 3] = [
    Rung {
        regex: &RE_ORGANIZER_LABEL,
        take: Take::Group,
    },
    Rung {
        regex: &RE_ORGANIZER_BY,
        take: Take::Group,
    },
    Rung {
        regex: &RE_ORGANIZER_BRAND,
        take: Take::Group,
    },
];

fn pick(caps: &Captures<'_>, take: Take) -> Option<String> {
    let value = match take {
        Take::Whole => caps.get(0),
        Take::Group => caps.get(1).or_else(|| caps.get(0)),
    }?;
    Some(value.as_str().trim().to_string())
}

fn climb(ladder: &[Rung], text: &str) -> Option<String> {
    ladder.iter().find_map(|rung| {
        rung.regex
            .captures(text)
            .and_then(|caps| pick(&caps, rung.take))
    })
}

/// Pick the most title-like line
///
/// Lines mentioning a competition keyword win; otherwise the first line long
/// enough to be a title.
///
/// # Examples
///
/// ```
/// use konkurranse_extractor::extract_title;
///
/// let text = "Meny\nSommerkampanje 2025\nVinn et gavekort på 500 kr!";
/// assert_eq!(extract_title(text).as_deref(), Some("Vinn et gavekort på 500 kr!"));
/// ```
pub fn extract_title(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_TITLE_LINE_CHARS)
        .collect();

    lines
        .iter()
        .find(|line| {
            let lower = line.to_lowercase();
            TITLE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        })
        .or_else(|| lines.first())
        .map(|line| line.to_string())
}

/// Find a prize description
pub fn extract_prize(text: &str) -> Option<String> {
    climb(&PRIZE_LADDER, text)
}

/// Find the organizer, falling back to the capitalized hostname
pub fn extract_organizer(text: &str, hostname: Option<&str>) -> Option<String> {
    climb(&ORGANIZER_LADDER, text).or_else(|| hostname.map(capitalize))
}

/// Host of a URL without a leading `www.`
///
/// # Examples
///
/// ```
/// use konkurranse_extractor::hostname;
///
/// assert_eq!(hostname("https://www.elkjop.no/vinn").as_deref(), Some("elkjop.no"));
/// assert_eq!(hostname("not a url"), None);
/// ```
pub fn hostname(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
