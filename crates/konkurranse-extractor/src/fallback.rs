//! Heuristic record composition, used without a model or when it fails

use crate::classifier::classify;
use crate::fields::{extract_organizer, extract_prize, extract_title, hostname};
use chrono::{DateTime, Utc};
use konkurranse_domain::{CompetitionCandidate, ManualOverrides, RecordStamp};
use konkurranse_gatekeeper::{normalize_date, truncate_chars, Gatekeeper, Validated};

/// Host used in the default title when the URL has none
const UNKNOWN_HOST: &str = "Unknown";

/// Assemble the heuristic candidate for a text, before overrides
pub fn heuristic_candidate(
    text: &str,
    url: &str,
    gatekeeper: &Gatekeeper,
) -> CompetitionCandidate {
    let config = gatekeeper.config();
    let host = hostname(url);
    let classification = classify(text);

    let title = extract_title(text).unwrap_or_else(|| {
        format!("{} competition", host.as_deref().unwrap_or(UNKNOWN_HOST))
    });
    let prize = extract_prize(text).unwrap_or_else(|| config.prize_placeholder.clone());
    let organizer = classification
        .organizer
        .map(str::to_string)
        .or_else(|| extract_organizer(text, host.as_deref()));

    CompetitionCandidate {
        title: Some(truncate_chars(&title, config.max_title_chars)),
        description: None,
        prize: Some(truncate_chars(&prize, config.max_prize_chars)),
        organizer: organizer.map(|o| truncate_chars(&o, config.max_organizer_chars)),
        deadline: normalize_date(text).map(|date| date.to_string()),
        category: Some(classification.category.as_str().to_string()),
        image: Some(classification.emoji.to_string()),
        kind: None,
    }
}

/// Build a complete record from text alone
///
/// A pure function of its inputs: the same text, URL, overrides and instant
/// always give the same record.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use konkurranse_domain::{Category, ManualOverrides};
/// use konkurranse_extractor::compose_fallback;
/// use konkurranse_gatekeeper::Gatekeeper;
///
/// let gatekeeper = Gatekeeper::default_config();
/// let validated = compose_fallback(
///     "Helt vanlig tekst",
///     "https://example.com/x",
///     &ManualOverrides::default(),
///     Utc::now(),
///     &gatekeeper,
/// );
///
/// assert_eq!(validated.record.organizer, "Example.com");
/// assert_eq!(validated.record.category, Category::Other);
/// assert!(!validated.record.ai_parsed);
/// ```
pub fn compose_fallback(
    text: &str,
    url: &str,
    overrides: &ManualOverrides,
    now: DateTime<Utc>,
    gatekeeper: &Gatekeeper,
) -> Validated {
    let mut candidate = heuristic_candidate(text, url, gatekeeper);
    candidate.apply_overrides(overrides);
    gatekeeper.validate(candidate, RecordStamp::new(now, url, false))
}
