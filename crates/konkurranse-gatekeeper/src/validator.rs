//! Record validation and repair

use crate::dates::parse_deadline;
use crate::ValidationConfig;
use chrono::{Days, NaiveDate};
use konkurranse_domain::{Category, CompetitionCandidate, CompetitionRecord, RecordStamp};
use std::fmt;
use tracing::debug;

/// A repair the validator applied to a candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// Title missing or too short, placeholder used
    TitleDefaulted,

    /// Title cut to the maximum length
    TitleTruncated,

    /// Organizer missing or too short, placeholder used
    OrganizerDefaulted,

    /// Organizer cut to the maximum length
    OrganizerTruncated,

    /// Prize missing, placeholder used
    PrizeDefaulted,

    /// Prize cut to the maximum length
    PrizeTruncated,

    /// Deadline unparseable or out of bounds
    DeadlineReplaced {
        /// The rejected value
        original: Option<String>,
    },

    /// Category not one of the known labels
    CategoryDefaulted {
        /// The rejected value
        original: Option<String>,
    },

    /// Image missing or not a single emoji
    ImageDefaulted,

    /// Description missing, template used
    DescriptionTemplated,

    /// Type missing, default used
    TypeDefaulted,
}

impl fmt::Display for Repair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repair::TitleDefaulted => write!(f, "title defaulted"),
            Repair::TitleTruncated => write!(f, "title truncated"),
            Repair::OrganizerDefaulted => write!(f, "organizer defaulted"),
            Repair::OrganizerTruncated => write!(f, "organizer truncated"),
            Repair::PrizeDefaulted => write!(f, "prize defaulted"),
            Repair::PrizeTruncated => write!(f, "prize truncated"),
            Repair::DeadlineReplaced { original } => {
                write!(f, "deadline {:?} replaced", original)
            }
            Repair::CategoryDefaulted { original } => {
                write!(f, "category {:?} replaced with other", original)
            }
            Repair::ImageDefaulted => write!(f, "image defaulted"),
            Repair::DescriptionTemplated => write!(f, "description templated"),
            Repair::TypeDefaulted => write!(f, "type defaulted"),
        }
    }
}

/// Every repair applied during one validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Repairs in the order they were applied
    pub repairs: Vec<Repair>,
}

impl ValidationReport {
    /// True when the candidate needed no repair
    pub fn is_clean(&self) -> bool {
        self.repairs.is_empty()
    }

    /// Whether a given repair was applied
    pub fn contains(&self, repair: &Repair) -> bool {
        self.repairs.contains(repair)
    }
}

/// A validated record together with the repairs that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// The record, guaranteed to satisfy every record invariant
    pub record: CompetitionRecord,

    /// What had to be repaired
    pub report: ValidationReport,
}

/// Outcome of cleaning one text field
enum Cleaned {
    Kept(String),
    Truncated(String),
    Defaulted,
}

/// The Gatekeeper turns candidates into valid records
pub struct Gatekeeper {
    config: ValidationConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(ValidationConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a candidate, repairing anything that violates the record
    /// invariants
    ///
    /// Never fails. Running it again on the returned record (with the same
    /// stamp) yields the same record.
    pub fn validate(&self, candidate: CompetitionCandidate, stamp: RecordStamp) -> Validated {
        let config = &self.config;
        let mut repairs = Vec::new();

        // 1. Title
        let title = match clean_text(
            candidate.title.as_deref(),
            config.min_title_chars,
            config.max_title_chars,
        ) {
            Cleaned::Kept(title) => title,
            Cleaned::Truncated(title) => {
                repairs.push(Repair::TitleTruncated);
                title
            }
            Cleaned::Defaulted => {
                repairs.push(Repair::TitleDefaulted);
                config.title_placeholder.clone()
            }
        };

        // 2. Organizer
        let organizer = match clean_text(
            candidate.organizer.as_deref(),
            config.min_organizer_chars,
            config.max_organizer_chars,
        ) {
            Cleaned::Kept(organizer) => organizer,
            Cleaned::Truncated(organizer) => {
                repairs.push(Repair::OrganizerTruncated);
                organizer
            }
            Cleaned::Defaulted => {
                repairs.push(Repair::OrganizerDefaulted);
                config.organizer_placeholder.clone()
            }
        };

        // 3. Prize
        let prize = match clean_text(candidate.prize.as_deref(), 1, config.max_prize_chars) {
            Cleaned::Kept(prize) => prize,
            Cleaned::Truncated(prize) => {
                repairs.push(Repair::PrizeTruncated);
                prize
            }
            Cleaned::Defaulted => {
                repairs.push(Repair::PrizeDefaulted);
                config.prize_placeholder.clone()
            }
        };

        // 4. Deadline bounds: (today, today + horizon]
        let today = stamp.today();
        let deadline = match candidate.deadline.as_deref().and_then(parse_deadline) {
            Some(date) if date > today && date <= self.days_after(today, config.deadline_horizon_days) => {
                date
            }
            _ => {
                repairs.push(Repair::DeadlineReplaced {
                    original: candidate.deadline.clone(),
                });
                self.days_after(today, config.default_deadline_days)
            }
        };

        // 5. Category
        let category = match candidate.category.as_deref().and_then(Category::from_label) {
            Some(category) => category,
            None => {
                repairs.push(Repair::CategoryDefaulted {
                    original: candidate.category.clone(),
                });
                Category::Other
            }
        };

        // 6. Image
        let image = match non_blank(candidate.image.as_deref()) {
            Some(image) if image.chars().count() <= config.max_image_chars => image.to_string(),
            _ => {
                repairs.push(Repair::ImageDefaulted);
                category.emoji().to_string()
            }
        };

        // 7. Description
        let description = match non_blank(candidate.description.as_deref()) {
            Some(description) => description.to_string(),
            None => {
                repairs.push(Repair::DescriptionTemplated);
                format!(
                    "Competition from {}. See the link for full details.",
                    organizer
                )
            }
        };

        // 8. Type
        let kind = match non_blank(candidate.kind.as_deref()) {
            Some(kind) => kind.to_string(),
            None => {
                repairs.push(Repair::TypeDefaulted);
                config.default_kind.clone()
            }
        };

        for repair in &repairs {
            debug!("Record {}: {}", stamp.id, repair);
        }

        Validated {
            record: CompetitionRecord {
                id: stamp.id,
                title,
                description,
                prize,
                organizer,
                deadline,
                category,
                image,
                kind,
                added_date: stamp.added_date,
                source_url: stamp.source_url,
                ai_parsed: stamp.ai_parsed,
            },
            report: ValidationReport { repairs },
        }
    }

    fn days_after(&self, date: NaiveDate, days: u64) -> NaiveDate {
        date.checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Truncate to at most `max_chars` characters, never splitting one, and drop
/// trailing whitespace left by the cut
///
/// # Examples
///
/// ```
/// use konkurranse_gatekeeper::truncate_chars;
///
/// assert_eq!(truncate_chars("Vinn en tur", 5), "Vinn");
/// assert_eq!(truncate_chars("Blåbær", 4), "Blåb");
/// ```
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((cut, _)) => value[..cut].trim_end().to_string(),
        None => value.to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn clean_text(value: Option<&str>, min_chars: usize, max_chars: usize) -> Cleaned {
    let Some(value) = non_blank(value) else {
        return Cleaned::Defaulted;
    };
    let len = value.chars().count();
    if len < min_chars {
        return Cleaned::Defaulted;
    }
    if len <= max_chars {
        return Cleaned::Kept(value.to_string());
    }

    let truncated = truncate_chars(value, max_chars);
    if truncated.chars().count() < min_chars {
        Cleaned::Defaulted
    } else {
        Cleaned::Truncated(truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn stamp() -> RecordStamp {
        let now = Utc.with_ymd_and_hms(2025, 9, 1, 10, 30, 0).unwrap();
        RecordStamp::new(now, "https://example.com/x", true)
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn full_candidate() -> CompetitionCandidate {
        CompetitionCandidate {
            title: Some("Vinn en iPhone 16 Pro".to_string()),
            description: Some("Svar på spørsmålet og bli med i trekningen".to_string()),
            prize: Some("iPhone 16 Pro".to_string()),
            organizer: Some("Elkjøp".to_string()),
            deadline: Some("2025-10-15".to_string()),
            category: Some("technology".to_string()),
            image: Some("📱".to_string()),
            kind: Some("free".to_string()),
        }
    }

    #[test]
    fn test_clean_candidate_passes_unchanged() {
        let gatekeeper = Gatekeeper::default_config();
        let validated = gatekeeper.validate(full_candidate(), stamp());

        assert!(validated.report.is_clean(), "{:?}", validated.report);
        let record = validated.record;
        assert_eq!(record.title, "Vinn en iPhone 16 Pro");
        assert_eq!(record.organizer, "Elkjøp");
        assert_eq!(record.deadline, ymd(2025, 10, 15));
        assert_eq!(record.category, Category::Technology);
        assert_eq!(record.id, stamp().id);
        assert!(record.ai_parsed);
    }

    #[test]
    fn test_empty_candidate_gets_every_default() {
        let gatekeeper = Gatekeeper::default_config();
        let record = gatekeeper
            .validate(CompetitionCandidate::default(), stamp())
            .record;

        assert_eq!(record.title, "New competition");
        assert_eq!(record.organizer, "Unknown organizer");
        assert_eq!(record.prize, "See the competition page for prize information");
        assert_eq!(record.deadline, ymd(2025, 10, 1));
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.image, "🎁");
        assert_eq!(
            record.description,
            "Competition from Unknown organizer. See the link for full details."
        );
        assert_eq!(record.kind, "free");
    }

    #[test]
    fn test_short_title_and_organizer_are_defaulted() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            title: Some("Hi".to_string()),
            organizer: Some(" A ".to_string()),
            ..full_candidate()
        };
        let validated = gatekeeper.validate(candidate, stamp());

        assert_eq!(validated.record.title, "New competition");
        assert_eq!(validated.record.organizer, "Unknown organizer");
        assert!(validated.report.contains(&Repair::TitleDefaulted));
        assert!(validated.report.contains(&Repair::OrganizerDefaulted));
    }

    #[test]
    fn test_long_fields_are_truncated() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            title: Some("T".repeat(120)),
            organizer: Some("Ø".repeat(60)),
            prize: Some("p".repeat(150)),
            ..full_candidate()
        };
        let validated = gatekeeper.validate(candidate, stamp());

        assert_eq!(validated.record.title.chars().count(), 80);
        assert_eq!(validated.record.organizer.chars().count(), 50);
        assert_eq!(validated.record.prize.chars().count(), 100);
        assert!(validated.report.contains(&Repair::TitleTruncated));
        assert!(validated.report.contains(&Repair::OrganizerTruncated));
        assert!(validated.report.contains(&Repair::PrizeTruncated));
    }

    #[test]
    fn test_deadline_today_is_replaced() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            deadline: Some("2025-09-01".to_string()),
            ..full_candidate()
        };
        let record = gatekeeper.validate(candidate, stamp()).record;
        assert_eq!(record.deadline, ymd(2025, 10, 1));
    }

    #[test]
    fn test_deadline_tomorrow_is_kept() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            deadline: Some("2025-09-02".to_string()),
            ..full_candidate()
        };
        let record = gatekeeper.validate(candidate, stamp()).record;
        assert_eq!(record.deadline, ymd(2025, 9, 2));
    }

    #[test]
    fn test_deadline_horizon_is_inclusive() {
        let gatekeeper = Gatekeeper::default_config();

        let at_horizon = CompetitionCandidate {
            deadline: Some("2026-09-01".to_string()),
            ..full_candidate()
        };
        assert_eq!(
            gatekeeper.validate(at_horizon, stamp()).record.deadline,
            ymd(2026, 9, 1)
        );

        let past_horizon = CompetitionCandidate {
            deadline: Some("2026-09-02".to_string()),
            ..full_candidate()
        };
        assert_eq!(
            gatekeeper.validate(past_horizon, stamp()).record.deadline,
            ymd(2025, 10, 1)
        );
    }

    #[test]
    fn test_deadline_in_free_form_is_understood() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            deadline: Some("24. desember 2025".to_string()),
            ..full_candidate()
        };
        let validated = gatekeeper.validate(candidate, stamp());
        assert_eq!(validated.record.deadline, ymd(2025, 12, 24));
        assert!(validated.report.is_clean());
    }

    #[test]
    fn test_garbage_deadline_is_replaced() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            deadline: Some("Ikke oppgitt".to_string()),
            ..full_candidate()
        };
        let validated = gatekeeper.validate(candidate, stamp());
        assert_eq!(validated.record.deadline, ymd(2025, 10, 1));
        assert!(validated.report.contains(&Repair::DeadlineReplaced {
            original: Some("Ikke oppgitt".to_string())
        }));
    }

    #[test]
    fn test_unknown_category_becomes_other() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            category: Some("biler".to_string()),
            image: None,
            ..full_candidate()
        };
        let record = gatekeeper.validate(candidate, stamp()).record;
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.image, "🎁");
    }

    #[test]
    fn test_norwegian_category_alias() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            category: Some("Reise".to_string()),
            ..full_candidate()
        };
        let record = gatekeeper.validate(candidate, stamp()).record;
        assert_eq!(record.category, Category::Travel);
    }

    #[test]
    fn test_wordy_image_is_replaced_with_category_emoji() {
        let gatekeeper = Gatekeeper::default_config();
        let candidate = CompetitionCandidate {
            image: Some("a picture of a phone".to_string()),
            ..full_candidate()
        };
        let record = gatekeeper.validate(candidate, stamp()).record;
        assert_eq!(record.image, "📱");
    }

    #[test]
    fn test_validation_is_idempotent() {
        let gatekeeper = Gatekeeper::default_config();
        let candidates = vec![
            full_candidate(),
            CompetitionCandidate::default(),
            CompetitionCandidate {
                title: Some(format!("a{}b", " ".repeat(100))),
                organizer: Some(format!("  {}  ", "Ø".repeat(70))),
                deadline: Some("1999-01-01".to_string()),
                category: Some("???".to_string()),
                image: Some(String::new()),
                ..Default::default()
            },
        ];

        for candidate in candidates {
            let first = gatekeeper.validate(candidate, stamp()).record;
            let second = gatekeeper
                .validate(CompetitionCandidate::from(&first), RecordStamp::of(&first))
                .record;
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_output_invariants_hold() {
        let gatekeeper = Gatekeeper::default_config();
        let stamp = stamp();
        let today = stamp.today();
        let record = gatekeeper
            .validate(
                CompetitionCandidate {
                    title: Some("x".to_string()),
                    deadline: Some("2030-01-01".to_string()),
                    ..Default::default()
                },
                stamp,
            )
            .record;

        assert!(record.title.chars().count() >= 3);
        assert!(record.organizer.chars().count() >= 2);
        assert!(record.deadline > today);
        assert!(record.deadline <= today + Days::new(365));
        assert!(Category::ALL.contains(&record.category));
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("æøå", 2), "æø");
        assert_eq!(truncate_chars("kort", 10), "kort");
        assert_eq!(truncate_chars("en to tre", 3), "en");
    }
}
