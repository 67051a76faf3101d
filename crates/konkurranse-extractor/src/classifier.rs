//! Keyword-driven category classification

use konkurranse_domain::Category;

/// Emoji used for anything IKEA
pub const IKEA_EMOJI: &str = "🏠";

const IKEA_ORGANIZER: &str = "Ikea";

/// Ordered rules; the first whose keywords appear in the text wins
const RULES: [(&[&str], Category); 5] = [
    (
        &["iphone", "apple", "samsung", "mobil", "tech", "pc", "laptop"],
        Category::Technology,
    ),
    (&["reise", "ferie", "tur", "hotell", "fly"], Category::Travel),
    (
        &["gaming", "spill", "playstation", "xbox", "nintendo"],
        Category::Gaming,
    ),
    (&["sport", "trening", "fotball", "ski"], Category::Sports),
    (&["mat", "restaurant", "kaffe", "pizza"], Category::Food),
];

/// Result of classifying a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Category decided by the keyword rules
    pub category: Category,

    /// Icon for the record
    pub emoji: &'static str,

    /// Organizer forced by a brand match
    pub organizer: Option<&'static str>,
}

/// Classify a text by substring keyword match
///
/// # Examples
///
/// ```
/// use konkurranse_domain::Category;
/// use konkurranse_extractor::classify;
///
/// let result = classify("Vinn en ny iPhone!");
/// assert_eq!(result.category, Category::Technology);
/// assert_eq!(result.emoji, "📱");
/// ```
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let category = RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Other);

    if lower.contains("ikea") {
        return Classification {
            category,
            emoji: IKEA_EMOJI,
            organizer: Some(IKEA_ORGANIZER),
        };
    }

    Classification {
        category,
        emoji: category.emoji(),
        organizer: None,
    }
}
