//! Category module - the fixed set of competition categories

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a competition, decided by the prize it offers
///
/// Serialized in lowercase English. The Norwegian labels used by older
/// records (`teknologi`, `reise`, `sport`, `mat`, `annet`) are accepted as
/// aliases when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Phones, computers and other gadgets
    #[serde(alias = "teknologi")]
    Technology,

    /// Trips, hotel stays and flights
    #[serde(alias = "reise")]
    Travel,

    /// Consoles and games
    Gaming,

    /// Sports gear and training
    #[serde(alias = "sport")]
    Sports,

    /// Restaurants, coffee and food
    #[serde(alias = "mat")]
    Food,

    /// Anything else
    #[default]
    #[serde(alias = "annet")]
    Other,
}

impl Category {
    /// All categories, in classification priority order
    pub const ALL: [Category; 6] = [
        Category::Technology,
        Category::Travel,
        Category::Gaming,
        Category::Sports,
        Category::Food,
        Category::Other,
    ];

    /// Get the category label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Travel => "travel",
            Category::Gaming => "gaming",
            Category::Sports => "sports",
            Category::Food => "food",
            Category::Other => "other",
        }
    }

    /// The emoji shown for records of this category
    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Technology => "📱",
            Category::Travel => "✈️",
            Category::Gaming => "🎮",
            Category::Sports => "⚽",
            Category::Food => "🍕",
            Category::Other => "🎁",
        }
    }

    /// Parse a category label, accepting English and Norwegian names
    ///
    /// # Examples
    ///
    /// ```
    /// use konkurranse_domain::Category;
    ///
    /// assert_eq!(Category::from_label("Technology"), Some(Category::Technology));
    /// assert_eq!(Category::from_label(" reise "), Some(Category::Travel));
    /// assert_eq!(Category::from_label("cars"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "technology" | "teknologi" => Some(Category::Technology),
            "travel" | "reise" => Some(Category::Travel),
            "gaming" => Some(Category::Gaming),
            "sports" | "sport" => Some(Category::Sports),
            "food" | "mat" => Some(Category::Food),
            "other" | "annet" => Some(Category::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_label(s).ok_or_else(|| format!("Unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_norwegian_aliases() {
        assert_eq!(Category::from_label("teknologi"), Some(Category::Technology));
        assert_eq!(Category::from_label("SPORT"), Some(Category::Sports));
        assert_eq!(Category::from_label("mat"), Some(Category::Food));
        assert_eq!(Category::from_label("annet"), Some(Category::Other));
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Category::from_label(""), None);
        assert!("biler".parse::<Category>().is_err());
    }

    #[test]
    fn test_default_is_other() {
        assert_eq!(Category::default(), Category::Other);
        assert_eq!(Category::default().emoji(), "🎁");
    }

    #[test]
    fn test_serde_uses_lowercase_and_accepts_alias() {
        let json = serde_json::to_string(&Category::Technology).unwrap();
        assert_eq!(json, "\"technology\"");

        let parsed: Category = serde_json::from_str("\"reise\"").unwrap();
        assert_eq!(parsed, Category::Travel);
    }
}
