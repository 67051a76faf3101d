//! Gatekeeper configuration

/// Thresholds and defaults applied by the validator
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Titles shorter than this are replaced by the placeholder
    pub min_title_chars: usize,

    /// Titles are truncated to this length
    pub max_title_chars: usize,

    /// Organizers shorter than this are replaced by the placeholder
    pub min_organizer_chars: usize,

    /// Organizers are truncated to this length
    pub max_organizer_chars: usize,

    /// Prizes are truncated to this length
    pub max_prize_chars: usize,

    /// Longer image values are not a single emoji and get replaced
    pub max_image_chars: usize,

    /// Deadlines later than this many days after creation are replaced
    pub deadline_horizon_days: u64,

    /// Replacement deadline, in days after creation
    pub default_deadline_days: u64,

    /// Title used when none survives validation
    pub title_placeholder: String,

    /// Organizer used when none survives validation
    pub organizer_placeholder: String,

    /// Prize used when none is given
    pub prize_placeholder: String,

    /// Competition type used when none is given
    pub default_kind: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_title_chars: 3,
            max_title_chars: 80,
            min_organizer_chars: 2,
            max_organizer_chars: 50,
            max_prize_chars: 100,
            max_image_chars: 8,
            deadline_horizon_days: 365,
            default_deadline_days: 30,
            title_placeholder: "New competition".to_string(),
            organizer_placeholder: "Unknown organizer".to_string(),
            prize_placeholder: "See the competition page for prize information".to_string(),
            default_kind: "free".to_string(),
        }
    }
}

impl ValidationConfig {
    /// Validate the configuration
    ///
    /// Placeholders must themselves pass validation, otherwise repaired
    /// records would be repaired again on the next pass.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_title_chars > self.max_title_chars {
            return Err("min_title_chars cannot exceed max_title_chars".to_string());
        }
        if self.min_organizer_chars > self.max_organizer_chars {
            return Err("min_organizer_chars cannot exceed max_organizer_chars".to_string());
        }
        if self.default_deadline_days == 0 {
            return Err("default_deadline_days must be greater than 0".to_string());
        }
        if self.default_deadline_days > self.deadline_horizon_days {
            return Err("default_deadline_days cannot exceed deadline_horizon_days".to_string());
        }

        let fits = |value: &str, min: usize, max: usize| {
            let len = value.trim().chars().count();
            value.trim() == value && len >= min && len <= max
        };
        if !fits(&self.title_placeholder, self.min_title_chars, self.max_title_chars) {
            return Err("title_placeholder violates the title bounds".to_string());
        }
        if !fits(
            &self.organizer_placeholder,
            self.min_organizer_chars,
            self.max_organizer_chars,
        ) {
            return Err("organizer_placeholder violates the organizer bounds".to_string());
        }
        if !fits(&self.prize_placeholder, 1, self.max_prize_chars) {
            return Err("prize_placeholder violates the prize bounds".to_string());
        }
        if self.default_kind.trim().is_empty() {
            return Err("default_kind cannot be blank".to_string());
        }
        Ok(())
    }
}
