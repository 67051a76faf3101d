//! Prompt construction for model-based extraction

/// Default cap on how much page text is sent to the model
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 4000;

const INSTRUCTIONS: &str = "Analyze this Norwegian competition text and return JSON with the competition data.";

const STEPS: &str = "Instructions:
1. Find the exact title in the text
2. Identify the organizer or company
3. Find the prize, with its value if stated
4. Find the closing date or deadline
5. Choose a category based on the prize
6. Pick an emoji that fits the prize";

const OUTPUT_FORMAT: &str = r#"RETURN ONLY THIS JSON OBJECT:
{
    "title": "Exact title from the text",
    "description": "Short description of the competition",
    "prize": "Concrete prize, with value if stated",
    "organizer": "Organizer or company name",
    "deadline": "YYYY-MM-DD",
    "category": "technology/travel/gaming/sports/food/other",
    "image": "Emoji matching the prize",
    "type": "free"
}"#;

/// Builds the extraction prompt for one text
pub struct PromptBuilder<'a> {
    text: &'a str,
    url: &'a str,
    max_chars: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(text: &'a str, url: &'a str) -> Self {
        Self {
            text,
            url,
            max_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }

    /// Limit the embedded text to this many characters
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let excerpt = match self.text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => &self.text[..cut],
            None => self.text,
        };

        format!(
            "{}\n\nCOMPETITION TEXT:\n{}\n\nURL: {}\n\n{}\n\n{}",
            INSTRUCTIONS, excerpt, self.url, STEPS, OUTPUT_FORMAT
        )
    }
}
