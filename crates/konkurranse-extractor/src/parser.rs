//! Parse model output into a competition candidate

use konkurranse_domain::CompetitionCandidate;
use serde_json::{Map, Value};

/// Outcome of reading one model reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// The reply held a JSON object
    Parsed(CompetitionCandidate),

    /// The reply could not be used, with the reason
    Unparseable(String),
}

/// Isolate the JSON payload in a reply
///
/// Removes markdown code fences, then keeps everything from the first `{` to
/// the last `}` so commentary around the object is tolerated.
pub fn extract_json(response: &str) -> String {
    let cleaned = response.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if end > start => cleaned[start..=end].to_string(),
        _ => cleaned.to_string(),
    }
}

/// Parse a raw model reply
///
/// # Examples
///
/// ```
/// use konkurranse_extractor::{parse_model_reply, ModelReply};
///
/// let reply = "Here you go:\n```json\n{\"title\": \"Vinn en tur\"}\n```";
/// match parse_model_reply(reply) {
///     ModelReply::Parsed(candidate) => assert_eq!(candidate.title.as_deref(), Some("Vinn en tur")),
///     ModelReply::Unparseable(reason) => panic!("{}", reason),
/// }
/// ```
pub fn parse_model_reply(response: &str) -> ModelReply {
    let payload = extract_json(response);
    if payload.is_empty() {
        return ModelReply::Unparseable("Empty reply".to_string());
    }

    let json: Value = match serde_json::from_str(&payload) {
        Ok(json) => json,
        Err(e) => return ModelReply::Unparseable(format!("JSON parse error: {}", e)),
    };

    match json {
        Value::Object(fields) => ModelReply::Parsed(candidate_from_object(&fields)),
        _ => ModelReply::Unparseable("Expected JSON object".to_string()),
    }
}

fn candidate_from_object(fields: &Map<String, Value>) -> CompetitionCandidate {
    let field = |name: &str| fields.get(name).and_then(scalar_text);

    CompetitionCandidate {
        title: field("title"),
        description: field("description"),
        prize: field("prize"),
        organizer: field("organizer"),
        deadline: field("deadline"),
        category: field("category"),
        image: field("image"),
        kind: field("type"),
    }
}

/// Strings as-is, numbers and booleans rendered; everything else is absent
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
