//! HTML to visible text

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Elements whose content is never visible competition text
const HIDDEN_ELEMENTS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

static RE_HIDDEN: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    HIDDEN_ELEMENTS
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).unwrap())
        .collect()
});
static RE_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static RE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body\b[^>]*>(.*)</body\s*>").unwrap());
static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title\b[^>]*>(.*?)</title\s*>").unwrap());
static RE_H1: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1\b[^>]*>(.*?)</h1\s*>").unwrap());
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static RE_ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z]+);").unwrap());
static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Reduce an HTML document to `(title, visible text)`
///
/// The title is the `<title>` text, else the first `<h1>`. The text comes
/// from `<body>` (or the whole document without one) with script, style,
/// nav, footer and header elements removed, tags stripped, common entities
/// decoded and whitespace collapsed, capped at `max_chars` characters.
///
/// # Examples
///
/// ```
/// use konkurranse_scraper::strip_markup;
///
/// let html = "<html><head><title>Vinn!</title></head>\
///             <body><nav>Meny</nav><p>Vinn en &amp; to</p></body></html>";
/// let (title, content) = strip_markup(html, 4000);
/// assert_eq!(title, "Vinn!");
/// assert_eq!(content, "Vinn en & to");
/// ```
pub fn strip_markup(html: &str, max_chars: usize) -> (String, String) {
    let title = RE_TITLE
        .captures(html)
        .map(|caps| inline_text(&caps[1]))
        .filter(|title| !title.is_empty())
        .or_else(|| RE_H1.captures(html).map(|caps| inline_text(&caps[1])))
        .unwrap_or_default();

    let body = RE_BODY
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str());

    let mut visible = RE_COMMENT.replace_all(body, " ").into_owned();
    for element in RE_HIDDEN.iter() {
        visible = element.replace_all(&visible, " ").into_owned();
    }

    let content = inline_text(&visible);
    (title, cap_chars(content, max_chars))
}

/// Strip tags, decode entities and collapse whitespace
fn inline_text(fragment: &str) -> String {
    let without_tags = RE_TAG.replace_all(fragment, " ");
    let decoded = decode_entities(&without_tags);
    RE_WHITESPACE.replace_all(&decoded, " ").trim().to_string()
}

/// Decode named entities in common use and all numeric references
pub fn decode_entities(text: &str) -> String {
    RE_ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            decode_entity(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

fn decode_entity(name: &str) -> Option<String> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(String::from);
    }
    if let Some(dec) = name.strip_prefix('#') {
        return dec.parse().ok().and_then(char::from_u32).map(String::from);
    }

    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => " ",
        "aelig" => "æ",
        "AElig" => "Æ",
        "oslash" => "ø",
        "Oslash" => "Ø",
        "aring" => "å",
        "Aring" => "Å",
        "ndash" => "–",
        "mdash" => "—",
        "hellip" => "…",
        "laquo" => "«",
        "raquo" => "»",
        "euro" => "€",
        _ => return None,
    };
    Some(decoded.to_string())
}

fn cap_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text,
    }
}
