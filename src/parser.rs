/// Cuisine response parsing
///
/// The cuisine endpoint is backed by a text generator and answers in whatever
/// shape it likes: a JSON array, a JSON object with a `cuisines` field, a
/// numbered list, comma separated lines or one name per line. Everything is
/// reduced to an ordered list of labels. Parsing never fails; input that fits
/// no known shape degrades to "one label per line".
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Declared content kind of a response body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Text,
}

impl ContentKind {
    /// Classify a `Content-Type` header value
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        let ct = content_type.unwrap_or_default().to_ascii_lowercase();
        if ct.contains("application/json") || ct.contains("text/json") {
            ContentKind::Json
        } else {
            ContentKind::Text
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, ContentKind::Json)
    }
}

/// Shapes a cuisine response body can take
#[derive(Debug, Clone, PartialEq)]
pub enum CuisinePayload {
    /// String elements of a JSON array
    List(Vec<String>),

    /// String elements of the `cuisines` array of a JSON object
    Wrapped(Vec<String>),

    /// Anything else, interpreted line by line
    Text(String),
}

impl CuisinePayload {
    /// Resolve the shape of a body.
    ///
    /// A JSON content kind is tried as JSON first. Whatever the declared kind,
    /// the raw text is then given one more chance as JSON so that mislabeled
    /// responses still work; only after that is it treated as plain text.
    pub fn classify(body: &str, kind: ContentKind) -> Self {
        if kind.is_json() {
            match json_payload(body) {
                Some(payload) if !payload.is_empty() => return payload,
                Some(_) => tracing::debug!("[parser] JSON response held no cuisines"),
                None => tracing::debug!("[parser] JSON parse failed, falling back to text"),
            }
        }

        json_payload(body).unwrap_or_else(|| CuisinePayload::Text(body.to_string()))
    }

    /// Labels carried by the payload. JSON lists are returned untouched.
    pub fn into_labels(self) -> Vec<String> {
        match self {
            CuisinePayload::List(labels) | CuisinePayload::Wrapped(labels) => labels,
            CuisinePayload::Text(text) => parse_text(&text),
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            CuisinePayload::List(labels) | CuisinePayload::Wrapped(labels) => labels.is_empty(),
            CuisinePayload::Text(text) => text.trim().is_empty(),
        }
    }
}

/// Parse a cuisine response body into display labels
pub fn parse(body: &str, kind: ContentKind) -> Vec<String> {
    CuisinePayload::classify(body, kind).into_labels()
}

fn json_payload(body: &str) -> Option<CuisinePayload> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value {
        Value::Array(items) => Some(CuisinePayload::List(string_items(items))),
        Value::Object(mut fields) => match fields.remove("cuisines") {
            Some(Value::Array(items)) => Some(CuisinePayload::Wrapped(string_items(items))),
            _ => None,
        },
        _ => None,
    }
}

/// String elements of a JSON array; anything else is skipped
fn string_items(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            other => {
                tracing::debug!("[parser] Skipping non-string cuisine entry: {}", other);
                None
            }
        })
        .collect()
}

/// Matches "1. x", "2) x", "3 - x" and captures the remainder
fn ordinal_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\s*\d+\s*[.)-]\s*(.+)$").ok())
        .as_ref()
}

/// Line oriented interpretation of a free text body
pub fn parse_text(text: &str) -> Vec<String> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut labels = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let numbered = ordinal_pattern()
            .and_then(|re| re.captures(line))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim());

        if let Some(rest) = numbered {
            labels.push(capitalize_first(rest));
        } else if line.contains(',') {
            labels.extend(
                line.split(',')
                    .map(str::trim)
                    .filter(|piece| !piece.is_empty())
                    .map(capitalize_first),
            );
        } else {
            labels.push(capitalize_first(line));
        }
    }

    labels
}

/// Uppercase the first character, leave the rest as it is
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
