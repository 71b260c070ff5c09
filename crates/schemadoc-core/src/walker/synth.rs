//! Pure synthesis helpers for property documentation
//!
//! Given a schema fragment these compute the displayed type label, the
//! "allowed values" label, a formatted description, and an example
//! literal when the schema does not provide one.

use serde_json::Value;

/// Render a JSON value the way it should read inline in documentation
fn raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The fragment's declared type names, empty when untyped
fn type_names(fragment: &Value) -> Vec<String> {
    match fragment.get("type") {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(arr)) => arr.iter().filter_map(Value::as_str).map(String::from).collect(),
        _ => Vec::new(),
    }
}

/// First enum member, if the fragment declares a non-empty enum
fn enum_first(fragment: &Value) -> Option<&Value> {
    fragment.get("enum").and_then(Value::as_array).and_then(|a| a.first())
}

/// Displayed type label: multi-valued types joined with `, `, arrays
/// annotated with their item type as `array[string]`
pub fn type_label(fragment: &Value) -> String {
    let names = type_names(fragment);
    let mut label = names.join(", ");
    if label == "array" {
        if let Some(items) = fragment.get("items") {
            let item_label = type_names(items).join(", ");
            label.push_str(&format!("[{item_label}]"));
        }
    }
    label
}

/// Short allowed-values label: the enum members when present, else the
/// plain type names
pub fn allowed_label(fragment: &Value) -> String {
    if let Some(values) = fragment.get("enum").and_then(Value::as_array) {
        if !values.is_empty() {
            return values.iter().map(raw).collect::<Vec<_>>().join(", ");
        }
    }
    type_names(fragment).join(", ")
}

/// Description with appended format/pattern/enum annotation lines
pub fn description(fragment: &Value) -> String {
    let mut description = fragment
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    if let Some(format) = fragment.get("format").and_then(Value::as_str) {
        description.push_str(&format!("<br/>**format:** `{format}`"));
    }
    if let Some(pattern) = fragment.get("pattern").and_then(Value::as_str) {
        description.push_str(&format!("<br/>**pattern:** `/{pattern}/`"));
    }
    if let Some(values) = fragment.get("enum").and_then(Value::as_array) {
        if !values.is_empty() {
            let joined = values.iter().map(raw).collect::<Vec<_>>().join("\"`, `\"");
            description.push_str(&format!("<br/>**one of:** `\"{joined}\"`"));
        }
    }
    description
}

/// Fixed example literal for a string fragment, keyed by `format`
fn string_format_example(fragment: &Value) -> String {
    let example = match fragment.get("format").and_then(Value::as_str) {
        Some("date-time") => "1970-01-01T12:00:00Z",
        Some("date") => "1970-01-01",
        Some("email") => "firstname.lastname@example.com",
        Some("hostname") => "www.example.com",
        Some("ipv4") => "127.0.0.1",
        Some("ipv6") => "2001:db8:a0b:12f0::1",
        Some("uri") => "http://www.example.com/example",
        _ => "example",
    };
    format!("\"{example}\"")
}

/// Synthesize an example literal for the fragment
///
/// An explicit `example` is used verbatim. Otherwise one fragment is
/// produced per declared type, joined with `<br/>` line breaks.
pub fn example(fragment: &Value) -> String {
    if let Some(explicit) = fragment.get("example") {
        return raw(explicit);
    }

    let names = type_names(fragment);
    let mut parts = Vec::new();

    if names.iter().any(|t| t == "string") {
        parts.push(match enum_first(fragment) {
            Some(v) => format!("\"{}\"", raw(v)),
            None => string_format_example(fragment),
        });
    }
    if names.iter().any(|t| t == "number") {
        parts.push(enum_first(fragment).map(raw).unwrap_or_else(|| "42.0".to_string()));
    }
    if names.iter().any(|t| t == "integer") {
        parts.push(enum_first(fragment).map(raw).unwrap_or_else(|| "42".to_string()));
    }
    if names.iter().any(|t| t == "boolean") {
        parts.push("true".to_string());
    }
    if names.iter().any(|t| t == "object") {
        parts.push("{...}".to_string());
    }
    if names.iter().any(|t| t == "array") {
        let item = fragment.get("items").map(example).unwrap_or_default();
        parts.push(format!("[{item}, {item}]"));
    }

    parts.join("<br/>")
}
