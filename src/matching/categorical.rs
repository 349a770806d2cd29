//! Categorical tag matching
//!
//! All comparisons are case-insensitive and ignore surrounding whitespace.
//! Blank strings never match anything.

fn normalized(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// First accepted entry that appears inside `text`
///
/// Used for free-text weather descriptions ("Partly cloudy with light rain"
/// matches an accepted "cloudy").
pub fn any_contains<'a>(text: &str, accepted: &'a [String]) -> Option<&'a str> {
    let text = normalized(text)?;
    accepted
        .iter()
        .find(|entry| normalized(entry).is_some_and(|e| text.contains(&e)))
        .map(String::as_str)
}

/// First list entry that overlaps `value` as a substring in either direction
///
/// "late summer" overlaps "summer", and "summer" overlaps "late summer".
pub fn overlaps_any<'a>(value: &str, list: &'a [String]) -> Option<&'a str> {
    let value = normalized(value)?;
    list.iter()
        .find(|entry| {
            normalized(entry).is_some_and(|e| value.contains(&e) || e.contains(&value))
        })
        .map(String::as_str)
}

/// Whether `list` holds `value` as a whole tag
pub fn contains_tag(list: &[String], value: &str) -> bool {
    match normalized(value) {
        Some(value) => list
            .iter()
            .any(|entry| normalized(entry).is_some_and(|e| e == value)),
        None => false,
    }
}
