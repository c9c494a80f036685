//! Per-field canonicalization rules for lead records.

/// Source label used when the origin of a lead is blank or missing.
pub const UNKNOWN_SOURCE: &str = "Desconhecido";

/// Uppercase the first character, lowercase the rest.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Canonicalize a person name: collapse whitespace and capitalize each word.
pub fn clean_name(raw: Option<&str>) -> Option<String> {
    let name = raw?.trim();
    if name.is_empty() {
        return None;
    }
    let words: Vec<String> = name.split_whitespace().map(capitalize_first).collect();
    Some(words.join(" "))
}

/// Parse an age, valid only in the open interval (0, 120).
pub fn clean_age(raw: Option<&str>) -> Option<u32> {
    let age: u32 = raw?.trim().parse().ok()?;
    if (1..120).contains(&age) { Some(age) } else { None }
}

/// Map a gender token onto the two canonical labels.
///
/// Tokens outside the whitelist normalize to `None`; there is no
/// other/unspecified category.
pub fn clean_gender(raw: Option<&str>) -> Option<String> {
    match raw?.trim().to_lowercase().as_str() {
        "m" | "masculino" | "male" => Some("Masculino".to_string()),
        "f" | "feminino" | "female" => Some("Feminino".to_string()),
        _ => None,
    }
}

/// Canonicalize a lead source, defaulting blanks to [`UNKNOWN_SOURCE`].
pub fn clean_source(raw: Option<&str>) -> String {
    let source = raw.map_or("", str::trim);
    if source.is_empty() {
        return UNKNOWN_SOURCE.to_string();
    }
    capitalize_first(source)
}
