use crate::error::ApiError;
use regex::Regex;
use std::sync::OnceLock;

static ID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn id_pattern() -> &'static Regex {
    ID_PATTERN.get_or_init(|| Regex::new(r"^(?i)(?:SCP-)?([0-9]+)$").expect("valid id pattern"))
}

/// Canonicalizes a raw identifier into the digits-only key space.
///
/// Accepts an all-digit string or a case-insensitive `SCP-<digits>` form and
/// returns the digit portion. Anything else is `InvalidIdentifier`.
pub fn normalize_identifier(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    match id_pattern().captures(trimmed) {
        Some(caps) => Ok(caps[1].to_string()),
        None => Err(ApiError::InvalidIdentifier(raw.to_string())),
    }
}
