//! Reduction of raw input text to the rendered content, which doubles as the cache key.

use crate::foundation::error::{AvatarError, AvatarResult};

/// Reject empty or whitespace-only raw input.
pub fn validate_input(raw: &str) -> AvatarResult<()> {
    if raw.trim().is_empty() {
        return Err(AvatarError::invalid_input(
            "avatar text must not be empty or whitespace",
        ));
    }
    Ok(())
}

/// Default transform: trim, then either the first character or the whole text, uppercased.
///
/// Uppercasing uses full Unicode case mapping, so a single letter may expand (`ß` -> `SS`).
pub fn default_transform(raw: &str, first_letter_only: bool) -> String {
    let trimmed = raw.trim();
    if first_letter_only {
        trimmed
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    } else {
        trimmed.to_uppercase()
    }
}

/// Validate `raw` and derive the content key with `transform`.
///
/// A transform that produces empty or whitespace-only output is rejected, since content is
/// also the cache key.
pub(crate) fn content_key(
    raw: &str,
    transform: impl FnOnce(&str) -> String,
) -> AvatarResult<String> {
    validate_input(raw)?;
    let key = transform(raw);
    if key.trim().is_empty() {
        return Err(AvatarError::invalid_input(format!(
            "content transform produced empty content for {raw:?}"
        )));
    }
    Ok(key)
}

#[cfg(test)]
#[path = "../tests/unit/content.rs"]
mod tests;
