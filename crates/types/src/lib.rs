//! Validated text primitives shared across the ShieldHer workspace.
//!
//! User-entered text arrives from forms as plain strings. These wrappers
//! guarantee, once constructed, that the contained text satisfies the
//! platform's shape rules: non-empty after trimming, and (where a form
//! field carries a character limit) within that limit.
//!
//! Construction is the only validation point. Code that holds a
//! [`NonEmptyText`] can rely on its invariants without re-checking.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
    /// The input text exceeded the permitted number of characters
    #[error("text exceeds the {limit} character limit ({actual} characters)")]
    TooLong { limit: usize, actual: usize },
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. The input is trimmed of leading and trailing
/// whitespace during construction.
///
/// Interior whitespace is preserved as entered; only the ends are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the
    /// trimmed result is empty, an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a new `NonEmptyText`, additionally enforcing a character limit.
    ///
    /// The limit is counted in characters (not bytes) against the trimmed
    /// input, matching the limits the submission forms advertise to users.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input is empty, or
    /// `TextError::TooLong` if it exceeds `limit` characters.
    pub fn bounded(input: impl AsRef<str>, limit: usize) -> Result<Self, TextError> {
        let text = Self::new(input)?;
        let actual = text.0.chars().count();
        if actual > limit {
            return Err(TextError::TooLong { limit, actual });
        }
        Ok(text)
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Returns true if the input is empty or contains only whitespace.
///
/// Used where blank entries are silently dropped (for example, unfilled
/// evidence-link rows) rather than rejected with an error.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_plain_text() {
        let text = NonEmptyText::new("hello").unwrap();
        assert_eq!(text.as_str(), "hello");
    }

    #[test]
    fn test_new_trims_surrounding_whitespace() {
        let text = NonEmptyText::new("  hello world  ").unwrap();
        assert_eq!(text.as_str(), "hello world");
    }

    #[test]
    fn test_new_preserves_interior_whitespace() {
        let text = NonEmptyText::new("a  b").unwrap();
        assert_eq!(text.as_str(), "a  b");
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn test_new_rejects_whitespace_only() {
        assert!(matches!(NonEmptyText::new("   \t\n"), Err(TextError::Empty)));
    }

    #[test]
    fn test_bounded_accepts_at_limit() {
        let text = NonEmptyText::bounded("abcde", 5).unwrap();
        assert_eq!(text.as_str(), "abcde");
    }

    #[test]
    fn test_bounded_rejects_over_limit() {
        let result = NonEmptyText::bounded("abcdef", 5);
        match result {
            Err(TextError::TooLong { limit, actual }) => {
                assert_eq!(limit, 5);
                assert_eq!(actual, 6);
            }
            other => panic!("expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_bounded_counts_characters_not_bytes() {
        // Five multi-byte characters are within a limit of five.
        let text = NonEmptyText::bounded("ééééé", 5).unwrap();
        assert_eq!(text.as_str().chars().count(), 5);
    }

    #[test]
    fn test_bounded_limit_applies_after_trimming() {
        // Surrounding whitespace does not count against the limit.
        let text = NonEmptyText::bounded("  abcde  ", 5).unwrap();
        assert_eq!(text.as_str(), "abcde");
    }

    #[test]
    fn test_serde_round_trip() {
        let text = NonEmptyText::new("support").unwrap();
        let json = serde_json::to_string(&text).unwrap();
        assert_eq!(json, "\"support\"");
        let back: NonEmptyText = serde_json::from_str(&json).unwrap();
        assert_eq!(back, text);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let result: Result<NonEmptyText, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t "));
        assert!(!is_blank("x"));
        assert!(!is_blank(" x "));
    }
}
