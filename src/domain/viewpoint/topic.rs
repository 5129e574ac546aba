//! Topic and message validation.

use super::errors::{InputError, TopicError};

/// Character bounds for an accepted topic, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicBounds {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl TopicBounds {
    pub fn new(min_chars: usize, max_chars: usize) -> Self {
        Self { min_chars, max_chars }
    }

    /// Trims `raw` and checks it against the bounds.
    ///
    /// Lengths count Unicode scalar values, not bytes.
    pub fn validate<'a>(&self, raw: &'a str) -> Result<&'a str, TopicError> {
        let topic = raw.trim();
        let actual = topic.chars().count();

        if actual == 0 {
            return Err(TopicError::Empty);
        }
        if actual < self.min_chars {
            return Err(TopicError::TooShort {
                actual,
                min: self.min_chars,
            });
        }
        if actual > self.max_chars {
            return Err(TopicError::TooLong {
                actual,
                max: self.max_chars,
            });
        }
        Ok(topic)
    }
}

impl Default for TopicBounds {
    fn default() -> Self {
        Self::new(2, 100)
    }
}

/// Returns the content, or an input error if it is absent or blank.
///
/// The content is returned untrimmed.
pub fn require_content(content: Option<&str>) -> Result<&str, InputError> {
    match content {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(InputError::EmptyContent),
    }
}

/// Returns the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
