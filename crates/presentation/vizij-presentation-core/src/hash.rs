//! Address fragment codec.
//!
//! Grammar (leading `#` optional):
//!
//! ```text
//! "" | identifier | slide-token ["/" item-count]
//! slide-token := identifier | decimal-digits
//! identifier  := letter, then letters / digits / "_" / "." / ":" / "-"
//! ```
//!
//! A whole-fragment identifier match takes precedence over any positional
//! reading. Slide 0 with nothing revealed encodes as the empty string; any
//! other slide with nothing revealed encodes as its token alone.

use crate::error::PresentationError;
use crate::locator::{IdentifierIndex, Locator};
use crate::slide::Slide;

/// Drop the leading `#`, if any.
#[inline]
pub fn strip_marker(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

fn is_identifier(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Digits too large for `usize` saturate, so they read as "no such slide"
/// (or a clamped count) like any other out-of-range number.
fn parse_index(digits: &str) -> usize {
    digits.parse().unwrap_or(usize::MAX)
}

/// Strict parse. The empty fragment is the start position; anything that does
/// not match the grammar, or names an identifier missing from `index`, is an
/// error.
pub fn try_parse_hash(hash: &str, index: &IdentifierIndex) -> Result<Locator, PresentationError> {
    let raw = strip_marker(hash);
    if raw.is_empty() {
        return Ok(Locator::START);
    }
    if let Some(loc) = index.get(raw) {
        return Ok(loc);
    }

    let malformed = || PresentationError::MalformedHash {
        hash: raw.to_string(),
    };

    let (head, tail) = match raw.split_once('/') {
        Some((head, tail)) => (head, Some(tail.trim_start())),
        None => (raw, None),
    };

    let item = match tail {
        None => 0,
        Some(digits) if is_digits(digits) => parse_index(digits),
        Some(_) => return Err(malformed()),
    };

    let slide = if is_digits(head) {
        parse_index(head)
    } else if is_identifier(head) {
        index
            .get(head)
            .ok_or_else(|| PresentationError::UnknownIdentifier {
                identifier: head.to_string(),
            })?
            .slide
    } else {
        return Err(malformed());
    };

    Ok(Locator { slide, item })
}

/// Lenient parse used by navigation: every failure lands on the start position.
pub fn parse_hash(hash: &str, index: &IdentifierIndex) -> Locator {
    match try_parse_hash(hash, index) {
        Ok(loc) => loc,
        Err(err @ PresentationError::UnknownIdentifier { .. }) => {
            log::warn!("{err}; falling back to the first slide");
            Locator::START
        }
        Err(err) => {
            log::debug!("{err}; falling back to the first slide");
            Locator::START
        }
    }
}

/// Encode a slide's revealed state. Pure function of the slide.
pub fn format_hash(slide: &Slide) -> String {
    let count = slide.current();
    if slide.index() == 0 && count == 0 {
        return String::new();
    }
    if count == 0 {
        return slide.token();
    }
    // The last revealed item's identifier already encodes slide and count.
    match slide.items().get(count - 1).and_then(|item| item.id.as_deref()) {
        Some(id) => id.to_string(),
        None => format!("{}/{}", slide.token(), count),
    }
}
