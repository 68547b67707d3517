//! Error types for presentation construction and lookup.

use thiserror::Error;

/// Errors surfaced by the presentation core.
///
/// Navigation entry points never return these: unknown identifiers, malformed
/// hashes and missing styles are logged and replaced by a fallback. Only
/// construction and the `try_*` lookups report them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PresentationError {
    #[error("presentation has no slides")]
    EmptyDeck,

    #[error("unknown identifier '{identifier}'")]
    UnknownIdentifier { identifier: String },

    #[error("hash '{hash}' does not match [identifier|index][/count]")]
    MalformedHash { hash: String },

    #[error("missing animation style '{name}'")]
    UnknownStyle { name: String },

    #[error("default animation style '{name}' is not registered")]
    DefaultStyleMissing { name: String },

    #[error("deck error: {reason}")]
    Deck { reason: String },
}

impl PresentationError {
    /// Whether navigation can continue with a fallback after this error.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownIdentifier { .. } | Self::MalformedHash { .. } | Self::UnknownStyle { .. }
        )
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deck {
            reason: err.to_string(),
        }
    }
}
