//! Vizij Presentation Core (engine-agnostic)
//!
//! Slide/item navigation for hash-addressed presentations. A deck is a fixed
//! list of slides, each with an ordered list of items revealed one at a time.
//! The core decides the target position for every input, breaks multi-item
//! moves into single-step effects, and keeps the address fragment in sync
//! without feeding its own writes back into navigation.
//!
//! Adapters (web/headless) implement [`Stage`] and [`Location`] and forward
//! input as [`Command`]s, hash changes, resizes and effect completions.

pub mod config;
pub mod deck;
pub mod error;
pub mod hash;
pub mod headless;
pub mod host;
pub mod inputs;
pub mod locator;
pub mod presentation;
pub mod slide;
pub mod style;

// Re-exports for consumers (adapters)
pub use config::Config;
pub use deck::{DeckSpec, ItemSpec, SlideSpec};
pub use error::PresentationError;
pub use hash::{format_hash, parse_hash, try_parse_hash};
pub use headless::HeadlessHost;
pub use host::{Completion, Host, Location, ScrollOffset, Stage};
pub use inputs::Command;
pub use locator::{IdentifierIndex, Locator};
pub use presentation::Presentation;
pub use slide::{Direction, Item, Slide, Step, StepOutcome};
pub use style::{AnimationStyle, StyleRegistry};
