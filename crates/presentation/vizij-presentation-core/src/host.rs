//! Host traits.
//!
//! Adapters (web/headless) implement these and pass the host into
//! [`crate::Presentation::new`]. The core decides *what* changes; the host
//! performs the visual effect and owns the address fragment.

use serde::{Deserialize, Serialize};

use crate::slide::Step;
use crate::style::AnimationStyle;

/// Result of starting a reveal/conceal effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Completion {
    /// The effect already finished; the step loop continues immediately.
    Done,
    /// The host calls [`crate::Presentation::step_completed`] when it finishes.
    Pending,
}

/// Visual side of the host: items, slide containers and the slider position.
pub trait Stage {
    /// Start the effect for one step. Must not call back into the presentation.
    fn animate(&mut self, step: Step, style: &AnimationStyle) -> Completion;

    /// Instantly show or hide one item.
    fn set_item_visible(&mut self, slide: usize, item: usize, visible: bool);

    /// Take a slide container in or out of layout.
    fn set_slide_visible(&mut self, slide: usize, visible: bool);

    /// Center the given slide, animated or snapped.
    fn layout(&mut self, slide: usize, animate: bool);

    /// Recompute slide sizes after the viewport changed.
    fn resize(&mut self) {}

    /// The active slide changed; `title` is its title, if it has one.
    fn set_title(&mut self, _title: Option<&str>) {}
}

/// Horizontal scroll positions saved around a hash write.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub window_x: f64,
    pub host_x: f64,
}

/// Address fragment and history access.
pub trait Location {
    /// Current fragment, with or without the leading `#`.
    fn hash(&self) -> String;

    /// Overwrite the current history entry.
    fn replace_hash(&mut self, hash: &str);

    /// Record a new history entry.
    fn push_hash(&mut self, hash: &str);

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::default()
    }

    fn restore_scroll(&mut self, _offset: ScrollOffset) {}
}

/// Everything a presentation needs from its environment.
pub trait Host: Stage + Location {}

impl<T: Stage + Location> Host for T {}
