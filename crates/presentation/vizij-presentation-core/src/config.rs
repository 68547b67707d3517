//! Core configuration for vizij-presentation-core.

use serde::{Deserialize, Serialize};

use crate::style::AnimationStyle;

/// Default duration of a single reveal/conceal effect.
pub const DEFAULT_STEP_MS: u32 = 500;

/// Configuration for style lookup and slide culling.
/// Every field has a default so hosts can pass a partial object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Style used for items without an animation tag, or with an unknown one.
    pub default_style: String,
    /// Registered item styles. Names are matched case-insensitively.
    pub styles: Vec<AnimationStyle>,
    /// Slides within this distance of either end of a slide transition stay laid out.
    pub cull_margin: usize,
    /// Slides within this distance inside a long jump stay laid out; the middle is hidden.
    pub cull_band: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: "slidevertical".to_string(),
            styles: vec![
                AnimationStyle::new("fade", DEFAULT_STEP_MS),
                AnimationStyle::new("slideVertical", DEFAULT_STEP_MS),
            ],
            cull_margin: 1,
            cull_band: 5,
        }
    }
}
