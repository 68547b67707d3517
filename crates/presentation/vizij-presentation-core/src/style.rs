//! Item animation styles.
//!
//! The core never renders an effect. It only picks which registered style the
//! host should run for an item, keyed by the item's optional animation tag.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::PresentationError;

/// A named reveal/conceal effect understood by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationStyle {
    pub name: String,
    #[serde(default = "default_duration")]
    pub duration_ms: u32,
}

fn default_duration() -> u32 {
    crate::config::DEFAULT_STEP_MS
}

impl AnimationStyle {
    pub fn new(name: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            name: name.into(),
            duration_ms,
        }
    }
}

/// Case-insensitive style table with a default entry.
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    styles: HashMap<String, AnimationStyle>,
    default_key: String,
}

impl StyleRegistry {
    /// Build the registry from config. The default style must be one of the
    /// registered styles.
    pub fn from_config(cfg: &Config) -> Result<Self, PresentationError> {
        let mut styles = HashMap::with_capacity(cfg.styles.len());
        for style in &cfg.styles {
            styles.insert(style.name.to_lowercase(), style.clone());
        }
        let default_key = cfg.default_style.to_lowercase();
        if !styles.contains_key(&default_key) {
            return Err(PresentationError::DefaultStyleMissing {
                name: cfg.default_style.clone(),
            });
        }
        Ok(Self {
            styles,
            default_key,
        })
    }

    /// Register (or replace) a style.
    pub fn register(&mut self, style: AnimationStyle) {
        self.styles.insert(style.name.to_lowercase(), style);
    }

    pub fn default_style(&self) -> &AnimationStyle {
        &self.styles[&self.default_key]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(&name.to_lowercase())
    }

    /// Strict lookup; `None` selects the default style.
    pub fn try_resolve(&self, name: Option<&str>) -> Result<&AnimationStyle, PresentationError> {
        match name {
            None => Ok(self.default_style()),
            Some(name) => {
                self.styles
                    .get(&name.to_lowercase())
                    .ok_or_else(|| PresentationError::UnknownStyle {
                        name: name.to_string(),
                    })
            }
        }
    }

    /// Lookup used while stepping. An unknown name is reported and replaced by
    /// the default style.
    pub fn resolve(&self, name: Option<&str>) -> &AnimationStyle {
        match self.try_resolve(name) {
            Ok(style) => style,
            Err(err) => {
                log::error!("{err}; using '{}'", self.default_key);
                self.default_style()
            }
        }
    }
}
