//! Deck description read once at startup.
//!
//! Adapters build a [`DeckSpec`] from the document (slide containers and their
//! items) and hand it to [`crate::Presentation::new`]. The shape is fixed for
//! the lifetime of the presentation.

use serde::{Deserialize, Serialize};

use crate::error::PresentationError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckSpec {
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Element identifier, usable as a hash token.
    #[serde(default)]
    pub id: Option<String>,
    /// Title attribute, or the text of the slide's first heading.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    #[serde(default)]
    pub id: Option<String>,
    /// Animation style tag; falls back to the configured default.
    #[serde(default)]
    pub animation: Option<String>,
}

impl DeckSpec {
    pub fn from_json(s: &str) -> Result<Self, PresentationError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Deck of anonymous slides with the given item counts.
    pub fn with_counts(counts: &[usize]) -> Self {
        Self {
            slides: counts
                .iter()
                .map(|&n| SlideSpec {
                    items: vec![ItemSpec::default(); n],
                    ..SlideSpec::default()
                })
                .collect(),
        }
    }
}

impl SlideSpec {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
