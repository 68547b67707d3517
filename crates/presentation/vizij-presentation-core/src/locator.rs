//! Navigation positions and the identifier lookup table.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::deck::DeckSpec;

/// A navigation position: a slide and the number of items revealed on it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Locator {
    pub slide: usize,
    pub item: usize,
}

impl Locator {
    pub const START: Locator = Locator { slide: 0, item: 0 };

    pub fn new(slide: usize, item: usize) -> Self {
        Self { slide, item }
    }
}

/// Maps content-supplied identifiers to locators.
///
/// A slide identifier maps to the slide with nothing revealed. An item
/// identifier maps one past the item's own position, i.e. "show through this
/// item".
#[derive(Clone, Debug, Default)]
pub struct IdentifierIndex {
    map: HashMap<String, Locator>,
}

impl IdentifierIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_deck(deck: &DeckSpec) -> Self {
        let mut index = Self::new();
        for (slide_idx, slide) in deck.slides.iter().enumerate() {
            if let Some(id) = slide.id.as_deref() {
                index.insert(id, Locator::new(slide_idx, 0));
            }
            for (item_idx, item) in slide.items.iter().enumerate() {
                if let Some(id) = item.id.as_deref() {
                    index.insert(id, Locator::new(slide_idx, item_idx + 1));
                }
            }
        }
        index
    }

    /// Insert a mapping; a later identifier replaces an earlier one.
    pub fn insert(&mut self, id: &str, loc: Locator) {
        if id.is_empty() {
            return;
        }
        if let Some(prev) = self.map.insert(id.to_string(), loc) {
            log::warn!("duplicate identifier '{id}': {prev:?} replaced by {loc:?}");
        }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<Locator> {
        self.map.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
