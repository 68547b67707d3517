use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    decks: HashMap<String, DeckEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DeckEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        hashes: Vec<String>,
    },
}

impl DeckEntry {
    fn as_path(&self) -> &str {
        match self {
            DeckEntry::Path(path) => path,
            DeckEntry::Detailed { path, .. } => path,
        }
    }

    fn hashes(&self) -> &[String] {
        match self {
            DeckEntry::Path(_) => &[],
            DeckEntry::Detailed { hashes, .. } => hashes,
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Deck descriptions (slides, items, identifiers, animation tags).
pub mod decks {
    use super::*;

    pub fn keys() -> Vec<String> {
        MANIFEST.decks.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.decks, "deck", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.decks, "deck", name)?;
        super::load_json(entry.as_path())
    }

    /// Hashes the deck is expected to resolve without falling back.
    pub fn hashes(name: &str) -> Result<Vec<String>> {
        let entry = lookup(&MANIFEST.decks, "deck", name)?;
        Ok(entry.hashes().to_vec())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.decks, "deck", name)?;
        Ok(resolve_path(entry.as_path()))
    }
}
