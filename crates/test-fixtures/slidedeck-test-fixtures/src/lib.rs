use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod fake;

pub use fake::{ControlState, FakeDocument};

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    decks: HashMap<String, String>,
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

pub mod decks {
    use super::*;

    use slidedeck_core::{Control, Field, Landmark, Role};

    /// Page structure a `FakeDocument` is built from.
    #[derive(Debug, Clone, Deserialize)]
    pub struct Deck {
        pub name: String,
        #[serde(default)]
        pub landmarks: Vec<Landmark>,
        #[serde(default)]
        pub controls: Vec<Control>,
        #[serde(default)]
        pub fields: Vec<Field>,
        pub slides: Vec<SlideFixture>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct SlideFixture {
        pub ordinal: u32,
        /// Parts in document order, as (role, count).
        #[serde(default)]
        pub parts: Vec<(Role, usize)>,
    }

    pub fn load(name: &str) -> Result<Deck> {
        let rel = lookup(&MANIFEST.decks, "deck", name)?;
        super::load_json(rel)
    }
}
