//! Embedded creature catalog
//!
//! Creature records ship inside the binary as a JSON document and are
//! parsed once on first access. Lookup accepts either the 6-character
//! hex id or the display name (case-insensitive).

use std::sync::OnceLock;

use serde::Deserialize;

/// A creature record from the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Cow {
    /// Unique 6-character hex identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Creator name.
    pub author: String,
    /// Origin of the art: "original", "student" or "community".
    #[serde(default)]
    pub source: String,
    /// Categories for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "dateAdded", default)]
    pub date_added: String,
    /// ASCII art with `$thoughts`, `$eyes`, `$tongue` placeholders.
    pub art: String,
}

const COWS_JSON: &str = include_str!("cows.json");

static CATALOG: OnceLock<Vec<Cow>> = OnceLock::new();

/// All creatures in the catalog, in catalog order.
pub fn list_cows() -> &'static [Cow] {
    CATALOG
        .get_or_init(|| {
            // The catalog is compiled in; a parse failure is a build defect.
            serde_json::from_str(COWS_JSON).expect("embedded cow catalog is valid JSON")
        })
        .as_slice()
}

/// Look up a creature by id or case-insensitive name.
pub fn get_cow(name_or_id: &str) -> Option<&'static Cow> {
    list_cows()
        .iter()
        .find(|cow| cow.id == name_or_id || cow.name.eq_ignore_ascii_case(name_or_id))
}

/// Display names of all creatures, in catalog order.
pub fn cow_names() -> Vec<&'static str> {
    list_cows().iter().map(|cow| cow.name.as_str()).collect()
}
