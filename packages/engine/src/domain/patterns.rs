//! Pattern catalog - named presets placed onto the grid
//!
//! Built-in presets are defined as text rows (`#` alive, `.` dead).
//! Extra presets can be loaded from a JSON bundle:
//!
//! ```json
//! { "patterns": [ { "name": "lwss", "rows": [".#..#", "#....", "#...#", "####."] } ] }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Built-in presets, in catalog order
pub const BUILTIN_PATTERNS: &[(&str, &[&str])] = &[
    ("glider", &[".#.", "..#", "###"]),
    ("blinker", &["###"]),
    ("beacon", &["##..", "##..", "..##", "..##"]),
    ("toad", &[".###", "###."]),
    ("block", &["##", "##"]),
    ("tub", &[".#.", "#.#", ".#."]),
];

/// Immutable rectangular-ish cell matrix. Rows may differ in length; the
/// matrix itself does not wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternDefinition {
    name: String,
    cells: Vec<Vec<bool>>,
}

impl PatternDefinition {
    pub fn new(name: &str, cells: Vec<Vec<bool>>) -> Result<Self, EngineError> {
        if !cells.iter().flatten().any(|&alive| alive) {
            return Err(EngineError::EmptyPattern(name.to_string()));
        }
        Ok(Self { name: name.to_string(), cells })
    }

    /// `#`, `O` and `*` are alive; anything else is dead
    pub fn from_rows<S: AsRef<str>>(name: &str, rows: &[S]) -> Result<Self, EngineError> {
        let cells = rows
            .iter()
            .map(|row| row.as_ref().chars().map(|ch| matches!(ch, '#' | 'O' | '*')).collect())
            .collect();
        Self::new(name, cells)
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn rows(&self) -> usize { self.cells.len() }

    /// Width of the widest row
    pub fn cols(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn cells(&self) -> &[Vec<bool>] { &self.cells }

    /// None outside the pattern's own shape
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&alive| alive).count()
    }
}

#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<PatternDefinition>,
    name_to_index: HashMap<String, usize>,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PatternCatalog {
    pub fn empty() -> Self {
        Self { patterns: Vec::new(), name_to_index: HashMap::new() }
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        for (name, rows) in BUILTIN_PATTERNS.iter() {
            // Built-in shapes are non-empty and uniquely named
            if let Ok(pattern) = PatternDefinition::from_rows(name, rows) {
                let _ = catalog.insert(pattern);
            }
        }
        catalog
    }

    pub fn from_bundle_json(json: &str) -> Result<Self, EngineError> {
        let mut catalog = Self::empty();
        catalog.merge_bundle_json(json)?;
        Ok(catalog)
    }

    /// Add every pattern from a bundle; returns how many were added.
    /// Nothing is added if any entry is invalid.
    pub fn merge_bundle_json(&mut self, json: &str) -> Result<usize, EngineError> {
        let bundle: BundleRoot = serde_json::from_str(json)?;
        let mut staged = self.clone();
        for entry in bundle.patterns.iter() {
            let pattern = PatternDefinition::from_rows(&entry.name, &entry.rows)?;
            staged.insert(pattern)?;
        }
        let added = bundle.patterns.len();
        *self = staged;
        Ok(added)
    }

    fn insert(&mut self, pattern: PatternDefinition) -> Result<(), EngineError> {
        let key = pattern.name.to_lowercase();
        if self.name_to_index.contains_key(&key) {
            return Err(EngineError::DuplicatePattern(pattern.name));
        }
        self.name_to_index.insert(key, self.patterns.len());
        self.patterns.push(pattern);
        Ok(())
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        let idx = *self.name_to_index.get(&name.to_lowercase())?;
        self.patterns.get(idx)
    }

    pub fn require(&self, name: &str) -> Result<&PatternDefinition, EngineError> {
        self.get(name).ok_or_else(|| EngineError::UnknownPattern(name.to_string()))
    }

    pub fn len(&self) -> usize { self.patterns.len() }

    pub fn is_empty(&self) -> bool { self.patterns.is_empty() }

    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name()).collect()
    }

    pub fn manifest_json(&self) -> String {
        let out = PatternManifest {
            format_version: 1,
            patterns: self
                .patterns
                .iter()
                .map(|p| PatternManifestEntry { name: p.name(), rows: p.rows(), cols: p.cols() })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

#[derive(Deserialize)]
struct BundleRoot {
    patterns: Vec<BundlePattern>,
}

#[derive(Deserialize)]
struct BundlePattern {
    name: String,
    rows: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PatternManifest<'a> {
    format_version: u32,
    patterns: Vec<PatternManifestEntry<'a>>,
}

#[derive(Serialize)]
struct PatternManifestEntry<'a> {
    name: &'a str,
    rows: usize,
    cols: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_the_six_presets() {
        let catalog = PatternCatalog::builtin();
        assert_eq!(catalog.names(), vec!["glider", "blinker", "beacon", "toad", "block", "tub"]);

        let glider = catalog.get("Glider").unwrap();
        assert_eq!((glider.rows(), glider.cols()), (3, 3));
        assert_eq!(glider.live_count(), 5);
        assert_eq!(catalog.get("blinker").unwrap().cells(), &[vec![true, true, true]]);
        assert_eq!(catalog.get("tub").unwrap().live_count(), 4);
        assert_eq!(catalog.get("beacon").unwrap().live_count(), 8);
    }

    #[test]
    fn ragged_rows_report_widest_width() {
        let p = PatternDefinition::from_rows("ragged", &["#", "###", "##"]).unwrap();
        assert_eq!(p.cols(), 3);
        assert_eq!(p.get(0, 2), None);
        assert_eq!(p.get(1, 2), Some(true));
    }

    #[test]
    fn bundle_merge_is_all_or_nothing() {
        let mut catalog = PatternCatalog::builtin();
        let json = r###"{"patterns": [{"name": "dot", "rows": ["#"]}, {"name": "BLOCK", "rows": ["##"]}]}"###;
        let err = catalog.merge_bundle_json(json).unwrap_err();
        assert!(matches!(err, EngineError::DuplicatePattern(_)));
        assert_eq!(catalog.len(), 6);
        assert!(catalog.get("dot").is_none());

        let added = catalog
            .merge_bundle_json(r#"{"patterns": [{"name": "dot", "rows": ["O"]}]}"#)
            .unwrap();
        assert_eq!(added, 1);
        assert_eq!(catalog.get("dot").unwrap().live_count(), 1);
    }

    #[test]
    fn empty_patterns_and_bad_json_are_rejected() {
        let err = PatternCatalog::from_bundle_json(r#"{"patterns": [{"name": "nil", "rows": []}]}"#).unwrap_err();
        assert!(matches!(err, EngineError::EmptyPattern(_)));
        let err = PatternCatalog::from_bundle_json(r#"{"patterns": [{"name": "void", "rows": ["...", "..."]}]}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyPattern(ref name) if name == "void"));
        assert!(matches!(PatternCatalog::from_bundle_json("not json"), Err(EngineError::Json(_))));
        assert!(matches!(
            PatternCatalog::builtin().require("pulsar"),
            Err(EngineError::UnknownPattern(_))
        ));
    }

    #[test]
    fn manifest_lists_dimensions() {
        let json = PatternCatalog::builtin().manifest_json();
        assert!(json.starts_with("{\"formatVersion\":1"));
        assert!(json.contains("{\"name\":\"toad\",\"rows\":2,\"cols\":4}"));
    }
}
