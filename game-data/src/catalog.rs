//! The image catalog: the static set of available images and their stems.
//!
//! The manifest document is produced by the asset pipeline at build time and
//! never changes during a session, so the catalog is constructed once and
//! only ever borrowed afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The manifest document as written by the asset pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    /// Informational; never validated against `images.len()`.
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub images: Vec<ManifestImage>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ManifestImage {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub stem: String,
    #[serde(default)]
    pub path: String,
}

/// One usable image: a non-empty trimmed stem and its asset path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub stem: String,
    pub path: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse image manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The normalized, immutable set of images for a session.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
    generated_at: Option<DateTime<Utc>>,
}

impl Catalog {
    /// Normalize a manifest into a catalog.
    ///
    /// Entries whose stem trims to the empty string are dropped here; that
    /// is a data-quality filter, not an error. Duplicate stems are kept.
    pub fn new(manifest: Manifest) -> Self {
        let entries = manifest
            .images
            .into_iter()
            .filter_map(|image| {
                let stem = image.stem.trim();
                if stem.is_empty() {
                    log::debug!("dropping manifest entry with empty stem: {:?}", image.filename);
                    return None;
                }
                Some(ImageEntry {
                    stem: stem.to_string(),
                    path: image.path,
                })
            })
            .collect();

        Self {
            entries,
            generated_at: manifest.generated_at,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let manifest: Manifest = serde_json::from_str(raw)?;
        Ok(Self::new(manifest))
    }

    pub fn entries(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_parses_manifest() {
        let raw = r#"{
            "generatedAt": "2025-01-02T03:04:05.000Z",
            "count": 2,
            "images": [
                { "filename": "apfel.jpg", "stem": "apfel", "path": "images/apfel.jpg" },
                { "filename": "birne.png", "stem": "birne", "path": "images/birne.png" }
            ]
        }"#;

        let catalog = Catalog::from_json(raw).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].stem, "apfel");
        assert_eq!(catalog.entries()[1].path, "images/birne.png");
        assert!(catalog.generated_at().is_some());
    }

    #[test]
    fn test_normalization_trims_and_drops_empty_stems() {
        let raw = r#"{
            "images": [
                { "stem": "  hund ", "path": "images/hund.jpg" },
                { "stem": "   ", "path": "images/ghost.jpg" },
                { "stem": "", "path": "images/blank.jpg" }
            ]
        }"#;

        let catalog = Catalog::from_json(raw).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].stem, "hund");
    }

    #[test]
    fn test_duplicate_stems_are_kept() {
        let raw = r#"{
            "images": [
                { "stem": "katze", "path": "images/katze-1.jpg" },
                { "stem": "katze", "path": "images/katze-2.jpg" }
            ]
        }"#;

        let catalog = Catalog::from_json(raw).unwrap();

        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_missing_fields_tolerated() {
        // The manifest may omit generatedAt and count entirely.
        let catalog = Catalog::from_json(r#"{ "images": [] }"#).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.generated_at().is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Catalog::from_json("not json").is_err());
    }
}
