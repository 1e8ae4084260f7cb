//! Catalogue files.
//!
//! TOML or JSON, chosen by extension (`.json` is JSON, anything else TOML).
//! Both shapes deserialize into [`CatalogueSpec`] and go through the same
//! validation as interactively entered rules.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use checkout_core::{Catalogue, CatalogueSpec};
use tracing::info;

/// On-disk catalogue encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Toml,
        }
    }
}

/// Parses and validates catalogue text.
pub fn parse_catalogue(contents: &str, format: FileFormat) -> Result<Catalogue> {
    let spec: CatalogueSpec = match format {
        FileFormat::Toml => toml::from_str(contents).context("Malformed TOML catalogue")?,
        FileFormat::Json => serde_json::from_str(contents).context("Malformed JSON catalogue")?,
    };

    let catalogue = Catalogue::try_from(spec).context("Catalogue rejected")?;
    Ok(catalogue)
}

/// Reads a catalogue file from disk.
pub fn load_catalogue(path: &Path) -> Result<Catalogue> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalogue {}", path.display()))?;

    let catalogue = parse_catalogue(&contents, FileFormat::from_path(path))
        .with_context(|| format!("Invalid catalogue {}", path.display()))?;

    info!(path = %path.display(), rules = catalogue.len(), "Catalogue loaded");
    Ok(catalogue)
}
