//! Manifest document model, loading, and field projection
//!
//! The document is a Cargo-style TOML manifest whose `[package]` table
//! carries the package identity. Every field except `name` is optional: an
//! absent field projects to an absent value, never an error. Whatever
//! consumes the projection decides what absence means.

use crate::errors::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// A package manifest document, as read from disk or the build environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub package: PackageSection,
}

/// The `[package]` table of the manifest
///
/// Keys this module does not own (dependency tables, metadata extensions)
/// are ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSection {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

impl PackageManifest {
    /// Load a manifest from a specific path, returning an empty manifest if
    /// the file doesn't exist
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            debug!("Manifest not found at {:?}, using empty manifest", path);
            return Ok(PackageManifest::default());
        }

        debug!("Reading manifest from: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let manifest: PackageManifest = toml::from_str(&content)?;

        info!("Manifest loaded successfully from: {:?}", path);
        debug!("Package name: {}", manifest.package.name);
        Ok(manifest)
    }

    /// The manifest Cargo already read at build time
    ///
    /// Projects the `CARGO_PKG_*` environment into a manifest value so that
    /// callers needing only the enclosing workspace's identity skip runtime
    /// IO entirely. Cargo sets absent fields to empty strings; those become
    /// absent values here.
    pub fn from_build_env() -> Self {
        let authors = env!("CARGO_PKG_AUTHORS")
            .split(':')
            .filter(|author| !author.is_empty())
            .map(str::to_owned)
            .collect();

        PackageManifest {
            package: PackageSection {
                name: env!("CARGO_PKG_NAME").to_owned(),
                version: non_empty(env!("CARGO_PKG_VERSION")),
                description: non_empty(env!("CARGO_PKG_DESCRIPTION")),
                license: non_empty(env!("CARGO_PKG_LICENSE")),
                authors,
                repository: non_empty(env!("CARGO_PKG_REPOSITORY")),
                homepage: non_empty(env!("CARGO_PKG_HOMEPAGE")),
            },
        }
    }

    /// The `license` field, if the manifest carries one
    pub fn license(&self) -> Option<&str> {
        self.package.license.as_deref()
    }

    /// All declared authors joined with `", "`, or `None` when the manifest
    /// names nobody
    pub fn authors_joined(&self) -> Option<String> {
        if self.package.authors.is_empty() {
            None
        } else {
            Some(self.package.authors.join(", "))
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}
