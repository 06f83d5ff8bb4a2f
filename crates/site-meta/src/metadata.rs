//! The assembled metadata record and its process-wide instance
//!
//! Renderers take one flat record instead of importing constants one by
//! one, and social-card generators serialize it as-is.

use crate::constants;
use serde::Serialize;
use site_manifest::PackageManifest;
use std::sync::OnceLock;
use tracing::debug;

/// Every site-wide value a renderer needs, assembled once
///
/// Literal fields come from [`constants`]; `pkg_license` and
/// `project_authors` are projected from the package manifest. A field the
/// manifest doesn't carry stays absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub site_title: &'static str,
    pub site_subtitle: &'static str,
    pub site_description: &'static str,
    pub site_url: &'static str,
    pub issues_url: &'static str,
    pub repo_url: &'static str,
    pub docs_repo_url: &'static str,
    pub playground_url: &'static str,
    pub discord_invite_path: &'static str,
    pub discord_invite_url: &'static str,
    pub discord_invite_alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pkg_license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_authors: Option<String>,
}

static GLOBAL: OnceLock<SiteMetadata> = OnceLock::new();

impl SiteMetadata {
    /// Assemble the record from a manifest document
    ///
    /// Pure projection: no IO, no failure path.
    pub fn from_manifest(manifest: &PackageManifest) -> Self {
        SiteMetadata {
            site_title: constants::SITE_TITLE,
            site_subtitle: constants::SITE_SUBTITLE,
            site_description: constants::SITE_DESCRIPTION,
            site_url: constants::SITE_URL,
            issues_url: constants::ISSUES_URL,
            repo_url: constants::REPO_URL,
            docs_repo_url: constants::DOCS_REPO_URL,
            playground_url: constants::PLAYGROUND_URL,
            discord_invite_path: constants::DISCORD_INVITE_PATH,
            discord_invite_url: constants::DISCORD_INVITE_URL,
            discord_invite_alias: constants::discord_invite_alias().to_owned(),
            pkg_license: manifest.license().map(str::to_owned),
            project_authors: manifest.authors_joined(),
        }
    }

    /// The process-wide record, assembled on first access from the manifest
    /// Cargo read at build time
    ///
    /// Later calls return the same values for the life of the process.
    pub fn global() -> &'static SiteMetadata {
        GLOBAL.get_or_init(|| {
            debug!("Assembling site metadata from the build-time manifest");
            SiteMetadata::from_manifest(&PackageManifest::from_build_env())
        })
    }
}
