//! Global metadata for the Gracile documentation site
//!
//! One flat, immutable table of site-wide values: title, description,
//! canonical URLs, the Discord invite links, and the license/author fields
//! projected from the package manifest. Page templates, `<meta>` tag
//! emitters, and social-card generators read from here; nothing mutates
//! these values after initialization.

pub mod constants;
pub mod metadata;

pub use constants::{
    discord_invite_alias, DISCORD_INVITE_PATH, DISCORD_INVITE_URL, DOCS_REPO_URL, ISSUES_URL,
    PLAYGROUND_URL, REPO_URL, SITE_DESCRIPTION, SITE_SUBTITLE, SITE_TITLE, SITE_URL,
};
pub use metadata::SiteMetadata;
