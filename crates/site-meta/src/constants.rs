//! Site-wide string constants
//!
//! Centralized so a URL change requires a single edit. All values are fixed
//! at compile time; the Discord invite alias is the one derived value.

use std::sync::OnceLock;

/// Site name, shown in page titles and social cards
pub const SITE_TITLE: &str = "Gracile";

/// Tagline rendered next to the title
pub const SITE_SUBTITLE: &str = "Web framework";

/// One-line description used for `<meta>` and OpenGraph tags
pub const SITE_DESCRIPTION: &str = "A thin, full-stack, web framework";

/// Canonical site origin, with trailing slash
pub const SITE_URL: &str = "https://gracile.js.org/";

/// Issue tracker of the framework itself
pub const ISSUES_URL: &str = "https://github.com/gracile-web/gracile/issues/";

/// Framework repository
pub const REPO_URL: &str = "https://github.com/gracile-web/gracile/";

/// Repository of this website
pub const DOCS_REPO_URL: &str = "https://github.com/gracile-web/website/";

/// Site-relative path of the interactive playground
pub const PLAYGROUND_URL: &str = "/playground/";

/// Path under [`SITE_URL`] that redirects to the Discord invite
pub const DISCORD_INVITE_PATH: &str = "chat/";

/// Direct Discord invite
pub const DISCORD_INVITE_URL: &str = "https://discord.gg/Q8nTZKZ9H4";

static DISCORD_INVITE_ALIAS: OnceLock<String> = OnceLock::new();

/// Site-hosted alias for the Discord invite: [`SITE_URL`] followed by
/// [`DISCORD_INVITE_PATH`]. Computed once per process.
pub fn discord_invite_alias() -> &'static str {
    DISCORD_INVITE_ALIAS
        .get_or_init(|| format!("{}{}", SITE_URL, DISCORD_INVITE_PATH))
        .as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_values() {
        assert_eq!(SITE_TITLE, "Gracile");
        assert_eq!(SITE_SUBTITLE, "Web framework");
        assert_eq!(SITE_DESCRIPTION, "A thin, full-stack, web framework");
        assert_eq!(SITE_URL, "https://gracile.js.org/");
        assert_eq!(ISSUES_URL, "https://github.com/gracile-web/gracile/issues/");
        assert_eq!(REPO_URL, "https://github.com/gracile-web/gracile/");
        assert_eq!(DOCS_REPO_URL, "https://github.com/gracile-web/website/");
        assert_eq!(PLAYGROUND_URL, "/playground/");
        assert_eq!(DISCORD_INVITE_PATH, "chat/");
        assert_eq!(DISCORD_INVITE_URL, "https://discord.gg/Q8nTZKZ9H4");
    }

    #[test]
    fn test_alias_is_site_url_plus_invite_path() {
        assert_eq!(
            discord_invite_alias(),
            format!("{}{}", SITE_URL, DISCORD_INVITE_PATH)
        );
        assert_eq!(discord_invite_alias(), "https://gracile.js.org/chat/");
    }

    #[test]
    fn test_alias_is_stable_across_reads() {
        let first = discord_invite_alias();
        let second = discord_invite_alias();
        assert!(
            std::ptr::eq(first, second),
            "Alias must be computed exactly once"
        );
    }
}
