use pelagic_naming::{GLOBAL_SETTING, HOME_PAGE, JOURNAL_ARTICLE, JOURNAL_PAGE, content_type_name};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::ConfigError;

/// Default front-end address used for preview links.
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";
/// Placeholder preview secret; must be overridden outside development.
pub const DEFAULT_PREVIEW_SECRET: &str = "your-secret-key-change-in-production";

/// Characters escaped in the `path` query value. Everything but ASCII
/// alphanumerics and `-_.!~*'()`, so `/` becomes `%2F` and a space `%20`.
const PATH_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Draft-preview settings for the admin panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    pub enabled: bool,
    /// Front-end base URL. Also the only origin allowed to embed previews.
    pub client_url: String,
    /// Shared secret the front-end checks before enabling draft mode.
    pub secret: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            client_url: DEFAULT_CLIENT_URL.to_string(),
            secret: DEFAULT_PREVIEW_SECRET.to_string(),
        }
    }
}

impl PreviewConfig {
    /// Origins allowed to frame the preview.
    pub fn allowed_origins(&self) -> &str {
        &self.client_url
    }

    /// Returns true while the placeholder secret is still in use.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_PREVIEW_SECRET
    }

    /// Draft-mode URL on the front-end for a site pathname.
    ///
    /// Format: `{client_url}/api/draft?secret={secret}&path={pathname}`. Only
    /// the pathname is percent-encoded; the secret is written as configured.
    pub fn draft_url(&self, pathname: &str) -> Result<String, ConfigError> {
        Url::parse(&self.client_url)
            .map_err(|e| ConfigError::InvalidClientUrl(self.client_url.clone(), e))?;
        Ok(format!(
            "{}/api/draft?secret={}&path={}",
            self.client_url.trim_end_matches('/'),
            self.secret,
            utf8_percent_encode(pathname, PATH_VALUE)
        ))
    }
}

/// Front-end pathname that renders a document of the given content type.
///
/// `slug` is only consulted for journal articles. Content types without a
/// page of their own (global settings, unknown types) have no preview.
pub fn preview_pathname(uid: &str, slug: Option<&str>) -> Option<String> {
    match content_type_name(uid)? {
        HOME_PAGE => Some("/".to_string()),
        JOURNAL_ARTICLE => match slug.filter(|s| !s.is_empty()) {
            Some(slug) => Some(format!("/journal/{}", slug)),
            None => Some("/journal".to_string()),
        },
        JOURNAL_PAGE => Some("/journal".to_string()),
        GLOBAL_SETTING => None,
        _ => None,
    }
}
