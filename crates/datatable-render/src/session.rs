//! Rendering session configuration.
//!
//! A [`RenderSession`] is created once, before the first table is rendered,
//! and passed by reference to every render call. It is immutable, so a single
//! session can be shared by renders running on several threads.

use serde::Deserialize;

use crate::error::Result;

/// Session configuration as it appears in a settings file.
///
/// ```rust
/// use datatable_render::session::SessionConfig;
///
/// let config = SessionConfig::from_yaml("site_url: https://example.org\n").unwrap();
/// let session = config.into_session();
/// assert_eq!(session.site_base_url(), "https://example.org");
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Prefix applied to every generated asset URL.
    pub site_url: String,
}

impl SessionConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn into_session(self) -> RenderSession {
        RenderSession::new(self.site_url)
    }
}

/// Session-wide state shared by every table rendered in the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSession {
    site_base_url: String,
}

impl RenderSession {
    /// Creates a session. A trailing `/` on the base URL is dropped so that
    /// asset paths join cleanly.
    pub fn new(site_base_url: impl Into<String>) -> Self {
        let mut site_base_url = site_base_url.into();
        while site_base_url.ends_with('/') {
            site_base_url.pop();
        }
        RenderSession { site_base_url }
    }

    pub fn site_base_url(&self) -> &str {
        &self.site_base_url
    }

    /// Joins an absolute site path (`/theme/js/x.js`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.site_base_url, path)
    }
}
