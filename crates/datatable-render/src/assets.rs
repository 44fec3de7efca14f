//! Script and stylesheet manifest for rendered tables.
//!
//! Every rendered table needs the table, charting, and date libraries plus the
//! integration script and styles. Filter control adds one script and one
//! stylesheet, placed directly after the core table entries:
//!
//! | Scripts | Styles |
//! |---------|--------|
//! | `bootstrap-table.min.js` | `bootstrap-table.min.css` |
//! | `bootstrap-table-filter-control.min.js` (filter control) | `bootstrap-table-filter-control.min.css` (filter control) |
//! | `Chart.min.js` | `datatable.min.css` |
//! | `moment.min.js` | |
//! | `datatable.min.js` | |
//!
//! A page with several tables merges their manifests with
//! [`AssetManifest::merge`]; the first occurrence of a URL keeps its position.

use crate::options::TableOptions;
use crate::session::RenderSession;

pub const TABLE_SCRIPT: &str = "/theme/js/bootstrap-table.min.js";
pub const FILTER_CONTROL_SCRIPT: &str = "/theme/js/bootstrap-table-filter-control.min.js";
pub const CHART_SCRIPT: &str = "/theme/js/Chart.min.js";
pub const TIME_SCRIPT: &str = "/theme/js/moment.min.js";
pub const INTEGRATION_SCRIPT: &str = "/theme/js/datatable.min.js";

pub const TABLE_STYLE: &str = "/theme/css/bootstrap-table.min.css";
pub const FILTER_CONTROL_STYLE: &str = "/theme/css/bootstrap-table-filter-control.min.css";
pub const INTEGRATION_STYLE: &str = "/theme/css/datatable.min.css";

/// Kind of asset reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Script,
    Style,
}

/// A script or stylesheet URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    pub url: String,
}

impl Asset {
    pub fn script(url: impl Into<String>) -> Self {
        Asset {
            kind: AssetKind::Script,
            url: url.into(),
        }
    }

    pub fn style(url: impl Into<String>) -> Self {
        Asset {
            kind: AssetKind::Style,
            url: url.into(),
        }
    }

    /// The element that loads this asset in a page head.
    ///
    /// ```rust
    /// use datatable_render::assets::Asset;
    ///
    /// assert_eq!(
    ///     Asset::script("/theme/js/a.js").to_tag(),
    ///     r#"<script type="text/javascript" src="/theme/js/a.js"></script>"#
    /// );
    /// ```
    pub fn to_tag(&self) -> String {
        match self.kind {
            AssetKind::Script => format!(
                r#"<script type="text/javascript" src="{}"></script>"#,
                self.url
            ),
            AssetKind::Style => format!(r#"<link rel="stylesheet" href="{}">"#, self.url),
        }
    }
}

/// Ordered, de-duplicated script and stylesheet URLs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetManifest {
    scripts: Vec<String>,
    styles: Vec<String>,
}

impl AssetManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the manifest one table requires.
    pub fn build(session: &RenderSession, options: &TableOptions) -> Self {
        let mut manifest = AssetManifest::new();

        manifest.add_script(session.url(TABLE_SCRIPT));
        if options.filter_control {
            manifest.add_script(session.url(FILTER_CONTROL_SCRIPT));
        }
        manifest.add_script(session.url(CHART_SCRIPT));
        manifest.add_script(session.url(TIME_SCRIPT));
        manifest.add_script(session.url(INTEGRATION_SCRIPT));

        manifest.add_style(session.url(TABLE_STYLE));
        if options.filter_control {
            manifest.add_style(session.url(FILTER_CONTROL_STYLE));
        }
        manifest.add_style(session.url(INTEGRATION_STYLE));

        manifest
    }

    /// Appends a script unless already present. Returns whether it was added.
    pub fn add_script(&mut self, url: impl Into<String>) -> bool {
        insert_unique(&mut self.scripts, url.into())
    }

    /// Appends a stylesheet unless already present. Returns whether it was added.
    pub fn add_style(&mut self, url: impl Into<String>) -> bool {
        insert_unique(&mut self.styles, url.into())
    }

    /// Merges another manifest into this one, keeping first-appearance order.
    pub fn merge(&mut self, other: &AssetManifest) {
        for url in &other.scripts {
            self.add_script(url.clone());
        }
        for url in &other.styles {
            self.add_style(url.clone());
        }
    }

    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// All assets, scripts first.
    pub fn assets(&self) -> impl Iterator<Item = Asset> + '_ {
        self.scripts
            .iter()
            .map(|u| Asset::script(u.clone()))
            .chain(self.styles.iter().map(|u| Asset::style(u.clone())))
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty() && self.styles.is_empty()
    }
}

fn insert_unique(list: &mut Vec<String>, url: String) -> bool {
    if list.contains(&url) {
        return false;
    }
    list.push(url);
    true
}
