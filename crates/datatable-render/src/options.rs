//! Table-level options read from the source element's attributes.
//!
//! | Attribute | Option | Default |
//! |-----------|--------|---------|
//! | `data-yaml` | [`TableOptions::source`] | required |
//! | `class` | [`TableOptions::css_classes`] | empty |
//! | `data-filter-control` | [`TableOptions::filter_control`] | `no` |
//! | `data-show-chart` | [`TableOptions::show_chart`] | `no` |
//! | `data-row-highlighting` | [`TableOptions::row_highlighting`] | `no` |
//!
//! All other `data-*` attributes are mirrored onto the rendered element as
//! [`TableOptions::custom_attributes`].

use std::path::PathBuf;

use crate::element::{Attribute, TableElement};
use crate::error::{DatatableError, Result};

pub const SOURCE_ATTR: &str = "data-yaml";
pub const FILTER_CONTROL_ATTR: &str = "data-filter-control";
pub const SHOW_CHART_ATTR: &str = "data-show-chart";
pub const ROW_HIGHLIGHTING_ATTR: &str = "data-row-highlighting";

/// Attribute echoed with single quotes, since its value is JSON.
pub const SINGLE_QUOTED_ATTR: &str = "data-comparison-sets-json";

/// Options for one table occurrence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOptions {
    pub source: PathBuf,
    pub css_classes: Vec<String>,
    pub filter_control: bool,
    /// Declared by the table markup; rendering does not use it.
    pub show_chart: bool,
    pub row_highlighting: bool,
    /// `data-*` attributes to mirror, in source order.
    pub custom_attributes: Vec<Attribute>,
}

impl TableOptions {
    /// Creates options for a source with every flag disabled.
    pub fn new(source: impl Into<PathBuf>) -> Self {
        TableOptions {
            source: source.into(),
            css_classes: Vec::new(),
            filter_control: false,
            show_chart: false,
            row_highlighting: false,
            custom_attributes: Vec::new(),
        }
    }

    /// Reads options from an element's attributes.
    pub fn from_element(element: &TableElement) -> Result<Self> {
        let source = element
            .get(SOURCE_ATTR)
            .filter(|s| !s.is_empty())
            .ok_or(DatatableError::MissingSource)?;

        let mut css_classes: Vec<String> = Vec::new();
        for class in element.classes() {
            if !css_classes.iter().any(|c| c == class) {
                css_classes.push(class.to_string());
            }
        }

        let custom_attributes = element
            .attributes
            .iter()
            .filter(|a| a.name.starts_with("data-"))
            .filter(|a| {
                !matches!(
                    a.name.as_str(),
                    SOURCE_ATTR | FILTER_CONTROL_ATTR | SHOW_CHART_ATTR
                )
            })
            .cloned()
            .collect();

        Ok(TableOptions {
            source: PathBuf::from(source),
            css_classes,
            filter_control: flag(element, FILTER_CONTROL_ATTR)?,
            show_chart: flag(element, SHOW_CHART_ATTR)?,
            row_highlighting: flag(element, ROW_HIGHLIGHTING_ATTR)?,
            custom_attributes,
        })
    }
}

fn flag(element: &TableElement, name: &str) -> Result<bool> {
    match element.get(name) {
        None => Ok(false),
        Some(value) => parse_bool(value).ok_or_else(|| DatatableError::InvalidOption {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Parses the yes/no vocabulary accepted by table attributes.
///
/// ```rust
/// use datatable_render::options::parse_bool;
///
/// assert_eq!(parse_bool("yes"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("maybe"), None);
/// ```
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "yes" | "True" | "true" | "1" => Some(true),
        "no" | "False" | "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element() -> TableElement {
        TableElement::new()
            .attr("class", "datatable striped datatable")
            .attr("data-yaml", "data/results.yaml")
            .attr("data-id-field", "name")
            .attr("data-filter-control", "yes")
            .attr("id", "results")
            .attr("data-show-chart", "true")
            .attr("data-comparison-sets-json", r#"[{"title":"A"}]"#)
    }

    #[test]
    fn reads_source_and_flags() {
        let opts = TableOptions::from_element(&element()).unwrap();
        assert_eq!(opts.source, PathBuf::from("data/results.yaml"));
        assert!(opts.filter_control);
        assert!(opts.show_chart);
        assert!(!opts.row_highlighting);
    }

    #[test]
    fn css_classes_are_an_ordered_set() {
        let opts = TableOptions::from_element(&element()).unwrap();
        assert_eq!(opts.css_classes, vec!["datatable", "striped"]);
    }

    #[test]
    fn mirrors_only_custom_data_attributes() {
        let opts = TableOptions::from_element(&element()).unwrap();
        let names: Vec<&str> = opts
            .custom_attributes
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_eq!(names, vec!["data-id-field", "data-comparison-sets-json"]);
    }

    #[test]
    fn row_highlighting_is_mirrored_and_parsed() {
        let el = TableElement::new()
            .attr("data-yaml", "x.yaml")
            .attr("data-row-highlighting", "true");
        let opts = TableOptions::from_element(&el).unwrap();
        assert!(opts.row_highlighting);
        assert_eq!(opts.custom_attributes[0].name, "data-row-highlighting");
    }

    #[test]
    fn missing_source_is_an_error() {
        let el = TableElement::new().attr("class", "datatable");
        assert!(matches!(
            TableOptions::from_element(&el),
            Err(DatatableError::MissingSource)
        ));
    }

    #[test]
    fn invalid_flag_is_an_error() {
        let el = TableElement::new()
            .attr("data-yaml", "x.yaml")
            .attr("data-filter-control", "sometimes");
        let err = TableOptions::from_element(&el).unwrap_err();
        assert!(matches!(
            err,
            DatatableError::InvalidOption { ref name, .. } if name == "data-filter-control"
        ));
    }
}
