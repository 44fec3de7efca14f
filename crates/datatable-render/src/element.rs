//! The host-supplied description of one table occurrence.
//!
//! Locating `<table>` elements in a document is the host's job. The host hands
//! each candidate over as a [`TableElement`]: its attributes in source order and
//! its header rows. Header cells keep their original markup as an opaque
//! [`Fragment`] that is echoed verbatim into the rendered table.
//!
//! # Example
//!
//! ```rust
//! use datatable_render::element::{HeaderCell, HeaderRow, TableElement};
//!
//! let element = TableElement::new()
//!     .attr("class", "datatable")
//!     .attr("data-yaml", "content/data/results.yaml")
//!     .header_row(
//!         HeaderRow::new()
//!             .cell(HeaderCell::new("Rank").attr("data-rank", "true"))
//!             .cell(
//!                 HeaderCell::new("Accuracy")
//!                     .attr("data-field", "acc")
//!                     .attr("data-value-type", "float2"),
//!             ),
//!     );
//!
//! assert_eq!(element.get("data-yaml"), Some("content/data/results.yaml"));
//! assert_eq!(
//!     element.header_rows[0].cells[1].markup().as_str(),
//!     r#"<th data-field="acc" data-value-type="float2">Accuracy</th>"#
//! );
//! ```

use std::fmt;

/// A `name="value"` pair as it appears on the source element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Markup captured from the source document and reproduced byte for byte.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    /// Wraps markup as-is.
    pub fn verbatim(markup: impl Into<String>) -> Self {
        Fragment(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Looks up an attribute value by name.
fn find<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.as_str())
}

/// One `<th>` cell of a header row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderCell {
    pub attributes: Vec<Attribute>,
    /// Text content, informational only.
    pub text: String,
    markup: Option<Fragment>,
}

impl HeaderCell {
    /// Creates a cell with the given text content.
    pub fn new(text: impl Into<String>) -> Self {
        HeaderCell {
            attributes: Vec::new(),
            text: text.into(),
            markup: None,
        }
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Sets the original markup of the cell.
    ///
    /// Without it, the markup is synthesized from the attributes and text.
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = Some(Fragment::verbatim(markup));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        find(&self.attributes, name)
    }

    /// The markup echoed into the rendered header.
    pub fn markup(&self) -> Fragment {
        if let Some(markup) = &self.markup {
            return markup.clone();
        }
        let mut out = String::from("<th");
        for attr in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", attr.name, attr.value));
        }
        out.push('>');
        out.push_str(&self.text);
        out.push_str("</th>");
        Fragment(out)
    }
}

/// One `<tr>` of the table header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderRow {
    pub cells: Vec<HeaderCell>,
}

impl HeaderRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, cell: HeaderCell) -> Self {
        self.cells.push(cell);
        self
    }
}

/// A table occurrence handed over by the host document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableElement {
    /// Attributes in source order.
    pub attributes: Vec<Attribute>,
    pub header_rows: Vec<HeaderRow>,
}

impl TableElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Adds a header row.
    pub fn header_row(mut self, row: HeaderRow) -> Self {
        self.header_rows.push(row);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        find(&self.attributes, name)
    }

    /// Whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> Vec<&str> {
        self.get("class")
            .map(|c| c.split_whitespace().collect())
            .unwrap_or_default()
    }
}
