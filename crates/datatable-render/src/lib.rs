//! # Datatable Render - Interactive Table Markup from Data Files
//!
//! `datatable-render` turns a declarative table description into the markup of
//! an interactive table widget. The description is a `<table>` element whose
//! header cells bind columns to fields of a YAML data file; the output is the
//! complete table with a filled body, plus the scripts and stylesheets the
//! widget needs.
//!
//! Finding tables in a document and splicing the result back in is left to
//! the host. The host hands each table over as a [`TableElement`].
//!
//! ## Core Concepts
//!
//! - [`RenderSession`]: session-wide settings (the site base URL)
//! - [`TableElement`]: attributes and header rows of one table occurrence
//! - [`ColumnSchema`]: column index → field binding, resolved from the header
//! - [`ValueType`]: how a column formats its values (`int`, `float2`, ...)
//! - [`AssetManifest`]: ordered, de-duplicated script and stylesheet URLs
//! - [`TableRenderer`]: runs the pipeline and produces a [`RenderResult`]
//!
//! ## Quick Start
//!
//! ```rust
//! use datatable_render::{HeaderCell, HeaderRow, RenderSession, TableElement, TableRenderer};
//! use std::io::Write;
//!
//! let mut data = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
//! writeln!(data, "data:\n  - name: baseline\n    acc: 81.254\n  - name: proposed\n    acc: 90.3").unwrap();
//!
//! let element = TableElement::new()
//!     .attr("class", "datatable")
//!     .attr("data-yaml", data.path().to_str().unwrap())
//!     .header_row(
//!         HeaderRow::new()
//!             .cell(HeaderCell::new("Name").attr("data-field", "name"))
//!             .cell(
//!                 HeaderCell::new("Accuracy")
//!                     .attr("data-field", "acc")
//!                     .attr("data-value-type", "float1"),
//!             ),
//!     );
//!
//! let session = RenderSession::new("https://example.org");
//! let result = TableRenderer::new(&session).render(&element).unwrap();
//!
//! assert!(result.markup.contains("  <td>81.3</td>"));
//! assert_eq!(result.scripts().len(), 4);
//! ```
//!
//! ## Value Types
//!
//! | Tag | Example input | Output |
//! |-----|---------------|--------|
//! | `int` | `42` | `42` |
//! | `float2` | `91.256` | `91.26` |
//! | `float2-percentage-interval` | `"45.123 (40.0 - 50.5)"` | `45.12 (40.00 - 50.50)` |
//! | `float1-plusminus` | `"12.34±0.56"` | `12.3±0.6` |
//! | `str` | `""` | `-` |
//!
//! Values that do not fit their column's type render as empty cells and are
//! reported in [`RenderResult::diagnostics`].

pub mod assets;
pub mod element;
mod error;
pub mod filters;
pub mod format;
pub mod interval;
pub mod options;
mod render;
pub mod schema;
pub mod session;
pub mod source;

// Error types
pub use error::{CellError, DatatableError, Result};

pub use assets::{Asset, AssetKind, AssetManifest};
pub use element::{Attribute, Fragment, HeaderCell, HeaderRow, TableElement};
pub use format::{format_value, try_format, Precision, ValueType};
pub use interval::{parse_interval, parse_plus_minus, Interval, PlusMinus};
pub use options::TableOptions;
pub use render::{CellDiagnostic, RenderResult, TableRenderer};
pub use schema::{ColumnDefinition, ColumnSchema};
pub use session::{RenderSession, SessionConfig};
pub use source::Record;

// Template integration
pub use filters::register_filters;
