//! Table markup assembly.
//!
//! [`TableRenderer::render`] runs the whole pipeline for one table occurrence:
//! read the options, load the data file, resolve the header into a column
//! schema, format each record, and build the asset manifest.
//!
//! The rendered element has this shape:
//!
//! ```text
//! <table class="datatable" data-id-field="name" data-filter-control="true" data-filter-show-clear="true" >
//! <thead>
//! <tr>
//! <th data-field="name">Name</th>
//! <th data-field="acc" data-value-type="float2">Accuracy</th>
//! </tr>
//! </thead>
//! <tbody>
//! <tr class="best" data-hline="true">
//!   <td>proposed</td>
//!   <td>90.31</td>
//! </tr>
//! </tbody>
//! </table>
//! ```
//!
//! Cells whose field is present are indented; rank cells and cells for absent
//! fields are bare `<td></td>`.

use tracing::{debug, warn};

use crate::assets::AssetManifest;
use crate::element::{HeaderRow, TableElement};
use crate::error::{CellError, Result};
use crate::format::try_format;
use crate::options::{TableOptions, SINGLE_QUOTED_ATTR};
use crate::schema::{ColumnDefinition, ColumnSchema};
use crate::session::RenderSession;
use crate::source::{self, Record};

/// A cell that failed to format and was rendered empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellDiagnostic {
    /// Position of the record among the rendered rows.
    pub row: usize,
    pub column: usize,
    pub field: String,
    pub error: CellError,
}

/// The rendered table and the assets it needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    pub markup: String,
    pub assets: AssetManifest,
    pub diagnostics: Vec<CellDiagnostic>,
}

impl RenderResult {
    pub fn scripts(&self) -> &[String] {
        self.assets.scripts()
    }

    pub fn styles(&self) -> &[String] {
        self.assets.styles()
    }
}

/// Renders table occurrences within one session.
#[derive(Clone, Copy, Debug)]
pub struct TableRenderer<'a> {
    session: &'a RenderSession,
}

impl<'a> TableRenderer<'a> {
    pub fn new(session: &'a RenderSession) -> Self {
        TableRenderer { session }
    }

    /// Renders one table element.
    ///
    /// On error nothing is rendered and the caller should leave the element
    /// as it was.
    pub fn render(&self, element: &TableElement) -> Result<RenderResult> {
        let options = TableOptions::from_element(element)?;

        let records = source::load(&options.source).map_err(|err| {
            warn!(source = %options.source.display(), "table left unrendered: {}", err);
            err
        })?;

        let schema = ColumnSchema::resolve(&element.header_rows).map_err(|err| {
            warn!(source = %options.source.display(), "table left unrendered: {}", err);
            err
        })?;

        Ok(self.render_records(&options, &element.header_rows, &schema, &records))
    }

    /// Renders already loaded records against a resolved schema.
    pub fn render_records(
        &self,
        options: &TableOptions,
        header_rows: &[HeaderRow],
        schema: &ColumnSchema,
        records: &[Record],
    ) -> RenderResult {
        let mut markup = String::new();
        let mut diagnostics = Vec::new();

        open_table(&mut markup, options);
        write_head(&mut markup, header_rows);

        markup.push_str("<tbody>\n");
        for (row, record) in records.iter().enumerate() {
            write_row(&mut markup, &mut diagnostics, options, schema, row, record);
        }
        markup.push_str("</tbody>\n");
        markup.push_str("</table>\n");

        if !diagnostics.is_empty() {
            debug!(
                source = %options.source.display(),
                count = diagnostics.len(),
                "cells rendered empty after formatting failures"
            );
        }

        RenderResult {
            markup,
            assets: AssetManifest::build(self.session, options),
            diagnostics,
        }
    }
}

fn open_table(out: &mut String, options: &TableOptions) {
    out.push_str(&format!("<table class=\"{}\" ", options.css_classes.join(" ")));
    for attr in &options.custom_attributes {
        if attr.name == SINGLE_QUOTED_ATTR {
            out.push_str(&format!("{}='{}' ", attr.name, attr.value));
        } else {
            out.push_str(&format!("{}=\"{}\" ", attr.name, attr.value));
        }
    }
    if options.filter_control {
        out.push_str("data-filter-control=\"true\" data-filter-show-clear=\"true\" ");
    }
    out.push_str(">\n");
}

fn write_head(out: &mut String, rows: &[HeaderRow]) {
    out.push_str("<thead>\n");
    for row in rows {
        out.push_str("<tr>\n");
        for cell in &row.cells {
            out.push_str(cell.markup().as_str());
            out.push('\n');
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</thead>\n");
}

fn write_row(
    out: &mut String,
    diagnostics: &mut Vec<CellDiagnostic>,
    options: &TableOptions,
    schema: &ColumnSchema,
    row: usize,
    record: &Record,
) {
    out.push_str("<tr");
    if options.row_highlighting {
        if let Some(class) = record.row_css() {
            out.push_str(&format!(" class=\"{}\"", class));
        }
    }
    if record.has_hline() {
        out.push_str(" data-hline=\"true\"");
    }
    out.push_str(">\n");

    for column in schema.columns() {
        match cell_body(column, record) {
            None => out.push_str("<td></td>\n"),
            Some(Ok(body)) => out.push_str(&format!("  <td>{}</td>\n", body)),
            Some(Err(error)) => {
                debug!(row, column = column.column_index, "cell rendered empty: {}", error);
                diagnostics.push(CellDiagnostic {
                    row,
                    column: column.column_index,
                    field: column.field.clone().unwrap_or_default(),
                    error,
                });
                out.push_str("  <td></td>\n");
            }
        }
    }

    out.push_str("</tr>\n");
}

/// `None` for rank columns and absent fields.
fn cell_body(
    column: &ColumnDefinition,
    record: &Record,
) -> Option<std::result::Result<String, CellError>> {
    if column.is_rank {
        return None;
    }
    let raw = record.get(column.field.as_deref()?)?;
    Some(try_format(column.value_type.as_ref(), raw))
}
