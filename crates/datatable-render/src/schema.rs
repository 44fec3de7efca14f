//! Column schema resolution from header rows.
//!
//! Header cells bind columns to data fields (`data-field`), mark rank
//! placeholders (`data-rank`), and declare value types (`data-value-type`).
//! Resolution walks every header row and assigns each binding a column index:
//!
//! - each row restarts a running index at -1,
//! - a cell with `colspan="N"` advances the index by N,
//! - otherwise a field or rank cell advances it by 1 and a decorative cell
//!   leaves it unchanged,
//! - while the index is already taken (by an earlier cell of any row), it
//!   advances by 1,
//! - field and rank cells are recorded at the resulting index.
//!
//! The schema is shared across rows, so a second header row's bindings land
//! after the slots the first row already took.
//!
//! ```rust
//! use datatable_render::element::{HeaderCell, HeaderRow};
//! use datatable_render::schema::ColumnSchema;
//!
//! let row = HeaderRow::new()
//!     .cell(HeaderCell::new("Score").attr("data-field", "score"))
//!     .cell(HeaderCell::new("").attr("colspan", "2"))
//!     .cell(HeaderCell::new("#").attr("data-rank", "true"));
//!
//! let schema = ColumnSchema::resolve(&[row]).unwrap();
//! assert_eq!(schema.indices().collect::<Vec<_>>(), vec![0, 3]);
//! ```

use std::collections::BTreeMap;

use crate::element::{HeaderCell, HeaderRow};
use crate::error::{DatatableError, Result};
use crate::format::ValueType;
use crate::options::parse_bool;

pub const FIELD_ATTR: &str = "data-field";
pub const RANK_ATTR: &str = "data-rank";
pub const VALUE_TYPE_ATTR: &str = "data-value-type";
pub const COLSPAN_ATTR: &str = "colspan";

/// A data column bound by a header cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDefinition {
    /// Data field, possibly a dotted path. `None` for rank-only columns.
    pub field: Option<String>,
    pub is_rank: bool,
    pub value_type: Option<ValueType>,
    pub title: String,
    pub column_index: usize,
}

/// Column definitions keyed by column index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: BTreeMap<usize, ColumnDefinition>,
}

impl ColumnSchema {
    /// Resolves the schema for a table header.
    pub fn resolve(rows: &[HeaderRow]) -> Result<Self> {
        let mut columns: BTreeMap<usize, ColumnDefinition> = BTreeMap::new();

        for row in rows {
            let mut index: i64 = -1;
            for cell in &row.cells {
                let binding = Binding::of(cell)?;

                if let Some(span) = colspan(cell)? {
                    index += span;
                } else if binding.is_bound() {
                    index += 1;
                }

                while index >= 0 && columns.contains_key(&(index as usize)) {
                    index += 1;
                }

                if binding.is_bound() {
                    // Bound cells always advance by at least one.
                    let column_index = index as usize;
                    columns.insert(
                        column_index,
                        ColumnDefinition {
                            field: binding.field,
                            is_rank: binding.is_rank,
                            value_type: cell.get(VALUE_TYPE_ATTR).map(ValueType::parse),
                            title: cell.text.clone(),
                            column_index,
                        },
                    );
                }
            }
        }

        Ok(ColumnSchema { columns })
    }

    pub fn get(&self, index: usize) -> Option<&ColumnDefinition> {
        self.columns.get(&index)
    }

    /// Columns in ascending index order.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnDefinition> {
        self.columns.values()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

struct Binding {
    field: Option<String>,
    is_rank: bool,
}

impl Binding {
    fn of(cell: &HeaderCell) -> Result<Self> {
        let is_rank = match cell.get(RANK_ATTR) {
            None => false,
            Some(value) => parse_bool(value).ok_or_else(|| DatatableError::InvalidOption {
                name: RANK_ATTR.to_string(),
                value: value.to_string(),
            })?,
        };
        Ok(Binding {
            field: cell
                .get(FIELD_ATTR)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
            is_rank,
        })
    }

    fn is_bound(&self) -> bool {
        self.field.is_some() || self.is_rank
    }
}

/// Declared colspan. Zero counts as one.
fn colspan(cell: &HeaderCell) -> Result<Option<i64>> {
    let Some(raw) = cell.get(COLSPAN_ATTR) else {
        return Ok(None);
    };
    let span: u32 = raw
        .trim()
        .parse()
        .map_err(|_| DatatableError::InvalidColspan {
            value: raw.to_string(),
        })?;
    Ok(Some(i64::from(span.max(1))))
}
