//! Property-based tests for formatting, interval parsing and schema resolution.

use datatable_render::{
    format_value, parse_interval, AssetManifest, ColumnSchema, HeaderCell, HeaderRow,
    RenderSession, TableOptions, ValueType,
};
use proptest::prelude::*;
use serde_json::json;

// ============================================================================
// Strategies
// ============================================================================

/// A decimal with a mandatory fractional part, as written in data files.
fn decimal() -> impl Strategy<Value = (String, f64)> {
    (any::<bool>(), 0u32..100_000, 1u32..10_000).prop_map(|(neg, int, frac)| {
        let text = format!("{}{}.{}", if neg { "-" } else { "" }, int, frac);
        let value: f64 = text.parse().unwrap();
        (text, value)
    })
}

#[derive(Debug, Clone)]
enum CellKind {
    Field,
    Rank,
    Decorative,
}

fn header_cell() -> impl Strategy<Value = HeaderCell> {
    (
        prop_oneof![Just(CellKind::Field), Just(CellKind::Rank), Just(CellKind::Decorative)],
        prop::option::of(0u32..5),
        "[a-z]{1,6}",
    )
        .prop_map(|(kind, colspan, name)| {
            let mut cell = HeaderCell::new(name.clone());
            cell = match kind {
                CellKind::Field => cell.attr("data-field", name),
                CellKind::Rank => cell.attr("data-rank", "true"),
                CellKind::Decorative => cell,
            };
            if let Some(span) = colspan {
                cell = cell.attr("colspan", span.to_string());
            }
            cell
        })
}

fn header_rows() -> impl Strategy<Value = Vec<HeaderRow>> {
    prop::collection::vec(
        prop::collection::vec(header_cell(), 0..8).prop_map(|cells| HeaderRow { cells }),
        0..4,
    )
}

fn bound_cells(rows: &[HeaderRow]) -> usize {
    rows.iter()
        .flat_map(|r| &r.cells)
        .filter(|c| c.get("data-field").is_some() || c.get("data-rank").is_some())
        .count()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// floatN always yields exactly N fractional digits.
    #[test]
    fn float_has_exact_precision(value in -1.0e9f64..1.0e9, digits in 1u8..=4) {
        let vt = ValueType::parse(&format!("float{}", digits));
        let out = format_value(Some(&vt), &json!(value));
        let (_, frac) = out.split_once('.').expect("decimal point");
        prop_assert_eq!(frac.len(), digits as usize);
    }

    /// Well-formed interval strings yield their three numbers in order.
    #[test]
    fn interval_extracts_three_numbers(
        (v_text, v) in decimal(),
        (lo_text, lo) in decimal(),
        (hi_text, hi) in decimal(),
    ) {
        let input = format!("{} ({} - {})", v_text, lo_text, hi_text);
        let parsed = parse_interval(&input).expect("interval shape");
        prop_assert_eq!(parsed.value, v);
        prop_assert_eq!(parsed.low, lo);
        prop_assert_eq!(parsed.high, hi);
    }

    /// Strings without a decimal point never parse as intervals.
    #[test]
    fn interval_rejects_strings_without_decimals(input in "[^.]*") {
        prop_assert!(parse_interval(&input).is_none());
    }

    /// Every bound header cell gets its own column index.
    #[test]
    fn schema_indices_are_unique(rows in header_rows()) {
        let schema = ColumnSchema::resolve(&rows).unwrap();
        prop_assert_eq!(schema.len(), bound_cells(&rows));
        for column in schema.columns() {
            prop_assert_eq!(schema.get(column.column_index), Some(column));
        }
    }

    /// Filter control adds exactly one script and one stylesheet.
    #[test]
    fn filter_control_adds_one_of_each(base in "(https?://[a-z]{1,8}\\.test)?") {
        let session = RenderSession::new(base);
        let mut options = TableOptions::new("data.yaml");
        let plain = AssetManifest::build(&session, &options);
        options.filter_control = true;
        let filtered = AssetManifest::build(&session, &options);

        prop_assert_eq!(plain.scripts().len(), 4);
        prop_assert_eq!(plain.styles().len(), 2);
        prop_assert_eq!(filtered.scripts().len(), 5);
        prop_assert_eq!(filtered.styles().len(), 3);
        prop_assert_eq!(&filtered.scripts()[0], &plain.scripts()[0]);
        prop_assert_eq!(&filtered.scripts()[2..], &plain.scripts()[1..]);
        prop_assert_eq!(&filtered.styles()[2..], &plain.styles()[1..]);
    }
}
