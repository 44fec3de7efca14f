//! MiniJinja filter registration.
//!
//! Hosts that build their own pages with MiniJinja can format values exactly
//! like the table body does:
//!
//! | Filter | Usage |
//! |--------|-------|
//! | `format_value` | `{{ row.acc \| format_value('float2') }}` |
//! | `asset_tags` | `{{ scripts \| asset_tags('script') }}` |

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::assets::{Asset, AssetKind};
use crate::format::{format_value, ValueType};

/// Registers the table filters on a MiniJinja environment.
pub fn register_filters(env: &mut Environment<'_>) {
    env.add_filter(
        "format_value",
        |value: Value, value_type: Option<String>| -> Result<String, Error> {
            let raw = serde_json::to_value(&value)
                .map_err(|e| Error::new(ErrorKind::BadSerialization, e.to_string()))?;
            let value_type = value_type.as_deref().map(ValueType::parse);
            Ok(format_value(value_type.as_ref(), &raw))
        },
    );

    env.add_filter(
        "asset_tags",
        |urls: Vec<String>, kind: String| -> Result<Value, Error> {
            let kind = match kind.as_str() {
                "script" => AssetKind::Script,
                "style" => AssetKind::Style,
                other => {
                    return Err(Error::new(
                        ErrorKind::InvalidOperation,
                        format!("unknown asset kind '{}', expected 'script' or 'style'", other),
                    ))
                }
            };
            let tags: Vec<String> = urls
                .into_iter()
                .map(|url| Asset { kind, url }.to_tag())
                .collect();
            Ok(Value::from_safe_string(tags.join("\n")))
        },
    );
}
