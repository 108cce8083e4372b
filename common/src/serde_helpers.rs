//! Lenient decoding for numeric columns.
//!
//! The remote API stores scores, KKM values and averages as decimals, which
//! reach the client either as JSON numbers or as numeric strings (`"80.50"`),
//! and sometimes as `null` or `""`. Every numeric field of the wire model goes
//! through one of the helpers below so the rest of the crate only sees `f64`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Raw shape of a decimal value as it appears on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Number(f64),
    Text(String),
}

impl RawDecimal {
    fn into_option(self) -> Result<Option<f64>, String> {
        match self {
            RawDecimal::Number(n) => Ok(Some(n)),
            RawDecimal::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| format!("invalid decimal value: {:?}", s))
            }
        }
    }
}

/// Decodes `number | "number" | "" | null` into `Option<f64>`.
pub fn optional_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDecimal>::deserialize(deserializer)? {
        Some(raw) => raw.into_option().map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// Decodes a decimal that must be present.
pub fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    optional_decimal(deserializer)?.ok_or_else(|| D::Error::custom("missing decimal value"))
}

/// Raw shape of a short label the API sends as either text or a number
/// (class levels come through as `1` or `"1"`).
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Number(serde_json::Number),
    Text(String),
}

/// Decodes `"text" | number | null` into `Option<String>`.
pub fn optional_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawLabel>::deserialize(deserializer)? {
        Some(RawLabel::Number(n)) => Some(n.to_string()),
        Some(RawLabel::Text(s)) => Some(s),
        None => None,
    })
}
