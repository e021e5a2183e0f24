//! Raw expense records as delivered by the data source
//!
//! Records are read-only to the dashboard. Decoding is lenient per field so a
//! single odd record never rejects the whole payload: validation happens later
//! in the aggregation pass.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A single expense record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Project identifier; absent or empty values never reach project views
    #[serde(alias = "proyecto", default, deserialize_with = "lenient_text")]
    pub project: Option<String>,

    /// Date-only (`YYYY-MM-DD`) or timestamp string
    #[serde(alias = "fecha", default, deserialize_with = "lenient_text")]
    pub date: Option<String>,

    /// Amount as a number or a numeric string
    #[serde(alias = "monto", default)]
    pub amount: RawAmount,

    /// Free-form description
    #[serde(
        alias = "descripcion",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl ExpenseRecord {
    /// Create a record from its three semantic fields
    pub fn new(project: impl Into<String>, date: impl Into<String>, amount: RawAmount) -> Self {
        Self {
            project: Some(project.into()),
            date: Some(date.into()),
            amount,
            description: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The project identifier, if present and non-empty
    pub fn project_id(&self) -> Option<&str> {
        self.project.as_deref().filter(|p| !p.is_empty())
    }

    /// Decode one payload element; anything that is not a record becomes an
    /// empty record, which aggregation later skips for its missing date
    pub fn from_value_lenient(value: Value) -> Self {
        Self::deserialize(value).unwrap_or_else(|e| {
            tracing::debug!("unreadable record: {}", e);
            Self::default()
        })
    }
}

/// Amount field exactly as received
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawAmount {
    /// Field missing or null
    #[default]
    Missing,
    /// JSON number
    Number(f64),
    /// JSON string, parsed on demand
    Text(String),
    /// Any other JSON type (bool, array, object)
    Other,
}

impl RawAmount {
    /// Create a textual amount
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Parse the amount with `parseFloat` semantics; `None` when invalid
    pub fn parse(&self) -> Option<f64> {
        match self {
            Self::Number(n) if !n.is_nan() => Some(*n),
            Self::Text(s) => parse_float_prefix(s),
            _ => None,
        }
    }

    /// Amount used by bucket totals: invalid values contribute zero
    pub fn value_or_zero(&self) -> f64 {
        self.parse().unwrap_or(0.0)
    }

    /// Whether the amount counts toward global statistics
    pub fn is_valid(&self) -> bool {
        self.parse().is_some()
    }
}

impl<'de> Deserialize<'de> for RawAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => Self::Missing,
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Other),
            Value::String(s) => Self::Text(s),
            _ => Self::Other,
        })
    }
}

impl Serialize for RawAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Missing | Self::Other => serializer.serialize_none(),
        }
    }
}

/// Accept strings, stringify numbers, treat everything else as absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Parse the longest numeric prefix of `text`, skipping leading whitespace
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = match bytes.first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };

    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map(|rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
        .unwrap_or(0)
}
