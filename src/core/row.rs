use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One cell of a host-supplied record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric view of the cell. Text is parsed after stripping `,` grouping.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().replace(',', "").parse::<f64>().ok(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Plain record as delivered by the host, keys in delivery order.
pub type RowRecord = IndexMap<String, FieldValue>;

/// Dataset shapes the dashboard breaks figures down by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BreakdownKind {
    #[default]
    Region,
    Multiplex,
    Version,
    Period,
}

impl BreakdownKind {
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::Multiplex => "multiplex",
            Self::Version => "version",
            Self::Period => "period",
        }
    }
}

/// Names the record keys that feed each chart role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSelector {
    pub label_key: String,
    pub current_key: String,
    pub previous_key: String,
    pub delta_key: String,
}

impl Default for FieldSelector {
    fn default() -> Self {
        Self::for_breakdown(BreakdownKind::default())
    }
}

impl FieldSelector {
    #[must_use]
    pub fn new(label_key: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            current_key: "visitors".to_owned(),
            previous_key: "previous_visitors".to_owned(),
            delta_key: "screen_delta".to_owned(),
        }
    }

    #[must_use]
    pub fn for_breakdown(kind: BreakdownKind) -> Self {
        Self::new(kind.label_key())
    }

    #[must_use]
    pub fn with_current_key(mut self, key: impl Into<String>) -> Self {
        self.current_key = key.into();
        self
    }

    #[must_use]
    pub fn with_previous_key(mut self, key: impl Into<String>) -> Self {
        self.previous_key = key.into();
        self
    }

    #[must_use]
    pub fn with_delta_key(mut self, key: impl Into<String>) -> Self {
        self.delta_key = key.into();
        self
    }

    fn is_selected(&self, key: &str) -> bool {
        key == self.label_key
            || key == self.current_key
            || key == self.previous_key
            || key == self.delta_key
    }

    /// Extracts one chart row. Missing or unparseable numbers become `0`.
    #[must_use]
    pub fn extract(&self, record: &RowRecord) -> DataRow {
        let label = record
            .get(&self.label_key)
            .map(FieldValue::as_text)
            .unwrap_or_default();
        let number = |key: &str| {
            record
                .get(key)
                .and_then(FieldValue::as_number)
                .unwrap_or(0.0)
        };

        let extras = record
            .iter()
            .filter(|(key, _)| !self.is_selected(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        DataRow::new(
            label,
            number(&self.current_key),
            number(&self.previous_key),
            number(&self.delta_key),
        )
        .with_extras(extras)
    }

    #[must_use]
    pub fn extract_all(&self, records: &[RowRecord]) -> Vec<DataRow> {
        records.iter().map(|record| self.extract(record)).collect()
    }
}

/// One category bucket of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    pub label: String,
    pub primary_magnitude: f64,
    #[serde(default)]
    pub previous_magnitude: f64,
    pub secondary_delta: f64,
    #[serde(default)]
    pub extras: IndexMap<String, FieldValue>,
}

impl DataRow {
    /// Builds a row, replacing non-finite numbers with `0` and clamping
    /// negative magnitudes to `0`.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        primary_magnitude: f64,
        previous_magnitude: f64,
        secondary_delta: f64,
    ) -> Self {
        let label = label.into();
        Self {
            primary_magnitude: sanitize_magnitude(&label, "primary_magnitude", primary_magnitude),
            previous_magnitude: sanitize_magnitude(
                &label,
                "previous_magnitude",
                previous_magnitude,
            ),
            secondary_delta: sanitize_finite(&label, "secondary_delta", secondary_delta),
            label,
            extras: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_extras(mut self, extras: IndexMap<String, FieldValue>) -> Self {
        self.extras = extras;
        self
    }

    #[must_use]
    pub fn magnitude_change(&self) -> f64 {
        self.primary_magnitude - self.previous_magnitude
    }
}

fn sanitize_finite(label: &str, field: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(label, field, "non-finite value replaced with 0");
        0.0
    }
}

fn sanitize_magnitude(label: &str, field: &str, value: f64) -> f64 {
    let value = sanitize_finite(label, field, value);
    if value < 0.0 {
        warn!(label, field, value, "negative magnitude clamped to 0");
        0.0
    } else {
        value
    }
}
