//! Snapshot — the single persisted unit of dashboard state.
//!
//! A snapshot is either a structured metrics document or a raw HTML page.
//! Every accepted write replaces the previous snapshot wholesale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PayloadError;
use crate::metric::MetricValue;
use crate::time::Timestamp;

/// Metric name to value mapping, ordered by name so the persisted file is
/// stable between writes.
pub type Metrics = BTreeMap<String, MetricValue>;

/// Key holding the generation timestamp supplied by the pushing tool.
pub const GENERATED_AT_KEY: &str = "generated_at";

/// What a snapshot holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SnapshotContent {
    /// Structured metrics rendered through widgets.
    Metrics(Metrics),
    /// A complete HTML document served as-is.
    Html(String),
}

/// The latest accepted payload together with the time it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub received_at: Timestamp,
    pub content: SnapshotContent,
}

impl Snapshot {
    #[must_use]
    pub fn new(content: SnapshotContent, received_at: Timestamp) -> Self {
        Self {
            received_at,
            content,
        }
    }

    /// The structured metrics, or `None` for an HTML snapshot.
    #[must_use]
    pub fn metrics(&self) -> Option<&Metrics> {
        match &self.content {
            SnapshotContent::Metrics(metrics) => Some(metrics),
            SnapshotContent::Html(_) => None,
        }
    }

    /// The raw HTML document, or `None` for a metrics snapshot.
    #[must_use]
    pub fn html(&self) -> Option<&str> {
        match &self.content {
            SnapshotContent::Html(html) => Some(html),
            SnapshotContent::Metrics(_) => None,
        }
    }

    #[must_use]
    pub fn metric(&self, key: &str) -> Option<&MetricValue> {
        self.metrics().and_then(|metrics| metrics.get(key))
    }

    /// Lenient numeric reading of `key`; missing keys read as `0`.
    #[must_use]
    pub fn number(&self, key: &str) -> f64 {
        self.metric(key).map_or(0.0, MetricValue::as_number)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<String> {
        self.metric(key).map(MetricValue::as_text)
    }

    #[must_use]
    pub fn list(&self, key: &str) -> Vec<String> {
        self.metric(key).map(MetricValue::as_list).unwrap_or_default()
    }

    /// Generation time reported by the pushing tool, if any.
    #[must_use]
    pub fn generated_at(&self) -> Option<String> {
        self.text(GENERATED_AT_KEY)
    }
}

/// A write request body before it becomes snapshot content.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Already-structured metrics.
    Structured(Metrics),
    /// Serialized JSON text, parsed on conversion.
    Text(String),
    /// Raw HTML stored verbatim.
    Html(String),
}

impl Payload {
    /// Turn the payload into snapshot content, parsing text if needed.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] when text is not valid JSON or is not a
    /// JSON object at the top level.
    pub fn into_content(self) -> Result<SnapshotContent, PayloadError> {
        match self {
            Self::Structured(metrics) => Ok(SnapshotContent::Metrics(metrics)),
            Self::Html(html) => Ok(SnapshotContent::Html(html)),
            Self::Text(text) => parse_metrics(&text).map(SnapshotContent::Metrics),
        }
    }
}

fn parse_metrics(text: &str) -> Result<Metrics, PayloadError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(PayloadError::InvalidJson)?;
    match value {
        serde_json::Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<MetricValue>(value)
                    .map(|metric| (key, metric))
                    .map_err(PayloadError::InvalidJson)
            })
            .collect(),
        serde_json::Value::Array(_) => Err(PayloadError::NotAnObject("array")),
        serde_json::Value::String(_) => Err(PayloadError::NotAnObject("string")),
        serde_json::Value::Number(_) => Err(PayloadError::NotAnObject("number")),
        serde_json::Value::Bool(_) => Err(PayloadError::NotAnObject("boolean")),
        serde_json::Value::Null => Err(PayloadError::NotAnObject("null")),
    }
}
