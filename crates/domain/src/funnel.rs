//! Funnel stages and their proportional bars.

use crate::metric::MetricValue;
use crate::snapshot::Snapshot;

/// A funnel stage and the metric key holding its rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunnelStage {
    pub label: &'static str,
    pub key: &'static str,
}

pub const FUNNEL_STAGES: [FunnelStage; 5] = [
    FunnelStage {
        label: "Visitors",
        key: "funnel_visitors_rate",
    },
    FunnelStage {
        label: "Engaged",
        key: "funnel_engaged_rate",
    },
    FunnelStage {
        label: "Qualified",
        key: "funnel_qualified_rate",
    },
    FunnelStage {
        label: "Booked",
        key: "funnel_booked_rate",
    },
    FunnelStage {
        label: "Converted",
        key: "funnel_converted_rate",
    },
];

/// Text shown when a stage has no rate at all.
pub const MISSING_RATE_TEXT: &str = "0%";

/// A rendered funnel row: the verbatim rate text plus a numeric width.
#[derive(Debug, Clone, PartialEq)]
pub struct FunnelBar {
    pub label: &'static str,
    pub rate_text: String,
    /// Parsed rate clamped to `0..=100`.
    pub width_percent: f64,
}

impl FunnelBar {
    #[must_use]
    pub fn new(label: &'static str, value: Option<&MetricValue>) -> Self {
        match value {
            Some(value) => Self {
                label,
                rate_text: value.as_text(),
                width_percent: value.as_number().clamp(0.0, 100.0),
            },
            None => Self {
                label,
                rate_text: MISSING_RATE_TEXT.to_string(),
                width_percent: 0.0,
            },
        }
    }
}

/// Build the bars for `stages` from a snapshot.
#[must_use]
pub fn funnel_bars(stages: &[FunnelStage], snapshot: &Snapshot) -> Vec<FunnelBar> {
    stages
        .iter()
        .map(|stage| FunnelBar::new(stage.label, snapshot.metric(stage.key)))
        .collect()
}
