//! Status banding of rate metrics.

use serde::Serialize;

/// Which side of the scale is healthy for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

/// One of three health bands a rate falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBand {
    Good,
    Monitor,
    NeedsAttention,
}

impl StatusBand {
    /// CSS class suffix used by the widget templates.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Monitor => "monitor",
            Self::NeedsAttention => "attention",
        }
    }
}

/// Two-threshold banding for a single metric.
///
/// Thresholds are inclusive: reaching `good` is good, reaching `bad` is bad,
/// anything strictly between is [`StatusBand::Monitor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Banding {
    pub direction: Direction,
    pub good: f64,
    pub bad: f64,
    /// Label shown for [`StatusBand::Good`] ("Good", "On Track", ...).
    pub good_label: &'static str,
}

/// Conversation abandonment: lower is better.
pub const ABANDONMENT: Banding = Banding {
    direction: Direction::LowerIsBetter,
    good: 20.0,
    bad: 40.0,
    good_label: "Good",
};

/// Funnel conversion: higher is better.
pub const CONVERSION: Banding = Banding {
    direction: Direction::HigherIsBetter,
    good: 15.0,
    bad: 5.0,
    good_label: "On Track",
};

impl Banding {
    #[must_use]
    pub fn classify(&self, value: f64) -> StatusBand {
        match self.direction {
            Direction::LowerIsBetter if value <= self.good => StatusBand::Good,
            Direction::LowerIsBetter if value >= self.bad => StatusBand::NeedsAttention,
            Direction::HigherIsBetter if value >= self.good => StatusBand::Good,
            Direction::HigherIsBetter if value <= self.bad => StatusBand::NeedsAttention,
            _ => StatusBand::Monitor,
        }
    }

    #[must_use]
    pub fn label(&self, band: StatusBand) -> &'static str {
        match band {
            StatusBand::Good => self.good_label,
            StatusBand::Monitor => "Monitor",
            StatusBand::NeedsAttention => "Needs Attention",
        }
    }
}
