//! Widget kinds and their declarative descriptors.
//!
//! Every widget is a list of [`Section`]s bound to metric keys. Renderers
//! walk the sections; nothing here knows about HTML.

use std::fmt;
use std::str::FromStr;

use crate::funnel::{FUNNEL_STAGES, FunnelStage};
use crate::objection::{OBJECTION_COUNTERS, ObjectionCounter};
use crate::status::{ABANDONMENT, Banding, CONVERSION};

/// Keys read by [`Section::Header`].
pub const TITLE_KEY: &str = "title";
pub const PERIOD_KEY: &str = "period";

/// A selectable widget, addressed by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Header,
    AbandonRate,
    FullFunnel,
    Insights,
    Engagement,
    Conversions,
    Funnel,
    Objections,
    Recommendations,
}

impl WidgetKind {
    pub const ALL: [Self; 9] = [
        Self::Header,
        Self::AbandonRate,
        Self::FullFunnel,
        Self::Insights,
        Self::Engagement,
        Self::Conversions,
        Self::Funnel,
        Self::Objections,
        Self::Recommendations,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::AbandonRate => "abandon-rate",
            Self::FullFunnel => "full-funnel",
            Self::Insights => "insights",
            Self::Engagement => "engagement",
            Self::Conversions => "conversions",
            Self::Funnel => "funnel",
            Self::Objections => "objections",
            Self::Recommendations => "recommendations",
        }
    }

    #[must_use]
    pub fn descriptor(self) -> &'static WidgetDescriptor {
        match self {
            Self::Header => &HEADER,
            Self::AbandonRate => &ABANDON_RATE,
            Self::FullFunnel => &FULL_FUNNEL,
            Self::Insights => &INSIGHTS,
            Self::Engagement => &ENGAGEMENT,
            Self::Conversions => &CONVERSIONS,
            Self::Funnel => &FUNNEL,
            Self::Objections => &OBJECTIONS,
            Self::Recommendations => &RECOMMENDATIONS,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned when a slug names no known widget.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown widget kind {0:?}")]
pub struct UnknownWidget(pub String);

impl FromStr for WidgetKind {
    type Err = UnknownWidget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| UnknownWidget(s.to_string()))
    }
}

/// One block of a widget layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    /// Dashboard title, reporting period and generation time.
    Header,
    /// A single figure shown as-is.
    Stat {
        label: &'static str,
        key: &'static str,
    },
    /// A rate with a status band.
    BandedRate {
        label: &'static str,
        key: &'static str,
        banding: Banding,
    },
    /// Proportional bars, one per stage.
    Funnel { stages: &'static [FunnelStage] },
    /// Counters ranked by count with the leader highlighted.
    Objections {
        counters: &'static [ObjectionCounter],
    },
    /// Ordered free-text items.
    List {
        label: &'static str,
        key: &'static str,
    },
}

/// Static layout of a widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetDescriptor {
    pub title: &'static str,
    pub sections: &'static [Section],
}

const ABANDONMENT_RATE: Section = Section::BandedRate {
    label: "Abandonment Rate",
    key: "abandonment_rate",
    banding: ABANDONMENT,
};

const CONVERSION_RATE: Section = Section::BandedRate {
    label: "Funnel Conversion",
    key: "funnel_conversion_rate",
    banding: CONVERSION,
};

const FUNNEL_BARS: Section = Section::Funnel {
    stages: &FUNNEL_STAGES,
};

const OBJECTION_CHART: Section = Section::Objections {
    counters: &OBJECTION_COUNTERS,
};

const RECOMMENDATION_LIST: Section = Section::List {
    label: "Recommendations",
    key: "recommendations",
};

static HEADER: WidgetDescriptor = WidgetDescriptor {
    title: "Overview",
    sections: &[Section::Header],
};

static ABANDON_RATE: WidgetDescriptor = WidgetDescriptor {
    title: "Abandonment",
    sections: &[
        ABANDONMENT_RATE,
        Section::Stat {
            label: "Abandoned Conversations",
            key: "abandoned_conversations",
        },
    ],
};

static FULL_FUNNEL: WidgetDescriptor = WidgetDescriptor {
    title: "Full Funnel",
    sections: &[CONVERSION_RATE, FUNNEL_BARS],
};

static INSIGHTS: WidgetDescriptor = WidgetDescriptor {
    title: "Insights",
    sections: &[OBJECTION_CHART, RECOMMENDATION_LIST],
};

static ENGAGEMENT: WidgetDescriptor = WidgetDescriptor {
    title: "Engagement",
    sections: &[
        Section::Stat {
            label: "Total Conversations",
            key: "total_conversations",
        },
        Section::Stat {
            label: "Engaged Conversations",
            key: "engaged_conversations",
        },
        ABANDONMENT_RATE,
    ],
};

static CONVERSIONS: WidgetDescriptor = WidgetDescriptor {
    title: "Conversions",
    sections: &[
        CONVERSION_RATE,
        Section::Stat {
            label: "Conversions",
            key: "conversions",
        },
    ],
};

static FUNNEL: WidgetDescriptor = WidgetDescriptor {
    title: "Funnel",
    sections: &[FUNNEL_BARS],
};

static OBJECTIONS: WidgetDescriptor = WidgetDescriptor {
    title: "Top Objections",
    sections: &[OBJECTION_CHART],
};

static RECOMMENDATIONS: WidgetDescriptor = WidgetDescriptor {
    title: "Recommendations",
    sections: &[RECOMMENDATION_LIST],
};
