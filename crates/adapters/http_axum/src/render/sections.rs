//! Templates for each [`Section`] of a widget descriptor.

use std::fmt;

use askama::Template;

use dashpush_domain::funnel::{FunnelStage, funnel_bars};
use dashpush_domain::metric::format_number;
use dashpush_domain::objection::{ObjectionCounter, rank_snapshot};
use dashpush_domain::snapshot::Snapshot;
use dashpush_domain::status::Banding;
use dashpush_domain::time::to_iso;
use dashpush_domain::widget::{PERIOD_KEY, Section, TITLE_KEY};

const DEFAULT_TITLE: &str = "Dashboard";

#[derive(Template)]
#[template(path = "sections/header.html")]
pub(super) struct HeaderSection {
    title: String,
    period: Option<String>,
    generated: String,
}

#[derive(Template)]
#[template(path = "sections/stat.html")]
pub(super) struct StatSection {
    label: &'static str,
    value: String,
}

#[derive(Template)]
#[template(path = "sections/banded_rate.html")]
pub(super) struct BandedRateSection {
    label: &'static str,
    value: String,
    class: &'static str,
    status: &'static str,
}

#[derive(Template)]
#[template(path = "sections/bars.html")]
pub(super) struct BarsSection {
    kind: &'static str,
    rows: Vec<BarRow>,
}

struct BarRow {
    label: &'static str,
    /// Width in percent with one decimal.
    width: String,
    value: String,
    highlighted: bool,
}

impl BarRow {
    fn new(label: &'static str, width_percent: f64, value: String, highlighted: bool) -> Self {
        Self {
            label,
            width: format!("{width_percent:.1}"),
            value,
            highlighted,
        }
    }
}

#[derive(Template)]
#[template(path = "sections/list.html")]
pub(super) struct ListSection {
    label: &'static str,
    items: Vec<String>,
}

/// One rendered section, written into the widget page in descriptor order.
pub(super) enum SectionHtml {
    Header(HeaderSection),
    Stat(StatSection),
    BandedRate(BandedRateSection),
    Bars(BarsSection),
    List(ListSection),
}

impl fmt::Display for SectionHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(section) => fmt::Display::fmt(section, f),
            Self::Stat(section) => fmt::Display::fmt(section, f),
            Self::BandedRate(section) => fmt::Display::fmt(section, f),
            Self::Bars(section) => fmt::Display::fmt(section, f),
            Self::List(section) => fmt::Display::fmt(section, f),
        }
    }
}

pub(super) fn render(section: &Section, snapshot: &Snapshot) -> SectionHtml {
    match *section {
        Section::Header => SectionHtml::Header(header(snapshot)),
        Section::Stat { label, key } => SectionHtml::Stat(stat(label, key, snapshot)),
        Section::BandedRate {
            label,
            key,
            banding,
        } => SectionHtml::BandedRate(banded_rate(label, key, &banding, snapshot)),
        Section::Funnel { stages } => SectionHtml::Bars(funnel(stages, snapshot)),
        Section::Objections { counters } => SectionHtml::Bars(objections(counters, snapshot)),
        Section::List { label, key } => SectionHtml::List(list(label, key, snapshot)),
    }
}

fn header(snapshot: &Snapshot) -> HeaderSection {
    HeaderSection {
        title: snapshot
            .text(TITLE_KEY)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        period: snapshot.text(PERIOD_KEY),
        generated: snapshot
            .generated_at()
            .unwrap_or_else(|| to_iso(snapshot.received_at)),
    }
}

fn stat(label: &'static str, key: &str, snapshot: &Snapshot) -> StatSection {
    StatSection {
        label,
        value: snapshot.text(key).unwrap_or_else(|| "0".to_string()),
    }
}

fn banded_rate(
    label: &'static str,
    key: &str,
    banding: &Banding,
    snapshot: &Snapshot,
) -> BandedRateSection {
    let value = snapshot.number(key);
    let band = banding.classify(value);
    BandedRateSection {
        label,
        value: format_number(value),
        class: band.css_class(),
        status: banding.label(band),
    }
}

fn funnel(stages: &[FunnelStage], snapshot: &Snapshot) -> BarsSection {
    let rows = funnel_bars(stages, snapshot)
        .into_iter()
        .map(|bar| BarRow::new(bar.label, bar.width_percent, bar.rate_text, false))
        .collect();
    BarsSection {
        kind: "funnel",
        rows,
    }
}

fn objections(counters: &[ObjectionCounter], snapshot: &Snapshot) -> BarsSection {
    let rows = rank_snapshot(counters, snapshot)
        .into_iter()
        .map(|row| {
            BarRow::new(
                row.label,
                row.width_percent,
                format_number(row.count),
                row.highlighted,
            )
        })
        .collect();
    BarsSection {
        kind: "objections",
        rows,
    }
}

fn list(label: &'static str, key: &str, snapshot: &Snapshot) -> ListSection {
    ListSection {
        label,
        items: snapshot.list(key),
    }
}
