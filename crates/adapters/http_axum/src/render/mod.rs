//! Server-side HTML rendering of widgets and the index page.
//!
//! Pages are askama templates under `templates/`, built from the widget
//! kind, the current snapshot and the [`ViewConfig`]. An absent snapshot (or
//! one without metrics) always produces the "waiting for data" placeholder.

mod sections;
pub mod theme;

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use dashpush_domain::snapshot::Snapshot;
use dashpush_domain::time::to_iso;
use dashpush_domain::widget::WidgetKind;

use self::sections::SectionHtml;
pub use theme::{Theme, Units};

/// Placeholder text shown until the first metrics snapshot arrives.
pub const WAITING_TEXT: &str = "Waiting for data…";

/// Presentation settings shared by every rendered page.
#[derive(Debug, Clone, Default)]
pub struct ViewConfig {
    pub theme: Theme,
    /// Auto-refresh period for embedded pages; `0` disables refreshing.
    pub refresh_seconds: u32,
}

/// Widget page template.
#[derive(Template)]
#[template(path = "widget.html")]
pub struct WidgetPage {
    title: &'static str,
    refresh_seconds: u32,
    stylesheet: String,
    waiting: bool,
    waiting_text: &'static str,
    sections: Vec<SectionHtml>,
}

impl IntoResponse for WidgetPage {
    fn into_response(self) -> Response {
        html_response(&self)
    }
}

/// Status page template listing every widget endpoint.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    title: &'static str,
    refresh_seconds: u32,
    stylesheet: String,
    last_update: Option<String>,
    links: Vec<WidgetLink>,
}

struct WidgetLink {
    slug: &'static str,
    title: &'static str,
}

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        html_response(&self)
    }
}

/// Page for an unknown widget kind.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    title: &'static str,
    refresh_seconds: u32,
    stylesheet: String,
    slug: String,
}

impl IntoResponse for NotFoundPage {
    fn into_response(self) -> Response {
        (StatusCode::NOT_FOUND, html_response(&self)).into_response()
    }
}

/// Build the page for `kind` from the current snapshot.
#[must_use]
pub fn render_widget(kind: WidgetKind, snapshot: Option<&Snapshot>, view: &ViewConfig) -> WidgetPage {
    let descriptor = kind.descriptor();
    let sections: Vec<SectionHtml> = snapshot
        .filter(|snapshot| snapshot.metrics().is_some())
        .map(|snapshot| {
            descriptor
                .sections
                .iter()
                .map(|section| sections::render(section, snapshot))
                .collect()
        })
        .unwrap_or_default();

    WidgetPage {
        title: descriptor.title,
        refresh_seconds: view.refresh_seconds,
        stylesheet: view.theme.stylesheet(),
        waiting: sections.is_empty(),
        waiting_text: WAITING_TEXT,
        sections,
    }
}

/// Build the status page.
#[must_use]
pub fn render_index(snapshot: Option<&Snapshot>, view: &ViewConfig) -> IndexPage {
    IndexPage {
        title: "Dashboard",
        refresh_seconds: view.refresh_seconds,
        stylesheet: view.theme.stylesheet(),
        last_update: snapshot.map(|snapshot| to_iso(snapshot.received_at)),
        links: WidgetKind::ALL
            .iter()
            .map(|kind| WidgetLink {
                slug: kind.slug(),
                title: kind.descriptor().title,
            })
            .collect(),
    }
}

/// Build the page for an unknown widget.
#[must_use]
pub fn render_not_found(slug: &str, view: &ViewConfig) -> NotFoundPage {
    NotFoundPage {
        title: "Not found",
        refresh_seconds: view.refresh_seconds,
        stylesheet: view.theme.stylesheet(),
        slug: slug.to_string(),
    }
}

fn html_response<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashpush_domain::snapshot::{Payload, SnapshotContent};
    use dashpush_domain::time::now;

    fn page_html(page: &impl Template) -> String {
        page.render().unwrap()
    }

    fn snapshot(json: &str) -> Snapshot {
        let content = Payload::Text(json.to_string()).into_content().unwrap();
        Snapshot::new(content, now())
    }

    const FULL: &str = r#"{
        "title": "Sales Agent",
        "period": "Last 7 days",
        "generated_at": "2026-01-05T09:30:00Z",
        "total_conversations": 120,
        "engaged_conversations": 80,
        "abandonment_rate": 25,
        "abandoned_conversations": 30,
        "funnel_conversion_rate": "20%",
        "conversions": 24,
        "funnel_visitors_rate": "100%",
        "funnel_engaged_rate": "66.7%",
        "funnel_qualified_rate": "40%",
        "funnel_booked_rate": "0%",
        "funnel_converted_rate": "pending",
        "objection_timing": 5,
        "objection_budget": 9,
        "objection_price": 0,
        "objection_trust": 2,
        "objection_competitor": 0,
        "objection_complexity": 1,
        "recommendations": ["Follow up within 1h", "Offer a <b>trial</b>"]
    }"#;

    #[test]
    fn should_render_placeholder_for_every_kind_without_snapshot() {
        let view = ViewConfig::default();
        for kind in WidgetKind::ALL {
            let html = page_html(&render_widget(kind, None, &view));
            assert!(html.contains(WAITING_TEXT), "{kind} has no placeholder");
            assert!(!html.contains(r#"class="stat-value""#), "{kind} leaked metrics");
            assert!(!html.contains(r#"class="bar-row"#), "{kind} leaked bars");
        }
    }

    #[test]
    fn should_render_placeholder_for_html_snapshot() {
        let html_snapshot = Snapshot::new(SnapshotContent::Html("<p>x</p>".to_string()), now());
        let html = page_html(&render_widget(
            WidgetKind::Engagement,
            Some(&html_snapshot),
            &ViewConfig::default(),
        ));
        assert!(html.contains(WAITING_TEXT));
    }

    #[test]
    fn should_render_every_kind_with_full_snapshot() {
        let snapshot = snapshot(FULL);
        let view = ViewConfig::default();
        for kind in WidgetKind::ALL {
            let html = page_html(&render_widget(kind, Some(&snapshot), &view));
            assert!(!html.contains(WAITING_TEXT), "{kind} rendered placeholder");
        }
    }

    #[test]
    fn should_band_abandonment_rate() {
        let html = page_html(&render_widget(
            WidgetKind::AbandonRate,
            Some(&snapshot(FULL)),
            &ViewConfig::default(),
        ));
        assert!(html.contains(">25%<"));
        assert!(html.contains(r#"class="badge badge-monitor""#));
        assert!(html.contains(">Monitor<"));
        assert!(html.contains(">30<"));
    }

    #[test]
    fn should_band_conversion_rate_from_text() {
        let html = page_html(&render_widget(
            WidgetKind::Conversions,
            Some(&snapshot(FULL)),
            &ViewConfig::default(),
        ));
        assert!(html.contains(">On Track<"));
        assert!(html.contains(r#"class="badge badge-good""#));
    }

    #[test]
    fn should_render_funnel_bars_with_verbatim_labels() {
        let html = page_html(&render_widget(
            WidgetKind::Funnel,
            Some(&snapshot(FULL)),
            &ViewConfig::default(),
        ));
        assert!(html.contains(r#"style="width: 66.7%""#));
        assert!(html.contains(">66.7%<"));
        assert!(html.contains(">0%<"));
        assert!(html.contains(">pending<"));
        assert_eq!(html.matches(r#"style="width: 0.0%""#).count(), 2);
    }

    #[test]
    fn should_rank_and_highlight_objections() {
        let html = page_html(&render_widget(
            WidgetKind::Objections,
            Some(&snapshot(FULL)),
            &ViewConfig::default(),
        ));
        let budget = html.find(">Budget<").unwrap();
        let timing = html.find(">Timing<").unwrap();
        let trust = html.find(">Trust<").unwrap();
        assert!(budget < timing && timing < trust);
        assert_eq!(html.matches("bar-row top").count(), 1);
        assert!(html.contains(r#"style="width: 100.0%""#));
        assert!(html.contains(r#"style="width: 55.6%""#));
    }

    #[test]
    fn should_escape_recommendations_in_order() {
        let html = page_html(&render_widget(
            WidgetKind::Recommendations,
            Some(&snapshot(FULL)),
            &ViewConfig::default(),
        ));
        let first = html.find("Follow up within 1h").unwrap();
        let second = html.find("Offer a &lt;b&gt;trial&lt;/b&gt;").unwrap();
        assert!(first < second);
        assert!(!html.contains("<b>trial</b>"));
    }

    #[test]
    fn should_render_header_fields() {
        let html = page_html(&render_widget(
            WidgetKind::Header,
            Some(&snapshot(FULL)),
            &ViewConfig::default(),
        ));
        assert!(html.contains("Sales Agent"));
        assert!(html.contains("Last 7 days"));
        assert!(html.contains("2026-01-05T09:30:00Z"));
    }

    #[test]
    fn should_include_refresh_only_when_enabled() {
        let mut view = ViewConfig::default();
        let html = page_html(&render_widget(WidgetKind::Header, None, &view));
        assert!(!html.contains("http-equiv=\"refresh\""));

        view.refresh_seconds = 30;
        let html = page_html(&render_widget(WidgetKind::Header, None, &view));
        assert!(html.contains(r#"<meta http-equiv="refresh" content="30">"#));
    }

    #[test]
    fn should_list_every_widget_on_index() {
        let html = page_html(&render_index(None, &ViewConfig::default()));
        assert!(html.contains("Waiting for first data update"));
        for kind in WidgetKind::ALL {
            assert!(html.contains(&format!(r#"href="/{}""#, kind.slug())));
        }
    }

    #[test]
    fn should_show_last_update_on_index() {
        let snapshot = snapshot("{}");
        let html = page_html(&render_index(Some(&snapshot), &ViewConfig::default()));
        assert!(html.contains(&to_iso(snapshot.received_at)));
    }

    #[test]
    fn should_escape_unknown_slug_on_not_found_page() {
        let page = page_html(&render_not_found("<img src=x>", &ViewConfig::default()));
        assert!(page.contains("&lt;img src=x&gt;"));
        assert!(!page.contains("<img"));
    }

    #[test]
    fn should_answer_not_found_with_404() {
        let response = render_not_found("pie-chart", &ViewConfig::default()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_keep_stylesheet_unescaped() {
        let page = page_html(&render_widget(WidgetKind::Header, None, &ViewConfig::default()));
        assert!(page.contains("'Segoe UI'"));
    }
}
