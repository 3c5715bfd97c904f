//! Visual theme — colors, font and layout units shared by every widget.
//!
//! Embedding dashboards differ mainly in whether widgets are sized in fixed
//! pixels or relative to the iframe viewport; [`Units`] selects between the
//! two while everything else stays the same.

use serde::Deserialize;

/// How widget dimensions are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Fixed pixel sizes.
    #[default]
    Px,
    /// Sizes relative to the viewport (`vw` horizontally, `vh` vertically).
    Viewport,
}

impl Units {
    fn width(self, px: f64, vw: f64) -> String {
        match self {
            Self::Px => format!("{px}px"),
            Self::Viewport => format!("{vw}vw"),
        }
    }

    fn height(self, px: f64, vh: f64) -> String {
        match self {
            Self::Px => format!("{px}px"),
            Self::Viewport => format!("{vh}vh"),
        }
    }
}

/// Theme supplied through configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub units: Units,
    pub font_family: String,
    pub background: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub accent: String,
    pub good: String,
    pub monitor: String,
    pub attention: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            units: Units::Px,
            font_family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif"
                .to_string(),
            background: "#0f172a".to_string(),
            surface: "#1e293b".to_string(),
            text: "#f8fafc".to_string(),
            muted: "#94a3b8".to_string(),
            accent: "#38bdf8".to_string(),
            good: "#22c55e".to_string(),
            monitor: "#f59e0b".to_string(),
            attention: "#ef4444".to_string(),
        }
    }
}

impl Theme {
    /// Build the inline stylesheet for a widget page.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let u = self.units;
        let palette = format!(
            ":root {{ --bg: {bg}; --surface: {surface}; --text: {text}; --muted: {muted}; \
             --accent: {accent}; --good: {good}; --monitor: {monitor}; --attention: {attention}; }}\n",
            bg = self.background,
            surface = self.surface,
            text = self.text,
            muted = self.muted,
            accent = self.accent,
            good = self.good,
            monitor = self.monitor,
            attention = self.attention,
        );
        let layout = format!(
            "* {{ box-sizing: border-box; margin: 0; padding: 0; }}\n\
             html, body {{ width: 100%; height: 100%; overflow: hidden; }}\n\
             body {{ background: var(--bg); color: var(--text); font-family: {font}; font-size: {base}; }}\n\
             .widget {{ display: flex; flex-direction: column; gap: {gap}; width: 100%; height: 100%; padding: {pad}; background: var(--surface); }}\n\
             .widget-title {{ font-size: {small}; text-transform: uppercase; letter-spacing: 0.08em; color: var(--muted); }}\n\
             .dash-header h1 {{ font-size: {title}; }}\n\
             .dash-header .meta {{ display: flex; gap: {gap}; color: var(--muted); font-size: {small}; }}\n\
             .stat-label {{ color: var(--muted); font-size: {small}; }}\n\
             .stat-value {{ font-size: {figure}; font-weight: 700; }}\n\
             .badge {{ display: inline-block; padding: {badge_v} {badge_h}; border-radius: 999px; font-size: {small}; font-weight: 600; }}\n\
             .badge-good {{ background: var(--good); color: var(--bg); }}\n\
             .badge-monitor {{ background: var(--monitor); color: var(--bg); }}\n\
             .badge-attention {{ background: var(--attention); color: var(--text); }}\n\
             .band-good .stat-value {{ color: var(--good); }}\n\
             .band-monitor .stat-value {{ color: var(--monitor); }}\n\
             .band-attention .stat-value {{ color: var(--attention); }}\n\
             .bars {{ display: flex; flex-direction: column; gap: {gap}; }}\n\
             .bar-row {{ display: grid; grid-template-columns: {label_w} 1fr {value_w}; align-items: center; gap: {gap}; }}\n\
             .bar-track {{ height: {bar_h}; background: var(--bg); border-radius: 4px; overflow: hidden; }}\n\
             .bar-fill {{ height: 100%; background: var(--accent); }}\n\
             .bar-row.top .bar-fill {{ background: var(--attention); }}\n\
             .bar-row.top .bar-label {{ font-weight: 700; }}\n\
             .bar-value {{ text-align: right; font-variant-numeric: tabular-nums; }}\n\
             .recommendations {{ list-style: none; display: flex; flex-direction: column; gap: {gap}; }}\n\
             .recommendations li::before {{ content: '\\2192'; color: var(--accent); margin-right: {gap}; }}\n\
             .empty, .waiting {{ color: var(--muted); }}\n\
             .waiting {{ margin: auto; font-size: {title}; }}\n",
            font = self.font_family,
            base = u.width(14.0, 1.4),
            small = u.width(12.0, 1.1),
            title = u.width(20.0, 2.2),
            figure = u.width(42.0, 5.0),
            gap = u.width(8.0, 0.8),
            pad = u.width(16.0, 1.6),
            badge_v = u.height(2.0, 0.4),
            badge_h = u.width(10.0, 1.0),
            label_w = u.width(110.0, 12.0),
            value_w = u.width(60.0, 6.0),
            bar_h = u.height(18.0, 3.0),
        );
        palette + &layout
    }
}
