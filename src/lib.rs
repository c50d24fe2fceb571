#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod generate;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;
pub mod render;
pub mod report;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LayoutConfig, RenderConfig};
pub use ir::Event;
pub use layout::{
    DayLayout, Rect, ValidationError, ValidationErrors, compute_day_layout, layout_day,
    layout_day_value,
};
pub use parser::parse_events;
pub use render::{render_html, render_svg};
pub use report::{LogReporter, NoopReporter, Reporter};
pub use theme::Theme;

/// Everything needed to turn an event document into a picture.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl RenderOptions {
    pub fn classic() -> Self {
        let config = Config::default();
        Self {
            theme: config.theme,
            layout: config.layout,
            render: config.render,
        }
    }

    pub fn modern() -> Self {
        let theme = Theme::modern();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::classic()
    }
}

/// Parses, validates and lays out `input`, returning the layout.
///
/// Validation diagnostics are sent to the `log` facade before the error is
/// returned.
pub fn layout_from_str(input: &str, config: &LayoutConfig) -> anyhow::Result<DayLayout> {
    let value = parse_events(input)?;
    let events = layout::events_from_value(&value).inspect_err(|errors| {
        report::report_all(errors, &mut LogReporter);
    })?;
    let layout = compute_day_layout(&events, config).inspect_err(|errors| {
        report::report_all(errors, &mut LogReporter);
    })?;
    Ok(layout)
}

/// Parses, lays out and renders `input` to SVG.
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let layout = layout_from_str(input, &options.layout)?;
    Ok(render_svg(&layout, &options.theme, &options.render))
}
