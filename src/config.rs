use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal pixels shared by the events of one cluster.
    pub board_width: f32,
    /// Offset added to every rectangle's `left`.
    pub padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            board_width: 600.0,
            padding: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Minimum canvas size; the canvas grows when the board needs more room.
    pub width: f32,
    pub height: f32,
    pub background: String,
    /// Clock hour shown at minute 0.
    pub day_start_hour: u32,
    pub show_hour_grid: bool,
    /// Space left of the board reserved for hour labels.
    pub gutter_width: f32,
    pub corner_radius: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 760.0,
            background: "#FFFFFF".to_string(),
            day_start_hour: 9,
            show_hour_grid: true,
            gutter_width: 60.0,
            corner_radius: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::classic();
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

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    font_size: Option<f32>,
    event_color: Option<String>,
    event_text_color: Option<String>,
    event_border_color: Option<String>,
    event_accent_color: Option<String>,
    grid_color: Option<String>,
    grid_text_color: Option<String>,
    board_background: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    board_width: Option<f32>,
    padding: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    day_start_hour: Option<u32>,
    show_hour_grid: Option<bool>,
    gutter_width: Option<f32>,
    corner_radius: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Applies a JSON config document on top of the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    match parsed.theme.as_deref() {
        Some("modern") => config.theme = Theme::modern(),
        Some("classic") | Some("default") | None => {}
        Some(other) => anyhow::bail!("unknown theme '{other}'"),
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.font_size {
            config.theme.font_size = v;
        }
        if let Some(v) = vars.event_color {
            config.theme.event_color = v;
        }
        if let Some(v) = vars.event_text_color {
            config.theme.event_text_color = v;
        }
        if let Some(v) = vars.event_border_color {
            config.theme.event_border_color = v;
        }
        if let Some(v) = vars.event_accent_color {
            config.theme.event_accent_color = v;
        }
        if let Some(v) = vars.grid_color {
            config.theme.grid_color = v;
        }
        if let Some(v) = vars.grid_text_color {
            config.theme.grid_text_color = v;
        }
        if let Some(v) = vars.board_background {
            config.theme.board_background = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v;
        }
    }
    config.render.background = config.theme.background.clone();

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.board_width {
            anyhow::ensure!(
                v.is_finite() && v > 0.0,
                "layout.boardWidth must be positive and finite, got {v}"
            );
            config.layout.board_width = v;
        }
        if let Some(v) = layout.padding {
            anyhow::ensure!(
                v.is_finite() && v >= 0.0,
                "layout.padding must be finite and not negative, got {v}"
            );
            config.layout.padding = v;
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            anyhow::ensure!(v.is_finite(), "render.width must be finite, got {v}");
            config.render.width = v;
        }
        if let Some(v) = render.height {
            anyhow::ensure!(v.is_finite(), "render.height must be finite, got {v}");
            config.render.height = v;
        }
        if let Some(v) = render.day_start_hour {
            config.render.day_start_hour = v;
        }
        if let Some(v) = render.show_hour_grid {
            config.render.show_hour_grid = v;
        }
        if let Some(v) = render.gutter_width {
            config.render.gutter_width = v;
        }
        if let Some(v) = render.corner_radius {
            config.render.corner_radius = v;
        }
    }

    Ok(config)
}
