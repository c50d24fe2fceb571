use crate::config::RenderConfig;
use crate::ir::DAY_MINUTES;
use crate::layout::{DayLayout, Rect};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

const ACCENT_WIDTH: f32 = 4.0;
const LABEL_INSET: f32 = 6.0;

pub fn render_svg(layout: &DayLayout, theme: &Theme, config: &RenderConfig) -> String {
    let mut svg = String::new();
    let margin_top = theme.font_size;
    let gutter = config.gutter_width.max(0.0);
    // The configured size is a minimum canvas; a larger board still fits.
    let width = (gutter + layout.width).max(config.width);
    let height = (layout.height + margin_top * 2.0).max(config.height);

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        config.background
    ));

    let board_x = gutter + layout.padding;
    svg.push_str(&format!(
        "<rect x=\"{board_x:.2}\" y=\"{margin_top:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
        layout.board_width, layout.height, theme.board_background
    ));

    if config.show_hour_grid {
        svg.push_str(&hour_grid_svg(layout, theme, config, board_x, margin_top));
    }

    for rect in &layout.rects {
        svg.push_str(&event_svg(rect, theme, config, gutter, margin_top));
    }

    svg.push_str("</svg>");
    svg
}

fn hour_grid_svg(layout: &DayLayout, theme: &Theme, config: &RenderConfig, board_x: f32, margin_top: f32) -> String {
    let mut grid = String::new();
    let label_x = (board_x - LABEL_INSET).max(0.0);
    for minute in (0..=DAY_MINUTES).step_by(30) {
        let y = margin_top + minute as f32;
        let on_hour = minute % 60 == 0;
        let stroke_width = if on_hour { 1.0 } else { 0.5 };
        grid.push_str(&format!(
            "<line x1=\"{board_x:.2}\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\" stroke=\"{}\" stroke-width=\"{stroke_width}\"/>",
            board_x + layout.board_width,
            theme.grid_color
        ));
        let (label, size) = if on_hour {
            (clock_label(config.day_start_hour, minute, true), theme.font_size)
        } else {
            (clock_label(config.day_start_hour, minute, false), theme.font_size * 0.85)
        };
        grid.push_str(&format!(
            "<text x=\"{label_x:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-family=\"{}\" font-size=\"{size}\" fill=\"{}\">{}</text>",
            y + size * 0.35,
            escape_xml(&theme.font_family),
            theme.grid_text_color,
            escape_xml(&label)
        ));
    }
    grid
}

/// `9:00 AM`, or `9:30` for half-hour marks.
fn clock_label(day_start_hour: u32, minute: i64, with_meridiem: bool) -> String {
    let total = day_start_hour as i64 * 60 + minute;
    let hour24 = (total / 60).rem_euclid(24);
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };
    let mins = total % 60;
    if with_meridiem {
        let meridiem = if hour24 < 12 { "AM" } else { "PM" };
        format!("{hour12}:{mins:02} {meridiem}")
    } else {
        format!("{hour12}:{mins:02}")
    }
}

fn event_svg(rect: &Rect, theme: &Theme, config: &RenderConfig, offset_x: f32, offset_y: f32) -> String {
    let x = offset_x + rect.left;
    let y = offset_y + rect.top;
    let mut out = format!(
        "<g class=\"event\" data-id=\"{}\"><rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{r}\" ry=\"{r}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        rect.id,
        rect.width,
        rect.height,
        theme.event_color,
        theme.event_border_color,
        r = config.corner_radius,
    );
    out.push_str(&format!(
        "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>",
        ACCENT_WIDTH.min(rect.width),
        rect.height,
        theme.event_accent_color
    ));
    if rect.height >= theme.font_size + 2.0 {
        out.push_str(&format!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            x + ACCENT_WIDTH + LABEL_INSET,
            y + theme.font_size + 2.0,
            escape_xml(&theme.font_family),
            theme.font_size,
            theme.event_text_color,
            rect.id
        ));
    }
    out.push_str("</g>");
    out
}

/// The positioned `<div>` fragment a web page can drop into its board
/// element; styling of `.event` is left to the page.
pub fn render_html(layout: &DayLayout) -> String {
    let mut html = String::new();
    for rect in &layout.rects {
        html.push_str(&format!(
            "<div class=\"event\" style=\"top: {}px; left: {}px; width: {}px; height: {}px;\"><span>{}</span></div>",
            rect.top, rect.left, rect.width, rect.height, rect.id
        ));
    }
    html
}

pub fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
        }
        None => {
            print!("{}", text);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig, theme: &Theme) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = primary_font(&theme.font_family);
    if let Some(size) = usvg::Size::from_wh(render_cfg.width, render_cfg.height) {
        opt.default_size = size;
    }
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig, _theme: &Theme) -> Result<()> {
    anyhow::bail!("PNG output requires the `png` feature")
}

#[cfg(feature = "png")]
fn primary_font(families: &str) -> String {
    families
        .split(',')
        .next()
        .map(|family| family.trim().trim_matches('"').to_string())
        .filter(|family| !family.is_empty())
        .unwrap_or_else(|| "sans-serif".to_string())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
