use day_layout::layout_dump::layout_to_json;
use day_layout::{RenderOptions, layout_from_str, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DayRenderOptions {
    theme: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    board_width: Option<f32>,
    padding: Option<f32>,
    day_start_hour: Option<u32>,
}

fn build_render_options(options: DayRenderOptions) -> RenderOptions {
    let mut render_options = if options.theme.as_deref() == Some("modern") {
        RenderOptions::modern()
    } else {
        RenderOptions::classic()
    };

    if let Some(font_family) = options.font_family {
        render_options.theme.font_family = font_family;
    }
    if let Some(font_size) = options.font_size {
        render_options.theme.font_size = font_size;
    }
    if let Some(board_width) = options.board_width.filter(|w| *w > 0.0) {
        render_options.layout.board_width = board_width;
    }
    if let Some(padding) = options.padding.filter(|p| *p >= 0.0) {
        render_options.layout.padding = padding;
    }
    if let Some(hour) = options.day_start_hour {
        render_options.render.day_start_hour = hour;
    }

    render_options
}

fn parse_options(options_json: Option<String>) -> Result<DayRenderOptions, JsValue> {
    match options_json {
        Some(raw_options) => serde_json::from_str::<DayRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string())),
        None => Ok(DayRenderOptions::default()),
    }
}

#[wasm_bindgen]
pub fn render_day_svg(events: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let render_options = build_render_options(parse_options(options_json)?);
    render_with_options(events, render_options).map_err(|error| JsValue::from_str(&error.to_string()))
}

#[wasm_bindgen]
pub fn layout_day_json(events: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let render_options = build_render_options(parse_options(options_json)?);
    layout_from_str(events, &render_options.layout)
        .and_then(|layout| layout_to_json(&layout))
        .map_err(|error| JsValue::from_str(&error.to_string()))
}
