use crate::layout::{DayLayout, Rect};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump<'a> {
    pub board_width: f32,
    pub padding: f32,
    pub width: f32,
    pub height: f32,
    pub clusters: Vec<ClusterDump<'a>>,
    pub rects: &'a [Rect],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDump<'a> {
    pub index: usize,
    pub events: &'a [i64],
    pub first_minute: i64,
    pub last_minute: i64,
    pub max_crowd_size: usize,
    pub width: f32,
}

impl<'a> LayoutDump<'a> {
    pub fn from_layout(layout: &'a DayLayout) -> Self {
        let clusters = layout
            .clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| ClusterDump {
                index,
                events: &cluster.events,
                first_minute: cluster.first_minute,
                last_minute: cluster.last_minute,
                max_crowd_size: cluster.max_crowd_size,
                width: cluster.width,
            })
            .collect();

        LayoutDump {
            board_width: layout.board_width,
            padding: layout.padding,
            width: layout.width,
            height: layout.height,
            clusters,
            rects: &layout.rects,
        }
    }
}

pub fn layout_to_json(layout: &DayLayout) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&LayoutDump::from_layout(layout))?)
}

pub fn write_layout_dump(path: &Path, layout: &DayLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
