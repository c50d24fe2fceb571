use serde::Serialize;

/// Absolute geometry of one event on the board, in pixels.
///
/// One vertical pixel corresponds to one minute of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub id: i64,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Summary of one cluster after widths and slots are assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterLayout {
    /// Event ids in the order they joined the cluster.
    pub events: Vec<i64>,
    pub first_minute: i64,
    pub last_minute: i64,
    pub max_crowd_size: usize,
    pub width: f32,
}

/// Full output of one layout call.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    /// One rectangle per event, in input order.
    pub rects: Vec<Rect>,
    pub clusters: Vec<ClusterLayout>,
    pub board_width: f32,
    pub padding: f32,
    /// Overall canvas size: the board plus padding on both sides, by the day.
    pub width: f32,
    pub height: f32,
}

impl DayLayout {
    pub fn rect(&self, id: i64) -> Option<&Rect> {
        self.rects.iter().find(|rect| rect.id == id)
    }
}
