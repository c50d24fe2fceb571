use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub event_color: String,
    pub event_text_color: String,
    pub event_border_color: String,
    pub event_accent_color: String,
    pub grid_color: String,
    pub grid_text_color: String,
    pub board_background: String,
    pub background: String,
}

impl Theme {
    /// The classic day-view look: white cards with a blue left edge on a
    /// light grey board.
    pub fn classic() -> Self {
        Self {
            font_family: "\"Lucida Grande\", Helvetica, Arial, sans-serif".to_string(),
            font_size: 12.0,
            event_color: "#FFFFFF".to_string(),
            event_text_color: "#2F6F9F".to_string(),
            event_border_color: "#D5D5D5".to_string(),
            event_accent_color: "#3B6FB6".to_string(),
            grid_color: "#E6E6E6".to_string(),
            grid_text_color: "#666666".to_string(),
            board_background: "#ECECEC".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            font_size: 13.0,
            event_color: "#F8FAFF".to_string(),
            event_text_color: "#1C2430".to_string(),
            event_border_color: "#C7D2E5".to_string(),
            event_accent_color: "#6366F1".to_string(),
            grid_color: "#EEF2F8".to_string(),
            grid_text_color: "#7A8AA6".to_string(),
            board_background: "#F7FAFF".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}
