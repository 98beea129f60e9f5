use crate::types::Rgba;

pub const GUI_WINDOW_TITLE: &str = "FXMLExercise";

pub const GUI_SELECTOR_WIDTH: f32 = 350.0;
pub const GUI_SELECTOR_HEIGHT: f32 = 200.0;

pub const GUI_FRAME_WIDTH: f32 = 760.0;
pub const GUI_FRAME_HEIGHT: f32 = 420.0;

pub const GUI_NAME_INPUT_WIDTH: f32 = 160.0;
pub const GUI_SWATCH_SIZE: f32 = 24.0;
pub const GUI_PADDING: f32 = 8.0;

/// A freshly created color picker starts out opaque white.
pub const DEFAULT_COLOR: Rgba = Rgba::WHITE;
