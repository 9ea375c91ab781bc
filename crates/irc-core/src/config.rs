use crate::constants::{
    ANCHOR_CUBE_SIZE, ANCHOR_DISTANCE, CAMERA_OFFSET, DEFAULT_IMAGE_BASE, DEFAULT_MANIFEST_PATH,
    DEFAULT_MODEL_PATH, DEFAULT_PROGRESS, VIEWPORT_SCALE,
};
use crate::error::ViewerError;
use crate::facing::Facing;
use serde::Deserialize;

/// Page-level viewer settings. Any field missing from the JSON keeps its default.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    pub anchor_distance: f32,
    pub anchor_cube_size: f32,
    pub camera_offset: f32,
    pub viewport_scale: f32,
    pub image_base: String,
    pub model_path: String,
    pub manifest_path: String,
    pub show_anchors: bool,
    pub show_reference_lines: bool,
    pub initial_progress: u8,
    /// Length of the reaction animation in seconds, when the page knows it.
    pub animation_duration: Option<f32>,
    #[serde(skip)]
    pub initial_facing: Facing,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            anchor_distance: ANCHOR_DISTANCE,
            anchor_cube_size: ANCHOR_CUBE_SIZE,
            camera_offset: CAMERA_OFFSET,
            viewport_scale: VIEWPORT_SCALE,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            show_anchors: false,
            show_reference_lines: true,
            initial_progress: DEFAULT_PROGRESS,
            animation_duration: None,
            initial_facing: Facing::Right,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, ViewerError> {
        serde_json::from_str(text).map_err(ViewerError::Config)
    }
}
