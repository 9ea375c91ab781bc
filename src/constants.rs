// Page wiring and presentation constants for the web frontend.

// DOM element ids
pub const CANVAS_CONTAINER_ID: &str = "webgl";
pub const FALLBACK_CONTAINER_ID: &str = "container";
pub const SLIDER_ID: &str = "AnimationSlider";
pub const VIEWPORT_IMAGE_ID: &str = "ViewportImage";
pub const VIEWPORT_GIF_ID: &str = "ViewportGif";
pub const ABOUT_PANEL_ID: &str = "about_sim";
pub const CAPTION_ID: &str = "currentlySeeingText";
pub const DESCRIPTION_ID: &str = "buttonTextEmphasis";
pub const BUTTON_2D_ID: &str = "2d_button";
pub const BUTTON_IRC_ID: &str = "irc_button";
pub const BUTTON_ABOUT_ID: &str = "about_button";
pub const CONFIG_SCRIPT_ID: &str = "viewer-config";

// Button highlight colours
pub const BUTTON_ON_COLOR: &str = "#75e87fff";
pub const BUTTON_OFF_COLOR: &str = "#ddddddff";

// Scene colours (sRGB hex)
pub const BACKGROUND_RGB: u32 = 0x212a20;
pub const FORWARD_AXIS_RGB: u32 = 0x58f941; // front/back anchors and the forward line
pub const RIGHT_AXIS_RGB: u32 = 0xef2770; // left/right
pub const UP_AXIS_RGB: u32 = 0x273cef; // up/down
pub const ANCHOR_ALPHA: f32 = 0.35;

// Reference lines are drawn from the origin to this length along each axis
pub const REFERENCE_LINE_LENGTH: f32 = 1.0;

// Orbit input
pub const WHEEL_NOTCH_PIXELS: f64 = 100.0; // deltaY reported per wheel notch

pub const WEBGPU_MISSING_MESSAGE: &str =
    "Your browser or device does not support WebGPU, which this viewer needs.";

/// Split `0xRRGGBB` into `[r, g, b]` in `0.0..=1.0`.
#[inline]
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}
