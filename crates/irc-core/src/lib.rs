pub mod assets;
pub mod camera;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod facing;
pub mod images;
pub mod mode;
pub mod progress;

pub use assets::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use facing::*;
pub use images::*;
pub use mode::*;
pub use progress::*;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
