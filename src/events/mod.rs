pub mod controls;
pub mod pointer;

pub use controls::{wire_document_click, wire_mode_buttons, wire_slider};
pub use pointer::{wire_orbit_handlers, InputWiring};
