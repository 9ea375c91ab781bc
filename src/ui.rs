use crate::constants::{
    ABOUT_PANEL_ID, BUTTON_2D_ID, BUTTON_ABOUT_ID, BUTTON_IRC_ID, BUTTON_OFF_COLOR,
    BUTTON_ON_COLOR, DESCRIPTION_ID, SLIDER_ID, VIEWPORT_GIF_ID, VIEWPORT_IMAGE_ID,
};
use crate::dom;
use irc_core::{Progress, ViewMode};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn button_id(mode: ViewMode) -> &'static str {
    match mode {
        ViewMode::TwoD => BUTTON_2D_ID,
        ViewMode::ReactionPath => BUTTON_IRC_ID,
        ViewMode::About => BUTTON_ABOUT_ID,
    }
}

/// Show the panel for `mode`, highlight its button and update the description.
pub fn apply_mode(document: &web::Document, mode: ViewMode) {
    for other in ViewMode::ALL {
        let color = if other == mode {
            BUTTON_ON_COLOR
        } else {
            BUTTON_OFF_COLOR
        };
        dom::set_background(document, button_id(other), color);
    }
    let panels = mode.panels();
    dom::set_display(document, VIEWPORT_IMAGE_ID, panels.viewport_image);
    dom::set_display(document, VIEWPORT_GIF_ID, panels.viewport_gif);
    dom::set_display(document, ABOUT_PANEL_ID, panels.about);
    dom::set_text(document, DESCRIPTION_ID, mode.description());
}

/// Move the slider thumb without firing its input event.
pub fn set_slider(document: &web::Document, progress: Progress) {
    if let Some(input) = document
        .get_element_by_id(SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        input.set_value(&progress.value().to_string());
    }
}
