use crate::constants::SLIDER_ID;
use crate::{dom, ui, App, SharedApp};
use irc_core::{Progress, ViewMode};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slider input scrubs the reaction and re-picks the overlay image.
pub fn wire_slider(document: &web::Document, app: SharedApp) {
    let Some(slider) = document
        .get_element_by_id(SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing #{}; progress stays fixed", SLIDER_ID);
        return;
    };
    let input = slider.clone();
    let closure = Closure::wrap(Box::new(move || {
        let progress = match Progress::parse(&input.value()) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[slider] {}", e);
                return;
            }
        };
        let mut guard = app.borrow_mut();
        let App { viewer, overlay, .. } = &mut *guard;
        if let Some(stage) = viewer.set_progress(progress, &mut **overlay) {
            log::debug!("[slider] {} -> {}", progress.value(), stage);
        }
        if let Some(t) = viewer.animation_time() {
            log::debug!("[slider] animation time {:.3}s", t);
        }
    }) as Box<dyn FnMut()>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// The three panel buttons.
pub fn wire_mode_buttons(document: &web::Document, app: SharedApp) {
    for mode in ViewMode::ALL {
        let app = app.clone();
        dom::add_click_listener(document, ui::button_id(mode), move || {
            let progress = {
                let mut guard = app.borrow_mut();
                let App { viewer, overlay, .. } = &mut *guard;
                viewer.select_mode(mode, &mut **overlay);
                viewer.progress()
            };
            if let Some(document) = dom::window_document() {
                ui::apply_mode(&document, mode);
                ui::set_slider(&document, progress);
            }
            log::info!("[ui] mode {:?}", mode);
        });
    }
}

/// Any click on the page lists the frames of the loaded reaction manifest.
pub fn wire_document_click(document: &web::Document, app: SharedApp) {
    let closure = Closure::wrap(Box::new(move || {
        log::info!("[click] document");
        for name in app.borrow().frames.names() {
            log::info!("[click] frame {}", name);
        }
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
