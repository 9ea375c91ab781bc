#![cfg(target_arch = "wasm32")]
use irc_core::{
    AssetKind, LogReporter, OverlaySink, ReactionFrames, ViewMode, Viewer, ViewerConfig,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod input;
mod render;
mod ui;

use constants::{
    CANVAS_CONTAINER_ID, CAPTION_ID, CONFIG_SCRIPT_ID, FALLBACK_CONTAINER_ID, VIEWPORT_IMAGE_ID,
    WEBGPU_MISSING_MESSAGE,
};

/// Page-wide state shared by the frame loop and the DOM callbacks.
pub struct App {
    pub viewer: Viewer,
    pub overlay: Box<dyn OverlaySink>,
    pub frames: ReactionFrames,
}

pub type SharedApp = Rc<RefCell<App>>;

fn read_config(document: &web::Document) -> ViewerConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|el| el.text_content())
    else {
        return ViewerConfig::default();
    };
    match ViewerConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            ViewerConfig::default()
        }
    }
}

fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let container = document
        .get_element_by_id(CANVAS_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

// Maintain canvas internal pixel size at a fixed fraction of the window
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, scale: f32) {
    dom::sync_canvas_backing_size(canvas, scale);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, scale);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn build_overlay(document: &web::Document) -> Box<dyn OverlaySink> {
    match dom::DomOverlay::from_document(document, VIEWPORT_IMAGE_ID, CAPTION_ID) {
        Some(overlay) => Box::new(overlay),
        None => {
            log::warn!("[dom] missing #{}; 2D overlay disabled", VIEWPORT_IMAGE_ID);
            Box::new(dom::NullOverlay)
        }
    }
}

/// Fetch the model and the reaction manifest. Failures are logged and the
/// viewer keeps running with whatever did load.
async fn load_assets(app: SharedApp, config: ViewerConfig) {
    let mut reporter = LogReporter;
    let model = assets::fetch_bytes(&config.model_path, AssetKind::Model, &mut reporter).await;
    if let Ok(bytes) = model {
        log::info!(
            "[assets] model fetched ({} bytes); not parsed, scene shows anchors only",
            bytes.len()
        );
    }

    let manifest =
        match assets::fetch_text(&config.manifest_path, AssetKind::Manifest, &mut reporter).await {
            Ok(text) => text,
            Err(_) => return,
        };
    match ReactionFrames::from_json(&manifest) {
        Ok(frames) => {
            log::info!("[assets] manifest lists {} frames", frames.len());
            app.borrow_mut().frames = frames;
        }
        Err(e) => log::error!("[assets] {}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("irc-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = read_config(&document);
    let canvas = create_canvas(&document)?;
    wire_canvas_resize(&canvas, config.viewport_scale);

    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let viewer = Viewer::new(&config, aspect);
    let anchors = viewer.anchors().clone();
    let app: SharedApp = Rc::new(RefCell::new(App {
        viewer,
        overlay: build_overlay(&document),
        frames: ReactionFrames::default(),
    }));

    // Initial page state: 2D panel, slider at its default, overlay for the default facing
    {
        let mut guard = app.borrow_mut();
        let App { viewer, overlay, .. } = &mut *guard;
        viewer.refresh_overlay(&mut **overlay);
        ui::apply_mode(&document, ViewMode::default());
        ui::set_slider(&document, viewer.progress());
    }

    events::wire_slider(&document, app.clone());
    events::wire_mode_buttons(&document, app.clone());
    events::wire_document_click(&document, app.clone());
    events::wire_orbit_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    let gpu = frame::init_gpu(&canvas, &anchors).await;
    if gpu.is_none() {
        dom::set_text(&document, FALLBACK_CONTAINER_ID, WEBGPU_MISSING_MESSAGE);
    }

    spawn_local(load_assets(app.clone(), config));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { app, canvas, gpu }));
    frame::start_loop(frame_ctx);
    Ok(())
}
