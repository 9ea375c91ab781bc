use irc_core::OverlaySink;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}; click handler not attached", element_id);
    }
}

pub fn html_element(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_display(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = html_element(document, id) {
        _ = el
            .style()
            .set_property("display", if visible { "inline" } else { "none" });
    }
}

#[inline]
pub fn set_background(document: &web::Document, id: &str, color: &str) {
    if let Some(el) = html_element(document, id) {
        _ = el.style().set_property("background-color", color);
    }
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Size the canvas to `scale` of the window, in device pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, scale: f32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let css_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) * scale as f64;
        let css_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) * scale as f64;
        let style = canvas.style();
        _ = style.set_property("width", &format!("{css_w}px"));
        _ = style.set_property("height", &format!("{css_h}px"));
        canvas.set_width(((css_w * dpr) as u32).max(1));
        canvas.set_height(((css_h * dpr) as u32).max(1));
    }
}

/// The 2D overlay: the `<img>` showing the state image and its caption.
///
/// The displayed source is read back from the `src` attribute rather than the
/// `src` property, which the browser resolves to an absolute URL.
pub struct DomOverlay {
    image: web::HtmlImageElement,
    caption: Option<web::Element>,
}

impl DomOverlay {
    pub fn new(image: web::HtmlImageElement, caption: Option<web::Element>) -> Self {
        Self { image, caption }
    }

    pub fn from_document(
        document: &web::Document,
        image_id: &str,
        caption_id: &str,
    ) -> Option<Self> {
        let image = document
            .get_element_by_id(image_id)?
            .dyn_into::<web::HtmlImageElement>()
            .ok()?;
        Some(Self::new(image, document.get_element_by_id(caption_id)))
    }
}

impl OverlaySink for DomOverlay {
    fn displayed_source(&self) -> Option<String> {
        self.image.get_attribute("src")
    }

    fn set_source(&mut self, src: &str) {
        self.image.set_src(src);
    }

    fn set_caption(&mut self, caption: &str) {
        if let Some(el) = &self.caption {
            el.set_text_content(Some(caption));
        }
    }
}

/// Stands in when the page has no overlay image; nothing is ever shown.
#[derive(Default)]
pub struct NullOverlay;

impl OverlaySink for NullOverlay {
    fn displayed_source(&self) -> Option<String> {
        None
    }

    fn set_source(&mut self, _src: &str) {}

    fn set_caption(&mut self, _caption: &str) {}
}
