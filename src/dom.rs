use crate::constants::MAX_PIXEL_RATIO;
use crate::core::tilt::ElementRect;
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector` that are `HtmlElement`s, in document order.
pub fn query_document_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect_html_elements(document.query_selector_all(selector).ok())
}

fn collect_html_elements(list: Option<web::NodeList>) -> Vec<web::HtmlElement> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// First descendant of `root` matching `selector`.
pub fn query_html_element(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn element_rect(el: &web::Element) -> ElementRect {
    let r = el.get_bounding_client_rect();
    ElementRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

/// Size the canvas to the window and its backing store to the window size
/// times the device pixel ratio (capped).
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let css_w = w
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0);
        let css_h = w
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0);
        _ = canvas
            .style()
            .set_property("width", &format!("{}px", css_w));
        _ = canvas
            .style()
            .set_property("height", &format!("{}px", css_h));
        canvas.set_width(((css_w * dpr) as u32).max(1));
        canvas.set_height(((css_h * dpr) as u32).max(1));
    }
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
