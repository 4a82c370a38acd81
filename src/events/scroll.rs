use crate::core::{content_block_style, section_at, AnimationTargets};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Recompute block styles and group targets from the current scroll offset.
pub fn apply_scroll(targets: &RefCell<AnimationTargets>, blocks: &[web::HtmlElement]) {
    let pos = section_at(dom::scroll_y(), dom::viewport_height());
    for (i, el) in blocks.iter().enumerate() {
        let style = content_block_style(i, pos);
        dom::set_style(el, "transform", &style.transform_css());
        dom::set_style(el, "opacity", &style.opacity_css());
    }
    targets.borrow_mut().apply_scroll(pos);
}

/// Apply the scroll state once now, then again on every `scroll` event.
pub fn wire_scroll(targets: Rc<RefCell<AnimationTargets>>, blocks: Vec<web::HtmlElement>) {
    apply_scroll(&targets, &blocks);
    {
        let t = targets.borrow();
        log::info!(
            "[scroll] {} content blocks, initial targets central={:.3} orbit={:.3} satellite={:.3}",
            blocks.len(),
            t.groups.central,
            t.groups.orbit,
            t.groups.satellite
        );
    }

    let closure = Closure::wrap(Box::new(move || {
        apply_scroll(&targets, &blocks);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Keep the canvas sized to the window. The renderer picks up the new
/// backing size (and projection aspect) on the next frame.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
