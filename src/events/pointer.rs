use crate::constants::{
    CARD_IMAGE_SELECTOR, CARD_SELECTOR, CARD_TITLE_SELECTOR, FOOTER_BG_ID, FOOTER_SECTION_ID,
};
use crate::core::tilt::{
    card_hover_transform, card_tilt_default, footer_shift, footer_transform,
    CARD_HOVER_TRANSITION, CARD_LEAVE_TRANSITION, CARD_REST_TRANSFORM, FOOTER_REST_TRANSFORM,
    IMAGE_HOVER_TRANSFORM, IMAGE_REST_TRANSFORM, TITLE_HOVER_TRANSFORM, TITLE_REST_TRANSFORM,
};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach tilt handlers to every card on the page. Each card is independent.
pub fn wire_card_tilt(document: &web::Document) {
    let cards = dom::query_document_elements(document, CARD_SELECTOR);
    for card in &cards {
        wire_card_mousemove(card);
        wire_card_mouseleave(card);
    }
    log::info!("[pointer] tilt wired on {} cards", cards.len());
}

fn set_inner_depth(card: &web::HtmlElement, title: &str, image: &str) {
    if let Some(el) = dom::query_html_element(card, CARD_TITLE_SELECTOR) {
        dom::set_style(&el, "transform", title);
    }
    if let Some(el) = dom::query_html_element(card, CARD_IMAGE_SELECTOR) {
        dom::set_style(&el, "transform", image);
    }
}

fn wire_card_mousemove(card: &web::HtmlElement) {
    let card_el = card.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = dom::element_rect(&card_el);
        let tilt = card_tilt_default(&rect, ev.client_x() as f64, ev.client_y() as f64);
        dom::set_style(&card_el, "transform", &card_hover_transform(tilt));
        dom::set_style(&card_el, "transition", CARD_HOVER_TRANSITION);
        set_inner_depth(&card_el, TITLE_HOVER_TRANSFORM, IMAGE_HOVER_TRANSFORM);
    }) as Box<dyn FnMut(_)>);
    _ = card.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_card_mouseleave(card: &web::HtmlElement) {
    let card_el = card.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::set_style(&card_el, "transform", CARD_REST_TRANSFORM);
        dom::set_style(&card_el, "transition", CARD_LEAVE_TRANSITION);
        set_inner_depth(&card_el, TITLE_REST_TRANSFORM, IMAGE_REST_TRANSFORM);
    }) as Box<dyn FnMut()>);
    _ = card.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Parallax on the footer background. Silently skipped when the footer
/// section or its background layer is not on the page.
pub fn wire_footer_parallax(document: &web::Document) {
    let (Some(section), Some(bg)) = (
        dom::html_element_by_id(document, FOOTER_SECTION_ID),
        dom::html_element_by_id(document, FOOTER_BG_ID),
    ) else {
        return;
    };

    let section_move = section.clone();
    let bg_move = bg.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let rect = dom::element_rect(&section_move);
        let shift = footer_shift(&rect, ev.client_x() as f64, ev.client_y() as f64);
        dom::set_style(&bg_move, "transform", &footer_transform(shift));
    }) as Box<dyn FnMut(_)>);
    _ = section.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move || {
        dom::set_style(&bg, "transform", FOOTER_REST_TRANSFORM);
    }) as Box<dyn FnMut()>);
    _ = section.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}
