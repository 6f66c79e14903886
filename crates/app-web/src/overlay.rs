//! DOM updates for the gift-oracle dialog and the mode toggle label.

use crate::dom;
use app_core::{TreeMode, WishResponse};
use web_sys as web;

#[inline]
fn show_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("style", "");
    }
}

#[inline]
fn hide_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let _ = el.set_attribute("style", "display:none");
    }
}

pub fn show_dialog(document: &web::Document) {
    show_element(document, "oracle-dialog");
}

pub fn hide_dialog(document: &web::Document) {
    hide_element(document, "oracle-dialog");
}

/// Input form visible, result card and error banner hidden.
pub fn show_form(document: &web::Document) {
    show_element(document, "oracle-form");
    hide_element(document, "oracle-result");
    hide_element(document, "oracle-error");
    set_loading(document, false);
}

pub fn set_loading(document: &web::Document, loading: bool) {
    dom::set_button_disabled(document, "oracle-submit", loading);
    dom::set_text(
        document,
        "oracle-submit",
        if loading {
            "Synthesizing Luxury…"
        } else {
            "Invoke Selection"
        },
    );
}

pub fn show_result(document: &web::Document, wish: &WishResponse) {
    dom::set_text(document, "oracle-message", &wish.message);
    dom::set_text(document, "oracle-gift", &wish.luxury_gift);
    dom::set_text(document, "oracle-affirmation", &wish.affirmation);
    hide_element(document, "oracle-form");
    hide_element(document, "oracle-error");
    show_element(document, "oracle-result");
}

pub fn show_error(document: &web::Document) {
    set_loading(document, false);
    show_element(document, "oracle-error");
}

pub fn update_mode_label(document: &web::Document, mode: TreeMode) {
    dom::set_text(
        document,
        "mode-toggle",
        match mode {
            TreeMode::TreeShape => "Dissolve Essence",
            TreeMode::Scattered => "Manifest Tree",
        },
    );
}
