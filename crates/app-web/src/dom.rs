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
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn set_button_disabled(document: &web::Document, element_id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        if let Some(btn) = el.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(disabled);
        }
    }
}

#[inline]
pub fn textarea_value(document: &web::Document, element_id: &str) -> String {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
        .map(|ta| ta.value())
        .unwrap_or_default()
}

#[inline]
pub fn clear_textarea(document: &web::Document, element_id: &str) {
    if let Some(ta) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlTextAreaElement>().ok())
    {
        ta.set_value("");
    }
}
