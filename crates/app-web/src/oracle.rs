//! Fetch-based collaborator for the gift oracle.
//!
//! One request in flight at most (the panel state machine enforces it), a
//! single try per submission, no retry and no timeout. A granted wish
//! forces the scene into tree shape.

use crate::constants::{WISH_ENDPOINT, WISH_MODEL};
use crate::{dom, overlay};
use app_core::{OraclePanel, TreeScene, WishError, WishResponse};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct OracleWiring {
    pub document: web::Document,
    pub scene: Rc<RefCell<TreeScene>>,
    pub panel: Rc<RefCell<OraclePanel>>,
}

pub fn wire_oracle_panel(w: OracleWiring) {
    {
        let doc = w.document.clone();
        dom::add_click_listener(&w.document, "oracle-open", move || {
            overlay::show_dialog(&doc);
        });
    }
    {
        let doc = w.document.clone();
        dom::add_click_listener(&w.document, "oracle-close", move || {
            overlay::hide_dialog(&doc);
        });
    }
    {
        let doc = w.document.clone();
        let panel = w.panel.clone();
        dom::add_click_listener(&w.document, "oracle-reset", move || {
            panel.borrow_mut().reset();
            dom::clear_textarea(&doc, "oracle-input");
            overlay::show_form(&doc);
        });
    }
    {
        let doc = w.document.clone();
        let panel = w.panel.clone();
        let scene = w.scene.clone();
        dom::add_click_listener(&w.document, "oracle-submit", move || {
            let wish_text = dom::textarea_value(&doc, "oracle-input");
            if !panel.borrow_mut().begin_submit(&wish_text) {
                return;
            }
            overlay::set_loading(&doc, true);

            let doc = doc.clone();
            let panel = panel.clone();
            let scene = scene.clone();
            spawn_local(async move {
                let outcome = request_wish(&wish_text).await;
                let assemble = panel.borrow_mut().finish(outcome);
                if assemble {
                    scene.borrow_mut().assemble();
                    overlay::update_mode_label(&doc, scene.borrow().mode());
                }
                match panel.borrow().result() {
                    Some(wish) => overlay::show_result(&doc, wish),
                    None => overlay::show_error(&doc),
                }
            });
        });
    }
}

fn js_err(context: &str, e: JsValue) -> WishError {
    WishError::Generation(format!("{context}: {e:?}"))
}

/// The service key is supplied by the page, not baked into the binary.
fn api_key() -> Option<String> {
    let window = web::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("WISH_API_KEY"))
        .ok()
        .and_then(|v| v.as_string())
        .filter(|s| !s.is_empty())
}

fn request_body(wish_text: &str) -> String {
    serde_json::json!({
        "contents": format!(
            "The user's Christmas vibe is: \"{wish_text}\". Act as a sophisticated \
             concierge. Generate a luxurious response including a message, a bespoke \
             gift recommendation, and a short affirmation."
        ),
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "message": {"type": "STRING"},
                    "luxuryGift": {"type": "STRING"},
                    "affirmation": {"type": "STRING"},
                },
                "required": ["message", "luxuryGift", "affirmation"],
            },
        },
    })
    .to_string()
}

/// Pull the model's JSON text out of the service envelope. Anything that
/// does not match the expected shape degrades to the fixed fallback
/// payload rather than an error.
fn parse_wish_envelope(raw: &str) -> WishResponse {
    let envelope: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(_) => return WishResponse::fallback(),
    };
    let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default();
    WishResponse::from_json(text)
}

async fn request_wish(wish_text: &str) -> Result<WishResponse, WishError> {
    let key = api_key().ok_or_else(|| WishError::Generation("missing WISH_API_KEY".into()))?;
    let url = format!("{WISH_ENDPOINT}/{WISH_MODEL}:generateContent?key={key}");

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&request_body(wish_text)));
    let request = web::Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| js_err("request", e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| js_err("headers", e))?;

    let window = web::window().ok_or_else(|| WishError::Generation("no window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_err("fetch", e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| js_err("response", e))?;
    if !resp.ok() {
        return Err(WishError::Generation(format!("http status {}", resp.status())));
    }

    let text_value = JsFuture::from(resp.text().map_err(|e| js_err("body", e))?)
        .await
        .map_err(|e| js_err("body", e))?;
    let raw = text_value.as_string().unwrap_or_default();
    Ok(parse_wish_envelope(&raw))
}
