//! Pointer and keyboard wiring: drag to orbit, wheel to zoom, toggle
//! control for the scene mode.

use crate::constants::{ORBIT_SENSITIVITY, ZOOM_SENSITIVITY};
use crate::{dom, input, overlay};
use app_core::TreeScene;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<TreeScene>>,
    pub pointer: Rc<RefCell<input::PointerState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    // pointerdown
    {
        let pointer = w.pointer.clone();
        let canvas = w.canvas.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let pos = input::pointer_canvas_px(&ev, &canvas);
                let mut ps = pointer.borrow_mut();
                ps.x = pos.x;
                ps.y = pos.y;
                ps.down = true;
                let _ = canvas.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove: dragging orbits the camera
    {
        let pointer = w.pointer.clone();
        let scene = w.scene.clone();
        let canvas = w.canvas.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                let pos = input::pointer_canvas_px(&ev, &canvas);
                let mut ps = pointer.borrow_mut();
                if ps.down {
                    let dx = pos.x - ps.x;
                    let dy = pos.y - ps.y;
                    scene
                        .borrow_mut()
                        .camera
                        .orbit(-dx * ORBIT_SENSITIVITY, -dy * ORBIT_SENSITIVITY);
                }
                ps.x = pos.x;
                ps.y = pos.y;
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let pointer = w.pointer.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                pointer.borrow_mut().down = false;
            }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel: zoom within the distance clamps
    {
        let scene = w.scene.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            scene
                .borrow_mut()
                .camera
                .zoom(ev.delta_y() as f32 * ZOOM_SENSITIVITY);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = w
            .canvas
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// The on-screen toggle flips the scene between the loose cloud and the
/// assembled tree.
pub fn wire_mode_toggle(document: &web::Document, scene: Rc<RefCell<TreeScene>>) {
    let doc = document.clone();
    dom::add_click_listener(document, "mode-toggle", move || {
        let mut s = scene.borrow_mut();
        s.toggle_mode();
        overlay::update_mode_label(&doc, s.mode());
    });
}

/// Space mirrors the on-screen toggle.
pub fn wire_toggle_key(document: &web::Document, scene: Rc<RefCell<TreeScene>>) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                // Leave the oracle textarea alone
                let typing = ev
                    .target()
                    .map(|t| t.dyn_ref::<web::HtmlTextAreaElement>().is_some())
                    .unwrap_or(false);
                if ev.key() == " " && !typing {
                    let mut s = scene.borrow_mut();
                    s.toggle_mode();
                    overlay::update_mode_label(&doc, s.mode());
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
