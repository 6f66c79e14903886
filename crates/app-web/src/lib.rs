#![cfg(target_arch = "wasm32")]
use crate::constants::SCENE_SEED;
use app_core::{OraclePanel, TreeScene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod oracle;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
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

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

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

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let aspect = canvas.width().max(1) as f32 / canvas.height().max(1) as f32;
    let scene = Rc::new(RefCell::new(TreeScene::new(SCENE_SEED, aspect)));
    let panel = Rc::new(RefCell::new(OraclePanel::new()));
    log::info!(
        "[scene] foliage={} ornaments={} gifts={} snow={}",
        scene.borrow().foliage.len(),
        scene.borrow().ornaments.len(),
        scene.borrow().gifts.len(),
        scene.borrow().snow.len()
    );

    overlay::update_mode_label(&document, scene.borrow().mode());
    overlay::hide_dialog(&document);

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        scene: scene.clone(),
        pointer: pointer.clone(),
    });
    events::wire_mode_toggle(&document, scene.clone());
    events::wire_toggle_key(&document, scene.clone());
    oracle::wire_oracle_panel(oracle::OracleWiring {
        document: document.clone(),
        scene: scene.clone(),
        panel: panel.clone(),
    });

    // WebGPU renderer; the scene still runs (and the UI stays live) if the
    // adapter is unavailable
    let gpu = frame::init_gpu(&canvas, &scene).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene: scene.clone(),
        canvas: canvas.clone(),
        gpu,
        start_instant: now,
        last_instant: now,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);

    Ok(())
}
