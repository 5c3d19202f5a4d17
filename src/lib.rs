#![cfg(target_arch = "wasm32")]
use ripple_core::{generate_layout, RippleAnimator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod constants;
mod css;
mod dom;
mod frame;
mod settings;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(run);
        document.add_event_listener_with_callback(
            constants::DOM_READY_EVENT,
            on_ready.unchecked_ref(),
        )?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::grid_container(&document)?;
    let settings = dom::read_settings(&container)?;

    let markers = generate_layout(&settings.layout)?;
    let elements = dom::mount_markers(&document, &container, &markers, &settings.layout)?;
    let animator = RippleAnimator::new(markers, settings.animator)?;
    log::info!(
        "[ripple] {} markers, cycle {:.2}s",
        animator.markers().len(),
        animator.durations().cycle_total()
    );

    let frame_ctx = frame::FrameContext::new(animator, dom::StyleWriter::new(elements));
    frame::start_loop(Rc::new(RefCell::new(frame_ctx)));
    Ok(())
}
