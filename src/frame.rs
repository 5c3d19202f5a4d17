use instant::Instant;
use ripple_core::{Phase, RippleAnimator};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MAX_FRAME_DT_SEC;
use crate::dom::StyleWriter;

pub struct FrameContext {
    pub animator: RippleAnimator,
    pub writer: StyleWriter,
    pub last_instant: Instant,
    pub last_phase: Phase,
}

impl FrameContext {
    pub fn new(animator: RippleAnimator, mut writer: StyleWriter) -> Self {
        writer.apply(animator.styles());
        let last_phase = animator.phase();
        Self {
            animator,
            writer,
            last_instant: Instant::now(),
            last_phase,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant)
            .as_secs_f32()
            .min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        let phase = self.animator.advance(dt_sec);
        if phase != self.last_phase {
            log::debug!(
                "[frame] {:?} -> {:?} cycles={} blinks={}",
                self.last_phase,
                phase,
                self.animator.completed_cycles(),
                self.animator.completed_blinks()
            );
            self.last_phase = phase;
        }
        self.writer.apply(self.animator.styles());
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the life of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            request_frame(cb);
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
