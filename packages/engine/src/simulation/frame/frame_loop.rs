//! requestAnimationFrame loop with scoped cancellation
//!
//! `FrameLoop` owns both the JS closure and the id of the pending frame
//! request. Dropping it (or calling `stop`) cancels the pending request and
//! frees the closure, so no recurring callback outlives the session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Closure<dyn FnMut(f64)>;

pub struct FrameLoop {
    window: web_sys::Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    /// Call `on_frame(timestamp_ms)` once per animation frame until dropped
    pub fn start<F>(mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        // The closure re-registers itself through a weak handle: no Rc cycle,
        // and once the loop is dropped the upgrade fails and it stops.
        let slot = Rc::downgrade(&callback);
        let pending_in = pending.clone();
        let window_in = window.clone();
        let closure = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            pending_in.set(None);
            on_frame(timestamp);
            let Some(slot) = slot.upgrade() else { return };
            let slot = slot.borrow();
            if let Some(cb) = slot.as_ref() {
                match window_in.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => pending_in.set(Some(id)),
                    Err(e) => console_warn!("requestAnimationFrame failed: {:?}", e),
                }
            }
        });

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(closure);

        console_log!("frame loop started");
        Ok(Self { window, pending, callback })
    }

    /// Cancel the pending frame and release the closure
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                console_warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        if self.callback.borrow_mut().take().is_some() {
            console_log!("frame loop stopped");
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
