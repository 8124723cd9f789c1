use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Request id of the in-flight `requestAnimationFrame`, shared with the callback.
struct Pending {
    id: Cell<Option<i32>>,
    callback: RefCell<Option<js_sys::Function>>,
}

impl Pending {
    fn request(&self) {
        if self.id.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            log::warn!("requestAnimationFrame unavailable: no window");
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback) {
            Ok(id) => self.id.set(Some(id)),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Owned animation-frame loop. At most one request is in flight; dropping the
/// handle cancels it and frees the callback.
pub struct AnimationFrame {
    pending: Rc<Pending>,
    _closure: Closure<dyn FnMut(f64)>,
}

impl AnimationFrame {
    /// `on_frame` receives the frame timestamp and returns whether another
    /// frame should be requested.
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending = Rc::new(Pending {
            id: Cell::new(None),
            callback: RefCell::new(None),
        });

        let weak = Rc::downgrade(&pending);
        let closure = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            let Some(pending) = weak.upgrade() else {
                return;
            };
            pending.id.set(None);
            if on_frame(now) {
                pending.request();
            }
        });

        let function: &js_sys::Function = closure.as_ref().unchecked_ref();
        *pending.callback.borrow_mut() = Some(function.clone());

        Self {
            pending,
            _closure: closure,
        }
    }

    pub fn request(&self) {
        self.pending.request();
    }

    /// Safe to call with nothing in flight.
    pub fn cancel(&self) {
        self.pending.cancel();
    }
}

impl Drop for AnimationFrame {
    fn drop(&mut self) {
        self.pending.cancel();
        self.pending.callback.borrow_mut().take();
    }
}
