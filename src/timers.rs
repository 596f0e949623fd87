//! RAII wrappers over `setInterval`/`setTimeout`.
//!
//! Dropping the handle clears the timer, so cancelling on a state exit is a
//! matter of letting the handle go (the relocation interval dies the moment
//! a floating-text entity starts dissolving). Callbacks that outlive their
//! handle on purpose use `forget` plus an explicit id-based clear; a timer
//! must never drop its own closure from inside a tick.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(millis: i32, f: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| log::error!("[timer] setInterval failed: {:?}", e))
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

/// Start an interval that manages its own lifetime: the callback receives
/// the timer id and clears it via [`clear_interval`] when it is done. The
/// closure is leaked, which is the price of letting a tick end itself.
pub fn interval_with_id(millis: i32, mut f: impl FnMut(i32) + 'static) -> Option<i32> {
    let window = web::window()?;
    let id_cell = std::rc::Rc::new(std::cell::Cell::new(0));
    let id_inner = id_cell.clone();
    let closure = Closure::wrap(Box::new(move || f(id_inner.get())) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            millis,
        )
        .map_err(|e| log::error!("[timer] setInterval failed: {:?}", e))
        .ok()?;
    id_cell.set(id);
    closure.forget();
    Some(id)
}

#[inline]
pub fn clear_interval(id: i32) {
    if let Some(w) = web::window() {
        w.clear_interval_with_handle(id);
    }
}

/// One-shot timeout. The closure is leaked; a single fire is its own end.
pub fn timeout(millis: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::once(f);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis,
            )
            .is_err()
        {
            log::error!("[timer] setTimeout failed");
        }
        closure.forget();
    }
}
