use crate::core::{Scene, Session};
use crate::floating;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KeyWiring {
    pub session: Rc<RefCell<Session>>,
    pub scene: Rc<RefCell<Scene>>,
}

/// Space opens the transient input box at the last click position, as long
/// as the session is still under the entry cap. Keystrokes aimed at an open
/// input box are left alone.
pub fn wire_global_keydown(w: KeyWiring) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.code() != "Space" {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web::HtmlInputElement>().is_some() {
                return;
            }
        }
        if w.session.borrow().at_cap() {
            return;
        }
        if let Some(document) = crate::dom::window_document() {
            let (x, y) = w.session.borrow().click_pos;
            floating::spawn_input_box(&document, x, y, w.session.clone(), w.scene.clone());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
