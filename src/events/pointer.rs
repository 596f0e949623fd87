use crate::camera::OrbitCamera;
use crate::core::Session;
use crate::input::{DragState, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub canvas: web::HtmlCanvasElement,
    pub tracker: Rc<RefCell<PointerTracker>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub session: Rc<RefCell<Session>>,
    pub drag: Rc<RefCell<DragState>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_click(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        w.tracker
            .borrow_mut()
            .on_pointer_move(x, y, js_sys::Date::now());

        let mut drag = w.drag.borrow_mut();
        if drag.active {
            let dx = x - drag.last_x;
            let dy = y - drag.last_y;
            w.camera.borrow_mut().rotate(dx, dy);
        }
        drag.last_x = x;
        drag.last_y = y;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut drag = w.drag.borrow_mut();
        drag.active = true;
        drag.last_x = ev.client_x() as f32;
        drag.last_y = ev.client_y() as f32;
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.drag.borrow_mut().active = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

// Clicks anchor where the next text entry opens.
fn wire_click(w: &PointerWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        w.session.borrow_mut().click_pos = (ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
