//! DOM side of the floating-text lifecycle.
//!
//! The pure state machine in `core::text` decides what each timer tick may
//! do; this module owns the `<div>`, the relocation interval, and the
//! dissolve timers. Dropping the relocation `Interval` on the transition to
//! `Dissolving` is the mandatory cancellation; the state guard catches any
//! tick already in flight.

use crate::constants::*;
use crate::core::{FloatingText, Scene, Session, StripOutcome};
use crate::dom;
use crate::swap;
use crate::timers::{self, Interval};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the floating `<div>` for a confirmed entry and wire its timers.
pub fn spawn_floating_text(document: &web::Document, content: String, x: f32, y: f32) {
    let div: web::HtmlElement = match document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(el) => el,
        None => {
            log::error!("[text] could not create text element");
            return;
        }
    };
    let style = div.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("color", TEXT_COLOR);
    _ = style.set_property("font", TEXT_FONT);
    _ = style.set_property("transition", TEXT_DRIFT_TRANSITION);
    div.set_text_content(Some(&content));
    dom::set_element_position(&div, x, y);
    if let Some(body) = document.body() {
        _ = body.append_child(&div);
    }

    let entity = Rc::new(RefCell::new(FloatingText::new(content, x, y)));

    // Periodic relocation while Active; CSS transition turns each jump into
    // a slow drift.
    let relocation: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    {
        let entity_move = entity.clone();
        let div_move = div.clone();
        *relocation.borrow_mut() =
            Interval::new(crate::core::text::RELOCATE_INTERVAL_MS, move || {
                let (w, h) = dom::viewport_size();
                let moved = entity_move
                    .borrow_mut()
                    .relocate_tick(w, h, &mut rand::thread_rng());
                if let Some((nx, ny)) = moved {
                    dom::set_element_position(&div_move, nx, ny);
                }
            });
    }

    wire_mouseover_dissolve(&div, entity, relocation);
}

fn wire_mouseover_dissolve(
    div: &web::HtmlElement,
    entity: Rc<RefCell<FloatingText>>,
    relocation: Rc<RefCell<Option<Interval>>>,
) {
    let div_for_listener = div.clone();
    let div_hover = div.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if !entity.borrow_mut().begin_dissolve() {
            return;
        }
        // State exit: the relocation timer must never fire again.
        relocation.borrow_mut().take();
        _ = div_hover.style().set_property("color", TEXT_DISSOLVE_COLOR);

        let entity_strip = entity.clone();
        let div_strip = div_hover.clone();
        timers::timeout(crate::core::text::DISSOLVE_DELAY_MS, move || {
            _ = timers::interval_with_id(crate::core::text::STRIP_INTERVAL_MS, move |id| {
                let outcome = entity_strip.borrow_mut().strip_tick();
                match outcome {
                    StripOutcome::Stripped => {
                        let remaining = entity_strip.borrow().text().to_string();
                        div_strip.set_text_content(Some(&remaining));
                    }
                    StripOutcome::Finished => {
                        dom::remove_from_body(&div_strip);
                        timers::clear_interval(id);
                    }
                    StripOutcome::Idle => timers::clear_interval(id),
                }
            });
        });
    }) as Box<dyn FnMut()>);
    _ = div_for_listener
        .add_event_listener_with_callback("mouseover", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Open the transient input capture widget at the last click position.
/// Enter confirms: the box goes away and, if the session is still under the
/// cap, a floating-text entity takes its place.
pub fn spawn_input_box(
    document: &web::Document,
    x: f32,
    y: f32,
    session: Rc<RefCell<Session>>,
    scene: Rc<RefCell<Scene>>,
) {
    let input: web::HtmlInputElement = match document
        .create_element("input")
        .ok()
        .and_then(|el| el.dyn_into().ok())
    {
        Some(el) => el,
        None => {
            log::error!("[text] could not create input element");
            return;
        }
    };
    input.set_type("text");
    let style = input.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("width", &format!("{INPUT_BOX_WIDTH_PX}px"));
    _ = style.set_property("background", INPUT_BOX_BACKGROUND);
    _ = style.set_property("border", "none");
    _ = style.set_property("padding", "5px");
    dom::set_element_position(&input, x, y);
    if let Some(body) = document.body() {
        _ = body.append_child(&input);
    }
    _ = input.focus();

    let input_for_listener = input.clone();
    let document = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        let value = input.value();
        dom::remove_from_body(&input);

        use crate::core::EntryOutcome;
        let outcome = session.borrow_mut().register_entry();
        match outcome {
            EntryOutcome::Created { swap_now } => {
                spawn_floating_text(&document, value, x, y);
                log::info!("[text] entry {} created", session.borrow().entry_count());
                if swap_now {
                    swap::begin_model_swap(scene.clone(), session.clone());
                }
            }
            EntryOutcome::CapReached => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = input_for_listener
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
