//! Model swap wiring: load the replacement asset, then drive the timed
//! cross-fade over the scene graph.
//!
//! Loading happens off the frame loop via `spawn_local`; the loop keeps
//! rendering the old model while the fetch is in flight. A load failure is
//! logged and nothing is attached, so the scene stays in its last valid
//! state.

use crate::constants::*;
use crate::core::{transition, FadeProgress, ModelFade, Scene, Session, Transform};
use crate::loader;
use crate::timers;
use glam::{EulerRot, Quat, Vec3};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// Placement shared by the initial asset and its replacement.
pub fn primary_model_transform() -> Transform {
    Transform {
        translation: Vec3::from(MODEL_POSITION),
        rotation: Quat::from_euler(EulerRot::XYZ, MODEL_ROTATION_X, MODEL_ROTATION_Y, 0.0),
        scale: Vec3::splat(MODEL_SCALE),
    }
}

pub fn begin_model_swap(scene: Rc<RefCell<Scene>>, session: Rc<RefCell<Session>>) {
    log::info!("[swap] loading {SWAP_MODEL_URL}");
    spawn_local(async move {
        let mut node = match loader::load_model(SWAP_MODEL_URL).await {
            Ok(n) => n,
            Err(e) => {
                log::error!("[swap] load failed: {e:?}");
                return;
            }
        };
        node.transform = primary_model_transform();
        let incoming = transition::attach_incoming(&mut scene.borrow_mut(), node);

        let fade = RefCell::new(ModelFade::new());
        _ = timers::interval_with_id(transition::FADE_TICK_MS, move |id| {
            let progress = fade.borrow_mut().step();
            match progress {
                FadeProgress::Fading(opacity) => {
                    transition::apply_fade(&mut scene.borrow_mut(), incoming, opacity);
                }
                FadeProgress::Complete => {
                    transition::complete_swap(
                        &mut scene.borrow_mut(),
                        &mut session.borrow_mut(),
                        incoming,
                    );
                    timers::clear_interval(id);
                    log::info!("[swap] transition complete");
                }
            }
        });
    });
}
