#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use crate::constants::*;
use crate::core::{ParticleField, Scene, Session, Transform, PARTICLE_COUNT, PARTICLE_HALF_EXTENT};
use crate::input::{DragState, PointerTracker};
use glam::{Quat, Vec3};
use instant::Instant;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod floating;
mod frame;
mod input;
mod loader;
mod overlay;
mod render;
mod swap;
mod timers;

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

// The background track only starts on an explicit user action; autoplay is
// blocked anyway.
fn wire_audio_button(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, AUDIO_BUTTON_ID, move || {
        if let Some(el) = doc.get_element_by_id(AUDIO_ELEMENT_ID) {
            if let Ok(audio) = el.dyn_into::<web::HtmlAudioElement>() {
                match audio.play() {
                    Ok(promise) => {
                        spawn_local(async move {
                            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                                log::error!("[audio] playback failed: {:?}", e);
                            }
                        });
                    }
                    Err(e) => log::error!("[audio] playback failed: {:?}", e),
                }
            }
        }
    });
}

/// Load the primary asset into the scene and record it as the current model.
async fn load_initial_model(scene: &Rc<RefCell<Scene>>, session: &Rc<RefCell<Session>>) {
    let document = dom::window_document();
    match loader::load_model(INITIAL_MODEL_URL).await {
        Ok(mut node) => {
            node.transform = swap::primary_model_transform();
            let id = scene.borrow_mut().add(node);
            session.borrow_mut().current_model = Some(id);
            if let Some(doc) = &document {
                overlay::set_progress(doc, 1.0);
                overlay::hide(doc);
            }
        }
        Err(e) => {
            // Keep rendering whatever is present; there is no retry.
            log::error!("[loader] initial model failed: {e:?}");
        }
    }
}

/// Clone the secondary asset into the four corners of the floor.
async fn load_corner_replicas(scene: &Rc<RefCell<Scene>>) {
    match loader::load_model(CORNER_MODEL_URL).await {
        Ok(base) => {
            let mut ids: SmallVec<[crate::core::NodeId; 4]> = SmallVec::new();
            for (position, yaw) in CORNER_PLACEMENTS {
                let mut replica = base.clone();
                replica.transform = Transform {
                    translation: Vec3::from(position),
                    rotation: Quat::from_rotation_y(yaw),
                    scale: Vec3::splat(CORNER_MODEL_SCALE),
                };
                ids.push(scene.borrow_mut().add(replica));
            }
            log::info!("[scene] corner replicas placed: {}", ids.len());
        }
        Err(e) => log::error!("[loader] corner model failed: {e:?}"),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scene-web starting");

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
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);
    wire_audio_button(&document);

    // ---------------- Shared session state ----------------
    let scene = Rc::new(RefCell::new(Scene::new()));
    let session = Rc::new(RefCell::new(Session::new()));
    let tracker = Rc::new(RefCell::new(PointerTracker::new()));
    let camera = Rc::new(RefCell::new(OrbitCamera::from_eye(
        Vec3::from(CAMERA_EYE),
        Vec3::ZERO,
        CAMERA_FOVY_DEG.to_radians(),
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    )));
    let drag = Rc::new(RefCell::new(DragState::default()));

    let particles = ParticleField::new(PARTICLE_COUNT, PARTICLE_HALF_EXTENT, &mut rand::thread_rng());

    // Initialize WebGPU before kicking off asset loads
    let gpu = frame::init_gpu(&canvas, PARTICLE_COUNT).await;

    events::wire_pointer_handlers(events::PointerWiring {
        canvas: canvas.clone(),
        tracker: tracker.clone(),
        camera: camera.clone(),
        session: session.clone(),
        drag: drag.clone(),
    });
    events::wire_global_keydown(events::KeyWiring {
        session: session.clone(),
        scene: scene.clone(),
    });

    // Asset loads run concurrently with the frame loop; the scene renders
    // whatever has arrived so far.
    let pending_backdrop: Rc<RefCell<Option<loader::DecodedImage>>> =
        Rc::new(RefCell::new(None));
    {
        let pending_backdrop = pending_backdrop.clone();
        spawn_local(async move {
            match loader::load_image(BACKDROP_IMAGE_URL).await {
                Ok(img) => *pending_backdrop.borrow_mut() = Some(img),
                Err(e) => log::error!("[loader] backdrop failed: {e:?}"),
            }
        });
    }
    {
        let scene = scene.clone();
        let session = session.clone();
        spawn_local(async move {
            load_initial_model(&scene, &session).await;
        });
    }
    {
        let scene = scene.clone();
        spawn_local(async move {
            load_corner_replicas(&scene).await;
        });
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        tracker,
        particles,
        canvas,
        gpu,
        pending_backdrop,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
