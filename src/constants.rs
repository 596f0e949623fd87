/// Scene setup and interaction tuning constants.
///
/// Simulation-side reference values (particle counts, fade steps, timer
/// intervals) live next to the core modules that own them; everything here
/// is scene dressing: asset URLs, placement transforms, camera framing, and
/// DOM styling for the floating-text layer.
// Asset locations, relative to the page
pub const INITIAL_MODEL_URL: &str = "model/import1.glb";
pub const SWAP_MODEL_URL: &str = "model/import2.glb";
pub const CORNER_MODEL_URL: &str = "model/13.glb";
pub const BACKDROP_IMAGE_URL: &str = "image.png";

// Primary model placement (both the initial asset and its replacement)
pub const MODEL_SCALE: f32 = 11.0;
pub const MODEL_POSITION: [f32; 3] = [-25.0, -60.0, -10.0];
pub const MODEL_ROTATION_X: f32 = -0.2;
pub const MODEL_ROTATION_Y: f32 = 0.1;

// Corner replicas: position plus yaw, one per corner
pub const CORNER_MODEL_SCALE: f32 = 12.0;
pub const CORNER_PLACEMENTS: [([f32; 3], f32); 4] = [
    ([-50.0, 0.0, -50.0], std::f32::consts::FRAC_PI_2),
    ([50.0, 0.0, -50.0], -std::f32::consts::FRAC_PI_2),
    ([-50.0, 0.0, 50.0], std::f32::consts::PI),
    ([50.0, 0.0, 50.0], 0.0),
];

// Camera framing
pub const CAMERA_EYE: [f32; 3] = [15.0, 40.0, 100.0];
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 3000.0;

// Particle sprite size in world units
pub const PARTICLE_SIZE: f32 = 1.5;

// Floating-text DOM styling
pub const TEXT_COLOR: &str = "#fff";
pub const TEXT_DISSOLVE_COLOR: &str = "#E34E2E";
pub const TEXT_FONT: &str = "46px 'Sankofa Display', sans-serif";
// Long transition so each relocation reads as a slow drift
pub const TEXT_DRIFT_TRANSITION: &str = "left 20s, top 20s";

// Input capture widget styling
pub const INPUT_BOX_WIDTH_PX: f32 = 300.0;
pub const INPUT_BOX_BACKGROUND: &str = "rgba(255, 255, 255, 0.5)";

// DOM ids owned by the host page
pub const CANVAS_ID: &str = "scene-canvas";
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";
pub const LOADING_BAR_ID: &str = "loading-bar";
pub const AUDIO_BUTTON_ID: &str = "audio-control";
pub const AUDIO_ELEMENT_ID: &str = "background-audio";
