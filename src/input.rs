// Pointer speed tracking and drag state: most-recent-wins, no smoothing.

/// Camera-drag bookkeeping for the pointer handlers.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f32,
    pub last_y: f32,
}

/// Instantaneous pointer speed derived from consecutive move events.
///
/// Speed is CSS pixels per millisecond over the last two samples. Only the
/// latest sample is retained; readers see whatever the last event produced.
#[derive(Default)]
pub struct PointerTracker {
    last_x: f32,
    last_y: f32,
    last_time_ms: f64,
    speed: f32,
    has_sample: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer-move sample and recompute the speed.
    ///
    /// Two events with the same timestamp would divide by zero; that sample
    /// contributes a defined speed of zero instead. The first sample ever
    /// also yields zero, since there is nothing to measure against.
    pub fn on_pointer_move(&mut self, x: f32, y: f32, time_ms: f64) {
        if self.has_sample {
            let dt = time_ms - self.last_time_ms;
            if dt > 0.0 {
                let dx = x - self.last_x;
                let dy = y - self.last_y;
                self.speed = (dx * dx + dy * dy).sqrt() / dt as f32;
            } else {
                self.speed = 0.0;
            }
        }
        self.last_x = x;
        self.last_y = y;
        self.last_time_ms = time_ms;
        self.has_sample = true;
    }

    pub fn current_speed(&self) -> f32 {
        self.speed
    }
}
