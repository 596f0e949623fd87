// Floating-text entity lifecycle: `Active -> Dissolving -> Removed`.
//
// The state machine is the single authority on what a timer tick may do.
// A relocation tick that was already queued when dissolution began hits the
// `Active` guard and does nothing, so cancellation does not depend on the
// host clearing the interval fast enough.

use rand::Rng;

pub const RELOCATE_INTERVAL_MS: i32 = 2000;
pub const DISSOLVE_DELAY_MS: i32 = 1000;
pub const STRIP_INTERVAL_MS: i32 = 500;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextState {
    Active,
    Dissolving,
    Removed,
}

/// Result of one character-strip tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StripOutcome {
    /// A character was removed; more remain.
    Stripped,
    /// The last character went; the entity is now `Removed`.
    Finished,
    /// Not dissolving (stale or duplicate tick), nothing happened.
    Idle,
}

pub struct FloatingText {
    text: String,
    x: f32,
    y: f32,
    state: TextState,
}

impl FloatingText {
    pub fn new(text: String, x: f32, y: f32) -> Self {
        Self {
            text,
            x,
            y,
            state: TextState::Active,
        }
    }

    pub fn state(&self) -> TextState {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Periodic relocation while `Active`: pick a fresh uniform position
    /// inside the viewport. Any other state makes this a no-op.
    pub fn relocate_tick(
        &mut self,
        view_w: f32,
        view_h: f32,
        rng: &mut impl Rng,
    ) -> Option<(f32, f32)> {
        if self.state != TextState::Active {
            return None;
        }
        self.x = rng.gen::<f32>() * view_w;
        self.y = rng.gen::<f32>() * view_h;
        Some((self.x, self.y))
    }

    /// Enter `Dissolving`. Returns true only on the first call from `Active`,
    /// which is the host's cue to cancel the relocation timer and schedule
    /// character stripping.
    pub fn begin_dissolve(&mut self) -> bool {
        if self.state != TextState::Active {
            return false;
        }
        self.state = TextState::Dissolving;
        true
    }

    /// Strip the leftmost character. On the last one the entity transitions
    /// to `Removed`; later ticks are `Idle`.
    pub fn strip_tick(&mut self) -> StripOutcome {
        if self.state != TextState::Dissolving {
            return StripOutcome::Idle;
        }
        let mut chars = self.text.chars();
        chars.next();
        self.text = chars.as_str().to_string();
        if self.text.is_empty() {
            self.state = TextState::Removed;
            StripOutcome::Finished
        } else {
            StripOutcome::Stripped
        }
    }
}
