// Cross-fade between the current model and a freshly loaded replacement.
//
// The fade is an integer step counter so that "0 to 1 in 0.01 steps" is
// exactly 100 ticks regardless of float accumulation. Scene mutation is
// split into attach / apply / complete so the timer callback stays thin and
// a failed load never touches the scene at all.

use super::scene::{Node, NodeId, Scene};
use super::session::Session;

pub const FADE_TICK_MS: i32 = 30;
pub const FADE_STEP: f32 = 0.01;
pub const FADE_STEPS: u32 = 100;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FadeProgress {
    Fading(f32),
    Complete,
}

pub struct ModelFade {
    steps: u32,
}

impl ModelFade {
    pub fn new() -> Self {
        Self { steps: 0 }
    }

    pub fn opacity(&self) -> f32 {
        (self.steps as f32 * FADE_STEP).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.steps >= FADE_STEPS
    }

    pub fn step(&mut self) -> FadeProgress {
        if self.is_complete() {
            return FadeProgress::Complete;
        }
        self.steps += 1;
        if self.is_complete() {
            FadeProgress::Complete
        } else {
            FadeProgress::Fading(self.opacity())
        }
    }
}

impl Default for ModelFade {
    fn default() -> Self {
        Self::new()
    }
}

/// Add the incoming asset fully transparent, alongside the current model.
pub fn attach_incoming(scene: &mut Scene, mut node: Node) -> NodeId {
    node.set_opacity(0.0);
    scene.add(node)
}

/// Push the current fade opacity onto every renderable part of the incoming
/// asset. A missing node (already swapped or torn down) is a no-op.
pub fn apply_fade(scene: &mut Scene, incoming: NodeId, opacity: f32) {
    if let Some(node) = scene.get_mut(incoming) {
        node.set_opacity(opacity);
    }
}

/// Finish the swap: the incoming asset becomes opaque and current, and the
/// outgoing asset leaves the scene. Returns the detached old model, if any.
pub fn complete_swap(scene: &mut Scene, session: &mut Session, incoming: NodeId) -> Option<Node> {
    if let Some(node) = scene.get_mut(incoming) {
        node.set_opacity(1.0);
    }
    let outgoing = session.current_model.take();
    session.current_model = Some(incoming);
    outgoing.and_then(|id| scene.remove(id))
}
