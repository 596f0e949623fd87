// Falling-snow particle field.
//
// Positions live in one flat xyz buffer so the renderer can upload them
// straight to the GPU each frame. `advance` mutates in place and never
// allocates; the whole set is created once with the scene.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_HALF_EXTENT: f32 = 250.0;
pub const BASE_FALL_SPEED: f32 = 0.4;
pub const POINTER_SPEED_GAIN: f32 = 1.0;
pub const FLOOR_Y: f32 = -250.0;
pub const CEILING_Y: f32 = 250.0;

pub struct ParticleField {
    positions: Vec<f32>,
    floor_y: f32,
    ceiling_y: f32,
}

impl ParticleField {
    /// Allocate `count` particles uniformly inside a cube of the given
    /// half-extent, centered on the origin.
    pub fn new(count: usize, half_extent: f32, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        for _ in 0..count * 3 {
            positions.push(rng.gen_range(-half_extent..=half_extent));
        }
        Self {
            positions,
            floor_y: FLOOR_Y,
            ceiling_y: CEILING_Y,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat xyz buffer, suitable for `bytemuck::cast_slice`.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Per-frame update: everything falls by the base speed plus the current
    /// pointer speed; anything below the floor restarts at the ceiling.
    pub fn advance(&mut self, pointer_speed: f32) {
        let fall = BASE_FALL_SPEED + pointer_speed * POINTER_SPEED_GAIN;
        for i in (1..self.positions.len()).step_by(3) {
            self.positions[i] -= fall;
            if self.positions[i] < self.floor_y {
                self.positions[i] = self.ceiling_y;
            }
        }
    }
}
