// Damped orbit camera around the scene origin.

use glam::{Mat4, Vec3};

/// Exponential decay rate for orbit velocity (per second).
const ORBIT_DAMPING_PER_SEC: f32 = 6.0;
/// Orbit velocity (radians per second) gained per CSS pixel of drag.
const ORBIT_ROTATE_SPEED: f32 = 0.3;
/// Keep the pitch away from the poles so the view matrix stays well formed.
const PITCH_LIMIT: f32 = 1.5;

pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: Vec3,
    yaw_vel: f32,
    pitch_vel: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    /// Build from an explicit eye position looking at `target`.
    pub fn from_eye(eye: Vec3, target: Vec3, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-3);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            yaw,
            pitch,
            distance,
            target,
            yaw_vel: 0.0,
            pitch_vel: 0.0,
            fovy_radians,
            znear,
            zfar,
        }
    }

    /// Feed a pointer drag delta (CSS pixels). Velocity carries the motion so
    /// the orbit keeps drifting briefly after release, like damped controls.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.yaw_vel -= dx * ORBIT_ROTATE_SPEED;
        self.pitch_vel += dy * ORBIT_ROTATE_SPEED;
    }

    /// Per-frame integration with exponential damping.
    pub fn update(&mut self, dt_sec: f32) {
        self.yaw += self.yaw_vel * dt_sec;
        self.pitch = (self.pitch + self.pitch_vel * dt_sec).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let decay = (-dt_sec * ORBIT_DAMPING_PER_SEC).exp();
        self.yaw_vel *= decay;
        self.pitch_vel *= decay;
    }

    pub fn eye(&self) -> Vec3 {
        let cp = self.pitch.cos();
        self.target
            + Vec3::new(
                self.distance * cp * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                self.distance * cp * self.yaw.cos(),
            )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, aspect.max(1e-3), self.znear, self.zfar)
            * self.view_matrix()
    }
}
