//! Constant-speed turntable for the preview model.

use glam::Quat;

/// Spins a model about the world Y axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spinner {
    /// Degrees per second. The editor slider spans `[0, 360]`; other values are accepted.
    pub speed_deg_per_sec: f32,
    /// Current orientation.
    pub rotation: Quat,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Spinner {
    pub fn new(speed_deg_per_sec: f32) -> Self {
        Self {
            speed_deg_per_sec,
            rotation: Quat::IDENTITY,
        }
    }

    /// Advance by `dt` seconds. The step is applied in world space, ahead of
    /// the existing orientation.
    pub fn tick(&mut self, dt: f32) {
        let step = Quat::from_rotation_y((self.speed_deg_per_sec * dt).to_radians());
        self.rotation = (step * self.rotation).normalize();
    }
}
