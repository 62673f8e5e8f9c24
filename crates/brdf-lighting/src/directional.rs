//! Directional light: the single key light of the preview scene.
//!
//! [`LightControls`] is the raw slider reading (color, intensity and two
//! angles). [`DirectionalLight`] is the CPU-side light built from it, and
//! [`DirectionalLightUniform`] the GPU-side representation written each frame.

use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Quat, Vec3};

/// Slider reading for the light, applied verbatim every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightControls {
    /// Linear RGB color, nominally `[0.0, 1.0]` per channel.
    pub color: Vec3,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Pitch in degrees (rotation about X).
    pub vertical_deg: f32,
    /// Yaw in degrees (rotation about Y).
    pub horizontal_deg: f32,
}

impl Default for LightControls {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 1.0,
            vertical_deg: 50.0,
            horizontal_deg: -30.0,
        }
    }
}

/// CPU-side directional light description.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    /// Orientation of the light. Roll is always zero.
    pub rotation: Quat,
    /// Normalized direction the light travels (toward the surface).
    pub direction: Vec3,
    /// Linear RGB color of the light (not premultiplied by intensity).
    pub color: Vec3,
    /// Scalar intensity multiplier.
    pub intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::from_controls(&LightControls::default())
    }
}

impl DirectionalLight {
    /// Build the light from a slider reading.
    ///
    /// Color and intensity are taken as-is. The rotation is yaw, then pitch,
    /// then zero roll (`Y * X * Z`), and the light shines along its local +Z.
    pub fn from_controls(controls: &LightControls) -> Self {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            controls.horizontal_deg.to_radians(),
            controls.vertical_deg.to_radians(),
            0.0,
        );
        Self {
            rotation,
            direction: (rotation * Vec3::Z).normalize(),
            color: controls.color,
            intensity: controls.intensity,
        }
    }

    /// Re-apply a slider reading in place.
    pub fn apply_controls(&mut self, controls: &LightControls) {
        *self = Self::from_controls(controls);
    }

    /// Build the GPU-side uniform from this light's properties.
    pub fn to_uniform(&self) -> DirectionalLightUniform {
        DirectionalLightUniform {
            direction_intensity: [
                self.direction.x,
                self.direction.y,
                self.direction.z,
                self.intensity,
            ],
            color_padding: [self.color.x, self.color.y, self.color.z, 0.0],
        }
    }
}

/// GPU-side representation, 32 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// xyz = direction (normalized), w = intensity.
    pub direction_intensity: [f32; 4],
    /// xyz = color (linear RGB), w = padding.
    pub color_padding: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls(vertical_deg: f32, horizontal_deg: f32) -> LightControls {
        LightControls {
            vertical_deg,
            horizontal_deg,
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_angles_shine_along_z() {
        let light = DirectionalLight::from_controls(&controls(0.0, 0.0));
        assert!((light.direction - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_vertical_ninety_points_straight_down() {
        let light = DirectionalLight::from_controls(&controls(90.0, 0.0));
        assert!((light.direction - Vec3::NEG_Y).length() < 1e-5, "{:?}", light.direction);
    }

    #[test]
    fn test_horizontal_ninety_turns_toward_x() {
        let light = DirectionalLight::from_controls(&controls(0.0, 90.0));
        assert!((light.direction - Vec3::X).length() < 1e-5, "{:?}", light.direction);
    }

    #[test]
    fn test_yaw_applies_after_pitch() {
        // Pitched down 45 degrees, then turned 90 degrees: the horizontal part
        // of the direction lies along +X, the vertical part is unchanged.
        let light = DirectionalLight::from_controls(&controls(45.0, 90.0));
        let h = std::f32::consts::FRAC_1_SQRT_2;
        assert!((light.direction - Vec3::new(h, -h, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_direction_is_normalized() {
        for (v, h) in [(50.0, -30.0), (-120.0, 400.0), (13.0, 77.0)] {
            let light = DirectionalLight::from_controls(&controls(v, h));
            assert!((light.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_color_and_intensity_are_not_clamped() {
        let light = DirectionalLight::from_controls(&LightControls {
            color: Vec3::new(2.0, -1.0, 0.5),
            intensity: 8.0,
            ..Default::default()
        });
        assert_eq!(light.color, Vec3::new(2.0, -1.0, 0.5));
        assert_eq!(light.intensity, 8.0);
    }

    #[test]
    fn test_apply_controls_replaces_state() {
        let mut light = DirectionalLight::default();
        light.apply_controls(&controls(90.0, 0.0));
        assert!((light.direction - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn test_uniform_buffer_layout_matches_shader() {
        assert_eq!(std::mem::size_of::<DirectionalLightUniform>(), 32);
        assert_eq!(
            std::mem::offset_of!(DirectionalLightUniform, direction_intensity),
            0
        );
        assert_eq!(
            std::mem::offset_of!(DirectionalLightUniform, color_padding),
            16
        );
    }

    #[test]
    fn test_to_uniform_packs_correctly() {
        let light = DirectionalLight::from_controls(&LightControls {
            color: Vec3::new(1.0, 0.5, 0.25),
            intensity: 2.0,
            vertical_deg: 90.0,
            horizontal_deg: 0.0,
        });
        let u = light.to_uniform();
        assert!((u.direction_intensity[1] - (-1.0)).abs() < 1e-5);
        assert!((u.direction_intensity[3] - 2.0).abs() < 1e-6);
        assert!((u.color_padding[0] - 1.0).abs() < 1e-6);
        assert!((u.color_padding[1] - 0.5).abs() < 1e-6);
        assert!((u.color_padding[2] - 0.25).abs() < 1e-6);
        assert!((u.color_padding[3] - 0.0).abs() < 1e-6);
    }
}
