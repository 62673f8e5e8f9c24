//! Shading preset: the Disney-BRDF parameter record edited by the wizard.

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ParameterSet
// ---------------------------------------------------------------------------

/// One shading preset.
///
/// The ranges noted on each field are the slider bounds of the editing UI.
/// They are advisory only: nothing in this crate clamps or validates them, and
/// out-of-range values flow through blending and publishing unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Selects an external texture bundle. Opaque to the blender and never interpolated.
    pub texture_set_index: i32,
    /// Base color, linear RGB, nominally `[0.0, 1.0]` per channel.
    pub base_color: Vec3,
    /// Normal map strength, nominally `>= 0.0`.
    pub normal_scale: f32,
    /// \[0.0, 1.0\]
    pub metallic: f32,
    /// \[0.0, 1.0\]
    pub subsurface: f32,
    /// \[0.0, 1.0\]
    pub specular: f32,
    /// \[0.0, 1.0\]
    pub specular_tint: f32,
    /// Lower bound on roughness fed to the shader, nominally `[0.0, 1.0]`.
    pub minimum_roughness: f32,
    /// \[0.0, 1.0\]
    pub anisotropic: f32,
    /// \[0.0, 1.0\]
    pub sheen: f32,
    /// \[0.0, 1.0\]
    pub sheen_tint: f32,
    /// \[0.0, 1.0\]
    pub clear_coat: f32,
    /// \[0.0, 1.0\]
    pub clear_coat_gloss: f32,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            texture_set_index: 0,
            base_color: Vec3::ONE,
            normal_scale: 1.0,
            metallic: 0.0,
            subsurface: 0.0,
            specular: 0.0,
            specular_tint: 0.0,
            minimum_roughness: 0.4,
            anisotropic: 0.0,
            sheen: 0.0,
            sheen_tint: 0.0,
            clear_coat: 0.0,
            clear_coat_gloss: 0.0,
        }
    }
}

impl ParameterSet {
    /// Field-wise linear interpolation from `self` toward `other`.
    ///
    /// `t` is not clamped: values outside `[0.0, 1.0]` extrapolate. The
    /// returned `texture_set_index` is `self`'s, since an identifier has no
    /// meaningful midpoint; callers that need both indices read them from the
    /// source presets.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            texture_set_index: self.texture_set_index,
            base_color: self.base_color.lerp(other.base_color, t),
            normal_scale: lerp(self.normal_scale, other.normal_scale, t),
            metallic: lerp(self.metallic, other.metallic, t),
            subsurface: lerp(self.subsurface, other.subsurface, t),
            specular: lerp(self.specular, other.specular, t),
            specular_tint: lerp(self.specular_tint, other.specular_tint, t),
            minimum_roughness: lerp(self.minimum_roughness, other.minimum_roughness, t),
            anisotropic: lerp(self.anisotropic, other.anisotropic, t),
            sheen: lerp(self.sheen, other.sheen, t),
            sheen_tint: lerp(self.sheen_tint, other.sheen_tint, t),
            clear_coat: lerp(self.clear_coat, other.clear_coat, t),
            clear_coat_gloss: lerp(self.clear_coat_gloss, other.clear_coat_gloss, t),
        }
    }
}

/// Unclamped scalar lerp, `a + (b - a) * t`.
///
/// Same formula as [`Vec3::lerp`], so scalar and color fields of a blend agree.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
