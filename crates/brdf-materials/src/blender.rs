//! Two-preset material blender.
//!
//! [`MaterialParameterBlender`] owns preset A and preset B, routes edits to the
//! active one, cross-fades the pair by a blend factor and publishes the result
//! to a [`UniformSink`].

use bytemuck::{Pod, Zeroable};
use thiserror::Error;
use tracing::{debug, trace};

use crate::params::ParameterSet;
use crate::sink::{UniformSink, names};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by the blender.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlendError {
    /// The preset index was neither 0 nor 1.
    #[error("invalid preset index {0}, expected 0 or 1")]
    InvalidIndex(usize),
}

// ---------------------------------------------------------------------------
// PresetSlot
// ---------------------------------------------------------------------------

/// Which of the two presets an operation refers to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PresetSlot {
    #[default]
    A,
    B,
}

impl PresetSlot {
    /// Numeric index as exposed to the UI (A = 0, B = 1).
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// The other slot.
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl TryFrom<usize> for PresetSlot {
    type Error = BlendError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::A),
            1 => Ok(Self::B),
            other => Err(BlendError::InvalidIndex(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// BlenderState
// ---------------------------------------------------------------------------

/// The complete mutable state of a blender.
///
/// Both presets are owned here and never aliased. `blend_factor` is stored
/// exactly as given; values outside `[0.0, 1.0]` are kept.
#[derive(Clone, Debug, PartialEq)]
pub struct BlenderState {
    pub preset_a: ParameterSet,
    pub preset_b: ParameterSet,
    pub active: PresetSlot,
    pub blend_factor: f32,
}

impl Default for BlenderState {
    fn default() -> Self {
        Self {
            preset_a: ParameterSet::default(),
            preset_b: ParameterSet::default(),
            active: PresetSlot::A,
            blend_factor: 0.0,
        }
    }
}

impl BlenderState {
    /// Borrow the preset in `slot`.
    pub fn preset(&self, slot: PresetSlot) -> &ParameterSet {
        match slot {
            PresetSlot::A => &self.preset_a,
            PresetSlot::B => &self.preset_b,
        }
    }

    fn preset_mut(&mut self, slot: PresetSlot) -> &mut ParameterSet {
        match slot {
            PresetSlot::A => &mut self.preset_a,
            PresetSlot::B => &mut self.preset_b,
        }
    }
}

// ---------------------------------------------------------------------------
// MaterialParameterBlender
// ---------------------------------------------------------------------------

/// Holds two presets and produces the blended uniform set each tick.
///
/// Single-writer: callers that share a blender across threads must wrap it in
/// their own lock so that edits and publishes see a consistent snapshot.
#[derive(Clone, Debug, Default)]
pub struct MaterialParameterBlender {
    state: BlenderState,
}

impl MaterialParameterBlender {
    /// Fresh blender: both presets default, preset A active, blend factor 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a blender around existing state.
    pub fn from_state(state: BlenderState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BlenderState {
        &self.state
    }

    /// Overwrite the active preset with `values`. No validation is applied.
    pub fn apply_edit(&mut self, values: ParameterSet) {
        let slot = self.state.active;
        *self.state.preset_mut(slot) = values;
    }

    /// Select which preset receives subsequent edits.
    ///
    /// Does not move any values between presets.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::InvalidIndex`] if `index` is not 0 or 1; the
    /// active preset is left unchanged.
    pub fn set_active(&mut self, index: usize) -> Result<(), BlendError> {
        let slot = PresetSlot::try_from(index)?;
        if slot != self.state.active {
            debug!(from = ?self.state.active, to = ?slot, "active preset changed");
        }
        self.state.active = slot;
        Ok(())
    }

    pub fn active(&self) -> PresetSlot {
        self.state.active
    }

    /// Active preset as a UI index (0 or 1).
    pub fn active_index(&self) -> usize {
        self.state.active.index()
    }

    /// Copy of the active preset, for the UI to repopulate its controls.
    pub fn read_active(&self) -> ParameterSet {
        *self.state.preset(self.state.active)
    }

    /// Set the cross-fade weight toward preset B. Not clamped.
    pub fn set_blend_factor(&mut self, t: f32) {
        self.state.blend_factor = t;
    }

    pub fn blend_factor(&self) -> f32 {
        self.state.blend_factor
    }

    /// Blended parameter set for the current blend factor.
    ///
    /// Pure: depends only on the two presets and the blend factor. The
    /// `texture_set_index` of the result is preset A's; both indices are
    /// published separately by [`publish`](Self::publish).
    pub fn blend(&self) -> ParameterSet {
        self.state
            .preset_a
            .lerp(&self.state.preset_b, self.state.blend_factor)
    }

    /// Write the blended set, both texture-set indices and the blend factor to `sink`.
    ///
    /// Writes the same names in the same order on every call, so publishing
    /// twice without a state change produces identical writes.
    pub fn publish(&self, sink: &mut impl UniformSink) {
        let blended = self.blend();

        sink.set_vector3(names::BASE_COLOR, blended.base_color);
        sink.set_float(names::NORMAL_STRENGTH, blended.normal_scale);
        sink.set_float(names::METALLIC, blended.metallic);
        sink.set_float(names::SUBSURFACE, blended.subsurface);
        sink.set_float(names::SPECULAR, blended.specular);
        sink.set_float(names::SPECULAR_TINT, blended.specular_tint);
        sink.set_float(names::ROUGHNESS, blended.minimum_roughness);
        sink.set_float(names::ANISOTROPIC, blended.anisotropic);
        sink.set_float(names::SHEEN, blended.sheen);
        sink.set_float(names::SHEEN_TINT, blended.sheen_tint);
        sink.set_float(names::CLEAR_COAT, blended.clear_coat);
        sink.set_float(names::CLEAR_COAT_GLOSS, blended.clear_coat_gloss);

        sink.set_int(
            names::TEXTURE_SET_INDEX_1,
            self.state.preset_a.texture_set_index,
        );
        sink.set_int(
            names::TEXTURE_SET_INDEX_2,
            self.state.preset_b.texture_set_index,
        );
        sink.set_float(names::BLEND_FACTOR, self.state.blend_factor);

        trace!(blend_factor = self.state.blend_factor, "published material uniforms");
    }

    /// Pack the published values into a single GPU uniform block.
    pub fn to_uniform(&self) -> BlendedMaterialUniform {
        let b = self.blend();
        BlendedMaterialUniform {
            base_color_normal: [b.base_color.x, b.base_color.y, b.base_color.z, b.normal_scale],
            metallic_subsurface_specular_tint: [
                b.metallic,
                b.subsurface,
                b.specular,
                b.specular_tint,
            ],
            roughness_anisotropic_sheen_tint: [
                b.minimum_roughness,
                b.anisotropic,
                b.sheen,
                b.sheen_tint,
            ],
            clear_coat_gloss_blend_pad: [
                b.clear_coat,
                b.clear_coat_gloss,
                self.state.blend_factor,
                0.0,
            ],
            texture_sets: [
                self.state.preset_a.texture_set_index,
                self.state.preset_b.texture_set_index,
                0,
                0,
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// BlendedMaterialUniform
// ---------------------------------------------------------------------------

/// GPU-side blended material, 80 bytes, std140-compatible.
///
/// Carries exactly the values [`MaterialParameterBlender::publish`] writes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct BlendedMaterialUniform {
    /// xyz = base color, w = normal strength.
    pub base_color_normal: [f32; 4],
    /// x = metallic, y = subsurface, z = specular, w = specular tint.
    pub metallic_subsurface_specular_tint: [f32; 4],
    /// x = roughness, y = anisotropic, z = sheen, w = sheen tint.
    pub roughness_anisotropic_sheen_tint: [f32; 4],
    /// x = clear coat, y = clear coat gloss, z = blend factor, w = padding.
    pub clear_coat_gloss_blend_pad: [f32; 4],
    /// x = preset A texture set, y = preset B texture set, zw = padding.
    pub texture_sets: [i32; 4],
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
