//! Material parameter blending: two Disney-BRDF presets, a cross-fade between
//! them, and publication of the blended set to a named uniform table.

mod blender;
mod params;
mod presets;
mod sink;
mod texture_sets;
mod wizard;

pub use blender::{
    BlendError, BlendedMaterialUniform, BlenderState, MaterialParameterBlender, PresetSlot,
};
pub use params::{ParameterSet, lerp};
pub use presets::{PresetError, PresetFile};
pub use sink::{TextureHandle, UniformSink, UniformTable, UniformValue, UniformWrite, names};
pub use texture_sets::{TextureSet, TextureSetError, TextureSetRegistry};
pub use wizard::{MaterialControls, MaterialWizard, TickReport, WizardOptions};
