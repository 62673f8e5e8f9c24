//! RON persistence for a blender's preset pair.
//!
//! The blender itself keeps nothing across lifecycles; embedders that want the
//! presets to survive a restart save and load a [`PresetFile`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::blender::{BlenderState, MaterialParameterBlender, PresetSlot};
use crate::params::ParameterSet;

/// Errors returned while reading or writing a preset file.
#[derive(Debug, Error)]
pub enum PresetError {
    /// I/O error reading or writing the file.
    #[error("preset io error: {0}")]
    Io(#[from] std::io::Error),

    /// RON deserialization error.
    #[error("failed to parse presets: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// RON serialization error.
    #[error("failed to serialize presets: {0}")]
    Serialize(#[from] ron::Error),
}

/// On-disk form of the two presets and the blend factor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetFile {
    pub preset_a: ParameterSet,
    pub preset_b: ParameterSet,
    pub blend_factor: f32,
}

impl PresetFile {
    /// Read a preset file.
    pub fn load(path: &Path) -> Result<Self, PresetError> {
        let contents = std::fs::read_to_string(path)?;
        let file: PresetFile = ron::from_str(&contents)?;
        info!(path = %path.display(), "loaded material presets");
        Ok(file)
    }

    /// Write this preset file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), PresetError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, serialized)?;
        info!(path = %path.display(), "saved material presets");
        Ok(())
    }
}

impl MaterialParameterBlender {
    /// Blender seeded from a preset file, with preset A active.
    pub fn from_preset_file(file: &PresetFile) -> Self {
        Self::from_state(BlenderState {
            preset_a: file.preset_a,
            preset_b: file.preset_b,
            active: PresetSlot::A,
            blend_factor: file.blend_factor,
        })
    }

    /// Snapshot of the current presets and blend factor.
    pub fn to_preset_file(&self) -> PresetFile {
        let state = self.state();
        PresetFile {
            preset_a: state.preset_a,
            preset_b: state.preset_b,
            blend_factor: state.blend_factor,
        }
    }
}
