//! Uniform sink: the named shader-parameter table the blender publishes into.
//!
//! [`UniformSink`] is the write surface a material or shader binding exposes.
//! [`UniformTable`] is an in-memory implementation that keeps the latest value
//! per name plus an ordered log of writes.

use std::collections::BTreeMap;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Uniform names shared with the downstream shader. Changing any of these breaks the shader binding.
pub mod names {
    pub const BASE_COLOR: &str = "_BaseColor";
    pub const NORMAL_STRENGTH: &str = "_NormalStrength";
    pub const METALLIC: &str = "_Metallic";
    pub const SUBSURFACE: &str = "_Subsurface";
    pub const SPECULAR: &str = "_Specular";
    pub const SPECULAR_TINT: &str = "_SpecularTint";
    pub const ROUGHNESS: &str = "_Roughness";
    pub const ANISOTROPIC: &str = "_Anisotropic";
    pub const SHEEN: &str = "_Sheen";
    pub const SHEEN_TINT: &str = "_SheenTint";
    pub const CLEAR_COAT: &str = "_ClearCoat";
    pub const CLEAR_COAT_GLOSS: &str = "_ClearCoatGloss";
    pub const TEXTURE_SET_INDEX_1: &str = "_TextureSetIndex1";
    pub const TEXTURE_SET_INDEX_2: &str = "_TextureSetIndex2";
    pub const BLEND_FACTOR: &str = "_BlendFactor";
}

// ---------------------------------------------------------------------------
// TextureHandle
// ---------------------------------------------------------------------------

/// Opaque reference to a texture owned by the embedding renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

// ---------------------------------------------------------------------------
// UniformSink
// ---------------------------------------------------------------------------

/// Key-value write surface for shader uniforms.
///
/// Implementors are not owned by the blender; they are borrowed mutably for
/// the duration of a publish.
pub trait UniformSink {
    /// Write a 3-component vector uniform.
    fn set_vector3(&mut self, name: &str, value: Vec3);

    /// Write a scalar float uniform.
    fn set_float(&mut self, name: &str, value: f32);

    /// Write an integer uniform.
    fn set_int(&mut self, name: &str, value: i32);

    /// Bind a texture to a sampler uniform.
    fn set_texture(&mut self, name: &str, handle: TextureHandle);
}

// ---------------------------------------------------------------------------
// UniformValue / UniformTable
// ---------------------------------------------------------------------------

/// A single value written to a [`UniformSink`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum UniformValue {
    Vector3(Vec3),
    Float(f32),
    Int(i32),
    Texture(TextureHandle),
}

/// One recorded write: uniform name and the value written.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformWrite {
    pub name: String,
    pub value: UniformValue,
}

/// In-memory [`UniformSink`].
///
/// `values` always holds the most recent value per name; `writes` records every
/// call in order until drained with [`UniformTable::take_writes`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UniformTable {
    values: BTreeMap<String, UniformValue>,
    #[serde(skip)]
    writes: Vec<UniformWrite>,
}

impl UniformTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest value written under `name`, if any.
    pub fn get(&self, name: &str) -> Option<UniformValue> {
        self.values.get(name).copied()
    }

    /// Latest float written under `name`. `None` if absent or of another type.
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.get(name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Latest integer written under `name`. `None` if absent or of another type.
    pub fn int(&self, name: &str) -> Option<i32> {
        match self.get(name)? {
            UniformValue::Int(v) => Some(v),
            _ => None,
        }
    }

    /// Latest vector written under `name`. `None` if absent or of another type.
    pub fn vector3(&self, name: &str) -> Option<Vec3> {
        match self.get(name)? {
            UniformValue::Vector3(v) => Some(v),
            _ => None,
        }
    }

    /// Latest texture bound under `name`. `None` if absent or of another type.
    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        match self.get(name)? {
            UniformValue::Texture(v) => Some(v),
            _ => None,
        }
    }

    /// Number of distinct uniform names written so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, latest value)` in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Drain the ordered write log, leaving the latest values in place.
    pub fn take_writes(&mut self) -> Vec<UniformWrite> {
        std::mem::take(&mut self.writes)
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        self.values.insert(name.to_owned(), value);
        self.writes.push(UniformWrite {
            name: name.to_owned(),
            value,
        });
    }
}

impl UniformSink for UniformTable {
    fn set_vector3(&mut self, name: &str, value: Vec3) {
        self.record(name, UniformValue::Vector3(value));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.record(name, UniformValue::Float(value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.record(name, UniformValue::Int(value));
    }

    fn set_texture(&mut self, name: &str, handle: TextureHandle) {
        self.record(name, UniformValue::Texture(handle));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_write_wins() {
        let mut table = UniformTable::new();
        table.set_float(names::METALLIC, 0.2);
        table.set_float(names::METALLIC, 0.7);
        assert_eq!(table.float(names::METALLIC), Some(0.7));
        assert_eq!(table.len(), 1);
        assert_eq!(table.take_writes().len(), 2);
    }

    #[test]
    fn test_typed_getters_reject_other_types() {
        let mut table = UniformTable::new();
        table.set_int(names::TEXTURE_SET_INDEX_1, 3);
        assert_eq!(table.int(names::TEXTURE_SET_INDEX_1), Some(3));
        assert_eq!(table.float(names::TEXTURE_SET_INDEX_1), None);
        assert_eq!(table.vector3("_Missing"), None);
    }

    #[test]
    fn test_take_writes_preserves_order_and_clears_log() {
        let mut table = UniformTable::new();
        table.set_vector3(names::BASE_COLOR, Vec3::ONE);
        table.set_texture("_Albedo1", TextureHandle(9));
        let writes = table.take_writes();
        assert_eq!(writes[0].name, names::BASE_COLOR);
        assert_eq!(writes[1].value, UniformValue::Texture(TextureHandle(9)));
        assert!(table.take_writes().is_empty());
        assert_eq!(table.texture("_Albedo1"), Some(TextureHandle(9)));
    }

    #[test]
    fn test_table_serializes_to_json() {
        let mut table = UniformTable::new();
        table.set_float(names::BLEND_FACTOR, 0.5);
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains("_BlendFactor"));
        assert!(!json.contains("writes"));
    }
}
