//! Texture-set lookup: resolves a preset's `texture_set_index` to texture handles.
//!
//! Each [`TextureSet`] maps sampler slot names (e.g. `"_Albedo"`) to handles.
//! [`TextureSetRegistry::bind_pair`] binds preset A's set under `<slot>1` and
//! preset B's under `<slot>2`, matching the `_TextureSetIndex1`/`2` convention.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sink::{TextureHandle, UniformSink};

/// Errors returned by texture-set lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureSetError {
    /// No texture set registered under this index.
    #[error("unknown texture set index {0}")]
    UnknownSet(i32),
}

/// A bundle of textures sampled together by one preset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextureSet {
    /// Sampler slot name -> texture.
    pub slots: BTreeMap<String, TextureHandle>,
}

impl TextureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style slot assignment.
    pub fn with_slot(mut self, slot: impl Into<String>, handle: TextureHandle) -> Self {
        self.slots.insert(slot.into(), handle);
        self
    }
}

/// Index -> [`TextureSet`] mapping.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TextureSetRegistry {
    sets: BTreeMap<i32, TextureSet>,
}

impl TextureSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `set` under `index`, returning the set it replaced.
    pub fn insert(&mut self, index: i32, set: TextureSet) -> Option<TextureSet> {
        self.sets.insert(index, set)
    }

    pub fn get(&self, index: i32) -> Option<&TextureSet> {
        self.sets.get(&index)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Bind the textures of both presets' sets to `sink`.
    ///
    /// Both indices are resolved before anything is written, so an unknown
    /// index leaves the sink untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TextureSetError::UnknownSet`] for the first index that has no
    /// registered set.
    pub fn bind_pair(
        &self,
        sink: &mut impl UniformSink,
        index_a: i32,
        index_b: i32,
    ) -> Result<(), TextureSetError> {
        let set_a = self.get(index_a).ok_or(TextureSetError::UnknownSet(index_a))?;
        let set_b = self.get(index_b).ok_or(TextureSetError::UnknownSet(index_b))?;

        for (slot, handle) in &set_a.slots {
            sink.set_texture(&format!("{slot}1"), *handle);
        }
        for (slot, handle) in &set_b.slots {
            sink.set_texture(&format!("{slot}2"), *handle);
        }
        Ok(())
    }
}
