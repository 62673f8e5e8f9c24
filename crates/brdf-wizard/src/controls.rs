//! Headless stand-in for the slider panel.
//!
//! Holds one "slider" reading and hands it back unchanged every tick, so the
//! wizard replays whatever preset is currently on display.

use brdf_materials::{MaterialControls, ParameterSet};

pub struct ReplayControls {
    shown: ParameterSet,
    selected: usize,
    blend_factor: f32,
}

impl ReplayControls {
    pub fn new(selected: usize, blend_factor: f32) -> Self {
        Self {
            shown: ParameterSet::default(),
            selected,
            blend_factor,
        }
    }
}

impl MaterialControls for ReplayControls {
    fn read_current_ui_values(&self) -> ParameterSet {
        self.shown
    }

    fn selected_preset(&self) -> usize {
        self.selected
    }

    fn blend_factor(&self) -> f32 {
        self.blend_factor
    }

    fn display_values(&mut self, values: &ParameterSet) {
        self.shown = *values;
    }
}
