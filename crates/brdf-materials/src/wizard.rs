//! Per-frame driver tying the editing UI to the blender.
//!
//! The UI is reached only through [`MaterialControls`]; the driver never holds
//! widget state of its own. Each [`MaterialWizard::tick`] swaps the displayed
//! preset when the selection changed, applies the current reading to the
//! active preset, updates the blend factor and publishes.

use tracing::debug;

use crate::blender::{BlendError, MaterialParameterBlender};
use crate::params::ParameterSet;
use crate::sink::UniformSink;

/// The editing UI as seen by the wizard.
pub trait MaterialControls {
    /// Current slider reading, as a complete preset.
    fn read_current_ui_values(&self) -> ParameterSet;

    /// Preset picked in the selector (0 or 1).
    fn selected_preset(&self) -> usize;

    /// Current cross-fade slider value.
    fn blend_factor(&self) -> f32;

    /// Repopulate the controls after the active preset changed.
    fn display_values(&mut self, values: &ParameterSet);
}

/// What a single tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The active preset changed and the controls were repopulated.
    pub swapped: bool,
    /// Uniforms were written to the sink.
    pub published: bool,
}

/// Options for [`MaterialWizard`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WizardOptions {
    /// Skip the publish when neither preset nor the blend factor changed since
    /// the last one. Publishing is idempotent, so this only saves sink writes.
    pub publish_only_on_change: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Published {
    preset_a: ParameterSet,
    preset_b: ParameterSet,
    blend_factor: f32,
}

/// Owns a [`MaterialParameterBlender`] for as long as the editing surface is enabled.
///
/// Created by [`on_enable`](Self::on_enable); dropping it is the disable event.
pub struct MaterialWizard {
    blender: MaterialParameterBlender,
    options: WizardOptions,
    last_published: Option<Published>,
}

impl MaterialWizard {
    /// Start a fresh session and run the first tick immediately.
    ///
    /// The current reading of the controls becomes the selected preset; the
    /// controls are not repopulated first.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::InvalidIndex`] if the controls report a preset
    /// index other than 0 or 1.
    pub fn on_enable(
        options: WizardOptions,
        controls: &mut impl MaterialControls,
        sink: &mut impl UniformSink,
    ) -> Result<Self, BlendError> {
        let mut blender = MaterialParameterBlender::new();
        blender.set_active(controls.selected_preset())?;
        let mut wizard = Self {
            blender,
            options,
            last_published: None,
        };
        wizard.tick(controls, sink)?;
        Ok(wizard)
    }

    /// Like [`on_enable`](Self::on_enable), starting from an existing blender
    /// (e.g. one restored from a preset file).
    ///
    /// The controls are repopulated from the blender's active preset first, so
    /// the first reading does not overwrite restored values.
    pub fn with_blender(
        blender: MaterialParameterBlender,
        options: WizardOptions,
        controls: &mut impl MaterialControls,
        sink: &mut impl UniformSink,
    ) -> Result<Self, BlendError> {
        let mut wizard = Self {
            blender,
            options,
            last_published: None,
        };
        controls.display_values(&wizard.blender.read_active());
        wizard.tick(controls, sink)?;
        Ok(wizard)
    }

    pub fn blender(&self) -> &MaterialParameterBlender {
        &self.blender
    }

    pub fn options(&self) -> WizardOptions {
        self.options
    }

    /// Run one update.
    ///
    /// # Errors
    ///
    /// Returns [`BlendError::InvalidIndex`] if the selector reports an index
    /// other than 0 or 1. Nothing is applied or published in that case.
    pub fn tick(
        &mut self,
        controls: &mut impl MaterialControls,
        sink: &mut impl UniformSink,
    ) -> Result<TickReport, BlendError> {
        let mut report = TickReport::default();

        let selected = controls.selected_preset();
        if selected != self.blender.active_index() {
            self.blender.set_active(selected)?;
            controls.display_values(&self.blender.read_active());
            report.swapped = true;
        }

        self.blender.apply_edit(controls.read_current_ui_values());
        self.blender.set_blend_factor(controls.blend_factor());

        let snapshot = {
            let state = self.blender.state();
            Published {
                preset_a: state.preset_a,
                preset_b: state.preset_b,
                blend_factor: state.blend_factor,
            }
        };

        if self.options.publish_only_on_change && self.last_published == Some(snapshot) {
            return Ok(report);
        }

        self.blender.publish(sink);
        self.last_published = Some(snapshot);
        report.published = true;
        debug!(
            active = self.blender.active_index(),
            swapped = report.swapped,
            "material wizard tick"
        );
        Ok(report)
    }
}
