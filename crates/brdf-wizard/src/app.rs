//! Headless session: config + presets in, published uniform state out.

use std::path::PathBuf;

use brdf_config::{CliArgs, Config, ConfigError};
use brdf_lighting::{DirectionalLight, LightControls, Spinner};
use brdf_materials::{
    BlendError, MaterialParameterBlender, MaterialWizard, PresetError, PresetFile, UniformTable,
    WizardOptions,
};
use glam::Vec3;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::controls::ReplayControls;

const CONFIG_FILE: &str = "config.ron";

/// Fixed update step: 60 Hz.
pub const FIXED_DT: f32 = 1.0 / 60.0;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Preset(#[from] PresetError),

    #[error(transparent)]
    Blend(#[from] BlendError),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything a session publishes, as printed by the binary.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub ticks: u32,
    pub active_preset: usize,
    pub material: UniformTable,
    pub light: LightReport,
    /// Preview model orientation as `[x, y, z, w]`.
    pub model_rotation: [f32; 4],
}

#[derive(Debug, Serialize)]
pub struct LightReport {
    pub direction: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

impl From<&DirectionalLight> for LightReport {
    fn from(light: &DirectionalLight) -> Self {
        Self {
            direction: light.direction.to_array(),
            color: light.color.to_array(),
            intensity: light.intensity,
        }
    }
}

/// Run `ticks` updates (at least one) against `config`.
///
/// The preset file's blend factor is used unless `blend_override` is given.
pub fn run_session(
    config: &Config,
    ticks: u32,
    blend_override: Option<f32>,
) -> Result<SessionReport, AppError> {
    let (blender, blend_factor) = match &config.blender.preset_file {
        Some(path) => {
            let file = PresetFile::load(path)?;
            let t = blend_override.unwrap_or(file.blend_factor);
            (MaterialParameterBlender::from_preset_file(&file), t)
        }
        None => (
            MaterialParameterBlender::new(),
            blend_override.unwrap_or(config.blender.blend_factor),
        ),
    };

    let options = WizardOptions {
        publish_only_on_change: config.blender.publish_only_on_change,
    };
    let mut controls = ReplayControls::new(config.blender.active_preset, blend_factor);
    let mut table = UniformTable::new();
    let mut wizard = MaterialWizard::with_blender(blender, options, &mut controls, &mut table)?;

    let light_controls = LightControls {
        color: Vec3::from_array(config.light.color),
        intensity: config.light.intensity,
        vertical_deg: config.light.vertical_deg,
        horizontal_deg: config.light.horizontal_deg,
    };
    let light = DirectionalLight::from_controls(&light_controls);
    let mut spinner = Spinner::new(config.rotation.speed_deg_per_sec);
    spinner.tick(FIXED_DT);

    let ticks = ticks.max(1);
    let mut published = 1;
    for _ in 1..ticks {
        let report = wizard.tick(&mut controls, &mut table)?;
        if report.published {
            published += 1;
        }
        spinner.tick(FIXED_DT);
    }
    debug!(ticks, published, "session finished");
    info!(
        active = wizard.blender().active_index(),
        blend_factor = wizard.blender().blend_factor(),
        "published blended material"
    );

    Ok(SessionReport {
        ticks,
        active_preset: wizard.blender().active_index(),
        material: table,
        light: LightReport::from(&light),
        model_rotation: spinner.rotation.to_array(),
    })
}

/// Config as loaded by [`load_config`], with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub config_dir: PathBuf,
    /// `config.ron` did not exist and was written with defaults.
    pub created: bool,
}

impl LoadedConfig {
    /// Report where the config came from. Call once logging is initialized.
    pub fn log_source(&self) {
        let path = self.config_dir.join(CONFIG_FILE);
        if self.created {
            info!(path = %path.display(), "created default config");
        } else {
            info!(path = %path.display(), "loaded config");
        }
    }
}

/// Load config (from `--config` or the OS config dir), apply CLI overrides.
pub fn load_config(args: &CliArgs) -> Result<LoadedConfig, AppError> {
    let config_dir = match &args.config {
        Some(dir) => dir.clone(),
        None => Config::default_dir()?,
    };
    let created = !config_dir.join(CONFIG_FILE).exists();
    let mut config = Config::load_or_create(&config_dir)?;
    config.apply_cli_overrides(args);
    Ok(LoadedConfig {
        config,
        config_dir,
        created,
    })
}

#[cfg(test)]
mod tests {
    use brdf_materials::{ParameterSet, names};

    use super::*;

    fn pair_file(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("pair.ron");
        PresetFile {
            preset_a: ParameterSet {
                texture_set_index: 2,
                metallic: 0.0,
                ..Default::default()
            },
            preset_b: ParameterSet {
                texture_set_index: 4,
                metallic: 1.0,
                ..Default::default()
            },
            blend_factor: 0.25,
        }
        .save(&path)
        .unwrap();
        path
    }

    #[test]
    fn test_default_session_publishes_default_presets() {
        let report = run_session(&Config::default(), 1, None).unwrap();
        assert_eq!(report.ticks, 1);
        assert_eq!(report.active_preset, 0);
        assert_eq!(report.material.len(), 15);
        assert!((report.material.float(names::ROUGHNESS).unwrap() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_preset_file_is_blended_and_indices_published() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.blender.preset_file = Some(pair_file(dir.path()));

        let report = run_session(&config, 5, None).unwrap();
        let m = &report.material;
        assert!((m.float(names::METALLIC).unwrap() - 0.25).abs() < 1e-6);
        assert_eq!(m.int(names::TEXTURE_SET_INDEX_1), Some(2));
        assert_eq!(m.int(names::TEXTURE_SET_INDEX_2), Some(4));
    }

    #[test]
    fn test_blend_override_beats_preset_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.blender.preset_file = Some(pair_file(dir.path()));

        let report = run_session(&config, 1, Some(1.0)).unwrap();
        assert!((report.material.float(names::METALLIC).unwrap() - 1.0).abs() < 1e-6);
        assert_eq!(report.material.float(names::BLEND_FACTOR), Some(1.0));
    }

    #[test]
    fn test_selecting_preset_b_keeps_both_presets() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.blender.preset_file = Some(pair_file(dir.path()));
        config.blender.active_preset = 1;

        let report = run_session(&config, 3, None).unwrap();
        assert_eq!(report.active_preset, 1);
        assert_eq!(report.material.int(names::TEXTURE_SET_INDEX_2), Some(4));
        assert!((report.material.float(names::METALLIC).unwrap() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_active_preset_fails() {
        let mut config = Config::default();
        config.blender.active_preset = 2;
        let err = run_session(&config, 1, None).unwrap_err();
        assert!(matches!(err, AppError::Blend(BlendError::InvalidIndex(2))));
    }

    #[test]
    fn test_missing_preset_file_fails() {
        let mut config = Config::default();
        config.blender.preset_file = Some("/nonexistent/brdf/pair.ron".into());
        assert!(matches!(
            run_session(&config, 1, None),
            Err(AppError::Preset(PresetError::Io(_)))
        ));
    }

    #[test]
    fn test_model_spins_one_step_per_tick() {
        let mut config = Config::default();
        config.rotation.speed_deg_per_sec = 60.0;
        let report = run_session(&config, 60, None).unwrap();
        // 60 ticks at 60 deg/s and 1/60 s = 60 degrees about Y.
        let q = glam::Quat::from_array(report.model_rotation);
        let expected = glam::Quat::from_rotation_y(60f32.to_radians());
        assert!(q.angle_between(expected) < 1e-3);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = run_session(&Config::default(), 1, None).unwrap();
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("_BaseColor"));
        assert!(json.contains("model_rotation"));
    }

    #[test]
    fn test_load_config_creates_file_in_given_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            config: Some(dir.path().to_path_buf()),
            blend_factor: Some(0.5),
            ..Default::default()
        };
        let loaded = load_config(&args).unwrap();
        assert_eq!(loaded.config_dir, dir.path());
        assert!(loaded.created);
        assert_eq!(loaded.config.blender.blend_factor, 0.5);
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_load_config_reports_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            config: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert!(load_config(&args).unwrap().created);
        let again = load_config(&args).unwrap();
        assert!(!again.created);
        assert_eq!(again.config, Config::default());
    }

    #[test]
    fn test_light_reflects_configured_controls() {
        let mut config = Config::default();
        config.light.vertical_deg = 90.0;
        config.light.horizontal_deg = 0.0;
        config.light.intensity = 3.0;
        let report = run_session(&config, 10, None).unwrap();
        assert!((report.light.direction[1] + 1.0).abs() < 1e-5);
        assert_eq!(report.light.intensity, 3.0);
    }
}
