//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Material wizard command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "brdf-wizard",
    about = "Blend two BRDF material presets and print the published uniforms"
)]
pub struct CliArgs {
    /// Cross-fade toward preset B (not clamped).
    #[arg(long, allow_hyphen_values = true)]
    pub blend_factor: Option<f32>,

    /// Preset that receives edits (0 or 1).
    #[arg(long)]
    pub active: Option<usize>,

    /// RON file holding both presets.
    #[arg(long)]
    pub preset_file: Option<PathBuf>,

    /// Number of update ticks to run.
    #[arg(long, default_value_t = 1)]
    pub ticks: u32,

    /// Turntable speed in degrees per second.
    #[arg(long)]
    pub rotation_speed: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(t) = args.blend_factor {
            self.blender.blend_factor = t;
        }
        if let Some(active) = args.active {
            self.blender.active_preset = active;
        }
        if let Some(ref path) = args.preset_file {
            self.blender.preset_file = Some(path.clone());
        }
        if let Some(speed) = args.rotation_speed {
            self.rotation.speed_deg_per_sec = speed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            blend_factor: Some(0.75),
            preset_file: Some(PathBuf::from("pair.ron")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.blender.blend_factor, 0.75);
        assert_eq!(config.blender.preset_file, Some(PathBuf::from("pair.ron")));
        // Non-overridden fields retain defaults
        assert_eq!(config.blender.active_preset, 0);
        assert_eq!(config.rotation.speed_deg_per_sec, 1.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_from_command_line() {
        let args = CliArgs::parse_from([
            "brdf-wizard",
            "--blend-factor",
            "-0.5",
            "--active",
            "1",
            "--ticks",
            "30",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.blend_factor, Some(-0.5));
        assert_eq!(args.active, Some(1));
        assert_eq!(args.ticks, 30);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_ticks_default_to_one() {
        let args = CliArgs::parse_from(["brdf-wizard"]);
        assert_eq!(args.ticks, 1);
    }
}
