//! Configuration for the material wizard.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{BlenderConfig, Config, DebugConfig, LightConfig, RotationConfig};
pub use error::ConfigError;
