//! The binary entry point for the material wizard.
//!
//! Runs a headless editing session and prints the published uniform state as JSON.

mod app;
mod controls;

use clap::Parser;

use brdf_config::CliArgs;

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = run(&args) {
        eprintln!("brdf-wizard: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), app::AppError> {
    let loaded = app::load_config(args)?;
    brdf_log::init_logging(
        Some(&loaded.config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&loaded.config),
    );
    loaded.log_source();

    let report = app::run_session(&loaded.config, args.ticks, args.blend_factor)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
