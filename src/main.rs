#![allow(non_snake_case)]

use analytics_dashboard::{client::App, config::AppConfig, error::Error};
use dioxus_logger::tracing;

fn main() {
    if let Err(e) = run() {
        eprintln!("Failed to start dashboard: {}", e);
        std::process::exit(1);
    }
}

/// Builds the configuration once and hands it to the launcher as context for [`App`].
fn run() -> Result<(), Error> {
    let config = AppConfig::from_build_env()?;

    if let Err(e) = dioxus_logger::init(config.environment.log_level()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    tracing::info!(
        "Mounting dashboard on #{} with {} routes",
        config.mount_point,
        config.routes.len()
    );

    let builder = dioxus::LaunchBuilder::new();

    #[cfg(feature = "web")]
    let builder = builder.with_cfg(dioxus::web::Config::new().rootname(config.mount_point.clone()));

    builder.with_context(config).launch(App);

    Ok(())
}
