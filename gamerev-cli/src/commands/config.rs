use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{settings_path, Settings};
use crate::CliError;

/// Show the effective settings and whether they came from a file.
pub(crate) fn run_config_show(settings: &Settings) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "gamerev Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Config file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    for line in settings.to_toml()?.lines() {
        log::info!("  {line}");
    }

    Ok(())
}

/// Print the config file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}
