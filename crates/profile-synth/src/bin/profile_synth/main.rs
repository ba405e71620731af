//! Profile generation CLI.
//!
//! Loads settings from arguments, environment and configuration files, then
//! delegates to `profile_synth::cli` and writes JSON lines to stdout.

mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use profile_synth::cli::{CliError, run};
use settings::ProfileSynthSettings;

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute() -> Result<(), CliError> {
    let settings = ProfileSynthSettings::load().map_err(|err| CliError::Settings {
        message: err.to_string(),
    })?;
    let options = settings.into_options();
    run(&options, io::stdout().lock())?;
    Ok(())
}
