use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use donation_form_lint::config::{Command, Config};
use donation_form_lint::{
    fix_with_report, generate_reference, report, validate_all_requirements, validate_structure,
    SAMPLE_FORM,
};

fn main() -> Result<ExitCode> {
    // Parse configuration from command line and config file
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .init();

    if let Some(path) = &config.config_path {
        log::debug!("loaded config from {}", path.display());
    }

    run(&config)
}

fn run(config: &Config) -> Result<ExitCode> {
    let (out, clean) = match &config.command {
        Command::Check { file } => {
            let markup = read_markup(file.as_deref())?;
            let diagnostics = validate_structure(&markup);
            (
                report::render_diagnostics(&diagnostics, config.format)?,
                diagnostics.is_empty(),
            )
        }
        Command::Requirements { file } => {
            let markup = read_markup(file.as_deref())?;
            let requirements = validate_all_requirements(&markup);
            (
                report::render_requirements(&requirements, config.format)?,
                requirements.all_passed(),
            )
        }
        Command::Fix { file } => {
            let markup = read_markup(file.as_deref())?;
            let fixed = fix_with_report(&markup);
            if !fixed.changed() {
                log::info!("nothing to fix");
            }
            (report::render_fix(&fixed, config.format)?, true)
        }
        Command::Reference => (format!("{}\n", generate_reference()), true),
        Command::Sample => (format!("{}\n", SAMPLE_FORM), true),
    };

    print!("{}", out);

    Ok(if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Read markup from a file, or stdin when no file (or `-`) is given
fn read_markup(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read markup from {}", path.display())),
        _ => {
            let mut markup = String::new();
            io::stdin()
                .read_to_string(&mut markup)
                .context("Failed to read markup from stdin")?;
            Ok(markup)
        }
    }
}
