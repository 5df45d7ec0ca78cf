use anyhow::Error;
use cardqr_config::ConfigError;
use cardqr_core::CoreError;
use cardqr_render::RenderError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(CliError::InvalidInput(_)) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(render_err) = cause.downcast_ref::<RenderError>() {
            return ExitCode::from(render_exit_code(render_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidModuleSize(_)
        | ConfigError::InvalidQuietZone(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn render_exit_code(err: &RenderError) -> u8 {
    match err {
        RenderError::PayloadTooLong
        | RenderError::UnsupportedExtension(_)
        | RenderError::InvalidColor(_)
        | RenderError::InvalidErrorCorrection(_)
        | RenderError::ImageTooLarge(_) => EXIT_INVALID_INPUT,
        RenderError::Encode(_) | RenderError::Image(_) => EXIT_FAILURE,
    }
}
