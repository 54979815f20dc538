//! Error handling for Numen.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod input_error;

pub use config_error::ConfigError;
pub use error_code::NumerologyErrorCode;
pub use input_error::InputError;

/// Top-level error for every fallible Numen operation.
#[derive(Debug, thiserror::Error)]
pub enum NumerologyError {
    #[error("invalid input: {0}")]
    Input(#[from] InputError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl NumerologyErrorCode for NumerologyError {
    fn error_code(&self) -> &'static str {
        match self {
            NumerologyError::Input(e) => e.error_code(),
            NumerologyError::Config(e) => e.error_code(),
        }
    }
}

pub type NumerologyResult<T> = Result<T, NumerologyError>;
