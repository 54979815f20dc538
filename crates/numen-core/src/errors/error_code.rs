//! Stable machine-readable error codes, surfaced to the app layer.

pub const INPUT_ERROR: &str = "INPUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to a code the UI can switch on without parsing messages.
pub trait NumerologyErrorCode {
    fn error_code(&self) -> &'static str;
}
