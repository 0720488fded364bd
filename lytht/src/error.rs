//! Error handling for the `lytht` driver.
//!
//! `LythtError` is the single error type `main` deals with; a language-level
//! diagnostic (`lyth_util::SyntaxError`) is wrapped rather than rendered
//! ad hoc, so its `Display` impl (the `<MESSAGE> at '<FILENAME>', line
//! <LINENO>` format from spec's §6) is reused verbatim.

use thiserror::Error;

/// Top-level error type for the `lytht` binary.
#[derive(Error, Debug)]
pub enum LythtError {
    /// Error when a required configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when the config file fails to parse as TOML.
    #[error("Failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Error when the config fails to serialize back to TOML.
    #[error("Failed to serialize configuration: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A language-level diagnostic raised by the scanner/lexer/parser/
    /// analyzer pipeline. The REPL prints these and keeps going; only the
    /// driver's own setup failures (the other variants) abort the process.
    #[error(transparent)]
    Diagnostic(#[from] lyth_util::SyntaxError),
}

/// Result type alias using `LythtError`.
pub type Result<T> = std::result::Result<T, LythtError>;
