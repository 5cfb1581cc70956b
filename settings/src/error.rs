//! # Error
//!
//! Module dedicated to configuration errors. It contains an [`Error`]
//! enum based on [`thiserror::Error`] and a type alias [`Result`].

use std::{io, path::PathBuf};

use thiserror::Error;

/// The global `Result` alias of the library.
pub type Result<T> = std::result::Result<T, Error>;

/// The global `Error` enum of the library.
///
/// Every variant is a deployment-time configuration defect: none of
/// them is recoverable at runtime, the panel reports the message and
/// refuses to start.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot accept requests: setting configured is still switched off")]
    NotConfiguredError,
    #[error("cannot read configuration file at {1}")]
    ReadConfigFileError(#[source] io::Error, PathBuf),
    #[error("cannot parse configuration file")]
    ParseConfigFileError(#[source] toml::de::Error),
    #[error("cannot parse setting {0}: expected YES or NO, got {1}")]
    ParseToggleError(&'static str, String),
    #[error("cannot parse database type {0}")]
    ParseDatabaseKindError(String),
    #[error("cannot parse password scheme {0}")]
    ParsePasswordSchemeError(String),
    #[error("cannot parse setting {0}: value {1} is out of range")]
    ParseIntegerSettingError(&'static str, i64),
    #[error("cannot use transport default {0}: missing from transport options {1:?}")]
    InvalidTransportDefaultError(String, Vec<String>),
    #[error("cannot configure mailbox subfolders: setting {0} requires setting {1}")]
    MissingDependentSettingError(&'static str, &'static str),
    #[error("cannot pair {0} custom indicator domains with {1} colors")]
    MismatchedCustomIndicatorsError(usize, usize),
    #[error("cannot show {0} custom indicators: only {1} are declared")]
    InvalidCustomIndicatorCountError(usize, usize),
    #[error("cannot find setting {0}")]
    FindSettingError(String),
}
