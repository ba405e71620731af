//! Error types for the profile generation CLI.

use thiserror::Error;

use crate::error::{RegistryError, VariantParseError};

/// Errors surfaced by the CLI generation flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Loader error message.
        message: String,
    },
    /// Seed name was blank.
    #[error("seed name must not be empty")]
    EmptySeedName,
    /// The requested variant is not recognised.
    #[error(transparent)]
    Variant(#[from] VariantParseError),
    /// An error occurred while reading the registry.
    #[error("registry error: {source}")]
    RegistryError {
        /// Underlying registry error.
        #[from]
        #[source]
        source: RegistryError,
    },
    /// Serialising a profile failed.
    #[error("failed to serialise profile: {message}")]
    Serialise {
        /// Serializer error message.
        message: String,
    },
    /// Writing output failed.
    #[error("failed to write output: {message}")]
    Write {
        /// I/O error message.
        message: String,
    },
}
