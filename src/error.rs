//! Application-level error types.
//!
//! Library failures arrive as [`crate::bundler::Error`]; this module adds the
//! configuration and command line failures of the binary around them.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for the command line application
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Configuration file could not be read or parsed
    #[error("Invalid configuration {}: {reason}", path.display())]
    InvalidConfig {
        /// Configuration file
        path: PathBuf,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Hints printed under the error message.
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error as E;

        match self {
            BundlerError::Bundler(E::ExternalToolFailure { .. }) => {
                vec!["Re-run with RUST_LOG=debug to see the packaging tool output".to_string()]
            }
            BundlerError::Bundler(E::MissingInput { .. }) => {
                vec!["Paths in the configuration file are relative to that file".to_string()]
            }
            BundlerError::Bundler(E::UnimplementedFormat(_)) => {
                vec!["Only --kind msi is currently implemented".to_string()]
            }
            BundlerError::Cli(CliError::InvalidConfig { .. }) | BundlerError::Toml(_) => {
                vec!["Check the configuration keys under [package] and [bundle]".to_string()]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{Error, PackageKind};

    #[test]
    fn unimplemented_format_suggests_msi() {
        let err = BundlerError::from(Error::UnimplementedFormat(PackageKind::Deb));
        assert_eq!(
            err.recovery_suggestions(),
            vec!["Only --kind msi is currently implemented".to_string()]
        );
    }

    #[test]
    fn io_errors_have_no_hint() {
        let err = BundlerError::from(std::io::Error::other("boom"));
        assert!(err.recovery_suggestions().is_empty());
    }
}
