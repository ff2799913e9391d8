//! Error types for package building.
//!
//! Every failure inside [`crate::bundler`] is reported through [`Error`].
//! The [`ErrorExt`] and [`Context`] helpers attach the operation and path that
//! failed, so the message printed by the CLI points at the file involved.

use super::package::PackageKind;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while preparing or running a package build.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Free-form error, usually raised through [`crate::bail!`].
    #[error("{0}")]
    GenericError(String),

    /// An error wrapped with a description of what was being done.
    #[error("{0}: {1}")]
    Context(String, Box<Error>),

    /// Filesystem operation failed on a known path.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done, e.g. "writing manifest".
        context: &'static str,
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying I/O error.
        error: std::io::Error,
    },

    /// A process could not be spawned at all.
    #[error("failed to run command `{command}`: {error}")]
    CommandFailed {
        /// The command line that was attempted.
        command: String,
        /// Underlying I/O error.
        error: std::io::Error,
    },

    /// An external packaging tool ran but exited unsuccessfully.
    #[error("`{command}` failed with exit code {}:\n{output}", code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ExternalToolFailure {
        /// The command line that failed, with secrets redacted.
        command: String,
        /// Exit code, if the process exited normally.
        code: Option<i32>,
        /// Captured stderr, followed by stdout.
        output: String,
    },

    /// A file referenced by the configuration does not exist.
    #[error("{what} not found: {}", path.display())]
    MissingInput {
        /// Which input is missing, e.g. "license file".
        what: &'static str,
        /// The configured path.
        path: PathBuf,
    },

    /// The configuration asks for something the package format cannot do.
    #[error("{kind} packages do not support {capability}")]
    UnsupportedCapability {
        /// Format that was asked.
        kind: PackageKind,
        /// Human readable capability name.
        capability: &'static str,
    },

    /// The package format is known but has no builder.
    #[error("{0} packages are not implemented")]
    UnimplementedFormat(PackageKind),

    /// Unknown package format name.
    #[error("unknown package kind `{0}`")]
    UnknownFormat(String),

    /// Settings are incomplete or invalid.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Manifest template failed to compile.
    #[error("manifest template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Manifest template failed to render.
    #[error("manifest render error: {0}")]
    Render(#[from] Box<handlebars::RenderError>),

    /// Plain I/O error without path information.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Directory traversal failed.
    #[error("directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping failed while copying trees.
    #[error(transparent)]
    StripPrefix(#[from] std::path::StripPrefixError),
}

/// Attach filesystem context to I/O results.
pub trait ErrorExt<T> {
    /// Convert an I/O error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            error,
        })
    }
}

/// Attach a description to a failing [`Result`] or an empty [`Option`].
pub trait Context<T> {
    /// Wrap the error (or `None`) with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Like [`Context::context`] but builds the message lazily.
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| Error::GenericError(f().to_string()))
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(error: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(error))
    }
}

impl From<handlebars::RenderError> for Error {
    fn from(error: handlebars::RenderError) -> Self {
        Self::Render(Box::new(error))
    }
}

/// Return early with an [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_keeps_path_and_operation() {
        let err = std::fs::read("/definitely/not/here")
            .fs_context("reading license", "/definitely/not/here")
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("reading license /definitely/not/here"));
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let none: Option<u8> = None;
        let err = none.context("no main binary").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "no main binary"));
    }

    #[test]
    fn external_failure_reports_exit_code() {
        let err = Error::ExternalToolFailure {
            command: "simple-msi build".into(),
            code: Some(2),
            output: "bad manifest".into(),
        };
        assert_eq!(
            err.to_string(),
            "`simple-msi build` failed with exit code 2:\nbad manifest"
        );
    }
}
