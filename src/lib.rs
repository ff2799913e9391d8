//! Installer package builder library
//!
//! This library provides the core packaging functionality for creating
//! installers from a directory of published application files:
//! - Windows installers (.msi via SimpleMSI)
//!
//! Setup executables, AppImage, .deb, .rpm and .zip are recognized package
//! kinds without a builder yet.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
