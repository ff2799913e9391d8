//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! the requested package kinds before anything is built.

use crate::bundler::PackageKind;
use clap::Parser;
use std::path::PathBuf;

/// Installer package builder
#[derive(Parser, Debug)]
#[command(
    name = "kodegen_bundler_package",
    version,
    about = "Builds installer packages from published application files",
    long_about = "Builds installer packages (MSI via SimpleMSI) from a directory of published application files.

Reads identity and publisher metadata from a TOML file, stages the publish directory,
writes the packaging manifest and runs the packaging tool.

Usage:
  kodegen_bundler_package --config package.toml --publish-dir ./publish --output ./dist
  kodegen_bundler_package --config package.toml --output ./dist --arch arm64 --dry-run

Exit code 0 = every requested package exists in the output directory."
)]
pub struct Args {
    /// Package configuration file ([package] and [bundle] tables)
    #[arg(short, long, value_name = "FILE")]
    pub config: PathBuf,

    /// Package kind to build: msi, setup, appimage, deb, rpm, zip (repeatable)
    #[arg(short, long = "kind", value_name = "KIND", default_value = "msi")]
    pub kinds: Vec<String>,

    /// Directory where finished packages are written
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// Parent directory for intermediate build trees (default: system temp)
    #[arg(long, value_name = "DIR")]
    pub build_dir: Option<PathBuf>,

    /// Directory of published application files to package
    #[arg(short, long, value_name = "DIR")]
    pub publish_dir: Option<PathBuf>,

    /// Architecture string used verbatim in file names and manifests
    #[arg(long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Target triple used to detect the architecture
    #[arg(long, value_name = "TRIPLE")]
    pub target: Option<String>,

    /// Desktop entry for formats that install one
    #[arg(long, value_name = "FILE")]
    pub desktop_entry: Option<PathBuf>,

    /// AppStream metainfo for formats that install one
    #[arg(long, value_name = "FILE")]
    pub metainfo: Option<PathBuf>,

    /// Print the manifest and commands without building anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments and resolve the requested package kinds.
    ///
    /// Duplicate kinds are collapsed, keeping the first occurrence.
    pub fn validate(&self) -> Result<Vec<PackageKind>, String> {
        if self.kinds.is_empty() {
            return Err("At least one --kind is required".to_string());
        }

        let mut kinds = Vec::with_capacity(self.kinds.len());
        for name in &self.kinds {
            let kind: PackageKind = name.parse().map_err(|_| {
                format!(
                    "Invalid kind: {}. Valid kinds: {}",
                    name,
                    PackageKind::ALL
                        .iter()
                        .map(|k| k.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }

        Ok(kinds)
    }
}
