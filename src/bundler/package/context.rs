//! Per-builder directory layout and resolved values.

use super::PackageKind;
use crate::bundler::settings::Settings;
use std::path::{Path, PathBuf};

/// State owned by one builder instance.
///
/// The root directory embeds the application id and the package kind, so
/// builders for different formats never share a staging area. All paths are
/// absolute because [`Settings`] directories are absolutized on build.
#[derive(Clone, Debug)]
pub struct BuilderContext {
    kind: PackageKind,
    root: PathBuf,
    build_root: PathBuf,
    output_directory: PathBuf,
    arch: String,
    package_version: String,
}

impl BuilderContext {
    /// Lays out the directories for `kind` and records the resolved architecture.
    pub fn new(settings: &Settings, kind: PackageKind, arch: String) -> Self {
        let root = settings
            .build_directory()
            .join(format!("{}-{}", settings.app_id(), kind.name()));
        let build_root = root.join("build");

        Self {
            kind,
            root,
            build_root,
            output_directory: settings.output_directory().to_path_buf(),
            arch,
            package_version: settings.package().version_release(),
        }
    }

    /// Package kind this context belongs to.
    pub fn kind(&self) -> PackageKind {
        self.kind
    }

    /// Builder root. Holds the manifest and the build root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory tree the package is assembled in.
    pub fn build_root(&self) -> &Path {
        &self.build_root
    }

    /// Directory finished packages are written to.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Resolved target architecture string.
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// `version.release` string.
    pub fn package_version(&self) -> &str {
        &self.package_version
    }
}
