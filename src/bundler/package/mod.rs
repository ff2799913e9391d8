//! Package builder contract.
//!
//! Every package format implements [`PackageBuilder`]. The orchestrator
//! ([`crate::bundler::Bundler`]) only talks to this trait: it asks for the
//! staged binary directory, runs [`PackageBuilder::create`] and then executes
//! [`PackageBuilder::package_commands`] in order.
//!
//! # Lifecycle
//!
//! 1. Construction computes every path, the manifest text and the command
//!    plan. Nothing touches disk.
//! 2. [`validate`] checks capabilities and referenced files. Dry runs stop
//!    here.
//! 3. [`PackageBuilder::create`] writes side files. Every implementation must
//!    call [`create_base`] first, which runs [`validate`] again.
//! 4. The orchestrator runs the commands.

mod command;
mod context;
mod kind;

pub use command::PackageCommand;
pub use context::BuilderContext;
pub use kind::PackageKind;

use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
    utils::fs,
};
use std::{
    future::Future,
    path::{Path, PathBuf},
};

/// Capabilities every format-specific builder provides.
pub trait PackageBuilder: Send + Sync {
    /// Settings the builder was created from.
    fn settings(&self) -> &Settings;

    /// Directory layout and resolved values for this builder.
    fn context(&self) -> &BuilderContext;

    /// Package format produced.
    fn kind(&self) -> PackageKind {
        self.context().kind()
    }

    /// Target architecture string as it appears in file names and manifests.
    fn package_arch(&self) -> &str {
        self.context().arch()
    }

    /// File name of the finished package.
    fn output_name(&self) -> String;

    /// Full path of the finished package.
    fn output_path(&self) -> PathBuf {
        self.context().output_directory().join(self.output_name())
    }

    /// Directory holding the staged application binaries.
    fn build_app_bin(&self) -> &Path;

    /// Install location on the target system. Empty when the packaging tool
    /// decides it.
    fn install_bin(&self) -> &str;

    /// Generated manifest, if the format uses one.
    fn manifest_content(&self) -> Option<&str>;

    /// Where the manifest is written before the build commands run.
    fn manifest_build_path(&self) -> Option<&Path>;

    /// Commands that build the package once `create` has run.
    fn package_commands(&self) -> &[PackageCommand];

    /// Whether a start command (terminal launcher) can be provided.
    fn supports_start_command(&self) -> bool;

    /// Whether a post-run command can be executed after installation.
    fn supports_post_run(&self) -> bool;

    /// Where the desktop entry should be copied, if the format uses one.
    fn desktop_build_path(&self) -> Option<PathBuf> {
        None
    }

    /// Where the AppStream metainfo should be copied, if the format uses one.
    fn metainfo_build_path(&self) -> Option<PathBuf> {
        None
    }

    /// Prepares the build tree. See [`create_base`] for the shared steps.
    fn create(
        &self,
        desktop_entry: Option<&Path>,
        metainfo: Option<&Path>,
    ) -> impl Future<Output = Result<()>> + Send {
        create_base(self, desktop_entry, metainfo)
    }
}

/// Rejects unsupported capabilities and missing license or icon files.
///
/// Writes nothing, so it runs for dry runs as well as before
/// [`create_base`] writes anything.
pub fn validate<B: PackageBuilder + ?Sized>(builder: &B) -> Result<()> {
    let kind = builder.kind();
    let bundle = builder.settings().bundle_settings();

    if bundle.start_command.is_some() && !builder.supports_start_command() {
        return Err(Error::UnsupportedCapability {
            kind,
            capability: "start commands",
        });
    }

    if bundle.post_run.is_some() && !builder.supports_post_run() {
        return Err(Error::UnsupportedCapability {
            kind,
            capability: "post-run commands",
        });
    }

    require_file("license file", bundle.license_file.as_deref())?;
    require_file("icon file", bundle.icon.as_deref())?;

    Ok(())
}

/// Shared part of [`PackageBuilder::create`].
///
/// Runs [`validate`] before anything is written, then creates the directory
/// tree, copies the desktop entry and metainfo where the format wants them,
/// and writes the manifest.
///
/// Running it twice with the same inputs leaves the same tree.
pub async fn create_base<B: PackageBuilder + ?Sized>(
    builder: &B,
    desktop_entry: Option<&Path>,
    metainfo: Option<&Path>,
) -> Result<()> {
    validate(builder)?;

    let kind = builder.kind();
    let ctx = builder.context();
    log::debug!("Preparing {} build root {}", kind, ctx.root().display());

    for dir in [ctx.root(), ctx.build_root(), builder.build_app_bin(), ctx.output_directory()] {
        fs::create_dir_all(dir).await?;
    }

    if let (Some(src), Some(dst)) = (desktop_entry, builder.desktop_build_path()) {
        fs::copy_file(src, &dst).await?;
    }

    if let (Some(src), Some(dst)) = (metainfo, builder.metainfo_build_path()) {
        fs::copy_file(src, &dst).await?;
    }

    if let (Some(content), Some(path)) = (builder.manifest_content(), builder.manifest_build_path()) {
        fs::write_file(path, content, "writing manifest").await?;
        log::debug!("Wrote manifest {}", path.display());
    }

    Ok(())
}

fn require_file(what: &'static str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) if !path.is_file() => Err(Error::MissingInput {
            what,
            path: path.to_path_buf(),
        }),
        _ => Ok(()),
    }
}

/// Composes `<base>[-<version>][-<suffix>]-<arch><ext>`.
///
/// `extension` includes the leading dot. Empty suffixes are skipped.
pub fn output_file_name(
    settings: &Settings,
    include_version: bool,
    suffix: Option<&str>,
    arch: &str,
    extension: &str,
) -> String {
    let mut parts = vec![settings.app_base_name()];

    if include_version {
        parts.push(settings.version_string());
    }

    if let Some(suffix) = suffix.filter(|s| !s.trim().is_empty()) {
        parts.push(suffix);
    }

    parts.push(arch);
    format!("{}{}", parts.join("-"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::settings::{BundleSettings, PackageSettings, SettingsBuilder};

    fn settings() -> Settings {
        SettingsBuilder::new()
            .package_settings(PackageSettings {
                app_base_name: "HelloWorld".into(),
                app_friendly_name: "Hello World".into(),
                app_id: "com.example.helloworld".into(),
                version: "2.1.0".into(),
                release: 3,
                ..Default::default()
            })
            .bundle_settings(BundleSettings {
                publisher_id: "example".into(),
                ..Default::default()
            })
            .output_directory("/tmp/out")
            .build_directory("/tmp/build")
            .build()
            .unwrap()
    }

    #[test]
    fn output_name_without_optional_segments() {
        let name = output_file_name(&settings(), false, None, "x64", ".msi");
        assert_eq!(name, "HelloWorld-x64.msi");
    }

    #[test]
    fn output_name_with_version_and_suffix() {
        let name = output_file_name(&settings(), true, Some("portable"), "arm64", ".msi");
        assert_eq!(name, "HelloWorld-2.1.0-portable-arm64.msi");
    }

    #[test]
    fn empty_suffix_is_skipped() {
        let name = output_file_name(&settings(), true, Some(""), "x64", ".zip");
        assert_eq!(name, "HelloWorld-2.1.0-x64.zip");
    }

    #[test]
    fn contexts_for_different_kinds_do_not_share_roots() {
        let settings = settings();
        let msi = BuilderContext::new(&settings, PackageKind::Msi, "x64".into());
        let zip = BuilderContext::new(&settings, PackageKind::Zip, "x64".into());

        assert_ne!(msi.root(), zip.root());
        assert!(msi.root().is_absolute());
        assert!(msi.build_root().starts_with(msi.root()));
        assert_eq!(msi.package_version(), "2.1.0.3");
    }
}
