//! Windows MSI package builder.
//!
//! Builds `.msi` installers with SimpleMSI. The builder writes a TOML
//! manifest describing the application and the staged files, and the
//! packaging tool turns it into an installer. SimpleMSI decides the install
//! location (Program Files or LocalAppData), so [`MsiBuilder::install_bin`]
//! is empty.
//!
//! # Module Organization
//!
//! - `template` - manifest template constant
//! - `manifest` - manifest rendering and escaping
//! - `rtf` - license text to RTF conversion
//! - `build` - command plan for the packaging tool
//! - `utils` - architecture mapping and launcher script

mod build;
mod manifest;
mod rtf;
mod template;
mod utils;

pub use manifest::{escape_backslashes, generate_manifest};
pub use rtf::text_to_rtf;

use crate::bundler::{
    error::{ErrorExt, Result},
    package::{self, BuilderContext, PackageBuilder, PackageCommand, PackageKind},
    settings::Settings,
    utils::fs,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// [`PackageBuilder`] for MSI installers.
///
/// Everything except the side files is computed in [`MsiBuilder::new`]:
/// paths, manifest text and command plan.
#[derive(Debug)]
pub struct MsiBuilder<'a> {
    settings: &'a Settings,
    context: BuilderContext,
    app_bin: PathBuf,
    manifest_path: PathBuf,
    manifest: String,
    commands: Vec<PackageCommand>,
}

impl<'a> MsiBuilder<'a> {
    /// Lays out the build tree and renders the manifest and commands.
    ///
    /// # Errors
    /// The manifest cannot be rendered from the configured values.
    pub fn new(settings: &'a Settings) -> Result<Self> {
        let context = BuilderContext::new(settings, PackageKind::Msi, utils::map_arch(settings));
        let app_bin = context.build_root().join("Publish");
        let manifest_path = context
            .root()
            .join(format!("{}.msi.toml", settings.app_base_name()));

        let license = rtf_license_path(settings, &app_bin);
        let manifest = generate_manifest(settings, &context, &app_bin, license.as_deref())?;

        let mut builder = Self {
            settings,
            context,
            app_bin,
            manifest_path,
            manifest,
            commands: Vec::new(),
        };

        builder.commands = build::package_commands(
            &settings.msi().tool,
            &builder.manifest_path,
            &builder.output_path(),
            settings.msi().signing.password.as_deref(),
        );

        log::debug!(
            "MSI builder for {} ({}) at {}",
            settings.app_base_name(),
            builder.package_arch(),
            builder.context.root().display()
        );

        Ok(builder)
    }

    /// License path without extension: `<app bin>/<license stem>`.
    ///
    /// None when no license file is configured.
    pub fn license_path_stem(&self) -> Option<PathBuf> {
        license_path_stem(self.settings, &self.app_bin)
    }

    /// Where the RTF license is written: the stem plus `.rtf`.
    pub fn rtf_license_path(&self) -> Option<PathBuf> {
        rtf_license_path(self.settings, &self.app_bin)
    }

    /// Batch launcher path, when the start command differs from the executable.
    pub fn launcher_path(&self) -> Option<PathBuf> {
        let command = self.settings.bundle_settings().start_command.as_deref()?;

        utils::needs_launcher(command, self.settings.app_base_name())
            .then(|| self.app_bin.join(format!("{}.bat", command)))
    }
}

fn license_path_stem(settings: &Settings, app_bin: &Path) -> Option<PathBuf> {
    let license = settings.bundle_settings().license_file.as_ref()?;
    Some(app_bin.join(license.file_stem()?))
}

fn rtf_license_path(settings: &Settings, app_bin: &Path) -> Option<PathBuf> {
    let mut path: OsString = license_path_stem(settings, app_bin)?.into_os_string();
    path.push(".rtf");
    Some(PathBuf::from(path))
}

impl PackageBuilder for MsiBuilder<'_> {
    fn settings(&self) -> &Settings {
        self.settings
    }

    fn context(&self) -> &BuilderContext {
        &self.context
    }

    fn output_name(&self) -> String {
        let msi = self.settings.msi();
        package::output_file_name(
            self.settings,
            msi.version_output,
            msi.suffix_output.as_deref(),
            self.package_arch(),
            PackageKind::Msi.extension(),
        )
    }

    fn build_app_bin(&self) -> &Path {
        &self.app_bin
    }

    fn install_bin(&self) -> &str {
        ""
    }

    fn manifest_content(&self) -> Option<&str> {
        Some(&self.manifest)
    }

    fn manifest_build_path(&self) -> Option<&Path> {
        Some(&self.manifest_path)
    }

    fn package_commands(&self) -> &[PackageCommand] {
        &self.commands
    }

    fn supports_start_command(&self) -> bool {
        true
    }

    fn supports_post_run(&self) -> bool {
        false
    }

    async fn create(&self, desktop_entry: Option<&Path>, metainfo: Option<&Path>) -> Result<()> {
        package::create_base(self, desktop_entry, metainfo).await?;

        if let Some(launcher) = self.launcher_path() {
            let script = utils::launcher_script(self.settings.app_base_name());
            fs::write_file(&launcher, &script, "writing launcher script").await?;
            log::info!("Wrote launcher {}", launcher.display());
        }

        let license = self.settings.bundle_settings().license_file.as_deref();
        if let (Some(source), Some(target)) = (license, self.rtf_license_path()) {
            let bytes = tokio::fs::read(source)
                .await
                .fs_context("reading license file", source)?;
            let text = String::from_utf8_lossy(&bytes);
            fs::write_file(&target, &text_to_rtf(&text), "writing RTF license").await?;
            log::info!("Wrote license {}", target.display());
        }

        Ok(())
    }
}
