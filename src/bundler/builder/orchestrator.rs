//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that drives package
//! builders: stage the application files, run `create`, then run the
//! builder's commands one by one.

use crate::bundler::{
    BundledArtifact, PackagePlan,
    error::{Error, ErrorExt, Result},
    package::{self, PackageBuilder, PackageCommand, PackageKind},
    platform::windows::msi::MsiBuilder,
    settings::Settings,
    utils::fs,
};
use std::path::{Path, PathBuf};

use super::{checksum::calculate_sha256, tool_detection::ensure_tool};

/// Placeholder shown instead of secrets in captured tool output.
const REDACTED: &str = "********";

/// Main bundler orchestrator.
///
/// Creates one builder per requested [`PackageKind`] and runs it to
/// completion before starting the next. A failing command stops the run; the
/// build directory is left in place for inspection.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_package::bundler::{Bundler, PackageKind, Settings};
///
/// # async fn example(settings: Settings) -> kodegen_bundler_package::bundler::Result<()> {
/// let bundler = Bundler::new(settings);
///
/// // Build with configured (or default) kinds
/// let artifacts = bundler.bundle().await?;
///
/// // Or specific kinds
/// let artifacts = bundler.bundle_types(&[PackageKind::Msi]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
    desktop_entry: Option<PathBuf>,
    metainfo: Option<PathBuf>,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            desktop_entry: None,
            metainfo: None,
        }
    }

    /// Sets the desktop entry handed to builders that install one.
    pub fn desktop_entry(mut self, path: Option<PathBuf>) -> Self {
        self.desktop_entry = path;
        self
    }

    /// Sets the AppStream metainfo handed to builders that install one.
    pub fn metainfo(mut self, path: Option<PathBuf>) -> Self {
        self.metainfo = path;
        self
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Builds the configured package kinds (MSI when none are configured).
    pub async fn bundle(&self) -> Result<Vec<BundledArtifact>> {
        let kinds = self.package_kinds();
        self.bundle_types(&kinds).await
    }

    /// Builds the given package kinds in order.
    ///
    /// Every kind is checked for an implementation before any work starts,
    /// so a request containing a placeholder format touches nothing.
    pub async fn bundle_types(&self, kinds: &[PackageKind]) -> Result<Vec<BundledArtifact>> {
        for kind in kinds {
            kind.ensure_implemented()?;
        }

        let mut artifacts = Vec::with_capacity(kinds.len());

        for kind in kinds {
            let artifact = match kind {
                PackageKind::Msi => {
                    ensure_tool(&self.settings.msi().tool)?;
                    let builder = MsiBuilder::new(&self.settings)?;
                    self.run_builder(&builder).await?
                }
                other => return Err(Error::UnimplementedFormat(*other)),
            };

            artifacts.push(artifact);
        }

        Ok(artifacts)
    }

    /// Describes what [`Bundler::bundle`] would do without writing anything.
    ///
    /// Runs the same capability and input checks as a real build, so a plan
    /// is only returned for a configuration that can be built.
    pub fn plan(&self) -> Result<Vec<PackagePlan>> {
        let kinds = self.package_kinds();

        for kind in &kinds {
            kind.ensure_implemented()?;
        }

        kinds
            .iter()
            .map(|kind| match kind {
                PackageKind::Msi => self.plan_for(&MsiBuilder::new(&self.settings)?),
                other => Err(Error::UnimplementedFormat(*other)),
            })
            .collect()
    }

    fn package_kinds(&self) -> Vec<PackageKind> {
        match self.settings.package_types() {
            Some(kinds) if !kinds.is_empty() => kinds.to_vec(),
            _ => vec![PackageKind::Msi],
        }
    }

    fn plan_for<B: PackageBuilder>(&self, builder: &B) -> Result<PackagePlan> {
        package::validate(builder)?;

        Ok(PackagePlan {
            kind: builder.kind(),
            manifest_path: builder.manifest_build_path().map(Path::to_path_buf),
            manifest: builder.manifest_content().map(str::to_string),
            commands: builder
                .package_commands()
                .iter()
                .map(PackageCommand::to_string)
                .collect(),
            output_path: builder.output_path(),
        })
    }

    async fn run_builder<B: PackageBuilder>(&self, builder: &B) -> Result<BundledArtifact> {
        let kind = builder.kind();
        log::info!(
            "Building {} package for {} ({})",
            kind,
            self.settings.app_base_name(),
            builder.package_arch()
        );

        package::validate(builder)?;
        self.stage(builder).await?;

        builder
            .create(self.desktop_entry.as_deref(), self.metainfo.as_deref())
            .await?;

        if builder.package_commands().is_empty() {
            crate::bail!("{} builder produced no package commands", kind);
        }

        for command in builder.package_commands() {
            self.execute(command).await?;
        }

        let output = builder.output_path();
        let metadata = tokio::fs::metadata(&output)
            .await
            .fs_context("reading artifact metadata", &output)?;
        let checksum = calculate_sha256(&output).await?;

        log::info!("✓ Created {} package: {}", kind, output.display());

        Ok(BundledArtifact {
            kind,
            paths: vec![output],
            size: metadata.len(),
            checksum,
        })
    }

    /// Copies the publish directory into the builder's staged binary directory.
    async fn stage<B: PackageBuilder>(&self, builder: &B) -> Result<()> {
        let app_bin = builder.build_app_bin();

        match self.settings.publish_directory() {
            Some(publish) => {
                log::info!("Staging {} -> {}", publish.display(), app_bin.display());
                fs::remove_dir_all(app_bin).await?;
                fs::copy_dir(publish, app_bin).await
            }
            None => {
                log::warn!(
                    "No publish directory given; packaging whatever is in {}",
                    app_bin.display()
                );
                Ok(())
            }
        }
    }

    /// Spawns one planned command directly, without a shell in between.
    async fn execute(&self, command: &PackageCommand) -> Result<()> {
        let shown = command.to_string();
        log::info!("Running: {}", shown);

        let output = tokio::process::Command::new(command.program())
            .args(command.args())
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: shown.clone(),
                error,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let captured = [stderr.trim(), stdout.trim()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("\n");

            return Err(Error::ExternalToolFailure {
                command: shown,
                code: output.status.code(),
                output: redact(&captured, command),
            });
        }

        if !stdout.trim().is_empty() {
            log::debug!("{}", stdout.trim());
        }

        Ok(())
    }

}

/// Masks secret argument values echoed back in tool output.
fn redact(text: &str, command: &PackageCommand) -> String {
    command
        .secrets()
        .fold(text.to_string(), |text, secret| text.replace(secret, REDACTED))
}
