//! Command line interface for the package builder.
//!
//! Parses arguments, loads the configuration file, and either prints the
//! build plan (`--dry-run`) or builds the requested packages.

mod args;

pub use args::Args;

use crate::bundler::{Bundler, SettingsBuilder};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata::load_config;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    execute(args).await
}

/// Runs the CLI with already parsed arguments.
pub async fn execute(args: Args) -> Result<i32> {
    let kinds = args
        .validate()
        .map_err(|reason| BundlerError::Cli(CliError::InvalidArguments { reason }))?;

    let config = load_config(&args.config)?;

    let mut builder = SettingsBuilder::new()
        .package_settings(config.package)
        .bundle_settings(config.bundle_settings)
        .output_directory(&args.output)
        .package_types(kinds);

    if let Some(dir) = &args.build_dir {
        builder = builder.build_directory(dir);
    }
    if let Some(dir) = &args.publish_dir {
        builder = builder.publish_directory(dir);
    }
    if let Some(arch) = args.arch.clone() {
        builder = builder.arch(arch);
    }
    if let Some(target) = args.target.clone() {
        builder = builder.target(target);
    }

    let bundler = Bundler::new(builder.build()?)
        .desktop_entry(args.desktop_entry.clone())
        .metainfo(args.metainfo.clone());

    if args.dry_run {
        for plan in bundler.plan()? {
            println!("# {} -> {}", plan.kind, plan.output_path.display());
            if let Some(path) = &plan.manifest_path {
                println!("# manifest: {}", path.display());
            }
            if let Some(manifest) = &plan.manifest {
                print!("{}", manifest);
            }
            for command in &plan.commands {
                println!("$ {}", command);
            }
        }
        return Ok(0);
    }

    let artifacts = bundler.bundle().await?;

    for artifact in &artifacts {
        for path in &artifact.paths {
            println!("{}", path.display());
        }
        log::info!(
            "✓ {} package: {} bytes, sha256 {}",
            artifact.kind,
            artifact.size,
            artifact.checksum
        );
    }

    Ok(0)
}
