//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that drives
//! package builders to create installers.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`](crate::bundler::Settings)
//! 2. Determines which package kinds to create
//! 3. Stages the published application files
//! 4. Lets the builder write its manifest and side files
//! 5. Runs the builder's commands and checksums the result
//!
//! # Example
//!
//! ```no_run
//! use kodegen_bundler_package::bundler::{
//!     BundleSettings, Bundler, PackageSettings, SettingsBuilder,
//! };
//!
//! # async fn example() -> kodegen_bundler_package::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .output_directory("dist")
//!     .publish_directory("publish")
//!     .package_settings(PackageSettings {
//!         app_base_name: "HelloWorld".into(),
//!         app_friendly_name: "Hello World".into(),
//!         app_id: "com.example.helloworld".into(),
//!         version: "1.0.0".into(),
//!         ..Default::default()
//!     })
//!     .bundle_settings(BundleSettings {
//!         publisher_name: "Example".into(),
//!         publisher_id: "example".into(),
//!         ..Default::default()
//!     })
//!     .build()?;
//!
//! let artifacts = Bundler::new(settings).bundle().await?;
//!
//! for artifact in artifacts {
//!     println!("Created: {} ({} bytes)", artifact.kind, artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and bundling operations
//! - [`tool_detection`] - External tool availability checking

mod checksum;
mod orchestrator;
mod tool_detection;

pub use orchestrator::Bundler;
