//! Application metadata from a TOML configuration file.
//!
//! ```toml
//! [package]
//! app_base_name = "HelloWorld"
//! app_friendly_name = "Hello World"
//! app_id = "com.example.helloworld"
//! version = "1.0.0"
//!
//! [bundle]
//! publisher_name = "Example"
//! publisher_id = "example"
//! license_file = "LICENSE.txt"
//!
//! [bundle.msi]
//! install_scope = "perUser"
//! ```

use crate::bundler::{BundleSettings, PackageSettings};
use crate::error::{BundlerError, CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Parsed configuration file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Identity and version from `[package]`
    pub package: PackageSettings,

    /// Publisher and format options from `[bundle]`, paths resolved
    pub bundle_settings: BundleSettings,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    package: PackageSettings,
    #[serde(default)]
    bundle: BundleSettings,
}

/// Load the configuration file at `path`.
///
/// Relative license, icon and sign tool paths are resolved against the
/// directory containing the file, so the result does not depend on the
/// current directory.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("cannot read file: {}", e),
        })
    })?;

    let config: ConfigFile = toml::from_str(&text).map_err(|e| {
        BundlerError::Cli(CliError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    let mut bundle = config.bundle;

    resolve(base, &mut bundle.license_file);
    resolve(base, &mut bundle.icon);
    resolve(base, &mut bundle.msi.signing.sign_tool_location);

    log::debug!(
        "Loaded {} {} from {}",
        config.package.app_base_name,
        config.package.version,
        path.display()
    );

    Ok(AppConfig {
        package: config.package,
        bundle_settings: bundle,
    })
}

fn resolve(base: &Path, path: &mut Option<PathBuf>) {
    if let Some(p) = path.as_mut()
        && p.is_relative()
    {
        *p = base.join(&*p);
    }
}
