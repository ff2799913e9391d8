//! Configuration structures for packaging runs.
//!
//! Package identity, publisher and format-specific options, plus the
//! [`SettingsBuilder`] that validates them into an immutable [`Settings`].

mod arch;
mod builder;
mod bundle;
mod core;
mod package;
mod windows;

pub use arch::Arch;
pub use builder::SettingsBuilder;
pub use bundle::BundleSettings;
pub use core::Settings;
pub use package::PackageSettings;
pub use windows::{DEFAULT_MSI_TOOL, InstallScope, MsiSettings, MsiSigningSettings};
