//! Platform-specific package builders.
//!
//! Each format lives under the platform it targets and implements
//! [`PackageBuilder`](crate::bundler::package::PackageBuilder).

pub mod windows;
