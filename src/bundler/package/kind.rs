//! Closed set of package formats.

use crate::bundler::error::{Error, Result};
use std::{fmt, str::FromStr};

/// Package formats known to the bundler.
///
/// Only formats for which [`PackageKind::is_implemented`] is true have a
/// builder. Callers check [`PackageKind::ensure_implemented`] before doing any
/// work so that a request for a placeholder format fails up front.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum PackageKind {
    /// Windows Installer package built with SimpleMSI.
    Msi,
    /// Windows setup executable.
    Setup,
    /// Portable Linux AppImage.
    AppImage,
    /// Debian package.
    Deb,
    /// RPM package.
    Rpm,
    /// Plain zip archive.
    Zip,
}

impl PackageKind {
    /// Every known kind, in display order.
    pub const ALL: [PackageKind; 6] = [
        PackageKind::Msi,
        PackageKind::Setup,
        PackageKind::AppImage,
        PackageKind::Deb,
        PackageKind::Rpm,
        PackageKind::Zip,
    ];

    /// Lower-case name used on the command line and in directory names.
    pub fn name(self) -> &'static str {
        match self {
            PackageKind::Msi => "msi",
            PackageKind::Setup => "setup",
            PackageKind::AppImage => "appimage",
            PackageKind::Deb => "deb",
            PackageKind::Rpm => "rpm",
            PackageKind::Zip => "zip",
        }
    }

    /// Canonical output file extension, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            PackageKind::Msi => ".msi",
            PackageKind::Setup => ".exe",
            PackageKind::AppImage => ".AppImage",
            PackageKind::Deb => ".deb",
            PackageKind::Rpm => ".rpm",
            PackageKind::Zip => ".zip",
        }
    }

    /// Whether a working builder exists for this kind.
    pub fn is_implemented(self) -> bool {
        matches!(self, PackageKind::Msi)
    }

    /// Fails with [`Error::UnimplementedFormat`] for placeholder kinds.
    pub fn ensure_implemented(self) -> Result<()> {
        if self.is_implemented() {
            Ok(())
        } else {
            Err(Error::UnimplementedFormat(self))
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PackageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        PackageKind::ALL
            .into_iter()
            .find(|kind| kind.name() == lower)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("MSI".parse::<PackageKind>().unwrap(), PackageKind::Msi);
        assert_eq!(" appimage ".parse::<PackageKind>().unwrap(), PackageKind::AppImage);
        assert!(matches!(
            "pkg".parse::<PackageKind>(),
            Err(Error::UnknownFormat(name)) if name == "pkg"
        ));
    }

    #[test]
    fn only_msi_is_implemented() {
        assert!(PackageKind::Msi.ensure_implemented().is_ok());
        for kind in PackageKind::ALL.into_iter().filter(|k| *k != PackageKind::Msi) {
            assert!(matches!(
                kind.ensure_implemented(),
                Err(Error::UnimplementedFormat(k)) if k == kind
            ));
        }
    }

    #[test]
    fn extensions_start_with_a_dot() {
        for kind in PackageKind::ALL {
            assert!(kind.extension().starts_with('.'));
        }
        assert_eq!(PackageKind::Msi.extension(), ".msi");
    }
}
