//! CPU architecture types and utilities.

/// CPU architecture of the packaged binaries.
///
/// Detected from the Rust target triple (see [`Arch::from_target`]) unless the
/// caller passes an explicit architecture string.
///
/// # Examples
///
/// ```no_run
/// use kodegen_bundler_package::bundler::Arch;
///
/// let arch = Arch::from_target("aarch64-pc-windows-msvc");
/// assert_eq!(arch.canonical(), "arm64");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit)
    AArch64,
    /// ARM with hard-float (32-bit)
    Armhf,
    /// ARM with soft-float (32-bit)
    Armel,
    /// RISC-V (64-bit)
    Riscv64,
}

impl Arch {
    /// Maps a target triple (or a bare `std::env::consts::ARCH` value) to an [`Arch`].
    ///
    /// Unknown triples fall back to [`Arch::X86_64`].
    pub fn from_target(target: &str) -> Self {
        if target.starts_with("x86_64") {
            Arch::X86_64
        } else if target.starts_with('i') || target == "x86" {
            Arch::X86
        } else if target.starts_with("aarch64") {
            Arch::AArch64
        } else if target.starts_with("arm") && target.ends_with("hf") {
            Arch::Armhf
        } else if target.starts_with("arm") {
            Arch::Armel
        } else if target.starts_with("riscv64") {
            Arch::Riscv64
        } else {
            log::warn!("Unrecognised target '{}', assuming x86_64", target);
            Arch::X86_64
        }
    }

    /// Canonical architecture name: lower-case, no hyphens or underscores.
    ///
    /// This is the name Windows tooling uses (`x64`, `x86`, `arm64`).
    pub fn canonical(self) -> &'static str {
        match self {
            Arch::X86_64 => "x64",
            Arch::X86 => "x86",
            Arch::AArch64 => "arm64",
            Arch::Armhf | Arch::Armel => "arm",
            Arch::Riscv64 => "riscv64",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_triples_map_to_canonical_names() {
        assert_eq!(Arch::from_target("x86_64-pc-windows-msvc").canonical(), "x64");
        assert_eq!(Arch::from_target("i686-pc-windows-msvc").canonical(), "x86");
        assert_eq!(Arch::from_target("aarch64-pc-windows-msvc").canonical(), "arm64");
        assert_eq!(Arch::from_target("armv7-unknown-linux-gnueabihf"), Arch::Armhf);
        assert_eq!(Arch::from_target("riscv64gc-unknown-linux-gnu").canonical(), "riscv64");
    }

    #[test]
    fn bare_host_arch_values_are_understood() {
        assert_eq!(Arch::from_target("x86_64"), Arch::X86_64);
        assert_eq!(Arch::from_target("x86"), Arch::X86);
        assert_eq!(Arch::from_target("aarch64"), Arch::AArch64);
    }

    #[test]
    fn canonical_names_have_no_separators() {
        for arch in [Arch::X86_64, Arch::X86, Arch::AArch64, Arch::Armhf, Arch::Riscv64] {
            let name = arch.canonical();
            assert!(!name.contains('-') && !name.contains('_'));
            assert_eq!(name, name.to_lowercase());
        }
    }
}
