//! MSI helper functions: architecture and launcher script.

use crate::bundler::settings::Settings;

/// Architecture string for MSI packages.
///
/// An explicit architecture is used as given; otherwise the canonical name
/// of the detected build architecture (`x64`, `x86`, `arm64`).
pub fn map_arch(settings: &Settings) -> String {
    match settings.arch_override() {
        Some(arch) => arch.to_string(),
        None => settings.binary_arch().canonical().to_string(),
    }
}

/// Whether `command` needs a launcher, i.e. differs from the executable name.
pub fn needs_launcher(command: &str, app_base_name: &str) -> bool {
    !command.trim().is_empty() && !command.eq_ignore_ascii_case(app_base_name)
}

/// Batch script that runs the real executable with all arguments forwarded.
pub fn launcher_script(app_base_name: &str) -> String {
    format!("@\"%~dp0{}.exe\" %*\r\n", app_base_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launcher_only_when_name_differs() {
        assert!(needs_launcher("hello", "HelloWorld"));
        assert!(!needs_launcher("helloworld", "HelloWorld"));
        assert!(!needs_launcher("", "HelloWorld"));
    }

    #[test]
    fn launcher_forwards_arguments() {
        assert_eq!(launcher_script("HelloWorld"), "@\"%~dp0HelloWorld.exe\" %*\r\n");
    }
}
