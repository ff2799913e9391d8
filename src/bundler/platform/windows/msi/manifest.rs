//! SimpleMSI manifest generation.
//!
//! Renders [`MANIFEST_TEMPLATE`] with handlebars from an ordered data map,
//! then doubles every backslash once, because SimpleMSI reads the manifest as
//! TOML where `\` inside a quoted string starts an escape.

use super::template::MANIFEST_TEMPLATE;
use crate::bundler::{
    error::{Error, Result},
    package::BuilderContext,
    settings::Settings,
    utils::guid,
};
use handlebars::Handlebars;
use serde_json::{Map, Value, json};
use std::path::Path;

/// Generates the manifest text for an MSI build.
///
/// # Arguments
/// - `settings` - application configuration
/// - `ctx` - builder context (architecture, version)
/// - `app_bin` - staged binary directory
/// - `license_path` - converted RTF license, when a license is configured
///
/// # Errors
/// A configured value contains a double quote or control character, which
/// cannot be represented once backslashes are doubled.
pub fn generate_manifest(
    settings: &Settings,
    ctx: &BuilderContext,
    app_bin: &Path,
    license_path: Option<&Path>,
) -> Result<String> {
    let data = manifest_data(settings, ctx, app_bin, license_path);
    check_values("", &data)?;

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.register_template_string("manifest.toml", MANIFEST_TEMPLATE)?;

    let rendered = handlebars.render("manifest.toml", &data)?;
    Ok(escape_backslashes(&rendered))
}

/// Doubles every backslash. Applied exactly once, to the rendered text.
pub fn escape_backslashes(text: &str) -> String {
    text.replace('\\', "\\\\")
}

fn manifest_data(
    settings: &Settings,
    ctx: &BuilderContext,
    app_bin: &Path,
    license_path: Option<&Path>,
) -> Value {
    let package = settings.package();
    let bundle = settings.bundle_settings();
    let msi = settings.msi();

    let id = guid::package_guid(
        package.package_id.as_deref(),
        &bundle.publisher_id,
        &package.app_id,
    );

    let signing = msi.signing.certificate_name.as_ref().map(|name| {
        json!({
            "certificate_name": name,
            "description": msi.signing.description,
            "timestamp_url": msi.signing.timestamp_url,
            "certificate_store": msi.signing.certificate_store,
            "algorithm": msi.signing.algorithm,
            "sign_tool_location": msi.signing.sign_tool_location.as_ref().map(|p| p.display().to_string()),
            "additional_arguments": msi.signing.additional_arguments,
        })
    });

    json!({
        "id": id,
        "name": package.app_base_name,
        "platform": ctx.arch(),
        "version": ctx.package_version(),
        "install_scope": msi.install_scope.as_str(),
        "display_name": settings.app_friendly_name(),
        "description": package.app_short_summary,
        "author": bundle.publisher_name,
        "license_file": license_path.map(|p| p.display().to_string()),
        "icon_file": bundle.icon.as_ref().map(|p| p.display().to_string()),
        "about_url": bundle.publisher_link,
        "hide_program_entry": msi.hide_program_entry,
        "source": app_bin.join("*").display().to_string(),
        "signing": signing,
        "start_command": bundle.start_command,
        "no_display": bundle.desktop_no_display,
        "executable": format!("{}.exe", package.app_base_name),
    })
}

/// Rejects string values that would break the quoted TOML strings.
fn check_values(key: &str, value: &Value) -> Result<()> {
    match value {
        Value::String(s) if s.chars().any(|c| c == '"' || c.is_control()) => {
            Err(Error::InvalidSettings(format!(
                "'{}' contains a double quote or control character: {:?}",
                key, s
            )))
        }
        Value::Object(map) => check_map(map),
        _ => Ok(()),
    }
}

fn check_map(map: &Map<String, Value>) -> Result<()> {
    map.iter().try_for_each(|(key, value)| check_values(key, value))
}
