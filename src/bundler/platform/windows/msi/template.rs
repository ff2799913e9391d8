//! SimpleMSI manifest template.
//!
//! Block helpers sit at the end of content lines so that every optional key
//! appears or disappears together with its own line break.

pub const MANIFEST_TEMPLATE: &str = r#"[general]
id = "{{id}}"
name = "{{name}}"
platform = "{{platform}}"
version = "{{version}}"
allow_same_version_upgrades = true
install_scope = "{{install_scope}}"
full_ui = true

[meta]
display_name = "{{display_name}}"
description = "{{description}}"
author = "{{author}}"{{#if license_file}}
license_file = "{{license_file}}"{{/if}}{{#if icon_file}}
icon_file = "{{icon_file}}"{{/if}}{{#if about_url}}
about_url = "{{about_url}}"{{/if}}
hide_program_entry = {{hide_program_entry}}

[install]
source = "{{source}}"{{#with signing}}

[install.signing]
certificate_name = "{{certificate_name}}"{{#if description}}
description = "{{description}}"{{/if}}{{#if timestamp_url}}
timestamp_url = "{{timestamp_url}}"{{/if}}{{#if certificate_store}}
certificate_store = "{{certificate_store}}"{{/if}}{{#if algorithm}}
algorithm = "{{algorithm}}"{{/if}}
embed_signature = true{{#if sign_tool_location}}
sign_tool_location = "{{sign_tool_location}}"{{/if}}{{#if additional_arguments}}
additional_arguments = "{{additional_arguments}}"{{/if}}{{/with}}{{#if start_command}}

[[install.env_vars]]
name = "PATH"
value = "[INSTALLDIR]"
action = "append"{{/if}}{{#unless no_display}}

[[install.shortcuts]]
target = "{{executable}}"
name = "{{display_name}}"{{/unless}}
"#;
