use std::path::Path;

use anyhow::Result;
use serde_json::json;

use envlink_core::OutputMode;

use crate::commands::generate::build_registry;

pub fn list_command(
    profile_path: &Path,
    overrides_path: Option<&Path>,
    json_output: bool,
) -> Result<()> {
    let registry = build_registry(profile_path, overrides_path)?;

    if json_output {
        let entries: Vec<_> = registry
            .variable_names()
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "value": registry.get_value(name),
                    "required": registry.get_is_required(name),
                    "output_mode": registry.get_output_mode(name),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for (name, value) in registry.get_all_values() {
        let required = if registry.get_is_required(&name) {
            " [required]"
        } else {
            ""
        };
        let marker = match registry.get_output_mode(&name) {
            OutputMode::Visible => "",
            OutputMode::Commented => " (commented)",
            OutputMode::Hidden => " (hidden)",
        };
        println!("{name}={value}{required}{marker}");
    }
    Ok(())
}
