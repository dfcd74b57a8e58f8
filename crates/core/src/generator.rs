use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::{OutputMode, VariableRegistry};

/// Renders a registry into deterministic `.env` text.
///
/// Output is bit-reproducible for the same inputs: blocks follow
/// registration order, a blank line separates blocks, and a non-empty
/// description becomes a `# ` comment line directly above its variable.
pub struct EnvGenerator {
    registry: VariableRegistry,
}

impl EnvGenerator {
    pub fn new(registry: VariableRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &VariableRegistry {
        &self.registry
    }

    /// Renders every registered variable. A registry that produces no
    /// blocks at all (empty, or all variables hidden) yields `Ok(None)`.
    ///
    /// Fails on the first required variable whose resolved value is empty;
    /// nothing is rendered in that case.
    pub fn generate(&self) -> Result<Option<String>> {
        let mut blocks = Vec::new();
        for name in self.registry.variable_names() {
            if let Some(block) = self.prepare_variable(&name)? {
                blocks.push(block);
            }
        }
        if blocks.is_empty() {
            debug!("no variables rendered");
            return Ok(None);
        }
        Ok(Some(blocks.join("\n\n")))
    }

    /// Renders a single variable block. Unregistered names and hidden
    /// variables yield `None`.
    pub fn prepare_variable(&self, name: &str) -> Result<Option<String>> {
        let Some(spec) = self.registry.get_variable_config(name) else {
            debug!("skipping unregistered variable `{}`", name);
            return Ok(None);
        };

        let required = self.registry.get_is_required(name);
        let value = self.registry.get_value(name);
        // "0" is a real value; only the empty string trips the check.
        if required && value.is_empty() {
            return Err(Error::MissingRequiredValue(name.to_string()));
        }

        let mode = self.registry.get_output_mode(name);
        if mode == OutputMode::Hidden {
            debug!("variable `{}` is hidden", name);
            return Ok(None);
        }

        let mut block = String::new();
        if !spec.description.is_empty() {
            block.push_str("# ");
            block.push_str(&spec.description);
            block.push('\n');
        }

        // A commented variable with no live value displays its default.
        let display = if mode == OutputMode::Commented && value.is_empty() {
            self.registry.get_default_value(name).unwrap_or_default()
        } else {
            value
        };

        if mode == OutputMode::Commented {
            block.push_str("# ");
        }
        block.push_str(name);
        block.push('=');
        block.push_str(&display);

        Ok(Some(block))
    }
}
