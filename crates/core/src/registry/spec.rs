use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::registry::source::{Setting, ValueSource};
use crate::registry::VariableRegistry;

/// How a variable is rendered into the generated file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Rendered as a plain `NAME=value` line.
    #[default]
    Visible,
    /// Rendered prefixed with `# `, showing the default when no live value
    /// resolved.
    Commented,
    /// Never rendered.
    Hidden,
}

/// Full configuration for one named environment variable.
///
/// `default`, `required`, `output_mode` and `value` may each be computed
/// from the registry; they resolve on first read and memoize in place for
/// the lifetime of the owning registry. The rendered live value is cached
/// in `computed_value`, a slot separate from the `value` source itself.
#[derive(Debug, Clone, Default)]
pub struct VariableSpec {
    /// Human-readable description, rendered as a leading `# ` comment.
    pub description: String,
    pub(crate) default: Option<ValueSource>,
    pub(crate) required: Option<Setting<bool>>,
    pub(crate) output_mode: Option<Setting<OutputMode>>,
    pub(crate) value: Option<ValueSource>,
    pub(crate) computed_value: Option<String>,
}

impl VariableSpec {
    pub fn builder(description: impl Into<String>) -> VariableSpecBuilder {
        VariableSpecBuilder {
            spec: VariableSpec {
                description: description.into(),
                ..Default::default()
            },
        }
    }

    /// Whether a default is declared at all, resolved or not.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

pub struct VariableSpecBuilder {
    spec: VariableSpec,
}

impl VariableSpecBuilder {
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.spec.default = Some(ValueSource::literal(value));
        self
    }

    pub fn default_fn<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&VariableRegistry) -> Result<Option<Value>> + 'static,
    {
        self.spec.default = Some(ValueSource::computed(resolver));
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.spec.required = Some(Setting::Literal(required));
        self
    }

    pub fn required_fn<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&VariableRegistry) -> Result<bool> + 'static,
    {
        self.spec.required = Some(Setting::computed(resolver));
        self
    }

    pub(crate) fn required_setting(mut self, setting: Setting<bool>) -> Self {
        self.spec.required = Some(setting);
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.spec.output_mode = Some(Setting::Literal(mode));
        self
    }

    pub fn output_mode_fn<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&VariableRegistry) -> Result<OutputMode> + 'static,
    {
        self.spec.output_mode = Some(Setting::computed(resolver));
        self
    }

    pub(crate) fn output_mode_setting(mut self, setting: Setting<OutputMode>) -> Self {
        self.spec.output_mode = Some(setting);
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.spec.value = Some(ValueSource::literal(value));
        self
    }

    pub fn value_fn<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&VariableRegistry) -> Result<Option<Value>> + 'static,
    {
        self.spec.value = Some(ValueSource::computed(resolver));
        self
    }

    pub fn build(self) -> VariableSpec {
        self.spec
    }
}
