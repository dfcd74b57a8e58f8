use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::registry::source::{Setting, ValueSource};
use crate::registry::spec::{OutputMode, VariableSpec};

/// Literal-only spec override, supplied by an embedding application or an
/// overrides file. Present fields replace the base spec's, absent fields
/// keep it.
///
/// Overrides carry no resolvers on purpose: anything injected from the
/// outside is a plain value, computed behavior stays with the code that
/// registers the spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct VariableOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_mode: Option<OutputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl VariableOverride {
    /// Applies this override on top of `base`, producing the effective spec.
    pub fn apply_to(&self, base: VariableSpec) -> VariableSpec {
        let mut spec = base;
        if let Some(description) = &self.description {
            spec.description = description.clone();
        }
        if let Some(default) = &self.default {
            spec.default = Some(ValueSource::Literal(Some(default.clone())));
        }
        if let Some(required) = self.required {
            spec.required = Some(Setting::Literal(required));
        }
        if let Some(mode) = self.output_mode {
            spec.output_mode = Some(Setting::Literal(mode));
        }
        if let Some(value) = &self.value {
            spec.value = Some(ValueSource::Literal(Some(value.clone())));
        }
        spec
    }
}

/// Named overrides, in declaration order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableOverrides(pub IndexMap<String, VariableOverride>);

impl VariableOverrides {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let overrides = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse overrides: {e}")))?;
        Ok(overrides)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VariableOverride)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::VariableRegistry;
    use indexmap::indexmap;

    #[test]
    fn test_present_fields_replace_absent_fields_keep() {
        let base = VariableSpec::builder("Original description")
            .default_value("/old")
            .required(true)
            .build();

        let override_ = VariableOverride {
            default: Some(Value::from("/new")),
            ..Default::default()
        };

        let spec = override_.apply_to(base);
        assert_eq!(spec.description, "Original description");

        let registry = VariableRegistry::new(indexmap! { "X".to_string() => spec });
        assert_eq!(registry.get_default_value("X"), Some("/new".to_string()));
        assert!(registry.get_is_required("X"));
    }

    #[test]
    fn test_override_replaces_computed_value_with_literal() {
        let base = VariableSpec::builder("")
            .value_fn(|_| Ok(Some(Value::from("computed"))))
            .build();

        let override_ = VariableOverride {
            value: Some(Value::from("pinned")),
            ..Default::default()
        };

        let registry = VariableRegistry::new(indexmap! {
            "X".to_string() => override_.apply_to(base),
        });
        assert_eq!(registry.get_value("X"), "pinned");
    }

    #[test]
    fn test_parses_overrides_document() {
        let parsed: VariableOverrides = serde_json::from_str(
            r#"{
                "CORS_PROXY_PREFIX": {"output_mode": "visible", "value": "/cors"},
                "EXTRA_FLAG": {"description": "Custom flag", "value": true}
            }"#,
        )
        .unwrap();

        assert_eq!(parsed.0.len(), 2);
        assert_eq!(
            parsed.0["CORS_PROXY_PREFIX"].output_mode,
            Some(OutputMode::Visible)
        );
        assert_eq!(parsed.0["EXTRA_FLAG"].value, Some(Value::from(true)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, r#"{"FOO": {"value": "bar"}}"#).unwrap();

        let overrides = VariableOverrides::load_from_file(&path).unwrap();
        assert_eq!(overrides.0["FOO"].value, Some(Value::from("bar")));
    }
}
