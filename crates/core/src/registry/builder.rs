use std::rc::Rc;

use indexmap::IndexMap;
use tracing::debug;

use crate::profile::BackendProfile;
use crate::registry::defaults::default_variables;
use crate::registry::overrides::VariableOverrides;
use crate::registry::spec::VariableSpec;
use crate::registry::VariableRegistry;

/// Assembles the spec table a [`VariableRegistry`] is built from: stock
/// defaults, programmatic inserts, then literal overrides. All layering
/// happens before the registry exists, so resolution state never leaks
/// between layers.
#[derive(Default)]
pub struct RegistryBuilder {
    specs: IndexMap<String, VariableSpec>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            specs: IndexMap::new(),
        }
    }

    /// Starts from the stock variable table resolved against `profile`.
    pub fn with_defaults(profile: Rc<dyn BackendProfile>) -> Self {
        Self {
            specs: default_variables(profile),
        }
    }

    pub fn insert(mut self, name: impl Into<String>, spec: VariableSpec) -> Self {
        self.specs.insert(name.into(), spec);
        self
    }

    /// Merges literal overrides onto the table. Known names are rewritten
    /// in place, keeping their registration position; unknown names append
    /// in override order.
    pub fn merge(mut self, overrides: &VariableOverrides) -> Self {
        for (name, override_) in overrides.iter() {
            if let Some(existing) = self.specs.get_mut(name) {
                debug!("overriding variable `{}`", name);
                *existing = override_.apply_to(existing.clone());
            } else {
                debug!("registering override-only variable `{}`", name);
                self.specs
                    .insert(name.clone(), override_.apply_to(VariableSpec::default()));
            }
        }
        self
    }

    pub fn build(self) -> VariableRegistry {
        VariableRegistry::new(self.specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::StaticProfile;
    use crate::registry::overrides::VariableOverride;
    use serde_json::Value;

    #[test]
    fn test_merge_keeps_position_for_known_names() {
        let overrides: VariableOverrides = serde_json::from_str(
            r#"{"B": {"value": "patched"}}"#,
        )
        .unwrap();

        let registry = RegistryBuilder::new()
            .insert("A", VariableSpec::builder("").value("1").build())
            .insert("B", VariableSpec::builder("").value("2").build())
            .insert("C", VariableSpec::builder("").value("3").build())
            .merge(&overrides)
            .build();

        assert_eq!(
            registry.variable_names(),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
        assert_eq!(registry.get_value("B"), "patched");
    }

    #[test]
    fn test_merge_appends_unknown_names() {
        let mut overrides = VariableOverrides::default();
        overrides.0.insert(
            "EXTRA".to_string(),
            VariableOverride {
                value: Some(Value::from("added")),
                ..Default::default()
            },
        );

        let registry = RegistryBuilder::new()
            .insert("A", VariableSpec::builder("").value("1").build())
            .merge(&overrides)
            .build();

        assert_eq!(
            registry.variable_names(),
            vec!["A".to_string(), "EXTRA".to_string()]
        );
        assert_eq!(registry.get_value("EXTRA"), "added");
    }

    #[test]
    fn test_https_frontend_override_flips_tls_flag() {
        let overrides: VariableOverrides = serde_json::from_str(
            r#"{"NEXT_PUBLIC_FRONTEND_URL": {"value": "https://www.example.com"}}"#,
        )
        .unwrap();

        let profile = StaticProfile {
            home_url: Some("https://backend.example.com".to_string()),
            introspection_token: Some("token".to_string()),
            ..Default::default()
        };

        let registry = RegistryBuilder::with_defaults(Rc::new(profile))
            .merge(&overrides)
            .build();

        assert_eq!(registry.get_value("NODE_TLS_REJECT_UNAUTHORIZED"), "1");
        assert_eq!(
            registry.get_value("NEXT_PUBLIC_FRONTEND_URL"),
            "https://www.example.com"
        );
    }
}
