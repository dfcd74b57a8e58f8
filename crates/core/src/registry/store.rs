use std::cell::RefCell;

use indexmap::IndexMap;
use tracing::debug;

use crate::registry::source::{coerce_to_string, Setting, ValueSource};
use crate::registry::spec::{OutputMode, VariableSpec};

/// Lazily resolving store of environment variable specifications.
///
/// Specs are kept in registration order. Computed attributes resolve on
/// first read and memoize in place, so each attribute is evaluated at most
/// once per registry instance. Resolver failures are swallowed: a failing
/// default or value reads as absent, a failing required flag as `false`, a
/// failing output mode as [`OutputMode::Visible`].
///
/// A registry is built once, read to exhaustion, and dropped within a
/// single logical run. It is not meant to be shared across threads.
pub struct VariableRegistry {
    specs: RefCell<IndexMap<String, VariableSpec>>,
}

impl VariableRegistry {
    pub fn new(specs: IndexMap<String, VariableSpec>) -> Self {
        Self {
            specs: RefCell::new(specs),
        }
    }

    /// Registered variable names, in registration order.
    pub fn variable_names(&self) -> Vec<String> {
        self.specs.borrow().keys().cloned().collect()
    }

    /// Snapshot of every spec, including already-memoized attributes.
    pub fn get_all_variable_configs(&self) -> IndexMap<String, VariableSpec> {
        self.specs.borrow().clone()
    }

    pub fn get_variable_config(&self, name: &str) -> Option<VariableSpec> {
        self.specs.borrow().get(name).cloned()
    }

    /// Resolves the default for `name`, memoizing a computed default back
    /// into the spec. A failing resolver reads as "no default".
    pub fn get_default_value(&self, name: &str) -> Option<String> {
        let source = self.specs.borrow().get(name)?.default.clone()?;
        match source {
            ValueSource::Literal(value) => value.as_ref().and_then(coerce_to_string),
            ValueSource::Computed(resolver) => {
                let resolved = match resolver(self) {
                    Ok(resolved) => resolved,
                    Err(err) => {
                        debug!("default resolver for `{}` failed: {}", name, err);
                        return None;
                    }
                };
                if let Some(spec) = self.specs.borrow_mut().get_mut(name) {
                    spec.default = Some(ValueSource::Literal(resolved.clone()));
                }
                resolved.as_ref().and_then(coerce_to_string)
            }
        }
    }

    /// Resolves the live value for `name`, caching the rendered string in a
    /// slot separate from the value source itself. An empty rendering counts
    /// as no live value and is not cached, so the default stays in effect.
    pub fn get_computed_value(&self, name: &str) -> Option<String> {
        if let Some(cached) = self.specs.borrow().get(name)?.computed_value.clone() {
            return Some(cached);
        }
        let source = self.specs.borrow().get(name)?.value.clone()?;
        let resolved = match source {
            ValueSource::Literal(value) => value,
            ValueSource::Computed(resolver) => match resolver(self) {
                Ok(resolved) => resolved,
                Err(err) => {
                    debug!("value resolver for `{}` failed: {}", name, err);
                    return None;
                }
            },
        };
        let rendered = resolved.as_ref().and_then(coerce_to_string)?;
        if rendered.is_empty() {
            return None;
        }
        if let Some(spec) = self.specs.borrow_mut().get_mut(name) {
            spec.computed_value = Some(rendered.clone());
        }
        Some(rendered)
    }

    /// Final resolved string for `name`: the live value, else the default,
    /// else the empty string.
    pub fn get_value(&self, name: &str) -> String {
        self.get_computed_value(name)
            .or_else(|| self.get_default_value(name))
            .unwrap_or_default()
    }

    /// Whether `name` must resolve to a non-empty value. Unknown names and
    /// specs without the flag read as not required.
    pub fn get_is_required(&self, name: &str) -> bool {
        let Some(setting) = self
            .specs
            .borrow()
            .get(name)
            .and_then(|spec| spec.required.clone())
        else {
            return false;
        };
        match setting {
            Setting::Literal(required) => required,
            Setting::Computed(resolver) => match resolver(self) {
                Ok(required) => {
                    if let Some(spec) = self.specs.borrow_mut().get_mut(name) {
                        spec.required = Some(Setting::Literal(required));
                    }
                    required
                }
                Err(err) => {
                    debug!("required resolver for `{}` failed: {}", name, err);
                    false
                }
            },
        }
    }

    /// Resolves how `name` renders. Unknown names read as visible; a
    /// failing resolver reads as visible without memoizing, so a later read
    /// retries.
    pub fn get_output_mode(&self, name: &str) -> OutputMode {
        let setting = {
            let specs = self.specs.borrow();
            match specs.get(name) {
                None => return OutputMode::Visible,
                Some(spec) => spec.output_mode.clone(),
            }
        };
        match setting {
            None => self.derive_output_mode(name),
            Some(Setting::Literal(mode)) => mode,
            Some(Setting::Computed(resolver)) => match resolver(self) {
                Ok(mode) => {
                    if let Some(spec) = self.specs.borrow_mut().get_mut(name) {
                        spec.output_mode = Some(Setting::Literal(mode));
                    }
                    mode
                }
                Err(err) => {
                    debug!("output mode resolver for `{}` failed: {}", name, err);
                    OutputMode::Visible
                }
            },
        }
    }

    /// Fallback for specs registered without an explicit mode: a variable
    /// that is not required and sits on its default renders as a comment.
    fn derive_output_mode(&self, name: &str) -> OutputMode {
        let on_default = self.get_value(name) == self.get_default_value(name).unwrap_or_default();
        if !self.get_is_required(name) && on_default {
            OutputMode::Commented
        } else {
            OutputMode::Visible
        }
    }

    /// Resolved values for every registered variable, in registration order.
    pub fn get_all_values(&self) -> IndexMap<String, String> {
        self.variable_names()
            .into_iter()
            .map(|name| {
                let value = self.get_value(&name);
                (name, value)
            })
            .collect()
    }

    /// Whether `name` is effectively sitting on its default: the spec
    /// declares one, and either no live value resolved or the live value
    /// equals the resolved default.
    pub fn is_using_default_value(&self, name: &str) -> bool {
        let has_default = self
            .specs
            .borrow()
            .get(name)
            .is_some_and(|spec| spec.has_default());
        if !has_default {
            return false;
        }
        match self.get_computed_value(name) {
            None => true,
            Some(value) => self
                .get_default_value(name)
                .is_some_and(|default| default == value),
        }
    }
}
