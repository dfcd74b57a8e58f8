use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::error::Result;
use crate::registry::VariableRegistry;

/// Resolver callback for a computed spec attribute.
///
/// Resolvers receive the owning registry and may read other variables
/// through it. There is no cycle detection: a resolver that reads its own
/// still-unresolved attribute recurses until the stack runs out.
pub type Resolver<T> = Rc<dyn Fn(&VariableRegistry) -> Result<T>>;

/// A value-bearing spec attribute (`default` or `value`): either a literal
/// or a resolver producing one. `None` means the attribute resolved to no
/// value at all.
#[derive(Clone)]
pub enum ValueSource {
    Literal(Option<Value>),
    Computed(Resolver<Option<Value>>),
}

impl ValueSource {
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(Some(value.into()))
    }

    pub fn computed<F>(resolver: F) -> Self
    where
        F: Fn(&VariableRegistry) -> Result<Option<Value>> + 'static,
    {
        Self::Computed(Rc::new(resolver))
    }
}

impl fmt::Debug for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A scalar spec attribute (`required` or `output_mode`): either a literal
/// or a resolver producing one.
#[derive(Clone)]
pub enum Setting<T> {
    Literal(T),
    Computed(Resolver<T>),
}

impl<T> Setting<T> {
    pub fn computed<F>(resolver: F) -> Self
    where
        F: Fn(&VariableRegistry) -> Result<T> + 'static,
    {
        Self::Computed(Rc::new(resolver))
    }
}

impl<T: fmt::Debug> fmt::Debug for Setting<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Stringification boundary for heterogeneous literal values. Resolvers may
/// produce booleans or numbers; they only become text here.
pub(crate) fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coercion_of_heterogeneous_values() {
        assert_eq!(coerce_to_string(&json!(null)), None);
        assert_eq!(coerce_to_string(&json!("text")), Some("text".to_string()));
        assert_eq!(coerce_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(coerce_to_string(&json!(false)), Some("false".to_string()));
        assert_eq!(coerce_to_string(&json!(42)), Some("42".to_string()));
        assert_eq!(coerce_to_string(&json!(["a"])), Some("[\"a\"]".to_string()));
    }
}
