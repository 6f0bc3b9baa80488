use std::{collections::HashMap, sync::Arc};

use crate::interpreter::value::{core::Value, function::NativeFunction};

/// What a name resolves to in an [`Environment`].
#[derive(Debug, Clone)]
pub enum Binding {
    /// A scalar value, usable by identifier lookups.
    Value(Value),
    /// A callable, usable by function-call syntax.
    Function(NativeFunction),
}

macro_rules! binding_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Binding {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

binding_from_value!(Value, f64, bool, String, &str);

impl From<NativeFunction> for Binding {
    fn from(func: NativeFunction) -> Self {
        Self::Function(func)
    }
}

/// The capability an expression queries to resolve identifiers and calls.
///
/// Implementations must be safe for concurrent reads if the same parsed
/// expression is evaluated from several threads.
pub trait Environment: Send + Sync {
    /// Resolves `name`, returning `None` if it is not bound.
    fn get(&self, name: &str) -> Option<Binding>;
}

impl<E: Environment + ?Sized> Environment for &E {
    fn get(&self, name: &str) -> Option<Binding> {
        (**self).get(name)
    }
}

impl<E: Environment + ?Sized> Environment for Box<E> {
    fn get(&self, name: &str) -> Option<Binding> {
        (**self).get(name)
    }
}

impl<E: Environment + ?Sized> Environment for Arc<E> {
    fn get(&self, name: &str) -> Option<Binding> {
        (**self).get(name)
    }
}

/// An environment in which nothing is bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyEnvironment;

impl Environment for EmptyEnvironment {
    fn get(&self, _name: &str) -> Option<Binding> {
        None
    }
}

/// An environment that resolves names through a closure.
///
/// # Example
/// ```
/// use celform::{Binding, Expression, FnEnvironment, Value};
///
/// let env = FnEnvironment::new(|name: &str| {
///     name.strip_prefix("N").and_then(|n| n.parse::<f64>().ok()).map(Binding::from)
/// });
///
/// let expr = Expression::parse("=N2 + N40").unwrap();
/// assert_eq!(expr.evaluate(&env).unwrap(), Value::Number(42.0));
/// ```
pub struct FnEnvironment<F>(F);

impl<F> FnEnvironment<F> where F: Fn(&str) -> Option<Binding> + Send + Sync
{
    /// Wraps `lookup` as an environment.
    pub const fn new(lookup: F) -> Self {
        Self(lookup)
    }
}

impl<F> Environment for FnEnvironment<F> where F: Fn(&str) -> Option<Binding> + Send + Sync
{
    fn get(&self, name: &str) -> Option<Binding> {
        (self.0)(name)
    }
}

/// An environment backed by a hash map.
///
/// The map is read-only once the environment is shared, so concurrent
/// evaluations may use it freely.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    bindings: HashMap<String, Binding>,
}

impl MapEnvironment {
    /// Creates an empty map environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name`, replacing any previous binding.
    pub fn insert(&mut self, name: impl Into<String>, binding: impl Into<Binding>) {
        self.bindings.insert(name.into(), binding.into());
    }

    /// Builder form of [`MapEnvironment::insert`] for values.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, Binding::Value(value.into()));
        self
    }

    /// Builder form of [`MapEnvironment::insert`] for functions.
    #[must_use]
    pub fn with_function(mut self, name: impl Into<String>, func: NativeFunction) -> Self {
        self.insert(name, Binding::Function(func));
        self
    }

    /// Builds an environment from a JSON object.
    ///
    /// Only scalar entries (strings, numbers, booleans) are kept; `null`,
    /// arrays and objects are dropped because formulas cannot represent them.
    ///
    /// # Example
    /// ```
    /// use celform::{Environment, MapEnvironment};
    /// use serde_json::json;
    ///
    /// let json = json!({ "name": "Tim", "age": 40, "tags": ["a"], "nothing": null });
    /// let env = MapEnvironment::from_json(json.as_object().unwrap());
    ///
    /// assert!(env.get("name").is_some());
    /// assert!(env.get("age").is_some());
    /// assert!(env.get("tags").is_none());
    /// assert!(env.get("nothing").is_none());
    /// ```
    #[must_use]
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        let bindings = object.iter()
                             .filter_map(|(name, value)| {
                                 json_scalar(value).map(|v| (name.clone(), Binding::Value(v)))
                             })
                             .collect();
        Self { bindings }
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>, B: Into<Binding>> FromIterator<(K, B)> for MapEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, B)>>(iter: I) -> Self {
        Self { bindings: iter.into_iter()
                             .map(|(name, binding)| (name.into(), binding.into()))
                             .collect(), }
    }
}

impl Environment for MapEnvironment {
    fn get(&self, name: &str) -> Option<Binding> {
        self.bindings.get(name).cloned()
    }
}

/// Converts a JSON scalar to a [`Value`]; returns `None` for anything else.
#[must_use]
pub fn json_scalar(value: &serde_json::Value) -> Option<Value> {
    match value {
        serde_json::Value::String(s) => Some(Value::String(s.clone())),
        serde_json::Value::Number(n) => n.as_f64().map(Value::Number),
        serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
        serde_json::Value::Null | serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            None
        },
    }
}

/// An ordered list of environments; the first one that binds a name wins.
///
/// # Example
/// ```
/// use celform::{Environments, Expression, MapEnvironment, Value};
///
/// let overrides = MapEnvironment::new().with_value("x", 1.0);
/// let defaults = MapEnvironment::new().with_value("x", 100.0).with_value("y", 2.0);
/// let env = Environments::new().with(overrides).with(defaults);
///
/// let expr = Expression::parse("=x + y").unwrap();
/// assert_eq!(expr.evaluate(&env).unwrap(), Value::Number(3.0));
/// ```
#[derive(Default)]
pub struct Environments {
    layers: Vec<Box<dyn Environment>>,
}

impl Environments {
    /// Creates an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `env` with the lowest priority so far.
    pub fn push(&mut self, env: impl Environment + 'static) {
        self.layers.push(Box::new(env));
    }

    /// Builder form of [`Environments::push`].
    #[must_use]
    pub fn with(mut self, env: impl Environment + 'static) -> Self {
        self.push(env);
        self
    }
}

impl Environment for Environments {
    fn get(&self, name: &str) -> Option<Binding> {
        self.layers.iter().find_map(|layer| layer.get(name))
    }
}
