use core::fmt::Debug;
use serde_json::{Map, Value};

mod memory;
pub use memory::*;
#[cfg(feature = "browser")]
mod history;
#[cfg(feature = "browser")]
pub use history::*;

/// The state attached to a history entry: a flat map of field names to
/// values, copied onto the view mounted for that entry.
///
/// The router never interprets its contents. An empty map means the entry
/// carries no state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State(Map<String, Value>);

impl State {
    pub fn new(state: Map<String, Value>) -> Self {
        Self(state)
    }

    /// Converts an arbitrary JSON value; anything but an object carries no
    /// fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for State {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for State
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// A description of a navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationChange {
    /// The new path.
    pub value: String,
    /// If true, the new location replaces the current entry, so "back" will
    /// not return to the current location.
    pub replace: bool,
    /// The state stored with the new history entry.
    pub state: State,
}

/// The host's history facility.
///
/// Abstracts the browser's global history and location so a router can run
/// against [`MemoryHistory`] in tests and headless hosts.
pub trait NavigationProvider: 'static {
    type Error: Debug;

    /// The path of the current location, without query string or hash.
    fn current_path(&self) -> Result<String, Self::Error>;

    /// The state stored with the current history entry.
    fn current_state(&self) -> Result<State, Self::Error>;

    /// Adds (or replaces) a history entry without loading a new page.
    fn push(&self, change: &LocationChange) -> Result<(), Self::Error>;

    /// Registers a listener called after every back/forward traversal.
    fn on_pop_state(&self, listener: Box<dyn Fn()>)
        -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::State;
    use serde_json::{json, Value};

    #[test]
    fn non_object_state_is_empty() {
        assert!(State::from_value(Value::Null).is_empty());
        assert!(State::from_value(json!([1, 2])).is_empty());
        assert!(State::from_value(json!("text")).is_empty());
    }

    #[test]
    fn object_state_round_trips_through_value() {
        let state = State::from_value(json!({ "highlightRow": true }));
        assert_eq!(state.get("highlightRow"), Some(&Value::Bool(true)));
        assert_eq!(state.to_value(), json!({ "highlightRow": true }));
    }

    #[test]
    fn collects_from_pairs() {
        let state: State = [("status", "NEW")].into_iter().collect();
        let expected = Value::from("NEW");
        assert_eq!(
            state.iter().collect::<Vec<_>>(),
            vec![("status", &expected)]
        );
    }
}
