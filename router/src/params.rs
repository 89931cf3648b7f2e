use std::{borrow::Cow, str::FromStr, sync::Arc};
use thiserror::Error;

/// Route parameters captured from a path, in capture order.
///
/// Each name holds one value, kept exactly as it appeared in the path:
/// nothing is decoded or coerced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct ParamsMap(Vec<(Cow<'static, str>, String)>);

impl ParamsMap {
    /// Creates an empty map.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with the given capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Inserts a value, replacing any existing value for that key in place.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: String) {
        let key = key.into();
        if let Some(prev) = self.0.iter_mut().find(|(k, _)| k == &key) {
            prev.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    /// Gets a reference to the value of this param.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over each key and value, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_ref(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ParamsMap
where
    K: Into<Cow<'static, str>>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();

        for (key, value) in iter {
            map.insert(key, value.into());
        }
        map
    }
}

/// Builds a [`ParamsMap`] from `key => value` pairs.
#[macro_export]
macro_rules! params_map {
    ($($key:expr => $val:expr),* $(,)?) => ({
        #[allow(unused_mut)]
        let mut map = $crate::params::ParamsMap::new();
        $( map.insert($key, ::std::string::String::from($val)); )*
        map
    });
}

/// A simple method of deserializing key-value data (like route params or
/// navigation state) into a concrete data type. `Self` should typically be a
/// struct in which each field's type implements [`IntoParam`].
pub trait Params
where
    Self: Sized,
{
    /// Attempts to deserialize the map into the given type.
    fn from_map(map: &ParamsMap) -> Result<Self, ParamsError>;
}

impl Params for () {
    #[inline(always)]
    fn from_map(_map: &ParamsMap) -> Result<Self, ParamsError> {
        Ok(())
    }
}

/// Converts a single, possibly missing, raw value into a typed field.
pub trait IntoParam
where
    Self: Sized,
{
    fn into_param(value: Option<&str>, name: &str)
        -> Result<Self, ParamsError>;
}

impl<T> IntoParam for Option<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    fn into_param(
        value: Option<&str>,
        _name: &str,
    ) -> Result<Self, ParamsError> {
        match value {
            None => Ok(None),
            Some(value) => match T::from_str(value) {
                Ok(value) => Ok(Some(value)),
                Err(e) => Err(ParamsError::Params(Arc::new(e))),
            },
        }
    }
}

macro_rules! required_param {
    ($($ty:ty),*) => {
        $(
            impl IntoParam for $ty {
                fn into_param(
                    value: Option<&str>,
                    name: &str,
                ) -> Result<Self, ParamsError> {
                    let value = value.ok_or_else(|| {
                        ParamsError::MissingParam(name.to_string())
                    })?;
                    <$ty>::from_str(value)
                        .map_err(|e| ParamsError::Params(Arc::new(e)))
                }
            }
        )*
    };
}

required_param!(String, bool, u32, u64, i32, i64);

/// Errors that can occur while parsing params using [`Params`].
#[derive(Error, Debug, Clone)]
pub enum ParamsError {
    /// A field was missing from the route params.
    #[error("could not find parameter {0}")]
    MissingParam(String),
    /// Something went wrong while deserializing a field.
    #[error("failed to deserialize parameters")]
    Params(Arc<dyn std::error::Error + Send + Sync>),
}

impl PartialEq for ParamsError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MissingParam(l0), Self::MissingParam(r0)) => l0 == r0,
            (Self::Params(_), Self::Params(_)) => false,
            _ => false,
        }
    }
}
