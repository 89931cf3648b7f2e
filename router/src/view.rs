use crate::{
    error::RouterError,
    location::State,
    params::{Params, ParamsMap},
};
use serde_json::{Map, Value};
use std::{
    borrow::Cow,
    marker::PhantomData,
    sync::atomic::{AtomicU64, Ordering},
};

/// Everything a view is built from: the params captured from the path and
/// the state stored with the history entry.
///
/// Where a state field and a param share a name, the state field wins.
#[derive(Debug, Clone, Copy)]
pub struct RouteData<'a> {
    params: &'a ParamsMap,
    state: &'a State,
}

impl<'a> RouteData<'a> {
    pub fn new(params: &'a ParamsMap, state: &'a State) -> Self {
        Self { params, state }
    }

    pub fn params(&self) -> &'a ParamsMap {
        self.params
    }

    pub fn state(&self) -> &'a State {
        self.state
    }

    /// Params as strings, then state fields on top of them.
    pub fn fields(&self) -> Map<String, Value> {
        let mut fields = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect::<Map<_, _>>();
        for (k, v) in self.state.iter() {
            fields.insert(k.to_string(), v.clone());
        }
        fields
    }

    /// Params with state fields merged over them as raw strings, ready for
    /// [`Params::from_map`]. `null` state fields are left out.
    pub fn to_params_map(&self) -> ParamsMap {
        let mut map = self.params.clone();
        for (k, v) in self.state.iter() {
            let value = match v {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            map.insert(k.to_string(), value);
        }
        map
    }
}

/// Builds the node mounted for a route.
pub trait ViewFactory<N>: 'static {
    /// Names the view this factory builds, e.g. a custom element tag.
    fn view_id(&self) -> &str;

    fn build(&self, data: &RouteData<'_>) -> Result<N, RouterError>;
}

/// A statically typed view.
///
/// The fields a view accepts are declared by its [`Props`](Self::Props);
/// they are filled from route params and navigation state by name, and the
/// view is built only if they all convert.
pub trait RouteView: Sized + 'static {
    const VIEW_ID: &'static str;

    type Props: Params;

    fn new(props: Self::Props) -> Self;
}

/// The [`ViewFactory`] for a [`RouteView`], producing any node type the view
/// converts into.
pub struct TypedView<V>(PhantomData<fn() -> V>);

impl<V> TypedView<V> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<V> Default for TypedView<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, N> ViewFactory<N> for TypedView<V>
where
    V: RouteView + Into<N>,
    N: 'static,
{
    fn view_id(&self) -> &str {
        V::VIEW_ID
    }

    fn build(&self, data: &RouteData<'_>) -> Result<N, RouterError> {
        let props = V::Props::from_map(&data.to_params_map())?;
        Ok(V::new(props).into())
    }
}

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// An in-memory element: a view id with whatever fields the route assigned
/// to it.
///
/// Every built element gets a fresh instance number, so two mounts of the
/// same route can be told apart.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualElement {
    tag: String,
    fields: Map<String, Value>,
    instance: u64,
}

impl VirtualElement {
    pub fn new(tag: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            tag: tag.into(),
            fields,
            instance: NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }
}

/// Builds a [`VirtualElement`] carrying every param and state field.
#[derive(Debug, Clone)]
pub struct VirtualElementFactory {
    tag: Cow<'static, str>,
}

impl VirtualElementFactory {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into() }
    }
}

impl ViewFactory<VirtualElement> for VirtualElementFactory {
    fn view_id(&self) -> &str {
        &self.tag
    }

    fn build(
        &self,
        data: &RouteData<'_>,
    ) -> Result<VirtualElement, RouterError> {
        Ok(VirtualElement::new(self.tag.as_ref(), data.fields()))
    }
}

#[cfg(feature = "browser")]
mod custom_element {
    use super::{RouteData, ViewFactory};
    use crate::error::RouterError;
    use js_sys::{Reflect, JSON};
    use std::borrow::Cow;
    use wasm_bindgen::JsValue;
    use web_sys::Element;

    /// Creates a DOM custom element and sets each param and state field on
    /// it as a JS property.
    #[derive(Debug, Clone)]
    pub struct CustomElement {
        tag: Cow<'static, str>,
    }

    impl CustomElement {
        pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
            Self { tag: tag.into() }
        }
    }

    fn view_error(e: JsValue) -> RouterError {
        RouterError::View(format!("{e:?}"))
    }

    impl ViewFactory<Element> for CustomElement {
        fn view_id(&self) -> &str {
            &self.tag
        }

        fn build(&self, data: &RouteData<'_>) -> Result<Element, RouterError> {
            let document = crate::window()
                .map_err(view_error)?
                .document()
                .ok_or_else(|| RouterError::View("no document".into()))?;
            let element =
                document.create_element(&self.tag).map_err(view_error)?;
            for (name, value) in data.fields() {
                let value =
                    JSON::parse(&value.to_string()).map_err(view_error)?;
                Reflect::set(&element, &JsValue::from_str(&name), &value)
                    .map_err(view_error)?;
            }
            Ok(element)
        }
    }
}

#[cfg(feature = "browser")]
pub use custom_element::*;
