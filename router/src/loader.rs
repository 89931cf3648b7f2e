use futures::future::{self, FutureExt, LocalBoxFuture};
use std::{borrow::Cow, future::Future};
use thiserror::Error;

/// A view could not be made available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load view: {message}")]
pub struct LoadError {
    message: Cow<'static, str>,
}

impl LoadError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Makes a route's view available before it is built.
///
/// A loader runs once per resolution that selects its route, so it must be
/// safe to call repeatedly. Any `Fn() -> impl Future<Output = Result<(),
/// LoadError>>` is a loader.
pub trait Loader: 'static {
    fn load(&self) -> LocalBoxFuture<'static, Result<(), LoadError>>;
}

impl<F, Fut> Loader for F
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<(), LoadError>> + 'static,
{
    fn load(&self) -> LocalBoxFuture<'static, Result<(), LoadError>> {
        self().boxed_local()
    }
}

/// A loader for views that are already available.
pub fn ready() -> impl Loader {
    || future::ready(Ok::<(), LoadError>(()))
}

/// A loader that waits until the custom element `tag` has been defined,
/// e.g. by a lazily imported module.
#[cfg(feature = "browser")]
pub fn when_defined(tag: impl Into<Cow<'static, str>>) -> impl Loader {
    let tag = tag.into();
    move || {
        let tag = tag.clone();
        async move {
            let registry = crate::window()
                .map_err(js_load_error)?
                .custom_elements();
            let promise = registry.when_defined(&tag).map_err(js_load_error)?;
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map_err(js_load_error)?;
            Ok(())
        }
    }
}

#[cfg(feature = "browser")]
fn js_load_error(e: wasm_bindgen::JsValue) -> LoadError {
    LoadError::new(format!("{e:?}"))
}
