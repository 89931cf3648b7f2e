use crate::{app_options, routes};
use orders_router::{
    when_defined, BrowserHistory, CustomElement, ElementOutlet, Router,
    RouterOptions, State, WasmBindgenSpawner,
};
use std::cell::RefCell;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;

type AppRouter = Router<BrowserHistory, ElementOutlet>;

thread_local! {
    static ROUTER: RefCell<Option<AppRouter>> = const { RefCell::new(None) };
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Builds the router for the page, with each route's custom element loaded
/// lazily.
pub fn mount(options: RouterOptions) -> Result<AppRouter, JsValue> {
    let outlet = ElementOutlet::by_id(&options.outlet_id)?;
    let marker = options.param_marker;
    let router = Router::with_options(
        outlet,
        BrowserHistory,
        WasmBindgenSpawner,
        options,
    )
    .map_err(js_error)?;
    for (pattern, tag) in routes::ROUTES {
        router.add_route(
            routes::with_marker(pattern, marker),
            CustomElement::new(tag),
            when_defined(tag),
        );
    }
    Ok(router)
}

/// Mounts the router and resolves the location the page was loaded at.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    let options = app_options().unwrap_or_else(|e| {
        warn!(error = %e, "using default router options");
        RouterOptions::default()
    });
    let router = mount(options)?;
    router.start();
    debug!("orders app started");
    ROUTER.with(|cell| *cell.borrow_mut() = Some(router));
    Ok(())
}

/// Navigates to `path`. `state` is optional JSON object text stored with
/// the new history entry.
#[wasm_bindgen]
pub fn navigate(path: &str, state: Option<String>) -> Result<(), JsValue> {
    let state = match state {
        Some(json) => serde_json::from_str(&json)
            .map(State::from_value)
            .map_err(js_error)?,
        None => State::default(),
    };
    ROUTER.with(|cell| match cell.borrow().as_ref() {
        Some(router) => router.navigate(path, state).map_err(js_error),
        None => Err(JsValue::from_str("router not started")),
    })
}
