#![forbid(unsafe_code)]

//! A small history-integrated router for single-page front ends.
//!
//! A [`Router`] owns an ordered list of route patterns such as
//! `/orders/:id`. Whenever the location changes (through
//! [`Router::navigate`], [`Router::start`] or a back/forward traversal) it
//! selects the first pattern that matches, awaits that route's
//! [loader](Loader), builds the view and swaps it into the [`Outlet`].
//!
//! The host supplies three capabilities: a [`NavigationProvider`] for
//! history and location, an [`Outlet`] to mount into, and a
//! [`LocalSpawn`](futures::task::LocalSpawn) executor for resolutions. With
//! the `browser` feature these are [`BrowserHistory`], `ElementOutlet` and
//! `WasmBindgenSpawner`; [`MemoryHistory`] and [`MemoryOutlet`] run anywhere.
//!
//! ```rust
//! use futures::executor::LocalPool;
//! use orders_router::*;
//!
//! let mut pool = LocalPool::new();
//! let outlet = MemoryOutlet::new();
//! let router =
//!     Router::new(outlet.clone(), MemoryHistory::new("/"), pool.spawner())?;
//! router
//!     .add_route("/orders", VirtualElementFactory::new("order-list"), ready())
//!     .add_route(
//!         "/orders/:id",
//!         VirtualElementFactory::new("order-detail"),
//!         ready(),
//!     );
//!
//! router.navigate_to("/orders/42")?;
//! pool.run_until_stalled();
//!
//! let view = outlet.first().expect("a view is mounted");
//! assert_eq!(view.tag(), "order-detail");
//! assert_eq!(view.field("id").and_then(|id| id.as_str()), Some("42"));
//! # Ok::<(), RouterError>(())
//! ```

mod error;
mod loader;
pub mod location;
mod matching;
mod outlet;
pub mod params;
mod router;
#[cfg(feature = "browser")]
mod spawn;
mod view;

pub use error::*;
pub use loader::*;
pub use location::{LocationChange, MemoryHistory, NavigationProvider, State};
pub use matching::*;
pub use orders_router_config::{RouterOptions, StaleNavigation};
pub use outlet::*;
pub use params::{IntoParam, Params, ParamsError, ParamsMap};
pub use router::*;
#[cfg(feature = "browser")]
pub use spawn::*;
pub use view::*;

#[cfg(feature = "browser")]
pub use location::BrowserHistory;

#[cfg(feature = "browser")]
pub(crate) fn window() -> Result<web_sys::Window, wasm_bindgen::JsValue> {
    web_sys::window()
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no global `window`"))
}
