use crate::{
    error::RouterError,
    loader::Loader,
    location::{LocationChange, NavigationProvider, State},
    matching::{PathMatch, RoutePattern},
    outlet::Outlet,
    params::ParamsMap,
    view::{RouteData, ViewFactory},
};
use core::fmt::{self, Debug};
use futures::{
    future::{FutureExt, LocalBoxFuture},
    task::{LocalSpawn, LocalSpawnExt},
};
use orders_router_config::{RouterOptions, StaleNavigation};
use std::{
    borrow::Cow,
    cell::{Cell, RefCell},
    rc::Rc,
};
use tracing::{debug, error, trace, warn};

struct RouteEntry<N> {
    pattern: RoutePattern,
    view: Rc<dyn ViewFactory<N>>,
    loader: Rc<dyn Loader>,
}

impl<N> Clone for RouteEntry<N> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            view: Rc::clone(&self.view),
            loader: Rc::clone(&self.loader),
        }
    }
}

/// The route currently shown in the outlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedRoute {
    pub pattern: String,
    pub view_id: String,
    pub path: String,
    pub params: ParamsMap,
}

/// What a single resolution of the current location did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A view was built and mounted.
    Mounted(MountedRoute),
    /// Nothing matched and there was no root route; the outlet is untouched.
    NoMatch { path: String },
    /// A later resolution started while this one was loading, so its result
    /// was dropped; the outlet is untouched.
    Superseded { path: String },
}

impl Resolution {
    /// Treats anything but a mount as an error.
    pub fn into_mounted(self) -> Result<MountedRoute, RouterError> {
        match self {
            Resolution::Mounted(mounted) => Ok(mounted),
            Resolution::NoMatch { path } => Err(RouterError::NoMatch(path)),
            Resolution::Superseded { path } => {
                Err(RouterError::Superseded(path))
            }
        }
    }
}

struct RouterInner<Nav, Out: Outlet> {
    outlet: Out,
    navigation: Nav,
    spawner: Box<dyn LocalSpawn>,
    options: RouterOptions,
    routes: RefCell<Vec<RouteEntry<Out::Node>>>,
    generation: Cell<u64>,
    started: Cell<bool>,
    mounted: RefCell<Option<MountedRoute>>,
}

/// Maps the current location to a view and mounts it into an outlet.
///
/// Routes are tried in registration order and the first match wins. A path
/// nothing matches falls back to the route registered as `/`, if any.
///
/// Every navigation, `start()` and every back/forward traversal spawns one
/// resolution on the router's spawner. A resolution awaits its route's
/// loader, then builds the view and swaps it into the outlet. Handles are
/// cheap to clone and share one registry.
pub struct Router<Nav, Out: Outlet> {
    inner: Rc<RouterInner<Nav, Out>>,
}

impl<Nav, Out: Outlet> Clone for Router<Nav, Out> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<Nav, Out: Outlet> Debug for Router<Nav, Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field(
                "routes",
                &self
                    .inner
                    .routes
                    .borrow()
                    .iter()
                    .map(|r| r.pattern.as_str().to_owned())
                    .collect::<Vec<_>>(),
            )
            .field("mounted", &self.inner.mounted.borrow())
            .finish_non_exhaustive()
    }
}

fn navigation_error(e: impl Debug) -> RouterError {
    RouterError::Navigation(format!("{e:?}"))
}

fn outlet_error(e: impl Debug) -> RouterError {
    RouterError::Outlet(format!("{e:?}"))
}

impl<Nav, Out> Router<Nav, Out>
where
    Nav: NavigationProvider,
    Out: Outlet,
{
    /// Creates a router with default [`RouterOptions`].
    pub fn new(
        outlet: Out,
        navigation: Nav,
        spawner: impl LocalSpawn + 'static,
    ) -> Result<Self, RouterError> {
        Self::with_options(
            outlet,
            navigation,
            spawner,
            RouterOptions::default(),
        )
    }

    /// Creates a router and subscribes it to back/forward traversals.
    pub fn with_options(
        outlet: Out,
        navigation: Nav,
        spawner: impl LocalSpawn + 'static,
        options: RouterOptions,
    ) -> Result<Self, RouterError> {
        let inner = Rc::new(RouterInner {
            outlet,
            navigation,
            spawner: Box::new(spawner),
            options,
            routes: Default::default(),
            generation: Cell::new(0),
            started: Cell::new(false),
            mounted: Default::default(),
        });

        let weak = Rc::downgrade(&inner);
        inner
            .navigation
            .on_pop_state(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    trace!("popstate");
                    Router { inner }.spawn_resolution();
                }
            }))
            .map_err(navigation_error)?;

        Ok(Self { inner })
    }

    pub fn options(&self) -> &RouterOptions {
        &self.inner.options
    }

    pub fn outlet(&self) -> &Out {
        &self.inner.outlet
    }

    pub fn navigation(&self) -> &Nav {
        &self.inner.navigation
    }

    /// Registers a route. Patterns are not validated, and a pattern that is
    /// already registered is accepted but can never be selected.
    pub fn add_route(
        &self,
        pattern: impl Into<Cow<'static, str>>,
        view: impl ViewFactory<Out::Node>,
        loader: impl Loader,
    ) -> &Self {
        let pattern =
            RoutePattern::with_marker(pattern, self.inner.options.param_marker);
        debug!(pattern = %pattern, view = view.view_id(), "adding route");
        self.inner.routes.borrow_mut().push(RouteEntry {
            pattern,
            view: Rc::new(view),
            loader: Rc::new(loader),
        });
        self
    }

    /// Registered patterns, in match order.
    pub fn route_patterns(&self) -> Vec<String> {
        self.inner
            .routes
            .borrow()
            .iter()
            .map(|r| r.pattern.as_str().to_owned())
            .collect()
    }

    /// The route whose view is in the outlet, if any has been mounted.
    pub fn mounted(&self) -> Option<MountedRoute> {
        self.inner.mounted.borrow().clone()
    }

    /// Pushes a history entry for `path` carrying `state`, then resolves it.
    ///
    /// Fails only if the history entry cannot be pushed; the resolution
    /// itself runs on the spawner and reports failures through `tracing`.
    pub fn navigate(
        &self,
        path: &str,
        state: State,
    ) -> Result<(), RouterError> {
        debug!(path, "navigating");
        self.inner
            .navigation
            .push(&LocationChange {
                value: path.to_owned(),
                replace: false,
                state,
            })
            .map_err(navigation_error)?;
        self.spawn_resolution();
        Ok(())
    }

    /// [`navigate`](Self::navigate) without navigation state.
    pub fn navigate_to(&self, path: &str) -> Result<(), RouterError> {
        self.navigate(path, State::default())
    }

    /// Resolves the location the page was loaded at. Does not touch
    /// history.
    pub fn start(&self) {
        if self.inner.started.replace(true) {
            warn!("router started more than once");
        }
        self.spawn_resolution();
    }

    /// Selects the route for `path`: the first registered pattern that
    /// matches, otherwise the root route with no params.
    pub fn match_path(&self, path: &str) -> Option<PathMatch> {
        self.inner.find_route(path).map(|(_, matched)| matched)
    }

    /// Resolves the current location and mounts its view.
    ///
    /// The path is read and the route selected when this is called. The
    /// navigation state is read from the current entry once the loader has
    /// finished, so state written to that entry in the meantime is applied.
    /// A loader or view failure leaves the outlet untouched.
    pub fn handle_location(
        &self,
    ) -> LocalBoxFuture<'static, Result<Resolution, RouterError>> {
        let inner = Rc::clone(&self.inner);
        let generation = inner.generation.get().wrapping_add(1);
        inner.generation.set(generation);

        let selected = inner.select();
        async move {
            let (path, selected) = selected?;
            let Some((route, matched)) = selected else {
                warn!(%path, "no route matches path");
                return Ok(Resolution::NoMatch { path });
            };

            route.loader.load().await?;

            if inner.options.stale_navigation == StaleNavigation::Discard
                && inner.generation.get() != generation
            {
                debug!(%path, "dropping superseded navigation");
                return Ok(Resolution::Superseded { path });
            }

            let state =
                inner.navigation.current_state().map_err(navigation_error)?;
            let node = route
                .view
                .build(&RouteData::new(&matched.params, &state))?;
            inner.outlet.clear().map_err(outlet_error)?;
            inner.outlet.append(node).map_err(outlet_error)?;

            let mounted = MountedRoute {
                pattern: matched.pattern,
                view_id: route.view.view_id().to_owned(),
                path,
                params: matched.params,
            };
            debug!(
                path = %mounted.path,
                pattern = %mounted.pattern,
                view = %mounted.view_id,
                "mounted view"
            );
            *inner.mounted.borrow_mut() = Some(mounted.clone());
            Ok(Resolution::Mounted(mounted))
        }
        .boxed_local()
    }

    fn spawn_resolution(&self) {
        let resolution = self.handle_location();
        let task = async move {
            if let Err(e) = resolution.await {
                error!(error = %e, "navigation failed");
            }
        };
        if let Err(e) = self.inner.spawner.spawn_local(task) {
            error!(error = ?e, "could not spawn navigation");
        }
    }
}

type Selected<N> = (String, Option<(RouteEntry<N>, PathMatch)>);

impl<Nav, Out> RouterInner<Nav, Out>
where
    Nav: NavigationProvider,
    Out: Outlet,
{
    fn select(&self) -> Result<Selected<Out::Node>, RouterError> {
        let path = self.navigation.current_path().map_err(navigation_error)?;
        let selected = self.find_route(&path);
        Ok((path, selected))
    }

    fn find_route(
        &self,
        path: &str,
    ) -> Option<(RouteEntry<Out::Node>, PathMatch)> {
        let routes = self.routes.borrow();
        routes
            .iter()
            .find_map(|route| {
                trace!(pattern = %route.pattern, path, "testing route");
                route
                    .pattern
                    .test(path)
                    .map(|matched| (route.clone(), matched))
            })
            .or_else(|| {
                if !self.options.root_fallback {
                    return None;
                }
                routes.iter().find(|route| route.pattern.is_root()).map(
                    |route| {
                        debug!(path, "falling back to root route");
                        (
                            route.clone(),
                            PathMatch {
                                pattern: route.pattern.as_str().to_owned(),
                                params: ParamsMap::new(),
                            },
                        )
                    },
                )
            })
    }
}
