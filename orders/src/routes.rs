//! The order pages and the order they are matched in.

use crate::views::{
    HomePage, OrderDetail, OrderForm, OrderKafka, OrderList, OrderView,
    HOME_PAGE, ORDER_DETAIL, ORDER_FORM, ORDER_KAFKA, ORDER_LIST,
};
use orders_router::{ready, NavigationProvider, Outlet, Router, TypedView};
use std::borrow::Cow;

pub const HOME: &str = "/";
pub const ORDERS: &str = "/orders";
pub const ORDER: &str = "/orders/:id";
pub const CREATE_ORDER: &str = "/create-order";
pub const ORDERS_FROM_KAFKA: &str = "/orders-from-kafka";

/// Every route as `(pattern, view id)`, in registration order. Paths that
/// match nothing fall back to the home page.
pub const ROUTES: [(&str, &str); 5] = [
    (HOME, HOME_PAGE),
    (ORDERS, ORDER_LIST),
    (ORDER, ORDER_DETAIL),
    (CREATE_ORDER, ORDER_FORM),
    (ORDERS_FROM_KAFKA, ORDER_KAFKA),
];

pub fn order(id: &str) -> String {
    format!("{ORDERS}/{id}")
}

/// Rewrites the `:` params of a table pattern to use `marker`.
pub fn with_marker(pattern: &'static str, marker: char) -> Cow<'static, str> {
    if marker == ':' {
        return Cow::Borrowed(pattern);
    }
    Cow::Owned(
        pattern
            .split('/')
            .map(|segment| match segment.strip_prefix(':') {
                Some(name) => format!("{marker}{name}"),
                None => segment.to_owned(),
            })
            .collect::<Vec<_>>()
            .join("/"),
    )
}

/// Registers the typed order views, in [`ROUTES`] order.
pub fn install<Nav, Out>(router: &Router<Nav, Out>)
where
    Nav: NavigationProvider,
    Out: Outlet<Node = OrderView>,
{
    let marker = router.options().param_marker;
    let pattern = |p: &'static str| with_marker(p, marker);
    router
        .add_route(pattern(HOME), TypedView::<HomePage>::new(), ready())
        .add_route(pattern(ORDERS), TypedView::<OrderList>::new(), ready())
        .add_route(pattern(ORDER), TypedView::<OrderDetail>::new(), ready())
        .add_route(
            pattern(CREATE_ORDER),
            TypedView::<OrderForm>::new(),
            ready(),
        )
        .add_route(
            pattern(ORDERS_FROM_KAFKA),
            TypedView::<OrderKafka>::new(),
            ready(),
        );
}
