//! Typed props for each order view.
//!
//! Props are filled by name from route params and navigation state; the
//! state keys keep the camelCase names the rest of the front end uses.

use orders_router::{IntoParam, Params, ParamsError, ParamsMap, RouteView};

pub const HOME_PAGE: &str = "home-page";
pub const ORDER_LIST: &str = "order-list";
pub const ORDER_DETAIL: &str = "order-detail";
pub const ORDER_FORM: &str = "order-form";
pub const ORDER_KAFKA: &str = "order-kafka";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetailProps {
    pub id: String,
    /// Set by the list when it links to a row it wants emphasized.
    pub highlight_row: Option<bool>,
}

impl Params for OrderDetailProps {
    fn from_map(map: &ParamsMap) -> Result<Self, ParamsError> {
        Ok(Self {
            id: String::into_param(map.get_str("id"), "id")?,
            highlight_row: Option::<bool>::into_param(
                map.get_str("highlightRow"),
                "highlightRow",
            )?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomePage;

impl RouteView for HomePage {
    const VIEW_ID: &'static str = HOME_PAGE;
    type Props = ();

    fn new(_props: Self::Props) -> Self {
        Self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderList;

impl RouteView for OrderList {
    const VIEW_ID: &'static str = ORDER_LIST;
    type Props = ();

    fn new(_props: Self::Props) -> Self {
        Self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetail {
    pub props: OrderDetailProps,
}

impl RouteView for OrderDetail {
    const VIEW_ID: &'static str = ORDER_DETAIL;
    type Props = OrderDetailProps;

    fn new(props: Self::Props) -> Self {
        Self { props }
    }
}

/// The create-order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderForm;

impl RouteView for OrderForm {
    const VIEW_ID: &'static str = ORDER_FORM;
    type Props = ();

    fn new(_props: Self::Props) -> Self {
        Self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderKafka;

impl RouteView for OrderKafka {
    const VIEW_ID: &'static str = ORDER_KAFKA;
    type Props = ();

    fn new(_props: Self::Props) -> Self {
        Self
    }
}

/// Any order view, as mounted into the outlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderView {
    Home(HomePage),
    List(OrderList),
    Detail(OrderDetail),
    Form(OrderForm),
    Kafka(OrderKafka),
}

impl OrderView {
    pub fn view_id(&self) -> &'static str {
        match self {
            OrderView::Home(_) => HOME_PAGE,
            OrderView::List(_) => ORDER_LIST,
            OrderView::Detail(_) => ORDER_DETAIL,
            OrderView::Form(_) => ORDER_FORM,
            OrderView::Kafka(_) => ORDER_KAFKA,
        }
    }
}

impl From<HomePage> for OrderView {
    fn from(view: HomePage) -> Self {
        OrderView::Home(view)
    }
}

impl From<OrderList> for OrderView {
    fn from(view: OrderList) -> Self {
        OrderView::List(view)
    }
}

impl From<OrderDetail> for OrderView {
    fn from(view: OrderDetail) -> Self {
        OrderView::Detail(view)
    }
}

impl From<OrderForm> for OrderView {
    fn from(view: OrderForm) -> Self {
        OrderView::Form(view)
    }
}

impl From<OrderKafka> for OrderView {
    fn from(view: OrderKafka) -> Self {
        OrderView::Kafka(view)
    }
}
