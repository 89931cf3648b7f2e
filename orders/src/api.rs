//! The REST contract the order views talk to.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Represents the HTTP method of an [`Endpoint`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call of the orders API. Ids are inserted into paths verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListOrders,
    GetOrder(String),
    CreateOrder,
    UpdateOrder(String),
    UpdateStatus(String),
    DeleteOrder(String),
    SearchOrders,
    /// Pulls a single order off the message queue.
    GetFromKafka,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListOrders
            | Endpoint::GetOrder(_)
            | Endpoint::GetFromKafka => Method::Get,
            Endpoint::CreateOrder | Endpoint::SearchOrders => Method::Post,
            Endpoint::UpdateOrder(_) => Method::Put,
            Endpoint::UpdateStatus(_) => Method::Patch,
            Endpoint::DeleteOrder(_) => Method::Delete,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ListOrders | Endpoint::CreateOrder => "/orders".into(),
            Endpoint::GetOrder(id)
            | Endpoint::UpdateOrder(id)
            | Endpoint::DeleteOrder(id) => format!("/orders/{id}"),
            Endpoint::UpdateStatus(id) => format!("/orders/{id}/status"),
            Endpoint::SearchOrders => "/orders/search".into(),
            Endpoint::GetFromKafka => "/orders/getFromKafka".into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// The body of a non-2xx response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub message: String,
    /// Per-field messages for rejected input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<BTreeMap<String, String>>,
}

impl ApiError {
    /// Decodes an error response. Bodies that are not a structured error
    /// become the message themselves, or a generic message if empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiError>(body) {
            Ok(error) => error,
            Err(_) => {
                let body = body.trim();
                ApiError {
                    message: if body.is_empty() {
                        format!("request failed with status {status}")
                    } else {
                        body.to_owned()
                    },
                    validation_errors: None,
                }
            }
        }
    }

    /// The validation message for `field`, if the server sent one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.validation_errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(String::as_str)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
