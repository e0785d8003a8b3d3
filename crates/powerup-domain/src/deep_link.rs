//! Deep-link construction for the IDE protocol handlers.
//!
//! A link has the shape
//! `<protocol><controller>[/<resource_id>][/<action>][?1=1&key=value&...]`.
//! Only query values are percent-encoded; every other segment is a fixed
//! identifier owned by this crate.

use serde::Serialize;

/// Leading no-op pair the desktop parser expects before the real parameters
const QUERY_MARKER: &str = "?1=1&";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParam {
    pub key: &'static str,
    pub value: String,
}

/// Logical target of a link inside the desktop application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    pub controller: &'static str,
    pub action: Option<&'static str>,
    pub resource_id: Option<String>,
    pub query_params: Vec<QueryParam>,
}

impl Route {
    pub fn new(controller: &'static str) -> Self {
        Self {
            controller,
            ..Default::default()
        }
    }

    pub fn with_action(mut self, action: &'static str) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    /// Append a query parameter. Insertion order is kept in the output.
    pub fn with_param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query_params.push(QueryParam {
            key,
            value: value.into(),
        });
        self
    }

    pub fn with_params(mut self, params: impl IntoIterator<Item = QueryParam>) -> Self {
        self.query_params.extend(params);
        self
    }
}

/// Render `route` against an IDE protocol prefix.
///
/// Callers guarantee that `protocol` and `route.controller` are non-empty.
pub fn build(protocol: &str, route: &Route) -> String {
    let mut link = String::with_capacity(protocol.len() + route.controller.len() + 64);
    link.push_str(protocol);
    link.push_str(route.controller);

    if let Some(resource_id) = &route.resource_id {
        link.push('/');
        link.push_str(resource_id);
    }

    if let Some(action) = route.action {
        link.push('/');
        link.push_str(action);
    }

    if !route.query_params.is_empty() {
        link.push_str(QUERY_MARKER);
        let query = route
            .query_params
            .iter()
            .map(|param| format!("{}={}", param.key, urlencoding::encode(&param.value)))
            .collect::<Vec<_>>()
            .join("&");
        link.push_str(&query);
    }

    link
}
