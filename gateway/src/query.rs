//! Request values for the table REST API.
//!
//! DESIGN
//! ======
//! Builders here perform no I/O and no URL encoding: they produce a
//! [`RestRequest`] whose query pairs the transport encodes. Filters use the
//! store's `column=op.value` convention (`id=eq.42`), ordering uses
//! `order=column.asc|desc`, and single-row reads ask for an object body via
//! the `Accept` header.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::fmt::Display;

use serde_json::Value;

use crate::config::GatewayConfig;

pub const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";
pub const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Transport-neutral HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RestRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), query: Vec::new(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// First header with `name`, compared case-insensitively.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// First query value for `key`.
    #[must_use]
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

// =============================================================================
// READS
// =============================================================================

/// `GET /rest/v1/{table}` with a column list, equality filters, ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    columns: String,
    filters: Vec<(String, String)>,
    order: Option<(String, Direction)>,
    single: bool,
}

impl TableQuery {
    #[must_use]
    pub fn select(table: impl Into<String>, columns: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: columns.into(),
            filters: Vec::new(),
            order: None,
            single: false,
        }
    }

    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Display) -> Self {
        self.filters.push((column.into(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    /// Ask for exactly one row as a JSON object instead of an array.
    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    #[must_use]
    pub fn into_request(self, config: &GatewayConfig) -> RestRequest {
        let mut request = RestRequest::new(Method::Get, config.rest_url(&self.table)).query("select", self.columns);
        for (column, filter) in self.filters {
            request = request.query(column, filter);
        }
        if let Some((column, direction)) = self.order {
            request = request.query("order", format!("{column}.{}", direction.as_str()));
        }
        if self.single {
            request = request.header("Accept", SINGLE_OBJECT_ACCEPT);
        }
        request
    }
}

// =============================================================================
// WRITES
// =============================================================================

/// Insert, update, or delete against one table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableWrite {
    method: Method,
    table: String,
    body: Option<Value>,
    filters: Vec<(String, String)>,
}

impl TableWrite {
    /// `POST` a JSON array of rows.
    #[must_use]
    pub fn insert(table: impl Into<String>, rows: Value) -> Self {
        let rows = match rows {
            Value::Array(_) => rows,
            row => Value::Array(vec![row]),
        };
        Self { method: Method::Post, table: table.into(), body: Some(rows), filters: Vec::new() }
    }

    /// `PATCH` the matching rows with `patch`.
    #[must_use]
    pub fn update(table: impl Into<String>, patch: Value) -> Self {
        Self { method: Method::Patch, table: table.into(), body: Some(patch), filters: Vec::new() }
    }

    /// `DELETE` the matching rows.
    #[must_use]
    pub fn delete(table: impl Into<String>) -> Self {
        Self { method: Method::Delete, table: table.into(), body: None, filters: Vec::new() }
    }

    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Display) -> Self {
        self.filters.push((column.into(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn into_request(self, config: &GatewayConfig) -> RestRequest {
        let mut request = RestRequest::new(self.method, config.rest_url(&self.table));
        for (column, filter) in self.filters {
            request = request.query(column, filter);
        }
        if self.method != Method::Delete {
            request = request.header("Prefer", RETURN_REPRESENTATION);
        }
        if let Some(body) = self.body {
            request = request.json(body);
        }
        request
    }
}
