//! Per-request options for the gateway.
//!
//! A `FetchOptions` value is the request descriptor: method, query
//! parameters, header overrides, an optional JSON body, and caching hints.
//! Descriptors are ephemeral; one is built per call and consumed by it.

use reqwest::Method;

/// A scalar query-parameter value.
///
/// `Absent` values (and empty strings) are omitted from the final URL
/// entirely; everything else is stringified.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A string value. Empty strings are treated as absent.
    Str(String),
    /// A signed integer value.
    Int(i64),
    /// An unsigned integer value.
    UInt(u64),
    /// A boolean value, rendered as `true`/`false`.
    Bool(bool),
    /// No value; the parameter is dropped from the URL.
    Absent,
}

impl QueryValue {
    /// Renders the value for the URL, or `None` if it should be omitted.
    pub fn render(&self) -> Option<String> {
        match self {
            QueryValue::Str(s) if s.is_empty() => None,
            QueryValue::Str(s) => Some(s.clone()),
            QueryValue::Int(n) => Some(n.to_string()),
            QueryValue::UInt(n) => Some(n.to_string()),
            QueryValue::Bool(b) => Some(b.to_string()),
            QueryValue::Absent => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value as i64)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::UInt(value as u64)
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        QueryValue::UInt(value)
    }
}

impl From<usize> for QueryValue {
    fn from(value: usize) -> Self {
        QueryValue::UInt(value as u64)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => QueryValue::Absent,
        }
    }
}

/// Caching hints attached to a request.
///
/// The gateway itself performs no caching; these hints describe how long a
/// fetched result may be reused and which invalidation tags apply, for a
/// cache layered on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheHints {
    /// Freshness window in seconds.
    pub max_age: Option<u64>,
    /// Invalidation tags.
    pub tags: Vec<String>,
}

/// Options for a single gateway call.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// HTTP method. Defaults to GET.
    pub method: Method,

    /// Query parameters, appended to the URL in insertion order.
    ///
    /// Insertion order is preserved so the same logical call always builds
    /// the same URL string.
    pub query: Vec<(String, QueryValue)>,

    /// Header overrides. These replace the gateway defaults on conflict.
    pub headers: Vec<(String, String)>,

    /// Optional JSON request body.
    pub body: Option<serde_json::Value>,

    /// Optional caching hints for a layer above the gateway.
    pub cache: Option<CacheHints>,
}

impl FetchOptions {
    /// Creates an empty descriptor: GET, no parameters, no hints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends a query parameter.
    ///
    /// Accepts any scalar or `Option` of a scalar; absent values and empty
    /// strings are dropped when the URL is built.
    pub fn query(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.query.push((key.to_string(), value.into()));
        self
    }

    /// Adds a header, overriding the gateway default of the same name.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets a JSON request body.
    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Marks the result as reusable for `seconds`.
    pub fn revalidate(mut self, seconds: u64) -> Self {
        self.cache.get_or_insert_with(CacheHints::default).max_age = Some(seconds);
        self
    }

    /// Adds a cache invalidation tag.
    pub fn tag(mut self, tag: &str) -> Self {
        self.cache
            .get_or_insert_with(CacheHints::default)
            .tags
            .push(tag.to_string());
        self
    }
}
