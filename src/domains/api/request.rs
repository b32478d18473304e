//! Outbound request description.

use std::fmt;

use rmcp::model::JsonObject;
use serde::Serialize;

use super::error::{ApiError, ApiResult};

/// HTTP methods used against the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether parameters travel in the query string rather than the body.
    pub fn uses_query(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A path relative to the API base URL, kept as raw segments.
///
/// Segments are percent-encoded only when the path is joined onto the base
/// URL, so caller-supplied identifiers such as e-mail addresses can be pushed
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    /// Start a path with its first (static) segment.
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            segments: vec![first.into()],
        }
    }

    /// Append one segment. A `/` inside the value stays part of the segment.
    pub fn segment(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Reject segments a URL cannot carry as data.
    ///
    /// Empty, `.` and `..` segments are collapsed by URL normalization, even
    /// when percent-encoded, which would address a different endpoint.
    pub fn check(&self) -> ApiResult<()> {
        match self
            .segments
            .iter()
            .find(|s| s.is_empty() || s.as_str() == "." || s.as_str() == "..")
        {
            Some(segment) => Err(ApiError::invalid_request(format!(
                "Path segment '{}' is not allowed",
                segment
            ))),
            None => Ok(()),
        }
    }
}

/// One call to the remote API: method, path and parameter bag.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: HttpMethod,
    pub path: ApiPath,
    pub params: JsonObject,
}

impl RemoteRequest {
    pub fn new(method: HttpMethod, path: ApiPath) -> Self {
        Self {
            method,
            path,
            params: JsonObject::new(),
        }
    }

    pub fn get(path: ApiPath) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn patch(path: ApiPath) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: ApiPath) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Attach parameters serialized from a struct.
    ///
    /// The value must serialize to a JSON object. Null members are dropped so
    /// that optional parameters the caller did not supply never reach the API.
    pub fn with_params<T: Serialize>(mut self, params: &T) -> ApiResult<Self> {
        let value = serde_json::to_value(params)
            .map_err(|e| ApiError::invalid_request(format!("Unserializable parameters: {}", e)))?;

        match value {
            serde_json::Value::Object(map) => {
                self.params = map.into_iter().filter(|(_, v)| !v.is_null()).collect();
                Ok(self)
            }
            serde_json::Value::Null => Ok(self),
            other => Err(ApiError::invalid_request(format!(
                "Parameters must be an object, got {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        query: Option<String>,
        limit: Option<u32>,
    }

    #[test]
    fn test_path_keeps_raw_segments() {
        let path = ApiPath::new("hub_visits").segment(7).segment("2024-05-01").segment("notes");
        assert_eq!(path.segments(), &["hub_visits", "7", "2024-05-01", "notes"]);
    }

    #[test]
    fn test_check_rejects_dot_and_empty_segments() {
        for bad in ["", ".", ".."] {
            let path = ApiPath::new("profiles").segment(bad);
            assert!(matches!(path.check(), Err(ApiError::InvalidRequest(_))), "{bad:?}");
        }
        assert!(ApiPath::new("profiles").segment("...").check().is_ok());
        assert!(ApiPath::new("profiles").segment("../me").check().is_ok());
        assert!(ApiPath::new("profiles").segment("a.b").check().is_ok());
    }

    #[test]
    fn test_with_params_drops_nulls() {
        let request = RemoteRequest::get(ApiPath::new("locations"))
            .with_params(&Sample {
                query: Some("nyc".to_string()),
                limit: None,
            })
            .unwrap();
        assert_eq!(serde_json::Value::Object(request.params), json!({ "query": "nyc" }));
    }

    #[test]
    fn test_with_params_rejects_non_object() {
        let result = RemoteRequest::get(ApiPath::new("x")).with_params(&vec![1, 2]);
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[test]
    fn test_method_placement() {
        assert!(HttpMethod::Get.uses_query());
        assert!(!HttpMethod::Patch.uses_query());
        assert!(!HttpMethod::Delete.uses_query());
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
    }
}
