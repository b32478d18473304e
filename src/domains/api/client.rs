//! Remote call adapter.
//!
//! [`RemoteApi`] is the seam between tools and the network: every tool holds
//! an `Arc<dyn RemoteApi>` and never sees reqwest. [`RcClient`] is the
//! production implementation; tests substitute a recording fake.

use async_trait::async_trait;
use reqwest::Url;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::error::{ApiError, ApiResult};
use super::request::RemoteRequest;

/// Executes one authenticated call against the remote API.
///
/// Implementations return the parsed payload unchanged on success and a
/// typed [`ApiError`] otherwise. They must not panic and must not retry.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    async fn call(&self, request: &RemoteRequest) -> ApiResult<Value>;
}

/// reqwest-backed client for the Recurse Center API.
#[derive(Clone)]
pub struct RcClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

/// Custom Debug implementation to keep the bearer token out of logs.
impl std::fmt::Debug for RcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RcClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl RcClient {
    /// Create a client for the given base URL and bearer token.
    pub fn new(base_url: &str, token: impl Into<String>) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::invalid_request(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if base_url.cannot_be_a_base() {
            return Err(ApiError::invalid_request(format!(
                "Base URL '{}' cannot carry a path",
                base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve the full URL of a request.
    ///
    /// Path segments are percent-encoded. For GET the parameters become the
    /// query string; other methods carry them in the body instead.
    pub fn build_url(&self, request: &RemoteRequest) -> ApiResult<Url> {
        request.path.check()?;
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| ApiError::invalid_request("Base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(request.path.segments());

        if request.method.uses_query() && !request.params.is_empty() {
            let query = serde_urlencoded::to_string(&request.params)
                .map_err(|e| ApiError::invalid_request(format!("Unencodable query: {}", e)))?;
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    async fn execute(&self, request: &RemoteRequest, url: Url) -> ApiResult<Value> {
        let mut builder = self
            .http
            .request(request.method.into(), url)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json");

        if !request.method.uses_query() {
            builder = builder.json(&request.params);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16(), body));
        }

        debug!("Response {} ({} bytes)", status, body.len());

        // 204 and friends
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl RemoteApi for RcClient {
    #[instrument(skip_all, fields(method = %request.method))]
    async fn call(&self, request: &RemoteRequest) -> ApiResult<Value> {
        let url = match self.build_url(request) {
            Ok(url) => url,
            Err(e) => {
                warn!("Could not build {} request: {}", request.method, e);
                return Err(e);
            }
        };

        info!("{} {}", request.method, url);

        let result = self.execute(request, url.clone()).await;
        if let Err(e) = &result {
            warn!(status = ?e.status(), "{} {} failed: {}", request.method, url, e);
        }
        result
    }
}


#[cfg(test)]
mod http_tests {
    use super::*;
    use crate::domains::api::{ApiPath, HttpMethod};
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn setup() -> (MockServer, RcClient) {
        let server = MockServer::start().await;
        let client = RcClient::new(&format!("{}/api/v1", server.uri()), "test-token").unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_get_sends_bearer_and_query() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/profiles"))
            .and(header("authorization", "Bearer test-token"))
            .and(query_param("query", "ada"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = RemoteRequest::get(ApiPath::new("profiles"));
        request.params = json!({ "query": "ada", "limit": 5 })
            .as_object()
            .cloned()
            .unwrap();

        let value = client.call(&request).await.unwrap();
        assert_eq!(value, json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn test_patch_sends_empty_object_body() {
        let (server, client) = setup().await;
        Mock::given(method("PATCH"))
            .and(path("/api/v1/hub_visits/7/2024-03-01"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "person_id": 7 })))
            .expect(1)
            .mount(&server)
            .await;

        let request = RemoteRequest::new(
            HttpMethod::Patch,
            ApiPath::new("hub_visits").segment(7).segment("2024-03-01"),
        );
        let value = client.call(&request).await.unwrap();
        assert_eq!(value["person_id"], 7);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let (server, client) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/hub_visits/7/2024-03-01"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let request = RemoteRequest::delete(ApiPath::new("hub_visits").segment(7).segment("2024-03-01"));
        assert_eq!(client.call(&request).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_status_errors_are_typed() {
        let (server, client) = setup().await;
        Mock::given(path("/api/v1/profiles/nobody"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&server)
            .await;
        Mock::given(path("/api/v1/profiles/me"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(path("/api/v1/batches"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let not_found = client
            .call(&RemoteRequest::get(ApiPath::new("profiles").segment("nobody")))
            .await
            .unwrap_err();
        assert!(matches!(not_found, ApiError::NotFound { .. }));

        let unauthorized = client
            .call(&RemoteRequest::get(ApiPath::new("profiles").segment("me")))
            .await
            .unwrap_err();
        assert_eq!(unauthorized.status(), Some(401));

        let server_error = client
            .call(&RemoteRequest::get(ApiPath::new("batches")))
            .await
            .unwrap_err();
        assert!(matches!(server_error, ApiError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        let (server, client) = setup().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/batches"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client
            .call(&RemoteRequest::get(ApiPath::new("batches")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = RcClient::new("http://127.0.0.1:1/api/v1", "t").unwrap();
        let err = client
            .call(&RemoteRequest::get(ApiPath::new("batches")))
            .await
            .unwrap_err();
        assert_eq!(err.status(), None);
    }
}
