//! Request executor for the Eagle local API.
//!
//! Every operation funnels through [`EagleClient::execute`]: build the
//! request for an endpoint, send it through the transport, then validate the
//! body against the success schema (2xx) or the error envelope (anything
//! else). The client holds no mutable state, so clones and concurrent calls
//! share nothing but the transport.

use super::endpoints::Endpoint;
use super::query::encode_query;
use super::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
use crate::error::ApiError;
use crate::schema::{self, ErrorEnvelope, SuccessSchema};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 41595;

static SHARED: OnceLock<EagleClient> = OnceLock::new();

/// Where the Eagle API lives. Fixed once a client is built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub host: String,
    pub port: u16,
    /// Per-request timeout. `None` waits for as long as the server takes.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
pub struct EagleClient {
    config: ClientConfig,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for EagleClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EagleClient")
            .field("config", &self.config)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl EagleClient {
    /// Create a client that talks HTTP through reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(config.timeout)
            .map_err(|source| ApiError::ClientSetup { source })?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let base_url = config.base_url();
        Self {
            config,
            base_url,
            transport,
        }
    }

    /// Process-wide client for the default configuration, created on first use.
    pub fn shared() -> Result<&'static EagleClient, ApiError> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }
        let client = EagleClient::new(ClientConfig::default())?;
        Ok(SHARED.get_or_init(|| client))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request for `endpoint`: GET parameters go into the query
    /// string, POST parameters into a JSON body.
    pub fn build_request<P: Serialize + ?Sized>(
        &self,
        endpoint: &Endpoint,
        params: &P,
    ) -> Result<HttpRequest, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint.path);
        let serialization_error = |message: String| ApiError::Serialization {
            endpoint: endpoint.path.to_string(),
            message,
        };

        match endpoint.method {
            HttpMethod::Get => Ok(HttpRequest {
                method: endpoint.method,
                url,
                query: encode_query(params).map_err(serialization_error)?,
                headers: Vec::new(),
                body: None,
            }),
            HttpMethod::Post => {
                let body =
                    serde_json::to_string(params).map_err(|e| serialization_error(e.to_string()))?;
                Ok(HttpRequest {
                    method: endpoint.method,
                    url,
                    query: Vec::new(),
                    headers: vec![("content-type".to_string(), "application/json".to_string())],
                    body: Some(body),
                })
            }
        }
    }

    /// Run one API call and resolve it to the validated success value.
    pub async fn execute<S, P>(&self, endpoint: Endpoint, params: &P) -> Result<S::Output, ApiError>
    where
        S: SuccessSchema,
        P: Serialize + ?Sized,
    {
        let request = self.build_request(&endpoint, params)?;
        log::debug!("{} {} query={:?}", request.method, request.url, request.query);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", endpoint.method, endpoint.path, e);
            ApiError::Transport {
                method: endpoint.method,
                endpoint: endpoint.path.to_string(),
                message: e.to_string(),
            }
        })?;
        log::debug!(
            "{} {} -> HTTP {}",
            endpoint.method,
            endpoint.path,
            response.status
        );

        interpret_response::<S>(&endpoint, &response)
    }
}

/// Classify a completed exchange and validate its body.
pub fn interpret_response<S: SuccessSchema>(
    endpoint: &Endpoint,
    response: &HttpResponse,
) -> Result<S::Output, ApiError> {
    if response.is_success() {
        return schema::validate::<S>(&response.body)
            .map(SuccessSchema::into_output)
            .map_err(|source| {
                log::warn!(
                    "{} {} returned an unexpected success body: {}",
                    endpoint.method,
                    endpoint.path,
                    source
                );
                ApiError::Validation {
                    method: endpoint.method,
                    endpoint: endpoint.path.to_string(),
                    status: response.status,
                    source,
                }
            });
    }

    let err = match schema::validate::<ErrorEnvelope>(&response.body) {
        Ok(body) => ApiError::Server {
            method: endpoint.method,
            endpoint: endpoint.path.to_string(),
            status: response.status,
            body,
        },
        Err(source) => ApiError::InvalidErrorBody {
            method: endpoint.method,
            endpoint: endpoint.path.to_string(),
            status: response.status,
            source,
        },
    };
    log::warn!("{}", err);
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::endpoints;
    use crate::api::models::{ItemListParams, MoveToTrashParams};
    use crate::api::testing::FakeTransport;
    use crate::api::transport::TransportError;
    use crate::schema::{Acknowledged, Success};

    fn client(transport: Arc<FakeTransport>) -> EagleClient {
        EagleClient::with_transport(ClientConfig::new("eagle.test", 41595), transport)
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), "http://localhost:41595");
        assert!(config.timeout.is_none());
        let config = config.with_timeout(Duration::from_secs(3));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_client_creation() {
        let client = EagleClient::new(ClientConfig::new("127.0.0.1", 8080));
        assert!(client.is_ok());
        if let Ok(client) = client {
            assert_eq!(client.base_url(), "http://127.0.0.1:8080");
            assert_eq!(client.config().port, 8080);
        }
    }

    #[test]
    fn test_shared_client_is_singleton() {
        let first = EagleClient::shared().expect("shared client");
        let second = EagleClient::shared().expect("shared client");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.base_url(), "http://localhost:41595");
    }

    #[test]
    fn test_build_get_request() {
        let client = client(FakeTransport::new(Vec::new()));
        let params = ItemListParams {
            limit: Some(10),
            tags: Some(vec!["a".to_string(), "b".to_string()]),
            ..Default::default()
        };
        let request = client
            .build_request(&endpoints::ITEM_LIST, &params)
            .expect("Failed to build request");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "http://eagle.test:41595/api/item/list");
        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("tags".to_string(), "a".to_string()),
                ("tags".to_string(), "b".to_string()),
            ]
        );
        assert!(request.body.is_none());
    }

    #[test]
    fn test_build_post_request() {
        let client = client(FakeTransport::new(Vec::new()));
        let params = MoveToTrashParams {
            item_ids: vec!["X".to_string()],
        };
        let request = client
            .build_request(&endpoints::ITEM_MOVE_TO_TRASH, &params)
            .expect("Failed to build request");

        assert_eq!(request.method, HttpMethod::Post);
        assert!(request.query.is_empty());
        assert_eq!(request.body.as_deref(), Some(r#"{"itemIds":["X"]}"#));
        assert_eq!(
            request.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[tokio::test]
    async fn test_execute_success() {
        let transport = FakeTransport::replying(200, r#"{"status":"success","data":["/a"]}"#);
        let history = client(transport.clone())
            .execute::<Success<Vec<String>>, _>(endpoints::LIBRARY_HISTORY, &())
            .await
            .expect("execute failed");
        assert_eq!(history, vec!["/a".to_string()]);
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_execute_acknowledgement() {
        let transport = FakeTransport::replying(200, r#"{"status":"success"}"#);
        let result = client(transport)
            .execute::<Acknowledged, _>(
                endpoints::ITEM_MOVE_TO_TRASH,
                &MoveToTrashParams::default(),
            )
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_execute_transport_failure() {
        let transport = FakeTransport::new(vec![Err(TransportError("connection refused".into()))]);
        let err = client(transport)
            .execute::<Acknowledged, _>(endpoints::LIBRARY_HISTORY, &())
            .await
            .unwrap_err();
        match err {
            ApiError::Transport {
                method,
                endpoint,
                message,
            } => {
                assert_eq!(method, HttpMethod::Get);
                assert_eq!(endpoint, "/api/library/history");
                assert_eq!(message, "connection refused");
            }
            other => panic!("Expected Transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_structured_error() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: r#"{"status":"error","code":404,"message":"not found"}"#.to_string(),
        };
        let err =
            interpret_response::<Acknowledged>(&endpoints::ITEM_INFO, &response).unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.message().as_deref(), Some("404: not found"));
        assert!(matches!(
            err,
            ApiError::Server {
                method: HttpMethod::Get,
                ..
            }
        ));
    }

    #[test]
    fn test_interpret_unstructured_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: r#"{"status":"error","data":"boom"}"#.to_string(),
        };
        let err = interpret_response::<Acknowledged>(&endpoints::FOLDER_CREATE, &response)
            .unwrap_err();
        assert_eq!(err.message().as_deref(), Some("boom"));
        assert_eq!(err.endpoint(), Some("/api/folder/create"));
    }

    #[test]
    fn test_interpret_unreadable_error_body() {
        let response = HttpResponse {
            status: 502,
            headers: Vec::new(),
            body: "Bad Gateway".to_string(),
        };
        let err =
            interpret_response::<Acknowledged>(&endpoints::ITEM_LIST, &response).unwrap_err();
        assert!(matches!(err, ApiError::InvalidErrorBody { status: 502, .. }));

        let response = HttpResponse {
            status: 400,
            headers: Vec::new(),
            body: r#"{"status":"success"}"#.to_string(),
        };
        let err =
            interpret_response::<Acknowledged>(&endpoints::ITEM_LIST, &response).unwrap_err();
        assert!(matches!(err, ApiError::InvalidErrorBody { status: 400, .. }));
    }

    #[test]
    fn test_interpret_invalid_success_body() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"status":"success","data":[1]}"#.to_string(),
        };
        let err = interpret_response::<Success<Vec<String>>>(&endpoints::LIBRARY_HISTORY, &response)
            .unwrap_err();
        match err {
            ApiError::Validation {
                endpoint, status, ..
            } => {
                assert_eq!(endpoint, "/api/library/history");
                assert_eq!(status, 200);
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_interpret_error_envelope_with_success_status_code() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"status":"error","data":"boom"}"#.to_string(),
        };
        let err =
            interpret_response::<Acknowledged>(&endpoints::ITEM_UPDATE, &response).unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
    }
}
