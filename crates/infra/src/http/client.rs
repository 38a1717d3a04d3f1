use std::time::Duration;

use contentplan_domain::ContentPlanError;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

const USER_AGENT: &str = concat!("contentplan/", env!("CARGO_PKG_VERSION"));

/// Thin reqwest wrapper with a request timeout.
///
/// Every request is sent exactly once: a failed prompt request falls back
/// to template prompts instead of being retried.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start a builder with the default timeout and user agent.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Client with default settings.
    pub fn new() -> Result<Self, ContentPlanError> {
        Self::builder().build()
    }

    /// Request builder bound to the underlying client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute `builder` once. Any status is returned as a response;
    /// transport failures become domain errors.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, ContentPlanError> {
        let request = builder.build().map_err(|err| ContentPlanError::from(InfraError::from(err)))?;

        let method = request.method().clone();
        let url = redact_query(request.url());
        debug!(%method, url = %url, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, url = %url, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, url = %url, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30) }
    }
}

impl HttpClientBuilder {
    /// Whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpClient, ContentPlanError> {
        let client = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ContentPlanError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}

/// URL for logging with query values masked (the prompt service takes its
/// API key as a query parameter).
fn redact_query(url: &reqwest::Url) -> String {
    let mut redacted = url.clone();
    if url.query().is_some() {
        let pairs: Vec<(String, String)> =
            url.query_pairs().map(|(key, _)| (key.into_owned(), "***".to_string())).collect();
        redacted.query_pairs_mut().clear().extend_pairs(pairs);
    }
    redacted.to_string()
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn default_client_makes_a_single_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.send(client.request(Method::POST, server.uri())).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn client_errors_are_returned_as_responses() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().unwrap();
        let response = client.send(client.request(Method::GET, server.uri())).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new().unwrap();
        let result = client.send(client.request(Method::GET, format!("http://{addr}"))).await;
        assert!(matches!(result, Err(ContentPlanError::Network(_))));
    }

    #[test]
    fn query_values_are_masked_for_logging() {
        let url = reqwest::Url::parse("https://example.test/v1/models/m:generate?key=secret").unwrap();
        let logged = redact_query(&url);
        assert!(!logged.contains("secret"));
        assert!(logged.contains("key=***") || logged.contains("key=%2A%2A%2A"));
    }
}
