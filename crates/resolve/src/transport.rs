//! The HTTP seam between the resolver and the outside world.

use async_trait::async_trait;
use exn::ResultExt;
use fxscan_config::HttpConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub type TransportHandle = Arc<dyn Transport + Send + Sync>;

/// A response that arrived, whatever its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}
impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs bounded-time GET requests.
///
/// Implementations return `Ok` for any response that arrived (including
/// 4xx and 5xx) and reserve `Err` for requests that produced no usable
/// response at all: timeouts, connection failures, unreadable bodies.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Response>;
}

/// [`Transport`] backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}
impl HttpTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .or_raise(|| ErrorKind::Client)?;
        Ok(Self { client })
    }

    pub fn from_config(config: &HttpConfig) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(level = "trace", skip(self))]
    async fn get(&self, url: &str) -> Result<Response> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                let kind = classify(&err, url);
                return Err(err).or_raise(|| kind);
            },
        };
        let status = response.status().as_u16();
        let body = response.text().await.or_raise(|| ErrorKind::Body(url.to_string()))?;
        tracing::trace!(status, body_size = body.len(), "Response received");
        Ok(Response { status, body })
    }
}

fn classify(err: &reqwest::Error, url: &str) -> ErrorKind {
    if err.is_timeout() {
        ErrorKind::Timeout(url.to_string())
    } else if err.is_builder() {
        ErrorKind::InvalidUrl(url.to_string())
    } else {
        ErrorKind::Network(url.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(301, false)]
    #[case(404, false)]
    #[case(503, false)]
    fn test_is_success(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(Response::new(status, "").is_success(), expected);
    }

    #[test]
    fn test_client_from_default_config() {
        assert!(HttpTransport::from_config(&HttpConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_an_error() {
        let transport = HttpTransport::from_config(&HttpConfig::default()).unwrap();
        let err = transport.get("not a url").await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_silent_server_is_a_timeout() {
        // Accepts connections and holds them open without ever answering.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let transport = HttpTransport::new(Duration::from_millis(200), "fxscan-test").unwrap();
        let url = format!("http://{addr}/v1/tokens/30661");
        let err = transport.get(&url).await.unwrap_err();
        assert_eq!(*err, ErrorKind::Timeout(url));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_refused_connection_is_a_network_error() {
        let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
        // The listener is dropped above, so nothing is bound to `addr` any more.
        let transport = HttpTransport::new(Duration::from_secs(2), "fxscan-test").unwrap();
        let url = format!("http://{addr}/generative/30661");
        let err = transport.get(&url).await.unwrap_err();
        assert_eq!(*err, ErrorKind::Network(url));
    }
}
