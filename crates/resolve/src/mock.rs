//! In-memory transport for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::error::{ErrorKind, Result};
use crate::transport::{Response, Transport};

#[derive(Debug, Clone)]
enum Reply {
    Respond(Response),
    Fail(ErrorKind),
}

/// Serves canned responses per exact URL and remembers every URL requested.
///
/// URLs without a registered reply fail with [`ErrorKind::Network`], which
/// makes "everything is down" the default.
#[derive(Debug, Default)]
pub struct MockTransport {
    replies: RwLock<HashMap<String, Reply>>,
    requests: RwLock<Vec<String>>,
}

impl MockTransport {
    pub fn with_response(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.replies.get_mut().insert(url.into(), Reply::Respond(Response::new(status, body)));
        self
    }

    pub fn with_failure(mut self, url: impl Into<String>, kind: ErrorKind) -> Self {
        self.replies.get_mut().insert(url.into(), Reply::Fail(kind));
        self
    }

    /// Every URL requested so far, in order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.read().await.clone()
    }

    pub async fn was_requested(&self, url: &str) -> bool {
        self.requests.read().await.iter().any(|requested| requested == url)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<Response> {
        self.requests.write().await.push(url.to_string());
        match self.replies.read().await.get(url).cloned() {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(kind)) => exn::bail!(kind),
            None => exn::bail!(ErrorKind::Network(url.to_string())),
        }
    }
}
