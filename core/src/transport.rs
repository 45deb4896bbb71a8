//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! The synchronizer suspends exactly once per call, at `Transport::execute`.
//! Status interpretation stays in `ItemsClient`, so a transport only fails
//! when no response arrived at all.

use async_trait::async_trait;

use crate::error::RequestFailure;
use crate::http::{HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestFailure>;
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use async_trait::async_trait;

    use super::Transport;
    use crate::error::RequestFailure;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// `ureq` agent driven from tokio's blocking pool.
    ///
    /// 4xx/5xx responses come back as data rather than `Err`.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl Transport for UreqTransport {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestFailure> {
            tracing::debug!(method = request.method.as_str(), url = %request.url, "executing request");
            let agent = self.agent.clone();
            tokio::task::spawn_blocking(move || execute_blocking(&agent, request))
                .await
                .map_err(|e| RequestFailure::Transport(e.to_string()))?
        }
    }

    fn execute_blocking(
        agent: &ureq::Agent,
        request: HttpRequest,
    ) -> Result<HttpResponse, RequestFailure> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => {
                let mut builder = agent.get(&url);
                for (key, value) in &headers {
                    builder = builder.header(key, value);
                }
                builder.call()
            }
            HttpMethod::Delete => {
                let mut builder = agent.delete(&url);
                for (key, value) in &headers {
                    builder = builder.header(key, value);
                }
                builder.call()
            }
            HttpMethod::Post => {
                let mut builder = agent.post(&url);
                for (key, value) in &headers {
                    builder = builder.header(key, value);
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };
        let mut response = result.map_err(|e| RequestFailure::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RequestFailure::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
