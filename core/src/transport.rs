//! Executes plain-data requests over the network.
//!
//! `Transport` is the single I/O seam of the crate. `UreqTransport` is the
//! blocking implementation; anything else (an async runtime, a test double,
//! a foreign host) only needs to turn an `HttpRequest` into an
//! `HttpResponse`.

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport {
    /// Perform one round trip. Non-2xx statuses are a successful round trip
    /// and must be returned as data, not as `Err`.
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use super::Transport;
    use crate::error::ApiError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a shared `ureq::Agent`.
    #[derive(Clone)]
    pub struct UreqTransport {
        agent: ureq::Agent,
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl UreqTransport {
        pub fn new() -> Self {
            // 4xx/5xx come back as responses so the client can surface them.
            let agent = ureq::Agent::config_builder()
                .http_status_as_error(false)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Transport for UreqTransport {
        fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
            let mut response = match (req.method, req.body) {
                (HttpMethod::Get, _) => self.agent.get(&req.path).call(),
                (HttpMethod::Delete, _) => self.agent.delete(&req.path).call(),
                (HttpMethod::Post, Some(body)) => self
                    .agent
                    .post(&req.path)
                    .content_type("application/json")
                    .send(body.as_bytes()),
                (HttpMethod::Post, None) => self.agent.post(&req.path).send_empty(),
                (HttpMethod::Put, Some(body)) => self
                    .agent
                    .put(&req.path)
                    .content_type("application/json")
                    .send(body.as_bytes()),
                (HttpMethod::Put, None) => self.agent.put(&req.path).send_empty(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;

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
            let body = if status == 204 {
                String::new()
            } else {
                response
                    .body_mut()
                    .read_to_string()
                    .map_err(|e| ApiError::Transport(e.to_string()))?
            };

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
