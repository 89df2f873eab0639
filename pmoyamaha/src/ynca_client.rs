//! Synchronous HTTP transport for one receiver.
//!
//! One fixed control endpoint per device, one blocking POST per call, no
//! retries and no pooling beyond the agent default. Non-2xx responses are
//! logged but their body is still returned: the firmware occasionally
//! answers useful XML with an unhappy status, and callers must tolerate a
//! malformed or empty body anyway.

use std::time::Duration;

use tracing::{debug, error};
use ureq::Agent;

use pmoynca::{YncaRequestKind, build_request};

use crate::errors::ReceiverError;

const CONTROL_PATH: &str = "YamahaRemoteControl/ctrl";

#[derive(Debug, Clone)]
pub struct YncaClient {
    base_url: String,
    agent: Agent,
}

impl YncaClient {
    pub fn new(host: &str, timeout: Duration) -> Self {
        // Non-2xx must not become Error::StatusCode: the body has to stay
        // readable even then.
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        YncaClient {
            base_url: format!("http://{}/{}", host, CONTROL_PATH),
            agent: config.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Queries a status subtree.
    pub fn get(&self, body: &str) -> Result<String, ReceiverError> {
        self.send(YncaRequestKind::Get, body)
    }

    /// Changes device state. Fire-and-forget: the echo body is returned but
    /// callers generally ignore it.
    pub fn put(&self, body: &str) -> Result<String, ReceiverError> {
        self.send(YncaRequestKind::Put, body)
    }

    fn send(&self, kind: YncaRequestKind, body: &str) -> Result<String, ReceiverError> {
        let request = build_request(kind, body);
        debug!("YNC request to {}: {}", self.base_url, request);

        let mut response = self
            .agent
            .post(&self.base_url)
            .header("Content-Type", r#"text/xml; charset="utf-8""#)
            .send(&request)
            .map_err(|e| {
                ReceiverError::Transport(format!("POST {} failed: {}", self.base_url, e))
            })?;

        let status = response.status();

        // The firmware always talks UTF-8, whatever its headers claim.
        let text = response
            .body_mut()
            .with_config()
            .read_to_string()
            .map_err(|e| {
                ReceiverError::Transport(format!(
                    "failed to read response body from {}: {}",
                    self.base_url, e
                ))
            })?;

        if status.is_success() {
            debug!("YNC response ({}): {}", status, text);
        } else {
            error!(
                "YNC request to {} returned HTTP {}; keeping body anyway",
                self.base_url, status
            );
        }

        Ok(text)
    }
}
