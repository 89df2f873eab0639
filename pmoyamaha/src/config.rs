//! Receiver configuration.
//!
//! The only required input is the device host; everything else has the
//! defaults the firmware is comfortable with. Loadable from a YAML mapping:
//!
//! ```yaml
//! name: Living room amp
//! host: 192.168.1.40
//! poll_interval_secs: 5
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::errors::ReceiverError;

const DEFAULT_NAME: &str = "Yamaha R-N301";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReceiverConfig {
    #[serde(default = "default_name")]
    pub name: String,

    /// Device hostname or IP address.
    pub host: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

impl ReceiverConfig {
    pub fn new(host: &str) -> Self {
        ReceiverConfig {
            name: default_name(),
            host: host.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, ReceiverError> {
        let config: ReceiverConfig =
            serde_yaml::from_str(text).map_err(|e| ReceiverError::Config(e.to_string()))?;
        if config.host.trim().is_empty() {
            return Err(ReceiverError::Config("host must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
