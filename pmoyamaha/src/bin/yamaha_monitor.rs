//! Minimal polling host for one receiver.
//!
//! Usage:
//!   yamaha-monitor <config.yaml>
//!   PMOYAMAHA_HOST=192.168.1.40 yamaha-monitor
//!
//! Refreshes the receiver on a fixed interval and logs every state change.
//! This is the scheduling/serialization layer the library itself does not
//! provide.

use std::{env, fs, thread};

use anyhow::{Context, Result, bail};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pmoyamaha::{ReceiverConfig, YamahaReceiver};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let mut receiver = YamahaReceiver::from_config(&config);
    info!(
        "monitoring {} at {} every {:?}",
        receiver.name(),
        receiver.host(),
        config.poll_interval()
    );

    loop {
        match receiver.refresh() {
            Ok(events) => {
                for event in events {
                    info!("{} changed: {:?}", receiver.name(), event);
                }
            }
            Err(err) => warn!("refresh failed, keeping previous state: {}", err),
        }
        thread::sleep(config.poll_interval());
    }
}

fn load_config() -> Result<ReceiverConfig> {
    if let Some(path) = env::args().nth(1) {
        let text =
            fs::read_to_string(&path).with_context(|| format!("cannot read config {path}"))?;
        return ReceiverConfig::from_yaml(&text).context("invalid receiver configuration");
    }

    match env::var("PMOYAMAHA_HOST") {
        Ok(host) if !host.trim().is_empty() => Ok(ReceiverConfig::new(&host)),
        _ => bail!("usage: yamaha-monitor <config.yaml> (or set PMOYAMAHA_HOST)"),
    }
}
