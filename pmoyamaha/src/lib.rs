//! # pmoyamaha — control adapter for Yamaha YNC network receivers
//!
//! Polls and commands a Yamaha network receiver (R-N301 firmware dialect)
//! over HTTP/XML and exposes its state through a generic media-player
//! surface. Higher layers interact with one [`YamahaReceiver`] per device;
//! the session owns the [`ReceiverState`] and translates between the
//! device's irregular status model and the abstract
//! Off / Idle / Playing lifecycle.
//!
//! The adapter is synchronous and single-threaded: each refresh or command
//! is one blocking HTTP round trip bounded by [`DEFAULT_HTTP_TIMEOUT`].
//! Scheduling the periodic refresh is the host's job (see the
//! `yamaha-monitor` binary for a minimal host).

pub mod commands;
pub mod config;
pub mod errors;
pub mod model;
pub mod play_info;
pub mod receiver;
pub mod source;
pub mod status;
pub mod ynca_client;

use std::time::Duration;

pub use config::ReceiverConfig;
pub use errors::ReceiverError;
pub use model::{
    MediaContentType, MediaMetadata, PlayerState, PowerState, ReceiverEvent, ReceiverState,
};
pub use play_info::PlayInfo;
pub use receiver::{YamahaReceiver, diff_events};
pub use source::{FeatureSet, Source};
pub use status::BasicStatus;
pub use ynca_client::YncaClient;

/// Bound on every HTTP round trip to the receiver.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);
