//! Receiver state model and its update rules.
//!
//! [`ReceiverState`] is the adapter's whole view of one device. It is owned
//! by the per-device session and mutated only by the refresh cycle
//! ([`ReceiverState::apply_basic_status`], [`ReceiverState::apply_play_info`],
//! [`ReceiverState::nullify_media`]) and by the optimistic mute update after
//! a command. The abstract lifecycle state is derived, never stored: power
//! in standby always reads as [`PlayerState::Off`] no matter what playback
//! data is cached.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::ReceiverError;
use crate::play_info::PlayInfo;
use crate::source::Source;
use crate::status::BasicStatus;

/// Main-zone power flag as reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    On,
    #[default]
    Standby,
}

impl PowerState {
    pub fn from_device(text: &str) -> Self {
        if text == "On" {
            PowerState::On
        } else {
            PowerState::Standby
        }
    }

    pub fn as_device(&self) -> &'static str {
        match self {
            PowerState::On => "On",
            PowerState::Standby => "Standby",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, PowerState::On)
    }
}

/// Abstract lifecycle state exposed to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Off,
    Idle,
    Playing,
}

impl PlayerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::Off => "OFF",
            PlayerState::Idle => "IDLE",
            PlayerState::Playing => "PLAYING",
        }
    }
}

/// Content category of the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaContentType {
    /// Broadcast-like sources (net radio, tuner).
    Channel,
    Playlist,
}

/// Now-playing metadata for sources exposing a play-info subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaMetadata {
    pub artist: Option<String>,
    pub album: Option<String>,
    pub song: Option<String>,
    /// Tuner band/frequency string, e.g. "FM 8795.0 MHz".
    pub frequency: Option<String>,
}

impl MediaMetadata {
    pub fn clear(&mut self) {
        *self = MediaMetadata::default();
    }

    pub fn is_empty(&self) -> bool {
        self.artist.is_none()
            && self.album.is_none()
            && self.song.is_none()
            && self.frequency.is_none()
    }
}

/// Change notification produced by one refresh cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ReceiverEvent {
    StateChanged(PlayerState),
    VolumeChanged(f32),
    MuteChanged(bool),
    SourceChanged(Option<Source>),
    PositionChanged(Option<u32>),
    MetadataChanged(MediaMetadata),
}

/// Complete view of one receiver, refreshed in place.
#[derive(Debug, Clone, Default)]
pub struct ReceiverState {
    pub power: PowerState,

    /// Device volume divided by 100. Real devices report values such as 450
    /// (→ 4.5), outside the nominal [0, 1] fraction; stored unmodified.
    pub volume: f32,

    pub muted: bool,

    /// Resolved input source; `None` until the first successful refresh.
    pub source: Option<Source>,

    /// Device token of the current source with spaces replaced by
    /// underscores; the element name scoping per-source commands.
    pub command_scope: Option<String>,

    pub media: MediaMetadata,

    /// Elapsed playback seconds, for sources that report them.
    pub play_position: Option<u32>,

    /// Wall-clock instant `play_position` was read, for host extrapolation.
    pub position_updated_at: Option<DateTime<Utc>>,

    /// Both derived from the device's single `Play_Mode` flag.
    pub shuffle: Option<bool>,
    pub repeat: Option<bool>,

    pub(crate) media_active: bool,
    pub(crate) media_playing: bool,
}

impl ReceiverState {
    /// Derived lifecycle state. Power in standby overrides any cached
    /// playback signal.
    pub fn player_state(&self) -> PlayerState {
        match self.power {
            PowerState::Standby => PlayerState::Off,
            PowerState::On if self.media_playing => PlayerState::Playing,
            PowerState::On => PlayerState::Idle,
        }
    }

    /// True while the device reports an active playback signal
    /// (Play, Assert or Pause).
    pub fn media_active(&self) -> bool {
        self.media_active
    }

    /// Title shown to hosts: the song when known, else the tuner frequency.
    pub fn media_title(&self) -> Option<&str> {
        self.media
            .song
            .as_deref()
            .or(self.media.frequency.as_deref())
    }

    pub fn media_content_type(&self) -> MediaContentType {
        match self.source {
            Some(Source::NetRadio) | Some(Source::Tuner) => MediaContentType::Channel,
            _ => MediaContentType::Playlist,
        }
    }

    /// Applies a parsed main-zone status.
    ///
    /// The source token is resolved before anything is written, so an
    /// unrecognized token leaves the state untouched for the cycle. Volume
    /// is always taken from the device value, never carried over.
    pub fn apply_basic_status(&mut self, status: &BasicStatus) -> Result<(), ReceiverError> {
        let source = Source::from_device_token(&status.input)?;

        self.power = status.power;
        self.volume = status.volume;
        self.muted = status.muted;
        if self.source != Some(source) {
            debug!(
                "input changed to {} (scope {})",
                source.display_name(),
                source.command_scope()
            );
        }
        self.source = Some(source);
        self.command_scope = Some(status.input.replace(' ', "_"));
        Ok(())
    }

    /// Applies a parsed play-info document field by field.
    ///
    /// Metadata is replaced wholesale (the device resends the full set each
    /// cycle); position, shuffle and repeat only move when the document
    /// carried them, so a skipped field keeps its last known value.
    pub fn apply_play_info(&mut self, info: &PlayInfo) {
        if let Some(on) = info.shuffle {
            self.shuffle = Some(on);
        }
        if let Some(on) = info.repeat {
            self.repeat = Some(on);
        }
        if let Some(seconds) = info.play_time {
            self.play_position = Some(seconds);
            self.position_updated_at = Some(Utc::now());
        }
        self.media = info.meta.clone();
        if let Some(signal) = info.playback_signal.as_deref() {
            self.apply_playback_signal(signal);
        }
    }

    /// State-machine input: the text of `Playback_Info`, or of
    /// `Signal_Info/Tuned` for tuner sources.
    pub fn apply_playback_signal(&mut self, signal: &str) {
        match signal {
            "Play" | "Assert" => {
                self.media_playing = true;
                self.media_active = true;
            }
            "Pause" => {
                self.media_playing = false;
                self.media_active = true;
            }
            _ => {
                self.media_playing = false;
                self.media_active = false;
            }
        }
    }

    /// Clears all playback fields for sources without a play-info subtree.
    pub fn nullify_media(&mut self) {
        self.media.clear();
        self.play_position = None;
        self.position_updated_at = None;
        self.shuffle = None;
        self.repeat = None;
        self.media_active = false;
        self.media_playing = false;
    }
}
