//! Main-zone input sources and their capability table.
//!
//! Everything source-dependent lives in one static table: the display name
//! shown to hosts, the device-native token, the play-info request scope for
//! the sources that expose now-playing metadata, and the feature profile.
//! Command scoping is a textual transform of the device token (spaces to
//! underscores), so it stays defined even for sources without a play-info
//! entry.

use crate::errors::ReceiverError;

/// Input sources of the receiver main zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    AirPlay,
    Optical,
    Cd,
    Spotify,
    Line1,
    Line2,
    Line3,
    NetRadio,
    Server,
    Tuner,
}

/// Host-facing feature set for one source.
///
/// Every source supports power, volume, mute, source selection and the
/// shuffle toggle; only the network sources with a real transport also
/// accept play/pause/stop/skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureSet {
    pub power: bool,
    pub volume: bool,
    pub mute: bool,
    pub select_source: bool,
    pub shuffle: bool,
    pub transport_control: bool,
}

impl FeatureSet {
    pub const fn full() -> Self {
        FeatureSet {
            power: true,
            volume: true,
            mute: true,
            select_source: true,
            shuffle: true,
            transport_control: true,
        }
    }

    pub const fn playback_device() -> Self {
        FeatureSet {
            power: true,
            volume: true,
            mute: true,
            select_source: true,
            shuffle: true,
            transport_control: false,
        }
    }
}

struct SourceCaps {
    source: Source,
    display_name: &'static str,
    device_token: &'static str,
    /// Request scope of the play-info subtree, for sources that have one.
    /// The tuner scope is mixed-case on the wire; kept verbatim.
    play_info_scope: Option<&'static str>,
    features: FeatureSet,
}

const SOURCE_TABLE: &[SourceCaps] = &[
    SourceCaps {
        source: Source::AirPlay,
        display_name: "AirPlay",
        device_token: "AirPlay",
        play_info_scope: None,
        features: FeatureSet::playback_device(),
    },
    SourceCaps {
        source: Source::Optical,
        display_name: "Optical",
        device_token: "OPTICAL",
        play_info_scope: None,
        features: FeatureSet::playback_device(),
    },
    SourceCaps {
        source: Source::Cd,
        display_name: "CD",
        device_token: "CD",
        play_info_scope: None,
        features: FeatureSet::playback_device(),
    },
    SourceCaps {
        source: Source::Spotify,
        display_name: "Spotify",
        device_token: "Spotify",
        play_info_scope: Some("Spotify"),
        features: FeatureSet::full(),
    },
    SourceCaps {
        source: Source::Line1,
        display_name: "Line 1",
        device_token: "LINE1",
        play_info_scope: None,
        features: FeatureSet::playback_device(),
    },
    SourceCaps {
        source: Source::Line2,
        display_name: "Line 2",
        device_token: "LINE2",
        play_info_scope: None,
        features: FeatureSet::playback_device(),
    },
    SourceCaps {
        source: Source::Line3,
        display_name: "Line 3",
        device_token: "LINE3",
        play_info_scope: None,
        features: FeatureSet::playback_device(),
    },
    SourceCaps {
        source: Source::NetRadio,
        display_name: "Net Radio",
        device_token: "NET RADIO",
        play_info_scope: Some("NET_RADIO"),
        features: FeatureSet::full(),
    },
    SourceCaps {
        source: Source::Server,
        display_name: "Server",
        device_token: "SERVER",
        play_info_scope: Some("SERVER"),
        features: FeatureSet::full(),
    },
    SourceCaps {
        source: Source::Tuner,
        display_name: "Tuner",
        device_token: "TUNER",
        play_info_scope: Some("Tuner"),
        features: FeatureSet::playback_device(),
    },
];

impl Source {
    /// All sources, in the order hosts should list them.
    pub fn all() -> impl Iterator<Item = Source> {
        SOURCE_TABLE.iter().map(|caps| caps.source)
    }

    fn caps(self) -> &'static SourceCaps {
        SOURCE_TABLE
            .iter()
            .find(|caps| caps.source == self)
            .expect("every Source variant has a table row")
    }

    pub fn display_name(self) -> &'static str {
        self.caps().display_name
    }

    pub fn device_token(self) -> &'static str {
        self.caps().device_token
    }

    /// XML element name scoping per-source commands.
    ///
    /// Derived from the device token by the underscore transform, not by a
    /// table lookup, so it exists for every source.
    pub fn command_scope(self) -> String {
        self.device_token().replace(' ', "_")
    }

    pub fn play_info_scope(self) -> Option<&'static str> {
        self.caps().play_info_scope
    }

    pub fn features(self) -> FeatureSet {
        self.caps().features
    }

    /// Resolves a host-facing display name, e.g. "Net Radio".
    pub fn from_display_name(name: &str) -> Result<Source, ReceiverError> {
        SOURCE_TABLE
            .iter()
            .find(|caps| caps.display_name == name)
            .map(|caps| caps.source)
            .ok_or_else(|| ReceiverError::unknown_source(name))
    }

    /// Resolves a device-native token, e.g. "NET RADIO".
    ///
    /// An unrecognized token is a hard error; the state model never guesses.
    pub fn from_device_token(token: &str) -> Result<Source, ReceiverError> {
        SOURCE_TABLE
            .iter()
            .find(|caps| caps.device_token == token)
            .map(|caps| caps.source)
            .ok_or_else(|| ReceiverError::unknown_source(token))
    }
}
