//! Per-device session façade.
//!
//! One [`YamahaReceiver`] per configured device. The host drives it from a
//! single thread: a periodic [`YamahaReceiver::refresh`] pulls the
//! main-zone status (and, powered on, the current source's play info),
//! command methods translate the generic media-player surface into YNC
//! bodies. There is no internal scheduler and no locking; callers serialize
//! access per session.

use tracing::warn;

use crate::DEFAULT_HTTP_TIMEOUT;
use crate::commands::{self, PlaybackCommand};
use crate::config::ReceiverConfig;
use crate::errors::ReceiverError;
use crate::model::{PowerState, ReceiverEvent, ReceiverState};
use crate::play_info::PlayInfo;
use crate::source::{FeatureSet, Source};
use crate::status::BasicStatus;
use crate::ynca_client::YncaClient;

pub struct YamahaReceiver {
    name: String,
    host: String,
    client: YncaClient,
    state: ReceiverState,
}

impl YamahaReceiver {
    pub fn new(name: &str, host: &str) -> Self {
        YamahaReceiver {
            name: name.to_string(),
            host: host.to_string(),
            client: YncaClient::new(host, DEFAULT_HTTP_TIMEOUT),
            state: ReceiverState::default(),
        }
    }

    pub fn from_config(config: &ReceiverConfig) -> Self {
        YamahaReceiver {
            name: config.name.clone(),
            host: config.host.clone(),
            client: YncaClient::new(&config.host, config.timeout()),
            state: ReceiverState::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Stable identifier for hosts registering several receivers.
    pub fn unique_id(&self) -> String {
        format!("pmoyamaha_{}", self.host)
    }

    pub fn state(&self) -> &ReceiverState {
        &self.state
    }

    /// Display names of every selectable source.
    pub fn source_list(&self) -> Vec<&'static str> {
        Source::all().map(Source::display_name).collect()
    }

    /// Feature set of the current source; full until a source is known.
    pub fn supported_features(&self) -> FeatureSet {
        self.state
            .source
            .map(Source::features)
            .unwrap_or_else(FeatureSet::full)
    }

    // ------------------------------------------------------------------
    // Refresh cycle
    // ------------------------------------------------------------------

    /// One poll: pulls the main-zone status, then the play info of the
    /// current source when the device is powered on.
    ///
    /// Returns the changes relative to the previous cycle. On any transport
    /// or shape error the state is left exactly as it was (the caller just
    /// logs and retries next cycle); a play-info failure alone degrades to
    /// stale playback fields without failing the refresh.
    pub fn refresh(&mut self) -> Result<Vec<ReceiverEvent>, ReceiverError> {
        let previous = self.state.clone();

        let xml = self.client.get(commands::basic_status())?;
        let status = BasicStatus::parse(&xml)?;
        self.state.apply_basic_status(&status)?;

        if self.state.power.is_on() {
            self.refresh_play_info();
        }

        Ok(diff_events(&previous, &self.state))
    }

    fn refresh_play_info(&mut self) {
        let Some(source) = self.state.source else {
            return;
        };

        match source.play_info_scope() {
            None => self.state.nullify_media(),
            Some(scope) => match self.fetch_play_info(scope) {
                Ok(info) => self.state.apply_play_info(&info),
                Err(err) => {
                    // Stale playback fields are better than a dropped cycle.
                    warn!("play-info refresh failed for {}: {}", scope, err);
                }
            },
        }
    }

    fn fetch_play_info(&self, scope: &str) -> Result<PlayInfo, ReceiverError> {
        let xml = self.client.get(&commands::play_info(scope))?;
        PlayInfo::parse(&xml, scope)
    }

    // ------------------------------------------------------------------
    // Commands (fire-and-forget PUTs)
    // ------------------------------------------------------------------

    pub fn turn_on(&mut self) -> Result<(), ReceiverError> {
        self.set_power(PowerState::On)
    }

    pub fn turn_off(&mut self) -> Result<(), ReceiverError> {
        self.set_power(PowerState::Standby)
    }

    fn set_power(&mut self, power: PowerState) -> Result<(), ReceiverError> {
        self.client.put(&commands::power(power))?;
        Ok(())
    }

    /// Sets the main-zone volume from a [0, 1] fraction (device unit is
    /// hundredths; see [`ReceiverState::volume`] for the scale caveat).
    pub fn set_volume(&mut self, fraction: f32) -> Result<(), ReceiverError> {
        self.client.put(&commands::volume(fraction))?;
        Ok(())
    }

    /// Sets mute and updates the local flag optimistically; the next
    /// refresh re-reads the authoritative value.
    pub fn set_mute(&mut self, mute: bool) -> Result<(), ReceiverError> {
        self.client.put(&commands::mute(mute))?;
        self.state.muted = mute;
        Ok(())
    }

    /// Selects an input by display name. Unknown names fail before anything
    /// touches the wire or the state.
    pub fn select_source(&mut self, name: &str) -> Result<(), ReceiverError> {
        let source = Source::from_display_name(name)?;
        self.client.put(&commands::select_source(source))?;
        Ok(())
    }

    pub fn play(&mut self) -> Result<(), ReceiverError> {
        self.play_control(PlaybackCommand::Play)
    }

    pub fn pause(&mut self) -> Result<(), ReceiverError> {
        self.play_control(PlaybackCommand::Pause)
    }

    pub fn stop(&mut self) -> Result<(), ReceiverError> {
        self.play_control(PlaybackCommand::Stop)
    }

    pub fn next_track(&mut self) -> Result<(), ReceiverError> {
        self.play_control(PlaybackCommand::SkipFwd)
    }

    pub fn previous_track(&mut self) -> Result<(), ReceiverError> {
        self.play_control(PlaybackCommand::SkipRev)
    }

    /// The firmware only exposes a shuffle toggle; the requested value
    /// cannot be targeted on the wire, so every call toggles.
    pub fn set_shuffle(&mut self, _enable: bool) -> Result<(), ReceiverError> {
        self.play_control(PlaybackCommand::Shuffle)
    }

    fn play_control(&mut self, command: PlaybackCommand) -> Result<(), ReceiverError> {
        let scope = self.current_scope()?;
        self.client.put(&commands::playback(&scope, command))?;
        Ok(())
    }

    /// Selects a list entry by its displayed name.
    pub fn select_list_item(&mut self, item: &str) -> Result<(), ReceiverError> {
        self.list_control("Direct_Sel", item)
    }

    /// Jumps to a 1-based list index; the firmware addresses at most 65536
    /// entries.
    pub fn jump_to_list_index(&mut self, index: u32) -> Result<(), ReceiverError> {
        if !(1..=65536).contains(&index) {
            return Err(ReceiverError::InvalidListIndex(index));
        }
        self.list_control("Jump_List", &index.to_string())
    }

    fn list_control(&mut self, command: &str, value: &str) -> Result<(), ReceiverError> {
        let scope = self.current_scope()?;
        self.client
            .put(&commands::list_control(&scope, command, value))?;
        Ok(())
    }

    fn current_scope(&self) -> Result<String, ReceiverError> {
        self.state
            .command_scope
            .clone()
            .ok_or(ReceiverError::NoCurrentSource)
    }
}

/// Changes between two state snapshots, in the order hosts usually care:
/// lifecycle first, then audio, then playback details.
pub fn diff_events(previous: &ReceiverState, current: &ReceiverState) -> Vec<ReceiverEvent> {
    let mut events = Vec::new();

    if previous.player_state() != current.player_state() {
        events.push(ReceiverEvent::StateChanged(current.player_state()));
    }
    if (previous.volume - current.volume).abs() > f32::EPSILON {
        events.push(ReceiverEvent::VolumeChanged(current.volume));
    }
    if previous.muted != current.muted {
        events.push(ReceiverEvent::MuteChanged(current.muted));
    }
    if previous.source != current.source {
        events.push(ReceiverEvent::SourceChanged(current.source));
    }
    if previous.play_position != current.play_position {
        events.push(ReceiverEvent::PositionChanged(current.play_position));
    }
    if previous.media != current.media {
        events.push(ReceiverEvent::MetadataChanged(current.media.clone()));
    }

    events
}
