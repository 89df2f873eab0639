//! Outbound command bodies.
//!
//! Pure builders for every XML body the adapter can PUT or GET; the session
//! wires them to the transport. Kept separate so the exact wire bytes stay
//! testable without a device.

use crate::model::PowerState;
use crate::source::Source;

/// Fixed tokens accepted by the per-source `Play_Control/Playback` path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Stop,
    SkipFwd,
    SkipRev,
    /// The only shuffle control the firmware has: a toggle.
    Shuffle,
}

impl PlaybackCommand {
    pub fn as_token(&self) -> &'static str {
        match self {
            PlaybackCommand::Play => "Play",
            PlaybackCommand::Pause => "Pause",
            PlaybackCommand::Stop => "Stop",
            PlaybackCommand::SkipFwd => "Skip Fwd",
            PlaybackCommand::SkipRev => "Skip Rev",
            PlaybackCommand::Shuffle => "Shuffle",
        }
    }
}

pub fn basic_status() -> &'static str {
    "<Main_Zone><Basic_Status>GetParam</Basic_Status></Main_Zone>"
}

pub fn play_info(scope: &str) -> String {
    format!("<{0}><Play_Info>GetParam</Play_Info></{0}>", scope)
}

pub fn power(state: PowerState) -> String {
    format!(
        "<System><Power_Control><Power>{}</Power></Power_Control></System>",
        state.as_device()
    )
}

/// Volume body; the device wants hundredths, rounded.
pub fn volume(fraction: f32) -> String {
    format!(
        "<Main_Zone><Volume><Lvl><Val>{}</Val><Exp>0</Exp><Unit></Unit></Lvl></Volume></Main_Zone>",
        (fraction * 100.0).round() as i32
    )
}

pub fn mute(on: bool) -> String {
    format!(
        "<Main_Zone><Volume><Mute>{}</Mute></Volume></Main_Zone>",
        if on { "On" } else { "Off" }
    )
}

pub fn select_source(source: Source) -> String {
    format!(
        "<Main_Zone><Input><Input_Sel>{}</Input_Sel></Input></Main_Zone>",
        source.device_token()
    )
}

pub fn playback(scope: &str, command: PlaybackCommand) -> String {
    format!(
        "<{0}><Play_Control><Playback>{1}</Playback></Play_Control></{0}>",
        scope,
        command.as_token()
    )
}

pub fn list_control(scope: &str, command: &str, value: &str) -> String {
    format!(
        "<{0}><List_Control><{1}>{2}</{1}></List_Control></{0}>",
        scope, command, value
    )
}
