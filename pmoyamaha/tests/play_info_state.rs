use pmoyamaha::{
    BasicStatus, PlayInfo, PlayerState, PowerState, ReceiverState, Source, diff_events,
};

fn on_with_source(input: &str) -> ReceiverState {
    let xml = format!(
        r#"<YAMAHA_AV rsp="GET"><Main_Zone><Basic_Status>
  <Power_Control><Power>On</Power></Power_Control>
  <Volume><Lvl><Val>300</Val></Lvl><Mute>Off</Mute></Volume>
  <Input><Input_Sel>{input}</Input_Sel></Input>
</Basic_Status></Main_Zone></YAMAHA_AV>"#
    );
    let mut state = ReceiverState::default();
    state
        .apply_basic_status(&BasicStatus::parse(&xml).unwrap())
        .unwrap();
    state
}

fn play_info(scope: &str, body: &str) -> PlayInfo {
    let xml = format!(
        r#"<YAMAHA_AV rsp="GET"><{scope}><Play_Info>{body}</Play_Info></{scope}></YAMAHA_AV>"#
    );
    PlayInfo::parse(&xml, scope).unwrap()
}

#[test]
fn assert_signal_means_playing() {
    let mut state = on_with_source("Spotify");
    state.apply_play_info(&play_info(
        "Spotify",
        "<Playback_Info>Assert</Playback_Info>",
    ));
    assert_eq!(state.player_state(), PlayerState::Playing);
}

#[test]
fn pause_signal_means_idle_but_active() {
    let mut state = on_with_source("Spotify");
    state.apply_play_info(&play_info("Spotify", "<Playback_Info>Pause</Playback_Info>"));
    assert_eq!(state.player_state(), PlayerState::Idle);
    assert!(state.media_active());
}

#[test]
fn unknown_signal_defaults_to_idle_without_raising() {
    let mut state = on_with_source("Spotify");
    state.apply_play_info(&play_info(
        "Spotify",
        "<Playback_Info>Buffering</Playback_Info>",
    ));
    assert_eq!(state.player_state(), PlayerState::Idle);
    assert!(!state.media_active());
}

#[test]
fn power_off_overrides_any_playback_payload() {
    let mut state = on_with_source("Spotify");
    state.apply_play_info(&play_info(
        "Spotify",
        "<Playback_Info>Play</Playback_Info><Meta_Info><Song>Peg</Song></Meta_Info>",
    ));
    assert_eq!(state.player_state(), PlayerState::Playing);

    state.power = PowerState::Standby;
    assert_eq!(state.player_state(), PlayerState::Off);
    // Cached metadata may survive; the exposed lifecycle state must not.
    assert_eq!(state.media.song.as_deref(), Some("Peg"));
}

#[test]
fn malformed_play_time_still_populates_meta() {
    let mut state = on_with_source("SERVER");
    let info = play_info(
        "SERVER",
        "<Play_Time>later</Play_Time><Meta_Info><Artist>Eno</Artist><Song>1/1</Song></Meta_Info>",
    );
    assert_eq!(info.field_errors.len(), 1);

    state.apply_play_info(&info);
    assert_eq!(state.media.artist.as_deref(), Some("Eno"));
    assert_eq!(state.media.song.as_deref(), Some("1/1"));
    assert_eq!(state.play_position, None);
}

#[test]
fn play_time_updates_position_and_timestamp() {
    let mut state = on_with_source("Spotify");
    assert_eq!(state.position_updated_at, None);

    state.apply_play_info(&play_info("Spotify", "<Play_Time>118</Play_Time>"));
    assert_eq!(state.play_position, Some(118));
    assert!(state.position_updated_at.is_some());
}

#[test]
fn play_mode_drives_both_shuffle_and_repeat() {
    let mut state = on_with_source("Spotify");
    state.apply_play_info(&play_info("Spotify", "<Play_Mode>On</Play_Mode>"));
    assert_eq!(state.shuffle, Some(true));
    assert_eq!(state.repeat, Some(true));

    state.apply_play_info(&play_info("Spotify", "<Play_Mode>Off</Play_Mode>"));
    assert_eq!(state.shuffle, Some(false));
    assert_eq!(state.repeat, Some(false));
}

#[test]
fn tuner_cycle_builds_frequency_title() {
    let mut state = on_with_source("TUNER");
    assert_eq!(state.source, Some(Source::Tuner));

    state.apply_play_info(&play_info(
        "Tuner",
        r#"<Signal_Info><Tuned>Assert</Tuned></Signal_Info>
<Tuning><Band>FM</Band><Freq><Current><Val>879500</Val><Unit>MHz</Unit></Current></Freq></Tuning>"#,
    ));

    assert_eq!(state.player_state(), PlayerState::Playing);
    assert_eq!(state.media.frequency.as_deref(), Some("FM 8795.0 MHz"));
    assert_eq!(state.media_title(), Some("FM 8795.0 MHz"));
}

#[test]
fn switching_to_a_sourceless_input_clears_playback_fields() {
    let mut state = on_with_source("Spotify");
    state.apply_play_info(&play_info(
        "Spotify",
        "<Playback_Info>Play</Playback_Info><Play_Time>30</Play_Time><Meta_Info><Song>Peg</Song></Meta_Info>",
    ));
    assert_eq!(state.player_state(), PlayerState::Playing);

    // The refresh cycle nullifies when the new source has no play-info
    // subtree (CD here).
    let mut next = on_with_source("CD");
    next.volume = state.volume;
    next.nullify_media();

    assert!(next.media.is_empty());
    assert_eq!(next.play_position, None);
    assert_eq!(next.player_state(), PlayerState::Idle);
}

#[test]
fn refresh_diff_reports_lifecycle_and_metadata_changes() {
    let previous = on_with_source("Spotify");

    let mut current = previous.clone();
    current.apply_play_info(&play_info(
        "Spotify",
        "<Playback_Info>Play</Playback_Info><Meta_Info><Song>Peg</Song></Meta_Info>",
    ));

    let events = diff_events(&previous, &current);
    assert_eq!(events.len(), 2);
}
