use pmoyamaha::{BasicStatus, PlayerState, PowerState, ReceiverError, ReceiverState, Source};

fn status_xml(power: &str, volume_val: i32, mute: &str, input: &str) -> String {
    format!(
        r#"<YAMAHA_AV rsp="GET" RC="0"><Main_Zone><Basic_Status>
  <Power_Control><Power>{power}</Power><Sleep>Off</Sleep></Power_Control>
  <Volume><Lvl><Val>{volume_val}</Val><Exp>0</Exp><Unit></Unit></Lvl><Mute>{mute}</Mute></Volume>
  <Input><Input_Sel>{input}</Input_Sel></Input>
</Basic_Status></Main_Zone></YAMAHA_AV>"#
    )
}

#[test]
fn line1_status_end_to_end() {
    let xml = status_xml("On", 450, "Off", "LINE1");
    let status = BasicStatus::parse(&xml).unwrap();

    let mut state = ReceiverState::default();
    state.apply_basic_status(&status).unwrap();

    assert_ne!(state.player_state(), PlayerState::Off);
    // Device scale: 450 converts to 4.5, well past the nominal fraction.
    assert!((state.volume - 4.5).abs() < f32::EPSILON);
    assert!(!state.muted);
    assert_eq!(state.source, Some(Source::Line1));
    assert_eq!(state.command_scope.as_deref(), Some("LINE1"));
}

#[test]
fn net_radio_token_resolves_and_scopes() {
    let xml = status_xml("On", 300, "Off", "NET RADIO");
    let status = BasicStatus::parse(&xml).unwrap();

    let mut state = ReceiverState::default();
    state.apply_basic_status(&status).unwrap();

    assert_eq!(state.source, Some(Source::NetRadio));
    assert_eq!(state.command_scope.as_deref(), Some("NET_RADIO"));
}

#[test]
fn standby_reads_as_off() {
    let xml = status_xml("Standby", 450, "Off", "CD");
    let status = BasicStatus::parse(&xml).unwrap();

    let mut state = ReceiverState::default();
    state.apply_basic_status(&status).unwrap();

    assert_eq!(state.power, PowerState::Standby);
    assert_eq!(state.player_state(), PlayerState::Off);
}

#[test]
fn unknown_input_token_fails_without_mutation() {
    let xml = status_xml("On", 450, "On", "HDMI4");
    let status = BasicStatus::parse(&xml).unwrap();

    let mut state = ReceiverState::default();
    let before = state.clone();
    let err = state.apply_basic_status(&status).unwrap_err();

    assert!(matches!(err, ReceiverError::UnknownSource(_)));
    assert_eq!(state.power, before.power);
    assert_eq!(state.source, before.source);
    assert!((state.volume - before.volume).abs() < f32::EPSILON);
    assert_eq!(state.muted, before.muted);
}

#[test]
fn volume_survives_a_command_status_round_trip() {
    for hundredths in 0..=100u32 {
        let fraction = hundredths as f32 / 100.0;

        // What set_volume would put on the wire...
        let body = pmoyamaha::commands::volume(fraction);
        let device_value: i32 = body
            .split("<Val>")
            .nth(1)
            .and_then(|rest| rest.split("</Val>").next())
            .unwrap()
            .parse()
            .unwrap();

        // ...echoed back by the next status refresh.
        let status = BasicStatus::parse(&status_xml("On", device_value, "Off", "CD")).unwrap();

        assert!(
            (status.volume - fraction).abs() <= 0.01 + f32::EPSILON,
            "fraction {fraction} came back as {}",
            status.volume
        );
    }
}

#[test]
fn volume_is_recomputed_each_refresh() {
    let mut state = ReceiverState::default();
    state
        .apply_basic_status(&BasicStatus::parse(&status_xml("On", 450, "Off", "CD")).unwrap())
        .unwrap();
    assert!((state.volume - 4.5).abs() < f32::EPSILON);

    state
        .apply_basic_status(&BasicStatus::parse(&status_xml("On", 200, "Off", "CD")).unwrap())
        .unwrap();
    assert!((state.volume - 2.0).abs() < f32::EPSILON);
}
