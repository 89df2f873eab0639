//! Main-zone `Basic_Status` parsing.
//!
//! The four fields below are the fixed skeleton of every status reply; a
//! document missing any of them has the wrong shape and freezes the state
//! for the cycle ([`ReceiverError::MalformedResponse`]). Field-level
//! tolerance only applies to the optional play-info subtree, not here.

use tracing::warn;

use pmoynca::{child_text, descend, parse_response};

use crate::errors::ReceiverError;
use crate::model::PowerState;

/// Parsed `Main_Zone/Basic_Status` subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicStatus {
    pub power: PowerState,

    /// Device volume value divided by 100.
    pub volume: f32,

    pub muted: bool,

    /// Raw device input token, e.g. "NET RADIO".
    pub input: String,
}

impl BasicStatus {
    pub fn parse(xml: &str) -> Result<BasicStatus, ReceiverError> {
        let response = parse_response(xml)?;
        if !response.is_ok() {
            warn!("basic-status reply carries RC={:?}", response.rc);
        }

        let basic = descend(&response.content, &["Main_Zone", "Basic_Status"]).ok_or_else(
            || ReceiverError::malformed("no Main_Zone/Basic_Status subtree in reply"),
        )?;

        let power_text = descend(basic, &["Power_Control"])
            .and_then(|node| child_text(node, "Power"))
            .ok_or_else(|| ReceiverError::malformed("no Power_Control/Power node"))?;
        let power = PowerState::from_device(&power_text);

        let volume_text = descend(basic, &["Volume", "Lvl"])
            .and_then(|node| child_text(node, "Val"))
            .ok_or_else(|| ReceiverError::malformed("no Volume/Lvl/Val node"))?;
        let volume = volume_text
            .parse::<i32>()
            .map_err(|_| {
                ReceiverError::MalformedResponse(format!("bad volume value: {volume_text}"))
            })? as f32
            / 100.0;

        let mute_text = descend(basic, &["Volume"])
            .and_then(|node| child_text(node, "Mute"))
            .ok_or_else(|| ReceiverError::malformed("no Volume/Mute node"))?;
        let muted = mute_text == "On";

        let input = descend(basic, &["Input"])
            .and_then(|node| child_text(node, "Input_Sel"))
            .ok_or_else(|| ReceiverError::malformed("no Input/Input_Sel node"))?;

        Ok(BasicStatus {
            power,
            volume,
            muted,
            input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = r#"<YAMAHA_AV rsp="GET" RC="0">
<Main_Zone><Basic_Status>
  <Power_Control><Power>On</Power><Sleep>Off</Sleep></Power_Control>
  <Volume>
    <Lvl><Val>450</Val><Exp>0</Exp><Unit></Unit></Lvl>
    <Mute>Off</Mute>
  </Volume>
  <Input><Input_Sel>LINE1</Input_Sel></Input>
</Basic_Status></Main_Zone>
</YAMAHA_AV>"#;

    #[test]
    fn test_parse_full_status() {
        let status = BasicStatus::parse(STATUS).unwrap();
        assert_eq!(status.power, PowerState::On);
        assert!((status.volume - 4.5).abs() < f32::EPSILON);
        assert!(!status.muted);
        assert_eq!(status.input, "LINE1");
    }

    #[test]
    fn test_standby_and_mute() {
        let xml = STATUS.replace("<Power>On</Power>", "<Power>Standby</Power>").replace(
            "<Mute>Off</Mute>",
            "<Mute>On</Mute>",
        );
        let status = BasicStatus::parse(&xml).unwrap();
        assert_eq!(status.power, PowerState::Standby);
        assert!(status.muted);
    }

    #[test]
    fn test_missing_subtree_is_malformed() {
        let err = BasicStatus::parse(r#"<YAMAHA_AV rsp="GET"><System></System></YAMAHA_AV>"#)
            .unwrap_err();
        assert!(matches!(err, ReceiverError::MalformedResponse(_)));
    }

    #[test]
    fn test_bad_volume_is_malformed() {
        let xml = STATUS.replace("<Val>450</Val>", "<Val>loud</Val>");
        let err = BasicStatus::parse(&xml).unwrap_err();
        assert!(matches!(err, ReceiverError::MalformedResponse(_)));
    }
}
