//! Per-source `Play_Info` parsing.
//!
//! The outer document shape is strict: a transport failure, a malformed
//! envelope or a missing `Play_Info` subtree abandons the whole play-info
//! refresh for the cycle. Inside a well-formed subtree every top-level
//! field is an independent parse attempt — one bad field is recorded and
//! skipped, the rest of the document still lands.

use tracing::warn;

use pmoynca::{child_text, descend, element_text, find_child, parse_response};
use xmltree::Element;

use crate::errors::ReceiverError;
use crate::model::MediaMetadata;

/// Parsed `Play_Info` document for one source.
///
/// Fields are `None` when the document did not carry them (or their parse
/// attempt failed); the state model keeps its previous values for those.
#[derive(Debug, Clone, Default)]
pub struct PlayInfo {
    /// Both flags come from the device's single `Play_Mode` field.
    pub shuffle: Option<bool>,
    pub repeat: Option<bool>,

    /// Elapsed seconds from `Play_Time`.
    pub play_time: Option<u32>,

    pub meta: MediaMetadata,

    /// Raw transition input: text of `Playback_Info`, or of
    /// `Signal_Info/Tuned` for tuner sources. An empty string means the
    /// field was present but carried no usable value.
    pub playback_signal: Option<String>,

    /// Individual field failures, already logged by [`PlayInfo::parse`].
    pub field_errors: Vec<ReceiverError>,
}

impl PlayInfo {
    /// Parses the reply to a `<{scope}><Play_Info>GetParam</Play_Info></{scope}>`
    /// query.
    pub fn parse(xml: &str, scope: &str) -> Result<PlayInfo, ReceiverError> {
        let response = parse_response(xml)?;
        if !response.is_ok() {
            warn!("play-info reply for {} carries RC={:?}", scope, response.rc);
        }

        let subtree = descend(&response.content, &[scope, "Play_Info"]).ok_or_else(|| {
            ReceiverError::MalformedResponse(format!("no {scope}/Play_Info subtree in reply"))
        })?;

        let mut info = PlayInfo::default();
        for child in subtree.children.iter().filter_map(|node| node.as_element()) {
            let outcome = match child.name.as_str() {
                "Play_Mode" => info.parse_play_mode(child),
                "Play_Time" => info.parse_play_time(child),
                "Meta_Info" => {
                    info.parse_meta_info(child);
                    Ok(())
                }
                "Playback_Info" => {
                    info.playback_signal = Some(element_text(child).unwrap_or_default());
                    Ok(())
                }
                "Signal_Info" => info.parse_signal_info(child),
                "Tuning" => info.parse_tuning(child),
                // Unknown siblings (Feature_Availability, Album_ART, ...) are
                // not ours to interpret.
                _ => Ok(()),
            };

            if let Err(err) = outcome {
                warn!("skipping play-info field {}: {}", child.name, err);
                info.field_errors.push(err);
            }
        }

        Ok(info)
    }

    fn parse_play_mode(&mut self, node: &Element) -> Result<(), ReceiverError> {
        let text = element_text(node)
            .ok_or_else(|| ReceiverError::field_parse("Play_Mode", "empty node"))?;
        let on = text == "On";
        self.shuffle = Some(on);
        self.repeat = Some(on);
        Ok(())
    }

    fn parse_play_time(&mut self, node: &Element) -> Result<(), ReceiverError> {
        let text = element_text(node)
            .ok_or_else(|| ReceiverError::field_parse("Play_Time", "empty node"))?;
        let seconds = text
            .parse::<u32>()
            .map_err(|_| ReceiverError::field_parse("Play_Time", &format!("bad value {text}")))?;
        self.play_time = Some(seconds);
        Ok(())
    }

    fn parse_meta_info(&mut self, node: &Element) {
        for meta in node.children.iter().filter_map(|n| n.as_element()) {
            let Some(text) = element_text(meta) else {
                continue;
            };
            // The firmware only escapes ampersands, and not reliably.
            let text = text.replace("&amp;", "&");
            match meta.name.as_str() {
                "Artist" => self.meta.artist = Some(text),
                "Album" => self.meta.album = Some(text),
                "Station" | "Radio_Text_A" | "Song" | "Track" => self.meta.song = Some(text),
                _ => {}
            }
        }
    }

    fn parse_signal_info(&mut self, node: &Element) -> Result<(), ReceiverError> {
        let tuned = find_child(node, "Tuned")
            .ok_or_else(|| ReceiverError::field_parse("Signal_Info", "no Tuned child"))?;
        self.playback_signal = Some(element_text(tuned).unwrap_or_default());
        Ok(())
    }

    fn parse_tuning(&mut self, node: &Element) -> Result<(), ReceiverError> {
        let band = child_text(node, "Band")
            .ok_or_else(|| ReceiverError::field_parse("Tuning", "no Band child"))?;
        let current = descend(node, &["Freq", "Current"])
            .ok_or_else(|| ReceiverError::field_parse("Tuning", "no Freq/Current child"))?;
        let value_text = child_text(current, "Val")
            .ok_or_else(|| ReceiverError::field_parse("Tuning", "no Freq/Current/Val child"))?;
        let value = value_text.parse::<f64>().map_err(|_| {
            ReceiverError::field_parse("Tuning", &format!("bad frequency value {value_text}"))
        })? / 100.0;
        let unit = child_text(current, "Unit")
            .ok_or_else(|| ReceiverError::field_parse("Tuning", "no Freq/Current/Unit child"))?;

        self.meta.frequency = Some(format_frequency(&band, value, &unit));
        Ok(())
    }
}

/// Band + frequency + unit, with the frequency printed the way the device
/// UIs expect: whole numbers keep one decimal ("8795.0"), everything else
/// prints as-is ("879.5").
fn format_frequency(band: &str, value: f64, unit: &str) -> String {
    if value.fract() == 0.0 {
        format!("{band} {value:.1} {unit}")
    } else {
        format!("{band} {value} {unit}")
    }
}
