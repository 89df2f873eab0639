//! Structures de l'enveloppe de réponse YNC

use xmltree::Element;

/// Document de réponse `YAMAHA_AV` parsé.
///
/// The firmware replies with the same envelope shape it was queried with;
/// the first child of `content` is the echoed request scope (e.g.
/// `Main_Zone` for a basic-status query, `NET_RADIO` for play info).
#[derive(Debug, Clone)]
pub struct YncaResponse {
    /// Value of the `rsp` attribute ("GET" or "PUT"), when present.
    pub rsp: Option<String>,

    /// Device return code from the `RC` attribute; 0 means success.
    ///
    /// Older firmware omits the attribute entirely.
    pub rc: Option<u32>,

    /// The `YAMAHA_AV` root element.
    pub content: Element,
}

impl YncaResponse {
    /// True unless the device reported a non-zero return code.
    pub fn is_ok(&self) -> bool {
        self.rc.is_none_or(|rc| rc == 0)
    }
}
