//! Construction des requêtes YNC

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Command verb carried by the request envelope.
///
/// `Get` queries a status subtree, `Put` changes device state. The firmware
/// keys its behavior on this attribute alone; both verbs travel as HTTP POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YncaRequestKind {
    Get,
    Put,
}

impl YncaRequestKind {
    pub fn as_attr(&self) -> &'static str {
        match self {
            YncaRequestKind::Get => "GET",
            YncaRequestKind::Put => "PUT",
        }
    }
}

/// Construit le document de requête complet.
///
/// `body` is trusted XML produced by the adapter's command builders; the
/// firmware rejects requests without the exact declaration prefix.
pub fn build_request(kind: YncaRequestKind, body: &str) -> String {
    format!(
        "{}<YAMAHA_AV cmd=\"{}\">{}</YAMAHA_AV>",
        XML_DECLARATION,
        kind.as_attr(),
        body
    )
}
