//! Parsing des documents de réponse YNC

use std::io::BufReader;

use xmltree::{Element, XMLNode};

use crate::envelope::YncaResponse;
use crate::errors::YncaError;

/// Parse un document de réponse complet.
///
/// Only the envelope shape is validated here; the meaning of the echoed
/// subtree is the adapter's business.
pub fn parse_response(xml: &str) -> Result<YncaResponse, YncaError> {
    let reader = BufReader::new(xml.as_bytes());
    let root = Element::parse(reader)?;

    if root.name != "YAMAHA_AV" {
        return Err(YncaError::MissingEnvelope);
    }

    let rsp = root.attributes.get("rsp").cloned();
    let rc = root.attributes.get("RC").and_then(|v| v.parse::<u32>().ok());

    Ok(YncaResponse {
        rsp,
        rc,
        content: root,
    })
}

/// First child element named `name`.
pub fn find_child<'a>(parent: &'a Element, name: &str) -> Option<&'a Element> {
    parent.children.iter().find_map(|node| match node {
        XMLNode::Element(elem) if elem.name == name => Some(elem),
        _ => None,
    })
}

/// Trimmed text content of an element, if non-empty.
pub fn element_text(elem: &Element) -> Option<String> {
    elem.get_text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Trimmed text content of the child named `name`, if present and non-empty.
pub fn child_text(parent: &Element, name: &str) -> Option<String> {
    find_child(parent, name).and_then(element_text)
}

/// Walks a path of nested child elements from `root`.
pub fn descend<'a>(root: &'a Element, path: &[&str]) -> Option<&'a Element> {
    let mut current = root;
    for name in path {
        current = find_child(current, name)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_response() {
        let xml = r#"<YAMAHA_AV rsp="GET" RC="0">
  <Main_Zone>
    <Basic_Status>
      <Power_Control><Power>On</Power></Power_Control>
    </Basic_Status>
  </Main_Zone>
</YAMAHA_AV>"#;

        let response = parse_response(xml).unwrap();
        assert_eq!(response.rsp.as_deref(), Some("GET"));
        assert_eq!(response.rc, Some(0));
        assert!(response.is_ok());

        let power = descend(&response.content, &["Main_Zone", "Basic_Status", "Power_Control"])
            .unwrap();
        assert_eq!(child_text(power, "Power").as_deref(), Some("On"));
    }

    #[test]
    fn test_parse_response_without_rc() {
        let xml = r#"<YAMAHA_AV rsp="PUT"><System></System></YAMAHA_AV>"#;

        let response = parse_response(xml).unwrap();
        assert_eq!(response.rc, None);
        assert!(response.is_ok());
    }

    #[test]
    fn test_non_zero_rc_is_not_ok() {
        let xml = r#"<YAMAHA_AV rsp="PUT" RC="3"><System></System></YAMAHA_AV>"#;

        let response = parse_response(xml).unwrap();
        assert_eq!(response.rc, Some(3));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let err = parse_response("<Envelope></Envelope>").unwrap_err();
        assert!(matches!(err, YncaError::MissingEnvelope));
    }

    #[test]
    fn test_malformed_xml_is_rejected() {
        let err = parse_response("<YAMAHA_AV><broken").unwrap_err();
        assert!(matches!(err, YncaError::Xml(_)));
    }

    #[test]
    fn test_child_text_skips_empty_nodes() {
        let xml = r#"<YAMAHA_AV><Meta_Info><Artist></Artist><Song>Aja</Song></Meta_Info></YAMAHA_AV>"#;
        let response = parse_response(xml).unwrap();
        let meta = find_child(&response.content, "Meta_Info").unwrap();

        assert_eq!(child_text(meta, "Artist"), None);
        assert_eq!(child_text(meta, "Song").as_deref(), Some("Aja"));
    }
}
