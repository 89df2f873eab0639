use thiserror::Error;

/// Erreur de parsing d'un document YNC
#[derive(Debug, Error)]
pub enum YncaError {
    #[error("XML parse error: {0}")]
    Xml(#[from] xmltree::ParseError),

    #[error("Missing YAMAHA_AV envelope")]
    MissingEnvelope,
}
