//! # YNC — Yamaha Network Control wire dialect
//!
//! Ce module implémente le dialecte XML propriétaire parlé par les
//! amplificateurs réseau Yamaha (firmware R-N301) :
//!
//! - construction des requêtes `<YAMAHA_AV cmd="GET|PUT">…</YAMAHA_AV>`
//! - parsing des documents de réponse et du code retour `RC`
//! - helpers de navigation dans l'arbre XML
//!
//! ## Architecture
//!
//! - [`YncaRequestKind`] : verbe de commande porté par l'enveloppe
//! - [`YncaResponse`] : document de réponse parsé
//! - [`YncaError`] : erreurs de parsing
//!
//! The dialect is a plain request/response exchange: every call is an HTTP
//! POST whose body is the envelope below, and every reply echoes the request
//! scope as the first child of the response envelope. This crate only deals
//! with the documents; the HTTP transport lives with the device adapter.

mod builder;
mod envelope;
mod errors;
mod parser;

pub use builder::{YncaRequestKind, build_request};
pub use envelope::YncaResponse;
pub use errors::YncaError;
pub use parser::{child_text, descend, element_text, find_child, parse_response};
