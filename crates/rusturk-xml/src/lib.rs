//! XML handling for Rusturk.
//!
//! The service answers every operation with an XML document. This crate
//! parses those documents into an owned element tree ([`XmlElement`]),
//! extracts any `Errors` block ([`extract_errors`]) and builds the typed
//! operation outputs ([`MTurkDeserialize`]). It also renders the
//! `ExternalQuestion` document used as a HIT's question.

pub mod deserialize;
pub mod document;
pub mod error;
pub mod fault;
pub mod serialize;

pub use deserialize::MTurkDeserialize;
pub use document::{XmlElement, parse_document};
pub use error::XmlError;
pub use fault::extract_errors;
pub use serialize::{EXTERNAL_QUESTION_NAMESPACE, external_question_xml};
