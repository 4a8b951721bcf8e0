//! XML error types.

use std::io;

/// Errors that can occur while reading a response document or writing a
/// question document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// The document ended inside an open element.
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// An error parsing a value from XML text content.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// A value that cannot be written into a question document.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}
