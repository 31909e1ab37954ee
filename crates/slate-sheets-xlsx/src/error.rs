//! XLSX error types

use thiserror::Error;

/// Result type for XLSX serialization
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur while writing the worksheet part
///
/// Collaborator failures are propagated unchanged; the serializer itself
/// introduces no error conditions of its own.
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}
