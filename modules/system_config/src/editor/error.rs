//! Editor engine errors

use thiserror::Error;

/// Errors raised while rendering or decoding an editor form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The descriptor names a field the entity does not declare
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The options mapping of a descriptor is malformed
    #[error("invalid option '{key}' for field {field}: {reason}")]
    InvalidOption {
        field: String,
        key: String,
        reason: String,
    },

    /// The generator cannot render a field of this kind
    #[error("generator {generator} does not support {kind:?} field {field}")]
    UnsupportedKind {
        generator: &'static str,
        field: String,
        kind: super::FieldKind,
    },

    /// A submitted value could not be converted to the field's type
    #[error("invalid value '{value}' for field {field}")]
    InvalidValue { field: String, value: String },
}
