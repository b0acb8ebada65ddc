//! Error types for URI parsing and validation.

use thiserror::Error;

use crate::ResourceKind;

/// Errors that can occur when parsing or validating a URI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The input, or an id segment that must be present, is empty.
    #[error("URI cannot be empty")]
    Empty,

    /// The input is delimited but not under the expected namespace.
    #[error("invalid URI namespace: expected '{expected}', got '{actual}'")]
    InvalidNamespace {
        expected: &'static str,
        actual: String,
    },

    /// The kind token is not followed by the id separator.
    #[error("URI missing ':' separator after kind")]
    MissingSeparator,

    /// The input names a different resource kind than the one requested.
    #[error("URI kind mismatch: expected {expected}, got {actual}")]
    KindMismatch {
        expected: &'static str,
        actual: ResourceKind,
    },

    /// The input carries the namespace but an unrecognized kind token.
    #[error("unknown URI kind '{token}'")]
    UnknownKind { token: String },

    /// A local track id with the wrong number of fields.
    #[error("malformed local track id '{id}': expected artist:album:name:id")]
    MalformedLocalTrack { id: String },

    /// A user id that carries a `:playlist:` clause.
    #[error("user id '{id}' embeds a playlist reference")]
    EmbeddedPlaylist { id: String },

    /// A bare id was given where the resource kind cannot be inferred.
    #[error("ambiguous bare id '{id}': a fully qualified URI is required")]
    AmbiguousBareId { id: String },
}

impl UriError {
    /// Returns true if this error indicates the input named another kind.
    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, UriError::KindMismatch { .. })
    }

    /// Returns true if this error indicates an unqualified id was rejected.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, UriError::AmbiguousBareId { .. })
    }

    /// Returns true if the input was not recognizable as a URI at all.
    pub fn is_syntax_error(&self) -> bool {
        matches!(
            self,
            UriError::Empty | UriError::InvalidNamespace { .. } | UriError::MissingSeparator
        )
    }
}
