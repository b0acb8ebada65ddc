//! URIs that can be queued for playback.

use std::fmt;
use std::str::FromStr;

use crate::grammar;
use crate::{LocalTrackUri, ResourceKind, SpotifyUri, TrackUri, UriError};

/// A catalog track or a local track.
///
/// Unlike [`SpotifyUri`], a bare id is accepted and taken to be a catalog
/// track.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PlayableUri {
    Track(TrackUri),
    LocalTrack(LocalTrackUri),
}

impl PlayableUri {
    /// Resolves a local track URI, a track URI, or a bare track id.
    pub fn resolve(input: &str) -> Result<Self, UriError> {
        let ident = grammar::resolve_first(
            input,
            &[ResourceKind::LocalTrack, ResourceKind::Track],
            Some(ResourceKind::Track),
            "playable",
        )?;
        Self::try_from(SpotifyUri::from_identifier(ident))
    }

    /// Returns the resource kind.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Track(_) => ResourceKind::Track,
            Self::LocalTrack(_) => ResourceKind::LocalTrack,
        }
    }

    /// Returns the bare id segment.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Track(uri) => uri.id(),
            Self::LocalTrack(uri) => uri.id(),
        }
    }

    /// Returns the canonical URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Track(uri) => uri.uri(),
            Self::LocalTrack(uri) => uri.uri(),
        }
    }

    /// Whether this refers to a file on the user's device.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::LocalTrack(_))
    }
}

impl From<TrackUri> for PlayableUri {
    fn from(uri: TrackUri) -> Self {
        Self::Track(uri)
    }
}

impl From<LocalTrackUri> for PlayableUri {
    fn from(uri: LocalTrackUri) -> Self {
        Self::LocalTrack(uri)
    }
}

impl From<PlayableUri> for SpotifyUri {
    fn from(uri: PlayableUri) -> Self {
        match uri {
            PlayableUri::Track(uri) => Self::Track(uri),
            PlayableUri::LocalTrack(uri) => Self::LocalTrack(uri),
        }
    }
}

impl TryFrom<SpotifyUri> for PlayableUri {
    type Error = UriError;

    fn try_from(uri: SpotifyUri) -> Result<Self, Self::Error> {
        match uri {
            SpotifyUri::Track(uri) => Ok(Self::Track(uri)),
            SpotifyUri::LocalTrack(uri) => Ok(Self::LocalTrack(uri)),
            other => Err(UriError::KindMismatch {
                expected: "playable",
                actual: other.kind(),
            }),
        }
    }
}

impl fmt::Display for PlayableUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for PlayableUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl AsRef<str> for PlayableUri {
    fn as_ref(&self) -> &str {
        self.uri()
    }
}

impl serde::Serialize for PlayableUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.uri())
    }
}

impl<'de> serde::Deserialize<'de> for PlayableUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::resolve(&s).map_err(serde::de::Error::custom)
    }
}
