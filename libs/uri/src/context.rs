//! URIs that can serve as a playback context.

use std::fmt;
use std::str::FromStr;

use crate::grammar;
use crate::{AlbumUri, ArtistUri, PlaylistUri, ResourceKind, SpotifyUri, UriError};

/// An album, artist, or playlist whose tracks can be played in sequence.
///
/// Bare ids are rejected; the three kinds cannot be told apart without a
/// prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContextUri {
    Playlist(PlaylistUri),
    Album(AlbumUri),
    Artist(ArtistUri),
}

impl ContextUri {
    /// Resolves a playlist, album, or artist URI.
    ///
    /// A user-embedded playlist URI resolves to the playlist.
    pub fn resolve(input: &str) -> Result<Self, UriError> {
        let ident = grammar::resolve_first(
            input,
            &[
                ResourceKind::Playlist,
                ResourceKind::Album,
                ResourceKind::Artist,
            ],
            None,
            "context",
        )?;
        Self::try_from(SpotifyUri::from_identifier(ident))
    }

    /// Returns the resource kind.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Playlist(_) => ResourceKind::Playlist,
            Self::Album(_) => ResourceKind::Album,
            Self::Artist(_) => ResourceKind::Artist,
        }
    }

    /// Returns the bare id segment.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Playlist(uri) => uri.id(),
            Self::Album(uri) => uri.id(),
            Self::Artist(uri) => uri.id(),
        }
    }

    /// Returns the canonical URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Playlist(uri) => uri.uri(),
            Self::Album(uri) => uri.uri(),
            Self::Artist(uri) => uri.uri(),
        }
    }
}

impl From<PlaylistUri> for ContextUri {
    fn from(uri: PlaylistUri) -> Self {
        Self::Playlist(uri)
    }
}

impl From<AlbumUri> for ContextUri {
    fn from(uri: AlbumUri) -> Self {
        Self::Album(uri)
    }
}

impl From<ArtistUri> for ContextUri {
    fn from(uri: ArtistUri) -> Self {
        Self::Artist(uri)
    }
}

impl From<ContextUri> for SpotifyUri {
    fn from(uri: ContextUri) -> Self {
        match uri {
            ContextUri::Playlist(uri) => Self::Playlist(uri),
            ContextUri::Album(uri) => Self::Album(uri),
            ContextUri::Artist(uri) => Self::Artist(uri),
        }
    }
}

impl TryFrom<SpotifyUri> for ContextUri {
    type Error = UriError;

    fn try_from(uri: SpotifyUri) -> Result<Self, Self::Error> {
        match uri {
            SpotifyUri::Playlist(uri) => Ok(Self::Playlist(uri)),
            SpotifyUri::Album(uri) => Ok(Self::Album(uri)),
            SpotifyUri::Artist(uri) => Ok(Self::Artist(uri)),
            other => Err(UriError::KindMismatch {
                expected: "context",
                actual: other.kind(),
            }),
        }
    }
}

impl fmt::Display for ContextUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for ContextUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl AsRef<str> for ContextUri {
    fn as_ref(&self) -> &str {
        self.uri()
    }
}

impl serde::Serialize for ContextUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.uri())
    }
}

impl<'de> serde::Deserialize<'de> for ContextUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::resolve(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_each_kind() {
        let cases = [
            ("spotify:playlist:66wcLiS5R50akaQ3onDyZd", ResourceKind::Playlist),
            ("spotify:album:0W0ag2P4h1Fmp7PnGJVvIJ", ResourceKind::Album),
            ("spotify:artist:1XLjkBxFokuDTlHt0mQkRe", ResourceKind::Artist),
        ];
        for (input, kind) in cases {
            let uri = ContextUri::resolve(input).unwrap();
            assert_eq!(uri.kind(), kind);
            assert_eq!(uri.uri(), input);
        }
    }

    #[test]
    fn test_resolve_user_playlist() {
        let uri = ContextUri::resolve(
            "spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83:playlist:66wcLiS5R50akaQ3onDyZd",
        )
        .unwrap();
        assert_eq!(uri.kind(), ResourceKind::Playlist);
        assert_eq!(uri.uri(), "spotify:playlist:66wcLiS5R50akaQ3onDyZd");
    }

    #[test]
    fn test_resolve_rejects_non_context() {
        let err = ContextUri::resolve("spotify:track:1Z9UVqWuRJ7zToOiVnlXRO").unwrap_err();
        assert_eq!(
            err,
            UriError::KindMismatch {
                expected: "context",
                actual: ResourceKind::Track,
            }
        );
        assert!(ContextUri::resolve("spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83")
            .unwrap_err()
            .is_kind_mismatch());
    }

    #[test]
    fn test_resolve_bare_id_is_ambiguous() {
        assert!(ContextUri::resolve("0W0ag2P4h1Fmp7PnGJVvIJ")
            .unwrap_err()
            .is_ambiguous());
    }

    #[test]
    fn test_json_roundtrip() {
        let uri = ContextUri::resolve("spotify:album:0W0ag2P4h1Fmp7PnGJVvIJ").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        let parsed: ContextUri = serde_json::from_str(&json).unwrap();
        assert_eq!(uri, parsed);
    }
}
