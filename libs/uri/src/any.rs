//! The polymorphic URI type.

use std::fmt;
use std::str::FromStr;

use crate::grammar::{self, Identifier};
use crate::types::TypedUri;
use crate::{
    AlbumUri, ArtistUri, LocalTrackUri, PlayableUri, PlaylistUri, ResourceKind, TrackUri, UriError,
    UserUri,
};

/// A URI of any resource kind.
///
/// Constructing one from a string requires the fully qualified form: a bare
/// id carries no kind, so it is rejected with [`UriError::AmbiguousBareId`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpotifyUri {
    Track(TrackUri),
    LocalTrack(LocalTrackUri),
    User(UserUri),
    Playlist(PlaylistUri),
    Album(AlbumUri),
    Artist(ArtistUri),
}

impl SpotifyUri {
    /// Resolves a canonical URI to its concrete kind.
    ///
    /// Kinds are tried in [`ResourceKind::ALL`] order and the first match
    /// wins, so `spotify:user:<u>:playlist:<p>` resolves to a user.
    pub fn resolve(input: &str) -> Result<Self, UriError> {
        grammar::resolve_first(input, &ResourceKind::ALL, None, "any kind")
            .map(Self::from_identifier)
    }

    pub(crate) fn from_identifier(ident: Identifier<'_>) -> Self {
        match ident.kind {
            ResourceKind::Track => Self::Track(TrackUri::from_identifier(ident)),
            ResourceKind::LocalTrack => Self::LocalTrack(LocalTrackUri::from_identifier(ident)),
            ResourceKind::User => Self::User(UserUri::from_identifier(ident)),
            ResourceKind::Playlist => Self::Playlist(PlaylistUri::from_identifier(ident)),
            ResourceKind::Album => Self::Album(AlbumUri::from_identifier(ident)),
            ResourceKind::Artist => Self::Artist(ArtistUri::from_identifier(ident)),
        }
    }

    /// True iff `input` is in canonical form for `K`. Bare ids are never a type.
    pub fn is_type<K: TypedUri>(input: &str) -> bool {
        crate::predicate::is_type::<K>(input)
    }

    /// True iff `input` would construct a `K`, bare ids included.
    pub fn can_be_type<K: TypedUri>(input: &str) -> bool {
        crate::predicate::can_be_type::<K>(input)
    }

    /// Returns the resource kind.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Track(_) => ResourceKind::Track,
            Self::LocalTrack(_) => ResourceKind::LocalTrack,
            Self::User(_) => ResourceKind::User,
            Self::Playlist(_) => ResourceKind::Playlist,
            Self::Album(_) => ResourceKind::Album,
            Self::Artist(_) => ResourceKind::Artist,
        }
    }

    /// Returns the bare id segment.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Track(uri) => uri.id(),
            Self::LocalTrack(uri) => uri.id(),
            Self::User(uri) => uri.id(),
            Self::Playlist(uri) => uri.id(),
            Self::Album(uri) => uri.id(),
            Self::Artist(uri) => uri.id(),
        }
    }

    /// Returns the canonical URI.
    #[must_use]
    pub fn uri(&self) -> &str {
        match self {
            Self::Track(uri) => uri.uri(),
            Self::LocalTrack(uri) => uri.uri(),
            Self::User(uri) => uri.uri(),
            Self::Playlist(uri) => uri.uri(),
            Self::Album(uri) => uri.uri(),
            Self::Artist(uri) => uri.uri(),
        }
    }

    /// Narrows to a playable URI, if this is one.
    #[must_use]
    pub fn as_playable(&self) -> Option<PlayableUri> {
        PlayableUri::try_from(self.clone()).ok()
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

impl FromStr for SpotifyUri {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}

impl TryFrom<&str> for SpotifyUri {
    type Error = UriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::resolve(s)
    }
}

impl AsRef<str> for SpotifyUri {
    fn as_ref(&self) -> &str {
        self.uri()
    }
}

impl serde::Serialize for SpotifyUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.uri())
    }
}

impl<'de> serde::Deserialize<'de> for SpotifyUri {
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
    fn test_resolve_track() {
        let uri = SpotifyUri::resolve("spotify:track:1Z9UVqWuRJ7zToOiVnlXRO").unwrap();
        assert_eq!(uri.kind(), ResourceKind::Track);
        assert_eq!(uri.id(), "1Z9UVqWuRJ7zToOiVnlXRO");
        assert!(matches!(uri, SpotifyUri::Track(_)));
    }

    #[test]
    fn test_resolve_user() {
        let uri = SpotifyUri::resolve("spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83").unwrap();
        assert!(matches!(uri, SpotifyUri::User(_)));
        assert_eq!(uri.uri(), "spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83");
    }

    #[test]
    fn test_resolve_user_playlist_prefers_user() {
        let uri = SpotifyUri::resolve(
            "spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83:playlist:66wcLiS5R50akaQ3onDyZd",
        )
        .unwrap();
        assert_eq!(uri.kind(), ResourceKind::User);
        assert_eq!(uri.id(), "7r7uq6qxa4ymx3wnjd9mm6i83");
    }

    #[test]
    fn test_resolve_local_track() {
        let uri = SpotifyUri::resolve("spotify:local:artist:album:name:id").unwrap();
        assert_eq!(uri.kind(), ResourceKind::LocalTrack);
        assert_eq!(uri.id(), "artist:album:name:id");
    }

    #[test]
    fn test_resolve_bare_id_is_ambiguous() {
        let err = SpotifyUri::resolve("1Z9UVqWuRJ7zToOiVnlXRO").unwrap_err();
        assert_eq!(
            err,
            UriError::AmbiguousBareId {
                id: "1Z9UVqWuRJ7zToOiVnlXRO".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_errors() {
        assert!(matches!(
            SpotifyUri::resolve("a:invalid"),
            Err(UriError::InvalidNamespace { .. })
        ));
        assert!(matches!(
            SpotifyUri::resolve("spotify:show:abc"),
            Err(UriError::UnknownKind { .. })
        ));
        assert!(matches!(
            SpotifyUri::resolve("spotify:local:a:b"),
            Err(UriError::MalformedLocalTrack { .. })
        ));
        assert_eq!(SpotifyUri::resolve("spotify:album:"), Err(UriError::Empty));
    }

    #[test]
    fn test_display_matches_uri() {
        let uri: SpotifyUri = "spotify:artist:1XLjkBxFokuDTlHt0mQkRe".parse().unwrap();
        assert_eq!(uri.to_string(), "spotify:artist:1XLjkBxFokuDTlHt0mQkRe");
    }

    #[test]
    fn test_as_playable() {
        let track = SpotifyUri::resolve("spotify:track:1Z9UVqWuRJ7zToOiVnlXRO").unwrap();
        assert!(track.as_playable().is_some());
        let album = SpotifyUri::resolve("spotify:album:0W0ag2P4h1Fmp7PnGJVvIJ").unwrap();
        assert!(album.as_playable().is_none());
    }

    #[test]
    fn test_json_deserialize_user() {
        let uri: SpotifyUri =
            serde_json::from_str("\"spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83\"").unwrap();
        assert!(matches!(uri, SpotifyUri::User(_)));
        assert_eq!(uri.uri(), "spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83");
    }

    #[test]
    fn test_json_deserialize_bare_id_fails() {
        let result: Result<SpotifyUri, _> = serde_json::from_str("\"7r7uq6qxa4ymx3wnjd9mm6i83\"");
        assert!(result.unwrap_err().to_string().contains("ambiguous bare id"));
    }

    #[test]
    fn test_json_roundtrip() {
        let uri = SpotifyUri::resolve("spotify:playlist:66wcLiS5R50akaQ3onDyZd").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        let parsed: SpotifyUri = serde_json::from_str(&json).unwrap();
        assert_eq!(uri, parsed);
    }
}
