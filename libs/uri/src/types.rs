//! Typed URI definitions for every resource kind.
//!
//! Each type stores the canonical string; the id is a slice of it.

use crate::macros::define_uri;
use crate::{ResourceKind, SpotifyUri, UriError};

mod sealed {
    pub trait Sealed {}
}

/// Common interface of the kind-specific URI types.
///
/// This trait is sealed; the set of kinds is closed.
pub trait TypedUri: sealed::Sealed + Sized + Into<SpotifyUri> {
    /// The resource kind every value of this type carries.
    const KIND: ResourceKind;

    /// Parses canonical or bare input as this kind.
    fn parse(input: &str) -> Result<Self, UriError>;

    /// The bare id segment.
    fn id(&self) -> &str;

    /// The canonical URI.
    fn uri(&self) -> &str;

    /// Widens into the polymorphic URI type.
    fn into_spotify_uri(self) -> SpotifyUri {
        self.into()
    }
}

// =============================================================================
// Playable
// =============================================================================

define_uri!(
    /// A catalog track, `spotify:track:<id>`.
    TrackUri,
    Track
);

define_uri!(
    /// A track from the user's local files, `spotify:local:<artist>:<album>:<name>:<id>`.
    ///
    /// The id is the whole local tuple, kept as one opaque segment.
    LocalTrackUri,
    LocalTrack
);

// =============================================================================
// Accounts
// =============================================================================

define_uri!(
    /// A user profile, `spotify:user:<id>`.
    ///
    /// The id may be empty. A trailing `:playlist:<id>` clause is dropped.
    UserUri,
    User
);

// =============================================================================
// Contexts
// =============================================================================

define_uri!(
    /// A playlist, `spotify:playlist:<id>` or `spotify:user:<user>:playlist:<id>`.
    PlaylistUri,
    Playlist
);

define_uri!(
    /// An album, `spotify:album:<id>`.
    AlbumUri,
    Album
);

define_uri!(
    /// An artist, `spotify:artist:<id>`.
    ArtistUri,
    Artist
);

// =============================================================================
// Tests
// =============================================================================
