//! # spotify-uri
//!
//! Typed URI parsing, validation, and serialization for the Spotify catalog.
//!
//! ## Design Principles
//!
//! - Every URI type holds a value that satisfies the grammar; there is no
//!   way to observe a partially valid URI
//! - All URIs have a canonical string representation that roundtrips
//!   (parse → format → parse)
//! - URIs are typed to prevent mixing different resource kinds
//! - Ids are opaque: no character set or length is enforced
//!
//! ## URI Format
//!
//! Canonical URIs use the form `spotify:{kind}:{id}`.
//!
//! Examples:
//! - `spotify:track:1Z9UVqWuRJ7zToOiVnlXRO`
//! - `spotify:local:artist:album:name:180`
//! - `spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83:playlist:66wcLiS5R50akaQ3onDyZd`
//!
//! A kind-specific type also accepts a bare id (`1Z9UVqWuRJ7zToOiVnlXRO`).
//! [`SpotifyUri`] does not, since a bare id does not say which kind it is.
//!
//! ```
//! use spotify_uri::{PlayableUri, SpotifyUri, TrackUri, UserUri};
//!
//! let track = TrackUri::parse("1Z9UVqWuRJ7zToOiVnlXRO").unwrap();
//! assert_eq!(track.uri(), "spotify:track:1Z9UVqWuRJ7zToOiVnlXRO");
//!
//! let any = SpotifyUri::resolve("spotify:user:7r7uq6qxa4ymx3wnjd9mm6i83").unwrap();
//! assert!(matches!(any, SpotifyUri::User(_)));
//!
//! assert!(matches!(
//!     PlayableUri::resolve("spotify:local:1Z9UVqWuRJ7zToOiVnlXRO").unwrap(),
//!     PlayableUri::LocalTrack(_)
//! ));
//! assert!(SpotifyUri::can_be_type::<UserUri>("7r7uq6qxa4ymx3wnjd9mm6i83"));
//! ```

mod any;
mod context;
mod error;
mod grammar;
mod kind;
mod macros;
mod playable;
mod predicate;
mod types;

pub use any::SpotifyUri;
pub use context::ContextUri;
pub use error::UriError;
pub use grammar::{parse, Identifier};
pub use kind::{ResourceKind, NAMESPACE};
pub use playable::PlayableUri;
pub use predicate::{can_be_type, is_type};
pub use types::*;
