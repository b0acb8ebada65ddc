//! Macros for defining typed URI types.

/// Macro to define a typed URI wrapper for one resource kind.
///
/// This generates a newtype holding the canonical string with:
/// - `KIND` and `PREFIX` constants
/// - `parse()` accepting canonical or bare input
/// - `from_id()` to build from an id segment
/// - `id()` and `uri()` accessors
/// - `Display`, `FromStr`, `TryFrom`, and `AsRef<str>` implementations
/// - `Serialize` and `Deserialize` implementations
/// - the sealed [`TypedUri`](crate::TypedUri) implementation
///
/// # Example
///
/// ```ignore
/// define_uri!(AlbumUri, Album);
///
/// let album: AlbumUri = "spotify:album:0W0ag2P4h1Fmp7PnGJVvIJ".parse()?;
/// assert_eq!(album.id(), "0W0ag2P4h1Fmp7PnGJVvIJ");
/// ```
macro_rules! define_uri {
    ($(#[$meta:meta])* $name:ident, $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// The resource kind of this URI type.
            pub const KIND: $crate::ResourceKind = $crate::ResourceKind::$kind;

            /// The canonical prefix for this URI type.
            pub const PREFIX: &'static str = $crate::ResourceKind::$kind.prefix();

            /// Parses a URI from a string.
            ///
            /// Accepts the canonical form or a bare id.
            pub fn parse(s: &str) -> Result<Self, $crate::UriError> {
                $crate::grammar::parse(s, Self::KIND).map(Self::from_identifier)
            }

            /// Builds a URI from an id segment.
            ///
            /// Unlike [`Self::parse`], the id is never interpreted as a URI, so
            /// a local track tuple can be passed without its prefix.
            pub fn from_id(id: &str) -> Result<Self, $crate::UriError> {
                $crate::grammar::validate_id(Self::KIND, id)?;
                Ok(Self(format!("{}{}", Self::PREFIX, id)))
            }

            pub(crate) fn from_identifier(ident: $crate::Identifier<'_>) -> Self {
                debug_assert_eq!(ident.kind, Self::KIND);
                Self(format!("{}{}", Self::PREFIX, ident.id))
            }

            /// Returns the bare id segment.
            #[must_use]
            pub fn id(&self) -> &str {
                &self.0[Self::PREFIX.len()..]
            }

            /// Returns the canonical URI.
            #[must_use]
            pub fn uri(&self) -> &str {
                &self.0
            }

            /// Returns the resource kind.
            #[must_use]
            pub const fn kind(&self) -> $crate::ResourceKind {
                Self::KIND
            }

            /// Consumes the URI, returning the canonical string.
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UriError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::UriError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::UriError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::parse(&s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(uri: $name) -> Self {
                uri.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl sealed::Sealed for $name {}

        impl $crate::TypedUri for $name {
            const KIND: $crate::ResourceKind = $crate::ResourceKind::$kind;

            fn parse(input: &str) -> Result<Self, $crate::UriError> {
                <$name>::parse(input)
            }

            fn id(&self) -> &str {
                <$name>::id(self)
            }

            fn uri(&self) -> &str {
                <$name>::uri(self)
            }
        }

        impl From<$name> for $crate::SpotifyUri {
            fn from(uri: $name) -> Self {
                $crate::SpotifyUri::$kind(uri)
            }
        }
    };
}

pub(crate) use define_uri;
