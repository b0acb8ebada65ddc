//! Resource kinds addressable by a URI.

use std::fmt;
use std::str::FromStr;

use crate::UriError;

/// The namespace every canonical URI starts with.
pub const NAMESPACE: &str = "spotify";

/// The closed set of resource kinds a URI can denote.
///
/// Declaration order is significant: polymorphic resolution tries kinds in
/// this order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    Track,
    LocalTrack,
    User,
    Playlist,
    Album,
    Artist,
}

impl ResourceKind {
    /// All kinds, in resolution order.
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Track,
        ResourceKind::LocalTrack,
        ResourceKind::User,
        ResourceKind::Playlist,
        ResourceKind::Album,
        ResourceKind::Artist,
    ];

    /// The kind token used in the second URI segment.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            ResourceKind::Track => "track",
            ResourceKind::LocalTrack => "local",
            ResourceKind::User => "user",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Album => "album",
            ResourceKind::Artist => "artist",
        }
    }

    /// The canonical prefix, `spotify:<token>:`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            ResourceKind::Track => "spotify:track:",
            ResourceKind::LocalTrack => "spotify:local:",
            ResourceKind::User => "spotify:user:",
            ResourceKind::Playlist => "spotify:playlist:",
            ResourceKind::Album => "spotify:album:",
            ResourceKind::Artist => "spotify:artist:",
        }
    }

    /// Looks up a kind by its token. Tokens are case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.token() == token)
    }

    /// Whether the kind can be queued for playback.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        matches!(self, ResourceKind::Track | ResourceKind::LocalTrack)
    }

    /// Whether the kind can serve as a playback context.
    #[must_use]
    pub const fn is_context(self) -> bool {
        matches!(
            self,
            ResourceKind::Album | ResourceKind::Artist | ResourceKind::Playlist
        )
    }

    /// Whether an empty id is accepted for this kind.
    pub(crate) const fn allows_empty_id(self) -> bool {
        matches!(self, ResourceKind::User)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ResourceKind {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| UriError::UnknownKind {
            token: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_namespace_and_token() {
        for kind in ResourceKind::ALL {
            assert_eq!(
                kind.prefix(),
                format!("{}:{}:", NAMESPACE, kind.token()),
                "prefix mismatch for {kind:?}"
            );
        }
    }

    #[test]
    fn test_token_roundtrip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.token().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!(ResourceKind::from_token("Track").is_none());
        assert!(matches!(
            "TRACK".parse::<ResourceKind>(),
            Err(UriError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_all_tokens_unique() {
        let tokens: std::collections::HashSet<_> =
            ResourceKind::ALL.iter().map(|k| k.token()).collect();
        assert_eq!(tokens.len(), ResourceKind::ALL.len(), "Duplicate kind tokens found!");
    }

    #[test]
    fn test_playable_and_context_partition() {
        for kind in ResourceKind::ALL {
            assert!(!(kind.is_playable() && kind.is_context()));
        }
        assert!(!ResourceKind::User.is_playable());
        assert!(!ResourceKind::User.is_context());
    }
}
