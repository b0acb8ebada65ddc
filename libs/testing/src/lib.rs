//! Test helpers shared by the workspace.
//!
//! Strategies here produce plain strings so that any crate can depend on this
//! one without a cycle through the URI types.

use proptest::prelude::*;

/// Catalog-style base62 id, as issued for tracks, albums, and the like.
pub fn base62_id() -> impl Strategy<Value = String> {
    "[0-9A-Za-z]{22}"
}

/// Any non-empty id segment that can stand alone as a bare id.
pub fn bare_id() -> impl Strategy<Value = String> {
    prop_oneof![base62_id(), "[^:]{1,40}"]
}

/// Legacy username ids are lowercase alphanumerics of varying length.
pub fn username() -> impl Strategy<Value = String> {
    "[a-z0-9._-]{1,30}"
}

/// The `artist:album:name:id` tuple carried by local track URIs.
///
/// Text fields may be empty, as they are for untagged files.
pub fn local_track_id() -> impl Strategy<Value = String> {
    (
        "[^:]{0,16}",
        "[^:]{0,16}",
        "[^:]{0,24}",
        0u32..3600,
    )
        .prop_map(|(artist, album, name, id)| format!("{artist}:{album}:{name}:{id}"))
}

/// A `(user, playlist)` id pair for user-embedded playlist URIs.
pub fn user_and_playlist() -> impl Strategy<Value = (String, String)> {
    (username(), base62_id())
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn bare_ids_have_no_delimiter(id in bare_id()) {
            prop_assert!(!id.is_empty());
            prop_assert!(!id.contains(':'));
        }

        #[test]
        fn local_ids_have_four_fields(id in local_track_id()) {
            prop_assert_eq!(id.split(':').count(), 4);
        }
    }
}
