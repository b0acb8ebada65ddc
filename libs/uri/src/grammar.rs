//! URI grammar and raw parser.
//!
//! ```text
//! spotify ":" <kind-token> ":" <id>
//! spotify ":local:" <artist> ":" <album> ":" <name> ":" <id>
//! spotify ":user:" <user-id> [":playlist:" <playlist-id>]
//! <id>                                        bare id, no ':'
//! ```
//!
//! Everything else in the crate parses through [`parse`] or the
//! crate-private helpers here.

use crate::{ResourceKind, UriError, NAMESPACE};

/// Clause that embeds a playlist reference inside a user URI.
const EMBEDDED_PLAYLIST: &str = ":playlist:";

/// A validated `(kind, id)` pair borrowed from the parsed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier<'a> {
    pub kind: ResourceKind,
    pub id: &'a str,
}

/// First-pass classification of an input, independent of the caller's target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scanned<'a> {
    /// `spotify:<token>:<rest>` with a recognized token.
    Canonical { kind: ResourceKind, rest: &'a str },
    /// No delimiter at all.
    Bare(&'a str),
}

pub(crate) fn scan(input: &str) -> Result<Scanned<'_>, UriError> {
    if input.is_empty() {
        return Err(UriError::Empty);
    }

    let Some((namespace, tail)) = input.split_once(':') else {
        return Ok(Scanned::Bare(input));
    };

    if namespace != NAMESPACE {
        return Err(UriError::InvalidNamespace {
            expected: NAMESPACE,
            actual: namespace.to_string(),
        });
    }

    let Some((token, rest)) = tail.split_once(':') else {
        return Err(match ResourceKind::from_token(tail) {
            Some(_) => UriError::MissingSeparator,
            None => UriError::UnknownKind {
                token: tail.to_string(),
            },
        });
    };

    let kind = token.parse::<ResourceKind>()?;
    Ok(Scanned::Canonical { kind, rest })
}

/// Parses `input` as an identifier of kind `expected`.
///
/// Canonical input must carry the prefix of `expected` (or, for playlists,
/// the user-embedded playlist form). Input with no `:` is taken as a bare id
/// of `expected`.
///
/// # Errors
///
/// Returns [`UriError::KindMismatch`] when the input names another kind,
/// [`UriError::UnknownKind`] for an unrecognized kind token, and the
/// remaining [`UriError`] variants for malformed input.
pub fn parse(input: &str, expected: ResourceKind) -> Result<Identifier<'_>, UriError> {
    let id = match scan(input)? {
        Scanned::Bare(id) => {
            validate_id(expected, id)?;
            id
        }
        Scanned::Canonical { kind, rest } => extract(kind, rest, expected)?,
    };

    Ok(Identifier { kind: expected, id })
}

/// Pulls the id for `expected` out of a canonical URI of kind `kind`.
pub(crate) fn extract(
    kind: ResourceKind,
    rest: &str,
    expected: ResourceKind,
) -> Result<&str, UriError> {
    let id = match (kind, expected) {
        (ResourceKind::User, ResourceKind::User) => rest
            .split_once(EMBEDDED_PLAYLIST)
            .map_or(rest, |(user, _)| user),
        (ResourceKind::User, ResourceKind::Playlist) => rest
            .split_once(EMBEDDED_PLAYLIST)
            .map(|(_, playlist)| playlist)
            .ok_or_else(|| mismatch(expected.token(), kind))?,
        (actual, expected) if actual == expected => rest,
        (actual, expected) => return Err(mismatch(expected.token(), actual)),
    };

    validate_id(expected, id)?;
    Ok(id)
}

/// Checks the id segment rules for `kind`.
///
/// Ids are otherwise opaque: no character set or length is enforced.
pub(crate) fn validate_id(kind: ResourceKind, id: &str) -> Result<(), UriError> {
    if id.is_empty() && !kind.allows_empty_id() {
        return Err(UriError::Empty);
    }

    // A local id is either one opaque segment or artist:album:name:id.
    if kind == ResourceKind::LocalTrack && matches!(id.matches(':').count(), 1 | 2) {
        return Err(UriError::MalformedLocalTrack { id: id.to_string() });
    }

    // Would re-parse as a shorter user id.
    if kind == ResourceKind::User && id.contains(EMBEDDED_PLAYLIST) {
        return Err(UriError::EmbeddedPlaylist { id: id.to_string() });
    }

    Ok(())
}

/// Resolves canonical input against `candidates`, first match wins.
///
/// Bare ids resolve to `bare_default` when given and are ambiguous
/// otherwise. `label` names the accepted set in mismatch errors.
pub(crate) fn resolve_first<'a>(
    input: &'a str,
    candidates: &[ResourceKind],
    bare_default: Option<ResourceKind>,
    label: &'static str,
) -> Result<Identifier<'a>, UriError> {
    let result = resolve_candidates(input, candidates, bare_default, label);

    match &result {
        Ok(ident) => tracing::trace!(input, kind = %ident.kind, accepts = label, "resolved uri"),
        Err(err) => tracing::debug!(input, error = %err, accepts = label, "failed to resolve uri"),
    }

    result
}

fn resolve_candidates<'a>(
    input: &'a str,
    candidates: &[ResourceKind],
    bare_default: Option<ResourceKind>,
    label: &'static str,
) -> Result<Identifier<'a>, UriError> {
    let (kind, rest) = match scan(input)? {
        Scanned::Canonical { kind, rest } => (kind, rest),
        Scanned::Bare(id) => {
            let Some(kind) = bare_default else {
                return Err(UriError::AmbiguousBareId { id: id.to_string() });
            };
            validate_id(kind, id)?;
            return Ok(Identifier { kind, id });
        }
    };

    for &candidate in candidates {
        match extract(kind, rest, candidate) {
            Ok(id) => return Ok(Identifier { kind: candidate, id }),
            Err(UriError::KindMismatch { .. }) => continue,
            Err(err) => return Err(err),
        }
    }

    Err(mismatch(label, kind))
}

fn mismatch(expected: &'static str, actual: ResourceKind) -> UriError {
    UriError::KindMismatch { expected, actual }
}
