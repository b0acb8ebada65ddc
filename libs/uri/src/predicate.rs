//! Non-failing kind checks, usable as filter predicates.

use crate::grammar::{self, Scanned};
use crate::types::TypedUri;

/// True iff `input` is the canonical form of a `K`.
///
/// Bare ids return false even though `K::parse` would accept them.
pub fn is_type<K: TypedUri>(input: &str) -> bool {
    match grammar::scan(input) {
        Ok(Scanned::Canonical { kind, rest }) => grammar::extract(kind, rest, K::KIND).is_ok(),
        _ => false,
    }
}

/// True iff `input` would construct a `K`, canonical or bare.
pub fn can_be_type<K: TypedUri>(input: &str) -> bool {
    K::parse(input).is_ok()
}
