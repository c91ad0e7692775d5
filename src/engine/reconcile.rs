//! Entity reconciliation across refreshed lists

use solana_sdk::pubkey::Pubkey;

use crate::models::{Pool, TokenAccount};

/// Entities that can be reconciled into a held list by identity key
pub trait Identified {
    type Key: PartialEq;

    fn identity(&self) -> Self::Key;
}

// The mint is part of the key so prospective accounts (no address yet) of
// different tokens never collide with each other.
impl Identified for TokenAccount {
    type Key = (Option<Pubkey>, Pubkey);

    fn identity(&self) -> Self::Key {
        (self.address, self.token.mint)
    }
}

impl Identified for Pool {
    type Key = Pubkey;

    fn identity(&self) -> Self::Key {
        self.address
    }
}

/// Merge a single updated entity into the held list: replace in place when an
/// entry with the same identity exists (position preserved), append
/// otherwise. Never removes an entry; absence of a match is expected.
pub fn reconcile<E: Identified + Clone>(updated: E, current: &[E]) -> Vec<E> {
    let mut out = current.to_vec();
    match out.iter().position(|e| e.identity() == updated.identity()) {
        Some(index) => out[index] = updated,
        None => out.push(updated),
    }
    out
}

/// Full refresh: the refreshed list is the source of truth and replaces the
/// whole collection. Intentionally not a merge.
pub fn reconcile_all<E>(updated: Vec<E>, _current: &[E]) -> Vec<E> {
    updated
}
