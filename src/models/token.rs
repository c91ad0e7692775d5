//! Token type

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

/// A token type, identified by its mint. Immutable once constructed from its
/// record form; the engine compares tokens by mint only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub mint: Pubkey,
    pub symbol: String,
    pub decimals: u8,
    /// Set when this entry stands for the chain's native balance rather than
    /// a real SPL mint. Cleared by the wrapped-asset canonicalization.
    pub is_native: bool,
}

impl Token {
    pub fn new(mint: Pubkey, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            mint,
            symbol: symbol.into(),
            decimals,
            is_native: false,
        }
    }

    /// Identity comparison for engine purposes
    pub fn same_mint(&self, other: &Token) -> bool {
        self.mint == other.mint
    }
}
