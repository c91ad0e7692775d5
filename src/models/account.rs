//! Wallet token-account type

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use super::token::Token;

/// A wallet holding of one token. The address is optional because a holding
/// may exist only as a prospective/derived entry before an on-chain account
/// has been created for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenAccount {
    pub address: Option<Pubkey>,
    pub token: Token,
    /// Raw balance in the token's smallest unit
    pub balance: u64,
}

impl TokenAccount {
    pub fn new(address: Option<Pubkey>, token: Token, balance: u64) -> Self {
        Self {
            address,
            token,
            balance,
        }
    }

    pub fn same_token(&self, token: &Token) -> bool {
        self.token.mint == token.mint
    }

    /// Full identity match: same mint and same address. Used when rebinding
    /// a held reference against a refreshed list.
    pub fn matches(&self, other: &TokenAccount) -> bool {
        self.token.mint == other.token.mint && self.address == other.address
    }

    /// Balance at the token's decimal scale. Display only; all conversion
    /// math stays in raw units.
    pub fn balance_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.balance), u32::from(self.token.decimals))
    }
}
