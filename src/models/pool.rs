//! Liquidity pool type and reserve-ratio math

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::constants::BPS_DENOMINATOR;

use super::token::Token;

/// Which side of a pool a token occupies
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PoolSide {
    A,
    B,
}

/// An on-chain liquidity pair holding reserves of two distinct tokens, used
/// to price conversion between them. The pair is unordered for lookup
/// purposes: a request for (A, B) matches regardless of which side is which.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pool {
    pub address: Pubkey,
    pub token_a: Token,
    pub token_b: Token,
    pub reserve_a: u64,
    pub reserve_b: u64,
    /// Mint of the pool's own liquidity token
    pub pool_token_mint: Pubkey,
    pub fee_bps: u16,
}

impl Pool {
    /// Unordered pair match by mint on both sides
    pub fn matches(&self, first: &Token, second: &Token) -> bool {
        (self.token_a.same_mint(first) && self.token_b.same_mint(second))
            || (self.token_a.same_mint(second) && self.token_b.same_mint(first))
    }

    pub fn side_of(&self, token: &Token) -> Option<PoolSide> {
        if self.token_a.same_mint(token) {
            Some(PoolSide::A)
        } else if self.token_b.same_mint(token) {
            Some(PoolSide::B)
        } else {
            None
        }
    }

    /// The constituent opposite the given token, if the token is part of
    /// this pool
    pub fn other_token(&self, token: &Token) -> Option<&Token> {
        match self.side_of(token)? {
            PoolSide::A => Some(&self.token_b),
            PoolSide::B => Some(&self.token_a),
        }
    }

    /// Convert a raw amount entering on `from` into the amount leaving the
    /// other side at the current reserve ratio. The swap fee is taken once,
    /// on the output amount, with ceiling rounding to match on-chain
    /// accounting. A drained source reserve prices everything at zero.
    pub fn rate_convert(&self, amount_in: u64, from: PoolSide) -> u64 {
        let (reserve_in, reserve_out) = match from {
            PoolSide::A => (self.reserve_a, self.reserve_b),
            PoolSide::B => (self.reserve_b, self.reserve_a),
        };
        if reserve_in == 0 {
            return 0;
        }

        let gross = u128::from(amount_in)
            .saturating_mul(u128::from(reserve_out))
            / u128::from(reserve_in);

        // fee = ceil(gross * fee_bps / 10000)
        let fee = gross
            .saturating_mul(u128::from(self.fee_bps))
            .saturating_add(BPS_DENOMINATOR - 1)
            / BPS_DENOMINATOR;
        let net = gross.saturating_sub(fee);

        u64::try_from(net).unwrap_or(u64::MAX)
    }
}
