//! Deterministic pool and account selection

use solana_sdk::pubkey::Pubkey;

use crate::models::{Pool, Token, TokenAccount};

/// Pick the pool connecting the given token pair, if any. The pair is
/// unordered; the first matching pool in list order wins, so list order is a
/// caller-visible contract, not an implementation detail.
pub fn select_pool<'a>(
    pools: &'a [Pool],
    first: Option<&Token>,
    second: Option<&Token>,
) -> Option<&'a Pool> {
    let first = first?;
    let second = second?;
    pools.iter().find(|pool| pool.matches(first, second))
}

/// Pick the wallet account holding the given mint, preferring the largest
/// balance (first in list order among equals). With `require_balance`,
/// empty accounts are skipped entirely.
pub fn select_account_for_mint(
    mint: &Pubkey,
    accounts: &[TokenAccount],
    require_balance: bool,
) -> Option<TokenAccount> {
    accounts
        .iter()
        .filter(|account| account.token.mint == *mint)
        .filter(|account| !require_balance || account.balance > 0)
        .fold(None, |best: Option<&TokenAccount>, account| match best {
            Some(held) if held.balance >= account.balance => Some(held),
            _ => Some(account),
        })
        .cloned()
}
