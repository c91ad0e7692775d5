//! Snapshot normalization
//!
//! The orchestration step every transition funnels through. Order matters:
//! merge, rebind accounts, re-select the pool, re-derive the pool-token
//! account, then recompute the driven amount. Each step feeds the next, and
//! the derived fields are never trusted from the previous snapshot.

use crate::models::{StatePatch, TokenAccount, TokenPairState};

use super::convert::convert;
use super::select::{select_account_for_mint, select_pool};

/// Merge a partial update over the previous snapshot and re-derive every
/// dependent field, returning a new fully consistent snapshot. Total; any
/// missing piece degrades to `None`/zero.
pub fn normalize(previous: &TokenPairState, patch: StatePatch) -> TokenPairState {
    // Which amount drives is decided by what the patch touched, before the
    // patch is consumed by the merge. An edit to first_amount or
    // second_token invalidates second_amount; an edit to second_amount or
    // first_token invalidates first_amount. First matching rule wins.
    let drives_second = patch.first_amount.is_some() || patch.second_token.is_some();
    let drives_first = patch.second_amount.is_some() || patch.first_token.is_some();

    let mut next = merge(previous, patch);

    next.first_token_account = rebind(&next.token_accounts, next.first_token_account.as_ref());
    next.second_token_account = rebind(&next.token_accounts, next.second_token_account.as_ref());

    next.selected_pool = select_pool(
        &next.available_pools,
        next.first_token.as_ref(),
        next.second_token.as_ref(),
    )
    .cloned();

    next.pool_token_account = next
        .selected_pool
        .as_ref()
        .and_then(|pool| select_account_for_mint(&pool.pool_token_mint, &next.token_accounts, false));

    if drives_second {
        next.second_amount = convert(
            next.first_amount,
            next.first_token.as_ref(),
            next.selected_pool.as_ref(),
        );
    } else if drives_first {
        next.first_amount = convert(
            next.second_amount,
            next.second_token.as_ref(),
            next.selected_pool.as_ref(),
        );
    }

    next
}

fn merge(previous: &TokenPairState, patch: StatePatch) -> TokenPairState {
    let mut next = previous.clone();
    if let Some(token) = patch.first_token {
        next.first_token = Some(token);
    }
    if let Some(token) = patch.second_token {
        next.second_token = Some(token);
    }
    if let Some(account) = patch.first_token_account {
        next.first_token_account = Some(account);
    }
    if let Some(account) = patch.second_token_account {
        next.second_token_account = Some(account);
    }
    if let Some(amount) = patch.first_amount {
        next.first_amount = amount;
    }
    if let Some(amount) = patch.second_amount {
        next.second_amount = amount;
    }
    if let Some(accounts) = patch.token_accounts {
        next.token_accounts = accounts;
    }
    if let Some(pools) = patch.available_pools {
        next.available_pools = pools;
    }
    if let Some(slippage) = patch.slippage {
        next.slippage = slippage;
    }
    next
}

/// Look the bound account up fresh in the current list by (mint, address).
/// A miss unbinds: the engine never keeps a stale instance alive.
fn rebind(accounts: &[TokenAccount], bound: Option<&TokenAccount>) -> Option<TokenAccount> {
    let bound = bound?;
    accounts
        .iter()
        .find(|account| account.matches(bound))
        .cloned()
}
