//! Synchronization reducers
//!
//! The transition entry points the UI and the refresh collaborators call.
//! Every transition is total and synchronous: it consumes the latest
//! snapshot and returns a new one, re-deriving all dependent fields through
//! [`normalize`]. Record-level variants decode the collaborator payloads
//! first, skipping entries that fail to decode.

pub mod convert;
pub mod normalize;
pub mod reconcile;
pub mod select;

use tracing::{debug, warn};

use crate::constants::{NATIVE_MINT, WRAPPED_NATIVE_MINT, WRAPPED_NATIVE_SYMBOL};
use crate::models::{
    Pool, PoolRecord, StatePatch, Token, TokenAccount, TokenAccountRecord, TokenPairState,
};

pub use convert::convert;
pub use normalize::normalize;
pub use reconcile::{reconcile, reconcile_all, Identified};
pub use select::{select_account_for_mint, select_pool};

/// Re-label a native-asset account as its wrapped representation before it
/// enters the held list, so native and wrapped balances never show up as
/// distinct swap entries.
pub fn canonicalize_native(account: TokenAccount) -> TokenAccount {
    if account.token.mint != NATIVE_MINT {
        return account;
    }
    TokenAccount {
        token: Token {
            mint: WRAPPED_NATIVE_MINT,
            symbol: WRAPPED_NATIVE_SYMBOL.to_string(),
            decimals: account.token.decimals,
            is_native: false,
        },
        ..account
    }
}

/// Wallet delivered a full token-account list: replace the held list
/// wholesale and re-derive.
pub fn accounts_refreshed(
    state: &TokenPairState,
    accounts: Vec<TokenAccount>,
) -> TokenPairState {
    debug!(count = accounts.len(), "token accounts refreshed");
    let accounts: Vec<TokenAccount> = accounts.into_iter().map(canonicalize_native).collect();
    let merged = reconcile_all(accounts, &state.token_accounts);
    normalize(state, StatePatch::new().with_token_accounts(merged))
}

/// Market data delivered a full pool list: replace wholesale and re-derive.
pub fn pools_refreshed(state: &TokenPairState, pools: Vec<Pool>) -> TokenPairState {
    debug!(count = pools.len(), "pools refreshed");
    let merged = reconcile_all(pools, &state.available_pools);
    normalize(state, StatePatch::new().with_available_pools(merged))
}

/// A single token account changed: reconcile it into the held list by
/// identity and re-derive.
pub fn account_updated(state: &TokenPairState, account: TokenAccount) -> TokenPairState {
    let account = canonicalize_native(account);
    debug!(address = ?account.address, "token account updated");
    let merged = reconcile(account, &state.token_accounts);
    normalize(state, StatePatch::new().with_token_accounts(merged))
}

/// A single pool changed: reconcile by identity and re-derive.
pub fn pool_updated(state: &TokenPairState, pool: Pool) -> TokenPairState {
    debug!(address = %pool.address, "pool updated");
    let merged = reconcile(pool, &state.available_pools);
    normalize(state, StatePatch::new().with_available_pools(merged))
}

/// User edited swap fields (amount typed, token picked): normalize with the
/// partial directly.
pub fn fields_edited(state: &TokenPairState, patch: StatePatch) -> TokenPairState {
    normalize(state, patch)
}

/// Reset to the empty-swap shape. The held token-account and pool lists came
/// from external refreshes, not user edits, and survive the clear.
pub fn cleared(state: &TokenPairState) -> TokenPairState {
    TokenPairState {
        token_accounts: state.token_accounts.clone(),
        available_pools: state.available_pools.clone(),
        slippage: state.slippage,
        ..TokenPairState::default()
    }
}

/// Decode and apply a full token-account refresh payload. Undecodable
/// records are logged and skipped; the transition itself never fails.
pub fn accounts_refreshed_records(
    state: &TokenPairState,
    records: &[TokenAccountRecord],
) -> TokenPairState {
    let accounts = records
        .iter()
        .filter_map(|record| match TokenAccount::try_from(record) {
            Ok(account) => Some(account),
            Err(e) => {
                warn!(error = %e, "skipping token account record");
                None
            }
        })
        .collect();
    accounts_refreshed(state, accounts)
}

/// Decode and apply a full pool refresh payload
pub fn pools_refreshed_records(
    state: &TokenPairState,
    records: &[PoolRecord],
) -> TokenPairState {
    let pools = records
        .iter()
        .filter_map(|record| match Pool::try_from(record) {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(error = %e, "skipping pool record");
                None
            }
        })
        .collect();
    pools_refreshed(state, pools)
}

/// Decode and apply a single-account update. An undecodable record leaves
/// the snapshot unchanged.
pub fn account_updated_record(
    state: &TokenPairState,
    record: &TokenAccountRecord,
) -> TokenPairState {
    match TokenAccount::try_from(record) {
        Ok(account) => account_updated(state, account),
        Err(e) => {
            warn!(error = %e, "ignoring token account update");
            state.clone()
        }
    }
}

/// Decode and apply a single-pool update. An undecodable record leaves the
/// snapshot unchanged.
pub fn pool_updated_record(state: &TokenPairState, record: &PoolRecord) -> TokenPairState {
    match Pool::try_from(record) {
        Ok(pool) => pool_updated(state, pool),
        Err(e) => {
            warn!(error = %e, "ignoring pool update");
            state.clone()
        }
    }
}
