//! End-to-end reducer tests for the swap engine

use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

use swap_pair_engine::{
    account_updated, accounts_refreshed, cleared, fields_edited, pool_updated, pools_refreshed,
    Pool, StatePatch, Token, TokenAccount, TokenPairState,
};

/// Six-decimal test token with a distinct mint per byte tag
fn token(mint_byte: u8, symbol: &str) -> Token {
    Token::new(Pubkey::new_from_array([mint_byte; 32]), symbol, 6)
}

fn account(address_byte: u8, token: Token, balance: u64) -> TokenAccount {
    TokenAccount::new(
        Some(Pubkey::new_from_array([address_byte; 32])),
        token,
        balance,
    )
}

fn pool(address_byte: u8, token_a: Token, token_b: Token, reserve_a: u64, reserve_b: u64) -> Pool {
    Pool {
        address: Pubkey::new_from_array([address_byte; 32]),
        token_a,
        token_b,
        reserve_a,
        reserve_b,
        pool_token_mint: Pubkey::new_from_array([address_byte.wrapping_add(100); 32]),
        fee_bps: 0,
    }
}

/// Snapshot with tokens A/B selected and one connecting pool held
fn swap_ready_state() -> TokenPairState {
    let a = token(1, "AAA");
    let b = token(2, "BBB");
    let p = pool(10, a.clone(), b.clone(), 100_000_000, 200_000_000);

    let state = pools_refreshed(&TokenPairState::default(), vec![p]);
    fields_edited(
        &state,
        StatePatch::new()
            .with_first_token(a)
            .with_second_token(b),
    )
}

#[test]
fn editing_first_amount_recomputes_second() {
    let state = swap_ready_state();
    let state = fields_edited(&state, StatePatch::new().with_first_amount(Decimal::from(10)));

    assert!(state.selected_pool.is_some());
    assert_eq!(state.second_amount, Decimal::from(20));
}

#[test]
fn editing_second_amount_recomputes_first() {
    let state = swap_ready_state();
    let state = fields_edited(&state, StatePatch::new().with_second_amount(Decimal::from(20)));

    assert_eq!(state.first_amount, Decimal::from(10));
}

#[test]
fn picking_second_token_invalidates_second_amount() {
    let a = token(1, "AAA");
    let c = token(3, "CCC");
    let p = pool(11, a.clone(), c.clone(), 100_000_000, 400_000_000);

    let state = swap_ready_state();
    let state = pool_updated(&state, p);
    let state = fields_edited(&state, StatePatch::new().with_first_amount(Decimal::from(10)));
    assert_eq!(state.second_amount, Decimal::from(20));

    // switching the second token re-drives from first_amount through the
    // newly selected pool
    let state = fields_edited(&state, StatePatch::new().with_second_token(c));
    assert_eq!(state.second_amount, Decimal::from(40));
}

#[test]
fn empty_patch_is_idempotent() {
    let state = fields_edited(
        &swap_ready_state(),
        StatePatch::new().with_first_amount(Decimal::from(10)),
    );
    let renormalized = fields_edited(&state, StatePatch::new());

    assert_eq!(renormalized, state);
}

#[test]
fn no_pool_for_pair_degrades_to_zero() {
    let a = token(1, "AAA");
    let d = token(4, "DDD");
    let state = fields_edited(
        &TokenPairState::default(),
        StatePatch::new().with_first_token(a).with_second_token(d),
    );
    let state = fields_edited(&state, StatePatch::new().with_first_amount(Decimal::from(10)));

    assert!(state.selected_pool.is_none());
    assert_eq!(state.second_amount, Decimal::ZERO);
}

#[test]
fn accounts_refresh_rebinds_to_fresh_instances() {
    let a = token(1, "AAA");
    let state = swap_ready_state();
    let state = accounts_refreshed(&state, vec![account(20, a.clone(), 500)]);
    let state = fields_edited(
        &state,
        StatePatch::new().with_first_token_account(account(20, a.clone(), 500)),
    );
    assert_eq!(state.first_token_account.as_ref().unwrap().balance, 500);

    // a later refresh carries a new balance for the same account
    let state = accounts_refreshed(&state, vec![account(20, a, 750)]);
    assert_eq!(state.first_token_account.as_ref().unwrap().balance, 750);
}

#[test]
fn empty_accounts_refresh_unbinds() {
    let a = token(1, "AAA");
    let state = swap_ready_state();
    let state = accounts_refreshed(&state, vec![account(20, a.clone(), 500)]);
    let state = fields_edited(
        &state,
        StatePatch::new().with_first_token_account(account(20, a, 500)),
    );
    assert!(state.first_token_account.is_some());

    let state = accounts_refreshed(&state, vec![]);
    assert!(state.first_token_account.is_none());
    assert!(state.token_accounts.is_empty());
}

#[test]
fn pool_token_account_derived_from_selected_pool() {
    let a = token(1, "AAA");
    let b = token(2, "BBB");
    let p = pool(10, a.clone(), b.clone(), 100, 200);
    let lp_token = Token::new(p.pool_token_mint, "LP", 6);

    let state = pools_refreshed(&TokenPairState::default(), vec![p]);
    // zero balance still binds: the wallet may hold an empty LP account
    let state = accounts_refreshed(&state, vec![account(30, lp_token, 0)]);

    let state = fields_edited(
        &state,
        StatePatch::new().with_first_token(a).with_second_token(b),
    );
    assert!(state.selected_pool.is_some());
    assert_eq!(
        state.pool_token_account.as_ref().and_then(|acc| acc.address),
        Some(Pubkey::new_from_array([30; 32]))
    );

    // deselecting the pair unsets the derived binding
    let state = cleared(&state);
    assert!(state.pool_token_account.is_none());
}

#[test]
fn single_pool_update_replaces_by_identity() {
    let a = token(1, "AAA");
    let b = token(2, "BBB");
    let state = swap_ready_state();
    assert_eq!(state.available_pools.len(), 1);

    // same address, moved reserves
    let moved = pool(10, a, b, 100_000_000, 300_000_000);
    let state = pool_updated(&state, moved);
    assert_eq!(state.available_pools.len(), 1);
    assert_eq!(state.available_pools[0].reserve_b, 300_000_000);

    // amounts are only re-driven by amount/token edits, so the next edit
    // prices through the moved reserves
    let state = fields_edited(&state, StatePatch::new().with_first_amount(Decimal::from(10)));
    assert_eq!(state.second_amount, Decimal::from(30));
}

#[test]
fn clear_resets_swap_fields_and_keeps_lists() {
    let a = token(1, "AAA");
    let state = swap_ready_state();
    let state = accounts_refreshed(&state, vec![account(20, a, 500)]);
    let state = fields_edited(&state, StatePatch::new().with_first_amount(Decimal::from(10)));

    let accounts_before = state.token_accounts.clone();
    let pools_before = state.available_pools.clone();

    let state = cleared(&state);
    assert_eq!(state.first_amount, Decimal::ZERO);
    assert_eq!(state.second_amount, Decimal::ZERO);
    assert!(state.first_token.is_none());
    assert!(state.second_token.is_none());
    assert!(state.selected_pool.is_none());
    assert_eq!(state.token_accounts, accounts_before);
    assert_eq!(state.available_pools, pools_before);
}

#[test]
fn interleaved_refreshes_converge() {
    let a = token(1, "AAA");
    let b = token(2, "BBB");
    let p = pool(10, a.clone(), b.clone(), 100_000_000, 200_000_000);

    // user edits land before any pool data exists
    let state = fields_edited(
        &TokenPairState::default(),
        StatePatch::new()
            .with_first_token(a.clone())
            .with_second_token(b)
            .with_first_amount(Decimal::from(10)),
    );
    assert!(state.selected_pool.is_none());
    assert_eq!(state.second_amount, Decimal::ZERO);

    // pools arrive later; accounts later still, in any order
    let state = pools_refreshed(&state, vec![p]);
    let state = accounts_refreshed(&state, vec![account(20, a, 500)]);
    assert!(state.selected_pool.is_some());

    // the next user edit prices through the now-known pool
    let state = fields_edited(&state, StatePatch::new().with_first_amount(Decimal::from(10)));
    assert_eq!(state.second_amount, Decimal::from(20));
}

#[test]
fn first_pool_in_list_order_wins() {
    let a = token(1, "AAA");
    let b = token(2, "BBB");
    let p1 = pool(10, a.clone(), b.clone(), 100, 200);
    let p2 = pool(11, b.clone(), a.clone(), 100, 500);

    let state = pools_refreshed(&TokenPairState::default(), vec![p1, p2]);
    let state = fields_edited(
        &state,
        StatePatch::new().with_first_token(a).with_second_token(b),
    );
    assert_eq!(
        state.selected_pool.as_ref().map(|p| p.address),
        Some(Pubkey::new_from_array([10; 32]))
    );
}

#[test]
fn native_account_stored_as_wrapped() {
    let native = Token {
        mint: swap_pair_engine::NATIVE_MINT,
        symbol: "SOL".to_string(),
        decimals: 9,
        is_native: true,
    };
    let state = account_updated(
        &TokenPairState::default(),
        TokenAccount::new(Some(Pubkey::new_from_array([40; 32])), native, 1_000),
    );

    assert_eq!(state.token_accounts.len(), 1);
    let stored = &state.token_accounts[0];
    assert_eq!(stored.token.mint, swap_pair_engine::WRAPPED_NATIVE_MINT);
    assert_eq!(stored.token.symbol, "WSOL");
    assert!(!stored.token.is_native);
    assert_eq!(stored.balance, 1_000);
}
