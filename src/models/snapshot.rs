//! Snapshot and patch types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::default_slippage;

use super::account::TokenAccount;
use super::pool::Pool;
use super::token::Token;

/// The fully-derived, internally consistent view of the current swap
/// selection. Treated as an immutable value: every transition produces a new
/// snapshot, so concurrent readers never observe a partial update.
///
/// `selected_pool` and `pool_token_account` are derived fields. They are
/// recomputed on every transition and cannot be set through a patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenPairState {
    pub first_token: Option<Token>,
    pub second_token: Option<Token>,
    pub first_token_account: Option<TokenAccount>,
    pub second_token_account: Option<TokenAccount>,
    pub first_amount: Decimal,
    pub second_amount: Decimal,
    pub token_accounts: Vec<TokenAccount>,
    pub available_pools: Vec<Pool>,
    pub selected_pool: Option<Pool>,
    /// Wallet account holding the selected pool's liquidity token, if any
    pub pool_token_account: Option<TokenAccount>,
    pub slippage: Decimal,
}

impl Default for TokenPairState {
    fn default() -> Self {
        Self {
            first_token: None,
            second_token: None,
            first_token_account: None,
            second_token_account: None,
            first_amount: Decimal::ZERO,
            second_amount: Decimal::ZERO,
            token_accounts: Vec::new(),
            available_pools: Vec::new(),
            selected_pool: None,
            pool_token_account: None,
            slippage: default_slippage(),
        }
    }
}

/// Partial update over a snapshot. `None` means "field untouched"; which
/// fields a patch touches also decides which amount is treated as driving
/// during normalization.
#[derive(Debug, Clone, Default)]
pub struct StatePatch {
    pub first_token: Option<Token>,
    pub second_token: Option<Token>,
    pub first_token_account: Option<TokenAccount>,
    pub second_token_account: Option<TokenAccount>,
    pub first_amount: Option<Decimal>,
    pub second_amount: Option<Decimal>,
    pub token_accounts: Option<Vec<TokenAccount>>,
    pub available_pools: Option<Vec<Pool>>,
    pub slippage: Option<Decimal>,
}

impl StatePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_token(mut self, token: Token) -> Self {
        self.first_token = Some(token);
        self
    }

    pub fn with_second_token(mut self, token: Token) -> Self {
        self.second_token = Some(token);
        self
    }

    pub fn with_first_token_account(mut self, account: TokenAccount) -> Self {
        self.first_token_account = Some(account);
        self
    }

    pub fn with_second_token_account(mut self, account: TokenAccount) -> Self {
        self.second_token_account = Some(account);
        self
    }

    pub fn with_first_amount(mut self, amount: Decimal) -> Self {
        self.first_amount = Some(amount);
        self
    }

    pub fn with_second_amount(mut self, amount: Decimal) -> Self {
        self.second_amount = Some(amount);
        self
    }

    pub fn with_token_accounts(mut self, accounts: Vec<TokenAccount>) -> Self {
        self.token_accounts = Some(accounts);
        self
    }

    pub fn with_available_pools(mut self, pools: Vec<Pool>) -> Self {
        self.available_pools = Some(pools);
        self
    }

    pub fn with_slippage(mut self, slippage: Decimal) -> Self {
        self.slippage = Some(slippage);
        self
    }
}
