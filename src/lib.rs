//! Token-pair synchronization engine
//!
//! Keeps a swap view (two selected tokens, their amounts, and the pool
//! connecting them) consistent while the wallet's token-account list and the
//! set of available liquidity pools are refreshed independently. Every
//! transition is a pure function from the previous snapshot plus an event
//! payload to a new snapshot; the UI layer reads the snapshot and fires the
//! reducer entry points, nothing else.

pub mod constants;
pub mod core;
pub mod engine;
pub mod models;

// Re-export commonly used types
pub use crate::constants::{
    default_slippage, NATIVE_MINT, WRAPPED_NATIVE_MINT, WRAPPED_NATIVE_SYMBOL,
};
pub use crate::core::error::{EngineError, EngineResult};
pub use crate::engine::{
    account_updated, account_updated_record, accounts_refreshed, accounts_refreshed_records,
    cleared, fields_edited, pool_updated, pool_updated_record, pools_refreshed,
    pools_refreshed_records,
};
pub use crate::models::{
    MintInfo, Pool, PoolRecord, PoolSide, StatePatch, Token, TokenAccount, TokenAccountRecord,
    TokenPairState,
};
