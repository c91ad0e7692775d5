//! Domain value types for the swap engine

pub mod account;
pub mod pool;
pub mod records;
pub mod snapshot;
pub mod token;

pub use account::TokenAccount;
pub use pool::{Pool, PoolSide};
pub use records::{MintInfo, PoolRecord, TokenAccountRecord};
pub use snapshot::{StatePatch, TokenPairState};
pub use token::Token;
