//! Constants shared across the swap engine

use rust_decimal::Decimal;
use solana_sdk::pubkey::Pubkey;

/// Basis points denominator (10,000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Sentinel mint under which the wallet layer reports the chain's native
/// balance (the system program id, not a real SPL mint)
pub const NATIVE_MINT: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

/// Mint of the wrapped representation of the native asset
pub const WRAPPED_NATIVE_MINT: Pubkey =
    solana_sdk::pubkey!("So11111111111111111111111111111111111111112");

/// Symbol shown for the wrapped native asset
pub const WRAPPED_NATIVE_SYMBOL: &str = "WSOL";

/// Default slippage tolerance (10%), applied to every fresh snapshot.
/// Not user-configurable inside the engine.
pub fn default_slippage() -> Decimal {
    Decimal::new(1, 1)
}
