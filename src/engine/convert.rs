//! Bidirectional amount conversion through a pool's reserve ratio

use rust_decimal::Decimal;

use crate::models::{Pool, Token};

/// Convert a display amount of the source token into the amount of the
/// opposite pool constituent at the pool's current reserve ratio.
///
/// Total: a missing token or pool, a non-positive amount, or a source token
/// that is not part of the pool all yield zero. The math runs on raw units
/// with u128 intermediates; the result is rescaled to the destination
/// token's decimals only at the end.
pub fn convert(amount: Decimal, source: Option<&Token>, pool: Option<&Pool>) -> Decimal {
    let (source, pool) = match (source, pool) {
        (Some(source), Some(pool)) => (source, pool),
        _ => return Decimal::ZERO,
    };
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let side = match pool.side_of(source) {
        Some(side) => side,
        None => return Decimal::ZERO,
    };
    let destination = match pool.other_token(source) {
        Some(destination) => destination,
        None => return Decimal::ZERO,
    };

    let raw_in = to_raw(amount, source.decimals);
    if raw_in == 0 {
        return Decimal::ZERO;
    }
    let raw_out = pool.rate_convert(raw_in, side);
    to_display(raw_out, destination.decimals)
}

/// Truncate a display amount to the token's smallest unit
fn to_raw(amount: Decimal, decimals: u8) -> u64 {
    let mut scaled = amount.trunc_with_scale(u32::from(decimals));
    scaled.rescale(u32::from(decimals));
    u64::try_from(scaled.mantissa()).unwrap_or(0)
}

fn to_display(raw: u64, decimals: u8) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(raw), u32::from(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn token(mint_byte: u8, decimals: u8) -> Token {
        Token::new(Pubkey::new_from_array([mint_byte; 32]), "TKN", decimals)
    }

    fn pool(reserve_a: u64, reserve_b: u64, fee_bps: u16) -> Pool {
        Pool {
            address: Pubkey::new_from_array([9; 32]),
            token_a: token(1, 6),
            token_b: token(2, 6),
            reserve_a,
            reserve_b,
            pool_token_mint: Pubkey::new_from_array([3; 32]),
            fee_bps,
        }
    }

    #[test]
    fn missing_inputs_yield_zero() {
        let p = pool(100, 200, 0);
        assert_eq!(convert(Decimal::from(10), None, Some(&p)), Decimal::ZERO);
        assert_eq!(
            convert(Decimal::from(10), Some(&token(1, 6)), None),
            Decimal::ZERO
        );
        assert_eq!(
            convert(Decimal::ZERO, Some(&token(1, 6)), Some(&p)),
            Decimal::ZERO
        );
    }

    #[test]
    fn foreign_token_yields_zero() {
        let p = pool(100, 200, 0);
        assert_eq!(
            convert(Decimal::from(10), Some(&token(7, 6)), Some(&p)),
            Decimal::ZERO
        );
    }

    #[test]
    fn follows_reserve_ratio_both_directions() {
        let p = pool(100_000_000, 200_000_000, 0);
        assert_eq!(
            convert(Decimal::from(10), Some(&token(1, 6)), Some(&p)),
            Decimal::from(20)
        );
        assert_eq!(
            convert(Decimal::from(20), Some(&token(2, 6)), Some(&p)),
            Decimal::from(10)
        );
    }

    #[test]
    fn rescales_across_token_decimals() {
        // one display unit on each side: reserves are 1.0 of a 6-decimal
        // token against 1.0 of a 9-decimal token
        let mut p = pool(1_000_000, 1_000_000_000, 0);
        p.token_b = token(2, 9);
        let out = convert(Decimal::from(1), Some(&token(1, 6)), Some(&p));
        assert_eq!(out, Decimal::from(1));
    }

    #[test]
    fn round_trip_without_fee_is_identity() {
        let p = pool(100_000_000, 200_000_000, 0);
        let forward = convert(Decimal::from(10), Some(&token(1, 6)), Some(&p));
        let back = convert(forward, Some(&token(2, 6)), Some(&p));
        assert_eq!(back, Decimal::from(10));
    }
}
