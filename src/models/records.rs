//! Boundary record shapes delivered by the data-fetching layer
//!
//! Records arrive as JSON produced by the wallet and market-data pollers,
//! hence the camelCase field names. Decoding into domain types validates the
//! base58 addresses and integer balance strings; the fetch layer is expected
//! to have pre-validated everything else.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::core::error::{EngineError, EngineResult};

use super::account::TokenAccount;
use super::pool::Pool;
use super::token::Token;

// rust_decimal scales above this panic; real mints stay far below it
const MAX_DECIMALS: u8 = 28;

/// Token-account record from the wallet refresh collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountRecord {
    pub address: Option<String>,
    pub mint: String,
    pub symbol: String,
    pub decimals: u8,
    /// Raw balance as a base-10 integer string
    pub raw_balance: String,
    pub is_native_asset: bool,
}

/// Constituent-token info inside a pool record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintInfo {
    pub mint: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Pool record from the market-data refresh collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolRecord {
    pub address: String,
    pub token_a: MintInfo,
    pub token_b: MintInfo,
    pub reserve_a: String,
    pub reserve_b: String,
    pub liquidity_token_mint: String,
    pub fee_basis_points: u16,
}

fn parse_pubkey(value: &str, entity: &'static str) -> EngineResult<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|e| EngineError::invalid_record(entity, format!("bad address {value}: {e}")))
}

fn parse_raw_amount(value: &str, entity: &'static str) -> EngineResult<u64> {
    value
        .parse::<u64>()
        .map_err(|e| EngineError::invalid_record(entity, format!("bad amount {value}: {e}")))
}

fn check_decimals(decimals: u8, entity: &'static str) -> EngineResult<u8> {
    if decimals > MAX_DECIMALS {
        return Err(EngineError::invalid_record(
            entity,
            format!("decimals {decimals} out of range"),
        ));
    }
    Ok(decimals)
}

impl TryFrom<&MintInfo> for Token {
    type Error = EngineError;

    fn try_from(info: &MintInfo) -> EngineResult<Self> {
        Ok(Token::new(
            parse_pubkey(&info.mint, "pool")?,
            info.symbol.clone(),
            check_decimals(info.decimals, "pool")?,
        ))
    }
}

impl TryFrom<&TokenAccountRecord> for TokenAccount {
    type Error = EngineError;

    fn try_from(record: &TokenAccountRecord) -> EngineResult<Self> {
        let address = record
            .address
            .as_deref()
            .map(|a| parse_pubkey(a, "token account"))
            .transpose()?;
        let token = Token {
            mint: parse_pubkey(&record.mint, "token account")?,
            symbol: record.symbol.clone(),
            decimals: check_decimals(record.decimals, "token account")?,
            is_native: record.is_native_asset,
        };
        let balance = parse_raw_amount(&record.raw_balance, "token account")?;
        Ok(TokenAccount::new(address, token, balance))
    }
}

impl TryFrom<&PoolRecord> for Pool {
    type Error = EngineError;

    fn try_from(record: &PoolRecord) -> EngineResult<Self> {
        Ok(Pool {
            address: parse_pubkey(&record.address, "pool")?,
            token_a: Token::try_from(&record.token_a)?,
            token_b: Token::try_from(&record.token_b)?,
            reserve_a: parse_raw_amount(&record.reserve_a, "pool")?,
            reserve_b: parse_raw_amount(&record.reserve_b, "pool")?,
            pool_token_mint: parse_pubkey(&record.liquidity_token_mint, "pool")?,
            fee_bps: record.fee_basis_points,
        })
    }
}
