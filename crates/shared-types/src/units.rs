//! # Token Units
//!
//! Conversion between whole token amounts ("50") and base units
//! (50 * 10^18). Prices are always stored in base units.

use crate::entities::U256;
use crate::errors::UnitsError;

/// Decimals used by ether-denominated tokens.
pub const ETHER_DECIMALS: u32 = 18;

/// Largest decimals count whose scale factor fits in 256 bits.
pub const MAX_DECIMALS: u32 = 77;

/// `10^decimals`, or an error when it does not fit in a `U256`.
fn scale(decimals: u32) -> Result<U256, UnitsError> {
    if decimals > MAX_DECIMALS {
        return Err(UnitsError::DecimalsOutOfRange { decimals });
    }
    Ok(U256::exp10(decimals as usize))
}

fn render(amount: U256, base: U256, decimals: u32) -> String {
    let whole = amount / base;
    let fraction = amount % base;
    if fraction.is_zero() {
        return whole.to_string();
    }
    let digits = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Whole units to 18-decimal base units.
#[must_use]
pub fn to_wei(whole: u64) -> U256 {
    U256::from(whole) * U256::exp10(ETHER_DECIMALS as usize)
}

/// 18-decimal base units to a decimal string.
#[must_use]
pub fn from_wei(amount: U256) -> String {
    render(amount, U256::exp10(ETHER_DECIMALS as usize), ETHER_DECIMALS)
}

/// Parse a decimal string such as `"12.5"` into base units.
pub fn parse_units(amount: &str, decimals: u32) -> Result<U256, UnitsError> {
    let base = scale(decimals)?;
    let invalid = || UnitsError::InvalidNumber(amount.to_string());

    let (whole, fraction) = match amount.split_once('.') {
        Some((w, f)) => (w, f),
        None => (amount, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if fraction.len() > decimals as usize {
        return Err(UnitsError::TooPrecise {
            found: fraction.len(),
            decimals,
        });
    }

    let whole = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole).map_err(|_| UnitsError::Overflow)?
    };
    let padded = format!("{fraction:0<width$}", width = decimals as usize);
    let fraction = if padded.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(&padded).map_err(|_| UnitsError::Overflow)?
    };

    whole
        .checked_mul(base)
        .and_then(|scaled| scaled.checked_add(fraction))
        .ok_or(UnitsError::Overflow)
}

/// Render base units as a decimal string without trailing zeros.
pub fn format_units(amount: U256, decimals: u32) -> Result<String, UnitsError> {
    Ok(render(amount, scale(decimals)?, decimals))
}
