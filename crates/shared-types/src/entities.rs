//! # Core Domain Entities
//!
//! Identity and hashing primitives shared by the book store, the purchase
//! token and the store front.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};
use std::fmt;
use std::str::FromStr;

use crate::errors::AddressParseError;

// Re-export U256 from primitive-types for use across all contracts
pub use primitive_types::U256;

/// A 32-byte Keccak-256 digest.
pub type Hash = [u8; 32];

/// Identifier of a published book version.
///
/// Assigned sequentially by the book store, starting at 1.
pub type VersionId = u64;

/// Computes keccak256 hash of data.
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

// =============================================================================
// ADDRESS (20 bytes)
// =============================================================================

/// A 20-byte Ethereum-style address.
///
/// Accounts and deployed contracts share this identity space. The value is
/// opaque: nothing checks that an address actually refers to a contract until
/// something tries to call it.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The zero address (0x0000...0000).
    pub const ZERO: Self = Self([0u8; 20]);

    /// Creates an address from a 20-byte array.
    #[must_use]
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice. Returns None if wrong length.
    #[must_use]
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() == 20 {
            let mut bytes = [0u8; 20];
            bytes.copy_from_slice(slice);
            Some(Self(bytes))
        } else {
            None
        }
    }

    /// Creates an address whose low 8 bytes hold `n` (big-endian).
    ///
    /// Handy for numbering test accounts: `Address::from_low_u64(5)` is
    /// "account 5".
    #[must_use]
    pub fn from_low_u64(n: u64) -> Self {
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&n.to_be_bytes());
        Self(bytes)
    }

    /// Returns the underlying bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true if this is the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Lowercase `0x`-prefixed hex rendering.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Mixed-case checksum rendering (EIP-55).
    #[must_use]
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let digest = keccak256(lower.as_bytes());

        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let byte = digest[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0[..4] {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "...")?;
        for byte in &self.0[18..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(digits).map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes).ok_or(AddressParseError::InvalidLength(bytes.len()))
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<Address> for [u8; 20] {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

// =============================================================================
// TESTS
// =============================================================================
