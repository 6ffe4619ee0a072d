//! # Contract Addresses
//!
//! Deterministic addresses for deployed contracts:
//! `keccak256(rlp([deployer, nonce]))[12..]`.

use shared_types::{keccak256, Address};

/// Address of the contract `deployer` creates with its `nonce`-th deployment.
#[must_use]
pub fn compute_contract_address(deployer: Address, nonce: u64) -> Address {
    // RLP list of a 20-byte string and a scalar; always a short list.
    let mut content = Vec::with_capacity(30);

    // RLP encode address (20 bytes, 0x80 + 20 = 0x94)
    content.push(0x94);
    content.extend_from_slice(deployer.as_bytes());

    // RLP encode nonce
    if nonce == 0 {
        content.push(0x80); // Empty byte string
    } else if nonce < 0x80 {
        content.push(nonce as u8);
    } else {
        let nonce_bytes = encode_nonce(nonce);
        content.push(0x80 + nonce_bytes.len() as u8);
        content.extend_from_slice(&nonce_bytes);
    }

    let mut rlp_data = Vec::with_capacity(content.len() + 1);
    rlp_data.push(0xc0 + content.len() as u8);
    rlp_data.extend_from_slice(&content);

    // Hash and take last 20 bytes
    let hash = keccak256(&rlp_data);
    let mut addr = [0u8; 20];
    addr.copy_from_slice(&hash[12..32]);
    Address::new(addr)
}

/// Big-endian bytes of `nonce` without leading zeros.
fn encode_nonce(nonce: u64) -> Vec<u8> {
    let bytes = nonce.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}
