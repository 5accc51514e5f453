//! 20-byte address codec
//!
//! Every address the wrapper stores (owner, fee collector, lock proxy) must
//! be a bech32 string whose payload is exactly 20 bytes:
//! ```text
//! hrp + "1" + base32(20 raw bytes) + 6-char checksum
//! ```
//! The host's `addr_validate` runs as well, so an address must satisfy both.

use cosmwasm_std::{Addr, Api, StdError, StdResult};

use crate::error::ContractError;

/// Raw address length, in bytes, of every stored address
pub const ADDRESS_LENGTH: usize = 20;

/// Bech32 character set
const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const CHECKSUM_LENGTH: usize = 6;

/// Validate `addr` with the host and require a 20-byte bech32 payload.
pub fn validate_address20(api: &dyn Api, addr: &str) -> Result<Addr, ContractError> {
    decode_bech32_address(addr).map_err(|e| ContractError::InvalidAddress {
        reason: format!("{}: {}", addr, e),
    })?;
    Ok(api.addr_validate(addr)?)
}

/// Decode a bech32 address to its raw bytes (any length)
pub fn decode_bech32(addr: &str) -> StdResult<(String, Vec<u8>)> {
    if addr.to_lowercase() != addr {
        return Err(StdError::generic_err("Bech32 address must be lowercase"));
    }

    let (hrp, data_part) = addr
        .rsplit_once('1')
        .ok_or_else(|| StdError::generic_err("Invalid bech32 format"))?;

    if hrp.is_empty() {
        return Err(StdError::generic_err("Bech32 prefix is empty"));
    }
    if data_part.len() <= CHECKSUM_LENGTH {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let values = decode_bech32_data(data_part)?;
    let mut checked = expand_hrp(hrp);
    checked.extend_from_slice(&values);
    if bech32_polymod(&checked) != 1 {
        return Err(StdError::generic_err("Invalid bech32 checksum"));
    }

    let payload = &values[..values.len() - CHECKSUM_LENGTH];
    let bytes = convert_bits(payload, 5, 8, false)?;
    Ok((hrp.to_string(), bytes))
}

/// Decode a bech32 address to raw 20 bytes
pub fn decode_bech32_address(addr: &str) -> StdResult<[u8; ADDRESS_LENGTH]> {
    let (_, bytes) = decode_bech32(addr)?;

    if bytes.len() != ADDRESS_LENGTH {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected {} bytes, got {}",
            ADDRESS_LENGTH,
            bytes.len()
        )));
    }

    let mut result = [0u8; ADDRESS_LENGTH];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode raw bytes to a bech32 address with given prefix
pub fn encode_bech32(bytes: &[u8], hrp: &str) -> StdResult<String> {
    let data5 = convert_bits(bytes, 8, 5, true)?;
    let data_str = encode_bech32_data(&data5);

    let checksum = compute_bech32_checksum(hrp, &data5);
    let checksum_str = encode_bech32_data(&checksum);

    Ok(format!("{}1{}{}", hrp, data_str, checksum_str))
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; ADDRESS_LENGTH], hrp: &str) -> StdResult<String> {
    encode_bech32(bytes, hrp)
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        let v = value as u32;
        acc = (acc << from_bits) | v;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_v) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_v) != 0 {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

fn decode_bech32_data(data: &str) -> StdResult<Vec<u8>> {
    data.chars()
        .map(|c| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x as char == c)
                .map(|idx| idx as u8)
                .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))
        })
        .collect()
}

fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LENGTH]);

    let polymod = bech32_polymod(&values) ^ 1;

    (0..CHECKSUM_LENGTH)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);
    result.extend(hrp.bytes().map(|c| c >> 5));
    result.push(0);
    result.extend(hrp.bytes().map(|c| c & 31));
    result
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
