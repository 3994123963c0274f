//! Nimiq base-32: 5 bits per character, most significant bit first, over an
//! alphabet without the easily confused `I`, `O`, `W` and `Z`.
//!
//! The 8-bit/5-bit regrouping is the one bech32 uses; only the symbol table
//! differs.

use bech32::{u5, FromBase32, ToBase32};
use nimiq_types::{Address, ADDRESS_SIZE};

use crate::AddressError;

pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPQRSTUVXY";

/// Characters needed for one address.
pub const ENCODED_ADDRESS_LEN: usize = (ADDRESS_SIZE * 8 + 4) / 5;

fn symbol(v: u5) -> u8 {
    ALPHABET[usize::from(v.to_u8())]
}

fn symbol_value(c: u8) -> Result<u5, AddressError> {
    let upper = c.to_ascii_uppercase();
    let i = ALPHABET
        .iter()
        .position(|&a| a == upper)
        .ok_or(AddressError::InvalidCharacter)?;
    u5::try_from_u8(i as u8).map_err(|_| AddressError::InvalidCharacter)
}

/// Encode `src` into `dst`, one alphabet character per 5 bits.
pub fn encode(dst: &mut [u8; ENCODED_ADDRESS_LEN], src: &Address) {
    // 160 bits split evenly into 32 symbols, no padding
    for (slot, v) in dst.iter_mut().zip(src.to_base32()) {
        *slot = symbol(v);
    }
}

/// Decode 32 characters into an address. Lower case is accepted.
pub fn decode(dst: &mut Address, src: &[u8]) -> Result<(), AddressError> {
    if src.len() != ENCODED_ADDRESS_LEN {
        return Err(AddressError::InvalidLength);
    }

    let symbols = src
        .iter()
        .map(|&c| symbol_value(c))
        .collect::<Result<Vec<u5>, _>>()?;
    let bytes = Vec::<u8>::from_base32(&symbols).map_err(|_| AddressError::InvalidLength)?;
    *dst = bytes
        .try_into()
        .map_err(|_| AddressError::InvalidLength)?;
    Ok(())
}
