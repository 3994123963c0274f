//! User-friendly address format.
//!
//! A 36-character ASCII string, usually shown in groups of four separated by
//! spaces (`NQ19 46LK 9YHV D9LB TDJ4 8Y2P 3J4C 37HR YDL5`). Spaces are not
//! significant. Characters 0..2 are the country code `NQ`, 2..4 the mod-97
//! check digits and 4..36 the base-32 encoded 20-byte address.

use nimiq_types::{
    Address, ADDRESS_SIZE, USER_FRIENDLY_COUNTRY_CODE, USER_FRIENDLY_DISPLAY_LEN,
    USER_FRIENDLY_LEN,
};

use crate::base32::{self, ENCODED_ADDRESS_LEN};
use crate::checksum::user_friendly_check;
use crate::AddressError;

const GROUP_LEN: usize = 4;

/// Remove all spaces and return the remaining 36 bytes.
///
/// Length is counted in bytes, so multi-byte characters push an otherwise
/// well-sized string over the limit.
pub fn normalize_user_friendly(s: &str) -> Result<[u8; USER_FRIENDLY_LEN], AddressError> {
    let mut uf = [0u8; USER_FRIENDLY_LEN];
    let mut len = 0;

    for b in s.bytes().filter(|&b| b != b' ') {
        let slot = uf.get_mut(len).ok_or(AddressError::InvalidLength)?;
        *slot = b;
        len += 1;
    }

    if len != USER_FRIENDLY_LEN {
        return Err(AddressError::InvalidLength);
    }
    Ok(uf)
}

fn parse_user_friendly(s: &str) -> Result<Address, AddressError> {
    let uf = normalize_user_friendly(s)?;

    // Rejects only when both letters differ; see DESIGN.md.
    let cc = USER_FRIENDLY_COUNTRY_CODE.as_bytes();
    if uf[0] != cc[0] && uf[1] != cc[1] {
        return Err(AddressError::InvalidCountryCode);
    }

    if user_friendly_check(&uf)? != 1 {
        return Err(AddressError::Checksum);
    }

    let mut addr = [0u8; ADDRESS_SIZE];
    base32::decode(&mut addr, &uf[4..])?;
    Ok(addr)
}

/// Parse a user-friendly address, with or without spaces.
pub fn address_from_user_friendly(s: &str) -> Result<Address, AddressError> {
    parse_user_friendly(s)
        .inspect_err(|e| tracing::debug!(error = %e, "rejected user-friendly address"))
}

/// Format an address as `NQxx XXXX XXXX XXXX XXXX XXXX XXXX XXXX XXXX`.
pub fn address_to_user_friendly(addr: &Address) -> Result<String, AddressError> {
    let mut data = [0u8; ENCODED_ADDRESS_LEN];
    base32::encode(&mut data, addr);

    // check digits are computed with "00" in their place
    let mut uf = [0u8; USER_FRIENDLY_LEN];
    uf[..2].copy_from_slice(USER_FRIENDLY_COUNTRY_CODE.as_bytes());
    uf[2..4].copy_from_slice(b"00");
    uf[4..].copy_from_slice(&data);
    let check = 98 - user_friendly_check(&uf)?;

    let mut out = String::with_capacity(USER_FRIENDLY_DISPLAY_LEN);
    out.push_str(USER_FRIENDLY_COUNTRY_CODE);
    out.push_str(&format!("{:02}", check % 100));
    for group in data.chunks(GROUP_LEN) {
        out.push(' ');
        out.extend(group.iter().copied().map(char::from));
    }
    Ok(out)
}
