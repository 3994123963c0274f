//! IBAN-style mod-97 check over a user-friendly address.

use nimiq_types::USER_FRIENDLY_LEN;

use crate::AddressError;

const CHUNK_DIGITS: usize = 6;

/// Append the decimal digits standing for `c`: digits as themselves, letters
/// as `A = 10` through `Z = 35`, case-insensitively.
fn push_digits(digits: &mut Vec<u8>, c: u8) -> Result<(), AddressError> {
    match c {
        b'0'..=b'9' => digits.push(c - b'0'),
        b'A'..=b'Z' | b'a'..=b'z' => {
            let n = c.to_ascii_uppercase() - 0x37;
            digits.push(n / 10);
            digits.push(n % 10);
        }
        _ => return Err(AddressError::InvalidCharacter),
    }
    Ok(())
}

/// Compute the check value (0..97) of a 36-character address.
///
/// The 4-character prefix is moved behind the data region before the
/// characters are turned into digits. A valid address checks to 1.
pub fn user_friendly_check(uf: &[u8; USER_FRIENDLY_LEN]) -> Result<u8, AddressError> {
    let mut digits = Vec::with_capacity(USER_FRIENDLY_LEN * 2);
    for &c in uf[4..].iter().chain(&uf[..4]) {
        push_digits(&mut digits, c)?;
    }

    // The accumulator never exceeds 96 * 10^6 + 999_999, well inside u64.
    let check = digits.chunks(CHUNK_DIGITS).fold(0u64, |acc, chunk| {
        let acc = chunk
            .iter()
            .fold(acc, |acc, &d| acc * 10 + u64::from(d));
        acc % 97
    });
    Ok(check as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uf(s: &str) -> [u8; USER_FRIENDLY_LEN] {
        s.as_bytes().try_into().unwrap()
    }

    #[test]
    fn valid_address_checks_to_one() {
        assert_eq!(
            user_friendly_check(&uf("NQ1946LK9YHVD9LBTDJ48Y2P3J4C37HRYDL5")),
            Ok(1)
        );
    }

    #[test]
    fn placeholder_check_yields_encoder_digits() {
        let check = user_friendly_check(&uf("NQ0046LK9YHVD9LBTDJ48Y2P3J4C37HRYDL5")).unwrap();
        assert_eq!(98 - check, 19);
    }

    #[test]
    fn case_does_not_matter() {
        assert_eq!(
            user_friendly_check(&uf("nq1946lk9yhvd9lbtdj48y2p3j4c37hrydl5")),
            Ok(1)
        );
    }

    #[test]
    fn altered_digits_break_the_check() {
        assert_ne!(
            user_friendly_check(&uf("NQ2046LK9YHVD9LBTDJ48Y2P3J4C37HRYDL5")),
            Ok(1)
        );
    }

    #[test]
    fn rejects_non_alphanumerics() {
        assert_eq!(
            user_friendly_check(&uf("NQ19-6LK9YHVD9LBTDJ48Y2P3J4C37HRYDL5")),
            Err(AddressError::InvalidCharacter)
        );
        let mut bytes = uf("NQ1946LK9YHVD9LBTDJ48Y2P3J4C37HRYDL5");
        bytes[10] = 0xd0;
        assert_eq!(user_friendly_check(&bytes), Err(AddressError::InvalidCharacter));
    }
}
