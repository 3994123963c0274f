use nimiq_types::{Account, AccountType, ACCOUNT_SIZE};

use crate::{ByteReader, ByteWriter, CodecError};

pub fn read_account(r: &mut ByteReader<'_>) -> Result<Account, CodecError> {
    let account_type = AccountType::from_u8(r.read_u8()?);
    let balance = r.read_u64()?;
    Ok(Account {
        account_type,
        balance,
    })
}

pub fn write_account(w: &mut ByteWriter<'_>, account: &Account) -> Result<(), CodecError> {
    w.write_u8(account.account_type.as_u8())?;
    w.write_u64(account.balance)
}

pub fn encode_account(account: &Account) -> Result<[u8; ACCOUNT_SIZE], CodecError> {
    let mut out = [0u8; ACCOUNT_SIZE];
    write_account(&mut ByteWriter::new(&mut out), account)?;
    Ok(out)
}

/// Decode exactly one account record. Unknown type bytes are kept as-is.
pub fn decode_account(bytes: &[u8]) -> Result<Account, CodecError> {
    let mut r = ByteReader::new(bytes);
    let account = read_account(&mut r)?;
    if r.remaining() != 0 {
        return Err(CodecError::TrailingBytes);
    }
    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let account = Account {
            account_type: AccountType::VESTING,
            balance: 0x0102_0304_0506_0708,
        };
        let bytes = encode_account(&account).unwrap();
        assert_eq!(bytes, [1, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(decode_account(&bytes), Ok(account));
    }

    #[test]
    fn unknown_type_still_decodes() {
        let bytes = [0x07, 0, 0, 0, 0, 0, 0, 0, 42];
        let account = decode_account(&bytes).unwrap();
        assert_eq!(account.account_type, AccountType::from_u8(7));
        assert_eq!(account.account_type.to_string(), "Invalid account type");
        assert_eq!(account.balance, 42);
        assert_eq!(encode_account(&account).unwrap(), bytes);
    }

    #[test]
    fn every_type_byte_survives_a_round_trip() {
        for v in 0..=u8::MAX {
            let account = Account {
                account_type: AccountType::from(v),
                balance: 1,
            };
            let back = decode_account(&encode_account(&account).unwrap()).unwrap();
            assert_eq!(back, account, "type byte {v}");
        }
    }

    #[test]
    fn size_is_exact() {
        assert!(matches!(
            decode_account(&[0u8; 8]),
            Err(CodecError::OutOfBounds { .. })
        ));
        assert_eq!(decode_account(&[0u8; 10]), Err(CodecError::TrailingBytes));
    }
}
