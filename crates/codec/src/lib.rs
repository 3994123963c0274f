//! Binary and textual encodings of Nimiq ledger records.
//!
//! - [`ByteReader`] / [`ByteWriter`]: bounds-checked big-endian cursors.
//! - [`address`]: the checksummed user-friendly address format.
//! - [`account`] and [`tx`]: fixed and variable size record layouts.

pub mod account;
pub mod address;
pub mod base32;
mod buffer;
pub mod checksum;
mod error;
pub mod tx;

pub use account::{decode_account, encode_account, read_account, write_account};
pub use address::{address_from_user_friendly, address_to_user_friendly, normalize_user_friendly};
pub use buffer::{ByteReader, ByteWriter};
pub use checksum::user_friendly_check;
pub use error::{AddressError, CodecError};
pub use tx::{
    basic_tx_signing_payload, decode_tx, decode_tx_from_slice, encode_basic_tx,
    encode_extended_tx, encode_tx, read_basic_tx, read_extended_tx, write_basic_tx,
    write_extended_tx, BASIC_TX_SIGNING_PAYLOAD_SIZE,
};
