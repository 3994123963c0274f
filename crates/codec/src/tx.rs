//! Transaction records and the format-tag envelope around them.
//!
//! Wire layout, big-endian, after the 1-byte format tag:
//!
//! - basic: `sender_public_key(32) | recipient(20) | value(8) | fee(8) |
//!   validity_start_height(4) | network_id(1) | signature(64)`
//! - extended: `u16 data_len | data | sender(20) | sender_type(1) |
//!   recipient(20) | recipient_type(1) | value(8) | fee(8) |
//!   validity_start_height(4) | network_id(1) | flags(1) | u16 proof_len | proof`

use std::io::Read;

use nimiq_types::{
    AccountType, BasicTx, ExtendedTx, Tx, TxFormat, BASIC_TX_SIZE, BASIC_TX_WIRE_SIZE,
    EXTENDED_TX_STATIC_SIZE, SIGNATURE_SIZE,
};

use crate::{ByteReader, ByteWriter, CodecError};

/// Encoded basic transaction minus its trailing signature.
pub const BASIC_TX_SIGNING_PAYLOAD_SIZE: usize = BASIC_TX_WIRE_SIZE - SIGNATURE_SIZE;

fn read_array<const N: usize, R: Read>(r: &mut R) -> Result<[u8; N], CodecError> {
    let mut out = [0u8; N];
    r.read_exact(&mut out)?;
    Ok(out)
}

fn read_u8<R: Read>(r: &mut R) -> Result<u8, CodecError> {
    let [b] = read_array::<1, R>(r)?;
    Ok(b)
}

fn read_u16<R: Read>(r: &mut R) -> Result<u16, CodecError> {
    Ok(u16::from_be_bytes(read_array(r)?))
}

fn read_u32<R: Read>(r: &mut R) -> Result<u32, CodecError> {
    Ok(u32::from_be_bytes(read_array(r)?))
}

fn read_u64<R: Read>(r: &mut R) -> Result<u64, CodecError> {
    Ok(u64::from_be_bytes(read_array(r)?))
}

/// u16 length prefix followed by that many bytes.
fn read_segment<R: Read>(r: &mut R) -> Result<Vec<u8>, CodecError> {
    let len = read_u16(r)?;
    let mut out = vec![0u8; usize::from(len)];
    r.read_exact(&mut out)?;
    Ok(out)
}

fn write_segment(w: &mut ByteWriter<'_>, b: &[u8]) -> Result<(), CodecError> {
    let len: u16 = b.len().try_into().map_err(|_| CodecError::LengthOverflow)?;
    w.write_u16(len)?;
    w.write_next(b)
}

/// Read a basic transaction body (no format tag) from a cursor.
pub fn read_basic_tx(r: &mut ByteReader<'_>) -> Result<BasicTx, CodecError> {
    let sender_public_key = r.read_fixed()?;
    let recipient = r.read_fixed()?;
    let value = r.read_u64()?;
    let fee = r.read_u64()?;
    let validity_start_height = r.read_u32()?;
    let network_id = r.read_u8()?;
    let signature = r.read_fixed()?;

    Ok(BasicTx {
        sender_public_key,
        recipient,
        value,
        fee,
        validity_start_height,
        network_id,
        signature,
    })
}

/// Write a basic transaction body (no format tag) to a cursor.
pub fn write_basic_tx(w: &mut ByteWriter<'_>, tx: &BasicTx) -> Result<(), CodecError> {
    w.write_fixed(&tx.sender_public_key)?;
    w.write_fixed(&tx.recipient)?;
    w.write_u64(tx.value)?;
    w.write_u64(tx.fee)?;
    w.write_u32(tx.validity_start_height)?;
    w.write_u8(tx.network_id)?;
    w.write_fixed(&tx.signature)
}

/// Read an extended transaction body (no format tag) field by field.
///
/// Nothing is buffered beyond the field being read, so a short stream fails
/// at the first field it cannot fill.
pub fn read_extended_tx<R: Read>(r: &mut R) -> Result<ExtendedTx, CodecError> {
    let data = read_segment(r)?;
    let sender = read_array(r)?;
    let sender_type = AccountType::from_u8(read_u8(r)?);
    let recipient = read_array(r)?;
    let recipient_type = AccountType::from_u8(read_u8(r)?);
    let value = read_u64(r)?;
    let fee = read_u64(r)?;
    let validity_start_height = read_u32(r)?;
    let network_id = read_u8(r)?;
    let flags = read_u8(r)?;
    let proof = read_segment(r)?;

    Ok(ExtendedTx {
        data,
        sender,
        sender_type,
        recipient,
        recipient_type,
        value,
        fee,
        validity_start_height,
        network_id,
        flags,
        proof,
    })
}

pub fn write_extended_tx(w: &mut ByteWriter<'_>, tx: &ExtendedTx) -> Result<(), CodecError> {
    write_segment(w, &tx.data)?;
    w.write_fixed(&tx.sender)?;
    w.write_u8(tx.sender_type.as_u8())?;
    w.write_fixed(&tx.recipient)?;
    w.write_u8(tx.recipient_type.as_u8())?;
    w.write_u64(tx.value)?;
    w.write_u64(tx.fee)?;
    w.write_u32(tx.validity_start_height)?;
    w.write_u8(tx.network_id)?;
    w.write_u8(tx.flags)?;
    write_segment(w, &tx.proof)
}

/// Wire size of an extended transaction, format tag included.
pub fn extended_tx_wire_size(tx: &ExtendedTx) -> usize {
    1 + 2 + tx.data.len() + EXTENDED_TX_STATIC_SIZE + 2 + tx.proof.len()
}

/// Canonical encoding of a basic transaction including format tag and signature.
pub fn encode_basic_tx(tx: &BasicTx) -> Result<[u8; BASIC_TX_WIRE_SIZE], CodecError> {
    let mut out = [0u8; BASIC_TX_WIRE_SIZE];
    let mut w = ByteWriter::new(&mut out);
    w.write_u8(TxFormat::Basic as u8)?;
    write_basic_tx(&mut w, tx)?;
    Ok(out)
}

/// The bytes a basic transaction signature covers: its encoding up to,
/// but not including, the signature.
pub fn basic_tx_signing_payload(
    tx: &BasicTx,
) -> Result<[u8; BASIC_TX_SIGNING_PAYLOAD_SIZE], CodecError> {
    let encoded = encode_basic_tx(tx)?;
    let mut out = [0u8; BASIC_TX_SIGNING_PAYLOAD_SIZE];
    ByteReader::new(&encoded).copy_next(&mut out)?;
    Ok(out)
}

pub fn encode_extended_tx(tx: &ExtendedTx) -> Result<Vec<u8>, CodecError> {
    let mut out = vec![0u8; extended_tx_wire_size(tx)];
    let mut w = ByteWriter::new(&mut out);
    w.write_u8(TxFormat::Extended as u8)?;
    write_extended_tx(&mut w, tx)?;
    Ok(out)
}

pub fn encode_tx(tx: &Tx) -> Result<Vec<u8>, CodecError> {
    match tx {
        Tx::Basic(tx) => Ok(encode_basic_tx(tx)?.to_vec()),
        Tx::Extended(tx) => encode_extended_tx(tx),
    }
}

fn read_tx<R: Read>(r: &mut R) -> Result<Tx, CodecError> {
    let tag = read_u8(r)?;
    let tx = match TxFormat::from_u8(tag) {
        Some(TxFormat::Basic) => {
            // fixed size: pull the whole body before parsing
            let body: [u8; BASIC_TX_SIZE] = read_array(r)?;
            Tx::Basic(read_basic_tx(&mut ByteReader::new(&body))?)
        }
        Some(TxFormat::Extended) => Tx::Extended(read_extended_tx(r)?),
        None => return Err(CodecError::UnsupportedFormat(tag)),
    };
    tracing::trace!(format = ?tx.format(), "decoded transaction");
    Ok(tx)
}

/// Decode one tagged transaction from a byte stream.
pub fn decode_tx<R: Read>(r: &mut R) -> Result<Tx, CodecError> {
    read_tx(r).inspect_err(|e| tracing::debug!(error = %e, "transaction decode failed"))
}

/// Decode one tagged transaction that must span all of `bytes`.
pub fn decode_tx_from_slice(bytes: &[u8]) -> Result<Tx, CodecError> {
    let mut input = bytes;
    let tx = decode_tx(&mut input)?;
    if !input.is_empty() {
        return Err(CodecError::TrailingBytes);
    }
    Ok(tx)
}
