use ed25519_dalek::Signer;
use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
use rand_core::CryptoRngCore;
use thiserror::Error;

use nimiq_codec::{basic_tx_signing_payload, CodecError};
use nimiq_types::{BasicTx, PrivateKeyBytes, PublicKeyBytes, SignatureBytes};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid ed25519 public key")]
    InvalidPublicKey,
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Draw a fresh 32-byte private key seed.
pub fn generate_private_key<R: CryptoRngCore + ?Sized>(rng: &mut R) -> PrivateKeyBytes {
    SigningKey::generate(rng).to_bytes()
}

pub fn derive_public_key(private_key: &PrivateKeyBytes) -> PublicKeyBytes {
    SigningKey::from_bytes(private_key).verifying_key().to_bytes()
}

/// Parse a VerifyingKey from raw 32-byte public key bytes.
pub fn pubkey_from_bytes(bytes: &PublicKeyBytes) -> Result<VerifyingKey, CryptoError> {
    VerifyingKey::from_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)
}

pub fn sign_bytes(private_key: &PrivateKeyBytes, msg: &[u8]) -> SignatureBytes {
    let sig: Signature = SigningKey::from_bytes(private_key).sign(msg);
    sig.to_bytes()
}

/// Verify `sig` over `msg`. Keys that are not valid curve points never verify.
pub fn verify_bytes(public_key: &PublicKeyBytes, msg: &[u8], sig: &SignatureBytes) -> bool {
    let Ok(pk) = pubkey_from_bytes(public_key) else {
        return false;
    };
    pk.verify_strict(msg, &Signature::from_bytes(sig)).is_ok()
}

/// Fill in the sender key and sign everything in the encoded transaction
/// that precedes the signature.
pub fn sign_basic_tx(private_key: &PrivateKeyBytes, tx: &mut BasicTx) -> Result<(), CryptoError> {
    tx.sender_public_key = derive_public_key(private_key);
    let payload = basic_tx_signing_payload(tx)?;
    tx.signature = sign_bytes(private_key, &payload);
    Ok(())
}

pub fn verify_basic_tx(tx: &BasicTx) -> Result<bool, CryptoError> {
    let payload = basic_tx_signing_payload(tx)?;
    Ok(verify_bytes(&tx.sender_public_key, &payload, &tx.signature))
}
