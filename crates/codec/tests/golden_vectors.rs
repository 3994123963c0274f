use std::fs;
use std::path::Path;

use nimiq_codec::{decode_account, decode_tx_from_slice, encode_account, encode_tx};
use nimiq_types::{Account, AccountType, BasicTx, ExtendedTx, Tx};

fn write_or_compare(path: &Path, actual: &[u8]) {
    let update = std::env::var("UPDATE_VECTORS").ok().as_deref() == Some("1");

    if update {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create vectors dir");
        }
        fs::write(path, actual).expect("write vector file");
        return;
    }

    let expected = fs::read(path).unwrap_or_else(|_| {
        panic!("missing vector file: {path:?}. Run with UPDATE_VECTORS=1 to generate.")
    });

    assert_eq!(
        expected, actual,
        "golden vector mismatch for {path:?} (encoding drift?)"
    );
}

fn seq<const N: usize>(start: u8) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, b) in out.iter_mut().enumerate() {
        *b = start.wrapping_add(i as u8);
    }
    out
}

fn sample_basic() -> BasicTx {
    let mut recipient = [0u8; 20];
    recipient[..10].copy_from_slice(&seq::<10>(0x30));
    recipient[10..].copy_from_slice(&seq::<10>(0x40));

    BasicTx {
        sender_public_key: seq(0x10),
        recipient,
        value: 0x5051_5253_5455_5657,
        fee: 0x6061_6263_6465_6667,
        validity_start_height: 0,
        network_id: 42,
        signature: seq(0x70),
    }
}

fn sample_extended() -> ExtendedTx {
    ExtendedTx {
        data: b"nimiq".to_vec(),
        sender: [0xaa; 20],
        sender_type: AccountType::BASIC,
        recipient: [0xbb; 20],
        recipient_type: AccountType::VESTING,
        value: 100_000,
        fee: 138,
        validity_start_height: 1_000_000,
        network_id: 42,
        flags: 0,
        proof: vec![0xcc; 8],
    }
}

fn sample_account() -> Account {
    Account {
        account_type: AccountType::HTLC,
        balance: 0xdead_beef,
    }
}

#[test]
fn golden_vectors_tx_and_account() {
    let basic = Tx::Basic(sample_basic());
    let extended = Tx::Extended(sample_extended());
    let account = sample_account();

    // --- Encode ---
    let basic_bytes = encode_tx(&basic).expect("encode basic");
    let extended_bytes = encode_tx(&extended).expect("encode extended");
    let account_bytes = encode_account(&account).expect("encode account");

    // --- Decode checks ---
    assert_eq!(decode_tx_from_slice(&basic_bytes).expect("decode basic"), basic);
    assert_eq!(
        decode_tx_from_slice(&extended_bytes).expect("decode extended"),
        extended
    );
    assert_eq!(decode_account(&account_bytes).expect("decode account"), account);

    // --- Golden file paths (relative to crates/codec) ---
    let basic_path = Path::new("tests/vectors/basic_tx.bin");
    let extended_path = Path::new("tests/vectors/extended_tx.bin");
    let account_path = Path::new("tests/vectors/account.bin");

    // --- Compare (or generate) ---
    write_or_compare(basic_path, &basic_bytes);
    write_or_compare(extended_path, &extended_bytes);
    write_or_compare(account_path, &account_bytes);
}
