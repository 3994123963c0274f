use std::fmt;

pub const ADDRESS_SIZE: usize = 20;
pub const PUBLIC_KEY_SIZE: usize = 32;
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const SIGNATURE_SIZE: usize = 64;

/// Country code prefix of every user-friendly address.
pub const USER_FRIENDLY_COUNTRY_CODE: &str = "NQ";
/// Length of a user-friendly address once spaces are removed.
pub const USER_FRIENDLY_LEN: usize = 36;
/// Length of the spaced display form (`NQxx XXXX ... XXXX`).
pub const USER_FRIENDLY_DISPLAY_LEN: usize = 44;

pub type Address = [u8; ADDRESS_SIZE];
pub type PublicKeyBytes = [u8; PUBLIC_KEY_SIZE];
pub type PrivateKeyBytes = [u8; PRIVATE_KEY_SIZE];
pub type SignatureBytes = [u8; SIGNATURE_SIZE];

/// Smallest indivisible unit of value. Plain u64, wraps like one.
pub type Satoshi = u64;

pub const ACCOUNT_SIZE: usize = 1 // account type
    + 8; // balance

/// Basic transaction body, not counting the leading format tag.
pub const BASIC_TX_SIZE: usize = PUBLIC_KEY_SIZE // sender public key
    + ADDRESS_SIZE // recipient
    + 8 // value
    + 8 // fee
    + 4 // validity start height
    + 1 // network id
    + SIGNATURE_SIZE;

/// Basic transaction as it appears on the wire, format tag included.
pub const BASIC_TX_WIRE_SIZE: usize = 1 + BASIC_TX_SIZE;

/// Fixed-width fields of an extended transaction between `data` and `proof`.
pub const EXTENDED_TX_STATIC_SIZE: usize = ADDRESS_SIZE // sender
    + 1 // sender type
    + ADDRESS_SIZE // recipient
    + 1 // recipient type
    + 8 // value
    + 8 // fee
    + 4 // validity start height
    + 1 // network id
    + 1; // flags

/// Account type byte.
///
/// Any byte value is representable and round-trips unchanged. Values outside
/// the named constants only show up as invalid when displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccountType(u8);

impl AccountType {
    pub const BASIC: Self = AccountType(0);
    pub const VESTING: Self = AccountType(1);
    pub const HTLC: Self = AccountType(2);

    pub const fn from_u8(v: u8) -> Self {
        AccountType(v)
    }

    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl From<u8> for AccountType {
    fn from(v: u8) -> Self {
        AccountType(v)
    }
}

impl From<AccountType> for u8 {
    fn from(t: AccountType) -> Self {
        t.0
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match *self {
            AccountType::BASIC => "Basic account",
            AccountType::VESTING => "Vesting contract",
            AccountType::HTLC => "Hash time-locked contract",
            _ => "Invalid account type",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Account {
    pub account_type: AccountType,
    pub balance: Satoshi,
}

/// Leading byte of every serialized transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxFormat {
    Basic = 0,
    Extended = 1,
}

impl TxFormat {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(TxFormat::Basic),
            1 => Some(TxFormat::Extended),
            _ => None,
        }
    }
}

/// Fixed-size transaction from a basic account.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BasicTx {
    pub sender_public_key: PublicKeyBytes,
    pub recipient: Address,
    pub value: Satoshi,
    pub fee: Satoshi,
    pub validity_start_height: u32,
    pub network_id: u8,
    pub signature: SignatureBytes,
}

impl BasicTx {
    pub fn format(&self) -> TxFormat {
        TxFormat::Basic
    }
}

/// Transaction carrying arbitrary data and proof segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ExtendedTx {
    pub data: Vec<u8>,
    pub sender: Address,
    pub sender_type: AccountType,
    pub recipient: Address,
    pub recipient_type: AccountType,
    pub value: Satoshi,
    pub fee: Satoshi,
    pub validity_start_height: u32,
    pub network_id: u8,
    pub flags: u8,
    pub proof: Vec<u8>,
}

impl ExtendedTx {
    pub fn format(&self) -> TxFormat {
        TxFormat::Extended
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Tx {
    Basic(BasicTx),
    Extended(ExtendedTx),
}

impl Tx {
    pub fn format(&self) -> TxFormat {
        match self {
            Tx::Basic(tx) => tx.format(),
            Tx::Extended(tx) => tx.format(),
        }
    }
}

impl From<BasicTx> for Tx {
    fn from(tx: BasicTx) -> Self {
        Tx::Basic(tx)
    }
}

impl From<ExtendedTx> for Tx {
    fn from(tx: ExtendedTx) -> Self {
        Tx::Extended(tx)
    }
}
