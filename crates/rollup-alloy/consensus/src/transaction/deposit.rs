//! The OP Stack deposit transaction and its nonce-carrying shape.

use crate::{
    RollupTxType,
    transaction::{
        RollupTransaction,
        abstraction::copy_bytes,
        rlp::{RlpTxFields, decode_optional_u256, encode_optional_u256, optional_u256_length},
    },
};
use alloy_eips::Typed2718;
use alloy_primitives::{Address, B256, Bytes, TxKind, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// Deposit transactions, also known as deposits are initiated on L1, and executed on L2.
///
/// A deposit carries the hash of its L1 source instead of a nonce and is never signed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxDeposit {
    /// Hash that uniquely identifies the source of the deposit.
    pub source_hash: B256,
    /// The address of the sender account.
    pub from: Address,
    /// The address of the recipient account, or the null (zero-length) address if the deposited
    /// transaction is a contract creation.
    pub to: TxKind,
    /// The ETH value to mint on L2, `None` if nothing is minted.
    ///
    /// A zero mint and an absent mint share the same canonical encoding and both decode to
    /// `None`.
    pub mint: Option<U256>,
    /// The ETH value to send to the recipient account. Transferred after the mint.
    pub value: U256,
    /// The gas limit for the L2 transaction.
    pub gas_limit: u64,
    /// Field indicating if this transaction is exempt from the L2 gas limit.
    pub is_system_transaction: bool,
    /// Input has two uses depending if transaction is Create or Call (if `to` field is None or
    /// Some).
    pub input: Bytes,
}

impl RlpTxFields for TxDeposit {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.source_hash.length()
            + self.from.length()
            + self.to.length()
            + optional_u256_length(&self.mint)
            + self.value.length()
            + self.gas_limit.length()
            + self.is_system_transaction.length()
            + self.input.0.length()
    }

    /// <https://github.com/ethereum-optimism/optimism/blob/develop/specs/deposits.md#the-deposited-transaction-type>
    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        encode_optional_u256(&self.mint, out);
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.is_system_transaction.encode(out);
        self.input.encode(out);
    }

    /// Decodes the inner [TxDeposit] fields from RLP bytes.
    ///
    /// NOTE: This assumes a RLP header has already been decoded, and _just_ decodes the following
    /// RLP fields in the following order:
    ///
    /// - `source_hash`
    /// - `from`
    /// - `to`
    /// - `mint`
    /// - `value`
    /// - `gas_limit`
    /// - `is_system_transaction`
    /// - `input`
    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            source_hash: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            mint: decode_optional_u256(buf)?,
            value: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            is_system_transaction: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }
}

impl Encodable for TxDeposit {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxDeposit {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

impl Typed2718 for TxDeposit {
    fn ty(&self) -> u8 {
        RollupTxType::Deposit.into()
    }
}

impl RollupTransaction for TxDeposit {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::Deposit
    }

    fn chain_id(&self) -> U256 {
        U256::ZERO
    }

    fn input(&self) -> Bytes {
        self.input.clone()
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_price(&self) -> U256 {
        U256::ZERO
    }

    fn gas_tip_cap(&self) -> U256 {
        U256::ZERO
    }

    fn gas_fee_cap(&self) -> U256 {
        U256::ZERO
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn to(&self) -> Option<Address> {
        self.to.to().copied()
    }

    fn effective_gas_price(&self, _base_fee: Option<U256>) -> U256 {
        U256::ZERO
    }

    fn is_system_transaction(&self) -> bool {
        self.is_system_transaction
    }

    fn copy(&self) -> Self {
        Self {
            source_hash: self.source_hash,
            from: self.from,
            to: self.to,
            mint: self.mint,
            value: self.value,
            gas_limit: self.gas_limit,
            is_system_transaction: self.is_system_transaction,
            input: copy_bytes(&self.input),
        }
    }
}

/// A [`TxDeposit`] together with the nonce the sender had when the deposit was executed.
///
/// The effective nonce is reported by RPC responses only. It is not part of the canonical
/// encoding, which is always produced from [`TxDepositWithNonce::deposit`] so the transaction
/// hash does not depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxDepositWithNonce {
    /// The canonical deposit.
    pub deposit: TxDeposit,
    /// Nonce of the sender at execution time.
    pub effective_nonce: u64,
}

impl TxDepositWithNonce {
    /// Wraps a deposit with its effective nonce.
    pub const fn new(deposit: TxDeposit, effective_nonce: u64) -> Self {
        Self { deposit, effective_nonce }
    }

    /// Returns the canonical deposit.
    pub const fn deposit(&self) -> &TxDeposit {
        &self.deposit
    }

    /// Drops the effective nonce.
    pub fn into_deposit(self) -> TxDeposit {
        self.deposit
    }
}

impl Typed2718 for TxDepositWithNonce {
    fn ty(&self) -> u8 {
        RollupTxType::Deposit.into()
    }
}

impl RollupTransaction for TxDepositWithNonce {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::Deposit
    }

    fn chain_id(&self) -> U256 {
        self.deposit.chain_id()
    }

    fn input(&self) -> Bytes {
        self.deposit.input.clone()
    }

    fn gas_limit(&self) -> u64 {
        self.deposit.gas_limit
    }

    fn gas_price(&self) -> U256 {
        self.deposit.gas_price()
    }

    fn gas_tip_cap(&self) -> U256 {
        self.deposit.gas_tip_cap()
    }

    fn gas_fee_cap(&self) -> U256 {
        self.deposit.gas_fee_cap()
    }

    fn value(&self) -> U256 {
        self.deposit.value
    }

    // The canonical nonce stays zero; the execution nonce is exposed through `effective_nonce`.
    fn nonce(&self) -> u64 {
        0
    }

    fn to(&self) -> Option<Address> {
        RollupTransaction::to(&self.deposit)
    }

    fn effective_gas_price(&self, base_fee: Option<U256>) -> U256 {
        self.deposit.effective_gas_price(base_fee)
    }

    fn effective_nonce(&self) -> Option<u64> {
        Some(self.effective_nonce)
    }

    fn is_system_transaction(&self) -> bool {
        self.deposit.is_system_transaction
    }

    fn copy(&self) -> Self {
        Self { deposit: self.deposit.copy(), effective_nonce: self.effective_nonce }
    }
}
