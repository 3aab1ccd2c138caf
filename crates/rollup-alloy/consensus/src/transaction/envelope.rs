//! The envelope a rollup transaction travels in once it has been decoded.

use crate::{RollupTransaction, RollupTxType, RollupTypedTransaction};
use alloy_eips::{
    Typed2718,
    eip2718::{Decodable2718, Eip2718Result, Encodable2718},
};
use alloy_primitives::{B256, keccak256};
use alloy_rlp::BufMut;
use std::sync::OnceLock;
use tracing::trace;

/// A [`RollupTypedTransaction`] together with its lazily computed hash and encoded size.
///
/// The caches are filled on first access and dropped whenever the transaction is replaced through
/// [`RollupTxEnvelope::set_transaction`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(from = "RollupTypedTransaction", into = "RollupTypedTransaction")]
pub struct RollupTxEnvelope {
    transaction: RollupTypedTransaction,
    hash: OnceLock<B256>,
    size: OnceLock<usize>,
}

impl RollupTxEnvelope {
    /// Wraps a transaction with empty caches.
    pub const fn new(transaction: RollupTypedTransaction) -> Self {
        Self { transaction, hash: OnceLock::new(), size: OnceLock::new() }
    }

    /// Returns the wrapped transaction.
    pub const fn transaction(&self) -> &RollupTypedTransaction {
        &self.transaction
    }

    /// Consumes the envelope and returns the wrapped transaction.
    pub fn into_transaction(self) -> RollupTypedTransaction {
        self.transaction
    }

    /// Replaces the wrapped transaction, invalidating the cached hash and size.
    pub fn set_transaction(&mut self, transaction: RollupTypedTransaction) {
        trace!(
            target: "rollup_tx",
            old = %self.transaction.tx_type(),
            new = %transaction.tx_type(),
            "Resetting envelope caches"
        );
        self.transaction = transaction;
        self.hash = OnceLock::new();
        self.size = OnceLock::new();
    }

    /// Returns the (cached) transaction hash.
    ///
    /// This is the keccak256 of the [EIP-2718] encoding, unless the transaction carries a hash
    /// override.
    ///
    /// [EIP-2718]: https://eips.ethereum.org/EIPS/eip-2718
    pub fn hash(&self) -> &B256 {
        self.hash.get_or_init(|| {
            self.transaction
                .hash_override()
                .unwrap_or_else(|| keccak256(self.transaction.encoded_2718()))
        })
    }

    /// Returns the (cached) length of the [EIP-2718] encoding.
    ///
    /// [EIP-2718]: https://eips.ethereum.org/EIPS/eip-2718
    pub fn size(&self) -> usize {
        *self.size.get_or_init(|| self.transaction.encode_2718_len())
    }

    /// The discriminant of the wrapped transaction.
    pub fn tx_type(&self) -> RollupTxType {
        self.transaction.tx_type()
    }

    /// Returns an envelope around a deep copy of the transaction, with empty caches.
    pub fn copy(&self) -> Self {
        Self::new(self.transaction.copy())
    }
}

impl PartialEq for RollupTxEnvelope {
    fn eq(&self, other: &Self) -> bool {
        // The caches are derived from the transaction.
        self.transaction == other.transaction
    }
}

impl Eq for RollupTxEnvelope {}

impl From<RollupTypedTransaction> for RollupTxEnvelope {
    fn from(transaction: RollupTypedTransaction) -> Self {
        Self::new(transaction)
    }
}

impl From<RollupTxEnvelope> for RollupTypedTransaction {
    fn from(envelope: RollupTxEnvelope) -> Self {
        envelope.transaction
    }
}

impl Typed2718 for RollupTxEnvelope {
    fn ty(&self) -> u8 {
        self.transaction.ty()
    }
}

impl Encodable2718 for RollupTxEnvelope {
    fn type_flag(&self) -> Option<u8> {
        self.transaction.type_flag()
    }

    fn encode_2718_len(&self) -> usize {
        self.size()
    }

    fn encode_2718(&self, out: &mut dyn BufMut) {
        self.transaction.encode_2718(out);
    }
}

impl Decodable2718 for RollupTxEnvelope {
    fn typed_decode(ty: u8, buf: &mut &[u8]) -> Eip2718Result<Self> {
        RollupTypedTransaction::typed_decode(ty, buf).map(Self::new)
    }

    fn fallback_decode(buf: &mut &[u8]) -> Eip2718Result<Self> {
        RollupTypedTransaction::fallback_decode(buf).map(Self::new)
    }
}
