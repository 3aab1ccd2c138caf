//! The closed set of rollup transaction variants.

use crate::{
    RollupTxType, TransactionJson, TxBridgeDeposit, TxContract, TxDeposit, TxDepositWithNonce,
    TxInternal, TxLegacyWithOverride, TxRetry, TxSubmitRetryable, TxUnsigned,
    transaction::{RollupTransaction, legacy::RawLegacyTx},
};
use alloy_eips::{
    Typed2718,
    eip2718::{Decodable2718, Eip2718Error, Eip2718Result, Encodable2718},
    eip2930::AccessList,
};
use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// A rollup transaction of any variant.
///
/// Serializes through [`TransactionJson`], so deserializing runs the same validation as
/// [`TryFrom<TransactionJson>`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "TransactionJson", try_from = "TransactionJson")]
pub enum RollupTypedTransaction {
    /// OP Stack deposit.
    Deposit(TxDeposit),
    /// OP Stack deposit with the nonce it executed at.
    DepositWithNonce(TxDepositWithNonce),
    /// Legacy transaction with overridden hash.
    LegacyWithOverride(TxLegacyWithOverride),
    /// Unsigned transaction.
    Unsigned(TxUnsigned),
    /// ArbOS internal transaction.
    Internal(TxInternal),
    /// L1 bridge deposit.
    BridgeDeposit(TxBridgeDeposit),
    /// Queued contract call.
    Contract(TxContract),
    /// Retryable ticket redemption.
    Retry(TxRetry),
    /// Retryable ticket submission.
    SubmitRetryable(TxSubmitRetryable),
}

macro_rules! delegate {
    ($self:expr, $tx:ident => $body:expr) => {
        match $self {
            RollupTypedTransaction::Deposit($tx) => $body,
            RollupTypedTransaction::DepositWithNonce($tx) => $body,
            RollupTypedTransaction::LegacyWithOverride($tx) => $body,
            RollupTypedTransaction::Unsigned($tx) => $body,
            RollupTypedTransaction::Internal($tx) => $body,
            RollupTypedTransaction::BridgeDeposit($tx) => $body,
            RollupTypedTransaction::Contract($tx) => $body,
            RollupTypedTransaction::Retry($tx) => $body,
            RollupTypedTransaction::SubmitRetryable($tx) => $body,
        }
    };
}

// =============================================================================
// RollupTypedTransaction additional methods
// =============================================================================

impl RollupTypedTransaction {
    /// The account the transaction executes as, when it is known without signature recovery.
    ///
    /// Signed legacy transactions and internal transactions return `None`.
    pub fn sender(&self) -> Option<Address> {
        match self {
            Self::Deposit(tx) => Some(tx.from),
            Self::DepositWithNonce(tx) => Some(tx.deposit.from),
            Self::LegacyWithOverride(tx) => tx.sender(),
            Self::Unsigned(tx) => Some(tx.from),
            Self::Internal(_) => None,
            Self::BridgeDeposit(tx) => Some(tx.from),
            Self::Contract(tx) => Some(tx.from),
            Self::Retry(tx) => Some(tx.from),
            Self::SubmitRetryable(tx) => Some(tx.from),
        }
    }

    /// Returns `true` if the transaction is an OP Stack deposit, with or without nonce.
    pub const fn is_deposit(&self) -> bool {
        matches!(self, Self::Deposit(_) | Self::DepositWithNonce(_))
    }

    /// Return the inner deposit transaction if it exists.
    pub const fn deposit(&self) -> Option<&TxDeposit> {
        match self {
            Self::Deposit(tx) => Some(tx),
            Self::DepositWithNonce(tx) => Some(tx.deposit()),
            _ => None,
        }
    }

    /// Return the inner legacy transaction if it exists.
    pub const fn legacy(&self) -> Option<&TxLegacyWithOverride> {
        match self {
            Self::LegacyWithOverride(tx) => Some(tx),
            _ => None,
        }
    }

    /// Return the inner submit-retryable transaction if it exists.
    pub const fn submit_retryable(&self) -> Option<&TxSubmitRetryable> {
        match self {
            Self::SubmitRetryable(tx) => Some(tx),
            _ => None,
        }
    }

    /// The hash reported in place of the computed one, if any.
    pub fn hash_override(&self) -> Option<B256> {
        self.legacy().and_then(TxLegacyWithOverride::hash_override)
    }

    /// The fields written to the canonical encoding, without the type byte.
    ///
    /// Wrapper metadata never reaches the encoder: nonce-carrying deposits are encoded as the
    /// bare deposit and legacy wrappers as the plain legacy transaction.
    fn canonical_body(&self) -> &dyn Encodable {
        match self {
            Self::Deposit(tx) => tx,
            Self::DepositWithNonce(tx) => tx.deposit(),
            Self::LegacyWithOverride(tx) => tx.legacy(),
            Self::Unsigned(tx) => tx,
            Self::Internal(tx) => tx,
            Self::BridgeDeposit(tx) => tx,
            Self::Contract(tx) => tx,
            Self::Retry(tx) => tx,
            Self::SubmitRetryable(tx) => tx,
        }
    }
}

impl Typed2718 for RollupTypedTransaction {
    fn ty(&self) -> u8 {
        self.tx_type().into()
    }
}

impl RollupTransaction for RollupTypedTransaction {
    fn tx_type(&self) -> RollupTxType {
        delegate!(self, tx => tx.tx_type())
    }

    fn chain_id(&self) -> U256 {
        delegate!(self, tx => tx.chain_id())
    }

    fn access_list(&self) -> Option<&AccessList> {
        delegate!(self, tx => tx.access_list())
    }

    fn input(&self) -> Bytes {
        delegate!(self, tx => tx.input())
    }

    fn gas_limit(&self) -> u64 {
        delegate!(self, tx => tx.gas_limit())
    }

    fn gas_price(&self) -> U256 {
        delegate!(self, tx => tx.gas_price())
    }

    fn gas_tip_cap(&self) -> U256 {
        delegate!(self, tx => tx.gas_tip_cap())
    }

    fn gas_fee_cap(&self) -> U256 {
        delegate!(self, tx => tx.gas_fee_cap())
    }

    fn value(&self) -> U256 {
        delegate!(self, tx => tx.value())
    }

    fn nonce(&self) -> u64 {
        delegate!(self, tx => tx.nonce())
    }

    fn to(&self) -> Option<Address> {
        delegate!(self, tx => RollupTransaction::to(tx))
    }

    fn blob_gas(&self) -> u64 {
        delegate!(self, tx => tx.blob_gas())
    }

    fn blob_gas_fee_cap(&self) -> Option<U256> {
        delegate!(self, tx => tx.blob_gas_fee_cap())
    }

    fn blob_hashes(&self) -> Option<&[B256]> {
        delegate!(self, tx => tx.blob_hashes())
    }

    fn raw_signature_values(&self) -> (U256, U256, U256) {
        delegate!(self, tx => tx.raw_signature_values())
    }

    fn set_signature_values(&mut self, chain_id: U256, v: U256, r: U256, s: U256) {
        delegate!(self, tx => tx.set_signature_values(chain_id, v, r, s))
    }

    fn effective_gas_price(&self, base_fee: Option<U256>) -> U256 {
        delegate!(self, tx => tx.effective_gas_price(base_fee))
    }

    fn effective_nonce(&self) -> Option<u64> {
        delegate!(self, tx => tx.effective_nonce())
    }

    fn is_system_transaction(&self) -> bool {
        delegate!(self, tx => tx.is_system_transaction())
    }

    fn copy(&self) -> Self {
        match self {
            Self::Deposit(tx) => Self::Deposit(tx.copy()),
            Self::DepositWithNonce(tx) => Self::DepositWithNonce(tx.copy()),
            Self::LegacyWithOverride(tx) => Self::LegacyWithOverride(tx.copy()),
            Self::Unsigned(tx) => Self::Unsigned(tx.copy()),
            Self::Internal(tx) => Self::Internal(tx.copy()),
            Self::BridgeDeposit(tx) => Self::BridgeDeposit(tx.copy()),
            Self::Contract(tx) => Self::Contract(tx.copy()),
            Self::Retry(tx) => Self::Retry(tx.copy()),
            Self::SubmitRetryable(tx) => Self::SubmitRetryable(tx.copy()),
        }
    }
}

// =============================================================================
// EIP-2718 implementations
// =============================================================================

impl Encodable2718 for RollupTypedTransaction {
    fn type_flag(&self) -> Option<u8> {
        match self {
            Self::LegacyWithOverride(_) => None,
            _ => Some(self.ty()),
        }
    }

    fn encode_2718_len(&self) -> usize {
        usize::from(self.type_flag().is_some()) + self.canonical_body().length()
    }

    fn encode_2718(&self, out: &mut dyn BufMut) {
        if let Some(ty) = self.type_flag() {
            out.put_u8(ty);
        }
        self.canonical_body().encode(out);
    }
}

impl Decodable2718 for RollupTypedTransaction {
    fn typed_decode(ty: u8, buf: &mut &[u8]) -> Eip2718Result<Self> {
        Ok(match RollupTxType::try_from(ty)? {
            RollupTxType::Deposit => Self::Deposit(TxDeposit::decode(buf)?),
            RollupTxType::Unsigned => Self::Unsigned(TxUnsigned::decode(buf)?),
            RollupTxType::Internal => Self::Internal(TxInternal::decode(buf)?),
            RollupTxType::BridgeDeposit => Self::BridgeDeposit(TxBridgeDeposit::decode(buf)?),
            RollupTxType::Contract => Self::Contract(TxContract::decode(buf)?),
            RollupTxType::Retry => Self::Retry(TxRetry::decode(buf)?),
            RollupTxType::SubmitRetryable => {
                Self::SubmitRetryable(TxSubmitRetryable::decode(buf)?)
            }
            // The legacy wrapper is only ever encoded untagged.
            RollupTxType::LegacyWithOverride => return Err(Eip2718Error::UnexpectedType(ty)),
        })
    }

    fn fallback_decode(buf: &mut &[u8]) -> Eip2718Result<Self> {
        Ok(Self::LegacyWithOverride(TxLegacyWithOverride::new(RawLegacyTx::decode(buf)?)))
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<TxDeposit> for RollupTypedTransaction {
    fn from(tx: TxDeposit) -> Self {
        Self::Deposit(tx)
    }
}

impl From<TxDepositWithNonce> for RollupTypedTransaction {
    fn from(tx: TxDepositWithNonce) -> Self {
        Self::DepositWithNonce(tx)
    }
}

impl From<TxLegacyWithOverride> for RollupTypedTransaction {
    fn from(tx: TxLegacyWithOverride) -> Self {
        Self::LegacyWithOverride(tx)
    }
}

impl From<TxUnsigned> for RollupTypedTransaction {
    fn from(tx: TxUnsigned) -> Self {
        Self::Unsigned(tx)
    }
}

impl From<TxInternal> for RollupTypedTransaction {
    fn from(tx: TxInternal) -> Self {
        Self::Internal(tx)
    }
}

impl From<TxBridgeDeposit> for RollupTypedTransaction {
    fn from(tx: TxBridgeDeposit) -> Self {
        Self::BridgeDeposit(tx)
    }
}

impl From<TxContract> for RollupTypedTransaction {
    fn from(tx: TxContract) -> Self {
        Self::Contract(tx)
    }
}

impl From<TxRetry> for RollupTypedTransaction {
    fn from(tx: TxRetry) -> Self {
        Self::Retry(tx)
    }
}

impl From<TxSubmitRetryable> for RollupTypedTransaction {
    fn from(tx: TxSubmitRetryable) -> Self {
        Self::SubmitRetryable(tx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{ARB_RETRYABLE_TX_ADDRESS, ARBOS_ADDRESS},
        transaction::test_utils::{
            EFFECTIVE_NONCE, LEGACY_CHAIN_ID, SENDER, legacy, sample_transactions,
        },
    };
    use alloy_primitives::{hex, keccak256};
    use arbitrary::Arbitrary;
    use rand::Rng;

    /// Everything observable through the capability interface.
    fn observe(tx: &RollupTypedTransaction) -> impl PartialEq + core::fmt::Debug {
        (
            (tx.tx_type(), tx.chain_id(), tx.input(), tx.gas_limit(), tx.value(), tx.nonce()),
            (tx.gas_price(), tx.gas_tip_cap(), tx.gas_fee_cap(), RollupTransaction::to(tx)),
            (tx.raw_signature_values(), tx.effective_gas_price(None), tx.is_system_transaction()),
        )
    }

    #[test]
    fn eip2718_roundtrip_preserves_capabilities() {
        for tx in sample_transactions() {
            let encoded = tx.encoded_2718();
            assert_eq!(encoded.len(), tx.encode_2718_len());
            let decoded = RollupTypedTransaction::decode_2718(&mut encoded.as_slice()).unwrap();
            assert_eq!(observe(&decoded), observe(&tx), "{}", tx.tx_type());
        }
    }

    #[test]
    fn nonce_carrying_deposit_encodes_as_bare_deposit() {
        let txs = sample_transactions();
        let (bare, with_nonce) = (&txs[0], &txs[1]);
        similar_asserts::assert_eq!(bare.encoded_2718(), with_nonce.encoded_2718());

        let decoded = RollupTypedTransaction::decode_2718(&mut &with_nonce.encoded_2718()[..]);
        assert_eq!(decoded.unwrap(), *bare);
    }

    #[test]
    fn legacy_wrapper_is_encoded_untagged() {
        let mut tx = legacy();
        let plain = alloy_rlp::encode(tx.legacy());

        tx.hash_override = B256::repeat_byte(0xaa);
        tx.effective_gas_price_paid = 5;
        tx.l1_block_number = 100;
        tx.sender = Some(SENDER);
        let wrapped = RollupTypedTransaction::from(tx);

        assert_eq!(wrapped.type_flag(), None);
        assert_eq!(wrapped.encoded_2718(), plain);
        assert_eq!(wrapped.chain_id(), U256::from(LEGACY_CHAIN_ID));
        assert_eq!(wrapped.hash_override(), Some(B256::repeat_byte(0xaa)));
    }

    #[test]
    fn untagged_legacy_decodes_without_metadata() {
        let tx = RollupTypedTransaction::from(legacy());
        let decoded = RollupTypedTransaction::decode_2718(&mut &tx.encoded_2718()[..]).unwrap();
        let decoded = decoded.legacy().unwrap();
        assert_eq!(decoded.legacy, legacy().legacy);
        assert_eq!(decoded.l1_block_number, 0);
        assert_eq!(decoded.hash_override(), None);
    }

    #[test]
    fn rejects_tagged_legacy_wrapper() {
        let mut encoded = vec![0x78];
        encoded.extend(RollupTypedTransaction::from(legacy()).encoded_2718());
        assert!(matches!(
            RollupTypedTransaction::decode_2718(&mut encoded.as_slice()),
            Err(Eip2718Error::UnexpectedType(0x78))
        ));
    }

    #[test]
    fn rejects_unknown_type() {
        assert!(matches!(
            RollupTypedTransaction::decode_2718(&mut &hex!("02c0")[..]),
            Err(Eip2718Error::UnexpectedType(0x02))
        ));
    }

    #[test]
    fn trie_hash_is_keccak_of_encoding() {
        for tx in sample_transactions() {
            assert_eq!(tx.trie_hash(), keccak256(tx.encoded_2718()));
        }
    }

    #[test]
    fn implicit_destinations() {
        let txs = sample_transactions();
        assert_eq!(RollupTransaction::to(&txs[4]), Some(ARBOS_ADDRESS));
        assert_eq!(RollupTransaction::to(&txs[8]), Some(ARB_RETRYABLE_TX_ADDRESS));
        assert_eq!(RollupTransaction::to(&txs[3]), None);
    }

    #[test]
    fn feeless_variants_ignore_base_fee() {
        let base_fee = Some(U256::from(1_000_000));
        for tx in sample_transactions() {
            let price = tx.effective_gas_price(base_fee);
            match tx.tx_type() {
                RollupTxType::Deposit | RollupTxType::BridgeDeposit | RollupTxType::Internal => {
                    assert_eq!(price, U256::ZERO);
                    assert_eq!(tx.gas_price(), U256::ZERO);
                    assert_eq!(tx.raw_signature_values(), (U256::ZERO, U256::ZERO, U256::ZERO));
                }
                RollupTxType::LegacyWithOverride => assert_eq!(price, tx.gas_price()),
                _ => assert_eq!(price, U256::from(1_000_000)),
            }
        }
    }

    #[test]
    fn senders() {
        let txs = sample_transactions();
        assert_eq!(txs[0].sender(), Some(SENDER));
        assert_eq!(txs[1].sender(), Some(SENDER));
        assert_eq!(txs[2].sender(), None);
        assert_eq!(txs[4].sender(), None);
        assert_eq!(txs[8].sender(), Some(SENDER));
    }

    #[test]
    fn effective_nonce_only_for_nonce_carrying_deposit() {
        for tx in sample_transactions() {
            let expected = matches!(tx, RollupTypedTransaction::DepositWithNonce(_))
                .then_some(EFFECTIVE_NONCE);
            assert_eq!(tx.effective_nonce(), expected);
        }
    }

    #[test]
    fn arbitrary_copies_share_no_bytes() {
        let mut bytes = [0u8; 1024];
        rand::rng().fill(bytes.as_mut_slice());
        let mut unstructured = arbitrary::Unstructured::new(&bytes);

        for _ in 0..16 {
            let Ok(tx) = RollupTypedTransaction::arbitrary(&mut unstructured) else { break };
            let copy = tx.copy();
            assert_eq!(copy, tx);
            let (original, copied) = (tx.input(), copy.input());
            if !original.is_empty() && !matches!(tx, RollupTypedTransaction::SubmitRetryable(_)) {
                assert_ne!(original.as_ptr(), copied.as_ptr());
            }
        }
    }
}
