//! Legacy transactions re-wrapped with a hash override and out-of-band metadata.

use crate::{
    RollupTxType,
    transaction::{
        RollupTransaction,
        abstraction::copy_bytes,
        rlp::RlpTxFields,
        signature::derive_chain_id,
    },
};
use alloy_consensus::TxLegacy;
use alloy_eips::Typed2718;
use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// A legacy transaction together with its raw `(v, r, s)` signature values.
///
/// The chain id of [`TxLegacy`] is kept in sync with the one encoded in `v`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct RawLegacyTx {
    /// The unsigned legacy fields.
    pub tx: TxLegacy,
    /// Recovery id, possibly [EIP-155] protected.
    ///
    /// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
    pub v: U256,
    /// Signature `r` scalar.
    pub r: U256,
    /// Signature `s` scalar.
    pub s: U256,
}

impl RawLegacyTx {
    /// Builds a signed legacy transaction, deriving the chain id from `v`.
    pub fn new(mut tx: TxLegacy, v: U256, r: U256, s: U256) -> Self {
        tx.chain_id = legacy_chain_id(v);
        Self { tx, v, r, s }
    }

    /// Returns `true` if all of `v`, `r` and `s` are zero.
    pub fn is_unsigned(&self) -> bool {
        self.v.is_zero() && self.r.is_zero() && self.s.is_zero()
    }
}

fn legacy_chain_id(v: U256) -> Option<u64> {
    derive_chain_id(v).and_then(|id| u64::try_from(id).ok())
}

impl RlpTxFields for RawLegacyTx {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.tx.nonce.length()
            + self.tx.gas_price.length()
            + self.tx.gas_limit.length()
            + self.tx.to.length()
            + self.tx.value.length()
            + self.tx.input.0.length()
            + self.v.length()
            + self.r.length()
            + self.s.length()
    }

    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.tx.nonce.encode(out);
        self.tx.gas_price.encode(out);
        self.tx.gas_limit.encode(out);
        self.tx.to.encode(out);
        self.tx.value.encode(out);
        self.tx.input.encode(out);
        self.v.encode(out);
        self.r.encode(out);
        self.s.encode(out);
    }

    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let tx = TxLegacy {
            chain_id: None,
            nonce: Decodable::decode(buf)?,
            gas_price: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        };
        let v = Decodable::decode(buf)?;
        let r = Decodable::decode(buf)?;
        let s = Decodable::decode(buf)?;
        Ok(Self::new(tx, v, r, s))
    }
}

impl Encodable for RawLegacyTx {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for RawLegacyTx {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

/// A legacy transaction carried through the rollup with metadata that does not affect its
/// canonical encoding.
///
/// Only [`RawLegacyTx`] is ever encoded. A non-zero `hash_override` replaces the computed hash
/// of the envelope holding this transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxLegacyWithOverride {
    /// The wrapped legacy transaction.
    pub legacy: RawLegacyTx,
    /// Hash reported in place of the computed one. Zero when absent.
    pub hash_override: B256,
    /// Gas price the transaction actually paid.
    pub effective_gas_price_paid: u64,
    /// Number of the L1 block the transaction was sourced from.
    pub l1_block_number: u64,
    /// Sender to report when the wrapped transaction is unsigned.
    pub sender: Option<Address>,
}

impl TxLegacyWithOverride {
    /// Wraps a legacy transaction without any metadata.
    pub const fn new(legacy: RawLegacyTx) -> Self {
        Self {
            legacy,
            hash_override: B256::ZERO,
            effective_gas_price_paid: 0,
            l1_block_number: 0,
            sender: None,
        }
    }

    /// Returns the wrapped legacy transaction.
    pub const fn legacy(&self) -> &RawLegacyTx {
        &self.legacy
    }

    /// The hash override, if one is set.
    pub fn hash_override(&self) -> Option<B256> {
        (!self.hash_override.is_zero()).then_some(self.hash_override)
    }

    /// The sender override. Only honoured while the wrapped transaction is unsigned.
    pub fn sender(&self) -> Option<Address> {
        self.sender.filter(|_| self.legacy.is_unsigned())
    }
}

impl Typed2718 for TxLegacyWithOverride {
    fn ty(&self) -> u8 {
        RollupTxType::LegacyWithOverride.into()
    }
}

impl RollupTransaction for TxLegacyWithOverride {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::LegacyWithOverride
    }

    fn chain_id(&self) -> U256 {
        derive_chain_id(self.legacy.v).unwrap_or_default()
    }

    fn input(&self) -> Bytes {
        self.legacy.tx.input.clone()
    }

    fn gas_limit(&self) -> u64 {
        self.legacy.tx.gas_limit
    }

    fn gas_price(&self) -> U256 {
        U256::from(self.legacy.tx.gas_price)
    }

    fn gas_tip_cap(&self) -> U256 {
        self.gas_price()
    }

    fn gas_fee_cap(&self) -> U256 {
        self.gas_price()
    }

    fn value(&self) -> U256 {
        self.legacy.tx.value
    }

    fn nonce(&self) -> u64 {
        self.legacy.tx.nonce
    }

    fn to(&self) -> Option<Address> {
        self.legacy.tx.to.to().copied()
    }

    fn raw_signature_values(&self) -> (U256, U256, U256) {
        (self.legacy.v, self.legacy.r, self.legacy.s)
    }

    fn set_signature_values(&mut self, _chain_id: U256, v: U256, r: U256, s: U256) {
        self.legacy.v = v;
        self.legacy.r = r;
        self.legacy.s = s;
        self.legacy.tx.chain_id = legacy_chain_id(v);
    }

    fn effective_gas_price(&self, _base_fee: Option<U256>) -> U256 {
        self.gas_price()
    }

    fn copy(&self) -> Self {
        let tx = &self.legacy.tx;
        Self {
            legacy: RawLegacyTx {
                tx: TxLegacy {
                    chain_id: tx.chain_id,
                    nonce: tx.nonce,
                    gas_price: tx.gas_price,
                    gas_limit: tx.gas_limit,
                    to: tx.to,
                    value: tx.value,
                    input: copy_bytes(&tx.input),
                },
                v: self.legacy.v,
                r: self.legacy.r,
                s: self.legacy.s,
            },
            hash_override: self.hash_override,
            effective_gas_price_paid: self.effective_gas_price_paid,
            l1_block_number: self.l1_block_number,
            sender: self.sender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{TxKind, address, b256, hex, keccak256};

    // <https://etherscan.io/tx/0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060>
    fn first_transfer() -> RawLegacyTx {
        RawLegacyTx::new(
            TxLegacy {
                chain_id: None,
                nonce: 0,
                gas_price: 50_000_000_000_000,
                gas_limit: 21_000,
                to: TxKind::Call(address!("5df9b87991262f6ba471f09758cde1c0fc1de734")),
                value: U256::from(31337),
                input: Bytes::new(),
            },
            U256::from(28),
            U256::from_be_bytes(hex!(
                "88ff6cf0fefd94db46111149ae4bfc179e9b94721fffd821d38d16464b3f71d0"
            )),
            U256::from_be_bytes(hex!(
                "45e0aff800961cfce805daef7016b9b675c137a6a41a548f7b60a3484c06a33a"
            )),
        )
    }

    #[test]
    fn legacy_hash_matches_chain() {
        let tx = first_transfer();
        let mut buf = Vec::new();
        tx.encode(&mut buf);
        assert_eq!(
            keccak256(&buf),
            b256!("5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060")
        );
        assert_eq!(RawLegacyTx::decode(&mut buf.as_slice()).unwrap(), tx);
    }

    #[test]
    fn protected_v_sets_chain_id() {
        let one = U256::from(1);
        let tx = RawLegacyTx::new(TxLegacy::default(), U256::from(37), one, one);
        assert_eq!(tx.tx.chain_id, Some(1));

        let mut buf = Vec::new();
        tx.encode(&mut buf);
        let decoded = RawLegacyTx::decode(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded.tx.chain_id, Some(1));
        assert_eq!(TxLegacyWithOverride::new(decoded).chain_id(), U256::from(1));
    }

    #[test]
    fn fee_accessors_report_gas_price() {
        let tx = TxLegacyWithOverride::new(first_transfer());
        let price = U256::from(50_000_000_000_000u64);
        assert_eq!(tx.gas_price(), price);
        assert_eq!(tx.gas_tip_cap(), price);
        assert_eq!(tx.gas_fee_cap(), price);
        assert_eq!(tx.effective_gas_price(None), price);
        assert_eq!(tx.effective_gas_price(Some(U256::from(1))), price);
    }

    #[test]
    fn set_signature_values_updates_the_wrapped_transaction() {
        let mut tx = TxLegacyWithOverride::new(first_transfer());
        tx.set_signature_values(U256::ZERO, U256::from(38), U256::from(5), U256::from(6));
        assert_eq!(tx.raw_signature_values(), (U256::from(38), U256::from(5), U256::from(6)));
        assert_eq!(tx.legacy.tx.chain_id, Some(1));
        assert_eq!(tx.chain_id(), U256::from(1));
    }

    #[test]
    fn sender_override_requires_unsigned_transaction() {
        let sender = address!("00000000000000000000000000000000000000aa");
        let signed = TxLegacyWithOverride {
            sender: Some(sender),
            ..TxLegacyWithOverride::new(first_transfer())
        };
        assert_eq!(signed.sender(), None);

        let unsigned = TxLegacyWithOverride {
            sender: Some(sender),
            ..TxLegacyWithOverride::new(RawLegacyTx::default())
        };
        assert_eq!(unsigned.sender(), Some(sender));
    }

    #[test]
    fn zero_hash_override_is_absent() {
        let mut tx = TxLegacyWithOverride::new(first_transfer());
        assert_eq!(tx.hash_override(), None);
        tx.hash_override = B256::repeat_byte(0x11);
        assert_eq!(tx.hash_override(), Some(B256::repeat_byte(0x11)));
    }

    #[test]
    fn copy_does_not_share_input() {
        let mut legacy = first_transfer();
        legacy.tx.input = Bytes::from(vec![1u8, 2, 3]);
        let tx = TxLegacyWithOverride { l1_block_number: 7, ..TxLegacyWithOverride::new(legacy) };
        let copy = tx.copy();
        assert_eq!(copy, tx);
        assert_ne!(copy.legacy.tx.input.as_ptr(), tx.legacy.tx.input.as_ptr());
    }
}
