//! Unsigned transactions originated inside the rollup.

use crate::{
    RollupTxType,
    transaction::{
        RollupTransaction,
        abstraction::{copy_bytes, fee_market_gas_price},
        rlp::RlpTxFields,
    },
};
use alloy_eips::Typed2718;
use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// A chain scoped transaction that is executed without a signature.
///
/// The sender is carried explicitly and is trusted by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxUnsigned {
    /// Chain the transaction is valid on.
    pub chain_id: U256,
    /// The sender of the transaction.
    pub from: Address,
    /// Nonce of the sender account.
    pub nonce: u64,
    /// Wei per gas.
    pub gas_fee_cap: U256,
    /// The gas limit.
    pub gas_limit: u64,
    /// Destination, [`TxKind::Create`] for contract creation.
    pub to: TxKind,
    /// Wei amount.
    pub value: U256,
    /// Contract invocation input data.
    pub input: Bytes,
}

impl RlpTxFields for TxUnsigned {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.from.length()
            + self.nonce.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.0.length()
    }

    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.from.encode(out);
        self.nonce.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
    }

    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }
}

impl Encodable for TxUnsigned {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxUnsigned {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

impl Typed2718 for TxUnsigned {
    fn ty(&self) -> u8 {
        RollupTxType::Unsigned.into()
    }
}

impl RollupTransaction for TxUnsigned {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::Unsigned
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn input(&self) -> Bytes {
        self.input.clone()
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn gas_price(&self) -> U256 {
        self.gas_fee_cap
    }

    fn gas_tip_cap(&self) -> U256 {
        self.gas_fee_cap
    }

    fn gas_fee_cap(&self) -> U256 {
        self.gas_fee_cap
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn to(&self) -> Option<Address> {
        self.to.to().copied()
    }

    fn effective_gas_price(&self, base_fee: Option<U256>) -> U256 {
        fee_market_gas_price(self.gas_fee_cap, base_fee)
    }

    fn copy(&self) -> Self {
        Self {
            chain_id: self.chain_id,
            from: self.from,
            nonce: self.nonce,
            gas_fee_cap: self.gas_fee_cap,
            gas_limit: self.gas_limit,
            to: self.to,
            value: self.value,
            input: copy_bytes(&self.input),
        }
    }
}
