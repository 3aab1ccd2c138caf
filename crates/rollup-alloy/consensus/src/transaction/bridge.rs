//! Value deposits bridged from L1.

use crate::{
    RollupTxType,
    transaction::{RollupTransaction, rlp::RlpTxFields},
};
use alloy_eips::Typed2718;
use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// Mints `value` to `to` on behalf of an L1 deposit request.
///
/// A bridge deposit never executes code: it carries no payload, no gas and no fees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxBridgeDeposit {
    /// Chain the deposit is credited on.
    pub chain_id: U256,
    /// Identifier of the L1 deposit request.
    pub l1_request_id: B256,
    /// The L1 sender.
    pub from: Address,
    /// The credited account.
    pub to: Address,
    /// Wei amount.
    pub value: U256,
}

impl RlpTxFields for TxBridgeDeposit {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.l1_request_id.length()
            + self.from.length()
            + self.to.length()
            + self.value.length()
    }

    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.l1_request_id.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        self.value.encode(out);
    }

    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            l1_request_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
        })
    }
}

impl Encodable for TxBridgeDeposit {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxBridgeDeposit {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

impl Typed2718 for TxBridgeDeposit {
    fn ty(&self) -> u8 {
        RollupTxType::BridgeDeposit.into()
    }
}

impl RollupTransaction for TxBridgeDeposit {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::BridgeDeposit
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn input(&self) -> Bytes {
        Bytes::new()
    }

    fn gas_limit(&self) -> u64 {
        0
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
        Some(self.to)
    }

    fn effective_gas_price(&self, _base_fee: Option<U256>) -> U256 {
        U256::ZERO
    }

    fn copy(&self) -> Self {
        Self {
            chain_id: self.chain_id,
            l1_request_id: self.l1_request_id,
            from: self.from,
            to: self.to,
            value: self.value,
        }
    }
}
