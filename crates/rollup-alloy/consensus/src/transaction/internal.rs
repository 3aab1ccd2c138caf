//! Calls issued by ArbOS itself.

use crate::{
    RollupTxType,
    constants::ARBOS_ADDRESS,
    transaction::{RollupTransaction, abstraction::copy_bytes, rlp::RlpTxFields},
};
use alloy_eips::Typed2718;
use alloy_primitives::{Address, Bytes, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// A protocol internal call to [`ARBOS_ADDRESS`].
///
/// Carries only its payload. Gas, value and nonce are implicitly zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxInternal {
    /// Chain the transaction is valid on.
    pub chain_id: U256,
    /// Input to the ArbOS call.
    pub input: Bytes,
}

impl RlpTxFields for TxInternal {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length() + self.input.0.length()
    }

    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.input.encode(out);
    }

    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self { chain_id: Decodable::decode(buf)?, input: Decodable::decode(buf)? })
    }
}

impl Encodable for TxInternal {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxInternal {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

impl Typed2718 for TxInternal {
    fn ty(&self) -> u8 {
        RollupTxType::Internal.into()
    }
}

impl RollupTransaction for TxInternal {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::Internal
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn input(&self) -> Bytes {
        self.input.clone()
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
        U256::ZERO
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn to(&self) -> Option<Address> {
        Some(ARBOS_ADDRESS)
    }

    fn effective_gas_price(&self, _base_fee: Option<U256>) -> U256 {
        U256::ZERO
    }

    fn copy(&self) -> Self {
        Self { chain_id: self.chain_id, input: copy_bytes(&self.input) }
    }
}
