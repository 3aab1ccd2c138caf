//! Redemption of a previously submitted retryable ticket.

use crate::{
    RollupTxType,
    transaction::{
        RollupTransaction,
        abstraction::{copy_bytes, fee_market_gas_price},
        rlp::RlpTxFields,
    },
};
use alloy_eips::Typed2718;
use alloy_primitives::{Address, B256, Bytes, TxKind, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// Replays the call of a retryable ticket and accounts for the refunds owed once it succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxRetry {
    /// Chain the transaction is valid on.
    pub chain_id: U256,
    /// Nonce of the ticket.
    pub nonce: u64,
    /// The sender of the transaction.
    pub from: Address,
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
    /// The ticket being redeemed.
    pub ticket_id: B256,
    /// Receiver of the refund.
    pub refund_to: Address,
    /// The maximum refund sent to `refund_to`, the rest goes to `from`.
    pub max_refund: U256,
    /// The submission fee to refund if successful, capped by `max_refund`.
    pub submission_fee_refund: U256,
}

impl RlpTxFields for TxRetry {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.nonce.length()
            + self.from.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.to.length()
            + self.value.length()
            + self.input.0.length()
            + self.ticket_id.length()
            + self.refund_to.length()
            + self.max_refund.length()
            + self.submission_fee_refund.length()
    }

    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.nonce.encode(out);
        self.from.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.to.encode(out);
        self.value.encode(out);
        self.input.encode(out);
        self.ticket_id.encode(out);
        self.refund_to.encode(out);
        self.max_refund.encode(out);
        self.submission_fee_refund.encode(out);
    }

    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            nonce: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
            ticket_id: Decodable::decode(buf)?,
            refund_to: Decodable::decode(buf)?,
            max_refund: Decodable::decode(buf)?,
            submission_fee_refund: Decodable::decode(buf)?,
        })
    }
}

impl Encodable for TxRetry {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxRetry {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

impl Typed2718 for TxRetry {
    fn ty(&self) -> u8 {
        RollupTxType::Retry.into()
    }
}

impl RollupTransaction for TxRetry {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::Retry
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
            nonce: self.nonce,
            from: self.from,
            gas_fee_cap: self.gas_fee_cap,
            gas_limit: self.gas_limit,
            to: self.to,
            value: self.value,
            input: copy_bytes(&self.input),
            ticket_id: self.ticket_id,
            refund_to: self.refund_to,
            max_refund: self.max_refund,
            submission_fee_refund: self.submission_fee_refund,
        }
    }
}
