//! Submission of a retryable ticket.

use crate::{
    RollupTxType,
    constants::{ARB_RETRYABLE_TX_ADDRESS, SUBMIT_RETRYABLE_SELECTOR},
    transaction::{
        RollupTransaction,
        abstraction::{copy_bytes, fee_market_gas_price},
        rlp::RlpTxFields,
    },
};
use alloy_eips::Typed2718;
use alloy_primitives::{Address, B256, Bytes, TxKind, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};

/// Size of an ABI word.
const WORD: usize = 32;

/// Number of head words of `submitRetryable`: ten static arguments and the offset of `retryData`.
const HEAD_WORDS: usize = 11;

/// Creates a retryable ticket from an L1 request.
///
/// The transaction executes as a call to the `ArbRetryableTx` precompile. Its input is not
/// stored but derived from the ticket fields, see [`TxSubmitRetryable::call_data`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct TxSubmitRetryable {
    /// Chain the ticket is created on.
    pub chain_id: U256,
    /// Identifier of the originating L1 request.
    pub request_id: B256,
    /// The L1 sender.
    pub from: Address,
    /// L1 base fee at submission.
    pub l1_base_fee: U256,
    /// Value deposited along with the ticket.
    pub deposit_value: U256,
    /// Wei per gas.
    pub gas_fee_cap: U256,
    /// Gas limit of the retry.
    pub gas_limit: u64,
    /// Destination of the retry, [`TxKind::Create`] for contract creation.
    pub retry_to: TxKind,
    /// Value sent by the retry.
    pub retry_value: U256,
    /// Account allowed to cancel or redeem the ticket.
    pub beneficiary: Address,
    /// Upper bound on the submission fee.
    pub max_submission_fee: U256,
    /// Receiver of excess fees.
    pub fee_refund_addr: Address,
    /// Input of the retry.
    pub retry_data: Bytes,
}

impl TxSubmitRetryable {
    /// ABI encoded call of `ArbRetryableTx.submitRetryable` carrying this ticket.
    ///
    /// `submitRetryable(bytes32 requestId, uint256 l1BaseFee, uint256 deposit,
    /// uint256 callvalue, uint256 gasFeeCap, uint64 gasLimit, uint256 maxSubmissionFee,
    /// address feeRefundAddress, address beneficiary, address retryTo, bytes retryData)`
    ///
    /// A contract creation retry passes the zero address as `retryTo`.
    pub fn call_data(&self) -> Bytes {
        let padded_data_len = self.retry_data.len().div_ceil(WORD) * WORD;
        let mut out = Vec::with_capacity(
            SUBMIT_RETRYABLE_SELECTOR.len() + (HEAD_WORDS + 1) * WORD + padded_data_len,
        );
        out.extend_from_slice(&SUBMIT_RETRYABLE_SELECTOR);

        let args_start = out.len();
        out.extend_from_slice(self.request_id.as_slice());
        for word in [
            self.l1_base_fee,
            self.deposit_value,
            self.retry_value,
            self.gas_fee_cap,
            U256::from(self.gas_limit),
            self.max_submission_fee,
        ] {
            out.extend_from_slice(&word.to_be_bytes::<WORD>());
        }

        let retry_to = self.retry_to.to().copied().unwrap_or_default();
        for address in [self.fee_refund_addr, self.beneficiary, retry_to] {
            out.extend_from_slice(address.into_word().as_slice());
        }

        // Offset of `retryData` from the start of the arguments, past its own head word.
        let offset = out.len() - args_start + WORD;
        out.extend_from_slice(&U256::from(offset).to_be_bytes::<WORD>());
        out.extend_from_slice(&U256::from(self.retry_data.len()).to_be_bytes::<WORD>());
        out.extend_from_slice(&self.retry_data);
        out.resize(out.len() + padded_data_len - self.retry_data.len(), 0);

        out.into()
    }
}

impl RlpTxFields for TxSubmitRetryable {
    fn rlp_encoded_fields_length(&self) -> usize {
        self.chain_id.length()
            + self.request_id.length()
            + self.from.length()
            + self.l1_base_fee.length()
            + self.deposit_value.length()
            + self.gas_fee_cap.length()
            + self.gas_limit.length()
            + self.retry_to.length()
            + self.retry_value.length()
            + self.beneficiary.length()
            + self.max_submission_fee.length()
            + self.fee_refund_addr.length()
            + self.retry_data.0.length()
    }

    fn rlp_encode_fields(&self, out: &mut dyn BufMut) {
        self.chain_id.encode(out);
        self.request_id.encode(out);
        self.from.encode(out);
        self.l1_base_fee.encode(out);
        self.deposit_value.encode(out);
        self.gas_fee_cap.encode(out);
        self.gas_limit.encode(out);
        self.retry_to.encode(out);
        self.retry_value.encode(out);
        self.beneficiary.encode(out);
        self.max_submission_fee.encode(out);
        self.fee_refund_addr.encode(out);
        self.retry_data.encode(out);
    }

    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Ok(Self {
            chain_id: Decodable::decode(buf)?,
            request_id: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            l1_base_fee: Decodable::decode(buf)?,
            deposit_value: Decodable::decode(buf)?,
            gas_fee_cap: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            retry_to: Decodable::decode(buf)?,
            retry_value: Decodable::decode(buf)?,
            beneficiary: Decodable::decode(buf)?,
            max_submission_fee: Decodable::decode(buf)?,
            fee_refund_addr: Decodable::decode(buf)?,
            retry_data: Decodable::decode(buf)?,
        })
    }
}

impl Encodable for TxSubmitRetryable {
    fn encode(&self, out: &mut dyn BufMut) {
        self.rlp_encode(out);
    }

    fn length(&self) -> usize {
        self.rlp_encoded_length()
    }
}

impl Decodable for TxSubmitRetryable {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        Self::rlp_decode(buf)
    }
}

impl Typed2718 for TxSubmitRetryable {
    fn ty(&self) -> u8 {
        RollupTxType::SubmitRetryable.into()
    }
}

impl RollupTransaction for TxSubmitRetryable {
    fn tx_type(&self) -> RollupTxType {
        RollupTxType::SubmitRetryable
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn input(&self) -> Bytes {
        self.call_data()
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

    // The deposit is credited by the precompile, the call itself carries no value.
    fn value(&self) -> U256 {
        U256::ZERO
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn to(&self) -> Option<Address> {
        Some(ARB_RETRYABLE_TX_ADDRESS)
    }

    fn effective_gas_price(&self, base_fee: Option<U256>) -> U256 {
        fee_market_gas_price(self.gas_fee_cap, base_fee)
    }

    fn copy(&self) -> Self {
        Self {
            chain_id: self.chain_id,
            request_id: self.request_id,
            from: self.from,
            l1_base_fee: self.l1_base_fee,
            deposit_value: self.deposit_value,
            gas_fee_cap: self.gas_fee_cap,
            gas_limit: self.gas_limit,
            retry_to: self.retry_to,
            retry_value: self.retry_value,
            beneficiary: self.beneficiary,
            max_submission_fee: self.max_submission_fee,
            fee_refund_addr: self.fee_refund_addr,
            retry_data: copy_bytes(&self.retry_data),
        }
    }
}
