//! The JSON wire object of rollup transactions.
//!
//! Every field is optional on the wire. Which fields a transaction needs depends on its `type`
//! and is checked by [`TryFrom<TransactionJson>`], field by field in a fixed order, stopping at
//! the first failure.

use crate::{
    RollupTxType, RollupTypedTransaction, TxBridgeDeposit, TxContract, TxDecodeError, TxDeposit,
    TxDepositWithNonce, TxInternal, TxLegacyWithOverride, TxRetry, TxSubmitRetryable, TxUnsigned,
    transaction::{RollupTransaction, legacy::RawLegacyTx, signature::sanity_check_signature},
};
use alloy_consensus::TxLegacy;
use alloy_eips::eip2930::AccessList;
use alloy_primitives::{Address, B256, Bytes, U256};
use tracing::{debug, trace};

/// A transaction as exchanged over JSON.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionJson {
    /// The transaction type. Absent decodes as `0x0`, which no rollup variant uses.
    #[serde(rename = "type", default, with = "alloy_serde::quantity")]
    pub tx_type: u8,
    /// Chain id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<U256>,
    /// Sender nonce, or the effective nonce of a deposit.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub nonce: Option<u64>,
    /// Destination. Absent for contract creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Gas limit.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub gas: Option<u64>,
    /// Legacy gas price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<U256>,
    /// Priority fee cap. Never accepted by any rollup variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_priority_fee_per_gas: Option<U256>,
    /// Fee cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_fee_per_gas: Option<U256>,
    /// Wei amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    /// Call payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Bytes>,
    /// Access list. Never accepted by any rollup variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_list: Option<AccessList>,
    /// Signature recovery id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v: Option<U256>,
    /// Signature `r`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<U256>,
    /// Signature `s`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<U256>,
    /// Hash override of a legacy wrapper.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<B256>,
    /// Sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Deposit source hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<B256>,
    /// Deposit mint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint: Option<U256>,
    /// Deposit system flag. Absent means `false`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_system_tx: Option<bool>,
    /// L1 request id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<B256>,
    /// Retryable ticket id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<B256>,
    /// Maximum refund of a retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_refund: Option<U256>,
    /// Submission fee refunded by a retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_fee_refund: Option<U256>,
    /// Refund receiver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_to: Option<Address>,
    /// L1 base fee at submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub l1_base_fee: Option<U256>,
    /// Value deposited with a retryable submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_value: Option<U256>,
    /// Destination of the retryable call. Absent for contract creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_to: Option<Address>,
    /// Value of the retryable call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_value: Option<U256>,
    /// Payload of the retryable call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_data: Option<Bytes>,
    /// Beneficiary of a retryable ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary: Option<Address>,
    /// Maximum submission fee of a retryable ticket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_submission_fee: Option<U256>,
    /// Gas price a legacy wrapper actually paid.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub effective_gas_price: Option<u64>,
    /// L1 block a legacy wrapper was sourced from.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "alloy_serde::quantity::opt")]
    pub l1_block_number: Option<u64>,
}

fn require<T>(field: Option<T>, name: &'static str) -> Result<T, TxDecodeError> {
    field.ok_or(TxDecodeError::MissingField(name))
}

impl TransactionJson {
    fn into_variant(self, tx_type: RollupTxType) -> Result<RollupTypedTransaction, TxDecodeError> {
        match tx_type {
            RollupTxType::Deposit => self.into_deposit(),
            RollupTxType::LegacyWithOverride => self.into_legacy().map(Into::into),
            RollupTxType::Internal => self.into_internal().map(Into::into),
            RollupTxType::BridgeDeposit => self.into_bridge_deposit().map(Into::into),
            RollupTxType::Unsigned => self.into_unsigned().map(Into::into),
            RollupTxType::Contract => self.into_contract().map(Into::into),
            RollupTxType::Retry => self.into_retry().map(Into::into),
            RollupTxType::SubmitRetryable => self.into_submit_retryable().map(Into::into),
        }
    }

    fn into_deposit(self) -> Result<RollupTypedTransaction, TxDecodeError> {
        let fee_market_fields = [
            (self.access_list.is_some(), "accessList"),
            (self.max_fee_per_gas.is_some(), "maxFeePerGas"),
            (self.max_priority_fee_per_gas.is_some(), "maxPriorityFeePerGas"),
        ];
        if let Some((_, name)) = fee_market_fields.into_iter().find(|(present, _)| *present) {
            return Err(TxDecodeError::UnexpectedField(name));
        }
        if self.gas_price.is_some_and(|price| !price.is_zero()) {
            return Err(TxDecodeError::InvalidValue("gasPrice", "must be zero for deposits"));
        }
        for (component, name) in [(self.v, "v"), (self.r, "r"), (self.s, "s")] {
            if component.is_some_and(|value| !value.is_zero()) {
                return Err(TxDecodeError::InvalidValue(name, "deposit signature must be zero"));
            }
        }

        let deposit = TxDeposit {
            to: self.to.into(),
            gas_limit: require(self.gas, "gas")?,
            value: require(self.value, "value")?,
            mint: self.mint,
            input: require(self.input, "input")?,
            from: require(self.from, "from")?,
            source_hash: require(self.source_hash, "sourceHash")?,
            is_system_transaction: self.is_system_tx.unwrap_or_default(),
        };

        Ok(match self.nonce {
            Some(nonce) => TxDepositWithNonce::new(deposit, nonce).into(),
            None => deposit.into(),
        })
    }

    fn into_legacy(self) -> Result<TxLegacyWithOverride, TxDecodeError> {
        let to = self.to.into();
        let nonce = require(self.nonce, "nonce")?;
        let gas_price = u128::try_from(require(self.gas_price, "gasPrice")?)
            .map_err(|_| TxDecodeError::InvalidValue("gasPrice", "exceeds 128 bits"))?;
        let gas_limit = require(self.gas, "gas")?;
        let value = require(self.value, "value")?;
        let input = require(self.input, "input")?;
        let v = require(self.v, "v")?;
        let r = require(self.r, "r")?;
        let s = require(self.s, "s")?;
        if !(v.is_zero() && r.is_zero() && s.is_zero()) {
            sanity_check_signature(v, r, s, true)?;
        }

        let tx = TxLegacy { chain_id: None, nonce, gas_price, gas_limit, to, value, input };
        Ok(TxLegacyWithOverride {
            legacy: RawLegacyTx::new(tx, v, r, s),
            hash_override: self.hash.unwrap_or_default(),
            effective_gas_price_paid: require(self.effective_gas_price, "effectiveGasPrice")?,
            l1_block_number: require(self.l1_block_number, "l1BlockNumber")?,
            sender: self.from,
        })
    }

    fn into_internal(self) -> Result<TxInternal, TxDecodeError> {
        Ok(TxInternal {
            chain_id: require(self.chain_id, "chainId")?,
            input: require(self.input, "input")?,
        })
    }

    fn into_bridge_deposit(self) -> Result<TxBridgeDeposit, TxDecodeError> {
        Ok(TxBridgeDeposit {
            chain_id: require(self.chain_id, "chainId")?,
            l1_request_id: require(self.request_id, "requestId")?,
            to: require(self.to, "to")?,
            from: require(self.from, "from")?,
            value: require(self.value, "value")?,
        })
    }

    fn into_unsigned(self) -> Result<TxUnsigned, TxDecodeError> {
        Ok(TxUnsigned {
            chain_id: require(self.chain_id, "chainId")?,
            from: require(self.from, "from")?,
            nonce: require(self.nonce, "nonce")?,
            gas_fee_cap: require(self.max_fee_per_gas, "maxFeePerGas")?,
            gas_limit: require(self.gas, "gas")?,
            to: self.to.into(),
            value: require(self.value, "value")?,
            input: require(self.input, "input")?,
        })
    }

    fn into_contract(self) -> Result<TxContract, TxDecodeError> {
        Ok(TxContract {
            chain_id: require(self.chain_id, "chainId")?,
            request_id: require(self.request_id, "requestId")?,
            from: require(self.from, "from")?,
            gas_fee_cap: require(self.max_fee_per_gas, "maxFeePerGas")?,
            gas_limit: require(self.gas, "gas")?,
            to: self.to.into(),
            value: require(self.value, "value")?,
            input: require(self.input, "input")?,
        })
    }

    fn into_retry(self) -> Result<TxRetry, TxDecodeError> {
        Ok(TxRetry {
            chain_id: require(self.chain_id, "chainId")?,
            nonce: require(self.nonce, "nonce")?,
            from: require(self.from, "from")?,
            gas_fee_cap: require(self.max_fee_per_gas, "maxFeePerGas")?,
            gas_limit: require(self.gas, "gas")?,
            to: self.to.into(),
            value: require(self.value, "value")?,
            input: require(self.input, "input")?,
            ticket_id: require(self.ticket_id, "ticketId")?,
            refund_to: require(self.refund_to, "refundTo")?,
            max_refund: require(self.max_refund, "maxRefund")?,
            submission_fee_refund: require(self.submission_fee_refund, "submissionFeeRefund")?,
        })
    }

    fn into_submit_retryable(self) -> Result<TxSubmitRetryable, TxDecodeError> {
        Ok(TxSubmitRetryable {
            chain_id: require(self.chain_id, "chainId")?,
            request_id: require(self.request_id, "requestId")?,
            from: require(self.from, "from")?,
            l1_base_fee: require(self.l1_base_fee, "l1BaseFee")?,
            deposit_value: require(self.deposit_value, "depositValue")?,
            gas_fee_cap: require(self.max_fee_per_gas, "maxFeePerGas")?,
            gas_limit: require(self.gas, "gas")?,
            beneficiary: require(self.beneficiary, "beneficiary")?,
            max_submission_fee: require(self.max_submission_fee, "maxSubmissionFee")?,
            fee_refund_addr: require(self.refund_to, "refundTo")?,
            retry_value: require(self.retry_value, "retryValue")?,
            retry_data: require(self.retry_data, "retryData")?,
            retry_to: self.retry_to.into(),
        })
    }
}

impl TryFrom<TransactionJson> for RollupTypedTransaction {
    type Error = TxDecodeError;

    fn try_from(json: TransactionJson) -> Result<Self, Self::Error> {
        let ty = json.tx_type;
        let decoded = RollupTxType::try_from(ty)
            .map_err(|_| TxDecodeError::UnsupportedType(ty))
            .and_then(|tx_type| json.into_variant(tx_type));

        match &decoded {
            Ok(tx) => trace!(target: "rollup_tx", tx_type = %tx.tx_type(), "Decoded transaction"),
            Err(err) => debug!(target: "rollup_tx", ty, %err, "Rejected transaction"),
        }
        decoded
    }
}

impl From<&RollupTypedTransaction> for TransactionJson {
    fn from(tx: &RollupTypedTransaction) -> Self {
        let base = Self { tx_type: tx.tx_type().into(), ..Default::default() };
        match tx {
            RollupTypedTransaction::Deposit(tx) => Self::from_deposit(tx, base),
            RollupTypedTransaction::DepositWithNonce(tx) => Self::from_deposit(
                tx.deposit(),
                Self { nonce: Some(tx.effective_nonce), ..base },
            ),
            RollupTypedTransaction::LegacyWithOverride(tx) => {
                let legacy = &tx.legacy;
                Self {
                    nonce: Some(legacy.tx.nonce),
                    gas_price: Some(U256::from(legacy.tx.gas_price)),
                    gas: Some(legacy.tx.gas_limit),
                    to: legacy.tx.to.to().copied(),
                    value: Some(legacy.tx.value),
                    input: Some(legacy.tx.input.clone()),
                    v: Some(legacy.v),
                    r: Some(legacy.r),
                    s: Some(legacy.s),
                    hash: tx.hash_override(),
                    from: tx.sender,
                    effective_gas_price: Some(tx.effective_gas_price_paid),
                    l1_block_number: Some(tx.l1_block_number),
                    ..base
                }
            }
            RollupTypedTransaction::Internal(tx) => {
                Self { chain_id: Some(tx.chain_id), input: Some(tx.input.clone()), ..base }
            }
            RollupTypedTransaction::BridgeDeposit(tx) => Self {
                chain_id: Some(tx.chain_id),
                request_id: Some(tx.l1_request_id),
                to: Some(tx.to),
                from: Some(tx.from),
                value: Some(tx.value),
                ..base
            },
            RollupTypedTransaction::Unsigned(tx) => Self {
                chain_id: Some(tx.chain_id),
                from: Some(tx.from),
                nonce: Some(tx.nonce),
                max_fee_per_gas: Some(tx.gas_fee_cap),
                gas: Some(tx.gas_limit),
                to: tx.to.to().copied(),
                value: Some(tx.value),
                input: Some(tx.input.clone()),
                ..base
            },
            RollupTypedTransaction::Contract(tx) => Self {
                chain_id: Some(tx.chain_id),
                request_id: Some(tx.request_id),
                from: Some(tx.from),
                max_fee_per_gas: Some(tx.gas_fee_cap),
                gas: Some(tx.gas_limit),
                to: tx.to.to().copied(),
                value: Some(tx.value),
                input: Some(tx.input.clone()),
                ..base
            },
            RollupTypedTransaction::Retry(tx) => Self {
                chain_id: Some(tx.chain_id),
                nonce: Some(tx.nonce),
                from: Some(tx.from),
                max_fee_per_gas: Some(tx.gas_fee_cap),
                gas: Some(tx.gas_limit),
                to: tx.to.to().copied(),
                value: Some(tx.value),
                input: Some(tx.input.clone()),
                ticket_id: Some(tx.ticket_id),
                refund_to: Some(tx.refund_to),
                max_refund: Some(tx.max_refund),
                submission_fee_refund: Some(tx.submission_fee_refund),
                ..base
            },
            RollupTypedTransaction::SubmitRetryable(tx) => Self {
                chain_id: Some(tx.chain_id),
                request_id: Some(tx.request_id),
                from: Some(tx.from),
                l1_base_fee: Some(tx.l1_base_fee),
                deposit_value: Some(tx.deposit_value),
                max_fee_per_gas: Some(tx.gas_fee_cap),
                gas: Some(tx.gas_limit),
                beneficiary: Some(tx.beneficiary),
                max_submission_fee: Some(tx.max_submission_fee),
                refund_to: Some(tx.fee_refund_addr),
                retry_value: Some(tx.retry_value),
                retry_data: Some(tx.retry_data.clone()),
                retry_to: tx.retry_to.to().copied(),
                ..base
            },
        }
    }
}

impl From<RollupTypedTransaction> for TransactionJson {
    fn from(tx: RollupTypedTransaction) -> Self {
        Self::from(&tx)
    }
}

impl TransactionJson {
    fn from_deposit(tx: &TxDeposit, base: Self) -> Self {
        Self {
            to: tx.to.to().copied(),
            gas: Some(tx.gas_limit),
            value: Some(tx.value),
            mint: tx.mint,
            input: Some(tx.input.clone()),
            from: Some(tx.from),
            source_hash: Some(tx.source_hash),
            is_system_tx: Some(tx.is_system_transaction),
            ..base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::test_utils::{
        EFFECTIVE_NONCE, SENDER, deposit, legacy, sample_transactions, submit_retryable,
    };
    use alloy_eips::eip2718::Encodable2718;
    use alloy_primitives::TxKind;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn to_value(tx: &RollupTypedTransaction) -> Value {
        serde_json::to_value(tx).unwrap()
    }

    fn decode(value: Value) -> Result<RollupTypedTransaction, TxDecodeError> {
        serde_json::from_value::<TransactionJson>(value).unwrap().try_into()
    }

    #[test]
    fn json_roundtrip() {
        for tx in sample_transactions() {
            let encoded = serde_json::to_string(&tx).unwrap();
            let decoded: RollupTypedTransaction = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, tx, "{encoded}");
        }
    }

    #[test]
    fn uses_wire_names() {
        let txs = sample_transactions();
        let deposit = to_value(&txs[0]);
        assert_eq!(deposit["type"], "0x7e");
        assert_eq!(deposit["isSystemTx"], false);
        assert!(deposit.get("sourceHash").is_some());
        assert!(deposit.get("to").is_none());

        let submit = to_value(&txs[8]);
        for key in ["requestId", "l1BaseFee", "maxSubmissionFee", "refundTo", "retryData"] {
            assert!(submit.get(key).is_some(), "{key}");
        }
        assert!(submit.get("input").is_none());
    }

    #[rstest]
    #[case::deposit(0, "gas")]
    #[case::deposit(0, "value")]
    #[case::deposit(0, "input")]
    #[case::deposit(0, "from")]
    #[case::deposit(0, "sourceHash")]
    #[case::legacy(2, "nonce")]
    #[case::legacy(2, "gasPrice")]
    #[case::legacy(2, "gas")]
    #[case::legacy(2, "v")]
    #[case::legacy(2, "s")]
    #[case::legacy(2, "effectiveGasPrice")]
    #[case::legacy(2, "l1BlockNumber")]
    #[case::unsigned(3, "chainId")]
    #[case::unsigned(3, "nonce")]
    #[case::unsigned(3, "maxFeePerGas")]
    #[case::internal(4, "chainId")]
    #[case::internal(4, "input")]
    #[case::bridge_deposit(5, "requestId")]
    #[case::bridge_deposit(5, "to")]
    #[case::contract(6, "requestId")]
    #[case::contract(6, "input")]
    #[case::retry(7, "ticketId")]
    #[case::retry(7, "refundTo")]
    #[case::retry(7, "maxRefund")]
    #[case::retry(7, "submissionFeeRefund")]
    #[case::submit_retryable(8, "l1BaseFee")]
    #[case::submit_retryable(8, "depositValue")]
    #[case::submit_retryable(8, "beneficiary")]
    #[case::submit_retryable(8, "maxSubmissionFee")]
    #[case::submit_retryable(8, "retryValue")]
    #[case::submit_retryable(8, "retryData")]
    fn rejects_missing_required_field(#[case] index: usize, #[case] field: &'static str) {
        let mut value = to_value(&sample_transactions()[index]);
        assert!(value.as_object_mut().unwrap().remove(field).is_some());
        assert_eq!(decode(value), Err(TxDecodeError::MissingField(field)));
    }

    #[rstest]
    #[case::deposit(0x7e, "gas")]
    #[case::legacy(0x78, "nonce")]
    #[case::internal(0x6a, "chainId")]
    #[case::bridge_deposit(0x64, "chainId")]
    #[case::unsigned(0x65, "chainId")]
    #[case::contract(0x66, "chainId")]
    #[case::retry(0x68, "chainId")]
    #[case::submit_retryable(0x69, "chainId")]
    fn reports_first_missing_field(#[case] ty: u8, #[case] field: &'static str) {
        let json = TransactionJson { tx_type: ty, ..Default::default() };
        assert_eq!(RollupTypedTransaction::try_from(json), Err(TxDecodeError::MissingField(field)));
    }

    #[test]
    fn optional_destinations() {
        let mut value = to_value(&sample_transactions()[6]);
        value.as_object_mut().unwrap().remove("to");
        assert_eq!(RollupTransaction::to(&decode(value).unwrap()), None);

        let mut value = to_value(&sample_transactions()[8]);
        value.as_object_mut().unwrap().remove("retryTo");
        let tx = decode(value).unwrap();
        assert_eq!(tx.submit_retryable().unwrap().retry_to, TxKind::Create);
    }

    #[rstest]
    #[case::access_list("accessList", json!([]))]
    #[case::max_fee("maxFeePerGas", json!("0x1"))]
    #[case::max_priority_fee("maxPriorityFeePerGas", json!("0x0"))]
    fn deposit_rejects_fee_market_fields(#[case] field: &'static str, #[case] extra: Value) {
        let mut value = to_value(&deposit().into());
        value[field] = extra;
        assert_eq!(decode(value), Err(TxDecodeError::UnexpectedField(field)));
    }

    #[test]
    fn deposit_gas_price_must_be_zero() {
        let mut value = to_value(&deposit().into());
        value["gasPrice"] = json!("0x0");
        assert!(decode(value.clone()).is_ok());

        value["gasPrice"] = json!("0x1");
        assert!(matches!(decode(value), Err(TxDecodeError::InvalidValue("gasPrice", _))));
    }

    #[test]
    fn deposit_signature_must_be_zero() {
        let mut value = to_value(&deposit().into());
        value["v"] = json!("0x0");
        value["r"] = json!("0x0");
        assert!(decode(value.clone()).is_ok());

        value["s"] = json!("0x1");
        assert!(matches!(decode(value), Err(TxDecodeError::InvalidValue("s", _))));
    }

    #[test]
    fn deposit_checks_forbidden_fields_before_required_ones() {
        let json = TransactionJson {
            tx_type: 0x7e,
            max_fee_per_gas: Some(U256::from(1)),
            gas_price: Some(U256::from(1)),
            ..Default::default()
        };
        assert_eq!(
            RollupTypedTransaction::try_from(json),
            Err(TxDecodeError::UnexpectedField("maxFeePerGas"))
        );
    }

    #[test]
    fn system_flag_defaults_to_false() {
        let mut value = to_value(&TxDeposit { is_system_transaction: true, ..deposit() }.into());
        assert!(decode(value.clone()).unwrap().is_system_transaction());

        value.as_object_mut().unwrap().remove("isSystemTx");
        assert!(!decode(value).unwrap().is_system_transaction());
    }

    #[test]
    fn nonce_selects_nonce_carrying_deposit() {
        let mut value = to_value(&deposit().into());
        value["nonce"] = json!(format!("{EFFECTIVE_NONCE:#x}"));
        let with_nonce = decode(value.clone()).unwrap();
        assert!(matches!(with_nonce, RollupTypedTransaction::DepositWithNonce(_)));
        assert_eq!(with_nonce.effective_nonce(), Some(EFFECTIVE_NONCE));

        value.as_object_mut().unwrap().remove("nonce");
        let bare = decode(value).unwrap();
        assert!(matches!(bare, RollupTypedTransaction::Deposit(_)));
        similar_asserts::assert_eq!(with_nonce.encoded_2718(), bare.encoded_2718());
    }

    #[rstest]
    #[case::eip1559(json!({ "type": "0x2" }), 0x02)]
    #[case::arbitrum_gap(json!({ "type": "0x67" }), 0x67)]
    #[case::missing(json!({}), 0x00)]
    fn rejects_unsupported_type(#[case] value: Value, #[case] ty: u8) {
        assert_eq!(decode(value), Err(TxDecodeError::UnsupportedType(ty)));
    }

    #[test]
    fn serde_surfaces_decode_errors() {
        let err = serde_json::from_value::<RollupTypedTransaction>(json!({ "type": "0x2" }))
            .unwrap_err();
        assert!(err.to_string().contains("not supported"), "{err}");
    }

    #[test]
    fn legacy_signature_is_sanity_checked() {
        let mut value = to_value(&legacy().into());
        value["s"] = json!("0x0");
        assert_eq!(
            decode(value),
            Err(TxDecodeError::InvalidValue("signature", "invalid signature scalar"))
        );
    }

    #[test]
    fn unsigned_legacy_reports_sender_override() {
        let mut value = to_value(&legacy().into());
        value["v"] = json!("0x0");
        value["r"] = json!("0x0");
        value["s"] = json!("0x0");
        value["from"] = json!(SENDER);
        let tx = decode(value).unwrap();
        assert_eq!(tx.sender(), Some(SENDER));
        assert_eq!(tx.chain_id(), U256::ZERO);
    }

    #[test]
    fn legacy_gas_price_must_fit_128_bits() {
        let mut value = to_value(&legacy().into());
        value["gasPrice"] = json!(U256::from(u128::MAX) + U256::from(1));
        assert_eq!(decode(value), Err(TxDecodeError::InvalidValue("gasPrice", "exceeds 128 bits")));
    }

    #[test]
    fn legacy_hash_override_roundtrips() {
        let tx = TxLegacyWithOverride { hash_override: B256::repeat_byte(0xab), ..legacy() };
        let value = to_value(&tx.into());
        assert_eq!(value["hash"], json!(B256::repeat_byte(0xab)));
        assert_eq!(decode(value).unwrap().hash_override(), Some(B256::repeat_byte(0xab)));
    }

    #[test]
    fn submit_retryable_payload_is_derived() {
        let tx = submit_retryable();
        let decoded = decode(to_value(&tx.clone().into())).unwrap();
        assert_eq!(decoded.input(), tx.call_data());
    }
}
