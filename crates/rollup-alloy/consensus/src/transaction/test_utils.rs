//! Fixtures shared by the transaction tests.

use crate::{
    RollupTypedTransaction, TxBridgeDeposit, TxContract, TxDeposit, TxDepositWithNonce,
    TxInternal, TxLegacyWithOverride, TxRetry, TxSubmitRetryable, TxUnsigned,
    transaction::legacy::RawLegacyTx,
};
use alloy_consensus::TxLegacy;
use alloy_primitives::{Address, B256, Bytes, TxKind, U256, address};

/// Sender of every fixture that carries one.
pub(crate) const SENDER: Address = address!("0x00000000000000000000000000000000000000f1");

/// Effective nonce of the nonce-carrying deposit fixture.
pub(crate) const EFFECTIVE_NONCE: u64 = 9;

/// Chain id encoded in the `v` of the legacy fixture.
pub(crate) const LEGACY_CHAIN_ID: u64 = 84_532;

pub(crate) fn deposit() -> TxDeposit {
    TxDeposit {
        source_hash: B256::repeat_byte(0x01),
        from: SENDER,
        to: TxKind::Create,
        mint: Some(U256::from(100)),
        value: U256::from(100),
        gas_limit: 50_000,
        is_system_transaction: false,
        input: Bytes::from_static(&[0x60, 0x80]),
    }
}

pub(crate) fn legacy() -> TxLegacyWithOverride {
    TxLegacyWithOverride {
        effective_gas_price_paid: 900_000_000,
        l1_block_number: 19_000_000,
        ..TxLegacyWithOverride::new(RawLegacyTx::new(
            TxLegacy {
                nonce: 3,
                gas_price: 1_000_000_000,
                gas_limit: 21_000,
                to: TxKind::Call(address!("0x00000000000000000000000000000000000000f2")),
                value: U256::from(1),
                ..Default::default()
            },
            U256::from(LEGACY_CHAIN_ID * 2 + 35),
            U256::from(11),
            U256::from(22),
        ))
    }
}

pub(crate) fn unsigned() -> TxUnsigned {
    TxUnsigned {
        chain_id: U256::from(42161),
        from: SENDER,
        nonce: 1,
        gas_fee_cap: U256::from(10),
        gas_limit: 21_000,
        to: TxKind::Create,
        value: U256::ZERO,
        input: Bytes::from_static(b"init"),
    }
}

pub(crate) fn internal() -> TxInternal {
    TxInternal { chain_id: U256::from(42161), input: Bytes::from_static(&[1, 2]) }
}

pub(crate) fn bridge_deposit() -> TxBridgeDeposit {
    TxBridgeDeposit {
        chain_id: U256::from(42161),
        l1_request_id: B256::repeat_byte(0x02),
        from: SENDER,
        to: address!("0x00000000000000000000000000000000000000f3"),
        value: U256::from(5),
    }
}

pub(crate) fn contract() -> TxContract {
    TxContract {
        chain_id: U256::from(42161),
        request_id: B256::repeat_byte(0x03),
        from: SENDER,
        gas_fee_cap: U256::from(10),
        gas_limit: 30_000,
        to: TxKind::Call(address!("0x00000000000000000000000000000000000000f4")),
        value: U256::from(1),
        input: Bytes::from_static(&[0xaa]),
    }
}

pub(crate) fn retry() -> TxRetry {
    TxRetry {
        chain_id: U256::from(42161),
        nonce: 4,
        from: SENDER,
        gas_fee_cap: U256::from(10),
        gas_limit: 30_000,
        to: TxKind::Call(address!("0x00000000000000000000000000000000000000f5")),
        value: U256::from(2),
        input: Bytes::new(),
        ticket_id: B256::repeat_byte(0x04),
        refund_to: address!("0x00000000000000000000000000000000000000f6"),
        max_refund: U256::from(1000),
        submission_fee_refund: U256::from(10),
    }
}

pub(crate) fn submit_retryable() -> TxSubmitRetryable {
    TxSubmitRetryable {
        chain_id: U256::from(42161),
        request_id: B256::repeat_byte(0x05),
        from: SENDER,
        l1_base_fee: U256::from(7),
        deposit_value: U256::from(1000),
        gas_fee_cap: U256::from(10),
        gas_limit: 100_000,
        retry_to: TxKind::Call(address!("0x00000000000000000000000000000000000000f7")),
        retry_value: U256::from(3),
        beneficiary: address!("0x00000000000000000000000000000000000000f8"),
        max_submission_fee: U256::from(50),
        fee_refund_addr: address!("0x00000000000000000000000000000000000000f9"),
        retry_data: Bytes::from_static(&[0xbb; 40]),
    }
}

/// One transaction of every variant, in declaration order of [`RollupTypedTransaction`].
pub(crate) fn sample_transactions() -> Vec<RollupTypedTransaction> {
    vec![
        deposit().into(),
        TxDepositWithNonce::new(deposit(), EFFECTIVE_NONCE).into(),
        legacy().into(),
        unsigned().into(),
        internal().into(),
        bridge_deposit().into(),
        contract().into(),
        retry().into(),
        submit_retryable().into(),
    ]
}
