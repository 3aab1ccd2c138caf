//! Transaction types for rollups.

mod abstraction;
pub use abstraction::RollupTransaction;

mod bridge;
pub use bridge::TxBridgeDeposit;

mod contract;
pub use contract::TxContract;

mod deposit;
pub use deposit::{TxDeposit, TxDepositWithNonce};

pub mod envelope;
pub use envelope::RollupTxEnvelope;

mod internal;
pub use internal::TxInternal;

mod json;
pub use json::TransactionJson;

pub mod legacy;
pub use legacy::TxLegacyWithOverride;

mod retry;
pub use retry::TxRetry;

mod rlp;
pub use rlp::RlpTxFields;

pub mod signature;

mod submit_retryable;
pub use submit_retryable::TxSubmitRetryable;

mod tx_type;
pub use tx_type::RollupTxType;

mod typed;
pub use typed::RollupTypedTransaction;

mod unsigned;
pub use unsigned::TxUnsigned;

#[cfg(test)]
pub(crate) mod test_utils;
