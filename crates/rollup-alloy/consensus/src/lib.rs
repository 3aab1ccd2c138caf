#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;

mod error;
pub use error::{SignatureError, TxDecodeError};

pub mod transaction;
pub use transaction::{
    RollupTransaction, RollupTxEnvelope, RollupTxType, RollupTypedTransaction, TransactionJson,
    TxBridgeDeposit, TxContract, TxDeposit, TxDepositWithNonce, TxInternal, TxLegacyWithOverride,
    TxRetry, TxSubmitRetryable, TxUnsigned, legacy::RawLegacyTx,
};
