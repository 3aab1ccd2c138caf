//! Well-known addresses and identifiers used by the rollup transaction variants.

use alloy_primitives::{Address, address};

/// Address of the ArbOS system account. Implicit destination of [`TxInternal`].
///
/// [`TxInternal`]: crate::TxInternal
pub const ARBOS_ADDRESS: Address = address!("0x00000000000000000000000000000000000a4b05");

/// Address of the `ArbRetryableTx` precompile. Implicit destination of [`TxSubmitRetryable`].
///
/// [`TxSubmitRetryable`]: crate::TxSubmitRetryable
pub const ARB_RETRYABLE_TX_ADDRESS: Address =
    address!("0x000000000000000000000000000000000000006e");

/// The 4-byte selector of `ArbRetryableTx.submitRetryable`.
pub const SUBMIT_RETRYABLE_SELECTOR: [u8; 4] = [0xc9, 0xf9, 0x5d, 0x32];

/// Identifier for an Arbitrum bridge deposit transaction.
pub const ARBITRUM_DEPOSIT_TX_TYPE: u8 = 0x64;

/// Identifier for an Arbitrum unsigned transaction.
pub const ARBITRUM_UNSIGNED_TX_TYPE: u8 = 0x65;

/// Identifier for an Arbitrum contract transaction.
pub const ARBITRUM_CONTRACT_TX_TYPE: u8 = 0x66;

/// Identifier for an Arbitrum retry transaction.
pub const ARBITRUM_RETRY_TX_TYPE: u8 = 0x68;

/// Identifier for an Arbitrum submit-retryable transaction.
pub const ARBITRUM_SUBMIT_RETRYABLE_TX_TYPE: u8 = 0x69;

/// Identifier for an ArbOS internal transaction.
pub const ARBITRUM_INTERNAL_TX_TYPE: u8 = 0x6a;

/// Identifier for a re-wrapped Arbitrum legacy transaction.
pub const ARBITRUM_LEGACY_TX_TYPE: u8 = 0x78;

/// Identifier for an OP Stack deposit transaction.
pub const DEPOSIT_TX_TYPE: u8 = 0x7e;
