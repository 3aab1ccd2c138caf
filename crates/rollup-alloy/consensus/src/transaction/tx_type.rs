//! Contains the transaction type identifier for the rollup variants.

use crate::constants::{
    ARBITRUM_CONTRACT_TX_TYPE, ARBITRUM_DEPOSIT_TX_TYPE, ARBITRUM_INTERNAL_TX_TYPE,
    ARBITRUM_LEGACY_TX_TYPE, ARBITRUM_RETRY_TX_TYPE, ARBITRUM_SUBMIT_RETRYABLE_TX_TYPE,
    ARBITRUM_UNSIGNED_TX_TYPE, DEPOSIT_TX_TYPE,
};
use alloy_eips::{
    Typed2718,
    eip2718::{Eip2718Error, IsTyped2718},
};
use alloy_primitives::{U8, U64};
use alloy_rlp::{BufMut, Decodable, Encodable};
use derive_more::Display;

/// Rollup transaction type flags, covering the OP Stack deposit and the Arbitrum transaction
/// family.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, Default, PartialEq, PartialOrd, Ord, Hash, Display)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "U8", try_from = "U64")]
pub enum RollupTxType {
    /// Arbitrum L1-to-L2 bridge deposit.
    #[display("bridge_deposit")]
    BridgeDeposit = ARBITRUM_DEPOSIT_TX_TYPE,
    /// Arbitrum unsigned transaction.
    #[display("unsigned")]
    Unsigned = ARBITRUM_UNSIGNED_TX_TYPE,
    /// Arbitrum contract transaction.
    #[display("contract")]
    Contract = ARBITRUM_CONTRACT_TX_TYPE,
    /// Arbitrum retryable ticket redemption.
    #[display("retry")]
    Retry = ARBITRUM_RETRY_TX_TYPE,
    /// Arbitrum retryable ticket submission.
    #[display("submit_retryable")]
    SubmitRetryable = ARBITRUM_SUBMIT_RETRYABLE_TX_TYPE,
    /// ArbOS internal transaction.
    #[display("internal")]
    Internal = ARBITRUM_INTERNAL_TX_TYPE,
    /// Re-wrapped legacy transaction with a hash override.
    #[display("legacy_with_override")]
    LegacyWithOverride = ARBITRUM_LEGACY_TX_TYPE,
    /// OP Stack deposit transaction.
    #[default]
    #[display("deposit")]
    Deposit = DEPOSIT_TX_TYPE,
}

impl RollupTxType {
    /// List of all variants.
    pub const ALL: [Self; 8] = [
        Self::BridgeDeposit,
        Self::Unsigned,
        Self::Contract,
        Self::Retry,
        Self::SubmitRetryable,
        Self::Internal,
        Self::LegacyWithOverride,
        Self::Deposit,
    ];

    /// Returns `true` if the type is [`RollupTxType::Deposit`].
    pub const fn is_deposit(&self) -> bool {
        matches!(self, Self::Deposit)
    }

    /// Returns `true` if transactions of this type pay for gas through a fee cap.
    ///
    /// Deposits, bridge deposits and internal transactions are feeless. The legacy wrapper pays a
    /// fixed gas price and is not counted here either.
    pub const fn is_fee_market(&self) -> bool {
        matches!(self, Self::Unsigned | Self::Contract | Self::Retry | Self::SubmitRetryable)
    }
}

#[cfg(feature = "arbitrary")]
impl arbitrary::Arbitrary<'_> for RollupTxType {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let i = u.choose_index(Self::ALL.len())?;
        Ok(Self::ALL[i])
    }
}

impl From<RollupTxType> for U8 {
    fn from(tx_type: RollupTxType) -> Self {
        Self::from(u8::from(tx_type))
    }
}

impl From<RollupTxType> for u8 {
    fn from(v: RollupTxType) -> Self {
        v as Self
    }
}

impl TryFrom<u8> for RollupTxType {
    type Error = Eip2718Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            ARBITRUM_DEPOSIT_TX_TYPE => Self::BridgeDeposit,
            ARBITRUM_UNSIGNED_TX_TYPE => Self::Unsigned,
            ARBITRUM_CONTRACT_TX_TYPE => Self::Contract,
            ARBITRUM_RETRY_TX_TYPE => Self::Retry,
            ARBITRUM_SUBMIT_RETRYABLE_TX_TYPE => Self::SubmitRetryable,
            ARBITRUM_INTERNAL_TX_TYPE => Self::Internal,
            ARBITRUM_LEGACY_TX_TYPE => Self::LegacyWithOverride,
            DEPOSIT_TX_TYPE => Self::Deposit,
            _ => return Err(Eip2718Error::UnexpectedType(value)),
        })
    }
}

impl TryFrom<u64> for RollupTxType {
    type Error = &'static str;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let err = || "invalid tx type";
        let value: u8 = value.try_into().map_err(|_| err())?;
        Self::try_from(value).map_err(|_| err())
    }
}

impl TryFrom<U64> for RollupTxType {
    type Error = &'static str;

    fn try_from(value: U64) -> Result<Self, Self::Error> {
        value.to::<u64>().try_into()
    }
}

impl PartialEq<u8> for RollupTxType {
    fn eq(&self, other: &u8) -> bool {
        (*self as u8) == *other
    }
}

impl PartialEq<RollupTxType> for u8 {
    fn eq(&self, other: &RollupTxType) -> bool {
        *self == *other as Self
    }
}

impl Encodable for RollupTxType {
    fn encode(&self, out: &mut dyn BufMut) {
        (*self as u8).encode(out);
    }

    fn length(&self) -> usize {
        1
    }
}

impl Decodable for RollupTxType {
    fn decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let ty = u8::decode(buf)?;

        Self::try_from(ty).map_err(|_| alloy_rlp::Error::Custom("invalid transaction type"))
    }
}

impl Typed2718 for RollupTxType {
    fn ty(&self) -> u8 {
        (*self).into()
    }
}

impl IsTyped2718 for RollupTxType {
    fn is_type(type_id: u8) -> bool {
        // The legacy wrapper is encoded untagged, so 0x78 never prefixes an envelope.
        matches!(
            type_id,
            ARBITRUM_DEPOSIT_TX_TYPE
                | ARBITRUM_UNSIGNED_TX_TYPE
                | ARBITRUM_CONTRACT_TX_TYPE
                | ARBITRUM_RETRY_TX_TYPE
                | ARBITRUM_SUBMIT_RETRYABLE_TX_TYPE
                | ARBITRUM_INTERNAL_TX_TYPE
                | DEPOSIT_TX_TYPE
        )
    }
}
