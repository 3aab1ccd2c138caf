//! The capability interface shared by every rollup transaction variant.

use crate::RollupTxType;
use alloy_eips::{Typed2718, eip2930::AccessList};
use alloy_primitives::{Address, B256, Bytes, U256};

/// Read access to a rollup transaction without knowing its concrete variant.
///
/// Generic processing code (fee computation, sender handling, execution setup) only talks to
/// transactions through this trait. Feeless variants report zero rather than an absent value for
/// every fee accessor, so call sites never branch on absence.
pub trait RollupTransaction: Typed2718 {
    /// The discriminant of the variant.
    fn tx_type(&self) -> RollupTxType;

    /// The chain id, zero for variants that are not chain scoped.
    fn chain_id(&self) -> U256;

    /// The access list. No current variant carries one.
    fn access_list(&self) -> Option<&AccessList> {
        None
    }

    /// The call payload.
    ///
    /// Owned because some variants derive their payload instead of storing it.
    fn input(&self) -> Bytes;

    /// The gas limit.
    fn gas_limit(&self) -> u64;

    /// The gas price. Zero for feeless variants, the fee cap for fee market variants.
    fn gas_price(&self) -> U256;

    /// The priority fee cap.
    fn gas_tip_cap(&self) -> U256;

    /// The fee cap.
    fn gas_fee_cap(&self) -> U256;

    /// The value transferred to the destination.
    fn value(&self) -> U256;

    /// The sender nonce, zero where not applicable.
    fn nonce(&self) -> u64;

    /// The destination. `None` signals contract creation.
    fn to(&self) -> Option<Address>;

    /// Blob gas used. Reserved, always zero.
    fn blob_gas(&self) -> u64 {
        0
    }

    /// Blob fee cap. Reserved, always absent.
    fn blob_gas_fee_cap(&self) -> Option<U256> {
        None
    }

    /// Blob versioned hashes. Reserved, always absent.
    fn blob_hashes(&self) -> Option<&[B256]> {
        None
    }

    /// The raw `(v, r, s)` signature values, the zero triple for unsigned variants.
    fn raw_signature_values(&self) -> (U256, U256, U256) {
        (U256::ZERO, U256::ZERO, U256::ZERO)
    }

    /// Sets the signature values. A no-op for variants that cannot be signed.
    fn set_signature_values(&mut self, _chain_id: U256, _v: U256, _r: U256, _s: U256) {}

    /// The market clearing gas price for the given base fee.
    ///
    /// Feeless variants report zero regardless of `base_fee`. Fee market variants report the
    /// fee cap without a base fee and the base fee otherwise; capping against the fee cap is left
    /// to callers holding both values.
    fn effective_gas_price(&self, base_fee: Option<U256>) -> U256;

    /// The out-of-band nonce carried next to the canonical fields, if any.
    fn effective_nonce(&self) -> Option<u64> {
        None
    }

    /// Whether the transaction is exempt from the block gas limit.
    fn is_system_transaction(&self) -> bool {
        false
    }

    /// Returns a deep copy that shares no byte storage with `self`.
    fn copy(&self) -> Self
    where
        Self: Sized;
}

/// Effective gas price of a fee market variant.
pub(crate) fn fee_market_gas_price(fee_cap: U256, base_fee: Option<U256>) -> U256 {
    base_fee.unwrap_or(fee_cap)
}

/// Duplicates a byte buffer into freshly allocated storage.
pub(crate) fn copy_bytes(bytes: &Bytes) -> Bytes {
    Bytes::copy_from_slice(bytes)
}
