//! Shape checks for raw legacy `(v, r, s)` signature values.
//!
//! These only check that the values could form a valid signature. Recovering the signer is left
//! to the consumer of the transaction.

use crate::SignatureError;
use alloy_primitives::{U256, uint};

/// The order of the secp256k1 curve group.
pub const SECP256K1N: U256 =
    uint!(0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141_U256);

const UNPROTECTED_V_OFFSET: u64 = 27;
const EIP155_V_OFFSET: u64 = 35;

/// Returns `true` if `v` carries an [EIP-155] chain id.
///
/// Small values other than the pre-EIP-155 `27`/`28` and the bare recovery ids `0`/`1` are
/// treated as protected, as is anything wider than a byte.
///
/// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
pub fn is_protected_v(v: U256) -> bool {
    if v.bit_len() <= 8 {
        let v = v.to::<u64>();
        !matches!(v, 0 | 1 | 27 | 28)
    } else {
        true
    }
}

/// Derives the [EIP-155] chain id encoded in `v`, `None` for unprotected values.
///
/// A `v` that fits 64 bits is reduced with wrapping 64-bit arithmetic, so protected values below
/// `35` map to chain ids close to `2^63`.
///
/// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
pub fn derive_chain_id(v: U256) -> Option<U256> {
    if !is_protected_v(v) {
        return None;
    }
    if v.bit_len() <= 64 {
        return Some(U256::from(v.to::<u64>().wrapping_sub(EIP155_V_OFFSET) / 2));
    }
    Some((v - U256::from(EIP155_V_OFFSET)) >> 1)
}

/// Checks that `(v, r, s)` has the shape of a legacy secp256k1 signature.
///
/// `maybe_protected` allows `v` to carry an [EIP-155] chain id. The recovery id left after
/// stripping the offset must be `0` or `1`, and both scalars must lie in `[1, N)`.
///
/// [EIP-155]: https://eips.ethereum.org/EIPS/eip-155
pub fn sanity_check_signature(
    v: U256,
    r: U256,
    s: U256,
    maybe_protected: bool,
) -> Result<(), SignatureError> {
    let recovery_id = if is_protected_v(v) {
        if !maybe_protected {
            return Err(SignatureError::UnexpectedProtection);
        }
        // v = recovery_id + 35 + 2 * chain_id, so the recovery id is the parity of v - 35.
        v.wrapping_sub(U256::from(EIP155_V_OFFSET)) & U256::from(1)
    } else if maybe_protected {
        v.checked_sub(U256::from(UNPROTECTED_V_OFFSET)).ok_or(SignatureError::InvalidRecoveryId)?
    } else {
        v
    };

    if recovery_id > U256::from(1) {
        return Err(SignatureError::InvalidRecoveryId);
    }
    if !is_valid_scalar(r) || !is_valid_scalar(s) {
        return Err(SignatureError::InvalidScalar);
    }
    Ok(())
}

fn is_valid_scalar(value: U256) -> bool {
    !value.is_zero() && value < SECP256K1N
}
