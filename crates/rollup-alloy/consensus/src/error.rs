//! Errors surfaced while decoding rollup transactions from their wire form.

/// A rejected wire transaction object.
///
/// Decoding is fail-fast: the first missing or invalid field aborts decoding and is reported
/// verbatim. No partially populated transaction is ever returned alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TxDecodeError {
    /// The `type` discriminant does not name a supported transaction variant.
    #[error("transaction type {0:#04x} not supported")]
    UnsupportedType(u8),
    /// A field required by the transaction variant is absent.
    #[error("missing required field '{0}' in transaction")]
    MissingField(&'static str),
    /// A field is present but forbidden for the transaction variant.
    #[error("unexpected field '{0}' in transaction")]
    UnexpectedField(&'static str),
    /// A field is present but holds a value the variant does not accept.
    #[error("invalid value for field '{0}': {1}")]
    InvalidValue(&'static str, &'static str),
}

impl From<SignatureError> for TxDecodeError {
    fn from(err: SignatureError) -> Self {
        Self::InvalidValue("signature", err.reason())
    }
}

/// A raw `(v, r, s)` triple that fails the legacy signature sanity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// `v` encodes a recovery id other than 0 or 1.
    #[error("invalid signature recovery id")]
    InvalidRecoveryId,
    /// `r` or `s` is zero or not below the secp256k1 group order.
    #[error("invalid signature scalar")]
    InvalidScalar,
    /// `v` is EIP-155 protected where protection is not allowed.
    #[error("unexpected replay protection")]
    UnexpectedProtection,
}

impl SignatureError {
    /// Short reason string, used when the error is folded into a [`TxDecodeError`].
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRecoveryId => "invalid signature recovery id",
            Self::InvalidScalar => "invalid signature scalar",
            Self::UnexpectedProtection => "unexpected replay protection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_error_folds_into_invalid_value() {
        let err: TxDecodeError = SignatureError::InvalidScalar.into();
        assert_eq!(err, TxDecodeError::InvalidValue("signature", "invalid signature scalar"));
    }

    #[test]
    fn display_names_the_field() {
        assert_eq!(
            TxDecodeError::MissingField("sourceHash").to_string(),
            "missing required field 'sourceHash' in transaction"
        );
        assert_eq!(
            TxDecodeError::UnsupportedType(0x02).to_string(),
            "transaction type 0x02 not supported"
        );
    }
}
