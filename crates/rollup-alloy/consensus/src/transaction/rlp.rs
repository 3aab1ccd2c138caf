//! Canonical RLP field encoding shared by the rollup transaction variants.

use alloy_primitives::U256;
use alloy_rlp::{Buf, BufMut, Decodable, EMPTY_STRING_CODE, Encodable, Header};

/// A transaction body whose canonical form is a single RLP list of its fields.
///
/// Implementors only describe their fields; the list header and the bounds checks on decoding
/// are shared.
pub trait RlpTxFields: Sized {
    /// Outputs the length of the transaction's fields, without a RLP header.
    fn rlp_encoded_fields_length(&self) -> usize;

    /// Encodes only the transaction's fields into the desired buffer, without a RLP header.
    fn rlp_encode_fields(&self, out: &mut dyn BufMut);

    /// Decodes the fields, assuming the RLP list header has already been consumed.
    fn rlp_decode_fields(buf: &mut &[u8]) -> alloy_rlp::Result<Self>;

    /// The RLP list header for the fields.
    fn rlp_header(&self) -> Header {
        Header { list: true, payload_length: self.rlp_encoded_fields_length() }
    }

    /// Length of the RLP list, header included.
    fn rlp_encoded_length(&self) -> usize {
        self.rlp_header().length_with_payload()
    }

    /// Encodes the fields as a RLP list.
    fn rlp_encode(&self, out: &mut dyn BufMut) {
        self.rlp_header().encode(out);
        self.rlp_encode_fields(out);
    }

    /// Decodes a RLP list of fields, rejecting trailing bytes inside the list.
    fn rlp_decode(buf: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(buf)?;
        if !header.list {
            return Err(alloy_rlp::Error::UnexpectedString);
        }
        let remaining = buf.len();
        if header.payload_length > remaining {
            return Err(alloy_rlp::Error::InputTooShort);
        }

        let this = Self::rlp_decode_fields(buf)?;

        if buf.len() + header.payload_length != remaining {
            return Err(alloy_rlp::Error::UnexpectedLength);
        }
        Ok(this)
    }
}

/// Length of an optional integer encoded as the empty string when absent.
pub(crate) fn optional_u256_length(value: &Option<U256>) -> usize {
    value.as_ref().map_or(1, Encodable::length)
}

/// Encodes an optional integer, writing the empty string when absent.
pub(crate) fn encode_optional_u256(value: &Option<U256>, out: &mut dyn BufMut) {
    match value {
        Some(value) => value.encode(out),
        None => out.put_u8(EMPTY_STRING_CODE),
    }
}

/// Decodes an optional integer. The empty string decodes to `None`.
pub(crate) fn decode_optional_u256(buf: &mut &[u8]) -> alloy_rlp::Result<Option<U256>> {
    if *buf.first().ok_or(alloy_rlp::Error::InputTooShort)? == EMPTY_STRING_CODE {
        buf.advance(1);
        Ok(None)
    } else {
        Decodable::decode(buf).map(Some)
    }
}
