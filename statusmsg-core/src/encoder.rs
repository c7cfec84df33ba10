//! State encoding

use crate::error::CodecError;
use crate::types::{BorshState, StatusMessage};
use base64::{engine::general_purpose::STANDARD, Engine};
use bytes::Bytes;
#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a validated value into its raw Borsh bytes
///
/// Fields are written in declaration order with no padding and no version
/// tag. Strings and sequences carry a u32 little-endian length prefix.
pub fn encode_state<T: BorshState>(value: &T) -> Result<Bytes, CodecError> {
    value.validate()?;

    let buf = borsh::to_vec(value)?;

    #[cfg(feature = "logging")]
    debug!("Encoded {} ({} bytes)", T::TYPE_NAME, buf.len());

    Ok(Bytes::from(buf))
}

/// Encode a validated value as padded standard base64
pub fn encode_state_base64<T: BorshState>(value: &T) -> Result<String, CodecError> {
    let raw = encode_state(value)?;
    Ok(STANDARD.encode(&raw))
}

/// Serialize a status message to base64
///
/// Every record is validated before anything is encoded; a single invalid
/// record fails the whole call.
pub fn serialize(message: &StatusMessage) -> Result<String, CodecError> {
    encode_state_base64(message)
}
