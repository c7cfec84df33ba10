//! State decoding (strict mode)

use crate::constants::STATE_KEY_B64;
use crate::error::CodecError;
use crate::types::{BorshState, StatusMessage};
use base64::{engine::general_purpose::STANDARD, Engine};
#[cfg(feature = "logging")]
use tracing::debug;

/// Decode raw Borsh bytes into a validated value
///
/// This function performs strict validation:
/// - Every length prefix must be satisfied by the buffer
/// - Strings must be valid UTF-8
/// - The whole buffer must be consumed
/// - The decoded value must pass `BorshState::validate`
///
/// No partially decoded value is ever returned.
pub fn decode_state<T: BorshState>(bytes: &[u8]) -> Result<T, CodecError> {
    let value: T = borsh::from_slice(bytes).map_err(CodecError::decoding)?;
    value.validate().map_err(CodecError::decoding)?;

    #[cfg(feature = "logging")]
    debug!("Decoded {} ({} bytes)", T::TYPE_NAME, bytes.len());

    Ok(value)
}

/// Decode padded standard base64 into a validated value
pub fn decode_state_base64<T: BorshState>(encoded: &str) -> Result<T, CodecError> {
    let bytes = STANDARD.decode(encoded).map_err(CodecError::decoding)?;
    decode_state(&bytes)
}

/// Deserialize a status message from base64
pub fn deserialize(encoded: &str) -> Result<StatusMessage, CodecError> {
    decode_state_base64(encoded)
}

/// Decode the storage slot name used by the contract runtime
///
/// Always yields `"STATE"`.
pub fn decode_state_key() -> Result<String, CodecError> {
    let raw = STANDARD.decode(STATE_KEY_B64).map_err(CodecError::decoding)?;
    String::from_utf8(raw).map_err(CodecError::decoding)
}
