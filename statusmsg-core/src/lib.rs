//! # Statusmsg Core
//!
//! Borsh codec for the on-chain state of the status message contract.
//!
//! ## Modules
//!
//! - `constants`: Wire constants and the storage state key
//! - `types`: `Record`, `StatusMessage` and the association-list builder
//! - `state`: Other persisted shapes (history entries, profiles, reactions)
//! - `schema`: Static description of the Borsh layout
//! - `encoder`: Validated encoding to raw bytes and base64
//! - `decoder`: Strict decoding from raw bytes and base64
//! - `json`: Conversion of untrusted JSON input into typed messages

#![warn(missing_docs)]

pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod json;
pub mod schema;
pub mod state;
pub mod types;

// Re-export commonly used types
pub use decoder::{decode_state_key, deserialize};
pub use encoder::serialize;
pub use error::CodecError;
pub use state::{Reaction, StatusEntry, UserProfile};
pub use types::{BorshState, Record, StatusMessage, StatusMessageBuilder};

/// Result type alias for codec operations
pub type Result<T> = core::result::Result<T, CodecError>;
