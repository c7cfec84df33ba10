//! Constants for the status state wire format

/// Base64 form of the storage slot name used by the contract runtime
pub const STATE_KEY_B64: &str = "U1RBVEU=";

/// Storage slot name under which the serialized state is persisted
pub const STATE_KEY: &str = "STATE";

/// Size of every Borsh length or count prefix (u32, little-endian)
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// Size of a Borsh `u64`
pub const U64_SIZE: usize = 8;

/// Size of a Borsh `bool` or `Option` tag
pub const TAG_SIZE: usize = 1;

/// Smallest possible encoded `StatusMessage` (an empty record list)
pub const MIN_MESSAGE_SIZE: usize = LENGTH_PREFIX_SIZE;

/// Smallest possible encoded `Record` (two empty strings)
///
/// Valid records never hit this bound since `k` must be non-empty.
pub const MIN_RECORD_SIZE: usize = 2 * LENGTH_PREFIX_SIZE;

/// Validation messages shared between the typed and JSON paths
pub mod messages {
    /// Record key is missing, not a string, or empty
    pub const INVALID_KEY: &str = "Record key (k) must be a non-empty string";
    /// Record value is not a string
    pub const INVALID_VALUE: &str = "Record value (v) must be a string";
    /// A records element is not a record
    pub const INVALID_RECORD: &str = "Each record must be an object with k and v";
    /// The records field is not a sequence
    pub const INVALID_RECORDS: &str = "Records must be an array";
}
