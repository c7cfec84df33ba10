//! Fuzzing harness for statusmsg-core decoders
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode

use statusmsg_core::{
    decoder::decode_state,
    schema::{describe, SCHEMA},
    Reaction, StatusEntry, StatusMessage, UserProfile,
};

pub fn fuzz_decode(data: &[u8]) {
    // Try every shape - should never panic
    let _ = decode_state::<StatusMessage>(data);
    let _ = decode_state::<StatusEntry>(data);
    let _ = decode_state::<UserProfile>(data);
    let _ = decode_state::<Reaction>(data);
}

pub fn fuzz_deserialize(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = statusmsg_core::deserialize(text);
    }
}

pub fn fuzz_describe(data: &[u8]) {
    for def in SCHEMA {
        let _ = describe(data, def);
    }
}
