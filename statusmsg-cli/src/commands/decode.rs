use super::{read_input, write_output};
use crate::StateKind;
use anyhow::{Context, Result};
use serde::Serialize;
use statusmsg_core::{
    decoder::decode_state_base64, deserialize, BorshState, Reaction, StatusEntry, UserProfile,
};
use tracing::info;

pub fn execute(input: &str, output: Option<&str>, kind: StateKind) -> Result<String> {
    info!("Decoding {:?} state from {}", kind, input);

    let content = read_input(input)?;
    let encoded = content.trim();

    let json = match kind {
        StateKind::Message => {
            let message = deserialize(encoded)?;
            info!("Decoded {} records", message.len());
            to_json(&message)?
        }
        StateKind::Entry => decode_json::<StatusEntry>(encoded)?,
        StateKind::Profile => decode_json::<UserProfile>(encoded)?,
        StateKind::Reaction => decode_json::<Reaction>(encoded)?,
    };

    write_output(output, &json)?;

    Ok(json)
}

fn decode_json<T: BorshState + Serialize>(encoded: &str) -> Result<String> {
    let value: T = decode_state_base64(encoded)?;
    to_json(&value)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).with_context(|| "Failed to render decoded state as JSON")
}
