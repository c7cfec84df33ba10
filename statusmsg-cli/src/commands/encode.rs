use super::{read_input, write_output};
use crate::StateKind;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use statusmsg_core::{
    encoder::encode_state_base64, json::message_from_str, serialize, BorshState, Reaction,
    StatusEntry, UserProfile,
};
use tracing::info;

pub fn execute(input: &str, output: Option<&str>, kind: StateKind) -> Result<String> {
    info!("Encoding {:?} state from {}", kind, input);

    let content = read_input(input)?;

    let encoded = match kind {
        StateKind::Message => {
            let message =
                message_from_str(&content).with_context(|| "Invalid status message input")?;
            info!("Found {} records to encode", message.len());
            serialize(&message)?
        }
        StateKind::Entry => encode_json::<StatusEntry>(&content)?,
        StateKind::Profile => encode_json::<UserProfile>(&content)?,
        StateKind::Reaction => encode_json::<Reaction>(&content)?,
    };

    write_output(output, &encoded)?;

    info!("Encoded {} base64 characters", encoded.len());

    Ok(encoded)
}

fn encode_json<T: BorshState + DeserializeOwned>(content: &str) -> Result<String> {
    let value: T = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse {} JSON input", T::TYPE_NAME))?;

    encode_state_base64(&value).with_context(|| format!("Failed to encode {}", T::TYPE_NAME))
}
