use super::read_input;
use crate::StateKind;
use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use colored::*;
use statusmsg_core::{
    decoder::decode_state,
    schema::{describe, FieldSpan},
    CodecError, Reaction, StatusEntry, StatusMessage, UserProfile,
};
use tracing::{info, warn};

pub fn execute(input: &str, kind: StateKind) -> Result<Vec<FieldSpan>> {
    info!("Inspecting {:?} state from {}", kind, input);

    let content = read_input(input)?;
    let raw = STANDARD
        .decode(content.trim())
        .with_context(|| "Input is not valid base64")?;

    println!("\n=== Raw Bytes ({} bytes) ===", raw.len());
    for (i, chunk) in raw.chunks(16).enumerate() {
        println!("{:08x}  {}", i * 16, hex::encode(chunk));
    }

    let def = kind.schema();
    let spans = match describe(&raw, def) {
        Ok(spans) => spans,
        Err(e) => {
            println!("\n{} Buffer does not match {} layout", "✗".red(), def.name);
            return Err(e).with_context(|| format!("Failed to walk {} layout", def.name));
        }
    };

    println!("\n=== Layout ===");
    println!("{:>6} {:>5}  {:<40} value", "offset", "len", "field");
    for span in &spans {
        println!(
            "{:>6} {:>5}  {:<40} {}",
            span.offset, span.len, span.path, span.value
        );
    }

    println!("\n=== Validation ===");
    match validate(kind, &raw) {
        Ok(()) => println!("{} Valid {}", "✓".green(), def.name),
        Err(e) => {
            warn!("{}", e);
            println!("{} {}", "✗".red(), e);
        }
    }

    Ok(spans)
}

fn validate(kind: StateKind, raw: &[u8]) -> Result<(), CodecError> {
    match kind {
        StateKind::Message => decode_state::<StatusMessage>(raw).map(|_| ()),
        StateKind::Entry => decode_state::<StatusEntry>(raw).map(|_| ()),
        StateKind::Profile => decode_state::<UserProfile>(raw).map(|_| ()),
        StateKind::Reaction => decode_state::<Reaction>(raw).map(|_| ()),
    }
}
