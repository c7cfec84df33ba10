//! Basic encoding example

use statusmsg_core::{decode_state_key, deserialize, serialize, StatusMessage};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Statusmsg Basic Encoding Example\n");

    let mut builder = StatusMessage::builder();
    for (account, status) in [
        ("alice.testnet", "shipping the codec"),
        ("bob.testnet", "afk"),
        ("carol.testnet", ""),
    ] {
        builder.add_record(account, status)?;
    }
    let message = builder.build()?;

    let encoded = serialize(&message)?;
    println!("{} records -> {} bytes", message.len(), message.encoded_len());
    println!("{}: {}", decode_state_key()?, encoded);

    let decoded = deserialize(&encoded)?;
    for record in &decoded {
        println!("  {:<16} {:?}", record.k, record.v);
    }

    std::fs::write("example_state.b64", &encoded)?;
    println!("\nUse 'statusmsg inspect --input example_state.b64' to look inside it");

    Ok(())
}
