use anyhow::Result;
use statusmsg_core::decode_state_key;

pub fn execute() -> Result<String> {
    let key = decode_state_key()?;
    println!("{}", key);
    Ok(key)
}
