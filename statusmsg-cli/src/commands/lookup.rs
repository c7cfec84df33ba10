use super::read_input;
use anyhow::Result;
use statusmsg_core::{deserialize, Record};
use tracing::{info, warn};

pub fn execute(input: &str, account: &str) -> Result<Option<Record>> {
    info!("Looking up {} in {}", account, input);

    let content = read_input(input)?;
    let message = deserialize(content.trim())?;

    match message.record_by_account(account) {
        Some(record) => {
            println!("{}", record.v);
            Ok(Some(record.clone()))
        }
        None => {
            warn!("No status found for {}", account);
            Ok(None)
        }
    }
}
