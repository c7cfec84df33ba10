//! Subcommand implementations

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod lookup;
pub mod state_key;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};

/// Read a whole input file, or stdin when `input` is `-`
pub(crate) fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read input file: {}", input))
    }
}

/// Write to `output`, or print to stdout when no path is given
pub(crate) fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write output file: {}", path))?;
        }
        None => println!("{}", content),
    }
    Ok(())
}
