use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};

/// Open a JSON Lines source. `-` reads stdin.
pub fn open_lines(input: &str) -> Result<Box<dyn BufRead>> {
    if input == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(input).with_context(|| format!("failed to open input {input}"))?;
    Ok(Box::new(BufReader::new(file)))
}
