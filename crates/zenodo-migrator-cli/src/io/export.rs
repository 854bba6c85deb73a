use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Open a JSON Lines sink. `None` writes to stdout.
pub fn open_sink(path: Option<&str>) -> Result<Box<dyn Write>> {
    match path {
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(p) => Ok(Box::new(BufWriter::new(create_file(p)?))),
    }
}

fn create_file(path: &str) -> Result<File> {
    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    File::create(path).with_context(|| format!("failed to create {path}"))
}

/// Write one value as a single JSON line.
pub fn write_json_line<W: Write + ?Sized, T: Serialize>(w: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *w, value)?;
    w.write_all(b"\n")?;
    Ok(())
}
