use std::io::{self, Write};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// free for records.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Print a value to stderr, pretty when `pretty` is set.
pub fn print<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let s = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(io::stderr(), "{s}")?;
    Ok(())
}
