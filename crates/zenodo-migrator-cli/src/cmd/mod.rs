use anyhow::Result;

use crate::args::{Cli, Command};

mod transform;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Transform {
            input,
            out,
            errors,
            partial,
        } => transform::run(&input, out.as_deref(), errors.as_deref(), partial, cli.json),
    }
}
