use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "zenodo-migrator", version, about = "Zenodo parent record migrator")]
pub struct Cli {
    /// Print the run summary as pretty JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Transform legacy parent entries (JSON Lines) into RDM parent records.
    Transform {
        /// Input JSON Lines file, or `-` for stdin.
        input: String,

        /// Output JSON Lines file (default: stdout).
        #[arg(long)]
        out: Option<String>,

        /// Write failed entries to this JSON Lines file.
        #[arg(long)]
        errors: Option<String>,

        /// Accept entries without a `json` section.
        #[arg(long)]
        partial: bool,
    },
}
