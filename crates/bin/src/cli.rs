//! CLI argument definitions for the ordmap binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect and edit JSON objects without losing their key order
#[derive(Parser, Debug)]
#[command(name = "ordmap")]
#[command(about = "ordmap: edit JSON objects while keeping key order")]
#[command(version)]
pub struct Cli {
    /// File to read the JSON object from; `-` reads stdin
    #[arg(short, long, default_value = "-", env = "ORDMAP_INPUT", global = true)]
    pub input: PathBuf,

    /// File to write results to instead of stdout
    #[arg(short, long, env = "ORDMAP_OUTPUT", global = true)]
    pub output: Option<PathBuf>,

    /// Indent JSON output
    #[arg(long, env = "ORDMAP_PRETTY", global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print top-level keys in source order, one per line
    Keys,
    /// Print the value stored under a key
    Get(KeyArgs),
    /// Append a key; an existing key keeps its value
    Set(SetArgs),
    /// Remove a key
    Delete(KeyArgs),
    /// Re-encode the object, keeping key order
    Fmt,
}

/// Arguments for commands that address a single key
#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    /// Top-level key
    pub key: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Top-level key
    pub key: String,

    /// Value as JSON text, e.g. `42`, `"text"` or `[1,2]`
    pub value: String,

    /// Treat the value as a plain string instead of JSON
    #[arg(short, long)]
    pub string: bool,
}
