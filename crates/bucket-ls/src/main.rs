//! Command-line browser for object-storage bucket listings
//!
//! Usage:
//!   aws s3api list-objects-v2 --bucket my-bucket > listing.json
//!   bucket-ls --bucket my-bucket --input listing.json --format json tree
//!
//! Logging is controlled with `RUST_LOG`.

mod commands;
mod input;

use anyhow::Result;
use bucket_tree::prelude::*;
use clap::{Parser, Subcommand};
use input::InputFormat;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bucket-ls",
    about = "Browse a flat object-storage key listing as a directory tree"
)]
struct Cli {
    /// Bucket name, used as the root of the tree
    #[arg(long)]
    bucket: String,
    /// Listing file; reads stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = InputFormat::Lines)]
    format: InputFormat,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the whole tree
    Tree,
    /// List leaf paths
    Leaves {
        /// Print object keys instead of bucket paths
        #[arg(long)]
        keys: bool,
        /// Only list leaves below this key
        #[arg(long)]
        under: Option<String>,
    },
    /// List the children of a directory key
    Ls { key: String },
    /// Print the lowest common parent of the given keys
    Common {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Describe a single key
    Stat { key: String },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let tree = input::load_tree(&cli.bucket, cli.input.as_deref(), cli.format)?;
    info!("Loaded bucket '{}' with {} nodes", cli.bucket, tree.node_count());

    let output = match cli.cmd {
        Cmd::Tree => commands::tree(&tree),
        Cmd::Leaves { keys, under } => commands::leaves(&tree, under.as_deref(), keys)?,
        Cmd::Ls { key } => commands::ls(&tree, &key)?,
        Cmd::Common { keys } => commands::common(&tree, &keys)?,
        Cmd::Stat { key } => commands::stat(&tree, &key)?,
    };
    print!("{output}");
    Ok(())
}
