//! Reading a materialised bucket listing from a file or stdin

use anyhow::{Context, Result};
use bucket_tree::BucketTree;
use clap::ValueEnum;
use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// How the listing is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// One key per line; blank lines are ignored
    Lines,
    /// A JSON array of keys or object summaries, or a ListObjectsV2 page
    Json,
}

/// Read the listing at `input` (stdin if `None`) and build the tree
pub fn load_tree(bucket: &str, input: Option<&Path>, format: InputFormat) -> Result<BucketTree> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read listing from stdin")?;
            text
        }
    };
    debug!("Read {} bytes of {:?} listing", text.len(), format);

    parse_tree(bucket, &text, format)
}

/// Build the tree from listing text already in memory
pub fn parse_tree(bucket: &str, text: &str, format: InputFormat) -> Result<BucketTree> {
    let tree = match format {
        InputFormat::Lines => BucketTree::new(bucket, lines(text))?,
        InputFormat::Json => {
            let listing: serde_json::Value =
                serde_json::from_str(text).context("Listing is not valid JSON")?;
            BucketTree::from_listing(bucket, &listing)?
        }
    };
    Ok(tree)
}

/// Keys from line-oriented text, tolerating CRLF endings
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
}
