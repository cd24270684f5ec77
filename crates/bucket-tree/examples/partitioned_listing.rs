//! Example that builds a tree from a Hive-style partitioned listing
//!
//! Usage:
//!   cargo run --example partitioned_listing [bucket-name]

use bucket_tree::prelude::*;
use std::env;

const KEYS: &[&str] = &[
    "source/",
    "source/year=2018/",
    "source/year=2018/month=08/",
    "source/year=2018/month=08/day=28/",
    "source/year=2018/month=08/day=28/test1.txt",
    "source/year=2018/month=08/day=28/test.txt",
    "source/year=2018/month=08/day=29/",
    "source/year=2018/month=08/day=29/test.txt",
    "source/year=2019/month=01/day=01/",
    "source/year=2019/month=01/day=01/test.txt",
    "source/year=2020/month=01/",
];

fn main() {
    let bucket = env::args().nth(1).unwrap_or_else(|| "test-bucket".to_string());

    let tree = match BucketTree::new(&bucket, KEYS) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error building tree: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", tree);

    println!("Leaves:");
    for path in tree.leaf_paths(None) {
        println!("  {}", path);
    }

    if let Some(month) = tree.node_from_key("source/year=2018/month=08/") {
        println!();
        println!("Contents of source/year=2018/month=08/:");
        for child in tree.list_children(month) {
            println!("  {}", child);
        }

        let leaves = tree.leaves(Some(month));
        if let Some(common) = tree.common_parent(&leaves).and_then(|id| tree.get(id)) {
            println!("Common parent of its {} leaves: {}", leaves.len(), common);
        }
    }

    println!();
    println!("Summary:");
    println!("  Total nodes: {}", tree.node_count());
    println!("  Directories: {}", tree.directories().len());
    println!("  Files: {}", tree.files().len());
}
