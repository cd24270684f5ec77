//! Query commands; each returns the text to print

use anyhow::{bail, Result};
use bucket_tree::prelude::*;
use std::fmt::Write;

/// The rendered tree diagram
pub fn tree(tree: &BucketTree) -> String {
    tree.render()
}

/// Leaf paths (or keys) below `under`, one per line
pub fn leaves(tree: &BucketTree, under: Option<&str>, keys: bool) -> Result<String> {
    let start = under.map(|key| tree.require_key(key)).transpose()?;
    if keys {
        // The root of an empty tree is a leaf without a key
        return Ok(lines(tree.leaf_keys(start).into_iter().flatten()));
    }
    Ok(lines(tree.leaf_paths(start)))
}

/// Immediate children of a directory key
pub fn ls(tree: &BucketTree, key: &str) -> Result<String> {
    let id = tree.require_key(key)?;
    Ok(lines(tree.list_children(id)))
}

/// Path of the lowest node covering every key
pub fn common(tree: &BucketTree, keys: &[String]) -> Result<String> {
    let ids = keys
        .iter()
        .map(|key| tree.require_key(key))
        .collect::<bucket_tree::Result<Vec<_>>>()?;

    match tree.common_parent(&ids).and_then(|id| tree.get(id)) {
        Some(node) => Ok(format!("{}\n", node.path())),
        None => bail!("No common parent for an empty key set"),
    }
}

/// Summary of a single node
pub fn stat(tree: &BucketTree, key: &str) -> Result<String> {
    let id = tree.require_key(key)?;
    let Some(node) = tree.get(id) else {
        bail!("Node {} vanished from the tree", id);
    };

    let mut out = String::new();
    writeln!(out, "path:     {}", node.path())?;
    writeln!(out, "key:      {}", node.key().unwrap_or(""))?;
    writeln!(out, "kind:     {}", node.kind)?;
    writeln!(out, "depth:    {}", node.depth())?;
    writeln!(out, "children: {}", tree.child_count(id))?;
    writeln!(out, "leaves:   {}", tree.leaves(Some(id)).len())?;
    Ok(out)
}

fn lines<'a>(entries: impl IntoIterator<Item = &'a str>) -> String {
    entries.into_iter().fold(String::new(), |mut out, entry| {
        out.push_str(entry);
        out.push('\n');
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> BucketTree {
        BucketTree::new(
            "test-bucket",
            [
                "source/year=2018/month=08/day=28/test1.txt",
                "source/year=2018/month=08/day=28/test.txt",
                "source/year=2019/",
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_leaves_command() {
        let tree = sample();
        assert_eq!(
            leaves(&tree, None, true).unwrap(),
            "source/year=2018/month=08/day=28/test1.txt\n\
             source/year=2018/month=08/day=28/test.txt\n\
             source/year=2019/\n"
        );
        assert_eq!(
            leaves(&tree, Some("source/year=2019/"), false).unwrap(),
            "test-bucket/source/year=2019/\n"
        );
        assert!(leaves(&tree, Some("missing/"), false).is_err());
    }

    #[test]
    fn test_leaves_command_on_empty_tree() {
        let tree = BucketTree::new("test-bucket", Vec::<&str>::new()).unwrap();
        assert_eq!(leaves(&tree, None, false).unwrap(), "test-bucket\n");
        assert_eq!(leaves(&tree, None, true).unwrap(), "");
    }

    #[test]
    fn test_ls_command() {
        let tree = sample();
        assert_eq!(ls(&tree, "source/").unwrap(), "year=2018/\nyear=2019/\n");

        let err = ls(&tree, "source/year=2020/").unwrap_err();
        assert_eq!(err.to_string(), "no node for 'source/year=2020/'");
    }

    #[test]
    fn test_common_command() {
        let tree = sample();
        let keys = vec![
            "source/year=2018/month=08/day=28/test1.txt".to_string(),
            "source/year=2019/".to_string(),
        ];
        assert_eq!(common(&tree, &keys).unwrap(), "test-bucket/source/\n");
        assert!(common(&tree, &[]).is_err());
    }

    #[test]
    fn test_stat_command() {
        let tree = sample();
        assert_eq!(
            stat(&tree, "source/year=2018/").unwrap(),
            "path:     test-bucket/source/year=2018/\n\
             key:      source/year=2018/\n\
             kind:     Directory\n\
             depth:    2\n\
             children: 1\n\
             leaves:   2\n"
        );
    }
}
