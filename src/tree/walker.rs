//! TreeWalker - builds a depth-limited directory tree in memory
//!
//! Used by the built-in structure renderer. Directory symlinks are never
//! followed, so the walk always terminates.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use super::node::TreeNode;
use super::utils::{file_name_lossy, is_hidden_name};

pub struct TreeWalker<'a> {
    max_depth: usize,
    excluded_dirs: &'a BTreeSet<String>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(max_depth: usize, excluded_dirs: &'a BTreeSet<String>) -> Self {
        Self {
            max_depth,
            excluded_dirs,
        }
    }

    /// Walk `root`. Fails only when the root itself cannot be listed;
    /// unreadable subdirectories show up empty.
    pub fn walk(&self, root: &Path) -> io::Result<TreeNode> {
        let children = self.read_children(root, 0)?;
        Ok(TreeNode::Dir {
            name: root.display().to_string(),
            children,
        })
    }

    fn read_children(&self, path: &Path, depth: usize) -> io::Result<Vec<TreeNode>> {
        if depth >= self.max_depth {
            return Ok(Vec::new());
        }

        let mut entries: Vec<_> = std::fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|a| a.file_name());

        let mut children = Vec::new();
        for entry in entries {
            let entry_path = entry.path();
            let name = file_name_lossy(&entry_path);
            if is_hidden_name(&name) {
                continue;
            }

            // file_type() does not follow symlinks
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if is_dir {
                if self.excluded_dirs.contains(&name) {
                    continue;
                }
                let grandchildren = self.read_children(&entry_path, depth + 1).unwrap_or_default();
                children.push(TreeNode::Dir {
                    name,
                    children: grandchildren,
                });
            } else {
                children.push(TreeNode::File { name });
            }
        }

        Ok(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(node: &TreeNode) -> Vec<&str> {
        match node {
            TreeNode::Dir { children, .. } => children.iter().map(|c| c.name()).collect(),
            TreeNode::File { .. } => Vec::new(),
        }
    }

    #[test]
    fn test_walk_sorted_and_pruned() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("b/vendor")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("z.go"), "").unwrap();
        fs::write(dir.path().join("a.go"), "").unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();

        let excluded: BTreeSet<String> =
            ["vendor", "node_modules"].iter().map(|s| s.to_string()).collect();
        let tree = TreeWalker::new(4, &excluded).walk(dir.path()).unwrap();

        assert_eq!(names(&tree), vec!["a.go", "b", "z.go"]);
        if let TreeNode::Dir { children, .. } = &tree {
            assert!(names(&children[1]).is_empty(), "vendor should be pruned");
        }
    }

    #[test]
    fn test_walk_respects_depth() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("l1/l2")).unwrap();
        fs::write(dir.path().join("l1/l2/deep.go"), "").unwrap();

        let excluded = BTreeSet::new();
        let tree = TreeWalker::new(1, &excluded).walk(dir.path()).unwrap();
        assert_eq!(names(&tree), vec!["l1"]);
        if let TreeNode::Dir { children, .. } = &tree {
            assert!(names(&children[0]).is_empty(), "depth 1 should not descend");
        }
    }

    #[test]
    fn test_walk_missing_root_fails() {
        let excluded = BTreeSet::new();
        let result = TreeWalker::new(2, &excluded).walk(Path::new("/nonexistent/gather/root"));
        assert!(result.is_err());
    }
}
