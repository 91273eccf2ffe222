//! Tree formatter for the built-in structure rendering
//!
//! Produces the same shape as the `tree` command so the artifact reads the
//! same whichever renderer produced it.

use crate::tree::TreeNode;

/// Formatter for a buffered `TreeNode`.
#[derive(Debug, Default)]
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format the tree followed by the `N directories, M files` trailer.
    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        self.format_node(node, &mut output, "", true, true);
        let (dir_count, file_count) = node.counts();
        output.push_str(&format!(
            "\n{}, {}\n",
            plural(dir_count, "directory", "directories"),
            plural(file_count, "file", "files")
        ));
        output
    }

    fn format_node(
        &self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) {
        let connector = if is_last { "└── " } else { "├── " };

        match node {
            TreeNode::File { name } => {
                output.push_str(prefix);
                output.push_str(connector);
                output.push_str(name);
                output.push('\n');
            }
            TreeNode::Dir { name, children } => {
                if is_root {
                    output.push_str(name);
                } else {
                    output.push_str(prefix);
                    output.push_str(connector);
                    output.push_str(name);
                }
                output.push('\n');

                let new_prefix = if is_root {
                    String::new()
                } else {
                    continuation_prefix(prefix, is_last)
                };

                for (i, child) in children.iter().enumerate() {
                    let child_is_last = i == children.len() - 1;
                    self.format_node(child, output, &new_prefix, child_is_last, false);
                }
            }
        }
    }
}

/// Prefix for the children of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}
