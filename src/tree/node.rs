//! In-memory tree node for structure rendering

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File { name: String },
    Dir { name: String, children: Vec<TreeNode> },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name } | TreeNode::Dir { name, .. } => name,
        }
    }

    /// Count (directories, files) below this node, excluding the node itself.
    pub fn counts(&self) -> (usize, usize) {
        match self {
            TreeNode::File { .. } => (0, 0),
            TreeNode::Dir { children, .. } => {
                children.iter().fold((0, 0), |(d, f), child| {
                    let (cd, cf) = child.counts();
                    match child {
                        TreeNode::Dir { .. } => (d + cd + 1, f + cf),
                        TreeNode::File { .. } => (d + cd, f + cf + 1),
                    }
                })
            }
        }
    }
}
