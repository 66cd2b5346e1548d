//! Nodes of a categorical decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Classifier, Example};
use crate::error::{Id3Error, Result};


/// Enumeration of `DecisionNode` and leaves.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests one attribute
    /// and owns one child per legal value of the attribute.
    Decision(DecisionNode),


    /// A node that predicts `label`.
    Leaf {
        /// The predicted class label.
        label: String,
    },
}


/// A branch of a [`DecisionNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    value: String,
    child: Box<Node>,
    size: usize,
}


impl Branch {
    /// The attribute value routed to this branch.
    pub fn value(&self) -> &str {
        &self.value
    }


    /// The subtree of this branch.
    pub fn child(&self) -> &Node {
        &self.child
    }


    /// The number of training examples that reached this branch.
    pub fn size(&self) -> usize {
        self.size
    }
}


/// Represents the decision nodes of a tree.
/// Branches are kept in the order they were added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionNode {
    attribute: String,
    branches: Vec<Branch>,
}


impl DecisionNode {
    /// Construct a decision node testing `attribute`
    /// with no branch yet.
    pub fn new<S: ToString>(attribute: S) -> Self {
        Self { attribute: attribute.to_string(), branches: Vec::new() }
    }


    /// Returns the tested attribute.
    #[inline]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }


    /// Returns the branches.
    pub fn branches(&self) -> &[Branch] {
        &self.branches[..]
    }


    /// Attach `node` as the child for `value`.
    /// A second call with the same value replaces the child
    /// and keeps the recorded size.
    pub fn add_child<S: ToString>(&mut self, value: S, node: Node) {
        let value = value.to_string();
        match self.branches.iter_mut().find(|b| b.value == value) {
            Some(branch) => { branch.child = Box::new(node); },
            None => {
                let child = Box::new(node);
                self.branches.push(Branch { value, child, size: 0 });
            },
        }
    }


    /// Record the number of training examples that reached
    /// the branch `value`.
    pub fn record_branch_size(&mut self, value: &str, n: usize)
        -> Result<()>
    {
        let attribute = &self.attribute;
        let branch = self.branches.iter_mut()
            .find(|b| b.value == value)
            .ok_or_else(|| Id3Error::NoSuchBranch {
                attribute: attribute.clone(),
                value: value.to_string(),
            })?;
        branch.size = n;
        Ok(())
    }


    /// Returns the child for `value`.
    pub fn child(&self, value: &str) -> Result<&Node> {
        self.branches.iter()
            .find(|b| b.value == value)
            .map(|b| b.child.as_ref())
            .ok_or_else(|| self.no_such_branch(value))
    }


    /// Returns the value of the branch that received
    /// the most training examples.
    /// Ties go to the branch added first.
    pub fn branch_with_most_examples(&self) -> Option<&str> {
        self.most_populated().map(|b| b.value.as_str())
    }


    /// Returns the child for `value`, or the child of
    /// the most populated branch if `value` has no branch.
    /// Fails only for a node without any branch.
    pub fn child_or_fallback(&self, value: &str) -> Result<&Node> {
        self.branches.iter()
            .find(|b| b.value == value)
            .or_else(|| self.most_populated())
            .map(|b| b.child.as_ref())
            .ok_or_else(|| self.no_such_branch(value))
    }


    fn most_populated(&self) -> Option<&Branch> {
        let mut best: Option<&Branch> = None;
        for branch in self.branches.iter() {
            match best {
                Some(b) if b.size >= branch.size => {},
                _ => { best = Some(branch); },
            }
        }
        best
    }


    fn no_such_branch(&self, value: &str) -> Id3Error {
        Id3Error::NoSuchBranch {
            attribute: self.attribute.clone(),
            value: value.to_string(),
        }
    }
}


impl Node {
    /// Construct a leaf predicting `label`.
    pub fn leaf<S: ToString>(label: S) -> Self {
        Self::Leaf { label: label.to_string() }
    }


    /// Returns `true` if `self` is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// Returns the class label of a leaf,
    /// or the tested attribute of a decision node.
    pub fn label(&self) -> &str {
        match self {
            Self::Decision(node) => node.attribute(),
            Self::Leaf { label } => label.as_str(),
        }
    }


    /// Returns the number of decision levels below `self`.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Decision(node) => {
                1 + node.branches.iter()
                    .map(|b| b.child.depth())
                    .max()
                    .unwrap_or(0)
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Decision(node) => {
                node.branches.iter().map(|b| b.child.n_leaves()).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Returns the number of nodes, leaves included.
    pub fn n_nodes(&self) -> usize {
        match self {
            Self::Decision(node) => {
                1 + node.branches.iter()
                    .map(|b| b.child.n_nodes())
                    .sum::<usize>()
            },
            Self::Leaf { .. } => 1,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Decision(node) => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{attr} ?\" ];\n",
                    attr = escape(node.attribute()),
                )];

                let mut next_id = id + 1;
                for branch in node.branches() {
                    let child_id = next_id;
                    let (mut child, return_id) = branch.child()
                        .to_dot_info(child_id);
                    info.append(&mut child);

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} \
                         [ label = \"{value} ({size})\" ];\n",
                        value = escape(branch.value()),
                        size = branch.size(),
                    );
                    info.push(edge);
                    next_id = return_id;
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                    label = escape(label),
                );

                (vec![info], id + 1)
            }
        }
    }
}


fn escape(s: &str) -> String {
    s.replace('"', "\\\"")
}


impl Classifier for Node {
    fn query(&self, example: &Example) -> Result<&str> {
        let mut node = self;
        loop {
            match node {
                Node::Decision(decision) => {
                    let value = example.value_of(decision.attribute())?;
                    node = decision.child_or_fallback(value)?;
                },
                Node::Leaf { label } => {
                    return Ok(label.as_str());
                },
            }
        }
    }
}


impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decision(node) => {
                let mut map = f.debug_map();
                for branch in node.branches() {
                    let key = format!(
                        "{} = {} ({})",
                        node.attribute(), branch.value(), branch.size()
                    );
                    map.entry(&key, branch.child());
                }
                map.finish()
            },
            Self::Leaf { label } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn humid_node() -> DecisionNode {
        let mut node = DecisionNode::new("Humid");
        node.add_child("Yes", Node::leaf("No"));
        node.add_child("No", Node::leaf("Yes"));
        node.record_branch_size("Yes", 3).unwrap();
        node.record_branch_size("No", 5).unwrap();
        node
    }

    #[test]
    fn test_child() {
        let node = humid_node();
        assert_eq!(node.child("Yes").unwrap().label(), "No");
        assert_eq!(node.child("No").unwrap().label(), "Yes");

        let err = node.child("Maybe").unwrap_err();
        assert!(matches!(err, Id3Error::NoSuchBranch { .. }));
    }

    #[test]
    fn test_record_unknown_branch() {
        let mut node = humid_node();
        let err = node.record_branch_size("Maybe", 1).unwrap_err();
        assert!(matches!(err, Id3Error::NoSuchBranch { .. }));
    }

    #[test]
    fn test_most_examples() {
        let node = humid_node();
        assert_eq!(node.branch_with_most_examples(), Some("No"));
        assert_eq!(node.child_or_fallback("Maybe").unwrap().label(), "Yes");
        assert_eq!(node.child_or_fallback("Yes").unwrap().label(), "No");
    }

    #[test]
    fn test_most_examples_tie() {
        let mut node = DecisionNode::new("Wind");
        node.add_child("Weak", Node::leaf("Yes"));
        node.add_child("Strong", Node::leaf("No"));
        node.record_branch_size("Weak", 2).unwrap();
        node.record_branch_size("Strong", 2).unwrap();
        assert_eq!(node.branch_with_most_examples(), Some("Weak"));
    }

    #[test]
    fn test_no_branch() {
        let node = DecisionNode::new("Wind");
        assert_eq!(node.branch_with_most_examples(), None);
        assert!(node.child_or_fallback("Weak").is_err());
    }

    #[test]
    fn test_shape() {
        let leaf = Node::leaf("Yes");
        assert!(leaf.is_leaf());
        assert_eq!(leaf.depth(), 0);
        assert_eq!(leaf.n_leaves(), 1);

        let root = Node::Decision(humid_node());
        assert!(!root.is_leaf());
        assert_eq!(root.label(), "Humid");
        assert_eq!(root.depth(), 1);
        assert_eq!(root.n_leaves(), 2);
        assert_eq!(root.n_nodes(), 3);
    }

    #[test]
    fn test_dot_info() {
        let root = Node::Decision(humid_node());
        let (info, next_id) = root.to_dot_info(0);
        assert_eq!(next_id, 3);
        assert_eq!(info.len(), 5);
        assert!(info[0].contains("Humid ?"));
    }
}
