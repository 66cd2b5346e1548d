//! The files in `decision_tree/` directory define
//! the ID3 algorithm and the tree it produces.

/// Defines the ID3 learner.
pub mod id3;
/// Defines the builder of the ID3 learner.
pub mod builder;
/// Defines the decision tree produced by `Id3`.
pub mod tree;

/// Defines the nodes of a decision tree.
pub mod node;
/// Defines entropy and information gain.
pub mod criterion;


pub use id3::Id3;
pub use builder::Id3Builder;
pub use tree::DecisionTree;
pub use node::{Node, DecisionNode, Branch};
pub use criterion::{entropy, information_gain};
