//! Exports the learner, the tree, and the traits.
//!
pub use crate::decision_tree::{
    // Learner
    Id3,
    Id3Builder,


    // Model
    DecisionTree,
    Node,
    DecisionNode,
    Branch,
};


pub use crate::sample::{
    Example,
    AttributeDomain,
    Sample,
    SampleReader,
};


pub use crate::learner::Learner;
pub use crate::classifier::Classifier;


pub use crate::error::Id3Error;
