#![warn(missing_docs)]

//!
//! A crate that grows decision trees with the ID3 algorithm.
//!
//! Given a set of examples over categorical attributes,
//! each labeled with a class,
//! [`Id3`] builds a [`DecisionTree`]
//! by recursively splitting on the attribute
//! that maximizes the information gain.
//! The tree then predicts the class of unseen examples.
//!
//! # Example
//! Read a training and a test sample,
//! grow a tree, and measure the test accuracy.
//!
//! ```no_run
//! use id3tree::prelude::*;
//!
//! let train = SampleReader::default()
//!     .file("/path/to/train.arff")
//!     .read()
//!     .unwrap();
//! let test = SampleReader::default()
//!     .file("/path/to/test.arff")
//!     .read()
//!     .unwrap();
//!
//! let tree = id3tree::train(train.examples(), train.domain()).unwrap();
//! let accuracy = id3tree::evaluate(&tree, test.examples()).unwrap();
//! println!("test accuracy: {accuracy}");
//! ```
//!
//! [`Id3Builder`] exposes the knobs of the learner,
//! [`research`] provides cross validation and a logger.

pub mod error;
pub mod sample;
pub mod learner;
pub mod classifier;
pub mod decision_tree;

pub mod research;
pub mod prelude;


pub use error::{Id3Error, Result};

pub use sample::{
    Example,
    AttributeDomain,
    Sample,
    SampleReader,
};

pub use learner::Learner;
pub use classifier::Classifier;

pub use decision_tree::{
    Id3,
    Id3Builder,
    DecisionTree,
    Node,
    DecisionNode,
    Branch,
    entropy,
    information_gain,
};


/// Grow a [`DecisionTree`] from `examples`,
/// examining every attribute of `domain` in lexicographic order.
///
/// Fails with [`Id3Error::EmptyTrainingSet`] if `examples` is empty.
pub fn train(examples: &[Example], domain: &AttributeDomain)
    -> Result<DecisionTree>
{
    Id3Builder::new(domain)
        .build()
        .produce(examples)
}


/// Returns the fraction of `examples` that `tree` classifies correctly.
///
/// Fails with [`Id3Error::EmptyInput`] if `examples` is empty.
pub fn evaluate(tree: &DecisionTree, examples: &[Example]) -> Result<f64> {
    tree.accuracy(examples)
}


/// Returns the predicted label of `example`.
pub fn classify(tree: &DecisionTree, example: &Example) -> Result<String> {
    tree.query(example).map(str::to_string)
}
