//! This directory provides some features for experiments:
//! - k-fold cross validation
//! - Running time, tree shape and train/test accuracy of a learner

/// Provides a struct that runs a learner with logging.
pub mod logger;

/// Provides k-fold cross validation.
pub mod cross_validation;

pub use logger::Logger;
pub use cross_validation::CrossValidation;
