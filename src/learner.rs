//! Provides `Learner` trait.
use crate::Example;
use crate::error::Result;


/// A trait that defines the behavior of a learner.
/// A learner reads a set of labeled examples
/// and returns a model.
pub trait Learner {
    /// The model produced by the learner.
    type Model;


    /// Returns the name of the learner.
    fn name(&self) -> &str;


    /// Returns the information of the learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Produce a model from `examples`.
    fn produce(&self, examples: &[Example]) -> Result<Self::Model>;
}
