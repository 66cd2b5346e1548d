//! Provides `Classifier` trait.
use crate::Example;
use crate::error::{Id3Error, Result};


/// A trait that defines the behavor of classifier.
/// You only need to implement `query` method.
pub trait Classifier {
    /// Predicts the label of `example`.
    fn query(&self, example: &Example) -> Result<&str>;


    /// Predicts the labels of `examples`.
    fn query_all(&self, examples: &[Example]) -> Result<Vec<&str>> {
        examples.iter()
            .map(|example| self.query(example))
            .collect()
    }


    /// Returns, for each example, whether the predicted label
    /// equals the target label.
    /// Every example must carry a target.
    fn predict(&self, examples: &[Example]) -> Result<Vec<bool>> {
        examples.iter()
            .enumerate()
            .map(|(i, example)| -> Result<bool> {
                let target = example.target()
                    .ok_or(Id3Error::MissingTarget(i))?;
                Ok(self.query(example)? == target)
            })
            .collect()
    }


    /// Returns the fraction of `examples` classified correctly.
    fn accuracy(&self, examples: &[Example]) -> Result<f64> {
        if examples.is_empty() {
            return Err(Id3Error::EmptyInput(
                "accuracy over zero examples".to_string()
            ));
        }

        let n_correct = self.predict(examples)?
            .into_iter()
            .filter(|&hit| hit)
            .count();
        Ok(n_correct as f64 / examples.len() as f64)
    }
}
