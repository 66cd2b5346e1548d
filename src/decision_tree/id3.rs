use colored::Colorize;

use std::fmt;

use crate::{
    AttributeDomain,
    Example,
    Learner,
};
use crate::error::{Id3Error, Result};
use super::{
    criterion::*,
    node::*,
    tree::DecisionTree,
};


const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;


/// The ID3 algorithm.
/// Given a set of labeled categorical examples,
/// [`Id3`] outputs a [`DecisionTree`]
/// by greedily splitting on the attribute
/// with the highest information gain.
///
/// The code is based on:
/// [Induction of Decision Trees](https://doi.org/10.1007/BF00116251)
/// by J. R. Quinlan.
///
/// [`Id3`] is constructed
/// by [`Id3Builder`](crate::Id3Builder).
///
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
///
/// let sample = SampleReader::default()
///     .file("/path/to/data/weather.arff")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new(sample.domain())
///     .verbose(true)
///     .build();
/// let tree = id3.produce(sample.examples()).unwrap();
///
/// let accuracy = tree.accuracy(sample.examples()).unwrap();
/// println!("accuracy (train) is: {accuracy}");
/// ```
pub struct Id3<'a> {
    domain: &'a AttributeDomain,
    attributes: Vec<String>,
    verbose: bool,
}


impl<'a> Id3<'a> {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(
        domain: &'a AttributeDomain,
        attributes: Vec<String>,
        verbose: bool,
    ) -> Self
    {
        Self { domain, attributes, verbose, }
    }


    /// Returns the candidate attributes in the order
    /// they are examined at every node.
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Grow the subtree for `rows`.
    /// `rows` is non-empty.
    /// `attributes` is never modified here;
    /// each split hands a reduced copy to its children.
    fn grow(
        &self,
        rows: &[Labeled<'_>],
        attributes: &[String],
        depth: usize,
    ) -> Result<Node>
    {
        let first = rows.first()
            .map(|row| row.target)
            .ok_or(Id3Error::EmptyTrainingSet)?;

        // All examples share a label.
        if rows.iter().all(|row| row.target == first) {
            return Ok(Node::leaf(first));
        }

        let fallback = majority(rows).ok_or(Id3Error::EmptyTrainingSet)?;

        // No attribute is left to split on.
        let Some((pos, gain)) = best_attribute(rows, attributes, self.domain)?
        else {
            return Ok(Node::leaf(fallback));
        };

        let best = &attributes[pos];
        let values = legal_values(self.domain, best)?;
        if self.verbose {
            self.print_split(depth, best, gain, rows.len());
        }

        let remaining = attributes.iter()
            .filter(|&attr| attr != best)
            .cloned()
            .collect::<Vec<_>>();

        let mut node = DecisionNode::new(best);
        for value in values {
            let mut subset = Vec::new();
            for row in rows {
                if row.example.value_of(best)? == value.as_str() {
                    subset.push(*row);
                }
            }

            // An empty partition predicts the majority of its parent.
            let child = if subset.is_empty() {
                Node::leaf(fallback)
            } else {
                self.grow(&subset, &remaining, depth + 1)?
            };

            node.add_child(value, child);
            node.record_branch_size(value, subset.len())?;
        }

        Ok(Node::Decision(node))
    }


    #[inline(always)]
    fn print_split(&self, depth: usize, attribute: &str, gain: f64, size: usize) {
        println!(
            "{} {}\t{}\t{}\t{}",
            "[SPLIT]".bold().magenta(),
            format!("depth {:>3}", depth).red(),
            format!("{:>WIDTH$}", attribute).bold().green(),
            format!("gain {:>WIDTH$.PREC_WIDTH$}", gain).blue(),
            format!("examples {:>WIDTH$}", size).yellow(),
        );
    }
}


impl Learner for Id3<'_> {
    type Model = DecisionTree;


    fn name(&self) -> &str {
        "ID3"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of attributes", format!("{}", self.attributes.len())),
            ("Attribute order", self.attributes.join(", ")),
            ("Criterion", "Information gain".to_string()),
        ]);
        Some(info)
    }


    /// This method computes as follows;
    /// 1. pair every example with its target label,
    /// 2. grow the tree from the root
    ///    with every candidate attribute available.
    fn produce(&self, examples: &[Example]) -> Result<Self::Model> {
        if examples.is_empty() {
            return Err(Id3Error::EmptyTrainingSet);
        }

        for attribute in self.attributes.iter() {
            legal_values(self.domain, attribute)?;
        }

        let rows = Labeled::all(examples)?;
        let root = self.grow(&rows[..], &self.attributes[..], 0)?;

        Ok(DecisionTree::new(root, self.domain.clone()))
    }
}


impl fmt::Display for Id3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\
            ----------\n\
            # ID3\n\n\
            - Criterion: Information gain\n\
            - Attribute order: [{}]\n\
            - Domain:\
            ",
            self.attributes.join(", "),
        )?;
        write!(f, "{}", self.domain)?;
        write!(f, "----------")
    }
}
