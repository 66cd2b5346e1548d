use polars::prelude::*;

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Id3Error, Result};
use super::{
    arff,
    domain::AttributeDomain,
    example::Example,
};


/// Default name of the target attribute
/// when a sample is assembled from raw examples.
pub const DEFAULT_TARGET_NAME: &str = "class";


/// A labeled data set:
/// the attribute domain catalogue, the class labels,
/// and the examples resolved against the catalogue.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) domain: AttributeDomain,
    pub(super) target_name: String,
    pub(super) classes: Vec<String>,
    pub(super) examples: Vec<Example>,
}


impl Sample {
    /// Construct a new `Sample` from its components.
    pub fn new<S: ToString>(
        domain: AttributeDomain,
        target_name: S,
        classes: Vec<String>,
        examples: Vec<Example>,
    ) -> Self
    {
        let target_name = target_name.to_string();
        Self { domain, target_name, classes, examples, }
    }


    /// Construct a `Sample` from a catalogue and labeled examples.
    /// The class labels are collected in order of first appearance.
    pub fn from_examples(domain: AttributeDomain, examples: Vec<Example>)
        -> Self
    {
        let classes = distinct(
            examples.iter().filter_map(|ex| ex.target())
        );
        Self::new(domain, DEFAULT_TARGET_NAME, classes, examples)
    }


    /// Read an ARFF file to [`Sample`].
    /// The last declared attribute is the class attribute.
    pub(crate) fn from_arff<P>(file: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let file = File::open(file)?;
        arff::parse(BufReader::new(file))
    }


    /// Read a CSV file to [`Sample`] with `polars`.
    /// Every column is read as categorical;
    /// the column named `target` holds the class labels.
    pub(crate) fn from_csv<P>(file: P, has_header: bool, target: &str)
        -> Result<Self>
        where P: AsRef<Path>
    {
        let df = CsvReader::from_path(file.as_ref())?
            .has_header(has_header)
            .finish()?;
        Self::from_dataframe(&df, target)
    }


    /// Convert a [`DataFrame`] to [`Sample`].
    /// Each column is cast to strings.
    /// The domain of an attribute is the set of its distinct values,
    /// in order of first appearance.
    pub fn from_dataframe(data: &DataFrame, target: &str) -> Result<Self> {
        let names = data.get_column_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();

        let target_pos = names.iter()
            .position(|name| name == target)
            .ok_or_else(|| Id3Error::UnknownAttribute(target.to_string()))?;

        let mut columns = Vec::with_capacity(names.len());
        for name in names.iter() {
            let series = data.column(name)?.cast(&DataType::Utf8)?;
            let column = series.utf8()?
                .into_iter()
                .enumerate()
                .map(|(row, val)| {
                    val.map(str::to_string)
                        .ok_or_else(|| Id3Error::parse(
                            row + 1, format!("missing value for `{name}`")
                        ))
                })
                .collect::<Result<Vec<_>>>()?;
            columns.push(column);
        }

        let target_column = columns.remove(target_pos);
        let mut names = names;
        names.remove(target_pos);

        let domain = names.iter()
            .zip(&columns)
            .map(|(name, column)| {
                (name, distinct(column.iter().map(String::as_str)))
            })
            .collect::<AttributeDomain>();
        let classes = distinct(target_column.iter().map(String::as_str));

        let examples = target_column.iter()
            .enumerate()
            .map(|(row, y)| {
                let values = columns.iter()
                    .map(|column| column[row].as_str())
                    .collect::<Vec<_>>();
                Example::new(&names[..], &values[..], y)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(domain, target, classes, examples))
    }


    /// Returns the pair of the number of examples and
    /// the number of attributes.
    pub fn shape(&self) -> (usize, usize) {
        (self.examples.len(), self.domain.len())
    }


    /// Returns `true` if the sample holds no example.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }


    /// Returns the slice of examples.
    pub fn examples(&self) -> &[Example] {
        &self.examples[..]
    }


    /// Returns the attribute domain catalogue.
    pub fn domain(&self) -> &AttributeDomain {
        &self.domain
    }


    /// Returns the class labels.
    pub fn classes(&self) -> &[String] {
        &self.classes[..]
    }


    /// Returns the name of the target attribute.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }


    /// Split `self` into a training and a test sample.
    /// The examples at `ix[start..end]` form the test sample
    /// and the rest forms the training sample.
    pub fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Sample, Sample)
    {
        let end = end.min(ix.len());
        let start = start.min(end);

        let mut train = Vec::with_capacity(ix.len() - (end - start));
        let mut test = Vec::with_capacity(end - start);
        for (k, &i) in ix.iter().enumerate() {
            let example = self.examples[i].clone();
            if (start..end).contains(&k) {
                test.push(example);
            } else {
                train.push(example);
            }
        }

        let train = Self::new(
            self.domain.clone(), &self.target_name, self.classes.clone(), train
        );
        let test = Self::new(
            self.domain.clone(), &self.target_name, self.classes.clone(), test
        );
        (train, test)
    }
}


/// Collects the distinct items in order of first appearance.
fn distinct<'a, I>(items: I) -> Vec<String>
    where I: Iterator<Item = &'a str>
{
    let mut seen = HashSet::new();
    items.filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}
