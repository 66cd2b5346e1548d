//! Entropy and information gain over categorical examples.
use std::collections::BTreeMap;

use crate::{AttributeDomain, Example};
use crate::error::{Id3Error, Result};


/// An example paired with its target label.
/// Targets are checked once, before growing a tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Labeled<'a> {
    pub(crate) example: &'a Example,
    pub(crate) target: &'a str,
}


impl<'a> Labeled<'a> {
    /// Pair every example with its target.
    /// Fails with [`Id3Error::MissingTarget`] on the first unlabeled one.
    pub(crate) fn all(examples: &'a [Example]) -> Result<Vec<Self>> {
        examples.iter()
            .enumerate()
            .map(|(i, example)| -> Result<Self> {
                let target = example.target()
                    .ok_or(Id3Error::MissingTarget(i))?;
                Ok(Self { example, target })
            })
            .collect()
    }
}


/// Count the labels in lexicographic order.
pub(crate) fn label_counts<'a>(rows: &[Labeled<'a>])
    -> BTreeMap<&'a str, usize>
{
    let mut counter = BTreeMap::new();
    for row in rows {
        *counter.entry(row.target).or_insert(0_usize) += 1;
    }
    counter
}


/// Returns the Shannon entropy (in bits) of the given label counts.
/// The empty distribution has entropy `0`.
pub(crate) fn entropy_of_counts(counter: &BTreeMap<&str, usize>) -> f64 {
    let total = counter.values().sum::<usize>();
    if total == 0 { return 0f64; }
    let total = total as f64;

    counter.values()
        .map(|&n| {
            let p = n as f64 / total;
            if p <= 0f64 { 0f64 } else { -p * p.log2() }
        })
        .sum::<f64>()
}


/// Returns the most frequent label.
/// Ties go to the lexicographically smallest label.
pub(crate) fn majority<'a>(rows: &[Labeled<'a>]) -> Option<&'a str> {
    let mut best: Option<(&'a str, usize)> = None;
    for (label, n) in label_counts(rows) {
        match best {
            Some((_, m)) if m >= n => {},
            _ => { best = Some((label, n)); },
        }
    }
    best.map(|(label, _)| label)
}


/// Returns the information gain of splitting `rows`
/// on `attribute`, whose legal values are `values`.
pub(crate) fn gain_of(rows: &[Labeled<'_>], attribute: &str, values: &[String])
    -> Result<f64>
{
    let n_rows = rows.len();
    if n_rows == 0 { return Ok(0f64); }

    let mut partition: BTreeMap<&str, BTreeMap<&str, usize>> = BTreeMap::new();
    for row in rows {
        let value = row.example.value_of(attribute)?;
        *partition.entry(value)
            .or_default()
            .entry(row.target)
            .or_insert(0_usize) += 1;
    }

    let mut gain = entropy_of_counts(&label_counts(rows));
    for value in values {
        let Some(counter) = partition.get(value.as_str()) else { continue; };
        let size = counter.values().sum::<usize>();
        gain -= (size as f64 / n_rows as f64) * entropy_of_counts(counter);
    }
    Ok(gain)
}


/// Returns the legal values of `attribute`.
/// An attribute without any legal value cannot be split on.
pub(crate) fn legal_values<'d>(domain: &'d AttributeDomain, attribute: &str)
    -> Result<&'d [String]>
{
    let values = domain.values(attribute)?;
    if values.is_empty() {
        return Err(Id3Error::MalformedCatalogue(attribute.to_string()));
    }
    Ok(values)
}


/// Returns the position in `candidates` of the attribute
/// with the strictly highest gain, and the gain itself.
/// Ties go to the earliest candidate.
pub(crate) fn best_attribute(
    rows: &[Labeled<'_>],
    candidates: &[String],
    domain: &AttributeDomain,
) -> Result<Option<(usize, f64)>>
{
    let mut best: Option<(usize, f64)> = None;
    for (pos, attribute) in candidates.iter().enumerate() {
        let values = legal_values(domain, attribute)?;
        let gain = gain_of(rows, attribute, values)?;
        match best {
            Some((_, g)) if g >= gain => {},
            _ => { best = Some((pos, gain)); },
        }
    }
    Ok(best)
}


/// Returns the entropy (in bits) of the target labels of `examples`.
///
/// Fails with [`Id3Error::MissingTarget`] if an example is unlabeled.
pub fn entropy(examples: &[Example]) -> Result<f64> {
    let rows = Labeled::all(examples)?;
    Ok(entropy_of_counts(&label_counts(&rows)))
}


/// Returns the information gain of splitting `examples` on `attribute`,
/// where the partition follows the legal values in `domain`:
///
/// `gain(A) = H(S) - sum_v |S_v| / |S| * H(S_v)`.
pub fn information_gain(
    examples: &[Example],
    attribute: &str,
    domain: &AttributeDomain,
) -> Result<f64>
{
    let rows = Labeled::all(examples)?;
    let values = legal_values(domain, attribute)?;
    gain_of(&rows, attribute, values)
}
