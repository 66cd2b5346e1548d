use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Id3Error, Result};


/// A single record.
/// Holds the categorical value of each attribute
/// and, for training and evaluation, the target class label.
///
/// `Example` has no mutating method;
/// it is built once and read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    attributes: BTreeMap<String, String>,
    target: Option<String>,
}


impl Example {
    /// Construct a labeled example from the parallel sequences
    /// `names` and `values`.
    ///
    /// Fails with [`Id3Error::MalformedExample`]
    /// if the sequences differ in length
    /// or an attribute name occurs twice.
    pub fn new<N, V, T>(names: &[N], values: &[V], target: T)
        -> Result<Self>
        where N: AsRef<str>,
              V: AsRef<str>,
              T: ToString,
    {
        let attributes = zip_attributes(names, values)?;
        Ok(Self { attributes, target: Some(target.to_string()) })
    }


    /// Construct an example without a target label.
    /// Such an example can be classified but not evaluated.
    pub fn unlabeled<N, V>(names: &[N], values: &[V]) -> Result<Self>
        where N: AsRef<str>,
              V: AsRef<str>,
    {
        let attributes = zip_attributes(names, values)?;
        Ok(Self { attributes, target: None })
    }


    /// Construct an example from `(name, value)` pairs.
    /// A repeated name keeps the last value.
    pub fn from_pairs<I, K, V>(pairs: I, target: Option<&str>) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: ToString,
              V: ToString,
    {
        let attributes = pairs.into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let target = target.map(str::to_string);
        Self { attributes, target }
    }


    /// Returns the value of the attribute `name`.
    #[inline]
    pub fn value_of(&self, name: &str) -> Result<&str> {
        self.attributes.get(name)
            .map(String::as_str)
            .ok_or_else(|| Id3Error::UnknownAttribute(name.to_string()))
    }


    /// Returns the target label,
    /// or `None` if the example was built without one.
    #[inline]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }


    /// Iterates over the `(name, value)` pairs in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }


    /// Returns the number of attributes this example holds.
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }
}


fn zip_attributes<N, V>(names: &[N], values: &[V])
    -> Result<BTreeMap<String, String>>
    where N: AsRef<str>,
          V: AsRef<str>,
{
    if names.len() != values.len() {
        return Err(Id3Error::MalformedExample(format!(
            "{} attribute names but {} values",
            names.len(),
            values.len(),
        )));
    }

    let mut attributes = BTreeMap::new();
    for (name, value) in names.iter().zip(values) {
        let name = name.as_ref();
        let old = attributes.insert(
            name.to_string(), value.as_ref().to_string()
        );
        if old.is_some() {
            return Err(Id3Error::MalformedExample(
                format!("attribute `{name}` appears twice")
            ));
        }
    }
    Ok(attributes)
}


impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.attributes.iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(", ");
        match &self.target {
            Some(y) => write!(f, "({line}) -> {y}"),
            None => write!(f, "({line})"),
        }
    }
}
