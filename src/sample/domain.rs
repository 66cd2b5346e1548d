use serde::{Serialize, Deserialize};

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Id3Error, Result};


/// The attribute domain catalogue.
/// Maps each attribute name to the legal values of the attribute.
/// The target attribute is not part of the catalogue.
///
/// Attributes are iterated in lexicographic order of their names;
/// the values of an attribute keep the order they were declared in.
/// These two orders break the ties while growing a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDomain {
    values: BTreeMap<String, Vec<String>>,
}


impl AttributeDomain {
    /// Construct an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }


    /// Declare the attribute `name` with the given legal values.
    /// Repeated values are kept once, at their first position.
    /// Re-declaring an attribute replaces its values.
    pub fn insert<S, I, V>(&mut self, name: S, values: I)
        where S: ToString,
              I: IntoIterator<Item = V>,
              V: ToString,
    {
        let mut vals: Vec<String> = Vec::new();
        for v in values {
            let v = v.to_string();
            if !vals.contains(&v) { vals.push(v); }
        }
        self.values.insert(name.to_string(), vals);
    }


    /// Returns the legal values of `name`.
    /// Fails with [`Id3Error::MalformedCatalogue`]
    /// if the attribute is not declared.
    #[inline]
    pub fn values(&self, name: &str) -> Result<&[String]> {
        self.values.get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| Id3Error::MalformedCatalogue(name.to_string()))
    }


    /// Returns `true` if `value` is legal for `name`.
    pub fn contains_value(&self, name: &str, value: &str) -> bool {
        self.values.get(name)
            .is_some_and(|vals| vals.iter().any(|v| v == value))
    }


    /// Returns `true` if the attribute `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }


    /// Iterates over the attribute names.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }


    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if no attribute is declared.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl<S, I, V> FromIterator<(S, I)> for AttributeDomain
    where S: ToString,
          I: IntoIterator<Item = V>,
          V: ToString,
{
    fn from_iter<T>(iter: T) -> Self
        where T: IntoIterator<Item = (S, I)>
    {
        let mut domain = Self::new();
        for (name, values) in iter {
            domain.insert(name, values);
        }
        domain
    }
}


impl fmt::Display for AttributeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.values.keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0);
        for (name, values) in self.values.iter() {
            writeln!(f, "\t* [{name: <width$}] {{{}}}", values.join(", "))?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn weather() -> AttributeDomain {
        AttributeDomain::from_iter([
            ("Weather", vec!["Sunny", "Rainy"]),
            ("Humid", vec!["Yes", "No"]),
        ])
    }

    #[test]
    fn test_lexicographic_attributes() {
        let domain = weather();
        let names = domain.attributes().collect::<Vec<_>>();
        assert_eq!(names, vec!["Humid", "Weather"]);
    }

    #[test]
    fn test_values_keep_declaration_order() {
        let domain = weather();
        assert_eq!(domain.values("Weather").unwrap(), ["Sunny", "Rainy"]);
        assert!(domain.contains_value("Humid", "No"));
        assert!(!domain.contains_value("Humid", "Maybe"));
    }

    #[test]
    fn test_missing_attribute() {
        let domain = weather();
        let err = domain.values("Wind").unwrap_err();
        assert!(matches!(err, Id3Error::MalformedCatalogue(_)));
    }

    #[test]
    fn test_duplicated_values() {
        let mut domain = AttributeDomain::new();
        domain.insert("Wind", ["Weak", "Strong", "Weak"]);
        assert_eq!(domain.values("Wind").unwrap().len(), 2);
        assert_eq!(domain.len(), 1);
        assert!(!domain.is_empty());
    }
}
