use crate::AttributeDomain;
use super::id3::Id3;


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for constructing [`Id3`].
///
/// # Example
///
/// ```no_run
/// use id3tree::{AttributeDomain, Id3Builder};
///
/// let domain = AttributeDomain::from_iter([
///     ("Weather", vec!["Sunny", "Rainy"]),
///     ("Humid", vec!["Yes", "No"]),
/// ]);
/// let id3 = Id3Builder::new(&domain)
///     .attributes(["Weather", "Humid"])
///     .build();
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    domain: &'a AttributeDomain,
    attributes: Option<Vec<String>>,
    verbose: bool,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    pub fn new(domain: &'a AttributeDomain) -> Self {
        Self { domain, attributes: None, verbose: false, }
    }


    /// Set the candidate attributes and the order
    /// in which they are examined.
    /// Gain ties go to the attribute listed first.
    /// By default, every attribute of the catalogue is a candidate,
    /// in lexicographic order.
    /// Repeated names are kept once.
    pub fn attributes<I, S>(mut self, attributes: I) -> Self
        where I: IntoIterator<Item = S>,
              S: ToString,
    {
        let mut attrs: Vec<String> = Vec::new();
        for attr in attributes {
            let attr = attr.to_string();
            if !attrs.contains(&attr) { attrs.push(attr); }
        }
        self.attributes = Some(attrs);
        self
    }


    /// Print every split decision while growing a tree.
    /// Default is `false`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3<'a> {
        let attributes = self.attributes.unwrap_or_else(|| {
            self.domain.attributes()
                .map(str::to_string)
                .collect()
        });

        Id3::new(self.domain, attributes, self.verbose)
    }
}
