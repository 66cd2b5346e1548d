//! Struct `Sample` represents a labeled, categorical data set.

// Provides the example struct.
pub(crate) mod example;
// Provides the attribute domain catalogue.
pub(crate) mod domain;
// Provides sample struct.
pub(crate) mod sample_struct;
// Provides an ARFF parser.
pub(crate) mod arff;

// Provides a struct that reads a file.
pub(crate) mod sample_reader;


pub use example::Example;
pub use domain::AttributeDomain;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
