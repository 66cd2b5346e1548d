//! Defines the decision tree produced by `Id3`.
use serde::{Serialize, Deserialize};

use std::fs::File;
use std::io::{BufReader, BufWriter, prelude::*};
use std::path::Path;

use crate::{AttributeDomain, Classifier, Example};
use crate::error::Result;
use super::node::*;


/// Decision tree classifier.
/// Owns the root [`Node`] and the catalogue it was grown on.
/// Dropping the tree drops every node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Node,
    domain: AttributeDomain,
}


impl DecisionTree {
    #[inline]
    pub(crate) fn new(root: Node, domain: AttributeDomain) -> Self {
        Self { root, domain }
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the catalogue the tree was grown on.
    pub fn domain(&self) -> &AttributeDomain {
        &self.domain
    }


    /// Returns the number of decision levels.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Returns the number of nodes.
    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()?;
        Ok(())
    }


    /// Save the tree as JSON.
    pub fn to_json_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut f, self)?;
        f.flush()?;
        Ok(())
    }


    /// Load a tree saved by [`DecisionTree::to_json_file`].
    pub fn from_json_file<P>(path: P) -> Result<Self>
        where P: AsRef<Path>
    {
        let f = BufReader::new(File::open(path)?);
        let tree = serde_json::from_reader(f)?;
        Ok(tree)
    }
}


impl Classifier for DecisionTree {
    fn query(&self, example: &Example) -> Result<&str> {
        self.root.query(example)
    }
}
