use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read an ARFF/CSV format file to [`Sample`].
/// The format is chosen by the file extension;
/// files without the `.csv` extension are read as ARFF.
///
/// # Example
/// ```no_run
/// use id3tree::SampleReader;
/// let sample = SampleReader::default()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SampleReader {
    file: Option<PathBuf>,
    has_header: bool,
    target: Option<String>,
}


impl SampleReader {
    /// Set the file name.
    pub fn file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.file = Some(file.as_ref().to_path_buf());
        self
    }


    /// Set the flag whether the CSV file has the header row or not.
    /// Default is `false.`
    /// ARFF files ignore this flag.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for target label.
    /// Required for CSV files;
    /// ARFF files always use the last declared attribute.
    pub fn target_feature<S: ToString>(mut self, column: S) -> Self {
        self.target = Some(column.to_string());
        self
    }


    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or_else(|| io::Error::new(
            io::ErrorKind::InvalidInput,
            "The file name for arff/csv is not set",
        ))?;

        let is_csv = file.extension().is_some_and(|ext| ext == "csv");
        if !is_csv {
            return Sample::from_arff(&file);
        }

        let target = self.target.ok_or_else(|| io::Error::new(
            io::ErrorKind::InvalidInput,
            "Target (class) column is not specified. \
            Use `SampleReader::target_feature`.",
        ))?;
        Sample::from_csv(&file, self.has_header, &target)
    }
}
