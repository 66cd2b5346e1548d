use colored::Colorize;

use crate::{
    Classifier,
    DecisionTree,
    Learner,
    Sample,
};
use crate::error::Result;

use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Depth,Leaves,TrainAccuracy,TestAccuracy,Time\n";

/// Struct `Logger` trains a learner on a training sample,
/// measures the running time,
/// and reports the shape of the tree
/// together with the train/test accuracy.
///
/// # Example
/// ```no_run
/// use id3tree::prelude::*;
/// use id3tree::research::Logger;
///
/// let train = SampleReader::default()
///     .file("/path/to/train.arff")
///     .read()
///     .unwrap();
/// let test = SampleReader::default()
///     .file("/path/to/test.arff")
///     .read()
///     .unwrap();
///
/// let id3 = Id3Builder::new(train.domain()).build();
/// let tree = Logger::new(id3, &train, &test)
///     .log_file("log.csv")
///     .run()
///     .unwrap();
/// ```
pub struct Logger<'a, L> {
    learner: L,
    train: &'a Sample,
    test: &'a Sample,
    log_file: Option<PathBuf>,
}

impl<'a, L> Logger<'a, L> {
    /// Create a new instance of `Logger`.
    pub fn new(learner: L, train: &'a Sample, test: &'a Sample) -> Self {
        Self { learner, train, test, log_file: None, }
    }


    /// Append one CSV row per run to `file`.
    /// The header is written when the file is empty.
    pub fn log_file<P: AsRef<Path>>(mut self, file: P) -> Self {
        self.log_file = Some(file.as_ref().to_path_buf());
        self
    }
}

impl<L> Logger<'_, L>
    where L: Learner<Model = DecisionTree>,
{
    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            self.learner.name().bold().green(),
        );

        if let Some(info) = self.learner.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }

        let (n_train, n_attr) = self.train.shape();
        let n_test = self.test.shape().0;
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Target".bold(),
            self.train.target_name().bold().green(),
            "Attributes".bold(),
            n_attr.to_string().bold().green(),
            "Train examples".bold(),
            n_train.to_string().bold().green(),
            "Test examples".bold(),
            n_test.to_string().bold().green(),
            "".bold(),
        );
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "TREE".bold().red(),
            "TREE".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "DEPTH".bold().red(),
            "LEAVES".bold().blue(),
            "ACC.".bold().green(),
            "ACC.".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// Train the learner with logging and return the tree.
    /// Fails if the learner fails or if either sample is empty.
    pub fn run(&self) -> Result<DecisionTree> {
        self.print_stats();

        let now = Instant::now();
        let tree = self.learner.produce(self.train.examples())?;
        let time = now.elapsed().as_millis();

        let train = tree.accuracy(self.train.examples())?;
        let test = tree.accuracy(self.test.examples())?;
        let depth = tree.depth();
        let leaves = tree.n_leaves();

        self.print_log_header();
        println!(
            "{} {}\t{}\t{}\t{}\t{}\n",
            "[FIN]".bold().bright_green(),
            format!("{:>WIDTH$}", depth).red(),
            format!("{:>WIDTH$}", leaves).blue(),
            format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
            format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
            time_format(time).bold().cyan(),
        );

        if let Some(path) = &self.log_file {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            if file.metadata()?.len() == 0 {
                file.write_all(HEADER.as_bytes())?;
            }
            let line = format!("{depth},{leaves},{train},{test},{time}\n");
            file.write_all(line.as_bytes())?;
        }

        Ok(tree)
    }
}

fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(61_500), " 01m 01s");
        assert_eq!(time_format(3_600_000), " 01h 00m");
    }
}
