//! id3tree CLI: grow an ID3 decision tree and report its test accuracy.

use clap::Parser;
use colored::Colorize;

use id3tree::prelude::*;
use id3tree::research::{CrossValidation, Logger};

use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "id3tree")]
#[command(about = "Grow an ID3 decision tree and report its test accuracy")]
#[command(version)]
struct Cli {
    /// Training file (ARFF, or CSV with a header row)
    train: PathBuf,

    /// Test file in the same format as the training file
    test: PathBuf,

    /// Name of the class column of CSV files
    #[arg(short, long, default_value = "class")]
    target: String,

    /// Print the sample statistics and every split decision
    #[arg(short, long)]
    verbose: bool,

    /// Append one CSV row with the tree shape and accuracies
    #[arg(long)]
    log: Option<PathBuf>,

    /// Write the tree in Graphviz dot format
    #[arg(long)]
    dot: Option<PathBuf>,

    /// Save the tree as JSON
    #[arg(long)]
    save: Option<PathBuf>,

    /// Run k-fold cross validation on the training file first
    #[arg(long)]
    folds: Option<usize>,

    /// Random seed for shuffling the cross validation folds
    #[arg(long, default_value = "1234")]
    seed: u64,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(accuracy) => {
            println!("{accuracy}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{} {e}", "Error:".bold().red());
            ExitCode::from(exit_code(&e))
        },
    }
}

/// Input failures exit with `2`, learning failures with `1`.
fn exit_code(error: &Id3Error) -> u8 {
    match error {
        Id3Error::Parse { .. }
        | Id3Error::UnknownValue { .. }
        | Id3Error::Io(_)
        | Id3Error::Polars(_)
        | Id3Error::Json(_) => 2,
        _ => 1,
    }
}

fn read(file: &Path, target: &str) -> id3tree::Result<Sample> {
    SampleReader::default()
        .file(file)
        .has_header(true)
        .target_feature(target)
        .read()
}

fn run(cli: &Cli) -> id3tree::Result<f64> {
    let train = read(&cli.train, &cli.target)?;
    let test = read(&cli.test, &cli.target)?;

    if let Some(n_folds) = cli.folds {
        cross_validate(&train, n_folds, cli.seed, cli.verbose)?;
    }

    let id3 = Id3Builder::new(train.domain())
        .verbose(cli.verbose)
        .build();

    let tree = if cli.verbose || cli.log.is_some() {
        let mut logger = Logger::new(id3, &train, &test);
        if let Some(log) = &cli.log {
            logger = logger.log_file(log);
        }
        logger.run()?
    } else {
        id3.produce(train.examples())?
    };

    if let Some(dot) = &cli.dot {
        tree.to_dot_file(dot)?;
    }
    if let Some(save) = &cli.save {
        tree.to_json_file(save)?;
    }

    id3tree::evaluate(&tree, test.examples())
}

fn cross_validate(sample: &Sample, n_folds: usize, seed: u64, verbose: bool)
    -> id3tree::Result<()>
{
    let n_sample = sample.shape().0;
    if !(2..=n_sample).contains(&n_folds) {
        return Err(Id3Error::EmptyInput(format!(
            "cannot split {n_sample} examples into {n_folds} folds"
        )));
    }

    let cv = CrossValidation::new(sample)
        .n_folds(n_folds)
        .seed(seed)
        .verbose(verbose)
        .shuffle();

    let mut total = 0.0;
    for (k, (train, test)) in cv.enumerate() {
        let tree = Id3Builder::new(train.domain())
            .build()
            .produce(train.examples())?;
        let accuracy = tree.accuracy(test.examples())?;
        total += accuracy;
        eprintln!(
            "{} {}",
            format!("[FOLD {:>3}]", k + 1).bold().red(),
            format!("test accuracy {accuracy:.5}").bold().yellow(),
        );
    }
    eprintln!(
        "{} {}",
        "[CV]".bold().bright_green(),
        format!("mean accuracy {:.5}", total / n_folds as f64).bold().cyan(),
    );
    Ok(())
}
