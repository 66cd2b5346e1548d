use id3tree::prelude::*;
use id3tree::research::Logger;

use std::fs;
use std::path::PathBuf;


fn dataset(file: &str) -> Sample {
    SampleReader::default()
        .file(format!("{}/tests/dataset/{file}", env!("CARGO_MANIFEST_DIR")))
        .read()
        .unwrap()
}


fn temp_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("id3tree-{}-{name}", std::process::id()))
}


#[test]
fn json_save_and_load() {
    let train = dataset("play_tennis.arff");
    let tree = id3tree::train(train.examples(), train.domain()).unwrap();

    let file = temp_file("tree.json");
    tree.to_json_file(&file).unwrap();
    let loaded = DecisionTree::from_json_file(&file).unwrap();
    fs::remove_file(&file).unwrap();

    assert_eq!(loaded, tree);
    assert_eq!(loaded.domain(), train.domain());
}


#[test]
fn dot_file() {
    let train = dataset("play_tennis.arff");
    let tree = id3tree::train(train.examples(), train.domain()).unwrap();

    let file = temp_file("tree.dot");
    tree.to_dot_file(&file).unwrap();
    let dot = fs::read_to_string(&file).unwrap();
    fs::remove_file(&file).unwrap();

    assert!(dot.starts_with("graph DecisionTree {"));
    assert!(dot.trim_end().ends_with('}'));
    assert!(dot.contains("Outlook ?"));
    assert!(dot.contains("Overcast (4)"));
    assert_eq!(dot.matches("shape = box").count(), tree.n_leaves());
}


#[test]
fn logger_appends_one_row_per_run() {
    let train = dataset("play_tennis.arff");
    let test = dataset("play_tennis_test.arff");
    let log = temp_file("log.csv");

    for _ in 0..2 {
        let id3 = Id3Builder::new(train.domain()).build();
        let tree = Logger::new(id3, &train, &test)
            .log_file(&log)
            .run()
            .unwrap();
        assert_eq!(tree.accuracy(test.examples()).unwrap(), 0.75);
    }

    let content = fs::read_to_string(&log).unwrap();
    fs::remove_file(&log).unwrap();

    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Depth,Leaves,TrainAccuracy,TestAccuracy,Time");
    assert!(lines[1].starts_with("2,5,1,0.75,"));
}
