use id3tree::prelude::*;
use id3tree::research::CrossValidation;


fn play_tennis() -> Sample {
    SampleReader::default()
        .file(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/dataset/play_tennis.arff"))
        .read()
        .unwrap()
}


#[test]
fn folds_partition_the_sample() {
    let sample = play_tennis();
    let n_sample = sample.shape().0;

    let cv = CrossValidation::new(&sample)
        .n_folds(4)
        .seed(777)
        .shuffle();

    let mut test_sizes = Vec::new();
    for (train, test) in cv {
        assert_eq!(train.shape().0 + test.shape().0, n_sample);
        assert_eq!(train.domain(), sample.domain());
        assert_eq!(test.target_name(), sample.target_name());
        test_sizes.push(test.shape().0);
    }

    // 14 = 3 + 3 + 3 + 5: the last fold takes the remainder.
    assert_eq!(test_sizes, [3, 3, 3, 5]);
}


#[test]
fn unshuffled_folds_keep_the_file_order() {
    let sample = play_tennis();
    let (_, test) = CrossValidation::new(&sample)
        .n_folds(7)
        .next()
        .unwrap();

    assert_eq!(test.examples(), &sample.examples()[..2]);
}


#[test]
fn same_seed_same_folds() {
    let sample = play_tennis();
    let first = CrossValidation::new(&sample)
        .n_folds(2)
        .seed(42)
        .shuffle()
        .map(|(_, test)| test.examples().to_vec())
        .collect::<Vec<_>>();
    let second = CrossValidation::new(&sample)
        .n_folds(2)
        .seed(42)
        .shuffle()
        .map(|(_, test)| test.examples().to_vec())
        .collect::<Vec<_>>();
    assert_eq!(first, second);
}


#[test]
fn every_fold_grows_a_tree() {
    let sample = play_tennis();
    let cv = CrossValidation::new(&sample)
        .n_folds(3)
        .verbose(true)
        .shuffle();

    for (train, test) in cv {
        let tree = Id3Builder::new(train.domain())
            .build()
            .produce(train.examples())
            .unwrap();
        let accuracy = tree.accuracy(test.examples()).unwrap();
        assert!((0.0..=1.0).contains(&accuracy));
        assert_eq!(tree.accuracy(train.examples()).unwrap(), 1.0);
    }
}


#[test]
#[should_panic]
fn too_many_folds() {
    let sample = play_tennis();
    let _ = CrossValidation::new(&sample).n_folds(15);
}
