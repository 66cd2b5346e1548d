use id3tree::prelude::*;


fn path(file: &str) -> String {
    format!("{}/tests/dataset/{file}", env!("CARGO_MANIFEST_DIR"))
}


#[test]
fn read_arff() {
    let sample = SampleReader::default()
        .file(path("play_tennis.arff"))
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (14, 4));
    assert_eq!(sample.target_name(), "PlayTennis");
    assert_eq!(sample.classes(), ["No", "Yes"]);

    let domain = sample.domain();
    assert_eq!(
        domain.attributes().collect::<Vec<_>>(),
        ["Humidity", "Outlook", "Temperature", "Wind"],
    );
    assert_eq!(domain.values("Outlook").unwrap(), ["Sunny", "Overcast", "Rain"]);

    let first = &sample.examples()[0];
    assert_eq!(first.value_of("Outlook").unwrap(), "Sunny");
    assert_eq!(first.value_of("Wind").unwrap(), "Weak");
    assert_eq!(first.target(), Some("No"));
}


#[test]
fn read_csv() {
    let sample = SampleReader::default()
        .file(path("play_tennis.csv"))
        .has_header(true)
        .target_feature("PlayTennis")
        .read()
        .unwrap();

    assert_eq!(sample.shape(), (14, 4));
    assert_eq!(sample.target_name(), "PlayTennis");
    assert_eq!(sample.classes(), ["No", "Yes"]);
    assert_eq!(
        sample.domain().values("Outlook").unwrap(),
        ["Sunny", "Overcast", "Rain"],
    );

    // The same data grows the same tree in both formats.
    let arff = SampleReader::default()
        .file(path("play_tennis.arff"))
        .read()
        .unwrap();
    let from_csv = id3tree::train(sample.examples(), sample.domain()).unwrap();
    let from_arff = id3tree::train(arff.examples(), arff.domain()).unwrap();
    assert_eq!(from_csv.root(), from_arff.root());
}


#[test]
fn csv_needs_a_known_target() {
    let err = SampleReader::default()
        .file(path("play_tennis.csv"))
        .has_header(true)
        .target_feature("Play")
        .read()
        .unwrap_err();
    assert!(matches!(err, Id3Error::UnknownAttribute(ref a) if a == "Play"));

    let err = SampleReader::default()
        .file(path("play_tennis.csv"))
        .has_header(true)
        .read()
        .unwrap_err();
    assert!(matches!(err, Id3Error::Io(_)));
}


#[test]
fn undeclared_value_reports_its_line() {
    let err = SampleReader::default()
        .file(path("undeclared_value.arff"))
        .read()
        .unwrap_err();

    match err {
        Id3Error::UnknownValue { line, attribute, value } => {
            assert_eq!(line, 7);
            assert_eq!(attribute, "Weather");
            assert_eq!(value, "Snowy");
        },
        other => panic!("unexpected error: {other}"),
    }
}


#[test]
fn empty_data_section_reads_an_empty_sample() {
    let sample = SampleReader::default()
        .file(path("empty.arff"))
        .read()
        .unwrap();
    assert!(sample.is_empty());

    let err = id3tree::train(sample.examples(), sample.domain()).unwrap_err();
    assert!(matches!(err, Id3Error::EmptyTrainingSet));
}


#[test]
fn missing_file_is_an_io_error() {
    let err = SampleReader::default()
        .file(path("no_such_file.arff"))
        .read()
        .unwrap_err();
    assert!(matches!(err, Id3Error::Io(_)));

    let err = SampleReader::default().read().unwrap_err();
    assert!(matches!(err, Id3Error::Io(_)));
}
