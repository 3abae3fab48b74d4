use sevlog::{FileSink, Level, Logger, Sink, parts};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn new_file_starts_with_separator() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("app.log");

    let _logger = Logger::new(Some(&path)).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
}

#[test]
fn file_output_appends_lines_in_order() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("multi.log");

    let logger = Logger::builder()
        .headerless(true)
        .file(&path)
        .build()
        .unwrap();
    logger.info(&parts!["one"]).unwrap();
    logger.debug(&parts!["skipped"]).unwrap();
    logger.error(&parts!["two"]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "\n one\n two\n");
}

#[test]
fn each_session_adds_a_separator() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("sessions.log");

    for msg in ["first", "second"] {
        let logger = Logger::builder()
            .headerless(true)
            .file(&path)
            .build()
            .unwrap();
        logger.log(&parts![msg]).unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "\n first\n\n second\n");
}

#[test]
fn file_line_matches_returned_line() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("fmt.log");

    let logger = Logger::new(Some(&path)).unwrap();
    let line = logger.warn(&parts!["careful"]).unwrap().unwrap();
    logger.flush().unwrap();

    assert!(line.starts_with("warn ["));
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("\n{line}\n"));
}

#[test]
fn path_is_normalized_before_open() {
    let tmp_dir = TempDir::new().unwrap();
    fs::create_dir(tmp_dir.path().join("logs")).unwrap();
    let messy = tmp_dir.path().join("logs/./nested/../app.log");

    let sink = FileSink::open(&messy).unwrap();
    sink.accept("line\n").unwrap();

    assert_eq!(sink.path(), tmp_dir.path().join("logs").join("app.log"));
    assert_eq!(
        fs::read_to_string(tmp_dir.path().join("logs/app.log")).unwrap(),
        "\nline\n"
    );
}

#[test]
fn unwritable_path_is_an_error() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("missing-dir").join("app.log");

    let err = Logger::new(Some(&path)).unwrap_err();
    assert!(matches!(err, sevlog::Error::Io(_)));

    let err = Logger::builder().file(&path).build().unwrap_err();
    assert!(matches!(err, sevlog::Error::Io(_)));
}

#[test]
fn directory_path_is_an_error() {
    let tmp_dir = TempDir::new().unwrap();
    assert!(Logger::new(Some(tmp_dir.path())).is_err());
}

#[test]
fn from_config_uses_file_and_level() {
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("cfg.log");

    let config = sevlog::Config {
        level: "error".to_string(),
        headerless: true,
        path: Some(path.to_string_lossy().into_owned()),
    };
    let logger = Logger::from_config(&config).unwrap();
    assert_eq!(logger.level(), Level::Error);

    logger.warn(&parts!["dropped"]).unwrap();
    logger.fatal(&parts!["kept"]).unwrap();

    assert_eq!(fs::read_to_string(Path::new(&path)).unwrap(), "\n kept\n");
}
