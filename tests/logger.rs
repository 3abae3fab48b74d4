//! Tests for logger functionality.

use chrono::{Local, TimeZone};
use serde_json::json;
use sevlog::{Error, Level, Logger, MemorySink, Part, Sink, parts};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn capture(level: Level) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .level(level)
        .sink(sink.clone())
        .build()
        .unwrap();
    (logger, sink)
}

/// Splits `<level> [<ts>] <msg>` into its pieces.
fn split_line(line: &str) -> (&str, &str, &str) {
    let (level, rest) = line.split_once(" [").unwrap();
    let (ts, msg) = rest.split_once("] ").unwrap();
    (level, ts, msg)
}

#[test]
fn builder_default() {
    let logger = Logger::builder().build().unwrap();
    assert_eq!(logger.level(), Level::Info);
    assert!(!logger.is_headerless());
}

#[test]
fn set_level_round_trips_every_name() {
    let (mut logger, _) = capture(Level::Info);
    for level in Level::ALL {
        assert!(logger.set_level(level.as_str()));
        assert_eq!(logger.level(), level);
    }
}

#[test]
fn set_level_rejects_unknown_name() {
    let (mut logger, _) = capture(Level::Info);
    logger.set_level("warn");
    assert!(!logger.set_level("bogus"));
    assert!(!logger.set_level("WARN"));
    assert_eq!(logger.level(), Level::Warn);
}

#[test]
fn threshold_warn_filters_less_severe() {
    let (logger, sink) = capture(Level::Warn);

    assert_eq!(logger.debug(&parts!["d"]).unwrap(), None);
    assert_eq!(logger.info(&parts!["i"]).unwrap(), None);
    assert_eq!(sink.writes(), 0);

    assert!(logger.warn(&parts!["w"]).unwrap().is_some());
    assert_eq!(sink.writes(), 1);
    assert!(logger.error(&parts!["e"]).unwrap().is_some());
    assert_eq!(sink.writes(), 2);
    assert!(logger.fatal(&parts!["f"]).unwrap().is_some());
    assert_eq!(sink.writes(), 3);
}

#[test]
fn default_format_line() {
    let (logger, sink) = capture(Level::Info);
    let line = logger
        .log(&parts!["info", "hello", "world"])
        .unwrap()
        .unwrap();

    let (level, ts, msg) = split_line(&line);
    assert_eq!(level, "info");
    assert!(ts.contains(" GMT"));
    assert_eq!(msg, " hello world");
    assert_eq!(sink.lines(), vec![format!("{line}\n")]);
}

#[test]
fn untagged_call_logs_at_threshold() {
    let (mut logger, _) = capture(Level::Info);
    let line = logger.log(&parts!["hello"]).unwrap().unwrap();
    assert_eq!(split_line(&line).0, "info");
    assert_eq!(split_line(&line).2, " hello");

    // Always admitted, whatever the threshold
    logger.set_level("fatal");
    let line = logger.log(&parts!["still here"]).unwrap().unwrap();
    assert_eq!(split_line(&line).0, "fatal");
}

#[test]
fn convenience_methods_match_tagged_log() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .level(Level::Debug)
        .headerless(true)
        .formatter(|level, _, msg| format!("{level}|{msg}"))
        .sink(sink.clone())
        .build()
        .unwrap();

    let pairs: [(Level, fn(&Logger, &[Part]) -> sevlog::LogResult); 5] = [
        (Level::Fatal, Logger::fatal),
        (Level::Error, Logger::error),
        (Level::Warn, Logger::warn),
        (Level::Info, Logger::info),
        (Level::Debug, Logger::debug),
    ];
    for (level, method) in pairs {
        let direct = method(&logger, &parts!["a", 1]).unwrap();
        let tagged = logger.log(&parts![level.as_str(), "a", 1]).unwrap();
        assert_eq!(direct, tagged);
    }
}

#[test]
fn formatter_receives_target_level() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .level(Level::Debug)
        .formatter(|level, _, msg| format!("{}:{msg}", level.as_str().to_uppercase()))
        .sink(sink.clone())
        .build()
        .unwrap();

    assert_eq!(
        logger.warn(&parts!["disk", "low"]).unwrap().as_deref(),
        Some("WARN: disk low")
    );
    assert_eq!(sink.contents(), "WARN: disk low\n");
}

#[test]
fn headerless_returns_message_only() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .headerless(true)
        .sink(sink.clone())
        .build()
        .unwrap();

    assert_eq!(logger.log(&parts!["info", "x"]).unwrap().as_deref(), Some(" x"));
    assert_eq!(sink.contents(), " x\n");
}

#[test]
fn structured_parts_are_dumped() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .headerless(true)
        .sink(sink.clone())
        .build()
        .unwrap();

    let line = logger
        .log(&parts!["info", "got", json!({"a": 1, "nested": {"list": [true, null]}})])
        .unwrap()
        .unwrap();
    assert_eq!(line, " got { a: 1, nested: { list: [ true, null ] } }");
    assert!(!line.contains("Object"));
}

#[test]
fn level_name_only_sniffed_in_first_position() {
    let (logger, _) = capture(Level::Debug);
    let line = logger.log(&parts!["note", "debug"]).unwrap().unwrap();
    assert_eq!(split_line(&line).0, "debug");
    assert_eq!(split_line(&line).2, " note debug");

    // A structured first part never selects a level
    let line = logger.log(&parts![json!("warn"), "x"]).unwrap().unwrap();
    assert_eq!(split_line(&line).0, "debug");
    assert_eq!(split_line(&line).2, " warn x");
}

#[test]
fn log_at_keeps_leading_level_text() {
    let (logger, _) = capture(Level::Info);
    let line = logger
        .log_at(Level::Error, &parts!["info", "x"])
        .unwrap()
        .unwrap();
    assert_eq!(split_line(&line).0, "error");
    assert_eq!(split_line(&line).2, " info x");
}

#[test]
fn tag_only_call_has_empty_message() {
    let (logger, _) = capture(Level::Info);
    let line = logger.log(&parts!["warn"]).unwrap().unwrap();
    assert!(line.starts_with("warn ["));
    assert!(line.ends_with("] "));
}

#[test]
fn format_is_pure() {
    let (logger, _) = capture(Level::Info);
    let ts = Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
    let a = logger.format(Level::Error, &ts, " boom");
    let b = logger.format(Level::Error, &ts, " boom");
    assert_eq!(a, b);
    assert!(a.starts_with("error [Fri Mar 01 2024 09:30:00 GMT"));
    assert!(a.ends_with("]  boom"));
}

#[test]
fn part_value_serializes_structs() {
    #[derive(serde::Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    let sink = MemorySink::new();
    let logger = Logger::builder()
        .headerless(true)
        .sink(sink)
        .build()
        .unwrap();
    let line = logger
        .info(&[Part::from("at"), Part::value(&Point { x: 1, y: -2 })])
        .unwrap()
        .unwrap();
    assert_eq!(line, " at { x: 1, y: -2 }");
}

#[test]
fn create_logger_defaults_to_stdout() {
    let logger = sevlog::create_logger(None).unwrap();
    assert_eq!(logger.level(), Level::Info);
    assert!(logger.flush().is_ok());
}

/// Refuses every line, like a full disk or a closed pipe.
struct FailingSink;

impl Sink for FailingSink {
    fn accept(&self, _line: &str) -> Result<(), Error> {
        Err(io::Error::other("device full").into())
    }
}

#[test]
fn sink_failure_is_returned() {
    let logger = Logger::builder().sink(FailingSink).build().unwrap();

    assert!(matches!(logger.info(&parts!["x"]), Err(Error::Io(_))));
    assert!(matches!(logger.log(&parts!["error", "y"]), Err(Error::Io(_))));
    // Filtered calls never reach the sink
    assert!(matches!(logger.debug(&parts!["z"]), Ok(None)));
}

#[test]
fn filtered_call_skips_formatting() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let logger = Logger::builder()
        .level(Level::Info)
        .formatter(move |level, _, msg| {
            counted.fetch_add(1, Ordering::SeqCst);
            format!("{level}{msg}")
        })
        .sink(MemorySink::new())
        .build()
        .unwrap();

    assert_eq!(logger.debug(&parts!["hidden"]).unwrap(), None);
    assert_eq!(logger.log(&parts!["debug", "hidden"]).unwrap(), None);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert!(logger.info(&parts!["shown"]).unwrap().is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn non_finite_floats_are_printed() {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .headerless(true)
        .sink(sink.clone())
        .build()
        .unwrap();

    let line = logger
        .info(&parts![f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.5])
        .unwrap();
    assert_eq!(line.as_deref(), Some(" NaN Infinity -Infinity 0.5"));
    assert_eq!(sink.contents(), " NaN Infinity -Infinity 0.5\n");
}

#[test]
fn part_value_keeps_non_finite_fields() {
    #[derive(serde::Serialize)]
    struct Stats {
        mean: f64,
        max: f64,
        samples: Vec<f64>,
    }

    let logger = Logger::builder()
        .headerless(true)
        .sink(MemorySink::new())
        .build()
        .unwrap();
    let stats = Stats {
        mean: f64::NAN,
        max: f64::INFINITY,
        samples: vec![-f64::INFINITY, 2.0],
    };
    let line = logger
        .info(&[Part::from("stats"), Part::value(&stats)])
        .unwrap()
        .unwrap();
    assert_eq!(
        line,
        " stats { mean: NaN, max: Infinity, samples: [ -Infinity, 2 ] }"
    );
}
