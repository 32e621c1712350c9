use chrono::Utc;
use itelex_directory_core::{
    decode_extension, DirectoryEntry, EntryDecorator, EntryField, Localizations,
    ITELEX_EPOCH_OFFSET_SECS, NO_EXTENSION,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::thread::{self, ThreadId};

struct CapturingLogger {
    records: Mutex<Vec<(ThreadId, Level, String)>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((thread::current().id(), record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    records: Mutex::new(Vec::new()),
};
static LOGGER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Runs `action` and returns the records it logged on this thread.
fn capture<T>(action: impl FnOnce() -> T) -> (T, Vec<(Level, String)>) {
    LOGGER_INSTALLED.get_or_init(|| {
        log::set_logger(&LOGGER).expect("no other logger in this test binary");
        log::set_max_level(LevelFilter::Trace);
    });

    let current = thread::current().id();
    let take_own = || {
        let mut records = LOGGER.records.lock().unwrap();
        let (own, others): (Vec<_>, Vec<_>) =
            records.drain(..).partition(|(thread, _, _)| *thread == current);
        *records = others;
        own.into_iter()
            .map(|(_, level, message)| (level, message))
            .collect::<Vec<_>>()
    };

    take_own();
    let value = action();
    (value, take_own())
}

fn table() -> Localizations {
    Localizations {
        yes: "ja".to_string(),
        no: "nein".to_string(),
        client_types: BTreeMap::new(),
    }
}

#[test]
fn out_of_range_codes_log_one_warning_each() {
    for code in [-1_i64, 111] {
        let (shown, records) = capture(|| decode_extension(code));
        assert_eq!(shown, NO_EXTENSION);
        assert_eq!(records.len(), 1, "code {code}: {records:?}");

        let (level, message) = &records[0];
        assert_eq!(*level, Level::Warn);
        assert!(
            message.contains(&format!("status=invalid code={code}")),
            "unexpected message: {message}"
        );
    }
}

#[test]
fn valid_codes_decode_silently() {
    let (_, records) = capture(|| {
        for code in 0..=110 {
            decode_extension(code);
        }
    });
    assert!(records.is_empty(), "{records:?}");
}

#[test]
fn unrepresentable_timestamp_logs_warning_on_display() {
    let table = table();
    let decorator = EntryDecorator::new(&table).with_zone(Utc);
    let mut entry = DirectoryEntry::new(4711, "Kaputt");
    entry.timestamp = i64::MIN;

    let (shown, records) = capture(|| decorator.format_field(&entry, EntryField::Timestamp));
    assert_eq!(shown, None);
    assert_eq!(records.len(), 1, "{records:?}");
    assert_eq!(records[0].0, Level::Warn);
    assert!(records[0].1.contains("event=timestamp_decode"));
    assert!(records[0].1.contains("status=invalid number=4711"));

    entry.timestamp = ITELEX_EPOCH_OFFSET_SECS;
    let (shown, records) = capture(|| decorator.format_field(&entry, EntryField::Timestamp));
    assert_eq!(shown.as_deref(), Some("01.01.70, 00:00"));
    assert!(records.is_empty(), "{records:?}");
}
