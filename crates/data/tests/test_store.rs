//! Integration tests: store loading, caching, and corrupt-table handling.

use std::path::Path;
use std::sync::Arc;

use miti_calendar::{GregorianDate, numeral};
use miti_data::{DataError, YearStore};

/// Month lengths of BS 2081 (366 days, spans the 2024 leap February).
const LENGTHS_2081: [usize; 12] = [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 29, 31];

/// Write a synthetic `<year>.json` whose greg_day chain follows the real
/// civil calendar from `start`.
fn write_year(dir: &Path, year: i32, start: GregorianDate, lengths: &[usize; 12]) {
    let mut cursor = start;
    let months: Vec<String> = lengths
        .iter()
        .map(|&len| {
            let days: Vec<String> = (1..=len)
                .map(|d| {
                    let entry = format!(
                        r#"{{ "day": "{}", "greg_day": {} }}"#,
                        numeral::to_devanagari(d as u32),
                        cursor.day()
                    );
                    cursor = cursor.next();
                    entry
                })
                .collect();
            format!(r#"{{ "days": [{}] }}"#, days.join(",\n"))
        })
        .collect();
    let json = format!(
        r#"{{ "year": {year}, "months": [{}] }}"#,
        months.join(",\n")
    );
    std::fs::write(dir.join(format!("{year}.json")), json).expect("write fixture");
}

#[test]
fn get_returns_twelve_validated_months() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let start = GregorianDate::new(2024, 4, 13).unwrap();
    write_year(dir.path(), 2081, start, &LENGTHS_2081);

    let store = YearStore::new(dir.path());
    let table = store.get(2081).expect("load fixture");

    assert_eq!(table.year(), 2081);
    assert_eq!(table.months().len(), 12);
    for month in table.months() {
        assert!((29..=32).contains(&month.len()));
    }
    assert_eq!(table.total_days(), 366);
}

#[test]
fn second_get_is_a_cache_hit() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let start = GregorianDate::new(2024, 4, 13).unwrap();
    write_year(dir.path(), 2081, start, &LENGTHS_2081);

    let store = YearStore::new(dir.path());
    let first = store.get(2081).expect("first load");
    let second = store.get(2081).expect("cached load");

    assert!(Arc::ptr_eq(&first, &second), "cache returned a new value");
    assert_eq!(store.load_count(), 1, "table was re-parsed");
}

#[test]
fn missing_year_is_not_found_not_a_default_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = YearStore::new(dir.path());

    let err = store.get(2099).unwrap_err();
    match err {
        DataError::NotFound { year, path } => {
            assert_eq!(year, 2099);
            assert!(path.ends_with("2099.json"));
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_corrupt() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("2081.json"), "{ not json").expect("write fixture");

    let store = YearStore::new(dir.path());
    let err = store.get(2081).unwrap_err();
    assert!(
        matches!(err, DataError::Corrupt { year: 2081, .. }),
        "expected Corrupt, got {err:?}"
    );
}

#[test]
fn eleven_months_is_corrupt() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let start = GregorianDate::new(2024, 4, 13).unwrap();

    // Build a full fixture, then drop the last month from the JSON.
    write_year(dir.path(), 2081, start, &LENGTHS_2081);
    let text = std::fs::read_to_string(dir.path().join("2081.json")).unwrap();
    let truncated = {
        let idx = text.rfind(r#"{ "days":"#).expect("month marker");
        let mut t = text[..idx].trim_end().trim_end_matches(',').to_string();
        t.push_str("] }");
        t
    };
    std::fs::write(dir.path().join("2081.json"), truncated).unwrap();

    let store = YearStore::new(dir.path());
    let err = store.get(2081).unwrap_err();
    match err {
        DataError::Corrupt { details, .. } => {
            assert!(
                details.contains("expected 12 months, got 11"),
                "unexpected details: {details}"
            );
        }
        other => panic!("expected Corrupt, got {other:?}"),
    }
}

#[test]
fn year_field_mismatch_is_corrupt() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let start = GregorianDate::new(2024, 4, 13).unwrap();
    write_year(dir.path(), 2081, start, &LENGTHS_2081);

    // Serve the 2081 table under the 2082 filename.
    std::fs::rename(
        dir.path().join("2081.json"),
        dir.path().join("2082.json"),
    )
    .unwrap();

    let store = YearStore::new(dir.path());
    let err = store.get(2082).unwrap_err();
    match err {
        DataError::Corrupt { details, .. } => {
            assert!(details.contains("does not match requested year 2082"));
        }
        other => panic!("expected Corrupt, got {other:?}"),
    }
}

#[test]
fn corrupt_year_is_not_cached() {
    let dir = tempfile::tempdir().expect("create temp dir");
    std::fs::write(dir.path().join("2081.json"), "{ not json").expect("write fixture");

    let store = YearStore::new(dir.path());
    assert!(store.get(2081).is_err());
    assert_eq!(store.load_count(), 0);

    // Fixing the file on disk makes the next get succeed.
    let start = GregorianDate::new(2024, 4, 13).unwrap();
    write_year(dir.path(), 2081, start, &LENGTHS_2081);
    assert!(store.get(2081).is_ok());
    assert_eq!(store.load_count(), 1);
}

#[test]
fn span_reports_min_and_max_years() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = YearStore::new(dir.path());
    assert_eq!(store.span(), None);

    for (year, start) in [
        (2080, GregorianDate::new(2023, 4, 14).unwrap()),
        (2081, GregorianDate::new(2024, 4, 13).unwrap()),
    ] {
        // Span only looks at filenames, so lengths need not match the year.
        write_year(dir.path(), year, start, &LENGTHS_2081);
    }
    std::fs::write(dir.path().join("README.txt"), "not a table").unwrap();

    assert_eq!(store.span(), Some((2080, 2081)));
}

#[test]
fn concurrent_gets_publish_one_table() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let start = GregorianDate::new(2024, 4, 13).unwrap();
    write_year(dir.path(), 2081, start, &LENGTHS_2081);

    let store = Arc::new(YearStore::new(dir.path()));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.get(2081).expect("load fixture"))
        })
        .collect();

    let tables: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    // Duplicate parses are acceptable under the race; a single published
    // table is not negotiable.
    for table in &tables[1..] {
        assert!(Arc::ptr_eq(&tables[0], table));
    }
    assert!(store.load_count() >= 1);
}
