//! Lazy, never-evicted store of per-year calendar tables.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::error::DataError;
use crate::model::YearTable;
use crate::validate;

/// Loads [`YearTable`]s from a directory of per-year JSON resources and
/// caches them for the process lifetime.
///
/// The resource for year `Y` is `<dir>/<Y>.json`. A table is read,
/// parsed, and invariant-validated once on first request, then served
/// from the cache; the data set is small (tens of years) and immutable,
/// so nothing is ever evicted. Tables are published as whole `Arc`s with
/// insert-if-absent semantics: under a racing first load both threads may
/// parse, but only one fully validated table is ever visible, and a
/// published table is never replaced.
#[derive(Debug)]
pub struct YearStore {
    dir: PathBuf,
    cache: RwLock<HashMap<i32, Arc<YearTable>>>,
    loads: AtomicUsize,
}

impl YearStore {
    /// Creates a store reading from `dir`.
    ///
    /// The directory is not touched until the first [`get`](Self::get).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: RwLock::new(HashMap::new()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Returns the resource directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the table for `year`, loading it on first request.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::NotFound`] when no resource exists for
    /// `year`, [`DataError::Read`] when the resource cannot be read, and
    /// [`DataError::Corrupt`] when it cannot be parsed into a table that
    /// holds every invariant (12 months, day counts in 29..=32, valid
    /// numerals, an unbroken `greg_day` chain).
    pub fn get(&self, year: i32) -> Result<Arc<YearTable>, DataError> {
        if let Some(table) = self
            .cache
            .read()
            .expect("year cache lock poisoned")
            .get(&year)
        {
            return Ok(Arc::clone(table));
        }

        let table = self.load(year)?;

        let mut cache = self.cache.write().expect("year cache lock poisoned");
        // Insert-if-absent: if another thread published this year while we
        // were parsing, its table wins and ours is dropped.
        let entry = cache.entry(year).or_insert_with(|| Arc::new(table));
        Ok(Arc::clone(entry))
    }

    /// Returns how many resource parses have completed.
    ///
    /// Cache hits do not count, so repeated queries for the same year
    /// keep this at one per year (modulo racing first loads).
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    /// Returns the `(earliest, latest)` years with a resource on disk,
    /// or `None` when the directory holds no per-year files.
    ///
    /// Files that are not named `<year>.json` are ignored.
    pub fn span(&self) -> Option<(i32, i32)> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %self.dir.display(), error = %e, "cannot scan data directory");
                return None;
            }
        };
        let mut min_max: Option<(i32, i32)> = None;
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(year) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<i32>().ok())
            else {
                continue;
            };
            min_max = Some(match min_max {
                None => (year, year),
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
            });
        }
        min_max
    }

    /// Read, parse, and validate the resource for `year`.
    fn load(&self, year: i32) -> Result<YearTable, DataError> {
        let path = self.dir.join(format!("{year}.json"));

        let text = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DataError::NotFound {
                    year,
                    path: path.clone(),
                }
            } else {
                DataError::Read {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;

        let table: YearTable = serde_json::from_str(&text).map_err(|e| DataError::Corrupt {
            year,
            count: 1,
            details: format!("invalid JSON: {e}"),
        })?;

        validate::validate_year_table(&table, year)?;

        self.loads.fetch_add(1, Ordering::Relaxed);
        info!(
            year,
            path = %path.display(),
            days = table.total_days(),
            "loaded year table"
        );
        Ok(table)
    }
}
