//! Error types for miti-data.

use std::path::PathBuf;

/// Error type for all fallible operations in the miti-data crate.
///
/// The three variants map onto the three ways loading a year table can
/// fail: the resource does not exist, the resource cannot be read, or the
/// resource parses but violates the calendar-table invariants.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Returned when no resource exists for the requested year.
    #[error("no calendar table for year {year}: {}", path.display())]
    NotFound {
        /// The Bikram Sambat year that was requested.
        year: i32,
        /// The path that was probed.
        path: PathBuf,
    },

    /// Returned when a resource exists but cannot be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Returned when a resource cannot be parsed into a valid year table.
    ///
    /// All invariant violations found in one file are accumulated into a
    /// single error rather than reported one at a time.
    #[error("corrupt table for year {year}: {count} violation(s): {details}")]
    Corrupt {
        /// The Bikram Sambat year whose table is corrupt.
        year: i32,
        /// Number of accumulated violations.
        count: usize,
        /// Human-readable summary of the violations.
        details: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = DataError::NotFound {
            year: 2099,
            path: PathBuf::from("/data/2099.json"),
        };
        assert_eq!(
            err.to_string(),
            "no calendar table for year 2099: /data/2099.json"
        );
    }

    #[test]
    fn display_read() {
        let err = DataError::Read {
            path: PathBuf::from("/data/2081.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("failed to read /data/2081.json"));
    }

    #[test]
    fn display_corrupt() {
        let err = DataError::Corrupt {
            year: 2081,
            count: 2,
            details: "expected 12 months, got 11; month 3 has 28 days".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "corrupt table for year 2081: 2 violation(s): \
             expected 12 months, got 11; month 3 has 28 days"
        );
    }

    #[test]
    fn read_preserves_source() {
        let err = DataError::Read {
            path: PathBuf::from("/data/2081.json"),
            source: std::io::Error::other("boom"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<DataError>();
    }
}
