//! Header-name column resolution

use csv::StringRecord;

use crate::error::{Result, TrackError};

/// Resolve a column index by header name
///
/// # Errors
/// `Configuration` naming the column when the header lacks it.
pub fn lookup_column(header: &StringRecord, name: &str) -> Result<usize> {
    header
        .iter()
        .position(|column| column.trim() == name)
        .ok_or_else(|| {
            TrackError::Configuration(format!("required column '{}' missing from CSV header", name))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> StringRecord {
        StringRecord::from(vec!["t_timestamp", " latitude", "longitude", "rc_on"])
    }

    #[test]
    fn test_lookup_finds_columns_by_name() {
        assert_eq!(lookup_column(&header(), "t_timestamp").unwrap(), 0);
        assert_eq!(lookup_column(&header(), "rc_on").unwrap(), 3);
    }

    #[test]
    fn test_lookup_trims_header_whitespace() {
        assert_eq!(lookup_column(&header(), "latitude").unwrap(), 1);
    }

    #[test]
    fn test_missing_column_is_a_configuration_error() {
        let err = lookup_column(&header(), "satellites_used").unwrap_err();
        assert!(matches!(err, TrackError::Configuration(_)));
        assert!(err.to_string().contains("satellites_used"));
    }
}
