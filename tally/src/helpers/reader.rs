use crate::models::config::Config;
use csv::ReaderBuilder;
use std::{fs, path::Path};
use tally_error::{Error, ErrorType, IoError, Result};
use tracing::{debug, warn};

/// Titles of every article in a CSV file.
///
/// The file has no header row: records whose first field starts with a
/// non-empty `config.comment_prefix` are skipped instead. Records too short
/// to hold `config.column` are skipped with a warning.
pub fn titles<P: AsRef<Path>>(path: P, config: &Config) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| {
            Error::new(
                ErrorType::InputOutput(IoError::ReadingError),
                Some(Box::new(error)),
                Some(format!("cannot open {}", path.display())),
            )
        })?;

    let mut titles = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(|error| {
            Error::new(
                ErrorType::InputOutput(IoError::ReadingError),
                Some(Box::new(error)),
                Some(format!("invalid record {} in {}", line + 1, path.display())),
            )
        })?;

        if !config.comment_prefix.is_empty()
            && record
                .get(0)
                .is_some_and(|field| field.starts_with(&config.comment_prefix))
        {
            continue;
        }

        match record.get(config.column) {
            Some(title) => titles.push(title.to_string()),
            None => warn!(
                "Record {} has no column {}, skipped.",
                line + 1,
                config.column
            ),
        }
    }

    debug!("Read {} titles from {}.", titles.len(), path.display());

    Ok(titles)
}

/// Every whitespace separated integer of a text file, in reading order.
pub fn numbers<P: AsRef<Path>>(path: P) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|error| {
        Error::new(
            ErrorType::InputOutput(IoError::ReadingError),
            Some(Box::new(error)),
            Some(format!("cannot read {}", path.display())),
        )
    })?;

    content
        .split_whitespace()
        .map(|number| {
            number.parse::<i64>().map_err(|error| {
                Error::new(
                    ErrorType::InputOutput(IoError::DeserializationError),
                    Some(Box::new(error)),
                    Some(format!("{:?} is not an integer", number)),
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numbers.txt");
        fs::write(&path, "4 -2 9\n\n7\n").unwrap();

        assert_eq!(numbers(&path).unwrap(), vec![4, -2, 9, 7]);
    }

    #[test]
    fn test_numbers_rejects_words() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("numbers.txt");
        fs::write(&path, "4 four\n").unwrap();

        let error = numbers(&path).unwrap_err();
        assert!(matches!(
            error.etype,
            ErrorType::InputOutput(IoError::DeserializationError)
        ));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let error = titles(temp_dir.path().join("none.csv"), &Config::default())
            .unwrap_err();
        assert!(matches!(
            error.etype,
            ErrorType::InputOutput(IoError::ReadingError)
        ));
    }
}
