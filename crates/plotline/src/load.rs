use std::fs::File;
use std::io::{BufReader, prelude::*};
use std::path::Path;

use lazy_regex::regex_is_match;

use crate::error::{LoadError, LoadResult};
use crate::series::NumericSeries;

/// Reads a text file of one integer per line into a [`NumericSeries`].
///
/// Lines are trimmed of surrounding whitespace before parsing. Any line that
/// does not parse as a signed base-10 integer fails the whole load, blank
/// lines included.
pub fn load_series(path: &Path) -> LoadResult<NumericSeries> {
    let file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut values = Vec::new();
    for (index, result) in reader.lines().enumerate() {
        let line = result.map_err(|source| LoadError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        values.push(parse_line(line.trim(), index + 1)?);
    }
    Ok(NumericSeries::new(values))
}

fn parse_line(content: &str, line: usize) -> LoadResult<i64> {
    content.parse().map_err(|_| LoadError::Parse {
        line,
        content: content.to_owned(),
        looks_decimal: regex_is_match!(r"^[+-]?[0-9]+[.,][0-9]+$", content),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    fn fixture(contents: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_values_in_file_order() {
        let (_dir, path) = fixture("1\n2\n3\n4");
        let series = load_series(&path).unwrap();
        assert_eq!(series.values(), &[1, 2, 3, 4]);
    }

    #[test]
    fn accepts_signed_and_padded_lines() {
        let (_dir, path) = fixture("  -5  \n+7\n\t0\n");
        let series = load_series(&path).unwrap();
        assert_eq!(series.values(), &[-5, 7, 0]);
    }

    #[test]
    fn empty_file_loads_as_empty_series() {
        let (_dir, path) = fixture("");
        let series = load_series(&path).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn bad_line_is_reported_with_position_and_content() {
        let (_dir, path) = fixture("1\nabc\n3");
        let error = load_series(&path).unwrap_err();
        match error {
            LoadError::Parse { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "abc");
            }
            other => panic!("expected a parse error, got {other}"),
        }
    }

    #[test]
    fn blank_line_is_rejected() {
        let (_dir, path) = fixture("1\n\n3");
        let error = load_series(&path).unwrap_err();
        assert!(matches!(error, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn decimal_line_gets_a_hint() {
        let (_dir, path) = fixture("1\n2.5\n3");
        let error = load_series(&path).unwrap_err();
        assert!(matches!(
            &error,
            LoadError::Parse {
                looks_decimal: true,
                ..
            }
        ));
        assert!(error.to_string().contains("whole integers"));
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let error = load_series(&path).unwrap_err();
        assert!(matches!(error, LoadError::FileAccess { .. }));
    }
}
