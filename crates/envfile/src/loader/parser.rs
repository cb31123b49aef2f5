//! Env file parsing.
//!
//! Responsibilities:
//! - Split a single `key=value` line according to a `SplitPolicy`.
//! - Read a whole source into an `EnvMap`, rejecting it at the first bad line.
//!
//! Does NOT handle:
//! - Comments, quoting, `export`, interpolation or multiline values.
//! - Touching any environment (see `loader`).
//!
//! Invariants:
//! - Only ASCII spaces are trimmed from keys and values; tabs are kept.
//! - An empty line is an error; an empty value (`KEY=`) is not.
//! - Later lines overwrite earlier ones with the same key.

use std::collections::BTreeMap;
use std::io::BufRead;

use super::error::{EnvFileError, FormatErrorKind};
use super::options::SplitPolicy;

/// Parsed assignments, keyed by variable name.
pub type EnvMap = BTreeMap<String, String>;

/// Splits one line into a trimmed `(key, value)` pair.
pub fn parse_line(line: &str, policy: SplitPolicy) -> Result<(&str, &str), FormatErrorKind> {
    if line.is_empty() {
        return Err(FormatErrorKind::EmptyLine);
    }

    let (key, value) = line
        .split_once('=')
        .ok_or(FormatErrorKind::MissingSeparator)?;

    if policy == SplitPolicy::ExactlyOneEquals && value.contains('=') {
        return Err(FormatErrorKind::MultipleSeparators);
    }

    Ok((key.trim_matches(' '), value.trim_matches(' ')))
}

/// Reads every line of `reader` and parses it into an [`EnvMap`].
///
/// All lines are read before any is parsed, so a stream error is reported
/// even when an earlier line is malformed.
pub fn parse_reader<R: BufRead>(reader: R, policy: SplitPolicy) -> Result<EnvMap, EnvFileError> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| EnvFileError::Io { path: None, source })?;

    let mut map = EnvMap::new();
    for (idx, line) in lines.iter().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let (key, value) = parse_line(line, policy).map_err(|kind| EnvFileError::Format {
            path: None,
            line: idx + 1,
            kind,
        })?;
        map.insert(key.to_string(), value.to_string());
    }
    Ok(map)
}

/// Parses env file contents held in memory.
pub fn parse_str(contents: &str, policy: SplitPolicy) -> Result<EnvMap, EnvFileError> {
    parse_reader(contents.as_bytes(), policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: SplitPolicy = SplitPolicy::FirstEquals;
    const STRICT: SplitPolicy = SplitPolicy::ExactlyOneEquals;

    #[test]
    fn test_parse_line_trims_spaces() {
        assert_eq!(parse_line("  KEY  =  value  ", FIRST), Ok(("KEY", "value")));
    }

    #[test]
    fn test_parse_line_keeps_tabs() {
        assert_eq!(parse_line("KEY=\tvalue\t", FIRST), Ok(("KEY", "\tvalue\t")));
    }

    #[test]
    fn test_parse_line_empty_value_is_ok() {
        assert_eq!(parse_line("KEY=", FIRST), Ok(("KEY", "")));
        assert_eq!(parse_line("KEY=   ", FIRST), Ok(("KEY", "")));
    }

    #[test]
    fn test_parse_line_empty_line_is_error() {
        assert_eq!(parse_line("", FIRST), Err(FormatErrorKind::EmptyLine));
        assert_eq!(parse_line("", STRICT), Err(FormatErrorKind::EmptyLine));
    }

    #[test]
    fn test_parse_line_blank_line_has_no_separator() {
        assert_eq!(parse_line("   ", FIRST), Err(FormatErrorKind::MissingSeparator));
    }

    #[test]
    fn test_parse_line_missing_separator() {
        assert_eq!(
            parse_line("HELLO", FIRST),
            Err(FormatErrorKind::MissingSeparator)
        );
    }

    #[test]
    fn test_parse_line_first_equals_keeps_rest_in_value() {
        assert_eq!(parse_line("A=B=C", FIRST), Ok(("A", "B=C")));
        assert_eq!(parse_line("URL=a?b=c&d=e", FIRST), Ok(("URL", "a?b=c&d=e")));
    }

    #[test]
    fn test_parse_line_exactly_one_rejects_extra_separators() {
        assert_eq!(
            parse_line("A=B=C", STRICT),
            Err(FormatErrorKind::MultipleSeparators)
        );
        assert_eq!(parse_line("A=B", STRICT), Ok(("A", "B")));
    }

    #[test]
    fn test_parse_line_empty_key_is_not_a_format_error() {
        assert_eq!(parse_line("=value", FIRST), Ok(("", "value")));
    }

    #[test]
    fn test_parse_str_last_write_wins() {
        let map = parse_str("FOO=1\nBAR=2\nFOO=3\n", FIRST).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["FOO"], "3");
        assert_eq!(map["BAR"], "2");
    }

    #[test]
    fn test_parse_str_empty_input_is_empty_map() {
        assert!(parse_str("", FIRST).unwrap().is_empty());
    }

    #[test]
    fn test_parse_str_handles_crlf_and_missing_final_newline() {
        let map = parse_str("A=1\r\nB=2", FIRST).unwrap();
        assert_eq!(map["A"], "1");
        assert_eq!(map["B"], "2");
    }

    #[test]
    fn test_parse_str_blank_line_reports_line_number() {
        let err = parse_str("A=1\n\nB=2\n", FIRST).unwrap_err();
        match err {
            EnvFileError::Format { path, line, kind } => {
                assert_eq!(path, None);
                assert_eq!(line, 2);
                assert_eq!(kind, FormatErrorKind::EmptyLine);
            }
            other => panic!("expected Format error, got {other}"),
        }
    }

    #[test]
    fn test_parse_str_error_does_not_echo_line() {
        let err = parse_str("TOKEN=abc\nsupersecret_no_equals", FIRST).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 2"), "{message}");
        assert!(!message.contains("supersecret"), "{message}");
    }

    #[test]
    fn test_parse_reader_invalid_utf8_is_io_error() {
        let bytes: &[u8] = b"A=\xff\xfe\n";
        let err = parse_reader(bytes, FIRST).unwrap_err();
        assert!(matches!(err, EnvFileError::Io { path: None, .. }), "{err}");
    }
}
