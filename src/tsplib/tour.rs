//! TSPLIB reference tour parser.

use std::path::Path;

use crate::error::{AcsError, AcsResult};

/// Parses a TSPLIB `.tour` file (typically a published optimal tour).
///
/// Node ids after `TOUR_SECTION` are 1-based, one per line, terminated by
/// a non-positive id or `EOF`. The returned tour is 0-based.
///
/// # Errors
///
/// Returns [`AcsError::Parse`] for a non-integer entry in the tour
/// section.
///
/// # Examples
///
/// ```
/// use acs_tsp::tsplib::parse_tour;
///
/// let text = "\
/// NAME : tiny.opt.tour
/// TYPE : TOUR
/// DIMENSION : 3
/// TOUR_SECTION
/// 1
/// 3
/// 2
/// -1
/// EOF
/// ";
/// assert_eq!(parse_tour(text).unwrap(), vec![0, 2, 1]);
/// ```
pub fn parse_tour(content: &str) -> AcsResult<Vec<usize>> {
    let mut tour = Vec::new();
    let mut in_tour_section = false;

    for (index, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("EOF") {
            break;
        }
        if line.starts_with("TOUR_SECTION") {
            in_tour_section = true;
            continue;
        }
        if !in_tour_section {
            continue;
        }

        let value: i64 = line.parse().map_err(|_| AcsError::Parse {
            line: index + 1,
            message: format!("invalid tour entry: {line}"),
        })?;
        if value <= 0 {
            break;
        }
        tour.push((value - 1) as usize);
    }

    Ok(tour)
}

/// Reads and parses a TSPLIB tour file.
///
/// # Errors
///
/// Returns [`AcsError::Io`] if the file cannot be read, otherwise the same
/// errors as [`parse_tour`].
pub fn load_tour<Q: AsRef<Path>>(path: Q) -> AcsResult<Vec<usize>> {
    let content = std::fs::read_to_string(path)?;
    parse_tour(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tour_one_based_conversion() {
        let text = "TOUR_SECTION\n1\n3\n2\n-1\nEOF\n";
        assert_eq!(parse_tour(text).expect("parses"), vec![0, 2, 1]);
    }

    #[test]
    fn test_parse_tour_stops_at_eof_without_terminator() {
        let text = "TOUR_SECTION\n2\n1\nEOF\n";
        assert_eq!(parse_tour(text).expect("parses"), vec![1, 0]);
    }

    #[test]
    fn test_parse_tour_ignores_headers() {
        let text = "NAME : x\nDIMENSION : 2\nTOUR_SECTION\n1\n2\n-1\n";
        assert_eq!(parse_tour(text).expect("parses"), vec![0, 1]);
    }

    #[test]
    fn test_parse_tour_invalid_entry() {
        let text = "TOUR_SECTION\n1\ntwo\n-1\n";
        let err = parse_tour(text).expect_err("bad entry");
        assert!(matches!(err, AcsError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_tour_empty_without_section() {
        assert!(parse_tour("NAME : x\nEOF\n").expect("parses").is_empty());
    }
}
