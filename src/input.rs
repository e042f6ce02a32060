//! Text format read by the `subsequence-weighting` binary.
//!
//! ```text
//! T
//! n            \
//! k_1 .. k_n    } repeated T times
//! w_1 .. w_n   /
//! ```
//!
//! Blank lines are skipped, so a case with `n = 0` has no key or weight
//! rows. Line numbers in errors are 1-based and refer to the raw input.

use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Case {
    pub keys: Vec<i64>,
    pub weights: Vec<i64>,
}

struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    fn next_line(&mut self, what: &str) -> Result<(usize, &'a str)> {
        for (i, line) in &mut self.inner {
            self.last = i + 1;
            if !line.trim().is_empty() {
                return Ok((i + 1, line));
            }
        }
        Err(Error::Parse {
            line: self.last + 1,
            message: format!("unexpected end of input, expected {}", what),
        })
    }

    fn has_more(&self) -> bool {
        self.inner
            .clone()
            .any(|(_, line)| !line.trim().is_empty())
    }
}

fn parse_num<T: FromStr>(line: usize, token: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    token.parse().map_err(|e| Error::Parse {
        line,
        message: format!("invalid number {:?}: {}", token, e),
    })
}

fn parse_count(lines: &mut Lines<'_>, what: &str) -> Result<usize> {
    let (line, text) = lines.next_line(what)?;
    let mut tokens = text.split_whitespace();
    let count = match (tokens.next(), tokens.next()) {
        (Some(token), None) => parse_num(line, token)?,
        _ => {
            return Err(Error::Parse {
                line,
                message: format!("expected a single {}", what),
            })
        }
    };
    Ok(count)
}

fn parse_row(lines: &mut Lines<'_>, what: &str, n: usize) -> Result<Vec<i64>> {
    let (line, text) = lines.next_line(what)?;
    let row = text
        .split_whitespace()
        .map(|token| parse_num(line, token))
        .collect::<Result<Vec<i64>>>()?;
    if row.len() != n {
        return Err(Error::Parse {
            line,
            message: format!("expected {} {}, found {}", n, what, row.len()),
        });
    }
    Ok(row)
}

/// Parses every test case. Trailing non-blank input is an error.
pub fn parse_cases(text: &str) -> Result<Vec<Case>> {
    let mut lines = Lines::new(text);
    let t = parse_count(&mut lines, "test case count")?;

    let mut cases = Vec::new();
    for _ in 0..t {
        let n = parse_count(&mut lines, "element count")?;
        if n == 0 {
            cases.push(Case::default());
            continue;
        }
        let keys = parse_row(&mut lines, "keys", n)?;
        let weights = parse_row(&mut lines, "weights", n)?;
        cases.push(Case { keys, weights });
    }

    if lines.has_more() {
        let (line, _) = lines.next_line("trailing input")?;
        return Err(Error::Parse {
            line,
            message: format!("trailing input after {} test cases", t),
        });
    }
    log::debug!("parsed {} test cases", cases.len());
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sample() {
        let text = "1\n4\n1 2 3 4\n10 20 30 40\n";
        assert_eq!(
            parse_cases(text),
            Ok(vec![Case {
                keys: vec![1, 2, 3, 4],
                weights: vec![10, 20, 30, 40],
            }])
        );
    }

    #[test]
    fn skips_blank_lines() {
        let text = "2\n\n1\n  5 \n7\n\n2\n2 2\n10   3\n\n";
        let cases = parse_cases(text).unwrap();
        assert_eq!(cases.len(), 2);
        assert_eq!(cases[1].keys, vec![2, 2]);
        assert_eq!(cases[1].weights, vec![10, 3]);
    }

    #[test]
    fn empty_case() {
        assert_eq!(parse_cases("2\n0\n\n1\n5\n7\n").unwrap()[0], Case::default());
        assert_eq!(parse_cases("0\n"), Ok(vec![]));
    }

    #[test]
    fn reports_line_numbers() {
        let err = parse_cases("1\n3\n1 2 x\n1 2 3\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));

        let err = parse_cases("1\n3\n1 2 3\n1 2\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 4, .. }));

        let err = parse_cases("2\n1\n1\n1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));

        let err = parse_cases("1\n1\n1\n1\n9\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 5, .. }));

        let err = parse_cases("").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }
}
