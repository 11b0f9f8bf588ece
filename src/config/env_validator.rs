//! Environment variable validation with typo suggestions
//!
//! An invalid `SLUGMAP_*` value never aborts a run: it is reported on stderr
//! (logging is not installed yet while config loads) and the fallback is used.

use std::io::Write;

/// Validator for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse a value, warning on stderr and returning `fallback` if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, fallback: T) -> T
    where
        F: Fn(&str) -> Option<T>,
    {
        self.parse_with_writer(value, parser, fallback, &mut std::io::stderr())
    }

    pub fn parse_with_writer<T, F, W>(&self, value: &str, parser: F, fallback: T, writer: &mut W) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        match parser(value.trim()) {
            Some(parsed) => parsed,
            None => {
                let _ = writeln!(
                    writer,
                    "warning: ignoring invalid {} value '{}'{}",
                    self.var_name,
                    value,
                    self.suggest(value)
                );
                let _ = writeln!(writer, "  valid values: {}", self.valid_values.join(", "));
                fallback
            }
        }
    }

    fn suggest(&self, value: &str) -> String {
        match closest(&value.trim().to_lowercase(), self.valid_values) {
            Some(suggested) => format!(" (did you mean '{}'?)", suggested),
            None => String::new(),
        }
    }
}

/// Closest candidate within two edits, excluding exact matches
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|&c| (c, levenshtein(input, c)))
        .filter(|&(_, dist)| dist > 0 && dist <= 2)
        .min_by_key(|&(_, dist)| dist)
        .map(|(c, _)| c)
}

/// Byte-wise Levenshtein distance, enough for ASCII keys and values
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
