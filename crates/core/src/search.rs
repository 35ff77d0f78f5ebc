//! Linear and binary search over integer sequences
//!
//! Pure functions for the search exercise. Absence is reported as `None`;
//! the `-1` sentinel only shows up when a result is rendered for the console
//! (see [`format_index`]).

use serde::Serialize;
use std::cmp::Ordering;

/// Error type for parsing search input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("No target number given")]
    MissingTarget,
}

/// Result of running both searches over the same input
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub numbers: Vec<i64>,
    pub sorted: Vec<i64>,
    pub target: i64,
    pub linear: Option<usize>,
    pub binary: Option<usize>,
}

/// Scan left to right and return the index of the first match
pub fn linear_search(sequence: &[i64], target: i64) -> Option<usize> {
    for (index, value) in sequence.iter().enumerate() {
        if *value == target {
            return Some(index);
        }
    }
    None
}

/// Midpoint bisection over a non-descending sequence
///
/// The ordering is the caller's responsibility. With duplicates, the index of
/// whichever equal element a midpoint lands on first is returned.
pub fn binary_search(sorted_sequence: &[i64], target: i64) -> Option<usize> {
    if sorted_sequence.is_empty() {
        return None;
    }

    let mut low = 0;
    let mut high = sorted_sequence.len() - 1;

    while low <= high {
        let mid = low + (high - low) / 2;

        match sorted_sequence[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                // Nothing left below index zero.
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }

    None
}

/// Parse a whitespace separated list of integers
pub fn parse_numbers(line: &str) -> Result<Vec<i64>, ParseError> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| ParseError::InvalidNumber(token.to_string()))
        })
        .collect()
}

/// Parse the single integer to look for
pub fn parse_target(line: &str) -> Result<i64, ParseError> {
    let token = line.trim();
    if token.is_empty() {
        return Err(ParseError::MissingTarget);
    }
    token
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidNumber(token.to_string()))
}

/// Run the linear search on the input as given and the binary search on a
/// sorted copy of it
pub fn run_search(numbers: Vec<i64>, target: i64) -> SearchReport {
    let mut sorted = numbers.clone();
    sorted.sort_unstable();

    let linear = linear_search(&numbers, target);
    let binary = binary_search(&sorted, target);

    SearchReport {
        numbers,
        sorted,
        target,
        linear,
        binary,
    }
}

/// Render an index the way the console output shows it, `-1` meaning absent
pub fn format_index(index: Option<usize>) -> String {
    match index {
        Some(i) => i.to_string(),
        None => "-1".to_string(),
    }
}
