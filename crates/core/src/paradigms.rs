//! The same computation, squaring every even number, written in three styles
//!
//! Squares are `i128` so every `i64` input squares without overflow.

use serde::Serialize;

/// Input used when the caller does not provide numbers
pub const DEFAULT_NUMBERS: [i64; 6] = [1, 2, 3, 4, 5, 6];

/// Programming style used to compute a result
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Paradigm {
    Imperative,
    Declarative,
    Functional,
}

impl Paradigm {
    pub fn label(&self) -> &'static str {
        match self {
            Paradigm::Imperative => "Imperative",
            Paradigm::Declarative => "Declarative",
            Paradigm::Functional => "Functional",
        }
    }
}

/// Output of one paradigm
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ParadigmResult {
    pub paradigm: Paradigm,
    pub result: Vec<i128>,
}

pub fn imperative(numbers: &[i64]) -> Vec<i128> {
    let mut result = Vec::new();

    for num in numbers {
        if num % 2 == 0 {
            let wide = i128::from(*num);
            result.push(wide * wide);
        }
    }

    result
}

pub fn declarative(numbers: &[i64]) -> Vec<i128> {
    numbers
        .iter()
        .filter(|&&n| n % 2 == 0)
        .map(|&n| i128::from(n) * i128::from(n))
        .collect()
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

pub fn square(n: i64) -> i128 {
    let n = i128::from(n);
    n * n
}

pub fn functional(numbers: &[i64]) -> Vec<i128> {
    numbers
        .iter()
        .copied()
        .filter(|n| is_even(*n))
        .map(square)
        .collect()
}

/// Run every paradigm over the same input, in declaration order
pub fn evaluate_all(numbers: &[i64]) -> Vec<ParadigmResult> {
    vec![
        ParadigmResult {
            paradigm: Paradigm::Imperative,
            result: imperative(numbers),
        },
        ParadigmResult {
            paradigm: Paradigm::Declarative,
            result: declarative(numbers),
        },
        ParadigmResult {
            paradigm: Paradigm::Functional,
            result: functional(numbers),
        },
    ]
}
