use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Even => write!(f, "Even"),
            Parity::Odd => write!(f, "Odd"),
        }
    }
}

/// Parity of `n`; `rem_euclid` keeps negative odd numbers odd
pub fn parity_of(n: i64) -> Parity {
    if n.rem_euclid(2) == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}
