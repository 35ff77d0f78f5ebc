//! Descriptive statistics for two paired series
//!
//! All measures are population measures (divide by `n`, not `n - 1`).

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Arrays must be of equal non-zero length (got {x} and {y})")]
    LengthMismatch { x: usize, y: usize },
}

/// Summary of two paired series
///
/// `r` is NaN when either series has zero variance; serde_json writes NaN as
/// `null`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StatsSummary {
    pub variance_x: f64,
    pub variance_y: f64,
    pub covariance: f64,
    pub r: f64,
    pub r_squared: f64,
}

/// Parse a comma separated list of numbers
pub fn parse_series(line: &str) -> Result<Vec<f64>, StatsError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|_| StatsError::InvalidValue(token.to_string()))
        })
        .collect()
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn variance(values: &[f64]) -> f64 {
    let avg = mean(values);
    values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64
}

pub fn covariance(x: &[f64], y: &[f64]) -> f64 {
    let mean_x = mean(x);
    let mean_y = mean(y);
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / x.len() as f64
}

pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    covariance(x, y) / (variance(x).sqrt() * variance(y).sqrt())
}

/// Compute every measure for the pair, rejecting unusable input first
pub fn summarize(x: &[f64], y: &[f64]) -> Result<StatsSummary, StatsError> {
    if x.len() != y.len() || x.is_empty() {
        return Err(StatsError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    let r = pearson_r(x, y);

    Ok(StatsSummary {
        variance_x: variance(x),
        variance_y: variance(y),
        covariance: covariance(x, y),
        r,
        r_squared: r * r,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_parse_series() {
        assert_eq!(parse_series("1, 2.5 ,-3").unwrap(), vec![1.0, 2.5, -3.0]);
        assert!(parse_series("").unwrap().is_empty());
        assert_eq!(
            parse_series("1,,2"),
            Err(StatsError::InvalidValue(String::new()))
        );
    }

    #[test]
    fn test_variance_and_mean() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx(mean(&values), 5.0));
        assert!(approx(variance(&values), 4.0));
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let summary = summarize(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();

        assert!(approx(summary.r, 1.0));
        assert!(approx(summary.r_squared, 1.0));
        assert!(approx(summary.variance_x, 2.0 / 3.0));
        assert!(approx(summary.variance_y, 8.0 / 3.0));
        assert!(approx(summary.covariance, 4.0 / 3.0));
    }

    #[test]
    fn test_perfect_negative_correlation() {
        let summary = summarize(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();

        assert!(approx(summary.r, -1.0));
        assert!(approx(summary.r_squared, 1.0));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            summarize(&[1.0, 2.0], &[1.0]),
            Err(StatsError::LengthMismatch { x: 2, y: 1 })
        );
        assert!(summarize(&[], &[]).is_err());
    }

    #[test]
    fn test_constant_series_gives_nan() {
        let summary = summarize(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).unwrap();

        assert!(summary.r.is_nan());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["r"].is_null());
    }
}
