//! Catching a failure three ways: a synchronous parse, an awaited file read
//! and a combinator chain over the same read.

use crate::prelude::{eprintln, println, *};
use futures::TryFutureExt;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Deliberately malformed JSON for the synchronous case
const INVALID_JSON: &str = "{ invalidJSON }";

#[derive(Debug, clap::Args, Clone)]
pub struct ErrorsOptions {
    /// File the asynchronous cases try to read
    #[arg(long, default_value = "NotFound.txt")]
    pub file: PathBuf,
}

/// What one case ended with: the value it produced or the error it caught
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Value(String),
    Caught { heading: &'static str, message: String },
}

pub async fn run(options: ErrorsOptions, _global: crate::Global) -> Result<()> {
    for outcome in errors_data(&options.file).await {
        match outcome {
            Outcome::Value(value) => println!("{value}"),
            Outcome::Caught { heading, message } => {
                eprintln!("{heading}");
                eprintln!("{message}");
            }
        }
    }

    Ok(())
}

/// Runs the synchronous, awaited and combinator cases in that order
pub async fn errors_data(file: &Path) -> Vec<Outcome> {
    vec![
        parse_invalid_json(),
        read_awaited(file).await,
        read_chained(file).await,
    ]
}

pub fn parse_invalid_json() -> Outcome {
    match serde_json::from_str::<Value>(INVALID_JSON) {
        Ok(value) => Outcome::Value(value.to_string()),
        Err(e) => Outcome::Caught {
            heading: "Synchronous Error Caught:",
            message: e.to_string(),
        },
    }
}

pub async fn read_awaited(file: &Path) -> Outcome {
    match tokio::fs::read_to_string(file).await {
        Ok(data) => Outcome::Value(data),
        Err(e) => Outcome::Caught {
            heading: "Asynchronous Error Caught:",
            message: f!("{}: {}", file.display(), e),
        },
    }
}

pub async fn read_chained(file: &Path) -> Outcome {
    tokio::fs::read_to_string(file.to_path_buf())
        .map_ok(Outcome::Value)
        .unwrap_or_else(|e| Outcome::Caught {
            heading: "Promise-Based Async Error Caught:",
            message: f!("{}: {}", file.display(), e),
        })
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn caught_heading(outcome: &Outcome) -> Option<&'static str> {
        match outcome {
            Outcome::Caught { heading, .. } => Some(*heading),
            Outcome::Value(_) => None,
        }
    }

    #[test]
    fn test_parse_invalid_json_is_caught() {
        let outcome = parse_invalid_json();

        assert_eq!(caught_heading(&outcome), Some("Synchronous Error Caught:"));
        match outcome {
            Outcome::Caught { message, .. } => assert!(message.contains("line 1")),
            Outcome::Value(_) => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_caught_both_ways() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("NotFound.txt");

        let outcomes = errors_data(&missing).await;

        let headings: Vec<Option<&str>> = outcomes.iter().map(caught_heading).collect();
        assert_eq!(
            headings,
            vec![
                Some("Synchronous Error Caught:"),
                Some("Asynchronous Error Caught:"),
                Some("Promise-Based Async Error Caught:"),
            ]
        );
        match &outcomes[1] {
            Outcome::Caught { message, .. } => assert!(message.contains("NotFound.txt")),
            Outcome::Value(_) => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_existing_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hello").unwrap();

        assert_eq!(
            read_awaited(file.path()).await,
            Outcome::Value("hello".to_string())
        );
        assert_eq!(
            read_chained(file.path()).await,
            Outcome::Value("hello".to_string())
        );
    }
}
