use crate::prelude::{print, println, *};
use crate::prompt::Prompter;
use colored::Colorize;
use drills_core::search::{format_index, parse_numbers, parse_target, run_search, SearchReport};

const NUMBERS_PROMPT: &str = "Enter numbers (space separated): ";
const TARGET_PROMPT: &str = "Enter the number to search: ";

#[derive(Debug, clap::Args, Clone)]
pub struct SearchOptions {
    /// Numbers to search through, space separated (prompted for when missing)
    #[arg(short, long, allow_hyphen_values = true)]
    pub numbers: Option<String>,

    /// Number to look for (prompted for when missing)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: SearchOptions, global: crate::Global) -> Result<()> {
    let mut prompter = Prompter::new();

    let numbers_line = prompter
        .value_or_ask(options.numbers.clone(), NUMBERS_PROMPT)
        .await?;
    let target_line = prompter
        .value_or_ask(options.target.clone(), TARGET_PROMPT)
        .await?;

    let report = search_data(&numbers_line, &target_line)?;

    if global.verbose {
        println!("Sorted copy: {:?}", report.sorted);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_search_text(&report));
    }

    Ok(())
}

/// Parses raw input lines and runs both searches
pub fn search_data(numbers_line: &str, target_line: &str) -> Result<SearchReport> {
    let numbers = parse_numbers(numbers_line).map_err(|e| Error::InvalidInput(e.to_string()))?;
    let target = parse_target(target_line).map_err(|e| Error::InvalidInput(e.to_string()))?;

    log::debug!("Searching {} numbers for {}", numbers.len(), target);

    Ok(run_search(numbers, target))
}

fn format_search_text(report: &SearchReport) -> String {
    f!(
        "{} {}\n{} {}\n",
        "Linear Search Result (index):".green(),
        format_index(report.linear),
        "Binary Search Result (index):".green(),
        format_index(report.binary)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_data_found() {
        let report = search_data("9 4 7 1", "7").unwrap();

        assert_eq!(report.linear, Some(2));
        assert_eq!(report.binary, Some(2));
        assert_eq!(report.sorted, vec![1, 4, 7, 9]);
    }

    #[test]
    fn test_search_data_invalid_numbers() {
        let err = search_data("1 x 3", "3").unwrap_err();
        assert!(err.to_string().contains("Invalid number: x"));
    }

    #[test]
    fn test_search_data_invalid_target() {
        assert!(search_data("1 2 3", "three").is_err());
        assert!(search_data("1 2 3", "").is_err());
    }

    #[test]
    fn test_format_search_text_uses_sentinel_for_absent() {
        let report = search_data("5 6", "8").unwrap();
        let text = format_search_text(&report);

        assert!(text.contains("Linear Search Result (index):"));
        assert!(text.contains("Binary Search Result (index):"));
        assert_eq!(text.matches("-1").count(), 2);
    }

    #[test]
    fn test_format_search_text_found() {
        let report = search_data("3 1 2", "3").unwrap();
        let text = format_search_text(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" 0"));
        assert!(lines[1].ends_with(" 2"));
    }
}
