use crate::prelude::{print, println, *};
use colored::Colorize;
use drills_core::paradigms::{evaluate_all, ParadigmResult, DEFAULT_NUMBERS};
use drills_core::search::parse_numbers;

#[derive(Debug, clap::Args, Clone)]
pub struct ParadigmsOptions {
    /// Numbers to process, space separated (defaults to "1 2 3 4 5 6")
    #[arg(short, long, allow_hyphen_values = true)]
    pub numbers: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ParadigmsOptions, global: crate::Global) -> Result<()> {
    let numbers = match &options.numbers {
        Some(line) => parse_numbers(line).map_err(|e| Error::InvalidInput(e.to_string()))?,
        None => DEFAULT_NUMBERS.to_vec(),
    };

    if global.verbose {
        println!("Input: {:?}", numbers);
    }

    let results = evaluate_all(&numbers);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", format_paradigms_text(&results));
    }

    Ok(())
}

fn format_paradigms_text(results: &[ParadigmResult]) -> String {
    results
        .iter()
        .map(|r| f!("{} {:?}\n", f!("{}:", r.paradigm.label()).cyan(), r.result))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_paradigms_text() {
        let text = format_paradigms_text(&evaluate_all(&DEFAULT_NUMBERS));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Imperative:"));
        assert!(lines[1].contains("Declarative:"));
        assert!(lines[2].contains("Functional:"));
        for line in lines {
            assert!(line.ends_with("[4, 16, 36]"));
        }
    }

    #[test]
    fn test_format_paradigms_text_large_input() {
        let text = format_paradigms_text(&evaluate_all(&[4_000_000_000]));
        assert!(text
            .lines()
            .all(|l| l.ends_with("[16000000000000000000]")));
    }

    #[test]
    fn test_format_paradigms_text_empty_result() {
        let text = format_paradigms_text(&evaluate_all(&[1, 3]));
        assert!(text.lines().all(|l| l.ends_with("[]")));
    }
}
