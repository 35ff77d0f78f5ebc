use crate::prelude::{eprintln, print, println, *};
use crate::prompt::Prompter;
use colored::Colorize;
use drills_core::stats::{parse_series, summarize, StatsSummary};

#[derive(Debug, clap::Args, Clone)]
pub struct StatsOptions {
    /// Values for X, comma separated (prompted for when missing)
    #[arg(short, long, allow_hyphen_values = true)]
    pub x: Option<String>,

    /// Values for Y, comma separated (prompted for when missing)
    #[arg(short, long, allow_hyphen_values = true)]
    pub y: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: StatsOptions, global: crate::Global) -> Result<()> {
    let mut prompter = Prompter::new();
    let x_line = prompter
        .value_or_ask(options.x.clone(), "Enter values for X (comma separated): ")
        .await?;
    let y_line = prompter
        .value_or_ask(options.y.clone(), "Enter values for Y (comma separated): ")
        .await?;

    let summary = stats_data(&x_line, &y_line)?;

    if global.verbose && summary.r.is_nan() {
        eprintln!("{}", "One of the series has zero variance, r is undefined".yellow());
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_stats_text(&summary));
    }

    Ok(())
}

pub fn stats_data(x_line: &str, y_line: &str) -> Result<StatsSummary> {
    let x = parse_series(x_line).map_err(|e| Error::InvalidInput(e.to_string()))?;
    let y = parse_series(y_line).map_err(|e| Error::InvalidInput(e.to_string()))?;

    summarize(&x, &y).map_err(|e| Error::InvalidInput(e.to_string()).into())
}

fn format_stats_text(summary: &StatsSummary) -> String {
    let rows = [
        ("Variance of X:", summary.variance_x),
        ("Variance of Y:", summary.variance_y),
        ("Covariance(X, Y):", summary.covariance),
        ("Pearson correlation coefficient (r):", summary.r),
        ("R² (r squared):", summary.r_squared),
    ];

    let mut result = f!("\n{}\n", "--- Statistics ---".bright_cyan().bold());
    for (label, value) in rows {
        result.push_str(&f!("{} {:.4}\n", label.green(), value));
    }
    result
}
