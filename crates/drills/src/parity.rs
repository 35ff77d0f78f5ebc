use crate::prelude::{println, *};
use crate::prompt::Prompter;
use drills_core::parity::{parity_of, Parity};

#[derive(Debug, clap::Args, Clone)]
pub struct ParityOptions {
    /// Number to classify (prompted for when missing)
    #[arg(value_name = "NUMBER", allow_hyphen_values = true)]
    pub number: Option<String>,
}

pub async fn run(options: ParityOptions, _global: crate::Global) -> Result<()> {
    let mut prompter = Prompter::new();
    let line = prompter
        .value_or_ask(options.number, "Enter a number: ")
        .await?;

    println!("{}", parity_data(&line)?);

    Ok(())
}

pub fn parity_data(line: &str) -> Result<Parity> {
    let number = line
        .trim()
        .parse::<i64>()
        .map_err(|_| Error::InvalidInput(f!("Please enter a valid number, got {:?}", line)))?;

    Ok(parity_of(number))
}
