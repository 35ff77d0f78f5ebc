use crate::prelude::*;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin, Stdout};

/// Line based question/answer over stdin and stdout
///
/// Keep one `Prompter` for the whole command: the reader buffers ahead, so a
/// second reader would lose lines already piped in.
pub struct Prompter {
    reader: BufReader<Stdin>,
    stdout: Stdout,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            stdout: tokio::io::stdout(),
        }
    }

    /// Print `message` and read one line, without its line terminator
    ///
    /// EOF before any input is an error so a closed stdin does not look like
    /// an empty answer.
    pub async fn ask(&mut self, message: &str) -> Result<String> {
        self.stdout.write_all(message.as_bytes()).await?;
        self.stdout.flush().await?;

        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .await
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            return Err(Error::EndOfInput(message.trim().to_string()).into());
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Use the value given on the command line, or ask for it
    pub async fn value_or_ask(&mut self, value: Option<String>, message: &str) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None => self.ask(message).await,
        }
    }
}
