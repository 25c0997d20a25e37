use eyre::{Error, WrapErr, eyre};
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Line-oriented prompts over any input and output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `message` and read one line without its line terminator, or
    /// `None` once the input is exhausted.
    pub fn prompt_opt(&mut self, message: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, message: &str) -> Result<String, Error> {
        self.prompt_opt(message)?
            .ok_or_else(|| eyre!("input closed while waiting for an answer"))
    }

    pub fn prompt_number<T>(&mut self, message: &str) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let answer = self.prompt(message)?;
        answer
            .trim()
            .parse()
            .wrap_err_with(|| format!("invalid number: {answer}"))
    }

    /// Ask a yes/no question, anything but `y` or `yes` meaning no.
    pub fn confirm(&mut self, message: &str) -> Result<bool, Error> {
        let answer = self.prompt(message)?.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
