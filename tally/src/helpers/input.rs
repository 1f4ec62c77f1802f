use anyhow::{anyhow, Context, Result};
use std::{io::BufRead, str::FromStr};

/// Read one trimmed line.
pub fn next_line<B: BufRead>(input: &mut B) -> Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("cannot read standard input")?;

    if read == 0 {
        return Err(anyhow!("standard input ended early"));
    }

    Ok(line.trim().to_string())
}

/// Read one line and parse it.
pub fn next_value<B, T>(input: &mut B) -> Result<T>
where
    B: BufRead,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let line = next_line(input)?;

    line.parse()
        .with_context(|| format!("{:?} is not a valid number", line))
}
