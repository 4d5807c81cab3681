//! Interactive count prompt used when no COUNT argument is given.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};

pub const COUNT_PROMPT: &str = "Number of equations to generate: ";

/// Writes the prompt to `out` and parses the first non-blank line of `input`.
pub fn read_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<i64> {
    write!(out, "{}", COUNT_PROMPT)?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("no equation count given");
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return trimmed
                .parse::<i64>()
                .with_context(|| format!("invalid equation count '{}'", trimmed));
        }
    }
}

/// Negative requests mean "nothing to generate".
pub fn clamp_count(requested: i64) -> usize {
    usize::try_from(requested).unwrap_or(0)
}
