//! Interactive confirmation.

use std::io::{self, BufRead, Write};

/// Answers accepted as "yes", compared after lowercasing
pub const AFFIRMATIVE_ANSWERS: &[&str] = &["s", "si", "sí", "y", "yes"];

/// Decide whether a raw answer from the operator means "go ahead".
///
/// Only the line terminator is stripped; any other whitespace makes the
/// answer a refusal.
pub fn should_proceed(raw: &str) -> bool {
    let answer = raw.trim_end_matches(['\r', '\n']).to_lowercase();
    AFFIRMATIVE_ANSWERS.contains(&answer.as_str())
}

/// Print `question`, read one line from `input` and interpret it.
///
/// End of input counts as a refusal.
pub fn confirm<R, W>(input: &mut R, out: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{} (s/n): ", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(should_proceed(&line))
}
