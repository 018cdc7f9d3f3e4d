use std::io::{BufRead, Write};

/// Asks a `[Y/n]` question. An empty answer counts as yes; a closed stdin
/// counts as no.
/// With `json` set the question goes to stderr to keep stdout parseable.
pub fn confirm(question: &str, assume_yes: bool, json: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let stdin = std::io::stdin();
    if json {
        confirm_with(question, &mut stdin.lock(), &mut std::io::stderr())
    } else {
        confirm_with(question, &mut stdin.lock(), &mut std::io::stdout())
    }
}

pub fn confirm_with(
    question: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> anyhow::Result<bool> {
    write!(output, "{} [Y/n]: ", question)?;
    output.flush()?;
    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Ok(false);
    }
    let answer = answer.trim();
    Ok(answer.is_empty() || answer.eq_ignore_ascii_case("y"))
}
