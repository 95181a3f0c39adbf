//! Yes/no confirmation on an interactive terminal.

use std::io::{self, BufRead, Write};

/// Asks `question` until the answer is yes, no, or empty.
///
/// An empty answer or end of input returns `default`, so piping the tool
/// through a non-interactive shell behaves like pressing enter.
pub fn confirm<R, W>(question: &str, default: bool, input: &mut R, output: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let hint = if default { "[Y/n]" } else { "[y/N]" };

    loop {
        write!(output, "{} {} ", question, hint)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(default);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer 'y' or 'n'.")?,
        }
    }
}
