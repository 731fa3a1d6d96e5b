use std::io::{self, BufRead, Write};

use is_terminal::IsTerminal;

use unbase::error::Result;

/// One line of input, trimmed of surrounding whitespace. Prompts on stderr
/// when stdin is an interactive terminal.
pub fn read_line() -> Result<String> {
    let stdin = io::stdin();

    if stdin.is_terminal() {
        eprint!("Enter encoded string: ");
        io::stderr().flush()?;
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
