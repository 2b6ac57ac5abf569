//! The interactive read-eval-print loop.

use super::{execute, parse_input, present_error, Command, CommandContext, Reply};
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Read commands from `input` until `close`/`exit` or end of input, writing
/// prompts and replies to `output`.
///
/// Lines that are not valid UTF-8 are decoded lossily and handled like any
/// other line. The book keeps every change made before an I/O error.
pub fn run_session<R, W>(
    book: &mut AddressBook,
    birthday_window_days: u32,
    mut input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the contact book!")?;
    let mut buffer = Vec::new();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            writeln!(output)?;
            break;
        }
        let line = String::from_utf8_lossy(&buffer);

        let Some((name, args)) = parse_input(&line) else {
            continue;
        };
        debug!(command = %name, args = args.len(), "Running command");

        let context = CommandContext::now(birthday_window_days);
        let outcome =
            Command::parse(&name, &args).and_then(|command| execute(book, command, &context));

        match outcome {
            Ok(Reply::Message(text)) => writeln!(output, "{}", text)?,
            Ok(Reply::Exit) => {
                writeln!(output, "Good bye!")?;
                break;
            }
            Err(e) => writeln!(output, "{}", present_error(&e))?,
        }
    }

    output.flush()
}
