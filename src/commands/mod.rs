//! Text commands over an address book.
//!
//! [`run_session`] reads a line, hands it to [`parse_input`], turns the pieces
//! into a [`Command`], runs it with [`execute`] and writes the [`Reply`].
//! Errors are turned into user-facing text by [`present_error`]. Nothing in
//! this module touches the terminal; `main.rs` wires the session to stdio.

mod handlers;
mod presentation;
mod session;

pub use handlers::{execute, CommandContext, Reply};
pub use presentation::present_error;
pub use session::run_session;

use crate::error::{BookError, BookResult};

/// A parsed command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    RemovePhone {
        name: String,
        phone: String,
    },
    Delete {
        name: String,
    },
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    All,
    Exit,
}

/// One row of the command table.
struct CommandSpec {
    name: &'static str,
    arity: usize,
    usage: &'static str,
    build: fn(&[String]) -> Command,
}

const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        arity: 0,
        usage: "hello",
        build: |_| Command::Hello,
    },
    CommandSpec {
        name: "add",
        arity: 2,
        usage: "add <name> <phone>",
        build: |args| Command::Add {
            name: args[0].clone(),
            phone: args[1].clone(),
        },
    },
    CommandSpec {
        name: "change",
        arity: 3,
        usage: "change <name> <old phone> <new phone>",
        build: |args| Command::Change {
            name: args[0].clone(),
            old_phone: args[1].clone(),
            new_phone: args[2].clone(),
        },
    },
    CommandSpec {
        name: "phone",
        arity: 1,
        usage: "phone <name>",
        build: |args| Command::Phone {
            name: args[0].clone(),
        },
    },
    CommandSpec {
        name: "remove-phone",
        arity: 2,
        usage: "remove-phone <name> <phone>",
        build: |args| Command::RemovePhone {
            name: args[0].clone(),
            phone: args[1].clone(),
        },
    },
    CommandSpec {
        name: "delete",
        arity: 1,
        usage: "delete <name>",
        build: |args| Command::Delete {
            name: args[0].clone(),
        },
    },
    CommandSpec {
        name: "add-birthday",
        arity: 2,
        usage: "add-birthday <name> <DD.MM.YYYY>",
        build: |args| Command::AddBirthday {
            name: args[0].clone(),
            birthday: args[1].clone(),
        },
    },
    CommandSpec {
        name: "show-birthday",
        arity: 1,
        usage: "show-birthday <name>",
        build: |args| Command::ShowBirthday {
            name: args[0].clone(),
        },
    },
    CommandSpec {
        name: "birthdays",
        arity: 0,
        usage: "birthdays",
        build: |_| Command::Birthdays,
    },
    CommandSpec {
        name: "all",
        arity: 0,
        usage: "all",
        build: |_| Command::All,
    },
    CommandSpec {
        name: "close",
        arity: 0,
        usage: "close",
        build: |_| Command::Exit,
    },
    CommandSpec {
        name: "exit",
        arity: 0,
        usage: "exit",
        build: |_| Command::Exit,
    },
];

fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

impl Command {
    /// Build a command from its name and arguments.
    ///
    /// # Errors
    ///
    /// - `BookError::UnknownCommand` for an unrecognised name
    /// - `BookError::Arity` when the argument count does not fit the command
    pub fn parse(name: &str, args: &[String]) -> BookResult<Self> {
        let spec = lookup(name).ok_or_else(|| BookError::UnknownCommand(name.to_string()))?;
        if args.len() != spec.arity {
            return Err(BookError::Arity {
                command: name.to_string(),
                expected: spec.arity,
                actual: args.len(),
            });
        }
        Ok((spec.build)(args))
    }

    /// Usage line for `name`, e.g. `add <name> <phone>`.
    pub fn usage(name: &str) -> Option<&'static str> {
        lookup(name).map(|spec| spec.usage)
    }
}

/// Split an input line into a lower-cased command name and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_input() {
        let (command, arguments) = parse_input("  ADD Alice   1234567890 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(arguments, ["Alice", "1234567890"]);

        assert!(parse_input("").is_none());
        assert!(parse_input("   \t").is_none());
    }

    #[test]
    fn test_parse_input_keeps_argument_case() {
        let (_, arguments) = parse_input("phone ALICE").unwrap();
        assert_eq!(arguments, ["ALICE"]);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("hello", &[]).unwrap(), Command::Hello);
        assert_eq!(
            Command::parse("change", &args(&["Alice", "1111111111", "2222222222"])).unwrap(),
            Command::Change {
                name: "Alice".to_string(),
                old_phone: "1111111111".to_string(),
                new_phone: "2222222222".to_string(),
            }
        );
        assert_eq!(Command::parse("close", &[]).unwrap(), Command::Exit);
        assert_eq!(Command::parse("exit", &[]).unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_wrong_arity() {
        let err = Command::parse("add", &args(&["Alice"])).unwrap_err();
        match err {
            BookError::Arity {
                command,
                expected,
                actual,
            } => {
                assert_eq!(command, "add");
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("Expected Arity error, got: {:?}", other),
        }

        assert!(matches!(
            Command::parse("all", &args(&["extra"])),
            Err(BookError::Arity { .. })
        ));
    }

    #[test]
    fn test_parse_unknown_command() {
        assert!(matches!(
            Command::parse("fly", &[]),
            Err(BookError::UnknownCommand(name)) if name == "fly"
        ));
    }

    #[test]
    fn test_every_command_parses_with_its_arity() {
        assert_eq!(COMMANDS.len(), 12);
        for spec in COMMANDS {
            let usage = Command::usage(spec.name).unwrap();
            assert!(usage.starts_with(spec.name), "{} has usage {}", spec.name, usage);

            let arguments = vec!["x".to_string(); spec.arity];
            assert!(Command::parse(spec.name, &arguments).is_ok(), "{} failed to parse", spec.name);
        }
        assert!(Command::usage("fly").is_none());
    }
}
