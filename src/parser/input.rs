use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::task::parse_date;

const BY_SEPARATOR: &str = " /by ";
const FROM_SEPARATOR: &str = " /from ";
const TO_SEPARATOR: &str = " /to ";

/// A validated user instruction. Indices are zero-based here; the wire
/// format is one-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    AddTodo {
        description: String,
    },
    AddDeadline {
        description: String,
        by: NaiveDate,
    },
    AddEvent {
        description: String,
        from: String,
        to: String,
    },
    Mark {
        index: usize,
        done: bool,
    },
    Delete {
        index: usize,
    },
    Find {
        keyword: String,
    },
    Bye,
}

/// Parses one raw input line into a [`Command`].
///
/// The line is split on the first whitespace run into a keyword and a rest;
/// the rest is interpreted per keyword. All validation happens here, so a
/// returned command can be executed without further argument checks.
pub fn parse(line: &str) -> Result<Command> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim_start()),
        None => (line, ""),
    };

    match keyword {
        "list" => Ok(Command::List),
        "bye" => Ok(Command::Bye),
        "todo" => Ok(Command::AddTodo {
            description: require_description(rest)?.to_string(),
        }),
        "deadline" => parse_deadline(require_description(rest)?),
        "event" => parse_event(require_description(rest)?),
        "mark" => Ok(Command::Mark {
            index: parse_index(rest)?,
            done: true,
        }),
        "unmark" => Ok(Command::Mark {
            index: parse_index(rest)?,
            done: false,
        }),
        "delete" => Ok(Command::Delete {
            index: parse_index(rest)?,
        }),
        "find" => Ok(Command::Find {
            keyword: require_description(rest)?.to_string(),
        }),
        _ => Err(Error::UnknownCommand(keyword.to_string())),
    }
}

fn require_description(rest: &str) -> Result<&str> {
    let trimmed = rest.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(trimmed)
}

fn parse_deadline(rest: &str) -> Result<Command> {
    let (description, date) = rest
        .split_once(BY_SEPARATOR)
        .ok_or(Error::MalformedArguments {
            expected: "deadline <description> /by <yyyy-mm-dd>",
        })?;
    Ok(Command::AddDeadline {
        description: require_description(description)?.to_string(),
        by: parse_date(date.trim())?,
    })
}

// Splits on ` /from ` then ` /to `, so ` /to ` must appear after
// ` /from `; out-of-order input is rejected as malformed.
fn parse_event(rest: &str) -> Result<Command> {
    let malformed = Error::MalformedArguments {
        expected: "event <description> /from <start> /to <end>",
    };
    let Some((description, times)) = rest.split_once(FROM_SEPARATOR) else {
        return Err(malformed);
    };
    let Some((from, to)) = times.split_once(TO_SEPARATOR) else {
        return Err(malformed);
    };
    Ok(Command::AddEvent {
        description: require_description(description)?.to_string(),
        from: from.trim().to_string(),
        to: to.trim().to_string(),
    })
}

/// One-based on the wire, zero-based in the command.
fn parse_index(rest: &str) -> Result<usize> {
    let raw = rest.trim();
    let number: usize = raw
        .parse()
        .map_err(|_| Error::InvalidIndex(raw.to_string()))?;
    number
        .checked_sub(1)
        .ok_or_else(|| Error::InvalidIndex(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("list ignored tail").unwrap(), Command::List);
        assert_eq!(parse("bye").unwrap(), Command::Bye);
    }

    #[test]
    fn test_todo() {
        assert_eq!(
            parse("todo Read book").unwrap(),
            Command::AddTodo {
                description: "Read book".to_string()
            }
        );
    }

    #[test]
    fn test_todo_requires_description() {
        assert!(matches!(parse("todo"), Err(Error::EmptyDescription)));
        assert!(matches!(parse("todo    "), Err(Error::EmptyDescription)));
    }

    #[test]
    fn test_deadline() {
        assert_eq!(
            parse("deadline Submit assignment /by 2025-01-31").unwrap(),
            Command::AddDeadline {
                description: "Submit assignment".to_string(),
                by: parse_date("2025-01-31").unwrap(),
            }
        );
    }

    #[test]
    fn test_deadline_missing_separator() {
        assert!(matches!(
            parse("deadline Submit assignment by tomorrow"),
            Err(Error::MalformedArguments { .. })
        ));
    }

    #[test]
    fn test_deadline_bad_date() {
        assert!(matches!(
            parse("deadline Submit /by someday"),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn test_event() {
        assert_eq!(
            parse("event Team meeting /from 10:00 AM /to 12:00 PM").unwrap(),
            Command::AddEvent {
                description: "Team meeting".to_string(),
                from: "10:00 AM".to_string(),
                to: "12:00 PM".to_string(),
            }
        );
    }

    #[test]
    fn test_event_missing_separators() {
        assert!(matches!(
            parse("event Team meeting /from 10:00 AM"),
            Err(Error::MalformedArguments { .. })
        ));
        assert!(matches!(
            parse("event Team meeting"),
            Err(Error::MalformedArguments { .. })
        ));
    }

    #[test]
    fn test_event_separators_out_of_order_rejected() {
        assert!(matches!(
            parse("event Team meeting /to 12:00 PM /from 10:00 AM"),
            Err(Error::MalformedArguments { .. })
        ));
    }

    #[test]
    fn test_mark_and_unmark() {
        assert_eq!(
            parse("mark 1").unwrap(),
            Command::Mark {
                index: 0,
                done: true
            }
        );
        assert_eq!(
            parse("unmark 3").unwrap(),
            Command::Mark {
                index: 2,
                done: false
            }
        );
    }

    #[test]
    fn test_invalid_indices() {
        assert!(matches!(parse("mark abc"), Err(Error::InvalidIndex(_))));
        assert!(matches!(parse("delete -1"), Err(Error::InvalidIndex(_))));
        // One-based on the wire, so 0 has no zero-based counterpart.
        assert!(matches!(parse("mark 0"), Err(Error::InvalidIndex(_))));
    }

    #[test]
    fn test_delete_and_find() {
        assert_eq!(parse("delete 2").unwrap(), Command::Delete { index: 1 });
        assert_eq!(
            parse("find book").unwrap(),
            Command::Find {
                keyword: "book".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_command() {
        match parse("blah whatever") {
            Err(Error::UnknownCommand(keyword)) => assert_eq!(keyword, "blah"),
            other => panic!("expected UnknownCommand, got {other:?}"),
        }
    }
}
