use std::io::{self, BufRead};

use clap::Parser;
use taskline::cli::{Cli, Commands};
use taskline::error::Result;
use taskline::executor::{Executor, Outcome};
use taskline::parser::input::parse;
use taskline::storage::codec::FileStore;
use taskline::storage::paths::tasks_file_path;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let path = match cli.file {
        Some(path) => path,
        None => tasks_file_path()?,
    };
    let mut executor = Executor::load(Box::new(FileStore::new(path)))?;

    match cli.command {
        Some(Commands::Exec { line }) => {
            println!("{}", executor.process(&line.join(" "))?);
            Ok(())
        }
        Some(Commands::Repl) | None => repl(&mut executor),
    }
}

/// Read a line, print the reply, repeat until `bye` or end of input.
/// Command errors are printed and never end the session.
fn repl(executor: &mut Executor) -> Result<()> {
    println!("Hello! I'm taskline.\nWhat can I do for you?");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse(&line).and_then(|command| executor.execute(command)) {
            Ok(outcome) => {
                println!("{outcome}");
                if matches!(outcome, Outcome::Bye) {
                    break;
                }
            }
            Err(err) => println!("Error: {err}"),
        }
    }
    Ok(())
}
