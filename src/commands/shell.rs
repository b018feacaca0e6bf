//! Shell command - drive a session interactively
//!
//! Each input line becomes one session event:
//!
//! ```text
//! name <value>    set the application name
//! pick <path>     select the file to upload
//! remove          clear the upload selection
//! upload          upload the selected file
//! check <path>    check a file (dispatches immediately)
//! status          show the session state
//! help            list commands
//! quit            leave the shell
//! ```

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use keymatch::core::models::{FileRef, SessionEvent};
use keymatch::output::OutputMode;

use super::context::Context;
use crate::cli::GlobalOpts;

const HELP: &str = "\
Commands:
  name <value>    set the application name
  pick <path>     select the file to upload
  remove          clear the upload selection
  upload          upload the selected file
  check <path>    check a file against the stored keys
  status          show the session state
  help            show this help
  quit            leave the shell";

/// A parsed input line
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    Event(SessionEvent),
    Status,
    Help,
    Quit,
    Empty,
}

/// Run the interactive loop until `quit` or end of input
pub async fn shell(opts: &GlobalOpts, app_name: Option<String>) -> anyhow::Result<ExitCode> {
    let ctx = Context::new(opts, app_name)?;
    if ctx.mode() == OutputMode::Human {
        println!("keymatch shell - type 'help' for commands");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(ShellCommand::Event(event)) => {
                if let Err(err) = ctx.session.handle(event).await {
                    log::debug!("shell: {err}");
                }
            },
            Ok(ShellCommand::Status) => ctx.session.view().render(ctx.mode()),
            Ok(ShellCommand::Help) => println!("{HELP}"),
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {},
            Err(message) => eprintln!("{message}"),
        }
    }

    ctx.report();
    Ok(ExitCode::SUCCESS)
}

fn parse_line(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "" => ShellCommand::Empty,
        "name" => ShellCommand::Event(SessionEvent::AppNameChanged(rest.to_string())),
        "pick" => ShellCommand::Event(SessionEvent::UploadFilePicked(file_arg(word, rest)?)),
        "remove" => ShellCommand::Event(SessionEvent::RemoveFileClicked),
        "upload" => ShellCommand::Event(SessionEvent::UploadButtonClicked),
        "check" => ShellCommand::Event(SessionEvent::CheckFilePicked(file_arg(word, rest)?)),
        "status" => ShellCommand::Status,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(command)
}

fn file_arg(command: &str, rest: &str) -> Result<FileRef, String> {
    if rest.is_empty() {
        return Err(format!("usage: {command} <path>"));
    }
    Ok(FileRef::new(rest))
}
