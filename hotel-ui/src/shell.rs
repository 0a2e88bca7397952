//! Interactive terminal shell
//!
//! Each input line is either a location (`/rooms`) or a command parsed with
//! clap in multicall mode (`search 2026-10-20 2026-10-22`). The current page is
//! printed after every command.

use std::io::Write;

use clap::{Parser, Subcommand};
use hotel_client::HttpClient;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::app::{App, AppError};

const PROMPT: &str = "hotel> ";

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Open a location, e.g. /reservations
    #[command(visible_alias = "go")]
    Open { path: String },

    /// Search for accommodation (dates as YYYY-MM-DD)
    Search {
        start: Option<String>,
        end: Option<String>,
    },

    /// Reserve the current offer
    Reserve {
        name: Option<String>,
        email: Option<String>,
    },

    /// Load dummy data from the server
    Dummy,

    /// Re-render the current page
    Reload,

    /// Leave the shell
    #[command(visible_alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line; blank lines yield `None`
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if line.starts_with('/') {
        return Ok(Some(Command::Open {
            path: line.to_string(),
        }));
    }
    Line::try_parse_from(split_words(line)).map(|parsed| Some(parsed.command))
}

/// Whitespace split honouring double quotes, so `reserve "Jane Roe"` is one name
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut in_word = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

pub async fn execute<C: HttpClient + 'static>(
    app: &mut App<C>,
    command: Command,
) -> Result<Flow, AppError> {
    match command {
        Command::Open { path } => {
            app.navigate(&path).await;
        }
        Command::Search { start, end } => app.search(start.as_deref(), end.as_deref()).await?,
        Command::Reserve { name, email } => {
            app.make_reservation(name.as_deref(), email.as_deref()).await?
        }
        Command::Dummy => app.load_dummy_data().await?,
        Command::Reload => {
            app.refresh().await;
        }
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Run the shell on stdin/stdout until `quit` or end of input
pub async fn run<C: HttpClient + 'static>(mut app: App<C>, initial_path: &str) -> anyhow::Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    run_with(&mut app, initial_path, stdin, &mut stdout).await
}

pub async fn run_with<C, R, W>(
    app: &mut App<C>,
    initial_path: &str,
    input: R,
    output: &mut W,
) -> anyhow::Result<()>
where
    C: HttpClient + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    app.navigate(initial_path).await;
    writeln!(output, "{}", app.render())?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                write!(output, "{}", e.render())?;
                continue;
            }
        };

        tracing::debug!(?command, "Executing command");
        match execute(app, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => writeln!(output, "{}", app.render())?,
            Err(e) => {
                writeln!(output, "{}", app.render())?;
                writeln!(output, "! {e}")?;
            }
        }
    }

    writeln!(output)?;
    Ok(())
}
