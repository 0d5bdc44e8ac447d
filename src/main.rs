//! Stdin/stdout driver for the shell core.
//!
//! This is the reference input/output collaborator pair: it reads one line
//! at a time, hands it to the session, and renders the resulting lines with
//! simple ANSI styling. No line editing, no key capture, no audio.

use std::io::{self, BufRead, Write};

use clap::Parser;

use treesh::config::{APP_NAME, APP_VERSION};
use treesh::core::Effect;
use treesh::models::OutputLine;
use treesh::session::ShellSession;

#[derive(Parser)]
#[command(name = APP_NAME, version = APP_VERSION, about = "A toy shell over an in-memory file tree")]
struct Args {
    /// Skip the welcome banner.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut session = ShellSession::demo();
    greet(&mut out, &session, args.quiet)?;

    for line in io::stdin().lock().lines() {
        let result = session.handle_line(&line?);
        match result.effect {
            Some(Effect::ClearScreen) => {
                write!(out, "\x1B[2J\x1B[H")?;
                render(&mut out, &result.output)?;
            }
            Some(Effect::Reset) => {
                session = ShellSession::demo();
                greet(&mut out, &session, args.quiet)?;
            }
            None => render(&mut out, &result.output)?,
        }
    }

    writeln!(out)
}

fn greet(out: &mut impl Write, session: &ShellSession, quiet: bool) -> io::Result<()> {
    if quiet {
        render(out, &[OutputLine::prompt(session.prompt())])
    } else {
        render(out, &session.banner())
    }
}

fn render(out: &mut impl Write, lines: &[OutputLine]) -> io::Result<()> {
    for line in lines {
        match line {
            OutputLine::Text(s) => writeln!(out, "{s}")?,
            OutputLine::Error(s) => writeln!(out, "\x1B[31m{s}\x1B[0m")?,
            OutputLine::Info(s) => writeln!(out, "\x1B[36m{s}\x1B[0m")?,
            OutputLine::Empty => writeln!(out)?,
            OutputLine::Prompt(s) => {
                write!(out, "{s}")?;
                out.flush()?;
            }
        }
    }
    Ok(())
}
