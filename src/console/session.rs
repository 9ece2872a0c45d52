// file: src/console/session.rs
// description: interactive command loop bound to one database connection
// reference: read-dispatch-print loop over stdin/stdout

use crate::console::menu::{self, Command};
use crate::database::Connection;
use crate::error::Result;
use crate::models::SearchOptions;
use crate::utils::logging::{format_error, format_warning};
use std::io::{BufRead, Write};
use tracing::{debug, error, warn};

/// Command loop over a borrowed connection.
///
/// The session never owns the connection; whoever opened it releases it once
/// `run` returns, whether the loop ended normally or with a console error.
pub struct ConsoleSession<'c, C, R, W> {
    pub(super) connection: &'c C,
    pub(super) search_options: SearchOptions,
    input: R,
    pub(super) output: W,
}

impl<'c, C, R, W> ConsoleSession<'c, C, R, W>
where
    C: Connection,
    R: BufRead,
    W: Write,
{
    pub fn new(connection: &'c C, search_options: SearchOptions, input: R, output: W) -> Self {
        Self {
            connection,
            search_options,
            input,
            output,
        }
    }

    /// Loop until `exit` or end of input. Only console I/O failures escape.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            menu::print_menu(&mut self.output)?;

            let Some(line) = self.read_line()? else {
                warn!("Console input closed, leaving command loop");
                writeln!(self.output)?;
                writeln!(self.output, "{}", format_warning("Input closed, exiting."))?;
                break;
            };

            let command = Command::parse(&line);
            debug!("Dispatching {:?} for input {:?}", command, line);

            match command {
                Command::Write => {
                    let outcome = self.write_document().await;
                    self.report(outcome)?;
                }
                Command::Read => {
                    let outcome = self.read_document().await;
                    self.report(outcome)?;
                }
                Command::Search => {
                    let outcome = self.search_database().await;
                    self.report(outcome)?;
                }
                Command::Help => menu::print_help(&mut self.output)?,
                Command::Exit => break,
                Command::Unknown => {}
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Print a failed action and keep the loop alive, unless the console itself broke.
    fn report(&mut self, outcome: Result<()>) -> Result<()> {
        match outcome {
            Ok(()) => Ok(()),
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                error!("Action failed: {}", e);
                writeln!(self.output, " ")?;
                writeln!(self.output, "{}", format_error(&e.to_string()))?;
                Ok(())
            }
        }
    }

    /// Print `label` and read the answer; `None` at end of input.
    pub(super) fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;

        // Undecodable bytes become U+FFFD and fall through as an unknown command.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
