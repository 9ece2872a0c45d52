// file: src/console/menu.rs
// description: fixed console text and command parsing for the interactive loop
// reference: interactive menu conventions

use std::io::{self, Write};

const BANNER: [&str; 2] = [
    "MarkLogic Rust API Demo.",
    "Begin Read, Write and Search Tests.",
];

const MENU: [&str; 9] = [
    " ",
    "|-----------------------------------------------------|",
    "| Select from the following options then press ENTER. |",
    "|-----------------------------------------------------|",
    "  1. Load document.",
    "  2. Read document.",
    "  3. Search a term.",
    "  4. Help.",
    "  Type 'exit' to quit.",
];

const MENU_PROMPT: &str = "==> ";

const HELP: [&str; 3] = [
    "  1. Load - Type 1 then ENTER to load an XML, JSON or Text file to the MarkLogic Documents database.",
    "  2. Read - Type 2 then ENTER to read an XML, JSON or Text file from the MarkLogic Documents database.",
    "  3. Enter a search term then press ENTER to search the MarkLogic Documents database. Results are returned as text snippets with the URI, relevance score and mimetype of each match.",
];

/// Separator printed between a finished action and its results.
pub(super) const RULE: &str = "--------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Write,
    Read,
    Search,
    Help,
    Exit,
    Unknown,
}

impl Command {
    /// Matching is exact after lowercasing; surrounding spaces are not trimmed.
    pub fn parse(line: &str) -> Self {
        match line.to_lowercase().as_str() {
            "1" => Command::Write,
            "2" => Command::Read,
            "3" => Command::Search,
            "4" => Command::Help,
            "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    for line in BANNER {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    for line in MENU {
        writeln!(out, "{}", line)?;
    }
    write!(out, "{}", MENU_PROMPT)?;
    out.flush()
}

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, " ")?;
    for line in HELP {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
