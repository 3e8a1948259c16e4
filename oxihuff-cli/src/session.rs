//! The interactive menu session.
//!
//! A session reads its text once, builds the Huffman analysis once, and then
//! answers menu actions against that fixed state until the user exits or
//! input ends.

use crate::config::SessionConfig;
use crate::menu::MenuAction;
use crate::utils::{print_code_table, print_original_table};
use oxihuff_core::{Analysis, FrequencyTable, render_tree, stats};
use std::io::{self, BufRead, Write};

/// Message for actions that need a tree when the input was empty.
pub const NO_DATA: &str = "No data: the input text is empty.";

/// Message for unrecognised menu input.
pub const INVALID_OPTION: &str = "Invalid option. Try again.";

/// Immutable state of one session.
#[derive(Debug)]
pub struct Session {
    text: String,
    analysis: Option<Analysis>,
}

impl Session {
    /// Analyse `text`. Empty text yields a session without a tree.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let analysis = Analysis::new(&text)
            .inspect_err(|err| {
                tracing::warn!(error = %err, "tree-based actions are unavailable");
            })
            .ok();
        Self { text, analysis }
    }

    /// Run one action, writing its result to `out`.
    pub fn perform<W: Write>(&self, action: MenuAction, out: &mut W) -> io::Result<()> {
        tracing::debug!(?action, "performing menu action");

        match action {
            MenuAction::Compress => self.with_analysis(out, |analysis, out| {
                let bits = analysis.encode(&self.text).map_err(io::Error::other)?;
                writeln!(out, "Compressed bit string:")?;
                writeln!(out, "{bits}")
            }),
            MenuAction::ShowTree => self.with_analysis(out, |analysis, out| {
                writeln!(out, "Huffman Tree:")?;
                write!(out, "{}", render_tree(analysis.tree()))
            }),
            MenuAction::OriginalSize => {
                let bits = self
                    .analysis
                    .as_ref()
                    .map_or(0, |a| stats::original_bits(a.frequencies()));
                writeln!(out, "Original bit size: {bits} bits")
            }
            MenuAction::OriginalTable => {
                writeln!(out, "Original Bit Table:")?;
                match &self.analysis {
                    Some(analysis) => print_original_table(out, analysis.frequencies()),
                    None => print_original_table(out, &FrequencyTable::default()),
                }
            }
            MenuAction::CompressedSize => self.with_analysis(out, |analysis, out| {
                writeln!(
                    out,
                    "Compressed bit size: {} bits",
                    analysis.stats().compressed_bits
                )
            }),
            MenuAction::CodeTable => self.with_analysis(out, |analysis, out| {
                writeln!(out, "Huffman Code Table:")?;
                print_code_table(out, analysis.codes(), analysis.frequencies())
            }),
            MenuAction::Exit => writeln!(out, "Exiting..."),
        }
    }

    /// Run `f` against the analysis, or report that there is no data.
    fn with_analysis<W, F>(&self, out: &mut W, f: F) -> io::Result<()>
    where
        W: Write,
        F: FnOnce(&Analysis, &mut W) -> io::Result<()>,
    {
        match &self.analysis {
            Some(analysis) => f(analysis, out),
            None => writeln!(out, "{NO_DATA}"),
        }
    }

    /// Run the menu loop until the user picks `0` or `input` ends.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
        config: &SessionConfig,
    ) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if config.show_menu {
                write_menu(out)?;
            }
            if config.show_prompts {
                write!(out, "Enter your choice: ")?;
                out.flush()?;
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("input closed, ending session");
                return Ok(());
            }

            match MenuAction::parse(&line) {
                Some(action) => {
                    self.perform(action, out)?;
                    if action == MenuAction::Exit {
                        return Ok(());
                    }
                }
                None => {
                    tracing::debug!(choice = line.trim(), "unrecognised menu choice");
                    writeln!(out, "{INVALID_OPTION}")?;
                }
            }
        }
    }
}

/// Print the numbered menu.
pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Menu:")?;
    // Exit is listed last even though its number is 0.
    for action in MenuAction::ALL {
        writeln!(out, "{action}")?;
    }
    Ok(())
}

/// Read the text to analyse: one line, without its line terminator.
///
/// End of input before any line yields an empty text.
pub fn read_text<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &SessionConfig,
) -> io::Result<String> {
    if config.show_prompts {
        write!(out, "Enter your text: ")?;
        out.flush()?;
    }

    let mut line = String::new();
    input.read_line(&mut line)?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn perform(session: &Session, action: MenuAction) -> String {
        let mut out = Vec::new();
        session.perform(action, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn run_scripted(session: &Session, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes());
        let mut out = Vec::new();
        session
            .run(&mut input, &mut out, &SessionConfig::SCRIPTED)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_compress_action() {
        let session = Session::new("aaabb");
        assert_eq!(
            perform(&session, MenuAction::Compress),
            "Compressed bit string:\n11100\n"
        );
    }

    #[test]
    fn test_size_actions() {
        let session = Session::new("aaabb");
        assert_eq!(
            perform(&session, MenuAction::OriginalSize),
            "Original bit size: 40 bits\n"
        );
        assert_eq!(
            perform(&session, MenuAction::CompressedSize),
            "Compressed bit size: 5 bits\n"
        );
    }

    #[test]
    fn test_tree_action() {
        let session = Session::new("aaabb");
        assert_eq!(
            perform(&session, MenuAction::ShowTree),
            "Huffman Tree:\n└─* (5)\n  ├─'b' (2)\n  └─'a' (3)\n"
        );
    }

    #[test]
    fn test_table_actions() {
        let session = Session::new("aaabb");
        let original = perform(&session, MenuAction::OriginalTable);
        assert!(original.starts_with("Original Bit Table:\n"));
        assert_eq!(original.lines().count(), 5);

        let codes = perform(&session, MenuAction::CodeTable);
        assert!(codes.starts_with("Huffman Code Table:\n"));
        assert_eq!(codes.lines().count(), 5);
    }

    #[test]
    fn test_empty_input_refuses_tree_actions() {
        let session = Session::new("");
        assert!(session.analysis.is_none());
        for action in [
            MenuAction::Compress,
            MenuAction::ShowTree,
            MenuAction::CompressedSize,
            MenuAction::CodeTable,
        ] {
            assert_eq!(perform(&session, action), format!("{NO_DATA}\n"));
        }
        assert_eq!(
            perform(&session, MenuAction::OriginalSize),
            "Original bit size: 0 bits\n"
        );
        assert_eq!(
            perform(&session, MenuAction::OriginalTable).lines().count(),
            3
        );
    }

    #[test]
    fn test_every_action_writes_output() {
        for text in ["", "aaaa", "aaabb"] {
            let session = Session::new(text);
            for action in MenuAction::ALL {
                let out = perform(&session, action);
                assert!(!out.is_empty(), "{action:?} printed nothing for {text:?}");
            }
        }
    }

    #[test]
    fn test_single_symbol_compress() {
        let session = Session::new("aaaa");
        assert_eq!(
            perform(&session, MenuAction::Compress),
            "Compressed bit string:\n0000\n"
        );
    }

    #[test]
    fn test_run_until_exit() {
        let session = Session::new("aaabb");
        let out = run_scripted(&session, "3\n5\n0\n1\n");
        assert_eq!(
            out,
            "Original bit size: 40 bits\nCompressed bit size: 5 bits\nExiting...\n"
        );
    }

    #[test]
    fn test_run_invalid_choice_reprompts() {
        let session = Session::new("aaabb");
        let out = run_scripted(&session, "9\nhello\n5\n");
        assert_eq!(
            out,
            format!("{INVALID_OPTION}\n{INVALID_OPTION}\nCompressed bit size: 5 bits\n")
        );
    }

    #[test]
    fn test_run_ends_on_eof() {
        let session = Session::new("abc");
        assert_eq!(run_scripted(&session, ""), "");
    }

    #[test]
    fn test_run_interactive_shows_menu() {
        let session = Session::new("ab");
        let mut input = Cursor::new("0\n".as_bytes());
        let mut out = Vec::new();
        session
            .run(&mut input, &mut out, &SessionConfig::INTERACTIVE)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Menu:\n1. Reduce (Compress)\n"));
        assert!(out.contains("6. See the New Bit Table\n0. Exit\n"));
        assert!(out.contains("Enter your choice: Exiting...\n"));
    }

    #[test]
    fn test_read_text() {
        let mut out = Vec::new();
        let mut input = Cursor::new("hello world\r\nmore\n".as_bytes());
        let text = read_text(&mut input, &mut out, &SessionConfig::INTERACTIVE).unwrap();
        assert_eq!(text, "hello world");
        assert_eq!(String::from_utf8(out).unwrap(), "Enter your text: ");

        let mut input = Cursor::new("".as_bytes());
        let text = read_text(&mut input, &mut Vec::new(), &SessionConfig::SCRIPTED).unwrap();
        assert_eq!(text, "");
    }
}
