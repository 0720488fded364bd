//! The interactive shell: reads one logical input at a time, feeds it
//! through the scanner/lexer/parser/analyzer chain, and prints the result
//! or diagnostic.
//!
//! The block-continuation rule (collect indented lines until a blank line
//! or a line with no leading whitespace) goes beyond a single-line-per-
//! cycle loop, since indentation-significant `let:` blocks need their
//! continuation lines joined into one submission before parsing.

use std::io::{self, BufRead, Write};

use lyth_lex::Lexer;
use lyth_par::Parser;
use lyth_sem::{Analyzer, SymbolRootRegistry};
use lyth_util::SyntaxError;

use crate::config::Config;

const PROMPT: &str = ">>> ";
const CONTINUATION_PROMPT: &str = "... ";

/// Drives the read-eval-print loop for one REPL session.
pub struct Repl<R, W> {
    input: R,
    output: W,
    analyzer: Analyzer,
    config: Config,
    /// A line read ahead while collecting a block, held over for the next
    /// top-level input — the REPL-level analogue of the parser's one-token
    /// lookaside.
    pending_line: Option<String>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            analyzer: Analyzer::new("<stdin>", SymbolRootRegistry::new()),
            config,
            pending_line: None,
        }
    }

    /// Runs the loop for `cycle.map_or(unbounded, |n| n + 1)` iterations,
    /// matching `-c cycle=N`. Returns whether an internal (non-language)
    /// error aborted the session early.
    pub fn run(&mut self, cycle: Option<u32>) -> io::Result<bool> {
        let mut count = 0u32;
        loop {
            if let Some(limit) = cycle {
                if count > limit {
                    break;
                }
            }

            let Some(source) = self.read_block()? else {
                break;
            };

            if let Err(fatal) = self.eval_and_print(&source) {
                writeln!(self.output, "{fatal}")?;
                return Ok(true);
            }

            if cycle.is_some() {
                count += 1;
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(false)
    }

    /// Reads one logical input: a single line, or for block-opening input
    /// (a line ending in `:`), every subsequent indented line up to (but
    /// not including) the first blank line or un-indented line.
    fn read_block(&mut self) -> io::Result<Option<String>> {
        let Some(first) = self.next_line(PROMPT)? else {
            return Ok(None);
        };

        let trimmed = first.trim_end_matches('\n');
        if !trimmed.trim_end().ends_with(':') {
            return Ok(Some(format!("{trimmed}\n")));
        }

        let mut block = trimmed.to_string();
        block.push('\n');
        loop {
            let Some(line) = self.next_line(CONTINUATION_PROMPT)? else { break };
            let bare = line.trim_end_matches('\n');
            if bare.trim().is_empty() || !bare.starts_with(char::is_whitespace) {
                if !bare.is_empty() {
                    self.pending_line = Some(line);
                }
                break;
            }
            block.push_str(bare);
            block.push('\n');
        }
        block.push('\n');
        Ok(Some(block))
    }

    fn next_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if let Some(line) = self.pending_line.take() {
            return Ok(Some(line));
        }

        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn eval_and_print(&mut self, source: &str) -> io::Result<()> {
        let mut parser = Parser::new(Lexer::new("<stdin>", source));

        if self.config.echo_tokens {
            self.echo_tokens(source)?;
        }

        let statement = match parser.next_statement() {
            Ok(Some(node)) => node,
            Ok(None) => return Ok(()),
            Err(err) => return self.print_diagnostic(&err),
        };

        if self.config.echo_ast {
            writeln!(self.output, "{statement:?}")?;
        }

        match self.analyzer.analyze(&statement, parser.string_table()) {
            Ok(Some(value)) => writeln!(self.output, "{value}")?,
            Ok(None) => {}
            Err(err) => self.print_diagnostic(&err)?,
        }
        Ok(())
    }

    fn echo_tokens(&mut self, source: &str) -> io::Result<()> {
        let mut lexer = Lexer::new("<stdin>", source);
        loop {
            match lexer.next_token() {
                Ok(token) => {
                    let is_eof = token.is_eof();
                    writeln!(self.output, "{token:?}")?;
                    if is_eof {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        Ok(())
    }

    fn print_diagnostic(&mut self, err: &SyntaxError) -> io::Result<()> {
        writeln!(self.output, "{err}")
    }
}
