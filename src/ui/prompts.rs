//! Yes/no prompts read line by line from an input stream

use crate::error::{CaurError, CaurResult};
use std::io::{self, BufRead, Write};

/// A reply to a `[Y/n]` question, decided by its first character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Empty line, `Y` or `y`
    Yes,
    /// `N` or `n`
    No,
    /// Anything else
    Other(char),
    /// Input closed before a line was read
    Eof,
}

impl Answer {
    /// Interpret one line of input (including its line terminator, if any)
    pub fn parse(line: &str) -> Self {
        match line.chars().next() {
            None | Some('\n') | Some('\r') | Some('Y') | Some('y') => Self::Yes,
            Some('N') | Some('n') => Self::No,
            Some(c) => Self::Other(c),
        }
    }

    pub fn is_yes(self) -> bool {
        self == Self::Yes
    }
}

/// Asks questions on an output stream and reads replies from an input stream
pub struct Prompter<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl<'a> Prompter<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Ask `question` followed by ` [Y/n] ` and read one line
    pub fn ask(&mut self, question: &str) -> CaurResult<Answer> {
        write!(self.output, "{} [Y/n] ", question)
            .and_then(|_| self.output.flush())
            .map_err(|e| CaurError::io("writing prompt", e))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| CaurError::io("reading answer", e))?;

        if read == 0 {
            // Keep the terminal tidy when stdin is closed mid-prompt
            let _ = writeln!(self.output);
            return Ok(Answer::Eof);
        }

        Ok(Answer::parse(&line))
    }
}

impl Prompter<'static> {
    /// Prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}
