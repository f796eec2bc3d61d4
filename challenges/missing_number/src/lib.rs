use std::io::{self, BufRead, Write};

pub mod error;
pub mod finder;
pub mod orchestrator;
pub mod ui;
pub mod validator;

pub use error::{Error, FinderError, InputError, ValidationError};
pub use finder::{Finder, SumFinder};
pub use orchestrator::{Orchestrator, State};
pub use ui::{ConsoleUi, UserInterface, parse_sequence};
pub use validator::{RangeValidator, Validator};

/// Parses, validates and solves a single line of space-separated integers.
pub fn solve(line: &str) -> Result<i64, Error> {
    let numbers = parse_sequence(line)?;
    RangeValidator.validate(Some(numbers.as_slice()))?;
    Ok(SumFinder.find_missing(Some(numbers.as_slice()))?)
}

/// Line reader over any buffered source (stdin in the binary, a `Cursor` in tests)
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next line with surrounding whitespace removed, `None` once the source is exhausted.
    ///
    /// Bytes that are not UTF-8 are replaced with U+FFFD rather than failing the read.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&input).trim().to_string()))
    }
}

/// Output writer. Prompts go out with `print` and must be flushed before the next read.
pub struct Writer<W: Write> {
    out: W,
}

impl<W: Write> Writer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) -> io::Result<()> {
        write!(self.out, "{}", value)
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) -> io::Result<()> {
        writeln!(self.out, "{}", value)?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Writer<Vec<u8>> {
    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.out)
    }
}

impl Default for Writer<Vec<u8>> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
