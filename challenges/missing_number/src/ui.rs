use std::io::{self, Write};

use log::debug;

use crate::error::InputError;
use crate::{Scanner, Writer};

const SEQUENCE_PROMPT: &str = "Enter space-separated integers: ";

/// The console dialogue as seen by the orchestrator.
pub trait UserInterface {
    /// Prompts for and reads one sequence. `Ok(None)` means the input is exhausted.
    fn read_sequence(&mut self) -> Result<Option<Vec<i64>>, InputError>;

    fn show_result(&mut self, missing: i64) -> io::Result<()>;

    fn show_error(&mut self, message: &str) -> io::Result<()>;

    fn show_message(&mut self, message: &str) -> io::Result<()>;

    /// `true` only for "y" or "yes", ignoring case and surrounding whitespace.
    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool>;
}

/// Parses whitespace separated integers. A blank line gives an empty sequence.
pub fn parse_sequence(line: &str) -> Result<Vec<i64>, InputError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| InputError::Format {
                token: token.to_string(),
            })
        })
        .collect()
}

fn is_yes(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

pub struct ConsoleUi<W: Write> {
    input: Scanner,
    out: Writer<W>,
}

impl<W: Write> ConsoleUi<W> {
    pub fn new(input: Scanner, out: Writer<W>) -> Self {
        Self { input, out }
    }

    pub fn into_writer(self) -> Writer<W> {
        self.out
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.out.print(text)?;
        self.out.flush()?;
        self.input.next_line()
    }
}

impl<W: Write> UserInterface for ConsoleUi<W> {
    fn read_sequence(&mut self) -> Result<Option<Vec<i64>>, InputError> {
        let Some(line) = self.prompt(SEQUENCE_PROMPT)? else {
            debug!("input exhausted while waiting for a sequence");
            return Ok(None);
        };
        parse_sequence(&line).map(Some)
    }

    fn show_result(&mut self, missing: i64) -> io::Result<()> {
        self.out.println(format_args!("The missing number is: {}", missing))
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.out.println(format_args!("Error: {}", message))
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.out.println(message)
    }

    fn ask_yes_no(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.prompt(&format!("{} (y/n): ", question))?;
        Ok(answer.as_deref().is_some_and(is_yes))
    }
}
