//! The interactive read-validate-solve loop.
//!
//! One iteration prompts for a sequence, validates it, solves it and shows the
//! outcome. Every failure inside an iteration is reported to the user exactly
//! once and the loop carries on to the "continue?" question; only a "no" (or an
//! input that can no longer be read) stops it. A collaborator that panics is
//! contained the same way and reported as an internal error.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, error, info, warn};

use crate::error::Error;
use crate::finder::Finder;
use crate::ui::UserInterface;
use crate::validator::Validator;

pub const CONTINUE_QUESTION: &str = "Do you want to find another missing number?";
pub const FAREWELL: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

pub struct Orchestrator<V, F, U> {
    validator: V,
    finder: F,
    ui: U,
    state: State,
    iterations: usize,
}

impl<V, F, U> Orchestrator<V, F, U>
where
    V: Validator,
    F: Finder,
    U: UserInterface,
{
    pub fn new(validator: V, finder: F, ui: U) -> Self {
        Self {
            validator,
            finder,
            ui,
            state: State::Running,
            iterations: 0,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Number of completed iterations, successful or not.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_ui(self) -> U {
        self.ui
    }

    /// Runs until the user declines to continue, then says goodbye.
    pub fn run(&mut self) {
        info!("session started");
        while self.state == State::Running {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.run_once()))
                .unwrap_or_else(|payload| {
                    error!("iteration panicked: {}", panic_message(payload.as_ref()));
                    Err(Error::Internal)
                });
            if let Err(err) = outcome {
                self.report(&err);
            }
            self.iterations += 1;
            self.state = self.next_state();
        }

        if let Err(err) = self.ui.show_message(FAREWELL) {
            warn!("could not write farewell: {}", err);
        }
        info!("session stopped after {} iteration(s)", self.iterations);
    }

    /// Steps 1 to 4 of an iteration: read, validate, solve, display.
    fn run_once(&mut self) -> Result<i64, Error> {
        let numbers = self.ui.read_sequence()?;
        debug!("read sequence {:?}", numbers);

        self.validator.validate(numbers.as_deref())?;
        let missing = self.finder.find_missing(numbers.as_deref())?;
        debug!("missing number is {}", missing);

        self.ui.show_result(missing)?;
        Ok(missing)
    }

    fn report(&mut self, err: &Error) {
        let message = if err.is_user_error() {
            debug!("rejected input: {:?}", err);
            err.to_string()
        } else {
            error!("iteration failed: {:?}", err);
            format!("unexpected failure: {}", err)
        };

        if let Err(io) = self.ui.show_error(&message) {
            warn!("could not display error: {}", io);
        }
    }

    fn next_state(&mut self) -> State {
        match self.ui.ask_yes_no(CONTINUE_QUESTION) {
            Ok(true) => State::Running,
            Ok(false) => State::Stopped,
            Err(err) => {
                warn!("could not read answer, stopping: {}", err);
                State::Stopped
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}
