/*!
 * Interactive run: estimate, confirm, submit, report
 */

use std::io::{BufRead, Write};

use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::error::Result;
use crate::estimate::TokenEstimate;
use crate::report::assemble_responses;
use crate::types::CodebaseContext;

/// Message printed when the user declines
pub const ABORT_MESSAGE: &str = "Operation aborted.";

/// How a session ended
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// The user declined; nothing was sent
    Aborted,
    /// Every chunk was submitted and the report printed
    Completed {
        /// The printed report
        report: String,
        /// Raw dispatch results
        outcome: DispatchOutcome,
    },
}

/// One interactive run over injected input and output streams
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    dispatcher: Dispatcher<'a>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new session
    pub fn new(input: R, output: W, dispatcher: Dispatcher<'a>) -> Self {
        Self {
            input,
            output,
            dispatcher,
        }
    }

    /// Drive the session to completion
    pub fn run(
        &mut self,
        context: &CodebaseContext,
        estimate: &TokenEstimate,
    ) -> Result<SessionOutcome> {
        self.show_estimate(context, estimate)?;

        if !self.confirm()? {
            writeln!(self.output, "{}", ABORT_MESSAGE)?;
            return Ok(SessionOutcome::Aborted);
        }

        let prompt = self.ask("Enter your prompt: ")?;
        let outcome = self.dispatcher.dispatch(context.as_str(), &prompt)?;

        let report = assemble_responses(&outcome.parts);
        if report.is_empty() {
            eprintln!("Warning: No responses were received");
        }
        writeln!(self.output, "{}", report)?;

        Ok(SessionOutcome::Completed { report, outcome })
    }

    fn show_estimate(&mut self, context: &CodebaseContext, estimate: &TokenEstimate) -> Result<()> {
        writeln!(
            self.output,
            "The codebase context contains {} tokens.",
            estimate.tokens
        )?;
        writeln!(
            self.output,
            "Estimated cost per API call: {}",
            estimate.formatted_cost()
        )?;
        writeln!(
            self.output,
            "The context will be sent in {} chunk(s) of up to {} characters.",
            self.dispatcher.chunks_for(context.as_str()),
            self.dispatcher.chunk_size()
        )?;
        Ok(())
    }

    /// Only a case-insensitive "yes" proceeds; end of input declines
    fn confirm(&mut self) -> Result<bool> {
        let answer = self.ask("Do you want to proceed? (yes/no): ")?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
