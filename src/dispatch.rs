/*!
 * Sequential submission of context chunks to the completion API
 */

use std::time::Duration;

use indicatif::ProgressBar;

use crate::chunker::{chunk_count, chunk_text};
use crate::client::{CompletionClient, CompletionRequest, CompletionResult};
use crate::tokenizer::Model;

/// Text returned for one chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponsePart {
    /// Zero-based index of the chunk that produced this response
    pub chunk_index: usize,
    /// Response text
    pub text: String,
}

/// Everything the API returned for one run
#[derive(Debug, Clone, Default)]
pub struct DispatchOutcome {
    /// Captured responses, in chunk order
    pub parts: Vec<ResponsePart>,
    /// Indices of chunks whose response carried no text
    pub dropped: Vec<usize>,
    /// Number of requests issued
    pub requests: usize,
}

/// Sends a context chunk by chunk, each followed by the user prompt
pub struct Dispatcher<'a> {
    client: &'a dyn CompletionClient,
    model: Model,
    chunk_size: usize,
    progress: ProgressBar,
}

impl<'a> Dispatcher<'a> {
    /// Create a new dispatcher
    pub fn new(
        client: &'a dyn CompletionClient,
        model: Model,
        chunk_size: usize,
        progress: ProgressBar,
    ) -> Self {
        Self {
            client,
            model,
            chunk_size,
            progress,
        }
    }

    /// Maximum chunk length in characters
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of requests `context` will take
    pub fn chunks_for(&self, context: &str) -> usize {
        chunk_count(context, self.chunk_size)
    }

    /// Build the request for one chunk
    pub fn request_for(&self, chunk: &str, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model,
            content: format!("{}\n{}", chunk, prompt),
        }
    }

    /// Submit every chunk of `context` in order, one request at a time
    ///
    /// The first failing request aborts the run and nothing collected so far
    /// is returned.
    pub fn dispatch(&self, context: &str, prompt: &str) -> CompletionResult<DispatchOutcome> {
        let total = self.chunks_for(context);
        let mut outcome = DispatchOutcome::default();

        self.progress.set_length(total as u64);
        self.progress.set_position(0);
        self.progress.enable_steady_tick(Duration::from_millis(100));

        for (index, chunk) in chunk_text(context, self.chunk_size).enumerate() {
            self.progress
                .set_message(format!("Sending chunk {}/{}", index + 1, total));

            let request = self.request_for(chunk, prompt);
            let response = match self.client.complete(&request) {
                Ok(response) => response,
                Err(e) => {
                    self.progress.abandon();
                    return Err(e);
                }
            };
            outcome.requests += 1;

            match response {
                Some(text) => outcome.parts.push(ResponsePart {
                    chunk_index: index,
                    text,
                }),
                None => {
                    self.progress.suspend(|| {
                        eprintln!(
                            "Warning: No text in the response for chunk {}/{}; it is left out of the report",
                            index + 1,
                            total
                        )
                    });
                    outcome.dropped.push(index);
                }
            }

            self.progress.inc(1);
        }

        self.progress.finish_and_clear();
        Ok(outcome)
    }
}
