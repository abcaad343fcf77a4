//! Interactive read-print loop.
//!
//! Reads a line, handles the reserved command words, and otherwise sends
//! the text through the session. Output goes to any `io::Write` and input
//! comes from any [`LineSource`], so the loop can be driven without a
//! terminal.
//!
//! Ctrl-C at the prompt is reported by rustyline. Ctrl-C while a request is
//! in flight is caught by a signal watcher that only raises a flag: the
//! request still runs to completion (or times out), then the loop ends and
//! the save-on-exit offer is made as usual.

mod command;
mod output;


use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parley_ai::{transcript, CompletionClient, Session};
use parley_config::schema::SessionConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

pub use command::Command;

const PROMPT: &str = "You: ";

/// Where input lines come from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;

    /// Record a submitted line for recall. No-op by default.
    fn remember(&mut self, _line: &str) {}
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.readline(prompt)
    }

    fn remember(&mut self, line: &str) {
        let _ = self.add_history_entry(line);
    }
}

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Repl<'a> {
    session: Session,
    client: &'a dyn CompletionClient,
    assistant_name: String,
    transcript_prefix: String,
    interrupted: Arc<AtomicBool>,
}

impl<'a> Repl<'a> {
    pub fn new(session: Session, client: &'a dyn CompletionClient, config: &SessionConfig) -> Self {
        Self {
            session,
            client,
            assistant_name: config.assistant_name.clone(),
            transcript_prefix: config.transcript_prefix.clone(),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = flag;
        self
    }

    fn take_interrupt(&self) -> bool {
        self.interrupted.swap(false, Ordering::SeqCst)
    }

    /// Handle one input line.
    pub async fn handle_line(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let command = Command::parse(line);
        debug!(?command, "input");

        match command {
            Command::Empty => {}
            Command::Quit => {
                output::farewell(out, &self.assistant_name)?;
                return Ok(Flow::Quit);
            }
            Command::Save(filename) => self.save(filename.as_deref(), out)?,
            Command::Clear => {
                self.session.clear();
                output::cleared(out)?;
            }
            Command::Chat(text) => {
                match self.session.chat(self.client, text).await {
                    Ok(reply) => output::reply(out, &self.assistant_name, &reply)?,
                    Err(e) => output::failure(out, &e)?,
                }
                if self.take_interrupt() {
                    info!("interrupted during request");
                    output::interrupted(out, &self.assistant_name)?;
                    return Ok(Flow::Quit);
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Export the current history. Failures are reported, not propagated.
    pub fn save(&self, filename: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let turns = self.session.snapshot();
        match transcript::save_with_default_name(filename, &self.transcript_prefix, &turns) {
            Ok(path) => output::saved(out, &path),
            Err(e) => output::save_failed(out, &e),
        }
    }

    /// Run the loop on the terminal until the user leaves, then offer to
    /// save the transcript.
    pub async fn run(&mut self) -> Result<(), ReadlineError> {
        let mut editor = DefaultEditor::new()?;

        let flag = Arc::clone(&self.interrupted);
        let watcher = tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                flag.store(true, Ordering::SeqCst);
            }
        });

        let result = self.drive(&mut editor, &mut io::stdout()).await;
        watcher.abort();
        result
    }

    /// The loop itself: banner, lines until quit, interrupt or end of input,
    /// then the save-on-exit offer when there is history to save.
    pub async fn drive(
        &mut self,
        input: &mut impl LineSource,
        out: &mut impl Write,
    ) -> Result<(), ReadlineError> {
        output::banner(out, &self.assistant_name)?;

        loop {
            match input.read_line(PROMPT) {
                Ok(_) if self.take_interrupt() => {
                    output::interrupted(out, &self.assistant_name)?;
                    break;
                }
                Ok(line) => {
                    if !line.trim().is_empty() {
                        input.remember(&line);
                    }
                    if self.handle_line(&line, out).await? == Flow::Quit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    output::interrupted(out, &self.assistant_name)?;
                    break;
                }
                Err(ReadlineError::Eof) => {
                    output::end_of_input(out, &self.assistant_name)?;
                    break;
                }
                Err(e) => return Err(e),
            }
            out.flush()?;
        }

        if self.session.message_count() > 0 {
            self.offer_save(input, out)?;
        }
        out.flush()?;
        info!("session ended");
        Ok(())
    }

    fn offer_save(&self, input: &mut impl LineSource, out: &mut impl Write) -> io::Result<()> {
        out.flush()?;
        let answer = match input.read_line(output::SAVE_ON_EXIT_PROMPT) {
            Ok(answer) => answer,
            Err(_) => return Ok(()),
        };
        if is_yes(&answer) {
            self.save(None, out)?;
        }
        Ok(())
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
