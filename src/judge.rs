//! The external judge: a human answering questions over a line-oriented stream.
//!
//! Both oracles funnel every interaction through [`Judge::ask`], a single
//! blocking primitive: present a prompt, get back one line. The
//! retry-until-valid loops live in the oracles; the judge only promises a line
//! per prompt, or [`JudgeError::Disconnected`] once the stream is exhausted.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors surfaced by a judge.
#[derive(Debug, Error)]
pub enum JudgeError {
    /// The input stream ended while an answer was still owed.
    #[error("input stream closed while awaiting an answer")]
    Disconnected,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A blocking external judge.
pub trait Judge {
    /// Present `prompt` and block until the judge supplies one line.
    ///
    /// Prompts carry no trailing newline; implementations must flush them
    /// before reading. The returned line keeps whatever whitespace the judge
    /// typed — callers trim.
    fn ask(&mut self, prompt: &str) -> Result<String, JudgeError>;
}

/// The judge on the other side of the terminal: prompts on stdout, answers on
/// stdin. Stdio locks are taken per call, never held across questions.
#[derive(Debug, Default)]
pub struct ConsoleJudge;

impl ConsoleJudge {
    pub fn new() -> Self {
        Self
    }
}

impl Judge for ConsoleJudge {
    fn ask(&mut self, prompt: &str) -> Result<String, JudgeError> {
        {
            let mut out = io::stdout().lock();
            out.write_all(prompt.as_bytes())?;
            out.flush()?;
        }
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(JudgeError::Disconnected);
        }
        Ok(line)
    }
}

/// Judge with canned replies, for tests and non-interactive runs.
///
/// Replies are consumed front to back; asking past the end reports
/// [`JudgeError::Disconnected`], the same way a real judge hanging up does.
/// Every prompt is recorded so callers can assert on the exact question
/// sequence.
#[derive(Debug, Default)]
pub struct ScriptedJudge {
    replies: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedJudge {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Prompts seen so far, in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

impl Judge for ScriptedJudge {
    fn ask(&mut self, prompt: &str) -> Result<String, JudgeError> {
        self.transcript.push(prompt.to_string());
        self.replies.pop_front().ok_or(JudgeError::Disconnected)
    }
}
