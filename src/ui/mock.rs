//! Mock UI for unit tests.

use std::collections::VecDeque;

use crate::error::Result;

use super::{OutputMode, SpinnerHandle, UserInterface};

/// A recorded UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Header(String),
    Spinner(String),
    Confirm(String),
}

/// Mock UI that records events and replays queued confirm answers.
#[derive(Default)]
pub struct MockUI {
    /// Recorded events, in order.
    pub events: Vec<MockEvent>,
    /// Queued answers for confirm prompts; empty queue answers the default.
    pub confirm_answers: VecDeque<bool>,
}

impl MockUI {
    /// Create a new mock UI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next confirm prompt.
    pub fn push_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    /// All recorded message texts joined, for coarse assertions.
    pub fn transcript(&self) -> String {
        self.events
            .iter()
            .map(|e| match e {
                MockEvent::Message(s)
                | MockEvent::Success(s)
                | MockEvent::Warning(s)
                | MockEvent::Error(s)
                | MockEvent::Header(s)
                | MockEvent::Spinner(s)
                | MockEvent::Confirm(s) => s.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        OutputMode::Normal
    }

    fn message(&mut self, msg: &str) {
        self.events.push(MockEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(MockEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(MockEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(MockEvent::Error(msg.to_string()));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        self.events.push(MockEvent::Confirm(question.to_string()));
        Ok(self.confirm_answers.pop_front().unwrap_or(default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.events.push(MockEvent::Spinner(message.to_string()));
        Box::new(NoopSpinner)
    }

    fn show_header(&mut self, title: &str) {
        self.events.push(MockEvent::Header(title.to_string()));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

struct NoopSpinner;

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_skipped(&mut self, _msg: &str) {}
    fn progress_bar(&self) -> Option<indicatif::ProgressBar> {
        None
    }
}
