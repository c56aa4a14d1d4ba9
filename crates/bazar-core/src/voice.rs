//! Voice Capture State Machine
//!
//! Tracks one dictation session at a time. The recognizer itself lives
//! outside this crate; its callbacks are forwarded here as `interim`,
//! `finalize`, `end` and `fail`. A finished transcript is delivered through
//! a oneshot channel handed out by `start`.
//!
//! ```text
//! Idle --start--> Capturing --finalize--> Finalizing --end--> Idle
//!                  |   ^ interim                |
//!                  +---+--------cancel----------+--> Idle
//! ```

use futures::channel::oneshot;
use log::{debug, warn};

use crate::domain::Language;
use crate::error::CaptureError;

/// A finished utterance and the language it was captured in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub text: String,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureState {
    Idle,
    Capturing { transcript: String },
    Finalizing { transcript: String },
}

#[derive(Debug)]
pub struct CaptureSession {
    state: CaptureState,
    available: bool,
    language: Language,
    completion: Option<oneshot::Sender<Transcript>>,
}

impl CaptureSession {
    /// `available` reports whether the environment has a recognizer
    pub fn new(available: bool, language: Language) -> Self {
        Self {
            state: CaptureState::Idle,
            available,
            language,
            completion: None,
        }
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// True while the recognizer is listening
    pub fn is_capturing(&self) -> bool {
        matches!(self.state, CaptureState::Capturing { .. })
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, CaptureState::Idle)
    }

    /// Progressive transcript of the current session
    pub fn transcript(&self) -> &str {
        match &self.state {
            CaptureState::Idle => "",
            CaptureState::Capturing { transcript } | CaptureState::Finalizing { transcript } => transcript,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch capture language; not allowed mid-session
    pub fn set_language(&mut self, language: Language) -> Result<(), CaptureError> {
        if self.is_active() {
            return Err(CaptureError::SessionActive);
        }
        self.language = language;
        Ok(())
    }

    /// Begin a session. The receiver resolves with the final transcript, or
    /// is cancelled if the session ends without one.
    pub fn start(&mut self) -> Result<oneshot::Receiver<Transcript>, CaptureError> {
        if !self.available {
            return Err(CaptureError::Unavailable);
        }
        if self.is_active() {
            return Err(CaptureError::SessionActive);
        }
        let (sender, receiver) = oneshot::channel();
        self.completion = Some(sender);
        self.state = CaptureState::Capturing {
            transcript: String::new(),
        };
        debug!("Capture started ({})", self.language.speech_locale());
        Ok(receiver)
    }

    /// Partial recognition result
    pub fn interim(&mut self, text: &str) {
        if let CaptureState::Capturing { transcript } = &mut self.state {
            *transcript = text.to_string();
        }
    }

    /// Final recognition result
    pub fn finalize(&mut self, text: &str) {
        if let CaptureState::Capturing { .. } = self.state {
            self.state = CaptureState::Finalizing {
                transcript: text.to_string(),
            };
        }
    }

    /// Recognizer stopped. Delivers a non-empty transcript; returns whether
    /// one was delivered.
    pub fn end(&mut self) -> bool {
        let transcript = match std::mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::Idle => return false,
            CaptureState::Capturing { transcript } | CaptureState::Finalizing { transcript } => transcript,
        };
        let sender = self.completion.take();
        let text = transcript.trim();
        if text.is_empty() {
            debug!("Capture ended without speech");
            return false;
        }
        let transcript = Transcript {
            text: text.to_string(),
            language: self.language,
        };
        match sender {
            Some(sender) => sender.send(transcript).is_ok(),
            None => false,
        }
    }

    /// Stop on user request, discarding whatever was heard
    pub fn cancel(&mut self) {
        if self.is_active() {
            debug!("Capture cancelled");
        }
        self.state = CaptureState::Idle;
        self.completion = None;
    }

    /// Recognizer error. Ends the session; permission and support failures
    /// turn the capability off for the rest of the session.
    pub fn fail(&mut self, err: CaptureError) -> CaptureError {
        warn!("Capture failed: {}", err);
        self.state = CaptureState::Idle;
        self.completion = None;
        if err.disables_capture() {
            self.available = false;
        }
        err
    }
}
