// Text-to-speech through the platform speech command
use std::io::{ErrorKind, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;
use crate::config::SpeechConfig;
use crate::types::{Result, StudyError};

pub trait SpeechEngine {
    /// Start speaking. Anything still playing is cut off first.
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Stop the current utterance, if any.
    fn cancel(&mut self) -> Result<()>;

    fn is_speaking(&mut self) -> bool;
}

/// Runs `say`/`espeak` (or whatever is configured) as a child process and
/// feeds it the text on stdin. The argument list stays the same size no
/// matter how long the document is.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
    current: Option<Child>,
}

impl CommandSpeaker {
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            current: None,
        }
    }

    /// Block until the current utterance finishes.
    pub fn wait(&mut self) -> Result<()> {
        if let Some(mut child) = self.current.take() {
            let status = child.wait()?;
            if !status.success() {
                return Err(StudyError::Speech(format!("{} exited with {}", self.program, status)));
            }
        }
        Ok(())
    }
}

impl SpeechEngine for CommandSpeaker {
    fn speak(&mut self, text: &str) -> Result<()> {
        self.cancel()?;
        if text.trim().is_empty() {
            return Ok(());
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| StudyError::Speech(format!("cannot start {}: {}", self.program, e)))?;

        // Written off-thread: the program may read slower than the pipe fills.
        if let Some(stdin) = child.stdin.take() {
            let text = text.to_string();
            thread::spawn(move || feed_stdin(stdin, &text));
        }

        tracing::debug!("Speaking {} characters with {}", text.chars().count(), self.program);
        self.current = Some(child);
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        if let Some(mut child) = self.current.take() {
            if child.try_wait()?.is_none() {
                tracing::debug!("Cancelling speech");
                child.kill()?;
            }
            child.wait()?;
        }
        Ok(())
    }

    fn is_speaking(&mut self) -> bool {
        match self.current.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }
}

/// Write the whole text, then close the pipe so the program sees EOF.
/// A broken pipe means the utterance was cancelled or the program quit early.
fn feed_stdin(mut stdin: ChildStdin, text: &str) {
    match stdin.write_all(text.as_bytes()) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {}
        Err(e) => tracing::warn!("Failed to send text to speech program: {}", e),
    }
}
