//! External command execution.
//!
//! Runs a program directly (no shell), captures stdout and bounds the wait
//! with a per-call timeout. Every failure is reported as a [`CommandError`];
//! probes normally go through [`CommandRunner::run`], which turns any failure
//! into `None`.

use crate::error::CommandError;
use log::debug;
use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Timeout applied to each command unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs external OS utilities with a fail-soft contract
#[derive(Debug, Clone, Copy)]
pub struct CommandRunner {
    timeout: Duration,
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `program` and return its stdout, or `None` on any failure
    pub fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        match self.execute(program, args) {
            Ok(stdout) => Some(stdout),
            Err(e) => {
                debug!("command unavailable: {}", e);
                None
            }
        }
    }

    /// Run `program`, reporting why it failed when it does
    pub fn execute(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CommandError::from_io(program, e))?;

        // Drain stdout concurrently so a chatty child never blocks on a full pipe.
        let (tx, rx) = mpsc::channel();
        if let Some(mut stream) = child.stdout.take() {
            thread::spawn(move || {
                let mut buf = Vec::new();
                let _ = stream.read_to_end(&mut buf);
                let _ = tx.send(buf);
            });
        }

        let started = Instant::now();
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {}
                Err(e) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(CommandError::from_io(program, e));
                }
            }

            if started.elapsed() >= self.timeout {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CommandError::TimedOut {
                    program: program.to_string(),
                    after: self.timeout,
                });
            }

            thread::sleep(POLL_INTERVAL);
        };

        if !status.success() {
            return Err(CommandError::NonZeroExit {
                program: program.to_string(),
                code: status.code(),
            });
        }

        // A grandchild can keep the pipe open after the child exits; the
        // remaining budget still applies to collecting its output.
        let remaining = self
            .timeout
            .saturating_sub(started.elapsed())
            .max(POLL_INTERVAL);
        let stdout = rx.recv_timeout(remaining).map_err(|_| CommandError::TimedOut {
            program: program.to_string(),
            after: self.timeout,
        })?;

        String::from_utf8(stdout).map_err(|_| CommandError::InvalidUtf8(program.to_string()))
    }
}
