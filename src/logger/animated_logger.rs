use std::io::{IsTerminal, Write};
use colored::Colorize;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use crate::config::constants::SPINNER_INTERVAL_MS;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Stderr spinner shown while a request is in flight. Stays silent when
/// stderr is not a terminal so piped output is not littered with frames.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<oneshot::Sender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        if self.task_handle.is_some() || !std::io::stderr().is_terminal() {
            return;
        }

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(SPINNER_INTERVAL_MS));

            for frame in FRAMES.iter().cycle() {
                tokio::select! {
                    _ = interval.tick() => {
                        let mut stderr = std::io::stderr();
                        let _ = write!(stderr, "\r{} {}", frame.blue(), message);
                        let _ = stderr.flush();
                    }
                    _ = &mut stop_rx => break,
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        if self.halt().await {
            eprintln!("\r\x1b[K{} {}", "✓".green(), final_message);
        }
    }

    pub async fn error(&mut self, error_message: &str) {
        if self.halt().await {
            eprintln!("\r\x1b[K{} {}", "✗".red(), error_message);
        }
    }

    /// Returns whether a spinner line was on screen.
    async fn halt(&mut self) -> bool {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        match self.task_handle.take() {
            Some(handle) => {
                let _ = handle.await;
                true
            }
            None => false,
        }
    }
}

impl Drop for AnimatedLogger {
    fn drop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            handle.abort();
        }
    }
}
