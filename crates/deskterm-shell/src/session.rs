use chrono::{DateTime, Local};
use deskterm_core::config::app_config::ShellConfig;
use tracing::debug;
use uuid::Uuid;

use crate::command::{Dispatch, DispatchOutcome, Dispatcher};
use crate::history::{CommandHistory, RecallDirection};
use crate::input::InputLine;
use crate::scrollback::ScrollbackBuffer;

/// A keyboard event as the shell sees it. The frontend maps its own event
/// type onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    Enter,
    Up,
    Down,
}

/// One interactive shell session: scrollback, history, input line, and the
/// dispatcher, owned together and never shared across sessions.
///
/// Every transition is synchronous; a keystroke is fully processed before
/// `handle_key` returns, so there is no locking and no intermediate state
/// to observe.
pub struct ShellSession {
    pub id: Uuid,
    pub created_at: DateTime<Local>,
    scrollback: ScrollbackBuffer,
    history: CommandHistory,
    input: InputLine,
    dispatcher: Dispatcher,
}

impl ShellSession {
    /// Create a session. When the config asks for it, the welcome banner is
    /// synthesized into the scrollback before any user interaction.
    pub fn new(config: &ShellConfig) -> Self {
        let mut session = Self {
            id: Uuid::new_v4(),
            created_at: Local::now(),
            scrollback: ScrollbackBuffer::new(config.scrollback_lines),
            history: CommandHistory::new(),
            input: InputLine::new(),
            dispatcher: Dispatcher::new(config),
        };
        if config.welcome_banner {
            session.greet();
        }
        debug!("shell session {} started", session.id);
        session
    }

    fn greet(&mut self) {
        let login = self.created_at.format("%a %b %e %H:%M:%S %Y");
        self.scrollback.append([
            format!("Last login: {}", login),
            "Welcome to DeskTerm".to_string(),
            "Type 'help' to see available commands".to_string(),
            String::new(),
        ]);
    }

    /// Feed one keystroke through the shell. Characters edit the input
    /// line, arrows drive history recall, Enter submits.
    pub fn handle_key(&mut self, key: KeyInput) {
        match key {
            KeyInput::Char(c) => self.input.insert(c),
            KeyInput::Backspace => self.input.backspace(),
            KeyInput::Enter => self.submit(),
            KeyInput::Up => self.recall(RecallDirection::Older),
            KeyInput::Down => self.recall(RecallDirection::Newer),
        }
    }

    /// The full submit pipeline: gate on non-blank input, record history,
    /// reset the recall cursor, clear the input line, dispatch, and apply
    /// the outcome to the scrollback.
    fn submit(&mut self) {
        if self.input.is_blank() {
            // No echo, no history push.
            return;
        }
        let raw = self.input.take();
        self.history.push(raw.clone());
        self.history.reset_cursor();

        let Dispatch { echo, outcome } = self.dispatcher.execute(&raw);
        match outcome {
            DispatchOutcome::ClearScreen => {
                // Replaces the buffer outright, echoed prompt included.
                self.scrollback.clear();
            }
            DispatchOutcome::Append(lines) => {
                self.scrollback.append(echo);
                self.scrollback.append(lines);
            }
        }
    }

    /// History recall only touches the input line and the cursor, never the
    /// scrollback.
    fn recall(&mut self, direction: RecallDirection) {
        if let Some(text) = self.history.recall(direction) {
            self.input.set(text);
        }
    }

    pub fn scrollback(&self) -> &ScrollbackBuffer {
        &self.scrollback
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn prompt(&self) -> String {
        self.dispatcher.prompt()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
