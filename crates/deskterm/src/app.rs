//! Crossterm frontend: raw-mode event loop that feeds keystrokes to the
//! shell session and repaints the transcript after every event.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use deskterm_core::AppConfig;
use deskterm_shell::{KeyInput, ShellSession};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Restores the terminal on drop so a panic or early return never leaves
/// the user's terminal in raw mode.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run(config: &AppConfig) -> Result<()> {
    let mut session = ShellSession::new(&config.shell);
    tracing::info!("Shell session {} ready", session.id);

    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();

    loop {
        draw(&mut out, &session)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    match key.code {
                        KeyCode::Char('c') => break,
                        // Conventional EOF: only quits on an empty line.
                        KeyCode::Char('d') if session.input().is_empty() => break,
                        _ => {}
                    }
                    continue;
                }
                if let Some(input) = map_key(key.code) {
                    session.handle_key(input);
                }
            }
            // Repainted at the top of the loop.
            Event::Resize(..) => {}
            _ => {}
        }
    }

    tracing::info!("Shell session {} closed", session.id);
    Ok(())
}

fn map_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        _ => None,
    }
}

/// Repaint the whole screen: the transcript tail that fits above the input
/// row, then the prompt and current input with the cursor parked at the
/// end. Repainting is idempotent, so it runs unconditionally per event.
fn draw(out: &mut impl Write, session: &ShellSession) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let visible = rows.saturating_sub(1) as usize;

    queue!(out, Clear(ClearType::All))?;

    // Auto-scroll: show the newest lines, oldest first.
    let transcript = session.scrollback();
    let skip = transcript.len().saturating_sub(visible);
    for (row, line) in transcript.lines().skip(skip).enumerate() {
        queue!(
            out,
            MoveTo(0, row as u16),
            Print(clip_to_width(line, cols as usize))
        )?;
    }

    let input_row = rows.saturating_sub(1);
    let prompt = format!("{} ", session.prompt());
    let line = format!("{}{}", prompt, session.input());
    let cursor_col = line.width().min(cols.saturating_sub(1) as usize);
    queue!(
        out,
        MoveTo(0, input_row),
        Print(clip_to_width(&line, cols as usize)),
        MoveTo(cursor_col as u16, input_row)
    )?;

    out.flush()?;
    Ok(())
}

/// Truncate a line to the given display width so it never wraps into the
/// next transcript row.
fn clip_to_width(line: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut clipped = String::new();
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        clipped.push(c);
    }
    clipped
}
