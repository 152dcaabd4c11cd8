use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::mpsc;
use tracing::warn;

use crate::app::Command;
use crate::domain::Algorithm;
use crate::shutdown::ShutdownSender;

use super::render::ScrollStep;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    Scroll(ScrollStep),
    Quit,
}

#[must_use]
pub fn map_key(key: KeyEvent) -> Option<KeyAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            .then_some(KeyAction::Quit);
    }
    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
            KeyAction::Command(Command::SendRequest)
        }
        KeyCode::Char('1') => KeyAction::Command(Command::SetAlgorithm(Algorithm::RoundRobin)),
        KeyCode::Char('2') => KeyAction::Command(Command::SetAlgorithm(Algorithm::Random)),
        KeyCode::Char('3') => {
            KeyAction::Command(Command::SetAlgorithm(Algorithm::LeastConnections))
        }
        KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Command(Command::AddTarget),
        KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Command(Command::ClearResults),
        KeyCode::Char('+') | KeyCode::Char('=') => KeyAction::Command(Command::IncreaseRate),
        KeyCode::Char('-') | KeyCode::Char('_') => KeyAction::Command(Command::DecreaseRate),
        KeyCode::Char('l') | KeyCode::Char('L') => KeyAction::Command(Command::StartLoadTest),
        KeyCode::Char('x') | KeyCode::Char('X') => KeyAction::Command(Command::CancelLoadTest),
        KeyCode::Up | KeyCode::Char('k') => KeyAction::Scroll(ScrollStep::Up),
        KeyCode::Down | KeyCode::Char('j') => KeyAction::Scroll(ScrollStep::Down),
        KeyCode::PageUp => KeyAction::Scroll(ScrollStep::PageUp),
        KeyCode::PageDown => KeyAction::Scroll(ScrollStep::PageDown),
        KeyCode::Home => KeyAction::Scroll(ScrollStep::Oldest),
        KeyCode::End => KeyAction::Scroll(ScrollStep::Newest),
        KeyCode::Backspace
        | KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Delete
        | KeyCode::Insert
        | KeyCode::F(_)
        | KeyCode::Char(_)
        | KeyCode::Null
        | KeyCode::CapsLock
        | KeyCode::ScrollLock
        | KeyCode::NumLock
        | KeyCode::PrintScreen
        | KeyCode::Pause
        | KeyCode::Menu
        | KeyCode::KeypadBegin
        | KeyCode::Media(_)
        | KeyCode::Modifier(_) => return None,
    };
    Some(action)
}

/// Reads the keyboard on a blocking thread and forwards commands to the controller.
///
/// Quitting sends [`Command::Quit`]; the controller decides when the session ends.
#[must_use]
pub fn spawn_input_handler(
    shutdown_tx: &ShutdownSender,
    commands_tx: mpsc::Sender<Command>,
    scroll_tx: mpsc::Sender<ScrollStep>,
) -> tokio::task::JoinHandle<()> {
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::task::spawn_blocking(move || {
        loop {
            match shutdown_rx.try_recv() {
                Err(TryRecvError::Empty) => {}
                Ok(()) | Err(TryRecvError::Closed) | Err(TryRecvError::Lagged(_)) => break,
            }
            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(err) => {
                    warn!("Failed to poll keyboard: {}", err);
                    break;
                }
            };
            if !ready {
                continue;
            }
            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(err) => {
                    warn!("Failed to read keyboard: {}", err);
                    break;
                }
            };
            let sent = match map_key(key) {
                Some(KeyAction::Command(command)) => commands_tx.blocking_send(command).is_ok(),
                Some(KeyAction::Scroll(step)) => scroll_tx.blocking_send(step).is_ok(),
                Some(KeyAction::Quit) => {
                    commands_tx.blocking_send(Command::Quit).ok();
                    break;
                }
                None => true,
            };
            if !sent {
                break;
            }
        }
    })
}
