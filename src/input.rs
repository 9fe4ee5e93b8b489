//! Keyboard dispatch.
//!
//! Maps crossterm key events onto game commands and dialog choices, one
//! discrete press at a time. Which mapping applies depends on the phase,
//! so the app layer picks the right function per event.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameCommand;

/// Outcome of a yes/no dialog keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Confirm,
    Cancel,
}

/// Main menu navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuNav {
    Up,
    Down,
    Select,
}

/// One keystroke inside a name prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEntry {
    Char(char),
    Backspace,
    Submit,
    Cancel,
}

/// Ctrl+C always quits; Q quits unless a name prompt is capturing text.
pub fn quit_requested(event: &KeyEvent, in_text_entry: bool) -> bool {
    if event.modifiers.contains(KeyModifiers::CONTROL) && event.code == KeyCode::Char('c') {
        return true;
    }
    !in_text_entry && matches!(event.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

pub fn playing_command(code: KeyCode) -> Option<GameCommand> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameCommand::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameCommand::MoveRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameCommand::Rotate),
        KeyCode::Down | KeyCode::Char('f') | KeyCode::Char('F') => Some(GameCommand::SoftDrop),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(GameCommand::HardDrop),
        KeyCode::Char('e') | KeyCode::Char('E') => Some(GameCommand::ToggleHold),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameCommand::Pause),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(GameCommand::RequestSave),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(GameCommand::RequestRestart),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameCommand::RequestMainMenu),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(GameCommand::RequestHelp),
        _ => None,
    }
}

pub fn paused_command(code: KeyCode) -> Option<GameCommand> {
    match code {
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(GameCommand::Resume)
        }
        _ => None,
    }
}

pub fn dialog_choice(code: KeyCode) -> Option<DialogChoice> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(DialogChoice::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(DialogChoice::Cancel),
        _ => None,
    }
}

pub fn menu_nav(code: KeyCode) -> Option<MenuNav> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(MenuNav::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(MenuNav::Down),
        KeyCode::Enter => Some(MenuNav::Select),
        _ => None,
    }
}

/// Back out of the ranking or help screen.
pub fn back_requested(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('b') | KeyCode::Char('B')
    )
}

/// Name prompts take printable non-space ASCII; names feed both file
/// names and the space-delimited records file.
pub fn text_entry(code: KeyCode) -> Option<TextEntry> {
    match code {
        KeyCode::Char(c) if c.is_ascii_graphic() => Some(TextEntry::Char(c)),
        KeyCode::Backspace => Some(TextEntry::Backspace),
        KeyCode::Enter => Some(TextEntry::Submit),
        KeyCode::Esc => Some(TextEntry::Cancel),
        _ => None,
    }
}
