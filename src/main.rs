//! Terminal game runner (default binary).
//!
//! Owns the event loop and the dialog flow between phases; everything
//! the loop decides is pushed into the session or the display state.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use tetrion::core::GameSession;
use tetrion::input::{self, DialogChoice, MenuNav, TextEntry};
use tetrion::storage;
use tetrion::term::{GameView, TerminalRenderer, UiState, Viewport, MENU_ITEMS};
use tetrion::types::{GameCommand, GamePhase, MAX_NAME_LEN, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new(clock_seed());
    let mut ui = UiState::default();
    let saves_dir = PathBuf::from(storage::SAVE_DIR);
    let view = GameView::default();

    let mut force_render = true;
    let mut last_tick = Instant::now();

    loop {
        if session.take_redraw() || force_render {
            force_render = false;
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let mut fb = view.render(&session, &ui, Viewport::new(w, h));
            term.draw_swap(&mut fb)?;
        }

        if event::poll(Duration::from_millis(TICK_MS as u64))? {
            match event::read()? {
                Event::Key(key)
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    if handle_key(&mut session, &mut ui, &saves_dir, key) {
                        return Ok(());
                    }
                    force_render = true;
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    force_render = true;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick).as_millis() as u32;
        last_tick = now;
        session.tick(elapsed);
    }
}

/// Dispatches one keystroke according to the current phase. Returns true
/// when the app should quit.
fn handle_key(
    session: &mut GameSession,
    ui: &mut UiState,
    saves_dir: &Path,
    key: KeyEvent,
) -> bool {
    let in_text_entry = matches!(
        session.phase(),
        GamePhase::SavePrompt | GamePhase::LoadPrompt | GamePhase::RecordEntry
    );
    if input::quit_requested(&key, in_text_entry) {
        return true;
    }

    match session.phase() {
        GamePhase::Playing => {
            if let Some(command) = input::playing_command(key.code) {
                session.apply_command(command);
            }
        }
        GamePhase::Paused => {
            if let Some(command) = input::paused_command(key.code) {
                session.apply_command(command);
            }
        }
        GamePhase::MainMenu => handle_menu(session, ui, saves_dir, key),
        GamePhase::SavePrompt => match input::text_entry(key.code) {
            Some(TextEntry::Char(c)) => push_name_char(&mut ui.entry, c),
            Some(TextEntry::Backspace) => {
                ui.entry.pop();
            }
            Some(TextEntry::Submit) if !ui.entry.is_empty() => {
                let ok = storage::save_game(saves_dir, &ui.entry, &session.snapshot()).is_ok();
                session.finish_save(ok);
            }
            Some(TextEntry::Cancel) => session.resume(),
            _ => {}
        },
        GamePhase::LoadPrompt => match input::text_entry(key.code) {
            Some(TextEntry::Char(c)) => push_name_char(&mut ui.entry, c),
            Some(TextEntry::Backspace) => {
                ui.entry.pop();
            }
            Some(TextEntry::Submit) if !ui.entry.is_empty() => {
                match storage::load_game(saves_dir, &ui.entry) {
                    Ok(saved) => {
                        session.restore(saved);
                        session.finish_load(true);
                    }
                    Err(_) => {
                        ui.failed_name = ui.entry.clone();
                        session.finish_load(false);
                    }
                }
            }
            Some(TextEntry::Cancel) => session.set_phase(GamePhase::MainMenu),
            _ => {}
        },
        GamePhase::RecordEntry => match input::text_entry(key.code) {
            Some(TextEntry::Char(c)) => push_name_char(&mut ui.entry, c),
            Some(TextEntry::Backspace) => {
                ui.entry.pop();
            }
            Some(TextEntry::Submit) if !ui.entry.is_empty() => {
                let ok = storage::save_record(saves_dir, &ui.entry, session.score()).is_ok();
                session.finish_record(ok);
            }
            Some(TextEntry::Cancel) => session.set_phase(GamePhase::MainMenu),
            _ => {}
        },
        GamePhase::ConfirmRestart => match input::dialog_choice(key.code) {
            Some(DialogChoice::Confirm) => session.start_session(),
            Some(DialogChoice::Cancel) => session.resume(),
            None => {}
        },
        GamePhase::ConfirmMainMenu => match input::dialog_choice(key.code) {
            Some(DialogChoice::Confirm) => session.set_phase(GamePhase::MainMenu),
            Some(DialogChoice::Cancel) => session.resume(),
            None => {}
        },
        GamePhase::GameOver => match input::dialog_choice(key.code) {
            Some(DialogChoice::Confirm) => session.set_phase(GamePhase::RecordEntry),
            Some(DialogChoice::Cancel) => session.set_phase(GamePhase::MainMenu),
            None => {}
        },
        GamePhase::Success => {
            if input::dialog_choice(key.code) == Some(DialogChoice::Confirm) {
                session.acknowledge_success();
            }
        }
        GamePhase::LoadFailed => {
            if input::dialog_choice(key.code) == Some(DialogChoice::Confirm) {
                session.set_phase(GamePhase::LoadPrompt);
            }
        }
        GamePhase::SaveFailed => {
            if input::dialog_choice(key.code) == Some(DialogChoice::Confirm) {
                session.set_phase(GamePhase::MainMenu);
            }
        }
        GamePhase::Ranking | GamePhase::Help => {
            if input::back_requested(key.code) {
                session.restore_phase();
            }
        }
    }

    false
}

fn handle_menu(session: &mut GameSession, ui: &mut UiState, saves_dir: &Path, key: KeyEvent) {
    match input::menu_nav(key.code) {
        Some(MenuNav::Up) => {
            ui.menu_cursor = (ui.menu_cursor + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
        }
        Some(MenuNav::Down) => {
            ui.menu_cursor = (ui.menu_cursor + 1) % MENU_ITEMS.len();
        }
        Some(MenuNav::Select) => match ui.menu_cursor {
            0 => session.start_session(),
            1 => {
                session.apply_command(GameCommand::RequestLoad);
            }
            2 => {
                ui.records = storage::load_records(saves_dir);
                session.set_phase(GamePhase::Ranking);
            }
            3 => {
                session.apply_command(GameCommand::RequestHelp);
            }
            _ => {}
        },
        None => {}
    }
}

/// Name prompts share one buffer; its content survives across dialogs.
fn push_name_char(entry: &mut String, c: char) {
    if entry.chars().count() < MAX_NAME_LEN {
        entry.push(c);
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
