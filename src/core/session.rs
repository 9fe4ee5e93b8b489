//! Session module - the game flow controller
//!
//! Ties the core components together: board, pieces, RNG and scoring.
//! The session owns the phase machine, the score/level/line counters,
//! the hold protocol and the fall timer, and drives each round from
//! spawn to lock. The engine side (board and pieces) never calls back
//! in; the session reacts to its return values.

use crate::core::pieces::{self, Piece};
use crate::core::rng::PieceGenerator;
use crate::core::scoring;
use crate::core::snapshot::SavedGame;
use crate::core::Board;
use crate::types::{Collision, GameCommand, GamePhase, BASE_FALL_MS};

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    falling: Option<Piece>,
    preview: Option<Piece>,
    held: Option<Piece>,
    generator: PieceGenerator,
    score: u32,
    level: u32,
    lines: u32,
    /// Current fall period; shrinks on level-up
    fall_interval_ms: u32,
    /// Time accumulated toward the next gravity step
    fall_elapsed_ms: u32,
    /// The piece now falling came out of the hold slot this cycle
    just_released: bool,
    /// Routes the round begun by a hold swap to the held piece
    skip_hold_round: bool,
    phase: GamePhase,
    prev_phase: GamePhase,
    /// Raised by every mutation, consumed by the renderer
    needs_redraw: bool,
}

impl GameSession {
    /// Create a session sitting at the main menu
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            falling: None,
            preview: None,
            held: None,
            generator: PieceGenerator::new(seed),
            score: 0,
            level: 1,
            lines: 0,
            fall_interval_ms: BASE_FALL_MS,
            fall_elapsed_ms: 0,
            just_released: false,
            skip_hold_round: false,
            phase: GamePhase::MainMenu,
            prev_phase: GamePhase::MainMenu,
            needs_redraw: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn falling(&self) -> Option<Piece> {
        self.falling
    }

    pub fn preview(&self) -> Option<Piece> {
        self.preview
    }

    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn prev_phase(&self) -> GamePhase {
        self.prev_phase
    }

    /// Take and clear the redraw signal
    pub fn take_redraw(&mut self) -> bool {
        let dirty = self.needs_redraw;
        self.needs_redraw = false;
        dirty
    }

    fn touch(&mut self) {
        self.needs_redraw = true;
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_falling(&mut self, piece: Piece) {
        self.falling = Some(piece);
    }

    /// Reset everything and begin a fresh game
    pub fn start_session(&mut self) {
        self.board.clear();
        self.falling = None;
        self.held = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.fall_interval_ms = BASE_FALL_MS;
        self.fall_elapsed_ms = 0;
        self.just_released = false;
        self.skip_hold_round = false;
        self.set_phase(GamePhase::Playing);
        self.generate_preview();
        self.begin_round();
    }

    fn generate_preview(&mut self) {
        let mut piece = self.generator.next_piece();
        piece.park_in_next_box();
        self.preview = Some(piece);
    }

    /// Begin a round: resolve which piece falls next, spawn it, detect
    /// game over, then run the level-up check.
    ///
    /// The hold flags route the promotion. A swap sets both flags and
    /// calls in here at once, so the deferral case hands the held piece
    /// straight into play; the release flag survives until the next
    /// natural round, which then promotes the swapped-out piece waiting
    /// in the preview slot.
    pub fn begin_round(&mut self) {
        if self.just_released && self.skip_hold_round {
            self.falling = self.held.take();
            self.skip_hold_round = false;
        } else if self.just_released {
            self.falling = self.preview.take();
            self.just_released = false;
            self.generate_preview();
        } else {
            self.falling = self.preview.take();
            self.generate_preview();
        }

        debug_assert!(self.falling.is_some(), "round began without a piece");

        if let Some(piece) = self.falling.as_mut() {
            piece.move_to_spawn();
        }
        if let Some(piece) = self.falling.as_ref() {
            if self.board.collision_check(piece) == Collision::Collided {
                self.game_over();
            }
        }

        if scoring::should_level_up(self.level, self.lines) {
            self.level_up();
        }
        self.touch();
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.fall_interval_ms = scoring::next_fall_interval(self.fall_interval_ms);
        self.fall_elapsed_ms = 0;
    }

    /// Award points for cleared lines and bump the line counter
    pub fn add_score(&mut self, cleared: u32) {
        self.score += scoring::score_for_lines(cleared);
        self.lines += cleared;
    }

    /// Move the falling piece into or out of the hold slot.
    ///
    /// With the hold slot empty the falling piece parks there and the
    /// round restarts with the preview. With the slot occupied the two
    /// swap: the falling piece takes over the preview slot (the old
    /// preview is dropped) and the held piece spawns immediately, with
    /// hold locked out until the swapped-out piece enters play. Both
    /// paths force an immediate round transition.
    pub fn toggle_hold(&mut self) -> bool {
        if self.just_released {
            return false;
        }
        let Some(mut falling) = self.falling.take() else {
            return false;
        };

        if self.held.is_none() {
            falling.park_in_hold_box();
            self.held = Some(falling);
            self.just_released = false;
        } else {
            falling.park_in_next_box();
            self.preview = Some(falling);
            self.just_released = true;
            self.skip_hold_round = true;
        }

        self.begin_round();
        true
    }

    /// Shift the falling piece sideways, undoing on any collision
    pub(crate) fn shift_falling(&mut self, dx: i8) -> bool {
        let Some(piece) = self.falling.as_mut() else {
            return false;
        };
        piece.translate(dx, 0);
        if self.board.collision_check(piece) != Collision::Free {
            piece.translate(-dx, 0);
            return false;
        }
        self.touch();
        true
    }

    /// One gravity step. A rejected step means the piece rests on
    /// something: it locks where it was, lines clear, and the next
    /// round begins. This is the only path that locks a piece.
    pub(crate) fn step_down(&mut self) -> bool {
        let Some(piece) = self.falling.as_mut() else {
            return false;
        };
        piece.translate(0, -1);
        if self.board.collision_check(piece) == Collision::Collided {
            piece.translate(0, 1);
            self.settle();
        } else {
            self.touch();
        }
        true
    }

    /// Drop straight down to rest and lock immediately
    pub(crate) fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.falling.as_mut() else {
            return false;
        };
        loop {
            piece.translate(0, -1);
            if self.board.collision_check(piece) != Collision::Free {
                break;
            }
        }
        piece.translate(0, 1);
        self.settle();
        true
    }

    fn settle(&mut self) {
        let Some(piece) = self.falling.take() else {
            return;
        };
        self.board.lock(&piece);
        let cleared = self.board.clear_full_lines();
        self.add_score(cleared.len() as u32);
        self.begin_round();
    }

    /// Rotate the falling piece, kicking off side walls when possible
    pub(crate) fn rotate_falling(&mut self) -> bool {
        let board = &self.board;
        let Some(piece) = self.falling.as_mut() else {
            return false;
        };
        let rotated = pieces::try_rotate(piece, |p| board.collision_check(p));
        if rotated {
            self.touch();
        }
        rotated
    }

    /// Feed elapsed time into the fall timer. Only the Playing phase
    /// accumulates; each full interval triggers one gravity step.
    /// Returns true when the board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != GamePhase::Playing {
            return false;
        }
        self.fall_elapsed_ms += elapsed_ms;
        if self.fall_elapsed_ms < self.fall_interval_ms {
            return false;
        }
        self.fall_elapsed_ms = 0;
        self.step_down()
    }

    /// Switch phase, remembering the outgoing one
    pub fn set_phase(&mut self, phase: GamePhase) {
        self.prev_phase = self.phase;
        self.phase = phase;
        self.touch();
    }

    /// Return to the remembered phase. The slot itself is left alone,
    /// this is a single step back, not an undo stack.
    pub fn restore_phase(&mut self) {
        self.phase = self.prev_phase;
        self.touch();
    }

    pub fn pause(&mut self) {
        self.set_phase(GamePhase::Paused);
    }

    /// Resume play; the next fall is a full interval away
    pub fn resume(&mut self) {
        self.set_phase(GamePhase::Playing);
        self.fall_elapsed_ms = 0;
    }

    fn game_over(&mut self) {
        self.set_phase(GamePhase::GameOver);
    }

    /// Map a save attempt's outcome to the follow-up dialog
    pub fn finish_save(&mut self, ok: bool) {
        self.set_phase(if ok {
            GamePhase::Success
        } else {
            GamePhase::SaveFailed
        });
    }

    /// Map a load attempt's outcome to the follow-up dialog
    pub fn finish_load(&mut self, ok: bool) {
        self.set_phase(if ok {
            GamePhase::Success
        } else {
            GamePhase::LoadFailed
        });
    }

    /// Map a leaderboard insert's outcome to the follow-up dialog
    pub fn finish_record(&mut self, ok: bool) {
        self.set_phase(if ok {
            GamePhase::Success
        } else {
            GamePhase::SaveFailed
        });
    }

    /// Close the success notice: back to the menu after a record save,
    /// otherwise back into the game
    pub fn acknowledge_success(&mut self) {
        if self.prev_phase == GamePhase::RecordEntry {
            self.set_phase(GamePhase::MainMenu);
        } else {
            self.resume();
        }
    }

    /// Dispatch a player command against the current phase
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match (self.phase, command) {
            (GamePhase::Playing, GameCommand::MoveLeft) => self.shift_falling(-1),
            (GamePhase::Playing, GameCommand::MoveRight) => self.shift_falling(1),
            (GamePhase::Playing, GameCommand::SoftDrop) => self.step_down(),
            (GamePhase::Playing, GameCommand::HardDrop) => self.hard_drop(),
            (GamePhase::Playing, GameCommand::Rotate) => self.rotate_falling(),
            (GamePhase::Playing, GameCommand::ToggleHold) => self.toggle_hold(),
            (GamePhase::Playing, GameCommand::Pause) => {
                self.pause();
                true
            }
            (GamePhase::Paused, GameCommand::Pause | GameCommand::Resume) => {
                self.resume();
                true
            }
            (GamePhase::Playing, GameCommand::RequestSave) => {
                self.pause();
                self.set_phase(GamePhase::SavePrompt);
                true
            }
            (GamePhase::Playing, GameCommand::RequestRestart) => {
                self.pause();
                self.set_phase(GamePhase::ConfirmRestart);
                true
            }
            (GamePhase::Playing, GameCommand::RequestMainMenu) => {
                self.pause();
                self.set_phase(GamePhase::ConfirmMainMenu);
                true
            }
            (GamePhase::Playing, GameCommand::RequestHelp) => {
                self.pause();
                self.set_phase(GamePhase::Help);
                true
            }
            (GamePhase::MainMenu, GameCommand::RequestLoad) => {
                self.set_phase(GamePhase::LoadPrompt);
                true
            }
            (GamePhase::MainMenu, GameCommand::RequestHelp) => {
                self.set_phase(GamePhase::Help);
                true
            }
            _ => false,
        }
    }

    /// Capture everything a save file needs
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            board: self.board.clone(),
            falling: self.falling,
            preview: self.preview,
            held: self.held,
            score: self.score,
            level: self.level,
            lines: self.lines,
            fall_interval_ms: self.fall_interval_ms,
            just_released: self.just_released,
            skip_hold_round: self.skip_hold_round,
        }
    }

    /// Restore a saved game. The phase is left to the caller (a load
    /// lands in the success dialog and resumes from there), and the
    /// fall timer restarts at the restored interval.
    pub fn restore(&mut self, saved: SavedGame) {
        self.board = saved.board;
        self.falling = saved.falling;
        self.preview = saved.preview;
        self.held = saved.held;
        self.score = saved.score;
        self.level = saved.level;
        self.lines = saved.lines;
        self.fall_interval_ms = saved.fall_interval_ms;
        self.fall_elapsed_ms = 0;
        self.just_released = saved.just_released;
        self.skip_hold_round = saved.skip_hold_round;
        self.touch();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
