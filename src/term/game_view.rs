//! GameView: maps a `GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Everything shares one grid coordinate system: the well occupies
//! x 0..=9, and the preview / hold boxes sit to its right around their
//! parking anchors, so pieces are drawn with a single transform no matter
//! where they live. Grid y grows upward and is flipped into screen rows.

use crate::core::GameSession;
use crate::storage::ScoreRecord;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    GamePhase, PieceColor, HOLD_BOX_X, HOLD_BOX_Y, MAX_NAME_LEN, MAX_Y, NEXT_BOX_Y, WELL_HEIGHT,
    WELL_WIDTH,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Entries of the main menu, in display order.
pub const MENU_ITEMS: [&str; 4] = ["New Game", "Load Game", "Ranking", "Help"];

/// Display state owned by the app layer: everything the view needs that
/// does not belong in the session itself.
#[derive(Debug, Default)]
pub struct UiState {
    /// Selected main menu entry.
    pub menu_cursor: usize,
    /// Text being typed into the current name prompt.
    pub entry: String,
    /// Name whose save file failed to load, for the error notice.
    pub failed_name: String,
    /// Leaderboard rows for the ranking screen.
    pub records: Vec<ScoreRecord>,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: CellStyle = CellStyle::plain();
const DOT: CellStyle = CellStyle::plain().fg(Rgb::new(90, 90, 100)).bg(WELL_BG).dimmed();
const LABEL: CellStyle = CellStyle::plain().bold();
const VALUE: CellStyle = CellStyle::plain().fg(Rgb::new(180, 180, 180));
const HINT: CellStyle = CellStyle::plain().fg(Rgb::new(130, 130, 140)).dimmed();
const TITLE: CellStyle = CellStyle::plain().fg(Rgb::new(240, 220, 80)).bold();
const SELECTED: CellStyle = CellStyle::plain().fg(Rgb::new(0, 0, 0)).bg(Rgb::new(200, 200, 200));
const ENTRY_FIELD: CellStyle = CellStyle::plain().fg(Rgb::new(240, 240, 240)).bg(Rgb::new(60, 60, 70));

// Box frames span 5 grid columns centered on the parking anchor.
const BOX_LEFT: i8 = HOLD_BOX_X - 2;
const BOX_CELLS: u16 = 5;

/// Renders the session; board cells are drawn 2 terminal columns wide.
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render the session and display state into a fresh framebuffer.
    pub fn render(&self, session: &GameSession, ui: &UiState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let well_w = WELL_WIDTH as u16 * self.cell_w + 2;
        let well_h = WELL_HEIGHT as u16 + 2;
        let panel_w = (BOX_CELLS + 1) * self.cell_w + 2;
        let origin_x = viewport.width.saturating_sub(well_w + panel_w) / 2;
        let origin_y = viewport.height.saturating_sub(well_h) / 2;

        self.draw_well(&mut fb, session, origin_x, origin_y);
        self.draw_piece_boxes(&mut fb, session, origin_x, origin_y);
        self.draw_stats(&mut fb, session, origin_x, origin_y);
        if matches!(session.phase(), GamePhase::Playing | GamePhase::Paused) {
            fb.put_str(
                origin_x,
                origin_y + well_h,
                "A/D move  W rotate  F/S drop  E hold  P pause",
                HINT,
            );
        }

        match session.phase() {
            GamePhase::Playing => {}
            GamePhase::MainMenu => self.draw_menu(&mut fb, ui, viewport),
            GamePhase::Paused => {
                self.draw_dialog(&mut fb, viewport, &["Game paused", "", "P resume"]);
            }
            GamePhase::SavePrompt | GamePhase::LoadPrompt | GamePhase::RecordEntry => {
                self.draw_name_prompt(&mut fb, ui, viewport);
            }
            GamePhase::ConfirmRestart => {
                self.draw_dialog(
                    &mut fb,
                    viewport,
                    &["Discard to start a new game?", "", "Y Ok    N Cancel"],
                );
            }
            GamePhase::ConfirmMainMenu => {
                self.draw_dialog(
                    &mut fb,
                    viewport,
                    &["Back to the main window?", "", "Y Ok    N Cancel"],
                );
            }
            GamePhase::Success => {
                self.draw_dialog(&mut fb, viewport, &["Operation successful.", "", "Enter Ok"]);
            }
            GamePhase::LoadFailed => {
                let notice = format!(
                    "Record \"{}\" doesn't exist or got damaged.",
                    ui.failed_name
                );
                self.draw_dialog(&mut fb, viewport, &[notice.as_str(), "", "Enter Ok"]);
            }
            GamePhase::SaveFailed => {
                self.draw_dialog(&mut fb, viewport, &["Failed to save game data.", "", "Enter Ok"]);
            }
            GamePhase::GameOver => {
                let notice = format!("You got {} points! Save record?", session.score());
                self.draw_dialog(&mut fb, viewport, &[notice.as_str(), "", "Y Ok    N Cancel"]);
            }
            GamePhase::Ranking => self.draw_ranking(&mut fb, ui, viewport),
            GamePhase::Help => self.draw_help(&mut fb, viewport),
        }

        fb
    }

    /// Grid position to screen position; `None` when above the well top.
    fn project(&self, origin_x: u16, origin_y: u16, x: i8, y: i8) -> Option<(u16, u16)> {
        if y > MAX_Y || x < 0 || y < 0 {
            return None;
        }
        let px = origin_x + 1 + x as u16 * self.cell_w;
        let py = origin_y + 1 + (MAX_Y - y) as u16;
        Some((px, py))
    }

    fn draw_well(&self, fb: &mut FrameBuffer, session: &GameSession, origin_x: u16, origin_y: u16) {
        let well_w = WELL_WIDTH as u16 * self.cell_w + 2;
        let well_h = WELL_HEIGHT as u16 + 2;
        draw_frame(fb, origin_x, origin_y, well_w, well_h, BORDER);

        for y in 0..WELL_HEIGHT as i8 {
            for x in 0..WELL_WIDTH as i8 {
                match session.board().get(x, y).flatten() {
                    Some(color) => self.draw_block(fb, origin_x, origin_y, x, y, color),
                    None => {
                        if let Some((px, py)) = self.project(origin_x, origin_y, x, y) {
                            fb.put_char(px, py, '·', DOT);
                            fb.put_char(px + 1, py, ' ', DOT);
                        }
                    }
                }
            }
        }

        if let Some(piece) = session.falling() {
            for cell in piece.cells() {
                self.draw_block(fb, origin_x, origin_y, cell.x, cell.y, piece.color);
            }
        }
    }

    fn draw_piece_boxes(
        &self,
        fb: &mut FrameBuffer,
        session: &GameSession,
        origin_x: u16,
        origin_y: u16,
    ) {
        self.draw_box_frame(fb, origin_x, origin_y, NEXT_BOX_Y, "NEXT");
        self.draw_box_frame(fb, origin_x, origin_y, HOLD_BOX_Y, "HOLD");

        for piece in [session.preview(), session.held()].into_iter().flatten() {
            for cell in piece.cells() {
                self.draw_block(fb, origin_x, origin_y, cell.x, cell.y, piece.color);
            }
        }
    }

    /// Frame around the 5x5 grid region centered on a parking anchor,
    /// with its label on the top border.
    fn draw_box_frame(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        anchor_y: i8,
        label: &str,
    ) {
        let left = origin_x + 1 + BOX_LEFT as u16 * self.cell_w - 1;
        let top = origin_y + 1 + (MAX_Y - anchor_y - 2) as u16 - 1;
        let w = BOX_CELLS * self.cell_w + 2;
        let h = 5 + 2;
        draw_frame(fb, left, top, w, h, BORDER);
        fb.put_str(left + 2, top, label, LABEL);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i8,
        y: i8,
        color: PieceColor,
    ) {
        let Some((px, py)) = self.project(origin_x, origin_y, x, y) else {
            return;
        };
        let style = CellStyle::plain().fg(palette(color)).bg(WELL_BG).bold();
        for dx in 0..self.cell_w {
            fb.put_char(px + dx, py, '█', style);
        }
    }

    fn draw_stats(&self, fb: &mut FrameBuffer, session: &GameSession, origin_x: u16, origin_y: u16) {
        let panel_x = origin_x + 1 + BOX_LEFT as u16 * self.cell_w;
        // Below the hold box frame.
        let mut y = origin_y + 1 + (MAX_Y - HOLD_BOX_Y + 3) as u16 + 1;

        for (label, value) in [
            ("SCORE", session.score()),
            ("LEVEL", session.level()),
            ("LINES", session.lines()),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_str(panel_x + 6, y, &value.to_string(), VALUE);
            y += 2;
        }
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, ui: &UiState, viewport: Viewport) {
        let w = 24;
        let h = MENU_ITEMS.len() as u16 + 6;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        draw_frame(fb, x, y, w, h, BORDER);
        fill_interior(fb, x, y, w, h);
        fb.put_str_centered(x, y + 1, w, "T E T R I O N", TITLE);

        for (i, item) in MENU_ITEMS.iter().enumerate() {
            let style = if i == ui.menu_cursor { SELECTED } else { VALUE };
            let marker = if i == ui.menu_cursor { "> " } else { "  " };
            fb.put_str(x + 4, y + 3 + i as u16, &format!("{}{}", marker, item), style);
        }
        fb.put_str_centered(x, y + h - 2, w, "Q quit", HINT);
    }

    fn draw_name_prompt(&self, fb: &mut FrameBuffer, ui: &UiState, viewport: Viewport) {
        let field: String = format!("{:<width$}", ui.entry, width = MAX_NAME_LEN + 1);
        let w = 30;
        let h = 7;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        draw_frame(fb, x, y, w, h, BORDER);
        fill_interior(fb, x, y, w, h);
        fb.put_str_centered(x, y + 1, w, "Enter your name:", VALUE);
        let field_x = x + (w - field.len() as u16) / 2;
        fb.put_str(field_x, y + 3, &field, ENTRY_FIELD);
        fb.put_char(field_x + ui.entry.chars().count() as u16, y + 3, '_', ENTRY_FIELD);
        fb.put_str_centered(x, y + 5, w, "Enter Ok    Esc Cancel", HINT);
    }

    fn draw_ranking(&self, fb: &mut FrameBuffer, ui: &UiState, viewport: Viewport) {
        let rows = ui.records.len().min(10);
        let w = 30;
        let h = rows.max(1) as u16 + 6;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        draw_frame(fb, x, y, w, h, BORDER);
        fill_interior(fb, x, y, w, h);
        fb.put_str_centered(x, y + 1, w, "RANKING", TITLE);

        if ui.records.is_empty() {
            fb.put_str_centered(x, y + 3, w, "No records yet.", VALUE);
        }
        for (i, record) in ui.records.iter().take(rows).enumerate() {
            let line = format!("{:>2}. {:<11} {:>6}", i + 1, record.name, record.score);
            fb.put_str(x + 2, y + 3 + i as u16, &line, VALUE);
        }
        fb.put_str_centered(x, y + h - 2, w, "Esc Back", HINT);
    }

    fn draw_help(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let lines = [
            "A / Left    move left",
            "D / Right   move right",
            "W / Up      rotate",
            "F / Down    soft drop",
            "S           hard drop",
            "E           hold piece",
            "P           pause",
            "K           save game",
            "N           restart",
            "M           main menu",
            "Q           quit",
        ];
        let w = 32;
        let h = lines.len() as u16 + 6;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        draw_frame(fb, x, y, w, h, BORDER);
        fill_interior(fb, x, y, w, h);
        fb.put_str_centered(x, y + 1, w, "HELP", TITLE);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str(x + 3, y + 3 + i as u16, line, VALUE);
        }
        fb.put_str_centered(x, y + h - 2, w, "Esc Back", HINT);
    }

    /// Bordered box sized to its longest line, text centered per line.
    fn draw_dialog(&self, fb: &mut FrameBuffer, viewport: Viewport, lines: &[&str]) {
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let w = longest + 6;
        let h = lines.len() as u16 + 4;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;

        draw_frame(fb, x, y, w, h, BORDER);
        fill_interior(fb, x, y, w, h);
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(x, y + 2 + i as u16, w, line, VALUE);
        }
    }
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn fill_interior(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    fb.fill_rect(x + 1, y + 1, w - 2, h - 2, ' ', CellStyle::plain());
}

fn palette(color: PieceColor) -> Rgb {
    match color {
        PieceColor::LightGray => Rgb::new(211, 211, 211),
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Cyan => Rgb::new(80, 220, 220),
    }
}
