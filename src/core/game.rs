//! Game module - the engine finite-state machine.
//!
//! The engine owns all mutable game state and is driven by exactly two calls
//! per driver-loop iteration: `handle` (feed a command) and `update` (advance
//! gravity against the wall clock). Everything a renderer needs comes back out
//! through `snapshot`.
//!
//! Spawn, shift, rotate, and attach are internal operations of the `Moving`
//! state; they never leave the grid in an intermediate state. Candidate piece
//! positions are validated against the locked field and committed only when
//! legal, so a rejected move is a plain `false`, not an error.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::core::pieces::{pattern, ActivePiece};
use crate::core::scoring::{drop_interval_ms, level_for_score, line_clear_score};
use crate::core::snapshot::GameSnapshot;
use crate::core::Board;
use crate::storage::HighScoreStore;
use crate::types::{Command, PieceKind, BASE_DROP_MS, FIELD_HEIGHT};

/// Externally observable FSM states.
///
/// Spawn/shift/attach are sub-steps of a `Moving` update, not states of their
/// own; session termination is a flag rather than a state so that every state
/// can reach it uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Initial state, awaiting the first Start command
    Start,
    /// Active piece falling and controllable
    Moving,
    /// Input suspended except resume and terminate
    Pause,
    /// Awaiting restart or quit
    GameOver,
}

/// The game engine: FSM, movement, rotation, line clears, and scoring.
#[derive(Debug)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<PieceKind>,
    phase: Phase,
    terminated: bool,
    score: u32,
    high_score: u32,
    level: u32,
    speed: u32,
    last_tick: Instant,
    update_interval: Duration,
    rng: StdRng,
    store: HighScoreStore,
}

impl Game {
    /// Create an engine with the persisted high score loaded from `store`
    pub fn new(store: HighScoreStore) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    /// Create an engine with a deterministic piece sequence
    pub fn with_seed(store: HighScoreStore, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(store: HighScoreStore, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            phase: Phase::Start,
            terminated: false,
            score: 0,
            high_score: store.load(),
            level: 0,
            speed: 0,
            last_tick: Instant::now(),
            update_interval: Duration::from_millis(BASE_DROP_MS),
            rng,
            store,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Feed one player command into the FSM
    pub fn handle(&mut self, command: Command) {
        if self.terminated {
            return;
        }
        match self.phase {
            Phase::Start => match command {
                Command::Start => self.begin(),
                Command::Terminate => self.terminate(),
                _ => {}
            },
            Phase::Moving => match command {
                Command::Left => {
                    self.try_shift(-1, 0);
                }
                Command::Right => {
                    self.try_shift(1, 0);
                }
                Command::Down => self.drop_active(),
                Command::Rotate => {
                    self.try_rotate();
                }
                Command::Pause => self.phase = Phase::Pause,
                Command::Terminate => self.terminate(),
                Command::Start => {}
            },
            Phase::Pause => match command {
                Command::Pause => {
                    // Re-anchor the gravity clock so time spent paused does
                    // not convert into an instant drop on resume.
                    self.last_tick = Instant::now();
                    self.phase = Phase::Moving;
                }
                Command::Terminate => self.terminate(),
                _ => {}
            },
            Phase::GameOver => match command {
                Command::Start => {
                    self.reset();
                    self.begin();
                }
                Command::Terminate => self.terminate(),
                _ => {}
            },
        }
    }

    /// Advance the engine against the current wall clock
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Advance the engine as if the wall clock read `now`.
    ///
    /// Gravity only runs in `Moving`: once the configured interval has elapsed
    /// since the last successful tick, the piece shifts down one row, or
    /// attaches if it cannot.
    pub fn update_at(&mut self, now: Instant) {
        if self.phase != Phase::Moving {
            return;
        }
        if now.duration_since(self.last_tick) < self.update_interval {
            return;
        }
        self.last_tick = now;
        self.step_down();
    }

    /// Read-only snapshot for renderers; reports the end sentinel once the
    /// session has been terminated.
    pub fn snapshot(&self) -> GameSnapshot {
        if self.terminated {
            return GameSnapshot {
                field: None,
                next: None,
                score: self.score,
                high_score: self.high_score,
                level: self.level,
                speed: self.speed,
                paused: false,
            };
        }

        let mut field = self.board.to_grid();
        if let Some(piece) = self.active {
            // Overlay the falling piece's visible cells.
            let p = piece.pattern();
            for (dx, dy) in crate::core::pieces::pattern_cells(&p) {
                let x = piece.x + dx;
                let y = piece.y + dy;
                if y >= 0 && y < FIELD_HEIGHT as i8 {
                    field[y as usize][x as usize] = 1;
                }
            }
        }

        GameSnapshot {
            field: Some(field),
            next: self.next.map(|kind| pattern(kind, 0)),
            score: self.score,
            high_score: self.high_score,
            level: self.level,
            speed: self.speed,
            paused: self.phase == Phase::Pause,
        }
    }

    /// Start (or restart) play: anchor the gravity clock and spawn
    fn begin(&mut self) {
        self.last_tick = Instant::now();
        self.spawn();
        self.phase = Phase::Moving;
    }

    /// Clear the session back to its initial counters after a game over
    fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.level = 0;
        self.speed = 0;
        self.update_interval = Duration::from_millis(BASE_DROP_MS);
    }

    /// Persist the high score and mark the session ended
    fn terminate(&mut self) {
        self.store.save(self.high_score).ok();
        self.terminated = true;
    }

    /// Promote the lookahead to the active piece and roll a fresh lookahead.
    ///
    /// On the very first spawn the lookahead is still empty, so two shapes are
    /// rolled: the renderer never sees an empty preview.
    fn spawn(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.random_kind(),
        };
        self.active = Some(ActivePiece::spawn(kind));
        self.next = Some(self.random_kind());
    }

    /// Uniform over the 7 variants; immediate repeats are possible
    fn random_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }

    /// Try to move the active piece by (dx, dy); false leaves state unchanged
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let moved = ActivePiece {
            x: piece.x + dx,
            y: piece.y + dy,
            ..piece
        };
        if self.board.fits(&moved.pattern(), moved.x, moved.y) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Try the next rotation index; false leaves rotation unchanged
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };
        let rotated = ActivePiece {
            rotation: (piece.rotation + 1) % 4,
            ..piece
        };
        if self.board.fits(&rotated.pattern(), rotated.x, rotated.y) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// Drop the piece to its lowest legal position by repeated single steps.
    ///
    /// Attachment is left to the next gravity tick, whose rejected shift
    /// triggers it; the piece stays controllable until then.
    fn drop_active(&mut self) {
        while self.try_shift(0, 1) {}
    }

    /// One gravity step: shift down, or attach when the shift is rejected
    fn step_down(&mut self) {
        if !self.try_shift(0, 1) {
            self.attach();
        }
    }

    /// Merge the active piece into the field, clear full rows, score, and
    /// either end the game or spawn the next piece.
    fn attach(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };
        self.board.attach(&piece.pattern(), piece.x, piece.y);

        let cleared = self.board.collapse_full_rows();
        self.score += line_clear_score(cleared.len());
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        if !cleared.is_empty() {
            self.level = level_for_score(self.score);
            self.speed = self.level;
            self.update_interval = Duration::from_millis(drop_interval_ms(self.speed));
        }

        // A piece that locks while still overlapping the top row ends the game.
        if piece.lowest_row() <= 0 {
            self.phase = Phase::GameOver;
        } else {
            self.spawn();
        }
    }
}
