//! Core session state machine.
//!
//! This module contains the `Session` wrapper that owns the board and
//! drives turn order, the move rejection error, and the snapshot handed
//! to presentation code.

use crate::board::{Board, GameResult, CELL_COUNT, GRID_SIZE};
use crate::player::{Player, Roster};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Reasons a move is rejected.
///
/// Rejections never mutate the session; presentation code is free to
/// ignore them, which makes stray clicks harmless no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("Game is over")]
    GameOver,

    #[error("Cell is already occupied")]
    CellOccupied,

    #[error("Cell index out of range")]
    OutOfRange,
}

/// Immutable view of a session for presentation code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// First player's display name
    pub player1: String,
    /// Second player's display name
    pub player2: String,
    /// Display name of the player whose turn it is
    pub current_player: String,
    /// Mark the next accepted move will place
    pub next_symbol: String,
    /// "" while in progress, "Draw" or "Win" once terminal
    pub result: String,
    /// Whether further moves are accepted
    pub is_game_over: bool,
}

/// A single two-player game from launch to terminal state.
///
/// The session exclusively owns its board. The symbol to place and the
/// player whose turn it is are tracked separately; both strictly
/// alternate on every accepted ply and stop advancing once the game is
/// over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    roster: Roster,
    /// Player whose turn it is
    current_player: Player,
    /// Symbol the next accepted move will place
    next_symbol: Player,
    /// Symbol recorded against each filled cell, for rendering
    filled: [Option<Player>; CELL_COUNT],
    result: GameResult,
    game_over: bool,
}

impl Session {
    /// Create a fresh session with placeholder player names
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            roster: Roster::default(),
            current_player: Player::First,
            next_symbol: Player::First,
            filled: [None; CELL_COUNT],
            result: GameResult::InProgress,
            game_over: false,
        }
    }

    /// Start a game with the given player names.
    ///
    /// Returns `false` without touching any state when either name is
    /// empty, so the caller can keep the user on its setup screen.
    /// On success the names are stored and the session is reset for a
    /// fresh game.
    pub fn launch(&mut self, player1: &str, player2: &str) -> bool {
        if player1.is_empty() || player2.is_empty() {
            debug!("launch rejected: missing player name");
            return false;
        }

        self.roster = Roster::new(player1, player2);
        self.reset();
        debug!(player1, player2, "session launched");
        true
    }

    /// Restore the initial state: empty board, no fill records, X to
    /// place, first player to act, game not over
    pub fn reset(&mut self) {
        self.board.reset();
        self.filled = [None; CELL_COUNT];
        self.current_player = Player::First;
        self.next_symbol = Player::First;
        self.result = GameResult::InProgress;
        self.game_over = false;
        debug!("session reset");
    }

    /// Attempt to place the next symbol at a cell index (0..8, row-major).
    ///
    /// An accepted move records the symbol for rendering, places the mark
    /// and, depending on the resulting evaluation, either alternates the
    /// current player and symbol or ends the game. A rejected move
    /// changes nothing.
    pub fn attempt_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.game_over {
            debug!(index, "move rejected: game over");
            return Err(MoveError::GameOver);
        }
        if index >= CELL_COUNT {
            debug!(index, "move rejected: index out of range");
            return Err(MoveError::OutOfRange);
        }

        let (row, col) = (index / GRID_SIZE, index % GRID_SIZE);
        if !self.board.is_empty(row, col) {
            debug!(index, "move rejected: cell occupied");
            return Err(MoveError::CellOccupied);
        }

        let symbol = self.next_symbol;
        self.filled[index] = Some(symbol);
        self.board.place(row, col, symbol);
        debug!(index, symbol = %symbol, "mark placed");

        match self.board.evaluate() {
            GameResult::InProgress => {
                self.current_player = self.current_player.opponent();
                self.next_symbol = self.next_symbol.opponent();
            }
            result @ (GameResult::Win(_) | GameResult::Draw) => {
                self.result = result;
                self.game_over = true;
                debug!(result = result.label(), "game over");
            }
            GameResult::Invalid => {
                // Unreachable when every placement goes through this method
                warn!("board evaluated to an impossible configuration");
            }
        }

        Ok(())
    }

    /// Check if a cell index holds a mark
    pub fn is_filled(&self, index: usize) -> bool {
        self.filled[index].is_some()
    }

    /// The mark at a cell index, or `None` for an empty cell.
    ///
    /// Callers rendering the grid check `is_filled` first.
    pub fn symbol_at(&self, index: usize) -> Option<&'static str> {
        self.filled[index].map(|player| player.mark())
    }

    /// The last computed result
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The winner, if the game finished with a completed line
    pub fn winner(&self) -> Option<Player> {
        if let GameResult::Win(player) = self.result {
            Some(player)
        } else {
            None
        }
    }

    /// Whether further moves are accepted
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The player whose turn it is
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The symbol the next accepted move will place
    pub fn next_symbol(&self) -> Player {
        self.next_symbol
    }

    /// The display name for a player
    pub fn player_name(&self, player: Player) -> &str {
        self.roster.name_of(player)
    }

    /// The board owned by this session
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Immutable snapshot for presentation code
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player1: self.roster.player1.clone(),
            player2: self.roster.player2.clone(),
            current_player: self.roster.name_of(self.current_player).to_string(),
            next_symbol: self.next_symbol.mark().to_string(),
            result: self.result.label().to_string(),
            is_game_over: self.game_over,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let session = Session::new();
        assert!(!session.is_game_over());
        assert_eq!(session.current_player(), Player::First);
        assert_eq!(session.next_symbol(), Player::First);
        assert_eq!(session.result(), GameResult::InProgress);
        assert!(!session.player_name(Player::First).is_empty());
        assert!(!session.player_name(Player::Second).is_empty());
    }

    #[test]
    fn test_accepted_move_alternates_player_and_symbol() {
        let mut session = Session::new();
        session.attempt_move(4).unwrap();
        assert_eq!(session.current_player(), Player::Second);
        assert_eq!(session.next_symbol(), Player::Second);
        assert_eq!(session.symbol_at(4), Some("X"));

        session.attempt_move(0).unwrap();
        assert_eq!(session.current_player(), Player::First);
        assert_eq!(session.next_symbol(), Player::First);
        assert_eq!(session.symbol_at(0), Some("O"));
    }

    #[test]
    fn test_out_of_range_move_is_rejected() {
        let mut session = Session::new();
        assert_eq!(session.attempt_move(9), Err(MoveError::OutOfRange));
        assert_eq!(session.snapshot(), Session::new().snapshot());
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_state_change() {
        let mut session = Session::new();
        session.attempt_move(4).unwrap();
        let before = session.snapshot();

        assert_eq!(session.attempt_move(4), Err(MoveError::CellOccupied));
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.symbol_at(4), Some("X"));
    }

    #[test]
    fn test_launch_requires_both_names() {
        let mut session = Session::new();
        let before = session.snapshot();

        assert!(!session.launch("", "Grace"));
        assert!(!session.launch("Ada", ""));
        assert_eq!(session.snapshot(), before);

        assert!(session.launch("Ada", "Grace"));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.player1, "Ada");
        assert_eq!(snapshot.player2, "Grace");
        assert_eq!(snapshot.current_player, "Ada");
    }

    #[test]
    fn test_symbol_at_empty_cell_is_none() {
        let session = Session::new();
        assert!(!session.is_filled(0));
        assert_eq!(session.symbol_at(0), None);
    }

    #[test]
    fn test_snapshot_reflects_progress() {
        let mut session = Session::new();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.next_symbol, "X");
        assert_eq!(snapshot.result, "");
        assert!(!snapshot.is_game_over);

        session.attempt_move(0).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.next_symbol, "O");
        assert_eq!(snapshot.current_player, snapshot.player2);
    }
}
