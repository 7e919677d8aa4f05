//! Game loop state: authoritative board, turn order and result

use tracing::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::GameConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::{BoardError, EngineError, GameError};
use crate::rules::{find_win_sequence, WinSequence};

/// Who sits in each seat
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum PlayMode {
    /// Two humans share the terminal
    Pvp,
    /// Human against the engine on `bot_symbol`
    #[default]
    Pvb,
    /// Engine against engine
    SelfPlay,
}

impl PlayMode {
    /// Whether the engine plays `side` when the configured bot symbol is `bot`.
    pub fn engine_plays(self, side: Stone, bot: Stone) -> bool {
        match self {
            PlayMode::Pvp => false,
            PlayMode::Pvb => side == bot,
            PlayMode::SelfPlay => true,
        }
    }
}

/// Game status after the last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Stone, line: WinSequence },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single game between two players (human or engine).
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Stone,
    status: GameStatus,
    history: Vec<(Pos, Stone)>,
}

impl Game {
    /// New game where O moves first.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Self::with_first_player(rows, cols, Stone::O)
    }

    pub fn with_first_player(rows: usize, cols: usize, first: Stone) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            to_move: first,
            status: GameStatus::InProgress,
            history: Vec::new(),
        })
    }

    /// Game laid out from the `[game]` config section.
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        let first = if config.human_first {
            config.bot_symbol.opponent()
        } else {
            config.bot_symbol
        };
        Self::with_first_player(config.rows, config.cols, first)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.history.last().map(|&(pos, _)| pos)
    }

    /// Place the side-to-move's stone at `pos` and update the status.
    pub fn play(&mut self, pos: Pos) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }

        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.board.rows() || col >= self.board.cols() {
            return Err(EngineError::OutOfBounds { row, col }.into());
        }
        if !self.board.is_empty(pos) {
            return Err(EngineError::InvalidCellRequest { row, col }.into());
        }

        let color = self.to_move;
        self.board.place_stone(pos, color);
        self.history.push((pos, color));
        debug!(%pos, %color, "stone placed");

        let line = find_win_sequence(&self.board, pos);
        if line.found {
            info!(winner = %color, "game won");
            self.status = GameStatus::Won {
                winner: color,
                line,
            };
        } else if self.board.is_full() {
            info!("game drawn");
            self.status = GameStatus::Draw;
        } else {
            self.to_move = color.opponent();
        }

        Ok(self.status)
    }

    /// Let `engine` choose and play the next move.
    ///
    /// On an empty board the engine has nothing to respond to, so the centre
    /// cell is played instead.
    pub fn play_bot(&mut self, engine: &mut AIEngine) -> Result<(Pos, Option<MoveResult>), GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if engine.symbol() != self.to_move {
            return Err(GameError::WrongTurn {
                expected: self.to_move,
            });
        }

        let (pos, result) = match engine.get_move_with_stats(&self.board) {
            Ok(result) => (result.best_move, Some(result)),
            Err(EngineError::NoMoveAvailable) if self.board.is_board_empty() => {
                (self.board.center(), None)
            }
            Err(e) => return Err(e.into()),
        };

        self.play(pos)?;
        Ok((pos, result))
    }
}
