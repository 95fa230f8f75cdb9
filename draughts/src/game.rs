//! 回合与对局状态机

use std::collections::HashMap;

use gameboard::{Direction, Gameboard, Square, BOARD_SIZE};
use serde::{Deserialize, Serialize};

use crate::constants::{PIECES_PER_SIDE, SOLDIER_ROWS};
use crate::error::{DraughtsError, Result};
use crate::moves::{Move, MoveGenerator, MoveSet};
use crate::piece::{Color, Piece, Rank};

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gamestate {
    /// 对局进行中
    InProgress,
    /// 白方获胜
    WhiteWon,
    /// 黑方获胜
    BlackWon,
    /// 走法不合法（仅作为 make_move 的返回值，不是持久状态）
    InvalidMove,
}

/// 连跳状态
///
/// 完成一次跳吃后若同一棋子仍能继续跳，回合不交换，
/// 合法走法被锁定到该棋子。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Continuation {
    /// 无限制
    Free,
    /// 指定格子上的棋子必须继续跳吃
    MustContinue(Square),
}

/// 对局引擎
///
/// 持有权威的位置表（格子 -> 棋子）和棋盘占位存储，
/// 二者在每次变更时同步更新。由调用方独占持有，一局一个实例。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// 棋盘占位存储
    board: Gameboard<Piece>,
    /// 权威位置表
    chips: HashMap<Square, Piece>,
    /// 当前走子方
    turn: Color,
    /// 连跳锁定
    continuation: Continuation,
}

impl Game {
    /// 创建标准开局：每方 12 枚兵占据各自的三个横排，白方先行
    pub fn new() -> Self {
        let mut board = Gameboard::empty();
        let mut chips = HashMap::with_capacity(PIECES_PER_SIDE * 2);
        for square in Square::all() {
            let color = if square.rank() < SOLDIER_ROWS {
                Color::White
            } else if square.rank() >= BOARD_SIZE - SOLDIER_ROWS {
                Color::Black
            } else {
                continue;
            };
            let piece = Piece::new(color);
            board.place(square, piece);
            chips.insert(square, piece);
        }
        Self {
            board,
            chips,
            turn: Color::White,
            continuation: Continuation::Free,
        }
    }

    /// 从指定摆子创建对局（用于测试和摆谱）
    pub fn from_position<I>(pieces: I, turn: Color) -> Result<Self>
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Gameboard::empty();
        let mut chips = HashMap::new();
        for (square, piece) in pieces {
            if chips.insert(square, piece).is_some() {
                return Err(DraughtsError::SquareOccupied(square));
            }
            board.place(square, piece);
        }
        Ok(Self {
            board,
            chips,
            turn,
            continuation: Continuation::Free,
        })
    }

    /// 重置为标准开局
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// 当前走子方
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// 指定格子上的棋子
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.chips.get(&square).copied()
    }

    /// 连跳锁定的格子（若有）
    pub fn continuation(&self) -> Option<Square> {
        match self.continuation {
            Continuation::Free => None,
            Continuation::MustContinue(square) => Some(square),
        }
    }

    /// 遍历所有被占用的格子与棋子
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.chips.iter().map(|(&square, &piece)| (square, piece))
    }

    /// 指定格子是否有当前回合方的棋子
    pub fn square_has_current_player_piece(&self, square: Square) -> bool {
        self.chips
            .get(&square)
            .map_or(false, |piece| piece.color() == self.turn)
    }

    /// 指定格子上棋子的走法（不考虑连跳锁定）
    pub fn moves_for(&self, square: Square) -> MoveSet {
        MoveGenerator::piece_moves(&self.board, square, self.turn)
    }

    /// 当前回合方的全部合法走法
    ///
    /// 连跳期间只返回被锁定棋子的走法。否则合并所有己方棋子的走法，
    /// 全局应用强制吃子规则：只要任一棋子能跳吃，安静走法一律不合法。
    pub fn legal_moves(&self) -> MoveSet {
        if let Continuation::MustContinue(square) = self.continuation {
            return self.moves_for(square);
        }
        let mut all = MoveSet::new();
        for &square in self.chips.keys() {
            all.merge(self.moves_for(square));
        }
        all
    }

    /// 由当前局面推导对局状态：当前走子方无合法走法则对方获胜
    ///
    /// 终局不单独存储，对局结束后任何走法请求都会因为
    /// 当前方没有合法走法而返回 InvalidMove。
    pub fn gamestate(&self) -> Gamestate {
        if self.legal_moves().is_empty() {
            match self.turn {
                Color::White => Gamestate::BlackWon,
                Color::Black => Gamestate::WhiteWon,
            }
        } else {
            Gamestate::InProgress
        }
    }

    /// 执行一步走法，返回对局状态与被吃掉的格子
    ///
    /// 走法不在当前合法集合中时返回 Gamestate::InvalidMove，
    /// 不改动任何状态。
    pub fn make_move(&mut self, from: Square, to: Square) -> (Gamestate, Vec<Square>) {
        let mv = Move::new(from, to);
        if !self.legal_moves().contains(&mv) {
            tracing::debug!(%mv, "rejected illegal move");
            return (Gamestate::InvalidMove, Vec::new());
        }
        let was_capture = self.moves_for(from).can_capture();

        // 同步更新两份存储
        let piece = self.take_chip(from);
        self.chips.insert(to, piece);
        self.board.relocate(from, to);
        tracing::debug!(%mv, side = ?self.turn, "move applied");

        let mut removed = Vec::new();
        let mut turn_finished = true;
        if was_capture {
            removed = self.remove_jumped_chips(from, to);
            if self.moves_for(to).can_capture() {
                // 连跳：回合不交换，后续走法锁定到该棋子
                turn_finished = false;
                self.continuation = Continuation::MustContinue(to);
                tracing::debug!(square = %to, "capture chain continues");
            }
        }
        if turn_finished {
            self.turn = self.turn.opponent();
            self.continuation = Continuation::Free;
            self.promote_if_due(to);
        }
        (self.gamestate(), removed)
    }

    /// 到达对方底排的兵升变为后
    ///
    /// 只在回合结束时检查：跳入底排的兵以兵的身份参与连跳判定，
    /// 由于没有继续前进的跳吃，链条就此结束，回合交换后才升变。
    fn promote_if_due(&mut self, square: Square) {
        if let Some(piece) = self.chips.get_mut(&square) {
            if piece.rank() == Rank::Soldier && square.rank() == piece.color().promotion_rank() {
                piece.promote();
                let promoted = *piece;
                self.board.place(square, promoted);
                tracing::debug!(square = %square, "soldier promoted to queen");
            }
        }
    }

    /// 清除起止格子之间被跳过的所有棋子，返回它们所在的格子
    fn remove_jumped_chips(&mut self, from: Square, to: Square) -> Vec<Square> {
        let direction = match Direction::between(from, to) {
            Some(direction) => direction,
            // 合法的跳吃一定是对角线走法
            None => panic!("capture move {from} -> {to} is not diagonal"),
        };
        let mut removed = Vec::new();
        for square in direction.path_between(from, to) {
            if self.board.clear(square).is_some() {
                if self.chips.remove(&square).is_none() {
                    panic!("board/position desync: captured chip missing at {square}");
                }
                tracing::debug!(square = %square, "chip captured");
                removed.push(square);
            }
        }
        removed
    }

    /// 从权威位置表取走棋子；棋子不存在说明两份存储已失去同步
    fn take_chip(&mut self, square: Square) -> Piece {
        match self.chips.remove(&square) {
            Some(piece) => piece,
            None => panic!("board/position desync: no chip at {square}"),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
