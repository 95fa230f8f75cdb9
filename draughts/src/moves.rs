//! 走法生成

use std::collections::HashSet;
use std::fmt;

use gameboard::{Direction, Gameboard, Square};
use serde::{Deserialize, Serialize};

use crate::piece::{Color, Piece, Rank};

/// 走法（起点 -> 终点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 起始格子
    pub from: Square,
    /// 目标格子
    pub to: Square,
}

impl Move {
    /// 创建新走法
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// 走法集合
///
/// 用变体区分安静走法与跳吃：只要出现跳吃，已积累的安静走法一律丢弃，
/// 之后的安静走法也不再接受。这样"能吃却混着安静走法"的状态不可表示。
/// Capture 变体按构造保证非空。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSet {
    /// 安静走法（可为空）
    Quiet(HashSet<Move>),
    /// 跳吃走法
    Capture(HashSet<Move>),
}

impl MoveSet {
    /// 创建空集合
    pub fn new() -> Self {
        MoveSet::Quiet(HashSet::new())
    }

    /// 集合是否全部由跳吃组成
    pub fn can_capture(&self) -> bool {
        matches!(self, MoveSet::Capture(_))
    }

    /// 集合中的走法
    pub fn moves(&self) -> &HashSet<Move> {
        match self {
            MoveSet::Quiet(moves) | MoveSet::Capture(moves) => moves,
        }
    }

    /// 取出集合中的走法
    pub fn into_moves(self) -> HashSet<Move> {
        match self {
            MoveSet::Quiet(moves) | MoveSet::Capture(moves) => moves,
        }
    }

    /// 是否包含指定走法
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves().contains(mv)
    }

    /// 集合是否为空
    pub fn is_empty(&self) -> bool {
        self.moves().is_empty()
    }

    /// 走法数量
    pub fn len(&self) -> usize {
        self.moves().len()
    }

    /// 加入安静走法；已存在跳吃时被忽略
    pub fn insert_quiet(&mut self, mv: Move) {
        if let MoveSet::Quiet(moves) = self {
            moves.insert(mv);
        }
    }

    /// 加入跳吃走法；首个跳吃会清空已积累的安静走法
    pub fn insert_capture(&mut self, mv: Move) {
        match self {
            MoveSet::Capture(moves) => {
                moves.insert(mv);
            }
            MoveSet::Quiet(_) => {
                let mut moves = HashSet::new();
                moves.insert(mv);
                *self = MoveSet::Capture(moves);
            }
        }
    }

    /// 合并另一个集合，保持同样的跳吃优先规则
    pub fn merge(&mut self, other: MoveSet) {
        match other {
            MoveSet::Capture(theirs) => match self {
                MoveSet::Capture(mine) => mine.extend(theirs),
                MoveSet::Quiet(_) => *self = MoveSet::Capture(theirs),
            },
            MoveSet::Quiet(theirs) => {
                if let MoveSet::Quiet(mine) = self {
                    mine.extend(theirs);
                }
            }
        }
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::new()
    }
}

/// 走法生成器
pub struct MoveGenerator;

impl MoveGenerator {
    /// 生成指定格子上棋子的走法
    ///
    /// 空格子或非当前回合方的棋子返回空集合。
    pub fn piece_moves(board: &Gameboard<Piece>, square: Square, turn: Color) -> MoveSet {
        let piece = match board.content(square) {
            Some(piece) if piece.color() == turn => *piece,
            _ => return MoveSet::new(),
        };

        let mut moves = MoveSet::new();
        match piece.rank() {
            Rank::Soldier => Self::soldier_moves(board, square, turn, &mut moves),
            Rank::Queen => Self::queen_moves(board, square, turn, &mut moves),
        }
        moves
    }

    /// 生成兵的走法
    ///
    /// 只检查本方的两个前进方向：相邻空格是安静走法，相邻敌子
    /// 且其后同方向紧邻空格时可跳吃。
    fn soldier_moves(board: &Gameboard<Piece>, square: Square, turn: Color, moves: &mut MoveSet) {
        for direction in turn.soldier_directions() {
            let neighbor = match square.neighbor(direction) {
                Some(neighbor) => neighbor,
                None => continue,
            };
            match board.content(neighbor) {
                None => moves.insert_quiet(Move::new(square, neighbor)),
                Some(piece) if piece.color() != turn => {
                    if let Some(landing) = neighbor.neighbor(direction) {
                        if board.is_empty_square(landing) {
                            moves.insert_capture(Move::new(square, landing));
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// 生成后的走法
    ///
    /// 沿四个方向滑过连续空格（各为安静走法），遇到的第一个棋子结束
    /// 该方向：若是敌子且其后紧邻空格，则该空格是该方向唯一的跳吃
    /// 落点；连续两子或己方棋子都直接挡住去路。
    fn queen_moves(board: &Gameboard<Piece>, square: Square, turn: Color, moves: &mut MoveSet) {
        for direction in Direction::ALL {
            let mut current = square;
            while let Some(next) = current.neighbor(direction) {
                match board.content(next) {
                    None => {
                        moves.insert_quiet(Move::new(square, next));
                        current = next;
                    }
                    Some(piece) if piece.color() != turn => {
                        if let Some(landing) = next.neighbor(direction) {
                            if board.is_empty_square(landing) {
                                moves.insert_capture(Move::new(square, landing));
                            }
                        }
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(notation: &str) -> Square {
        notation.parse().unwrap()
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::new(sq(from), sq(to))
    }

    fn expected(pairs: &[(&str, &str)]) -> HashSet<Move> {
        pairs.iter().map(|&(from, to)| mv(from, to)).collect()
    }

    fn queen(color: Color) -> Piece {
        let mut piece = Piece::new(color);
        piece.promote();
        piece
    }

    #[test]
    fn test_moveset_capture_replaces_quiet() {
        let mut moves = MoveSet::new();
        moves.insert_quiet(mv("a3", "b4"));
        assert!(!moves.can_capture());
        assert_eq!(moves.len(), 1);

        moves.insert_capture(mv("c3", "e5"));
        assert!(moves.can_capture());
        assert_eq!(moves.moves(), &expected(&[("c3", "e5")]));

        // 出现跳吃之后安静走法不再接受
        moves.insert_quiet(mv("a3", "b4"));
        assert_eq!(moves.moves(), &expected(&[("c3", "e5")]));
    }

    #[test]
    fn test_moveset_merge() {
        let mut quiet = MoveSet::new();
        quiet.insert_quiet(mv("a3", "b4"));
        let mut other_quiet = MoveSet::new();
        other_quiet.insert_quiet(mv("c3", "d4"));
        quiet.merge(other_quiet);
        assert_eq!(quiet.moves(), &expected(&[("a3", "b4"), ("c3", "d4")]));

        let mut capture = MoveSet::new();
        capture.insert_capture(mv("e3", "c5"));
        quiet.merge(capture);
        assert!(quiet.can_capture());
        assert_eq!(quiet.moves(), &expected(&[("e3", "c5")]));

        let mut late_quiet = MoveSet::new();
        late_quiet.insert_quiet(mv("g3", "h4"));
        quiet.merge(late_quiet);
        assert_eq!(quiet.moves(), &expected(&[("e3", "c5")]));

        let mut more_captures = MoveSet::new();
        more_captures.insert_capture(mv("c3", "e5"));
        quiet.merge(more_captures);
        assert_eq!(quiet.moves(), &expected(&[("e3", "c5"), ("c3", "e5")]));
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board: Gameboard<Piece> = Gameboard::empty();
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        assert!(moves.is_empty());
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_enemy_piece_has_no_moves() {
        let mut board = Gameboard::empty();
        board.place(sq("c3"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        assert!(moves.is_empty());
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_soldier_forward_moves() {
        let mut board = Gameboard::empty();
        board.place(sq("c3"), Piece::new(Color::White));
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        assert_eq!(moves.moves(), &expected(&[("c3", "b4"), ("c3", "d4")]));
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_soldier_cannot_move_backward() {
        let mut board = Gameboard::empty();
        board.place(sq("d4"), Piece::new(Color::White));
        // 后方相邻的敌子不构成跳吃，兵不能后退
        board.place(sq("c3"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("d4"), Color::White);
        assert_eq!(moves.moves(), &expected(&[("d4", "c5"), ("d4", "e5")]));
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_soldier_jump_over_enemy() {
        let mut board = Gameboard::empty();
        board.place(sq("c3"), Piece::new(Color::White));
        board.place(sq("d4"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        // 跳吃取代安静走法 (c3, b4)
        assert_eq!(moves.moves(), &expected(&[("c3", "e5")]));
        assert!(moves.can_capture());
    }

    #[test]
    fn test_soldier_jump_blocked_by_piece_beyond() {
        let mut board = Gameboard::empty();
        board.place(sq("c3"), Piece::new(Color::White));
        board.place(sq("d4"), Piece::new(Color::Black));
        board.place(sq("e5"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        assert_eq!(moves.moves(), &expected(&[("c3", "b4")]));
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_soldier_blocked_by_ally() {
        let mut board = Gameboard::empty();
        board.place(sq("c3"), Piece::new(Color::White));
        board.place(sq("d4"), Piece::new(Color::White));
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        assert_eq!(moves.moves(), &expected(&[("c3", "b4")]));
    }

    #[test]
    fn test_soldier_jump_needs_landing_square_on_board() {
        let mut board = Gameboard::empty();
        board.place(sq("g5"), Piece::new(Color::White));
        board.place(sq("h6"), Piece::new(Color::Black));
        // h6 之后的落点在棋盘外，只剩安静走法
        let moves = MoveGenerator::piece_moves(&board, sq("g5"), Color::White);
        assert_eq!(moves.moves(), &expected(&[("g5", "f6")]));
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_queen_slides_all_directions() {
        let mut board = Gameboard::empty();
        board.place(sq("d4"), queen(Color::White));
        let moves = MoveGenerator::piece_moves(&board, sq("d4"), Color::White);
        assert_eq!(
            moves.moves(),
            &expected(&[
                ("d4", "c5"),
                ("d4", "b6"),
                ("d4", "a7"),
                ("d4", "e5"),
                ("d4", "f6"),
                ("d4", "g7"),
                ("d4", "h8"),
                ("d4", "c3"),
                ("d4", "b2"),
                ("d4", "a1"),
                ("d4", "e3"),
                ("d4", "f2"),
                ("d4", "g1"),
            ])
        );
        assert!(!moves.can_capture());
    }

    #[test]
    fn test_queen_blocked_by_ally() {
        let mut board = Gameboard::empty();
        board.place(sq("d4"), queen(Color::White));
        board.place(sq("f6"), Piece::new(Color::White));
        let moves = MoveGenerator::piece_moves(&board, sq("d4"), Color::White);
        // 右上方向只剩 e5
        assert!(moves.contains(&mv("d4", "e5")));
        assert!(!moves.contains(&mv("d4", "f6")));
        assert!(!moves.contains(&mv("d4", "g7")));
        assert_eq!(moves.len(), 10);
    }

    #[test]
    fn test_queen_capture_lands_immediately_beyond() {
        let mut board = Gameboard::empty();
        board.place(sq("d4"), queen(Color::White));
        board.place(sq("f6"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("d4"), Color::White);
        // 唯一落点是敌子之后紧邻的 g7，h8 不是合法落点，
        // 其他方向的安静走法全部被取代
        assert_eq!(moves.moves(), &expected(&[("d4", "g7")]));
        assert!(moves.can_capture());
    }

    #[test]
    fn test_queen_two_enemies_in_a_row_block() {
        let mut board = Gameboard::empty();
        board.place(sq("d4"), queen(Color::White));
        board.place(sq("f6"), Piece::new(Color::Black));
        board.place(sq("g7"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("d4"), Color::White);
        // 连续两子挡住去路，没有跳吃
        assert!(!moves.can_capture());
        assert_eq!(moves.len(), 10);
        assert!(moves.contains(&mv("d4", "e5")));
        assert!(!moves.contains(&mv("d4", "h8")));
    }

    #[test]
    fn test_queen_captures_from_multiple_directions() {
        let mut board = Gameboard::empty();
        board.place(sq("c3"), queen(Color::White));
        board.place(sq("b4"), Piece::new(Color::Black));
        board.place(sq("d4"), Piece::new(Color::Black));
        let moves = MoveGenerator::piece_moves(&board, sq("c3"), Color::White);
        assert_eq!(moves.moves(), &expected(&[("c3", "a5"), ("c3", "e5")]));
        assert!(moves.can_capture());
    }
}
