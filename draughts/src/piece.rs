//! 棋子定义

use gameboard::Direction;
use serde::{Deserialize, Serialize};

use crate::constants::{BLACK_PROMOTION_RANK, WHITE_PROMOTION_RANK};

/// 阵营
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// 白方（先手，从第 1 横排向上推进）
    White,
    /// 黑方（后手，从第 8 横排向下推进）
    Black,
}

impl Color {
    /// 获取对方阵营
    pub fn opponent(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 兵的两个前进方向（以棋盘固定方位为准）
    pub fn soldier_directions(&self) -> [Direction; 2] {
        match self {
            Color::White => [Direction::TopLeft, Direction::TopRight],
            Color::Black => [Direction::BottomLeft, Direction::BottomRight],
        }
    }

    /// 升变横排
    pub fn promotion_rank(&self) -> u8 {
        match self {
            Color::White => WHITE_PROMOTION_RANK,
            Color::Black => BLACK_PROMOTION_RANK,
        }
    }
}

/// 棋子等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// 兵：只能沿本方前进方向走一步或跳吃
    Soldier,
    /// 后：沿四个对角线方向任意距离滑行
    Queen,
}

/// 棋子
///
/// 颜色不可变；等级只能通过 promote 从兵单向升为后。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    color: Color,
    rank: Rank,
}

impl Piece {
    /// 创建新棋子，初始等级为兵
    pub fn new(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Soldier,
        }
    }

    /// 阵营
    pub fn color(&self) -> Color {
        self.color
    }

    /// 等级
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// 是否已升变为后
    pub fn is_queen(&self) -> bool {
        self.rank == Rank::Queen
    }

    /// 升变为后（单向，不可降级）
    pub fn promote(&mut self) {
        self.rank = Rank::Queen;
    }

    /// 获取棋子显示字符（白 w/W，黑 b/B，大写为后）
    pub fn display_char(&self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Soldier) => 'w',
            (Color::White, Rank::Queen) => 'W',
            (Color::Black, Rank::Soldier) => 'b',
            (Color::Black, Rank::Queen) => 'B',
        }
    }
}
