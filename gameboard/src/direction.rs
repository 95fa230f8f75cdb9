//! 对角线方向与路径计算

use serde::{Deserialize, Serialize};

use crate::square::Square;

/// 对角线方向（以棋盘固定方位为准，与玩家视角无关）
///
/// "top" 指 rank 增大的一侧。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    /// 全部四个方向
    pub const ALL: [Direction; 4] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    /// 方向对应的 (dx, dy) 偏移
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::TopLeft => (-1, 1),
            Direction::TopRight => (1, 1),
            Direction::BottomLeft => (-1, -1),
            Direction::BottomRight => (1, -1),
        }
    }

    /// 由起止格子推导走法方向，非对角线走法返回 None
    pub fn between(from: Square, to: Square) -> Option<Direction> {
        let dx = to.file() as i8 - from.file() as i8;
        let dy = to.rank() as i8 - from.rank() as i8;
        if dx == 0 || dx.abs() != dy.abs() {
            return None;
        }
        let direction = match (dx > 0, dy > 0) {
            (false, true) => Direction::TopLeft,
            (true, true) => Direction::TopRight,
            (false, false) => Direction::BottomLeft,
            (true, false) => Direction::BottomRight,
        };
        Some(direction)
    }

    /// 沿本方向从 from 走到 to，返回严格位于两者之间的格子序列
    ///
    /// 调用方需保证 to 位于 from 沿本方向的延长线上。
    pub fn path_between(&self, from: Square, to: Square) -> Vec<Square> {
        let mut path = Vec::new();
        let mut current = from;
        while let Some(next) = current.neighbor(*self) {
            if next == to {
                break;
            }
            path.push(next);
            current = next;
        }
        path
    }
}
