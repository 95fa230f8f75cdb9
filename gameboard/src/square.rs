//! 格子坐标

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::direction::Direction;
use crate::error::BoardError;

/// 棋盘边长（列数 = 行数）
pub const BOARD_SIZE: u8 = 8;

/// 可用深色格子总数
pub const PLAYABLE_SQUARES: usize = 32;

/// 8x8 棋盘上的一个可用深色格子
///
/// file 为列 (0-7, 对应 a-h)，rank 为行 (0-7, 对应 1-8)，
/// 且 file + rank 为偶数。浅色格子不可表示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// 创建格子，坐标越界或落在浅色格子上返回 None
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE && (file + rank) % 2 == 0 {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// 创建格子，坐标不可用时返回错误
    pub fn try_new(file: u8, rank: u8) -> Result<Self, BoardError> {
        Self::new(file, rank).ok_or(BoardError::NotPlayable { file, rank })
    }

    /// 创建格子（不检查坐标，内部使用）
    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// 列 (0-7)
    pub fn file(&self) -> u8 {
        self.file
    }

    /// 行 (0-7)
    pub fn rank(&self) -> u8 {
        self.rank
    }

    /// 转换为稳定序号 (0-31)，按行排列
    pub fn index(&self) -> usize {
        self.rank as usize * 4 + self.file as usize / 2
    }

    /// 从序号转换
    pub fn from_index(index: usize) -> Option<Self> {
        if index < PLAYABLE_SQUARES {
            let rank = (index / 4) as u8;
            let file = (index % 4) as u8 * 2 + rank % 2;
            Some(Self { file, rank })
        } else {
            None
        }
    }

    /// 遍历全部 32 个可用格子（按序号顺序）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..PLAYABLE_SQUARES).filter_map(Square::from_index)
    }

    /// 获取偏移后的格子
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Square> {
        let file = self.file as i8 + dx;
        let rank = self.rank as i8 + dy;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::new(file as u8, rank as u8)
    }

    /// 沿对角线方向的相邻格子，出界返回 None
    pub fn neighbor(&self, direction: Direction) -> Option<Square> {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidNotation(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Square::new(file, rank).ok_or_else(invalid)
    }
}

// Square 序列化为记号字符串（如 "a3"），这样以 Square 为键的
// 映射可以直接作为 JSON 对象传输
impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SquareVisitor;

        impl Visitor<'_> for SquareVisitor {
            type Value = Square;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a playable square in algebraic notation, e.g. \"a3\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Square, E>
            where
                E: de::Error,
            {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(SquareVisitor)
    }
}
