//! 泛型占位存储

use serde::{Deserialize, Serialize};

use crate::square::{Square, PLAYABLE_SQUARES};

/// 棋盘占位存储
///
/// 只记录每个可用格子上放了什么，不理解任何规则。
/// 内容类型由使用方决定。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gameboard<T> {
    /// 32 个可用格子，索引为 Square::index，使用 Vec 以支持 serde
    squares: Vec<Option<T>>,
}

impl<T> Gameboard<T> {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            squares: (0..PLAYABLE_SQUARES).map(|_| None).collect(),
        }
    }

    /// 获取指定格子的内容
    pub fn content(&self, square: Square) -> Option<&T> {
        self.squares[square.index()].as_ref()
    }

    /// 指定格子是否为空
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// 在指定格子放置内容，返回被替换的内容
    pub fn place(&mut self, square: Square, item: T) -> Option<T> {
        self.squares[square.index()].replace(item)
    }

    /// 清空指定格子，返回原有内容
    pub fn clear(&mut self, square: Square) -> Option<T> {
        self.squares[square.index()].take()
    }

    /// 把内容从 from 挪到 to，返回 to 上被替换的内容
    ///
    /// from 为空时不做任何改动。
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<T> {
        match self.clear(from) {
            Some(item) => self.squares[to.index()].replace(item),
            None => None,
        }
    }

    /// 遍历所有被占用的格子及其内容
    pub fn occupied(&self) -> impl Iterator<Item = (Square, &T)> {
        Square::all()
            .zip(self.squares.iter())
            .filter_map(|(square, slot)| slot.as_ref().map(|item| (square, item)))
    }
}

impl<T> Default for Gameboard<T> {
    fn default() -> Self {
        Self::empty()
    }
}
