//! 通用棋盘位置存储库
//!
//! 包含:
//! - 可用格子坐标 (Square)
//! - 对角线方向与路径计算 (Direction)
//! - 泛型占位存储 (Gameboard<T>)
//!
//! 只负责位置记录与坐标运算，不包含任何棋种规则。

mod board;
mod direction;
mod error;
mod square;

pub use board::Gameboard;
pub use direction::Direction;
pub use error::BoardError;
pub use square::{Square, BOARD_SIZE, PLAYABLE_SQUARES};
