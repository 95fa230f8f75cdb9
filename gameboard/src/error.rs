//! 错误类型定义

use thiserror::Error;

/// 棋盘坐标错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// 无法解析的格子记号
    #[error("invalid square notation: {0}")]
    InvalidNotation(String),

    /// 坐标不是可用的深色格子
    #[error("square ({file}, {rank}) is not a playable square")]
    NotPlayable { file: u8, rank: u8 },
}
