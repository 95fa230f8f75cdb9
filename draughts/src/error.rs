//! 错误类型定义

use gameboard::Square;
use thiserror::Error;

/// 跳棋规则错误
///
/// 注意：不合法的走法不是错误，make_move 以 Gamestate::InvalidMove
/// 作为普通返回值表达，因为误点是正常的用户行为。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraughtsError {
    /// 摆子时格子已被占用
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),
}

/// 规则操作结果类型
pub type Result<T> = std::result::Result<T, DraughtsError>;
