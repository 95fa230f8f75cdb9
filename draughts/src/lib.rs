//! 英式西洋跳棋规则引擎
//!
//! 包含:
//! - 棋子定义 (Piece, Color, Rank)
//! - 走法生成与强制吃子规则 (MoveGenerator, MoveSet)
//! - 回合与对局状态机 (Game, Gamestate, Continuation)
//! - 规则常量与错误类型
//!
//! 棋盘坐标与占位存储由 gameboard crate 提供，常用类型在此重新导出。

mod constants;
mod error;
mod game;
mod moves;
mod piece;

pub use constants::*;
pub use error::{DraughtsError, Result};
pub use game::{Continuation, Game, Gamestate};
pub use moves::{Move, MoveGenerator, MoveSet};
pub use piece::{Color, Piece, Rank};

pub use gameboard::{BoardError, Direction, Gameboard, Square};
