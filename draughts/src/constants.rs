//! 规则常量定义

/// 每方初始棋子数
pub const PIECES_PER_SIDE: usize = 12;

/// 每方开局占用的横排数
pub const SOLDIER_ROWS: u8 = 3;

/// 白方升变横排（rank 索引，即第 8 横排）
pub const WHITE_PROMOTION_RANK: u8 = 7;

/// 黑方升变横排（rank 索引，即第 1 横排）
pub const BLACK_PROMOTION_RANK: u8 = 0;
