use thiserror::Error;

/// 構築時・クエリ時に起こり得るエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// 空の列から構築しようとした
    #[error("cannot build from an empty sequence")]
    EmptyInput,

    /// 要素数がカウンタの幅(`u32`)に収まらない
    #[error("sequence of length {len} exceeds the supported maximum of {}", u32::MAX)]
    TooManyValues { len: usize },

    /// `1 <= l <= r <= len` を満たさない区間
    #[error("invalid range [{l}, {r}] for a sequence of length {len}")]
    InvalidBounds { l: usize, r: usize, len: usize },

    /// 座標圧縮後の値が`1..=size`の外にある
    #[error("rank {rank} is outside of 1..={size}")]
    RankOutOfRange { rank: u32, size: u32 },

    /// `1 <= k <= len` を満たさない順位
    #[error("k = {k} is outside of 1..={len}")]
    InvalidQuery { k: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
