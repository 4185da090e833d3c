//! 永続SegmentTreeによる, 静的な列の区間K番目クエリ

pub mod batch;
pub mod compress;
pub mod error;
pub mod options;
pub mod persistentsegmenttree;
pub mod rangekth;
mod util;

pub use compress::{Compressor, Rank};
pub use error::{Error, Result};
pub use persistentsegmenttree::{NodeId, PersistentCountTree};
pub use rangekth::RangeKth;
