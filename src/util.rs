use std::ops::{Bound, RangeBounds};

/// `range`を半開区間`l..r`の組に変換する. `Unbounded`な端は`0`と`len`になる
///
/// 範囲の検査はしないので, `l <= r && r <= len`は呼び出し側で確かめる
pub(crate) fn range2pair(range: impl RangeBounds<usize>, len: usize) -> (usize, usize) {
    let l = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let r = match range.end_bound() {
        Bound::Included(&i) => i.saturating_add(1),
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (l, r)
}
