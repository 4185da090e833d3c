use crate::compress::Compressor;
use crate::error::{Error, Result};
use crate::persistentsegmenttree::{NodeId, PersistentCountTree};
use crate::util::range2pair;
use std::ops::{Bound, RangeBounds};

/// 静的な列に対して, 区間内で`k`番目に小さい値を求めるデータ構造
///
/// 列の`i`項目までを挿入した永続SegmentTreeのバージョンを全て持っておき,
/// 2つのバージョンの差を見ることで区間の多重集合を扱う.
/// 構築後は書き換えられないので, `&RangeKth<T>`を複数のスレッドで共有してクエリできる
#[derive(Clone)]
pub struct RangeKth<T> {
    compressor: Compressor<T>,
    tree: PersistentCountTree,
    roots: Box<[NodeId]>,
}

impl<T: Ord> RangeKth<T> {
    /// 列`values`から構築する
    ///
    /// `values`が空なら`Error::EmptyInput`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*N* log *N*)
    pub fn new(values: impl Into<Vec<T>>) -> Result<Self>
    where
        T: Clone,
    {
        let values: Vec<T> = values.into();
        let compressor = Compressor::new(values.clone())?;
        let mut tree = PersistentCountTree::new(compressor.size())?;
        let mut roots = Vec::with_capacity(values.len() + 1);
        let mut root = tree.empty_root();
        roots.push(root);
        for v in &values {
            root = tree.insert(root, compressor.rank(v))?;
            roots.push(root);
        }
        log::debug!(
            "built RangeKth: {} values, {} distinct, {} nodes",
            values.len(),
            compressor.len(),
            tree.node_count()
        );
        Ok(Self {
            compressor,
            tree,
            roots: roots.into_boxed_slice(),
        })
    }

    /// 列の長さを返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len() - 1
    }

    /// 常に`false`. 空の列からは構築できない
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 先頭`i`項を挿入したバージョンの根を返す. `i > self.len()`なら`None`
    #[must_use]
    pub fn version(&self, i: usize) -> Option<NodeId> {
        self.roots.get(i).copied()
    }

    /// 中の永続SegmentTreeを返す
    #[must_use]
    pub fn tree(&self) -> &PersistentCountTree {
        &self.tree
    }

    /// 座標圧縮の表を返す
    #[must_use]
    pub fn compressor(&self) -> &Compressor<T> {
        &self.compressor
    }

    fn check_bounds(&self, l: usize, r: usize) -> Result<()> {
        if 1 <= l && l <= r && r <= self.len() {
            Ok(())
        } else {
            Err(Error::InvalidBounds {
                l,
                r,
                len: self.len(),
            })
        }
    }

    fn half_open(&self, range: impl RangeBounds<usize>) -> Result<(usize, usize)> {
        let (l, r) = range2pair(range, self.len());
        if l <= r && r <= self.len() {
            Ok((l, r))
        } else {
            Err(Error::InvalidBounds {
                l: l.saturating_add(1),
                r,
                len: self.len(),
            })
        }
    }

    /// 列の`l`項目から`r`項目まで(1始まり, 両端を含む)で`k`番目に小さい値を返す
    ///
    /// `1 <= l <= r <= self.len()`でなければ`Error::InvalidBounds`,
    /// `1 <= k <= r - l + 1`でなければ`Error::InvalidQuery`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*)
    pub fn kth_smallest(&self, l: usize, r: usize, k: usize) -> Result<&T> {
        self.check_bounds(l, r)?;
        let rank = self.tree.kth(self.roots[l - 1], self.roots[r], k)?;
        log::trace!("kth_smallest({l}, {r}, {k}) -> rank {}", rank.get());
        self.compressor.try_unrank(rank)
    }

    /// `range`の範囲(0始まり)で`n`番目(0始まり)に小さい値を返す
    ///
    /// `range`が`0..self.len()`に含まれなければ`Error::InvalidBounds`,
    /// `n`が`range`の要素数以上なら`Error::InvalidQuery`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*)
    pub fn nth_smallest(&self, range: impl RangeBounds<usize>, n: usize) -> Result<&T> {
        let (l, r) = self.half_open(range)?;
        let rank = self
            .tree
            .kth(self.roots[l], self.roots[r], n.saturating_add(1))?;
        self.compressor.try_unrank(rank)
    }

    /// `range`の範囲内の最小値を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*)
    pub fn min(&self, range: impl RangeBounds<usize>) -> Result<&T> {
        self.nth_smallest(range, 0)
    }

    /// `range`の範囲内の最大値を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*)
    pub fn max(&self, range: impl RangeBounds<usize>) -> Result<&T> {
        let (l, r) = self.half_open(range)?;
        if l == r {
            return Err(Error::InvalidQuery { k: 1, len: 0 });
        }
        self.nth_smallest(l..r, r - l - 1)
    }

    /// `idxrange`の範囲(0始まり)にある要素のうち, 値が`valrange`に入るものの個数を返す
    ///
    /// `valrange`の端は構築に使った値でなくてもよい
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*)
    pub fn count_values(
        &self,
        idxrange: impl RangeBounds<usize>,
        valrange: impl RangeBounds<T>,
    ) -> Result<usize> {
        let (l, r) = self.half_open(idxrange)?;
        let lower = match valrange.start_bound() {
            Bound::Included(v) => self.compressor.count_below(v),
            Bound::Excluded(v) => self.compressor.count_at_most(v),
            Bound::Unbounded => 0,
        };
        let upper = match valrange.end_bound() {
            Bound::Included(v) => self.compressor.count_at_most(v),
            Bound::Excluded(v) => self.compressor.count_below(v),
            Bound::Unbounded => self.compressor.size(),
        };
        if upper <= lower {
            return Ok(0);
        }
        let (u, v) = (self.roots[l], self.roots[r]);
        Ok((self.tree.count_le(u, v, upper) - self.tree.count_le(u, v, lower)) as usize)
    }

    /// `range`の範囲(0始まり)にある`value`未満の要素の個数を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *N*)
    pub fn count_less(&self, range: impl RangeBounds<usize>, value: &T) -> Result<usize> {
        self.count_values(range, ..value)
    }
}

impl<T: Ord + std::fmt::Debug> std::fmt::Debug for RangeKth<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        let counts = self.tree.counts(self.roots[self.len()]);
        for (v, c) in self.compressor.values().iter().zip(counts) {
            for _ in 0..c {
                list.entry(v);
            }
        }
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example() {
        let rk = RangeKth::new(vec![25957, 6405, 15770, 26287, 6556]).unwrap();
        assert_eq!(rk.kth_smallest(2, 2, 1), Ok(&6405));
        assert_eq!(rk.kth_smallest(3, 4, 1), Ok(&15770));
        assert_eq!(rk.kth_smallest(4, 5, 1), Ok(&6556));
        assert_eq!(rk.kth_smallest(1, 2, 2), Ok(&25957));
        assert_eq!(rk.kth_smallest(4, 4, 1), Ok(&26287));
    }

    #[test]
    fn errors() {
        let rk = RangeKth::new(vec![3, 1, 2]).unwrap();
        assert_eq!(
            rk.kth_smallest(0, 2, 1),
            Err(Error::InvalidBounds { l: 0, r: 2, len: 3 })
        );
        assert_eq!(
            rk.kth_smallest(3, 2, 1),
            Err(Error::InvalidBounds { l: 3, r: 2, len: 3 })
        );
        assert_eq!(
            rk.kth_smallest(1, 4, 1),
            Err(Error::InvalidBounds { l: 1, r: 4, len: 3 })
        );
        assert_eq!(
            rk.kth_smallest(1, 2, 3),
            Err(Error::InvalidQuery { k: 3, len: 2 })
        );
        assert_eq!(
            rk.kth_smallest(1, 2, 0),
            Err(Error::InvalidQuery { k: 0, len: 2 })
        );
        assert_eq!(
            RangeKth::<i32>::new(vec![]).unwrap_err(),
            Error::EmptyInput
        );
    }

    #[test]
    fn nth_min_max() {
        let rk = RangeKth::new(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]).unwrap();
        assert_eq!(rk.nth_smallest(3..8, 3), Ok(&6));
        assert_eq!(rk.nth_smallest(.., 0), Ok(&1));
        assert_eq!(rk.nth_smallest(..=2, 2), Ok(&4));
        assert_eq!(rk.min(4..7), Ok(&2));
        assert_eq!(rk.max(4..7), Ok(&9));
        assert_eq!(rk.max(..), Ok(&9));
        assert_eq!(rk.min(2..2), Err(Error::InvalidQuery { k: 1, len: 0 }));
        assert_eq!(rk.max(2..2), Err(Error::InvalidQuery { k: 1, len: 0 }));
        assert_eq!(
            rk.nth_smallest(5..12, 0),
            Err(Error::InvalidBounds { l: 6, r: 12, len: 11 })
        );
    }

    #[test]
    fn count() {
        let rk = RangeKth::new(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5]).unwrap();
        assert_eq!(rk.count_less(.., &5), Ok(6));
        assert_eq!(rk.count_less(.., &0), Ok(0));
        assert_eq!(rk.count_less(.., &100), Ok(11));
        assert_eq!(rk.count_values(.., 5..=5), Ok(3));
        assert_eq!(rk.count_values(1..6, 2..7), Ok(2));
        assert_eq!(rk.count_values(.., 7..8), Ok(0));
        assert_eq!(rk.count_values(.., 6..3), Ok(0));
        assert_eq!(
            rk.count_values((Bound::Excluded(3), Bound::Unbounded), ..),
            Ok(7)
        );
        assert_eq!(
            rk.count_less(4..12, &5),
            Err(Error::InvalidBounds { l: 5, r: 12, len: 11 })
        );
    }

    #[test]
    fn debug() {
        let rk = RangeKth::new(vec![2, 7, 1, 7]).unwrap();
        assert_eq!(format!("{rk:?}"), "[1, 2, 7, 7]");
    }
}
