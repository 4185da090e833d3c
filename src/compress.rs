use crate::error::{Error, Result};

/// 座標圧縮後の値. 重複を除いて昇順に並べたときの1始まりの位置
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Rank(u32);

impl Rank {
    /// `Rank`を作る. 範囲の検査は使う側で行う
    #[must_use]
    pub const fn new(rank: u32) -> Self {
        Self(rank)
    }

    /// 中身の値を返す
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// 座標圧縮. 任意の全順序な値を`1..=S`の`Rank`に対応させる
#[derive(Clone, Debug)]
pub struct Compressor<T>(Box<[T]>);

impl<T: Ord> Compressor<T> {
    /// 列`values`から座標圧縮の表を作る
    ///
    /// `values`が空の場合は`Error::EmptyInput`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*N* log *N*)
    pub fn new(values: impl Into<Vec<T>>) -> Result<Self> {
        let mut values: Vec<T> = values.into();
        if values.is_empty() {
            return Err(Error::EmptyInput);
        }
        if u32::try_from(values.len()).is_err() {
            return Err(Error::TooManyValues { len: values.len() });
        }
        values.sort_unstable();
        values.dedup();
        Ok(Self(values.into_boxed_slice()))
    }

    /// 異なる値の個数`S`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 常に`false`. 空の列からは構築できない
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `len()`と同じ値を`u32`で返す
    #[must_use]
    pub fn size(&self) -> u32 {
        self.0.len() as u32
    }

    /// 重複を除いて昇順に並べた値のスライスを返す
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.0
    }

    /// `value`以上の最小の値の`Rank`を返す
    ///
    /// # Constraints
    ///
    /// - `value`は構築に使った列に含まれている.
    ///   含まれていない場合は`value`以上の最小の値の`Rank`(全ての値より大きければ`S + 1`)になる
    ///
    /// # Time complexity
    ///
    /// - *O*(log *S*)
    #[must_use]
    pub fn rank(&self, value: &T) -> Rank {
        Rank(self.count_below(value) + 1)
    }

    /// `value`の`Rank`を返す. 構築に使った列に含まれていなければ`None`
    ///
    /// # Time complexity
    ///
    /// - *O*(log *S*)
    #[must_use]
    pub fn try_rank(&self, value: &T) -> Option<Rank> {
        self.0
            .binary_search(value)
            .ok()
            .map(|i| Rank(i as u32 + 1))
    }

    /// `value`未満の異なる値の個数を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *S*)
    #[must_use]
    pub fn count_below(&self, value: &T) -> u32 {
        self.0.partition_point(|v| v < value) as u32
    }

    /// `value`以下の異なる値の個数を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(log *S*)
    #[must_use]
    pub fn count_at_most(&self, value: &T) -> u32 {
        self.0.partition_point(|v| v <= value) as u32
    }

    /// `rank`に対応する元の値を返す
    ///
    /// `rank`が`1..=S`の外なら`Error::RankOutOfRange`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    pub fn try_unrank(&self, rank: Rank) -> Result<&T> {
        rank.0
            .checked_sub(1)
            .and_then(|i| self.0.get(i as usize))
            .ok_or(Error::RankOutOfRange {
                rank: rank.0,
                size: self.size(),
            })
    }

    /// `rank`に対応する元の値を返す
    ///
    /// # Constraints
    ///
    /// - `1 <= rank.get() <= self.len()`
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn unrank(&self, rank: Rank) -> &T {
        assert!(
            (1..=self.size()).contains(&rank.0),
            "rank {} is outside of 1..={}",
            rank.0,
            self.size()
        );
        &self.0[rank.0 as usize - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compress() {
        let c = Compressor::new(vec![30, -5, 10, 30, 7, -5]).unwrap();
        assert_eq!(c.len(), 4);
        assert_eq!(c.values(), &[-5, 7, 10, 30]);
        assert_eq!(c.rank(&-5), Rank::new(1));
        assert_eq!(c.rank(&30), Rank::new(4));
        assert_eq!(*c.unrank(Rank::new(3)), 10);
        for &v in c.values() {
            assert_eq!(*c.unrank(c.rank(&v)), v);
        }
    }

    #[test]
    fn absent_values() {
        let c = Compressor::new([2u64, 4, 6]).unwrap();
        assert_eq!(c.try_rank(&4), Some(Rank::new(2)));
        assert_eq!(c.try_rank(&5), None);
        assert_eq!(c.rank(&5), Rank::new(3));
        assert_eq!(c.rank(&7), Rank::new(4));
        assert_eq!(c.count_below(&1), 0);
        assert_eq!(c.count_below(&5), 2);
        assert_eq!(c.count_below(&7), 3);
        assert_eq!(c.count_at_most(&4), 2);
        assert_eq!(c.count_at_most(&5), 2);
        assert_eq!(c.count_at_most(&1), 0);
    }

    #[test]
    fn errors() {
        assert_eq!(
            Compressor::<i32>::new(vec![]).unwrap_err(),
            Error::EmptyInput
        );
        let c = Compressor::new(vec!['a', 'b']).unwrap();
        assert_eq!(
            c.try_unrank(Rank::new(0)),
            Err(Error::RankOutOfRange { rank: 0, size: 2 })
        );
        assert_eq!(
            c.try_unrank(Rank::new(3)),
            Err(Error::RankOutOfRange { rank: 3, size: 2 })
        );
        assert_eq!(c.try_unrank(Rank::new(2)), Ok(&'b'));
    }

    #[test]
    #[should_panic(expected = "rank 5 is outside of 1..=2")]
    fn unrank_out_of_range() {
        let c = Compressor::new(vec![1, 2]).unwrap();
        let _ = c.unrank(Rank::new(5));
    }
}
