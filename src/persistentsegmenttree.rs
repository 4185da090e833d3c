use crate::compress::Rank;
use crate::error::{Error, Result};

/// `PersistentCountTree`内のノードを指す添字
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(u32);

impl NodeId {
    /// ノード列の中での位置を返す
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// 一度作られたら書き換えられないノード
#[derive(Clone, Copy, Debug)]
enum Node {
    Leaf(u32),
    Relay(u32, (NodeId, NodeId)),
}
use Node::*;

impl Node {
    fn count(&self) -> u32 {
        match self {
            Leaf(c) => *c,
            Relay(c, _) => *c,
        }
    }
}

/// 個数を持つ永続SegmentTree
///
/// `1..=size`の`Rank`の多重集合を表す. 各バージョンは根の`NodeId`で表され,
/// 挿入のたびに根から葉までの経路だけを新しく作り, それ以外の部分木は前のバージョンと共有する.
/// ノードは追加されるだけで書き換えも削除もされないので, 作ったバージョンはずっと有効
#[derive(Clone, Debug)]
pub struct PersistentCountTree {
    nodes: Vec<Node>,
    size: u32,
    empty: NodeId,
}

impl PersistentCountTree {
    /// `1..=size`の範囲を受け持つ空の木を作る
    ///
    /// `size == 0`なら`Error::EmptyInput`を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*size*)
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyInput);
        }
        let mut tree = Self {
            nodes: Vec::with_capacity(size as usize * 2 - 1),
            size,
            empty: NodeId(0),
        };
        tree.empty = tree.build_empty(1, size);
        Ok(tree)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn build_empty(&mut self, lo: u32, hi: u32) -> NodeId {
        if lo == hi {
            return self.push(Leaf(0));
        }
        let mid = lo + (hi - lo) / 2;
        let l = self.build_empty(lo, mid);
        let r = self.build_empty(mid + 1, hi);
        self.push(Relay(0, (l, r)))
    }

    /// 受け持つ`Rank`の個数を返す
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// 全ての個数が0の, 最初のバージョンの根を返す
    #[must_use]
    pub fn empty_root(&self) -> NodeId {
        self.empty
    }

    /// これまでに作られたノードの個数を返す
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `id`を根とする部分木に含まれる要素の個数を返す
    ///
    /// # Constraints
    ///
    /// - `id`はこの木で作られたノードである
    ///
    /// # Time complexity
    ///
    /// - *O*(1)
    #[must_use]
    pub fn count(&self, id: NodeId) -> u32 {
        self.nodes[id.index()].count()
    }

    /// バージョン`prev`に`rank`を1つ加えたバージョンを作り, その根を返す
    ///
    /// `prev`やその子孫は書き換えない. 新しく作られるノードは根から`rank`の葉までの経路上のものだけ.
    /// `rank`が`1..=self.size()`の外なら`Error::RankOutOfRange`を返す
    ///
    /// # Constraints
    ///
    /// - `prev`はこの木のバージョンの根である
    ///
    /// # Time complexity
    ///
    /// - *O*(log *size*)
    pub fn insert(&mut self, prev: NodeId, rank: Rank) -> Result<NodeId> {
        if !(1..=self.size).contains(&rank.get()) {
            return Err(Error::RankOutOfRange {
                rank: rank.get(),
                size: self.size,
            });
        }
        Ok(self.insert_internal(prev, rank.get(), 1, self.size))
    }

    fn insert_internal(&mut self, prev: NodeId, rank: u32, lo: u32, hi: u32) -> NodeId {
        match self.nodes[prev.index()] {
            Leaf(c) => {
                debug_assert_eq!(lo, hi);
                self.push(Leaf(c + 1))
            }
            Relay(c, (l, r)) => {
                let mid = lo + (hi - lo) / 2;
                let children = if rank <= mid {
                    (self.insert_internal(l, rank, lo, mid), r)
                } else {
                    (l, self.insert_internal(r, rank, mid + 1, hi))
                };
                self.push(Relay(c + 1, children))
            }
        }
    }

    /// バージョン`v`からバージョン`u`を引いた多重集合で`k`番目(1始まり)に小さい`Rank`を返す
    ///
    /// `u`が`v`の過去のバージョンであれば, `u`の後に挿入された要素の中での`k`番目になる.
    /// `k`が`1..=self.count(v) - self.count(u)`の外なら`Error::InvalidQuery`を返す
    ///
    /// # Constraints
    ///
    /// - `u`, `v`はこの木のバージョンの根で, `u`は`v`と同じかそれより前のバージョンである
    ///
    /// # Time complexity
    ///
    /// - *O*(log *size*)
    pub fn kth(&self, u: NodeId, v: NodeId, k: usize) -> Result<Rank> {
        let len = self.count(v).saturating_sub(self.count(u)) as usize;
        if k == 0 || k > len {
            return Err(Error::InvalidQuery { k, len });
        }
        let (mut u, mut v, mut k) = (u, v, k as u32);
        let (mut lo, mut hi) = (1, self.size);
        loop {
            match (self.nodes[u.index()], self.nodes[v.index()]) {
                (Relay(_, (ul, ur)), Relay(_, (vl, vr))) => {
                    let mid = lo + (hi - lo) / 2;
                    let left = self.count(vl) - self.count(ul);
                    if k <= left {
                        (u, v, hi) = (ul, vl, mid);
                    } else {
                        k -= left;
                        (u, v, lo) = (ur, vr, mid + 1);
                    }
                }
                (Leaf(_), Leaf(_)) => {
                    debug_assert_eq!(lo, hi);
                    return Ok(Rank::new(lo));
                }
                _ => unreachable!(),
            }
        }
    }

    /// バージョン`v`からバージョン`u`を引いた多重集合のうち, `rank`以下の要素の個数を返す
    ///
    /// `rank`は`0..=self.size()`を超えていてもよい
    ///
    /// # Constraints
    ///
    /// - `u`, `v`はこの木のバージョンの根で, `u`は`v`と同じかそれより前のバージョンである
    ///
    /// # Time complexity
    ///
    /// - *O*(log *size*)
    #[must_use]
    pub fn count_le(&self, u: NodeId, v: NodeId, rank: u32) -> u32 {
        let diff = |u: NodeId, v: NodeId| self.count(v) - self.count(u);
        if rank == 0 {
            return 0;
        }
        let (mut u, mut v) = (u, v);
        let (mut lo, mut hi) = (1, self.size);
        let mut acc = 0;
        loop {
            if hi <= rank {
                return acc + diff(u, v);
            }
            let (Relay(_, (ul, ur)), Relay(_, (vl, vr))) =
                (self.nodes[u.index()], self.nodes[v.index()])
            else {
                unreachable!();
            };
            let mid = lo + (hi - lo) / 2;
            if rank <= mid {
                (u, v, hi) = (ul, vl, mid);
            } else {
                acc += diff(ul, vl);
                (u, v, lo) = (ur, vr, mid + 1);
            }
        }
    }

    /// バージョン`root`での各`Rank`の個数を`Rank`の昇順に返す
    ///
    /// # Time complexity
    ///
    /// - *O*(*size*)
    #[must_use]
    pub fn counts(&self, root: NodeId) -> Vec<u32> {
        fn internal(tree: &PersistentCountTree, id: NodeId, out: &mut Vec<u32>) {
            match tree.nodes[id.index()] {
                Leaf(c) => out.push(c),
                Relay(_, (l, r)) => {
                    internal(tree, l, out);
                    internal(tree, r, out);
                }
            }
        }

        let mut out = Vec::with_capacity(self.size as usize);
        internal(self, root, &mut out);
        out
    }
}
