//! `n m`, `n`個の値, `m`個の`l r k`を読んで, 各クエリの答えを1行ずつ出力するバッチ処理

use crate::error::Error;
use crate::rangekth::RangeKth;
use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("unexpected end of input while reading {0}")]
    UnexpectedEof(&'static str),
    #[error("invalid {what}: {token:?}")]
    Parse { what: &'static str, token: String },
    #[error("failed to build: {0}")]
    Build(#[source] Error),
    #[error("query #{index} ({l} {r} {k}): {source}")]
    Query {
        index: usize,
        l: usize,
        r: usize,
        k: usize,
        #[source]
        source: Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 1始まりの区間`l..=r`で`k`番目に小さい値を求めるクエリ
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Query {
    pub l: usize,
    pub r: usize,
    pub k: usize,
}

/// 読み込んだ列とクエリ
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Batch<T> {
    pub values: Vec<T>,
    pub queries: Vec<Query>,
}

fn next<'a, U: FromStr>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &'static str,
) -> Result<U, BatchError> {
    let token = tokens.next().ok_or(BatchError::UnexpectedEof(what))?;
    token.parse().map_err(|_| BatchError::Parse {
        what,
        token: token.to_owned(),
    })
}

/// 入力全体を読む. 余った末尾のトークンは無視する
pub fn parse_input<T: FromStr>(input: &str) -> Result<Batch<T>, BatchError> {
    let mut tokens = input.split_ascii_whitespace();
    let n: usize = next(&mut tokens, "n")?;
    let m: usize = next(&mut tokens, "m")?;
    let values = (0..n)
        .map(|_| next(&mut tokens, "value"))
        .collect::<Result<Vec<T>, _>>()?;
    let queries = (0..m)
        .map(|_| {
            Ok(Query {
                l: next(&mut tokens, "l")?,
                r: next(&mut tokens, "r")?,
                k: next(&mut tokens, "k")?,
            })
        })
        .collect::<Result<Vec<_>, BatchError>>()?;
    Ok(Batch { values, queries })
}

impl<T: Ord + Clone + Display> Batch<T> {
    /// 全てのクエリを処理し, 答えを`out`に1行ずつ書き出す
    ///
    /// `keep_going`が`false`なら最初に失敗したクエリで`BatchError::Query`を返す.
    /// `true`なら失敗したクエリは飛ばして続け, 失敗した個数を返す
    pub fn run(&self, out: &mut impl Write, keep_going: bool) -> Result<usize, BatchError> {
        let rk = RangeKth::new(self.values.as_slice()).map_err(BatchError::Build)?;
        let mut failed = 0;
        for (index, &Query { l, r, k }) in self.queries.iter().enumerate() {
            match rk.kth_smallest(l, r, k) {
                Ok(v) => writeln!(out, "{v}")?,
                Err(source) => {
                    let err = BatchError::Query {
                        index: index + 1,
                        l,
                        r,
                        k,
                        source,
                    };
                    if !keep_going {
                        return Err(err);
                    }
                    log::warn!("{err}");
                    failed += 1;
                }
            }
        }
        Ok(failed)
    }
}
