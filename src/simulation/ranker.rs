use crate::TOP_SPLITS;
use crate::arrange::Split;
use std::cmp::Reverse;

/// Prunes candidate splits down to the `k` with the highest summed row
/// Score. Ties keep enumeration order.
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    k: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self { k: TOP_SPLITS }
    }
}

impl From<usize> for Ranker {
    fn from(k: usize) -> Self {
        Self { k }
    }
}

impl Ranker {
    pub fn rank<I>(&self, splits: I) -> Vec<Split>
    where
        I: IntoIterator<Item = Split>,
    {
        let mut splits = splits.into_iter().collect::<Vec<Split>>();
        splits.sort_by_key(|split| Reverse(split.heuristic()));
        splits.truncate(self.k);
        splits
    }
}
