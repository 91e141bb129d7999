/// Lexicographic iterator over K-element index subsets of `0..n`.
///
/// Yields `[0, 1, 2]`, `[0, 1, 3]`, ... `[n-3, n-2, n-1]`: the same order a
/// depth-first pick-the-next-position recursion produces, without
/// materializing the subsets. Indices within a subset are ascending, so
/// selected elements keep their relative input order.
#[derive(Debug, Clone)]
pub struct Combos<const K: usize> {
    n: usize,
    next: Option<[usize; K]>,
}

impl<const K: usize> Combos<K> {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            next: (K <= n).then(|| std::array::from_fn(|i| i)),
        }
    }
    /// C(n, K)
    pub fn combinations(&self) -> usize {
        match K <= self.n {
            true => (0..K).fold(1, |x, i| x * (self.n - i) / (i + 1)),
            false => 0,
        }
    }
    fn advance(&mut self) {
        let n = self.n;
        self.next = self.next.and_then(|mut idx| {
            let i = (0..K).rev().find(|&i| idx[i] < n - K + i)?;
            idx[i] += 1;
            for j in i + 1..K {
                idx[j] = idx[j - 1] + 1;
            }
            Some(idx)
        });
    }
}

impl<const K: usize> Iterator for Combos<K> {
    type Item = [usize; K];
    fn next(&mut self) -> Option<Self::Item> {
        let last = self.next?;
        self.advance();
        Some(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_3_from_5() {
        let mut iter = Combos::<3>::new(5);
        assert_eq!(iter.next(), Some([0, 1, 2]));
        assert_eq!(iter.next(), Some([0, 1, 3]));
        assert_eq!(iter.next(), Some([0, 1, 4]));
        assert_eq!(iter.next(), Some([0, 2, 3]));
        assert_eq!(iter.next(), Some([0, 2, 4]));
        assert_eq!(iter.next(), Some([0, 3, 4]));
        assert_eq!(iter.next(), Some([1, 2, 3]));
        assert_eq!(iter.next(), Some([1, 2, 4]));
        assert_eq!(iter.next(), Some([1, 3, 4]));
        assert_eq!(iter.next(), Some([2, 3, 4]));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn n_choose_k_counts() {
        assert_eq!(Combos::<3>::new(13).count(), 286);
        assert_eq!(Combos::<5>::new(10).count(), 252);
        assert_eq!(Combos::<3>::new(13).combinations(), 286);
        assert_eq!(Combos::<5>::new(10).combinations(), 252);
    }

    #[test]
    fn too_few_elements() {
        assert_eq!(Combos::<5>::new(4).count(), 0);
        assert_eq!(Combos::<5>::new(0).count(), 0);
    }

    #[test]
    fn n_choose_n() {
        let mut iter = Combos::<4>::new(4);
        assert_eq!(iter.next(), Some([0, 1, 2, 3]));
        assert_eq!(iter.next(), None);
    }
}
