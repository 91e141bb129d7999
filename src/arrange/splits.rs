use super::combos::Combos;
use super::split::*;
use crate::FRONT_SIZE;
use crate::MIDDLE_SIZE;
use crate::cards::Card;

/// Lazy enumeration of every non-fouling split of thirteen cards.
///
/// Fronts are picked as 3-subsets of the input in lexicographic position
/// order; for each front, middles are 5-subsets of the ten remaining cards
/// in the same order, and the back is whatever is left. That walks all
/// 286 × 252 = 72,072 partitions, yielding only those with
/// front <= middle <= back. Every row keeps its cards in input order.
#[derive(Debug, Clone)]
pub struct Splits {
    cards: [Card; 13],
    fronts: Combos<FRONT_SIZE>,
    middles: Combos<MIDDLE_SIZE>,
    front: Option<Front>,
    rest: [Card; 10],
}

impl Splits {
    /// Total partitions examined, valid or not.
    pub const fn partitions() -> usize {
        286 * 252
    }
    fn next_front(&mut self) -> Option<()> {
        let picked = self.fronts.next()?;
        let mut rest = self.rest;
        let mut n = 0;
        for (i, card) in self.cards.iter().enumerate() {
            if !picked.contains(&i) {
                rest[n] = *card;
                n += 1;
            }
        }
        debug_assert!(n == 10);
        self.rest = rest;
        self.front = Some(Front::from(picked.map(|i| self.cards[i])));
        self.middles = Combos::new(10);
        Some(())
    }
    fn next_partition(&mut self) -> Option<Split> {
        loop {
            if let (Some(front), Some(picked)) = (self.front, self.middles.next()) {
                let middle = picked.map(|i| self.rest[i]);
                let mut back = [self.rest[0]; 5];
                let mut n = 0;
                for (i, card) in self.rest.iter().enumerate() {
                    if !picked.contains(&i) {
                        back[n] = *card;
                        n += 1;
                    }
                }
                debug_assert!(n == 5);
                return Some(Split::from((front, Middle::from(middle), Back::from(back))));
            }
            self.next_front()?;
        }
    }
}

impl From<[Card; 13]> for Splits {
    fn from(cards: [Card; 13]) -> Self {
        Self {
            cards,
            fronts: Combos::new(13),
            middles: Combos::new(0),
            front: None,
            rest: [cards[0]; 10],
        }
    }
}

impl Iterator for Splits {
    type Item = Split;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let split = self.next_partition()?;
            if split.is_valid() {
                return Some(split);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    fn cards(s: &str) -> [Card; 13] {
        <[Card; 13]>::try_from(Card::parse(s).unwrap()).unwrap()
    }

    #[test]
    fn every_split_partitions_the_hand() {
        let input = cards("2C 5D 9H 3S 3H 7C 8D JS KS KH KD 4C 6H");
        let whole = Hand::from(input.as_slice());
        let mut n = 0;
        for split in Splits::from(input) {
            let f = u64::from(split.front().hand());
            let m = u64::from(split.middle().hand());
            let b = u64::from(split.back().hand());
            assert_eq!(f & m, 0);
            assert_eq!(m & b, 0);
            assert_eq!(f & b, 0);
            assert_eq!(Hand::from(f | m | b), whole);
            assert_eq!(split.front().hand().size(), 3);
            assert_eq!(split.middle().hand().size(), 5);
            assert_eq!(split.back().hand().size(), 5);
            n += 1;
        }
        assert!(n > 0);
        assert!(n <= Splits::partitions());
    }

    #[test]
    fn every_split_is_non_fouling() {
        let input = cards("AS KD 9H 7C 5S 3D 2H QC TS 8D 6H 4C JD");
        assert!(Splits::from(input).all(|s| s.is_valid()));
        assert!(Splits::from(input).count() > 0);
    }

    #[test]
    fn enumeration_starts_with_first_positions() {
        // high cards everywhere, so the very first partition is valid
        let input = cards("2C 3D 4H 6S 7C 8D TH JS QC KD AH 9C 5S");
        let first = Splits::from(input).next().unwrap();
        let front = first.front().cards().map(|c| c.to_string());
        let middle = first.middle().cards().map(|c| c.to_string());
        assert_eq!(front, ["2C", "3D", "4H"]);
        assert_eq!(middle, ["6S", "7C", "8D", "TH", "JS"]);
    }

    #[test]
    fn rows_keep_input_order() {
        let input = cards("KS 2C QH 3D JC 4H TS 5C 9D 6H 8S 7C AD");
        let index = |c: &Card| input.iter().position(|x| x == c).unwrap();
        for split in Splits::from(input).take(500) {
            assert!(split.front().cards().windows(2).all(|w| index(&w[0]) < index(&w[1])));
            assert!(split.middle().cards().windows(2).all(|w| index(&w[0]) < index(&w[1])));
            assert!(split.back().cards().windows(2).all(|w| index(&w[0]) < index(&w[1])));
        }
    }
}
