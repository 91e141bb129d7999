use crate::BACK_SIZE;
use crate::FRONT_SIZE;
use crate::MIDDLE_SIZE;
use crate::cards::*;

/// One row of a split: its cards in dealt order and their cached Score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Row<const N: usize> {
    cards: [Card; N],
    score: Score,
}

pub type Front = Row<FRONT_SIZE>;
pub type Middle = Row<MIDDLE_SIZE>;
pub type Back = Row<BACK_SIZE>;

impl<const N: usize> Row<N> {
    pub fn cards(&self) -> &[Card; N] {
        &self.cards
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn hand(&self) -> Hand {
        Hand::from(self.cards.as_slice())
    }
}

impl<const N: usize> From<[Card; N]> for Row<N> {
    fn from(cards: [Card; N]) -> Self {
        Self {
            cards,
            score: Score::from(Hand::from(cards.as_slice())),
        }
    }
}

impl<const N: usize> From<Row<N>> for Vec<Card> {
    fn from(row: Row<N>) -> Self {
        row.cards.to_vec()
    }
}

impl<const N: usize> std::fmt::Display for Row<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.cards.iter() {
            write!(f, "{} ", card)?;
        }
        write!(f, "({})", self.score)
    }
}

/// A 3/5/5 partition of thirteen cards into front, middle and back.
///
/// Construction does not enforce the non-fouling order, since random
/// opposing deals are scored as dealt. Use [`Split::is_valid`] to filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Split {
    front: Front,
    middle: Middle,
    back: Back,
}

impl Split {
    pub fn front(&self) -> &Front {
        &self.front
    }
    pub fn middle(&self) -> &Middle {
        &self.middle
    }
    pub fn back(&self) -> &Back {
        &self.back
    }
    /// front <= middle <= back
    pub fn is_valid(&self) -> bool {
        self.front.score() <= self.middle.score() && self.middle.score() <= self.back.score()
    }
    /// Sum of the three row scores. A cheap proxy for win probability.
    pub fn heuristic(&self) -> u32 {
        u32::from(self.front.score()) + u32::from(self.middle.score()) + u32::from(self.back.score())
    }
    /// Strictly stronger in every row. A tie in any row is a loss.
    pub fn beats(&self, other: &Self) -> bool {
        self.front.score() > other.front.score()
            && self.middle.score() > other.middle.score()
            && self.back.score() > other.back.score()
    }
    /// All thirteen cards as a set.
    pub fn hand(&self) -> Hand {
        Hand::from(u64::from(self.front.hand()) | u64::from(self.middle.hand()) | u64::from(self.back.hand()))
    }
}

impl From<(Front, Middle, Back)> for Split {
    fn from((front, middle, back): (Front, Middle, Back)) -> Self {
        Self {
            front,
            middle,
            back,
        }
    }
}

/// positions 0..3 front, 3..8 middle, 8..13 back
impl From<[Card; 13]> for Split {
    fn from(cards: [Card; 13]) -> Self {
        let front = std::array::from_fn(|i| cards[i]);
        let middle = std::array::from_fn(|i| cards[3 + i]);
        let back = std::array::from_fn(|i| cards[8 + i]);
        Self::from((Front::from(front), Middle::from(middle), Back::from(back)))
    }
}

impl std::fmt::Display for Split {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "front  {}", self.front)?;
        writeln!(f, "middle {}", self.middle)?;
        write!(f, "back   {}", self.back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> Split {
        let cards = Card::parse(s).unwrap();
        Split::from(<[Card; 13]>::try_from(cards).unwrap())
    }

    #[test]
    fn slices_in_order() {
        let s = split("2C 3C 4C 5D 6D 7D 8D 9D TH JH QH KH AH");
        assert_eq!(s.front().cards().map(|c| c.to_string()), ["2C", "3C", "4C"]);
        assert_eq!(s.middle().cards()[0].to_string(), "5D");
        assert_eq!(s.back().cards()[4].to_string(), "AH");
        assert_eq!(s.hand().size(), 13);
    }

    #[test]
    fn non_fouling_order() {
        assert!(split("2C 5D 9H  3S 3H 7C 8D JS  KS KH KD 4C 6H").is_valid());
        assert!(!split("AS AH 9H  3S 3H 7C 8D JS  KS KH KD 4C 6H").is_valid());
        assert!(!split("2C 5D 9H  QS QH QC 8D JS  KS KH 2D 4C 6H").is_valid());
    }

    #[test]
    fn equal_rows_are_not_fouled() {
        assert!(split("AS 2H 3D  AH 4C 6D 8S 9C  AD 5C 7H TS JC").is_valid());
    }

    #[test]
    fn heuristic_sums_scores() {
        let s = split("2C 5D 9H  3S 3H 7C 8D JS  KS KH KD 4C 6H");
        assert_eq!(s.heuristic(), 9 + 2003 + 4013);
    }

    #[test]
    fn beats_requires_every_row() {
        let strong = split("QS QH 2D  AS AH 7C 8D JS  KS KH KD 4C 6H");
        let weak = split("2C 5H 9C  3S 3C 7H 8C JC  TS TH TD 4D 6D");
        let tied = split("QD QC 3D  AD AC 7D 8H JD  KC 9S 9H 9D 6C");
        assert!(strong.beats(&weak));
        assert!(!weak.beats(&strong));
        assert!(!strong.beats(&tied));
    }
}
