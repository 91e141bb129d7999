use super::evaluator::Evaluator;
use super::hand::Hand;
use super::ranking::Ranking;

/// Comparable integer strength of a 3- or 5-card row.
///
/// `offset + rank strength`, where high card has offset 0 and every made
/// category sits one thousand above its ladder position: pair 2000, two
/// pair 3000 and so on up to straight flush at 9000. The remainder is the
/// tie-break rank on the 2..=14 scale. Larger is strictly stronger across
/// categories; within a category it orders by the single tie-break rank.
/// Row scores are summed when pruning splits, so the offsets matter beyond
/// their order.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Score(u16);

impl Score {
    const BASE: u16 = 1000;
    fn offset(ranking: &Ranking) -> u16 {
        match ranking.category() {
            0 => 0,
            c => (c + 1) * Self::BASE,
        }
    }
}

impl From<Ranking> for Score {
    fn from(ranking: Ranking) -> Self {
        Self(Self::offset(&ranking) + ranking.rank().strength() as u16)
    }
}

impl From<Hand> for Score {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand).find_ranking())
    }
}

/// u16 isomorphism
impl From<Score> for u16 {
    fn from(s: Score) -> u16 {
        s.0
    }
}
impl From<Score> for u32 {
    fn from(s: Score) -> u32 {
        s.0 as u32
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
