use super::rank::Rank;

/// A hand's category plus the one rank that breaks ties inside it.
///
/// Variants are declared weakest first so the derived `Ord` compares
/// category before rank. Only the highest relevant rank is kept: the pair
/// for a pair, the higher pair for two pair, the triple for a full house,
/// the top card for straights, flushes and high cards. Hands that differ
/// only below that rank compare equal.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    HighCard(Rank),
    OnePair(Rank),
    TwoPair(Rank),
    ThreeOAK(Rank),
    Straight(Rank),
    Flush(Rank),
    FullHouse(Rank),
    FourOAK(Rank),
    StraightFlush(Rank),
}

impl Ranking {
    /// Position of the category on the strength ladder, 0 for high card.
    /// Not contiguous with the Score offsets, see [`Score`].
    ///
    /// [`Score`]: super::score::Score
    pub fn category(&self) -> u16 {
        match self {
            Ranking::HighCard(_) => 0,
            Ranking::OnePair(_) => 1,
            Ranking::TwoPair(_) => 2,
            Ranking::ThreeOAK(_) => 3,
            Ranking::Straight(_) => 4,
            Ranking::Flush(_) => 5,
            Ranking::FullHouse(_) => 6,
            Ranking::FourOAK(_) => 7,
            Ranking::StraightFlush(_) => 8,
        }
    }
    /// The tie-break rank.
    pub fn rank(&self) -> Rank {
        match *self {
            Ranking::HighCard(r)
            | Ranking::OnePair(r)
            | Ranking::TwoPair(r)
            | Ranking::ThreeOAK(r)
            | Ranking::Straight(r)
            | Ranking::Flush(r)
            | Ranking::FullHouse(r)
            | Ranking::FourOAK(r)
            | Ranking::StraightFlush(r) => r,
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard(r) => write!(f, "HighCard      {}", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {}", r),
            Ranking::TwoPair(r) => write!(f, "TwoPair       {}", r),
            Ranking::ThreeOAK(r) => write!(f, "ThreeOfAKind  {}", r),
            Ranking::Straight(r) => write!(f, "Straight      {}", r),
            Ranking::Flush(r) => write!(f, "Flush         {}", r),
            Ranking::FullHouse(r) => write!(f, "FullHouse     {}", r),
            Ranking::FourOAK(r) => write!(f, "FourOfAKind   {}", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {}", r),
        }
    }
}
