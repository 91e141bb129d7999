use super::hand::Hand;
use super::rank::Rank;
use super::ranking::Ranking;
use super::suit::Suit;

/// A2345, the only straight where the ace plays low.
const WHEEL: u16 = 0b_1000000001111;
/// The wheel still breaks ties on its highest card.
const WHEEL_RANK: Rank = Rank::Ace;

/// A lazy evaluator for a row's strength.
///
/// Using the bitset representation of the Hand, we search for the highest
/// Ranking from straight flush downwards with bitwise operations. Works for
/// 3-card fronts and 5-card rows alike: three cards can never complete a
/// straight or flush, so they fall through to trips, pair or high card.
pub struct Evaluator(Hand);
impl From<Hand> for Evaluator {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_1_oak())
            .unwrap_or(Ranking::HighCard(Rank::MIN))
    }

    /// Top rank of the highest run of five consecutive ranks in the mask,
    /// falling back to the wheel, which reports its ace. The mask may hold
    /// any number of ranks.
    pub fn straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks & Rank::mask();
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(WHEEL_RANK)
        } else {
            None
        }
    }

    ///

    fn find_1_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1).map(Ranking::HighCard)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).map(Ranking::ThreeOAK)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4).map(Ranking::FourOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2).map(|hi| {
            self.find_rank_of_n_oak_skip(2, Some(hi))
                .map(|_| Ranking::TwoPair(hi))
                .unwrap_or(Ranking::OnePair(hi))
        })
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3).and_then(|triple| {
            self.find_rank_of_n_oak_skip(2, Some(triple))
                .map(|_| Ranking::FullHouse(triple))
        })
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::straight(u16::from(self.0)).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = u16::from(self.0.of(&suit));
            Ranking::Flush(Rank::from(bits))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            Self::straight(u16::from(self.0.of(&suit))).map(Ranking::StraightFlush)
        })
    }
    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }
    fn find_rank_of_n_oak(&self, n: usize) -> Option<Rank> {
        self.find_rank_of_n_oak_skip(n, None)
    }
    fn find_rank_of_n_oak_skip(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|rank| Some(*rank) != skip)
            .find(|rank| self.0.rank_count(rank) >= n)
    }
}

/// The generalized straight check over an arbitrary rank set.
pub fn is_straight(ranks: u16) -> bool {
    Evaluator::straight(ranks).is_some()
}
