use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of Cards packed into the 52 LSBs of a u64.
///
/// Each bit is one card, so membership, union and set difference are
/// single instructions and nothing is heap allocated. Input order of the
/// cards is not kept; rows that need their dealt order hold `[Card; N]`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }

    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0);
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// number of cards of this rank
    pub fn rank_count(&self, rank: &Rank) -> usize {
        (self.0 & u64::from(*rank)).count_ones() as usize
    }
    /// the subset of cards of this suit
    pub fn of(&self, suit: &Suit) -> Hand {
        Self(self.0 & u64::from(*suit))
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// we OR the cards to get the bitstring
/// [2C, TS, JC, JS]
/// xxxxxxxxxxxx 0000000000001001100000000000000000000000000000000001
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(
            cards
                .iter()
                .map(|c| u64::from(*c))
                .fold(0u64, |a, b| a | b),
        )
    }
}
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}

/// one-way conversion to u16 Rank masks
/// zero-allocation, zero iteration. just shredding bits
impl From<Hand> for u16 {
    fn from(h: Hand) -> Self {
        let mut x = u64::from(h);
        x |= x >> 1;
        x |= x >> 2;
        x &= 0x1111111111111;
        let mut y = u64::default();
        y |= (x >> 00) & 0x0001;
        y |= (x >> 03) & 0x0002;
        y |= (x >> 06) & 0x0004;
        y |= (x >> 09) & 0x0008;
        y |= (x >> 12) & 0x0010;
        y |= (x >> 15) & 0x0020;
        y |= (x >> 18) & 0x0040;
        y |= (x >> 21) & 0x0080;
        y |= (x >> 24) & 0x0100;
        y |= (x >> 27) & 0x0200;
        y |= (x >> 30) & 0x0400;
        y |= (x >> 33) & 0x0800;
        y |= (x >> 36) & 0x1000;
        y as u16
    }
}

/// str isomorphism, up to ordering
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(|cards| Self::from(cards.as_slice()))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{} ", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u64() {
        let hand = Hand::from(0xDEADBEEFu64);
        assert_eq!(hand, Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("JC TS 2C JS").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2C").ok());
        assert_eq!(iter.next(), Card::try_from("TS").ok());
        assert_eq!(iter.next(), Card::try_from("JC").ok());
        assert_eq!(iter.next(), Card::try_from("JS").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2C 3D 4H 5S 6C 7D 8H 9S TC JD QH KS AC").unwrap();
        assert_eq!(u16::from(hand.of(&Suit::C)), 0b_1000100010001);
        assert_eq!(u16::from(hand.of(&Suit::D)), 0b_0001000100010);
        assert_eq!(u16::from(hand.of(&Suit::H)), 0b_0010001000100);
        assert_eq!(u16::from(hand.of(&Suit::S)), 0b_0100010001000);
    }

    #[test]
    fn rank_counts() {
        let hand = Hand::try_from("AS AH AD KC KS 2D").unwrap();
        assert_eq!(hand.rank_count(&Rank::Ace), 3);
        assert_eq!(hand.rank_count(&Rank::King), 2);
        assert_eq!(hand.rank_count(&Rank::Queen), 0);
    }

    #[test]
    fn duplicates_collapse() {
        let hand = Hand::try_from("AS AS KD").unwrap();
        assert_eq!(hand.size(), 2);
    }

    #[test]
    fn complement_is_disjoint() {
        let hand = Hand::try_from("AS KD 7C").unwrap();
        let rest = hand.complement();
        assert_eq!(rest.size(), 49);
        assert!(!rest.contains(&Card::try_from("KD").unwrap()));
        assert_eq!(Hand::add(hand, rest).size(), 52);
    }
}
