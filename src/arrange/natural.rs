use crate::cards::*;

/// A thirteen-card pattern that wins outright, before any split is made.
///
/// Detection looks at the raw hand only. It does not check that the
/// pattern survives as a single row of a legal split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Natural {
    Quads,
    StraightFlush,
}

impl Natural {
    /// Quads are checked first, so a hand holding both reports `Quads`.
    pub fn detect(hand: Hand) -> Option<Self> {
        None.or_else(|| Self::find_quads(hand))
            .or_else(|| Self::find_straight_flush(hand))
    }
    fn find_quads(hand: Hand) -> Option<Self> {
        Rank::all()
            .iter()
            .any(|rank| hand.rank_count(rank) == 4)
            .then_some(Natural::Quads)
    }
    fn find_straight_flush(hand: Hand) -> Option<Self> {
        Suit::all()
            .iter()
            .map(|suit| hand.of(suit))
            .filter(|suited| suited.size() >= 5)
            .any(|suited| is_straight(u16::from(suited)))
            .then_some(Natural::StraightFlush)
    }
}

impl std::fmt::Display for Natural {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Natural::Quads => write!(f, "Quads"),
            Natural::StraightFlush => write!(f, "Straight Flush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(s: &str) -> Option<Natural> {
        Natural::detect(Hand::try_from(s).unwrap())
    }

    #[test]
    fn quads_anywhere() {
        assert_eq!(detect("AS 2C AH 7D 9S AD JC 3H AC 5S QD 8H KC"), Some(Natural::Quads));
        assert_eq!(detect("2S 2C 2H 2D 4S 6C 8H TD QS KC 3H 5D 7C"), Some(Natural::Quads));
    }

    #[test]
    fn trips_are_not_quads() {
        assert_eq!(detect("AS AH AD 2C 4D 6H 8S TC QD KH 3S 5C 7D"), None);
    }

    #[test]
    fn straight_flush_in_a_long_suit() {
        assert_eq!(detect("5H 6H 7H 8H 9H 2C 4D JS QC KD AS 3C TD"), Some(Natural::StraightFlush));
        assert_eq!(detect("2D 5D 6D 7D 8D 9D KD AD 3C 4H JS QC TC"), Some(Natural::StraightFlush));
    }

    #[test]
    fn wheel_straight_flush() {
        assert_eq!(detect("AC 2C 3C 4C 5C 9D JD KH QS 7H 8S TD 6D"), Some(Natural::StraightFlush));
    }

    #[test]
    fn straight_across_suits_is_not_enough() {
        assert_eq!(detect("5H 6D 7H 8H 9H 2C 4D JS QC KD AS 3C TD"), None);
    }

    #[test]
    fn flush_without_a_run() {
        assert_eq!(detect("2S 4S 6S 8S TS QS 3D 5H 7C 9D JH KC AD"), None);
    }

    #[test]
    fn quads_reported_before_straight_flush() {
        assert_eq!(detect("5H 6H 7H 8H 9H 9S 9D 9C 2C 3D 4S JD QC"), Some(Natural::Quads));
    }

    #[test]
    fn display_names() {
        assert_eq!(Natural::Quads.to_string(), "Quads");
        assert_eq!(Natural::StraightFlush.to_string(), "Straight Flush");
    }
}
