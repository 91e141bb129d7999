use crate::Probability;
use crate::arrange::Natural;
use crate::arrange::Split;
use crate::cards::Card;

/// The record a simulation hands back: the chosen rows and how often they
/// won. `natural` is set when the hand won outright and no split search ran.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub iterations: usize,
    pub win_rate: Probability,
    pub front: Vec<Card>,
    pub middle: Vec<Card>,
    pub back: Vec<Card>,
    pub natural: Option<Natural>,
}

impl Outcome {
    /// Guaranteed win. Rows are the input sliced 0..3, 3..8, 8..13.
    pub fn natural(cards: [Card; 13], iterations: usize, natural: Natural) -> Self {
        Self {
            iterations,
            win_rate: 1.,
            front: cards[0..3].to_vec(),
            middle: cards[3..8].to_vec(),
            back: cards[8..13].to_vec(),
            natural: Some(natural),
        }
    }
}

impl From<(Split, Probability, usize)> for Outcome {
    fn from((split, win_rate, iterations): (Split, Probability, usize)) -> Self {
        Self {
            iterations,
            win_rate,
            front: Vec::from(*split.front()),
            middle: Vec::from(*split.middle()),
            back: Vec::from(*split.back()),
            natural: None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let row = |cards: &[Card]| {
            cards
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        };
        if let Some(natural) = self.natural {
            writeln!(f, "{:<12}{}", "natural", natural)?;
        }
        writeln!(f, "{:<12}{}", "front", row(&self.front))?;
        writeln!(f, "{:<12}{}", "middle", row(&self.middle))?;
        writeln!(f, "{:<12}{}", "back", row(&self.back))?;
        writeln!(f, "{:<12}{}", "iterations", self.iterations)?;
        write!(f, "{:<12}{:.4}", "win rate", self.win_rate)
    }
}
