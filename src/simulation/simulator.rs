use super::cancel::Cancel;
use super::error::SimulationError;
use super::estimator::Estimator;
use super::outcome::Outcome;
use super::ranker::Ranker;
use crate::arrange::Natural;
use crate::arrange::Splits;
use crate::cards::*;
use crate::HAND_SIZE;

/// One request to find the best split of a thirteen-card hand.
///
/// Construction validates the input; [`Simulation::run`] then goes
/// natural check → split enumeration → heuristic pruning → Monte Carlo.
/// Without an explicit seed, a fresh one is drawn per run and logged.
#[derive(Debug, Clone)]
pub struct Simulation {
    cards: [Card; 13],
    iterations: usize,
    seed: Option<u64>,
    cancel: Cancel,
}

impl Simulation {
    pub fn new(cards: &[Card], iterations: usize) -> Result<Self, SimulationError> {
        let cards = <[Card; HAND_SIZE]>::try_from(cards).map_err(|_| {
            SimulationError::InvalidInput(format!("expected {} cards, got {}", HAND_SIZE, cards.len()))
        })?;
        if Hand::from(cards.as_slice()).size() != HAND_SIZE {
            return Err(SimulationError::InvalidInput("duplicate cards".into()));
        }
        if iterations == 0 {
            return Err(SimulationError::InvalidInput("iterations must be positive".into()));
        }
        Ok(Self {
            cards,
            iterations,
            seed: None,
            cancel: Cancel::default(),
        })
    }
    /// Fix the random source so the run is reproducible.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Share a cancel handle with the caller.
    pub fn cancellable(mut self, cancel: Cancel) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn run(&self) -> Result<Outcome, SimulationError> {
        let hand = Hand::from(self.cards.as_slice());
        if let Some(natural) = Natural::detect(hand) {
            log::info!("{:<32}{}", "natural win", natural);
            return Ok(Outcome::natural(self.cards, self.iterations, natural));
        }
        let seed = self.seed.unwrap_or_else(rand::random);
        log::debug!("{:<32}{}", "simulating hand", hand);
        log::debug!("{:<32}{}", "simulation seed", seed);
        let candidates = Ranker::default().rank(Splits::from(self.cards));
        if candidates.is_empty() {
            return Err(SimulationError::NoValidSplit);
        }
        log::debug!("{:<32}{}", "candidate splits", candidates.len());
        let (split, win_rate) = Estimator::new(hand, self.iterations, seed)?.estimate(&candidates, &self.cancel)?;
        log::info!("{:<32}{:.4}", "best split win rate", win_rate);
        Ok(Outcome::from((split, win_rate, self.iterations)))
    }
}

/// Best split for `cards` using `iterations` random opponents per candidate.
pub fn simulate(cards: &[Card], iterations: usize) -> Result<Outcome, SimulationError> {
    Simulation::new(cards, iterations)?.run()
}
