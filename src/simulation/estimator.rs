use super::cancel::Cancel;
use super::error::SimulationError;
use crate::Probability;
use crate::arrange::Split;
use crate::cards::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rayon::iter::IndexedParallelIterator;
use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Monte Carlo estimate of how often a split beats a random opponent.
///
/// The pool is every card outside the player's hand. Each trial takes a
/// fresh uniformly random ordering of the pool and deals its first thirteen
/// cards as the opponent's front, middle and back, unarranged. The player
/// wins the trial only by strictly beating all three rows.
///
/// Candidates are estimated in parallel. Each one owns a `SmallRng` seeded
/// from the simulation seed and its position in the candidate list, so a
/// seeded run gives the same answer on any number of threads.
#[derive(Debug, Clone)]
pub struct Estimator {
    pool: Vec<Card>,
    iterations: usize,
    seed: u64,
}

impl Estimator {
    pub fn new(held: Hand, iterations: usize, seed: u64) -> Result<Self, SimulationError> {
        if iterations == 0 {
            return Err(SimulationError::InvalidInput("iterations must be positive".into()));
        }
        let pool = Vec::<Card>::from(Deck::without(held));
        if pool.len() < 13 {
            return Err(SimulationError::InvalidInput(format!(
                "{} cards left to deal an opponent",
                pool.len()
            )));
        }
        Ok(Self {
            pool,
            iterations,
            seed,
        })
    }

    pub fn pool(&self) -> &[Card] {
        &self.pool
    }

    /// Best candidate by win rate. Ties go to the earlier candidate.
    pub fn estimate(
        &self,
        candidates: &[Split],
        cancel: &Cancel,
    ) -> Result<(Split, Probability), SimulationError> {
        let rates = candidates
            .par_iter()
            .enumerate()
            .map(|(i, split)| match cancel.is_cancelled() {
                true => None,
                false => Some(self.win_rate(split, &mut self.rng(i))),
            })
            .collect::<Vec<Option<Probability>>>()
            .into_iter()
            .collect::<Option<Vec<Probability>>>()
            .ok_or(SimulationError::Cancelled)?;
        if cancel.is_cancelled() {
            return Err(SimulationError::Cancelled);
        }
        candidates
            .iter()
            .zip(rates)
            .inspect(|(split, rate)| log::debug!("{:<32}{:<8.4}{:>6}", "candidate", rate, split.heuristic()))
            .fold(None, |best: Option<(Split, Probability)>, (split, rate)| match best {
                Some((_, top)) if rate <= top => best,
                _ => Some((*split, rate)),
            })
            .ok_or(SimulationError::NoValidSplit)
    }

    /// Fraction of `iterations` trials this split wins.
    pub fn win_rate<R: Rng>(&self, split: &Split, rng: &mut R) -> Probability {
        let ref mut scratch = self.pool.clone();
        let wins = (0..self.iterations)
            .filter(|_| self.trial(split, scratch, rng))
            .count();
        wins as Probability / self.iterations as Probability
    }

    fn trial<R: Rng>(&self, split: &Split, scratch: &mut [Card], rng: &mut R) -> bool {
        scratch.copy_from_slice(&self.pool);
        let (dealt, _) = scratch.partial_shuffle(rng, 13);
        <[Card; 13]>::try_from(&*dealt)
            .map(Split::from)
            .is_ok_and(|villain| split.beats(&villain))
    }

    fn rng(&self, index: usize) -> SmallRng {
        let ref mut hasher = DefaultHasher::default();
        self.seed.hash(hasher);
        index.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }
}
