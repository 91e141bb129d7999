use crate::DEFAULT_ITERATIONS;
use crate::HAND_SIZE;
use crate::cards::Card;
use crate::simulation::Simulation;
use crate::simulation::SimulationError;
use serde::Deserialize;

/// Body of `POST /simulate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateRequest {
    pub my_cards: Option<Vec<String>>,
    pub iterations: Option<i64>,
}

impl TryFrom<SimulateRequest> for Simulation {
    type Error = SimulationError;
    fn try_from(req: SimulateRequest) -> Result<Self, Self::Error> {
        let tokens = req
            .my_cards
            .filter(|tokens| tokens.len() == HAND_SIZE)
            .ok_or_else(|| SimulationError::InvalidInput("Provide exactly 13 cards".into()))?;
        let cards = tokens
            .iter()
            .map(|token| Card::try_from(token.as_str()))
            .collect::<Result<Vec<Card>, String>>()
            .map_err(SimulationError::InvalidInput)?;
        let iterations = match req.iterations {
            None => DEFAULT_ITERATIONS,
            Some(n) if n > 0 => n as usize,
            Some(n) => {
                return Err(SimulationError::InvalidInput(format!(
                    "iterations must be positive, got {}",
                    n
                )));
            }
        };
        Simulation::new(&cards, iterations)
    }
}
