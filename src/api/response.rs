use crate::Probability;
use crate::cards::Card;
use crate::simulation::Outcome;
use serde::Serialize;

/// Body of a successful `POST /simulate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateResponse {
    pub iterations: usize,
    pub win_rate: Probability,
    pub front: Vec<String>,
    pub middle: Vec<String>,
    pub back: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_win: Option<String>,
}

impl From<Outcome> for SimulateResponse {
    fn from(outcome: Outcome) -> Self {
        let tokens = |cards: &[Card]| cards.iter().map(Card::to_string).collect::<Vec<String>>();
        Self {
            iterations: outcome.iterations,
            win_rate: outcome.win_rate,
            front: tokens(&outcome.front),
            middle: tokens(&outcome.middle),
            back: tokens(&outcome.back),
            auto_win: outcome.natural.map(|n| n.to_string()),
        }
    }
}

/// Body of any failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&str> for ErrorResponse {
    fn from(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
impl From<String> for ErrorResponse {
    fn from(error: String) -> Self {
        Self { error }
    }
}
