/// Errors that can occur while simulating a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Wrong card count, malformed or duplicate cards, or zero iterations.
    InvalidInput(String),
    /// No partition satisfies front <= middle <= back.
    NoValidSplit,
    /// The caller tripped the cancel handle before estimation finished.
    Cancelled,
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(s) => write!(f, "invalid input: {}", s),
            Self::NoValidSplit => write!(f, "no valid splits found"),
            Self::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimulationError {}
