//! Choosing the split with the best estimated win rate.
//!
//! [`Simulation`] sequences the stages, [`Ranker`] prunes the candidates,
//! and [`Estimator`] runs the Monte Carlo trials.
pub mod cancel;
pub use cancel::*;

pub mod error;
pub use error::*;

pub mod estimator;
pub use estimator::*;

pub mod outcome;
pub use outcome::*;

pub mod ranker;
pub use ranker::*;

pub mod simulator;
pub use simulator::*;
