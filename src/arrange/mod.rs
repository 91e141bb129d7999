//! Splitting thirteen cards into front, middle and back.
//!
//! [`Splits`] walks every legal 3/5/5 partition lazily, [`Natural`] spots
//! hands that win before any split is needed.
pub mod combos;
pub use combos::*;

pub mod natural;
pub use natural::*;

pub mod split;
pub use split::*;

pub mod splits;
pub use splits::*;
