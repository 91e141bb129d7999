//! JSON boundary for the simulator.
//!
//! [`SimulateRequest`] and [`SimulateResponse`] are the wire shapes of
//! `POST /simulate`. With the `server` feature, [`server::run`] serves them
//! over actix-web.
pub mod request;
pub use request::*;

pub mod response;
pub use response::*;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub use config::*;

#[cfg(feature = "server")]
pub mod server;
