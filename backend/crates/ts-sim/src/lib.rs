//! ts-sim library
//!
//! Client of the prediction service plus the tourist simulator, the safety
//! monitor and the live dashboard built on top of it.

pub mod cli;
pub mod client;
pub mod commands;
pub mod dashboard;
pub mod error;
pub mod monitor;
pub mod session_store;
pub mod simulation;
pub mod simulator;

#[cfg(test)]
mod tests;

pub use client::{
    ApiClient, AuthResponse, ClientError, ClientResult, LocationUpdate, PathResponse,
    PredictRequest, Registration, TouristApi,
};
pub use dashboard::{Dashboard, LOGS_UNAVAILABLE};
pub use error::{Result as SimResult, SimError};
pub use monitor::Monitor;
pub use session_store::SessionStore;
pub use simulation::{SharedSimulation, Simulation, SimulationState, run_simulation};
pub use simulator::Simulator;
