//! File-backed data of the relay: the CSV path snapshot and the JSON user list.

mod error;
mod new_user;
mod simulation_snapshot;
mod user_repository;

#[cfg(test)]
mod tests;

pub use error::{Result as StoreResult, StoreError};
pub use new_user::NewUser;
pub use simulation_snapshot::{SimulationRow, SimulationSnapshot};
pub use user_repository::UserRepository;
