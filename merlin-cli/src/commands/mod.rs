//! Command implementations for the merlin CLI.

mod init;
mod itineraries;
mod lock_combinations;

pub use init::InitCommand;
pub use itineraries::ItinerariesCommand;
pub use lock_combinations::LockCombinationsCommand;
