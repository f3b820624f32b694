//! Itinerary operations using the plan-execute pattern.
//!
//! Retrieval is split into two phases:
//! 1. **Planning**: resolve a delay into the stay-window queries to run
//! 2. **Execution**: run the queries against a [`RowSource`](crate::RowSource)
//!    and assemble one itinerary per invoice found
//!
//! # Examples
//!
//! ```no_run
//! use merlin::database::{DatabaseConfig, SqliteRowSource};
//! use merlin::operations::{ItineraryOrchestrator, SameDayPolicy};
//!
//! let source = SqliteRowSource::new(DatabaseConfig::new("/tmp/merlin.db"));
//! let orchestrator = ItineraryOrchestrator::new(&source)
//!     .with_same_day_policy(SameDayPolicy::BeginningAndEnding);
//!
//! // Inspect the plan before running it
//! let plan = orchestrator.plan(0).unwrap();
//! for action in &plan.actions {
//!     println!("{}", action.description());
//! }
//!
//! let itineraries = orchestrator.execute(&plan).unwrap();
//! println!("{} itineraries", itineraries.len());
//! ```

pub mod itineraries;
pub mod lock_combinations;
pub mod plan;

pub use itineraries::{build_itineraries_for_delay, ItineraryOrchestrator};
pub use lock_combinations::get_lock_combinations;
pub use plan::{ItineraryPlan, PlanAction, SameDayPolicy};
