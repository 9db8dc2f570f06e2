pub mod collaborators;
pub mod context;
pub mod deadline;
pub mod error;
pub mod needs;
pub mod news;
pub mod offers;
pub mod orchestrator;
pub mod picks;
pub mod rng;
pub mod targets;
pub mod test_support;

pub use collaborators::{RosterProvider, TradeEvaluator};
pub use context::CachedRosters;
pub use deadline::DeadlineOutcome;
pub use error::EngineError;
pub use orchestrator::{CycleReport, TradeDesk};
pub use rng::{RandomSource, StdRandom};
