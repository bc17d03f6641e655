pub mod engine;
pub mod gate;
pub mod monitor;

pub use engine::{AlertPolicy, DiffOutcome};
pub use monitor::{Monitor, RunOutcome};
