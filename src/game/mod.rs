pub mod die;
pub mod state;

pub use die::{Die, DieId};
pub use state::{GameState, RollOutcome};
