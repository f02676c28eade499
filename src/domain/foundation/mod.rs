//! Shared value objects and traits used across the domain.

mod errors;
mod ids;
mod progress;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{SessionId, UserId};
pub use progress::Progress;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
