//! The diagnosis aggregate and its rules.
//!
//! A `DiagnosisSession` walks a forward-only six-phase state machine
//! from domain selection to a generated roadmap. All invariants are
//! enforced by the aggregate's mutators; nothing else writes its state.

mod answer;
mod errors;
mod phase;
mod roadmap;
mod session;

pub use answer::QuestionAnswer;
pub use errors::DiagnosisError;
pub use phase::DiagnosisPhase;
pub use roadmap::{Roadmap, RoadmapPhase, RoadmapSchemaError};
pub use session::DiagnosisSession;
