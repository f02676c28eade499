//! Collaborator contracts.
//!
//! The application layer drives the diagnosis flow through these traits
//! and never names a concrete adapter. Implementations live under
//! `crate::adapters`.

mod roadmap_generator;
mod session_store;

pub use roadmap_generator::{
    AnsweredQuestion, GenerationError, RoadmapContext, RoadmapGenerator,
};
pub use session_store::{SessionStore, StoreError};
