//! Application layer: command handlers that orchestrate the diagnosis
//! flow across the session store and the roadmap generator.
//!
//! Handlers own no business rules; they load the aggregate, invoke its
//! transitions, and persist the result.

pub mod diagnosis;
