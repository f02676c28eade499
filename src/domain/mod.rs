//! Domain layer: pure model, no I/O.

pub mod catalog;
pub mod diagnosis;
pub mod foundation;
