//! Concrete implementations of the port contracts.

pub mod generator;
pub mod storage;
