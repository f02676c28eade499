//! Skillpath - Structured Skill-Diagnosis Flow Controller
//!
//! This crate drives a multi-step skill-assessment conversation that ends
//! in a generated learning roadmap: domain selection, goal selection,
//! common questions, domain-specific questions, roadmap synthesis.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
