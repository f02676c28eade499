//! The generated learning roadmap and its schema rules.
//!
//! The generator is an untrusted producer: a payload must deserialize
//! into this shape and pass `validate()` before it may be attached to a
//! session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Schema violations in a generated roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoadmapSchemaError {
    #[error("Roadmap field '{0}' is empty")]
    EmptyField(&'static str),

    #[error("Roadmap field '{0}' must be greater than zero")]
    NonPositive(&'static str),

    #[error("Roadmap phase {index}: field '{field}' is empty")]
    EmptyPhaseField { index: usize, field: &'static str },
}

/// One phase of a learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    /// 1-based position of the phase.
    pub phase: u32,
    pub title: String,
    pub duration_weeks: u32,
    pub topics: Vec<String>,
    pub hands_on_project: String,
}

/// The terminal artifact of a diagnosis session.
///
/// Every field is required; deserialization fails on absent fields and
/// `validate()` rejects structurally present but empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    pub goal: String,
    pub domain: String,
    pub duration_months: u32,
    pub weekly_hours_recommended: u32,
    pub phases: Vec<RoadmapPhase>,
    pub milestones: Vec<String>,
    pub final_project: String,
    pub career_advice: String,
    pub next_steps: Vec<String>,
}

impl Roadmap {
    /// Checks the required-content rules beyond what the type encodes.
    pub fn validate(&self) -> Result<(), RoadmapSchemaError> {
        use RoadmapSchemaError as E;

        Self::non_empty_str("goal", &self.goal)?;
        Self::non_empty_str("domain", &self.domain)?;
        if self.duration_months == 0 {
            return Err(E::NonPositive("duration_months"));
        }
        if self.weekly_hours_recommended == 0 {
            return Err(E::NonPositive("weekly_hours_recommended"));
        }
        if self.phases.is_empty() {
            return Err(E::EmptyField("phases"));
        }
        for (index, phase) in self.phases.iter().enumerate() {
            if phase.title.trim().is_empty() {
                return Err(E::EmptyPhaseField { index, field: "title" });
            }
            if phase.duration_weeks == 0 {
                return Err(E::EmptyPhaseField { index, field: "duration_weeks" });
            }
            if phase.topics.is_empty() {
                return Err(E::EmptyPhaseField { index, field: "topics" });
            }
            if phase.hands_on_project.trim().is_empty() {
                return Err(E::EmptyPhaseField { index, field: "hands_on_project" });
            }
        }
        if self.milestones.is_empty() {
            return Err(E::EmptyField("milestones"));
        }
        Self::non_empty_str("final_project", &self.final_project)?;
        Self::non_empty_str("career_advice", &self.career_advice)?;
        if self.next_steps.is_empty() {
            return Err(E::EmptyField("next_steps"));
        }
        Ok(())
    }

    fn non_empty_str(field: &'static str, value: &str) -> Result<(), RoadmapSchemaError> {
        if value.trim().is_empty() {
            return Err(RoadmapSchemaError::EmptyField(field));
        }
        Ok(())
    }
}
