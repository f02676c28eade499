//! Diagnosis phases.
//!
//! The flow is strictly forward-only: each phase has exactly one legal
//! successor and a completed session is terminal. `GeneratingRoadmap` is
//! a working state that only exists in memory while the generator runs;
//! it is never persisted.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// One state in the forward-only diagnosis state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisPhase {
    /// Waiting for the learner to pick a domain.
    AwaitingDomain,
    /// Domain chosen; waiting for a goal under it.
    AwaitingGoal,
    /// Answering the shared question batch.
    CommonQuestions,
    /// Answering the domain-specific question batch.
    DomainQuestions,
    /// Roadmap synthesis in progress (in-memory only).
    GeneratingRoadmap,
    /// Roadmap attached; terminal.
    Completed,
}

impl DiagnosisPhase {
    /// Phase weight used by progress calculation: the five phases before
    /// completion each contribute this share.
    pub const WEIGHT: f64 = 20.0;

    /// Returns the wire identifier for this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AwaitingDomain => "awaiting_domain",
            Self::AwaitingGoal => "awaiting_goal",
            Self::CommonQuestions => "common_questions",
            Self::DomainQuestions => "domain_questions",
            Self::GeneratingRoadmap => "generating_roadmap",
            Self::Completed => "completed",
        }
    }

    /// Returns a short label suitable for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AwaitingDomain => "Domain selection",
            Self::AwaitingGoal => "Goal selection",
            Self::CommonQuestions => "Common questions",
            Self::DomainQuestions => "Specialization questions",
            Self::GeneratingRoadmap => "Generating roadmap",
            Self::Completed => "Completed",
        }
    }

    /// The single legal successor, `None` once completed.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::AwaitingDomain => Some(Self::AwaitingGoal),
            Self::AwaitingGoal => Some(Self::CommonQuestions),
            Self::CommonQuestions => Some(Self::DomainQuestions),
            Self::DomainQuestions => Some(Self::GeneratingRoadmap),
            Self::GeneratingRoadmap => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// True while the session is collecting question answers.
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::CommonQuestions | Self::DomainQuestions)
    }

    /// Progress contributed by the phases already fully behind us.
    pub fn base_progress(&self) -> f64 {
        match self {
            Self::AwaitingDomain => 0.0,
            Self::AwaitingGoal => 20.0,
            Self::CommonQuestions => 40.0,
            Self::DomainQuestions => 60.0,
            Self::GeneratingRoadmap => 80.0,
            Self::Completed => 100.0,
        }
    }
}

impl StateMachine for DiagnosisPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }
}

impl Default for DiagnosisPhase {
    fn default() -> Self {
        Self::AwaitingDomain
    }
}

impl std::fmt::Display for DiagnosisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
