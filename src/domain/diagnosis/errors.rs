//! Diagnosis flow error types.

use thiserror::Error;

use crate::domain::catalog::{CatalogError, DomainId};
use crate::ports::{GenerationError, StoreError};

use super::DiagnosisPhase;

/// Every way a diagnosis operation can fail.
///
/// All failures are classified locally and surfaced to the caller; the
/// controller never swallows one. Retry guidance comes from
/// [`DiagnosisError::is_retryable`].
#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// The supplied domain identifier is not in the catalog.
    #[error("Unknown domain: '{0}'")]
    UnknownDomain(String),

    /// The goal exists under a different domain, or not at all.
    #[error("Goal '{goal_id}' does not belong to domain '{domain}'")]
    GoalNotInDomain { goal_id: String, domain: DomainId },

    /// The requested operation is not legal in the session's phase.
    #[error("Cannot {operation} while session is in phase '{phase}'")]
    InvalidTransition {
        phase: DiagnosisPhase,
        operation: &'static str,
    },

    /// The roadmap was requested before the session completed.
    #[error("Roadmap is not ready: session is in phase '{0}'")]
    RoadmapNotReady(DiagnosisPhase),

    /// The generator timed out, failed, or produced malformed output.
    /// No phase advance was persisted; the operation is safe to retry.
    #[error("Roadmap generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// Store failure: unknown session, write conflict, or I/O.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DiagnosisError {
    /// True for failures the caller may retry without side effects:
    /// generation errors and optimistic-concurrency conflicts. Caller
    /// misuse (wrong phase, unknown identifiers) is never retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            DiagnosisError::Generation(_) => true,
            DiagnosisError::Store(StoreError::Conflict { .. }) => true,
            _ => false,
        }
    }
}

impl From<CatalogError> for DiagnosisError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownDomain(raw) => DiagnosisError::UnknownDomain(raw),
        }
    }
}
