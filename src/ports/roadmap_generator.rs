//! Roadmap synthesis contract.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::catalog::DomainId;
use crate::domain::diagnosis::{DiagnosisSession, Roadmap};

/// Failures surfaced by roadmap generators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Roadmap generation timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Generator transport failure: {0}")]
    Transport(String),

    /// The generator responded, but not with a valid roadmap.
    #[error("Generator produced invalid output: {0}")]
    InvalidOutput(String),
}

/// One answered question with its catalog copy resolved, ready to feed
/// into a generator prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnsweredQuestion {
    pub question_id: String,
    pub question_text: String,
    pub selected_labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplement: Option<String>,
}

/// Everything a generator needs to synthesize a roadmap: the selected
/// track and the full answer transcript in batch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapContext {
    pub domain: DomainId,
    pub domain_label: String,
    pub goal_id: String,
    pub goal_label: String,
    pub goal_description: String,
    pub answers: Vec<AnsweredQuestion>,
}

impl RoadmapContext {
    /// Builds the context from a session. `None` until both domain and
    /// goal are selected.
    pub fn from_session(session: &DiagnosisSession) -> Option<Self> {
        let domain = session.domain()?;
        let goal = session.goal()?;
        let domain_label = crate::domain::catalog::domains()
            .iter()
            .find(|d| d.id == domain)
            .map(|d| d.label.to_string())?;

        let answers = session
            .answered_questions()
            .into_iter()
            .map(|(question, answer)| AnsweredQuestion {
                question_id: question.id.to_string(),
                question_text: question.text.to_string(),
                selected_labels: answer
                    .selected_option_ids()
                    .iter()
                    .filter_map(|id| question.option_label(id))
                    .map(str::to_string)
                    .collect(),
                supplement: answer.supplement().map(str::to_string),
            })
            .collect();

        Some(Self {
            domain,
            domain_label,
            goal_id: goal.id.to_string(),
            goal_label: goal.label.to_string(),
            goal_description: goal.description.to_string(),
            answers,
        })
    }
}

/// Produces a learning roadmap from a completed answer transcript.
///
/// Implementations do their own transport and parsing; callers enforce
/// the deadline and validate the returned roadmap's content.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(&self, context: &RoadmapContext) -> Result<Roadmap, GenerationError>;
}
