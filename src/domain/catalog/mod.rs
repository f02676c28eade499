//! Static question catalog: domains, goals, and question batches.
//!
//! Pure lookup tables fixed at process start. Nothing here mutates and
//! nothing here performs I/O; the diagnosis flow reads its choices and
//! question batches from this module.

mod data;
mod types;

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

pub use types::{
    Domain, DomainId, Goal, Question, QuestionCategory, QuestionKind, QuestionOption,
};

/// Errors raised by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown domain: '{0}'")]
    UnknownDomain(String),
}

static QUESTION_INDEX: Lazy<HashMap<&'static str, &'static Question>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for question in data::COMMON_QUESTIONS {
        index.insert(question.id, question);
    }
    for domain in DomainId::ALL {
        for question in data::domain_questions(*domain) {
            index.insert(question.id, question);
        }
    }
    index
});

/// All selectable domains, in display order.
pub fn domains() -> &'static [Domain] {
    data::DOMAINS
}

/// Resolves a raw domain identifier supplied by a caller.
pub fn resolve_domain(raw: &str) -> Result<DomainId, CatalogError> {
    raw.parse()
        .map_err(|_| CatalogError::UnknownDomain(raw.to_string()))
}

/// Ordered goals available under a domain.
pub fn goals_for(domain: DomainId) -> &'static [Goal] {
    data::goals_for(domain)
}

/// Looks up one goal within a domain. Returns `None` if the goal does
/// not exist or belongs to a different domain.
pub fn goal(domain: DomainId, goal_id: &str) -> Option<&'static Goal> {
    goals_for(domain).iter().find(|g| g.id == goal_id)
}

/// The fixed batch of questions shared across all domains.
pub fn common_questions() -> &'static [Question] {
    data::COMMON_QUESTIONS
}

/// The deep-dive batch specific to one domain.
pub fn domain_questions(domain: DomainId) -> &'static [Question] {
    data::domain_questions(domain)
}

/// Looks up any catalog question by identifier.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTION_INDEX.get(id).copied()
}
