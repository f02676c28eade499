//! DiagnosisSession aggregate.
//!
//! The authoritative state of one assessment. State transitions are the
//! only mutators; each validates its own precondition, so every
//! invariant lives here:
//!
//! - `goal` implies `domain` is set and the goal belongs to it
//! - `roadmap` set implies the session is completed
//! - `phase` never regresses
//! - answer keys are always drawn from a batch that was pending
//!
//! Sessions serialize directly (serde) for persistence; the document
//! shape is the struct itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{self, DomainId, Goal, Question};
use crate::domain::foundation::{Progress, SessionId, StateMachine, Timestamp, UserId};

use super::{DiagnosisError, DiagnosisPhase, QuestionAnswer, Roadmap};

/// Aggregate root for one skill-assessment session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSession {
    id: SessionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
    phase: DiagnosisPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    domain: Option<DomainId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    goal_id: Option<String>,
    answers: BTreeMap<String, QuestionAnswer>,
    pending_question_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roadmap: Option<Roadmap>,
    /// Optimistic-concurrency revision; bumped by stores on save.
    version: u64,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DiagnosisSession {
    /// Creates a fresh session awaiting domain selection.
    pub fn new(id: SessionId, user_id: Option<UserId>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            phase: DiagnosisPhase::AwaitingDomain,
            domain: None,
            goal_id: None,
            answers: BTreeMap::new(),
            pending_question_ids: Vec::new(),
            roadmap: None,
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn phase(&self) -> DiagnosisPhase {
        self.phase
    }

    pub fn domain(&self) -> Option<DomainId> {
        self.domain
    }

    pub fn goal_id(&self) -> Option<&str> {
        self.goal_id.as_deref()
    }

    /// The selected goal resolved against the catalog.
    pub fn goal(&self) -> Option<&'static Goal> {
        let domain = self.domain?;
        catalog::goal(domain, self.goal_id.as_deref()?)
    }

    pub fn roadmap(&self) -> Option<&Roadmap> {
        self.roadmap.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Number of distinct answered questions across the session.
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    /// The recorded answer for a question, if any.
    pub fn answer(&self, question_id: &str) -> Option<&QuestionAnswer> {
        self.answers.get(question_id)
    }

    /// The current batch, resolved against the catalog in batch order.
    pub fn pending_questions(&self) -> Vec<&'static Question> {
        self.pending_question_ids
            .iter()
            .filter_map(|id| catalog::question(id))
            .collect()
    }

    /// Questions of the current batch that still lack an answer.
    pub fn unanswered_questions(&self) -> Vec<&'static Question> {
        self.pending_question_ids
            .iter()
            .filter(|id| !self.answers.contains_key(*id))
            .filter_map(|id| catalog::question(id))
            .collect()
    }

    /// True once every question in the current batch has an answer.
    pub fn batch_complete(&self) -> bool {
        self.pending_question_ids
            .iter()
            .all(|id| self.answers.contains_key(id))
    }

    /// Answered questions paired with catalog metadata, in batch order
    /// (common batch first, then the domain batch).
    pub fn answered_questions(&self) -> Vec<(&'static Question, &QuestionAnswer)> {
        let mut out = Vec::with_capacity(self.answers.len());
        let mut push_batch = |batch: &'static [Question]| {
            for question in batch {
                if let Some(answer) = self.answers.get(question.id) {
                    out.push((question, answer));
                }
            }
        };
        push_batch(catalog::common_questions());
        if let Some(domain) = self.domain {
            push_batch(catalog::domain_questions(domain));
        }
        out
    }

    /// Overall progress: the five pre-completion phases weigh 20 points
    /// each, with partial credit inside a question phase proportional to
    /// the answered fraction of its batch.
    pub fn progress(&self) -> Progress {
        let base = self.phase.base_progress();
        if !self.phase.accepts_answers() {
            return Progress::new(base);
        }
        let total = self.pending_question_ids.len();
        if total == 0 {
            return Progress::new(base);
        }
        let answered = self
            .pending_question_ids
            .iter()
            .filter(|id| self.answers.contains_key(*id))
            .count();
        let fraction = answered as f64 / total as f64;
        Progress::new(base + fraction * DiagnosisPhase::WEIGHT)
    }

    // ─────────────────────────────────────────────────────────────────
    // State transitions
    // ─────────────────────────────────────────────────────────────────

    /// Selects the domain and moves on to goal selection.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session awaits a domain
    pub fn select_domain(&mut self, domain: DomainId) -> Result<(), DiagnosisError> {
        self.ensure_phase(DiagnosisPhase::AwaitingDomain, "select a domain")?;
        self.domain = Some(domain);
        self.advance(DiagnosisPhase::AwaitingGoal)
    }

    /// Selects a goal under the chosen domain and loads the common
    /// question batch.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless the session awaits a goal
    /// - `GoalNotInDomain` if the goal is absent from the domain's list
    pub fn select_goal(&mut self, goal_id: &str) -> Result<&'static Goal, DiagnosisError> {
        self.ensure_phase(DiagnosisPhase::AwaitingGoal, "select a goal")?;
        let domain = self.domain.ok_or(DiagnosisError::InvalidTransition {
            phase: self.phase,
            operation: "select a goal",
        })?;
        let goal = catalog::goal(domain, goal_id).ok_or_else(|| {
            DiagnosisError::GoalNotInDomain {
                goal_id: goal_id.to_string(),
                domain,
            }
        })?;

        self.goal_id = Some(goal.id.to_string());
        self.pending_question_ids = catalog::common_questions()
            .iter()
            .map(|q| q.id.to_string())
            .collect();
        self.advance(DiagnosisPhase::CommonQuestions)?;
        Ok(goal)
    }

    /// Records a batch of answers, last-write-wins per question id.
    ///
    /// Answers for questions outside the current batch are ignored, so
    /// answer keys stay a subset of questions that were pending.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` outside the two question phases
    pub fn record_answers(&mut self, batch: Vec<QuestionAnswer>) -> Result<(), DiagnosisError> {
        if !self.phase.accepts_answers() {
            return Err(DiagnosisError::InvalidTransition {
                phase: self.phase,
                operation: "submit answers",
            });
        }
        let mut recorded = false;
        for answer in batch {
            if self
                .pending_question_ids
                .iter()
                .any(|id| id == answer.question_id())
            {
                self.answers.insert(answer.question_id().to_string(), answer);
                recorded = true;
            }
        }
        if recorded {
            self.touch();
        }
        Ok(())
    }

    /// Completes the common batch and loads the domain-specific one.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless in `CommonQuestions` with a complete
    ///   batch
    pub fn advance_to_domain_questions(&mut self) -> Result<&'static [Question], DiagnosisError> {
        self.ensure_phase(DiagnosisPhase::CommonQuestions, "advance to domain questions")?;
        self.ensure_batch_complete("advance to domain questions")?;
        // Domain is set: CommonQuestions is only reachable through
        // select_goal, which requires it.
        let domain = self.domain.ok_or(DiagnosisError::InvalidTransition {
            phase: self.phase,
            operation: "advance to domain questions",
        })?;
        let questions = catalog::domain_questions(domain);
        self.pending_question_ids = questions.iter().map(|q| q.id.to_string()).collect();
        self.advance(DiagnosisPhase::DomainQuestions)?;
        Ok(questions)
    }

    /// Enters the in-memory generation phase once the domain batch is
    /// complete. Never persisted in this state.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless in `DomainQuestions` with a complete
    ///   batch
    pub fn begin_roadmap_generation(&mut self) -> Result<(), DiagnosisError> {
        self.ensure_phase(DiagnosisPhase::DomainQuestions, "generate the roadmap")?;
        self.ensure_batch_complete("generate the roadmap")?;
        self.advance(DiagnosisPhase::GeneratingRoadmap)
    }

    /// Attaches the validated roadmap and completes the session.
    ///
    /// # Errors
    ///
    /// - `InvalidTransition` unless generation is in progress
    pub fn attach_roadmap(&mut self, roadmap: Roadmap) -> Result<(), DiagnosisError> {
        self.ensure_phase(DiagnosisPhase::GeneratingRoadmap, "attach a roadmap")?;
        self.roadmap = Some(roadmap);
        self.pending_question_ids.clear();
        self.advance(DiagnosisPhase::Completed)
    }

    /// Marks a new persisted revision. Called by session stores after a
    /// successful version-checked save; not part of the domain flow.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }

    // ─────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────

    fn ensure_phase(
        &self,
        expected: DiagnosisPhase,
        operation: &'static str,
    ) -> Result<(), DiagnosisError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DiagnosisError::InvalidTransition {
                phase: self.phase,
                operation,
            })
        }
    }

    fn ensure_batch_complete(&self, operation: &'static str) -> Result<(), DiagnosisError> {
        if self.batch_complete() {
            Ok(())
        } else {
            Err(DiagnosisError::InvalidTransition {
                phase: self.phase,
                operation,
            })
        }
    }

    fn advance(&mut self, next: DiagnosisPhase) -> Result<(), DiagnosisError> {
        self.phase =
            self.phase
                .transition_to(next)
                .map_err(|_| DiagnosisError::InvalidTransition {
                    phase: self.phase,
                    operation: "advance phase",
                })?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
