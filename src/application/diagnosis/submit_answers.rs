//! SubmitAnswersHandler - records answers and drives the flow forward.
//!
//! This is the only handler that crosses more than one phase in a
//! single call: completing the common batch opens the domain batch, and
//! completing the domain batch triggers roadmap generation.
//!
//! Answers are persisted at `domain_questions` before the generator is
//! invoked, so a generation failure leaves the session fully answered
//! and the submit call safe to retry.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::catalog::{self, Question};
use crate::domain::diagnosis::{DiagnosisError, DiagnosisPhase, QuestionAnswer, Roadmap};
use crate::domain::foundation::{Progress, SessionId};
use crate::ports::{GenerationError, RoadmapContext, RoadmapGenerator, SessionStore};

/// Command carrying one batch of answers. The batch may be partial, and
/// may be empty to re-trigger generation after a transient failure.
#[derive(Debug, Clone)]
pub struct SubmitAnswersCommand {
    pub session_id: SessionId,
    pub answers: Vec<QuestionAnswer>,
}

/// Result of an answer submission.
#[derive(Debug, Clone)]
pub struct SubmitAnswersResult {
    pub session_id: SessionId,
    pub phase: DiagnosisPhase,
    /// True when this submission moved the session to a new phase.
    pub phase_changed: bool,
    pub progress: Progress,
    pub message: String,
    /// Questions still expected: the unanswered remainder of the current
    /// batch, or the freshly opened next batch. Empty once completed.
    pub next_questions: Vec<&'static Question>,
    /// Present only when this submission completed the diagnosis.
    pub roadmap: Option<Roadmap>,
}

/// Handler for answer submission and roadmap generation.
pub struct SubmitAnswersHandler {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn RoadmapGenerator>,
    generation_timeout: Duration,
}

impl SubmitAnswersHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn RoadmapGenerator>,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            store,
            generator,
            generation_timeout,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAnswersCommand,
    ) -> Result<SubmitAnswersResult, DiagnosisError> {
        let mut session = self.store.load(&cmd.session_id).await?;
        let phase_before = session.phase();
        session.record_answers(cmd.answers)?;

        if !session.batch_complete() {
            self.store.save(&mut session).await?;
            let remaining = session.unanswered_questions();
            let total = session.pending_questions().len();
            let message = format!(
                "{} of {total} questions answered in this step.",
                total - remaining.len()
            );
            return Ok(SubmitAnswersResult {
                session_id: cmd.session_id,
                phase: session.phase(),
                phase_changed: false,
                progress: session.progress(),
                message,
                next_questions: remaining,
                roadmap: None,
            });
        }

        match phase_before {
            DiagnosisPhase::CommonQuestions => {
                let questions = session.advance_to_domain_questions()?;
                self.store.save(&mut session).await?;

                let label = session
                    .domain()
                    .and_then(|d| catalog::domains().iter().find(|entry| entry.id == d))
                    .map(|d| d.label)
                    .unwrap_or("your domain");
                Ok(SubmitAnswersResult {
                    session_id: cmd.session_id,
                    phase: session.phase(),
                    phase_changed: true,
                    progress: session.progress(),
                    message: format!("Background complete. Now a deep dive into {label}."),
                    next_questions: questions.iter().collect(),
                    roadmap: None,
                })
            }
            DiagnosisPhase::DomainQuestions => {
                // Persist the full transcript before generation so a
                // failed or timed-out generator loses nothing.
                self.store.save(&mut session).await?;

                let context = RoadmapContext::from_session(&session).ok_or(
                    DiagnosisError::InvalidTransition {
                        phase: session.phase(),
                        operation: "generate the roadmap",
                    },
                )?;
                session.begin_roadmap_generation()?;

                tracing::info!(
                    session_id = %cmd.session_id,
                    goal = %context.goal_id,
                    "generating roadmap"
                );
                let roadmap = self.generate(&context).await?;
                session.attach_roadmap(roadmap)?;
                self.store.save(&mut session).await?;

                tracing::info!(session_id = %cmd.session_id, "diagnosis completed");
                Ok(SubmitAnswersResult {
                    session_id: cmd.session_id,
                    phase: session.phase(),
                    phase_changed: true,
                    progress: session.progress(),
                    message: "Your personalized roadmap is ready.".to_string(),
                    next_questions: Vec::new(),
                    roadmap: session.roadmap().cloned(),
                })
            }
            phase => Err(DiagnosisError::InvalidTransition {
                phase,
                operation: "submit answers",
            }),
        }
    }

    async fn generate(&self, context: &RoadmapContext) -> Result<Roadmap, GenerationError> {
        let timeout_secs = self.generation_timeout.as_secs();
        let roadmap = tokio::time::timeout(self.generation_timeout, self.generator.generate(context))
            .await
            .map_err(|_| {
                tracing::warn!(goal = %context.goal_id, timeout_secs, "roadmap generation timed out");
                GenerationError::Timeout { timeout_secs }
            })??;

        roadmap
            .validate()
            .map_err(|e| GenerationError::InvalidOutput(e.to_string()))?;
        Ok(roadmap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::generator::MockRoadmapGenerator;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::diagnosis::{
        SelectDomainCommand, SelectDomainHandler, SelectGoalCommand, SelectGoalHandler,
        StartDiagnosisCommand, StartDiagnosisHandler,
    };
    use crate::domain::catalog::DomainId;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn answers_for(questions: &[&Question]) -> Vec<QuestionAnswer> {
        questions
            .iter()
            .map(|q| {
                let selected = q
                    .options
                    .first()
                    .map(|o| vec![o.id.to_string()])
                    .unwrap_or_default();
                QuestionAnswer::new(q.id, selected, None)
            })
            .collect()
    }

    async fn session_at_common_questions(store: &Arc<InMemorySessionStore>) -> SessionId {
        let session_id = StartDiagnosisHandler::new(store.clone())
            .handle(StartDiagnosisCommand {
                session_id: None,
                user_id: None,
            })
            .await
            .unwrap()
            .session_id;
        SelectDomainHandler::new(store.clone())
            .handle(SelectDomainCommand {
                session_id,
                domain: "frontend".to_string(),
            })
            .await
            .unwrap();
        SelectGoalHandler::new(store.clone())
            .handle(SelectGoalCommand {
                session_id,
                goal_id: "fe_spa_developer".to_string(),
            })
            .await
            .unwrap();
        session_id
    }

    async fn complete_common_batch(
        handler: &SubmitAnswersHandler,
        session_id: SessionId,
    ) -> SubmitAnswersResult {
        let common: Vec<&Question> = catalog::common_questions().iter().collect();
        handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: answers_for(&common),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn partial_batch_returns_the_remainder() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let handler = SubmitAnswersHandler::new(
            store.clone(),
            Arc::new(MockRoadmapGenerator::new()),
            TIMEOUT,
        );

        let common: Vec<&Question> = catalog::common_questions().iter().take(2).collect();
        let result = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: answers_for(&common),
            })
            .await
            .unwrap();

        assert_eq!(result.phase, DiagnosisPhase::CommonQuestions);
        assert!(!result.phase_changed);
        assert_eq!(result.next_questions.len(), 4);
        assert!(result.roadmap.is_none());
        // 40 base + 2/6 of the phase share.
        let expected = 40.0 + (2.0 / 6.0) * 20.0;
        assert!((result.progress.value() - expected).abs() < 1e-9);
    }

    #[tokio::test]
    async fn completing_the_common_batch_opens_the_domain_batch() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let handler = SubmitAnswersHandler::new(
            store.clone(),
            Arc::new(MockRoadmapGenerator::new()),
            TIMEOUT,
        );

        let result = complete_common_batch(&handler, session_id).await;

        assert_eq!(result.phase, DiagnosisPhase::DomainQuestions);
        assert!(result.phase_changed);
        assert_eq!(result.progress.value(), 60.0);
        assert_eq!(result.next_questions.len(), 6);
        assert!(result.next_questions.iter().all(|q| q.id.starts_with("fq_")));
    }

    #[tokio::test]
    async fn completing_the_domain_batch_generates_a_roadmap() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let generator = Arc::new(MockRoadmapGenerator::new());
        let handler = SubmitAnswersHandler::new(store.clone(), generator.clone(), TIMEOUT);

        complete_common_batch(&handler, session_id).await;
        let domain_qs: Vec<&Question> = catalog::domain_questions(DomainId::Frontend)
            .iter()
            .collect();
        let result = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: answers_for(&domain_qs),
            })
            .await
            .unwrap();

        assert_eq!(result.phase, DiagnosisPhase::Completed);
        assert!(result.phase_changed);
        assert_eq!(result.progress.value(), 100.0);
        assert!(result.next_questions.is_empty());
        let roadmap = result.roadmap.unwrap();
        assert_eq!(roadmap.validate(), Ok(()));

        // Generator saw the full transcript.
        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.calls()[0].answers.len(), 12);

        let saved = store.load(&session_id).await.unwrap();
        assert_eq!(saved.phase(), DiagnosisPhase::Completed);
        assert!(saved.roadmap().is_some());
    }

    #[tokio::test]
    async fn generation_failure_keeps_answers_and_allows_retry() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let generator = Arc::new(
            MockRoadmapGenerator::new()
                .with_error(GenerationError::Transport("connection reset".to_string())),
        );
        let handler = SubmitAnswersHandler::new(store.clone(), generator.clone(), TIMEOUT);

        complete_common_batch(&handler, session_id).await;
        let domain_qs: Vec<&Question> = catalog::domain_questions(DomainId::Frontend)
            .iter()
            .collect();
        let err = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: answers_for(&domain_qs),
            })
            .await
            .unwrap_err();
        assert!(err.is_retryable());

        // The transcript survived and the phase never advanced.
        let saved = store.load(&session_id).await.unwrap();
        assert_eq!(saved.phase(), DiagnosisPhase::DomainQuestions);
        assert_eq!(saved.answer_count(), 12);

        // Retry with an empty batch succeeds once the generator recovers.
        let result = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: Vec::new(),
            })
            .await
            .unwrap();
        assert_eq!(result.phase, DiagnosisPhase::Completed);
        assert_eq!(generator.call_count(), 2);
    }

    #[tokio::test]
    async fn slow_generation_times_out() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let generator =
            Arc::new(MockRoadmapGenerator::new().with_delay(Duration::from_secs(60)));
        let handler =
            SubmitAnswersHandler::new(store.clone(), generator, Duration::from_millis(20));

        complete_common_batch(&handler, session_id).await;
        let domain_qs: Vec<&Question> = catalog::domain_questions(DomainId::Frontend)
            .iter()
            .collect();
        let err = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: answers_for(&domain_qs),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DiagnosisError::Generation(GenerationError::Timeout { .. })
        ));
        let saved = store.load(&session_id).await.unwrap();
        assert_eq!(saved.phase(), DiagnosisPhase::DomainQuestions);
    }

    #[tokio::test]
    async fn invalid_generator_output_is_rejected() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let generator =
            Arc::new(MockRoadmapGenerator::new().with_raw_response("not json at all"));
        let handler = SubmitAnswersHandler::new(store.clone(), generator, TIMEOUT);

        complete_common_batch(&handler, session_id).await;
        let domain_qs: Vec<&Question> = catalog::domain_questions(DomainId::Frontend)
            .iter()
            .collect();
        let err = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: answers_for(&domain_qs),
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DiagnosisError::Generation(GenerationError::InvalidOutput(_))
        ));
    }

    #[tokio::test]
    async fn answers_before_goal_selection_are_invalid() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = StartDiagnosisHandler::new(store.clone())
            .handle(StartDiagnosisCommand {
                session_id: None,
                user_id: None,
            })
            .await
            .unwrap()
            .session_id;
        let handler = SubmitAnswersHandler::new(
            store,
            Arc::new(MockRoadmapGenerator::new()),
            TIMEOUT,
        );

        let err = handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: vec![QuestionAnswer::new("cq_experience", vec![], None)],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn resubmitting_a_question_overwrites_the_answer() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = session_at_common_questions(&store).await;
        let handler = SubmitAnswersHandler::new(
            store.clone(),
            Arc::new(MockRoadmapGenerator::new()),
            TIMEOUT,
        );

        handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: vec![QuestionAnswer::new(
                    "cq_experience",
                    vec!["under_1y".to_string()],
                    None,
                )],
            })
            .await
            .unwrap();
        handler
            .handle(SubmitAnswersCommand {
                session_id,
                answers: vec![QuestionAnswer::new(
                    "cq_experience",
                    vec!["over_5y".to_string()],
                    None,
                )],
            })
            .await
            .unwrap();

        let saved = store.load(&session_id).await.unwrap();
        assert_eq!(saved.answer_count(), 1);
        assert_eq!(
            saved.answer("cq_experience").unwrap().selected_option_ids(),
            ["over_5y".to_string()]
        );
    }
}
