//! End-to-end tests for the diagnosis flow, driving the public handlers
//! against real adapters.

use std::sync::Arc;
use std::time::Duration;

use skillpath::adapters::generator;
use skillpath::adapters::storage::{FileSessionStore, InMemorySessionStore};
use skillpath::application::diagnosis::{
    GetRoadmapCommand, GetRoadmapHandler, SelectDomainCommand, SelectDomainHandler,
    SelectGoalCommand, SelectGoalHandler, StartDiagnosisCommand, StartDiagnosisHandler,
    SubmitAnswersCommand, SubmitAnswersHandler,
};
use skillpath::config::{telemetry, AppConfig};
use skillpath::domain::catalog::Question;
use skillpath::domain::diagnosis::{DiagnosisError, DiagnosisPhase, QuestionAnswer};
use skillpath::domain::foundation::{SessionId, UserId};
use skillpath::ports::{SessionStore, StoreError};

const TIMEOUT: Duration = Duration::from_secs(5);

struct Flow {
    start: StartDiagnosisHandler,
    select_domain: SelectDomainHandler,
    select_goal: SelectGoalHandler,
    submit: SubmitAnswersHandler,
    get_roadmap: GetRoadmapHandler,
}

impl Flow {
    fn new(store: Arc<dyn SessionStore>) -> Self {
        let config = AppConfig::default();
        telemetry::init(&config.log_filter);
        let generator = generator::from_config(&config.generator);
        Self {
            start: StartDiagnosisHandler::new(store.clone()),
            select_domain: SelectDomainHandler::new(store.clone()),
            select_goal: SelectGoalHandler::new(store.clone()),
            submit: SubmitAnswersHandler::new(store.clone(), generator, config.generator.timeout()),
            get_roadmap: GetRoadmapHandler::new(store),
        }
    }
}

fn answers_for(questions: &[&'static Question]) -> Vec<QuestionAnswer> {
    questions
        .iter()
        .map(|q| {
            let selected = q
                .options
                .first()
                .map(|o| vec![o.id.to_string()])
                .unwrap_or_default();
            let supplement = if q.options.is_empty() {
                Some("I want to work on real products.".to_string())
            } else {
                None
            };
            QuestionAnswer::new(q.id, selected, supplement)
        })
        .collect()
}

async fn run_full_flow(flow: &Flow, domain: &str, goal_id: &str) -> SessionId {
    let started = flow
        .start
        .handle(StartDiagnosisCommand {
            session_id: None,
            user_id: Some(UserId::new("learner-1").unwrap()),
        })
        .await
        .unwrap();
    assert_eq!(started.phase, DiagnosisPhase::AwaitingDomain);
    assert_eq!(started.domains.len(), 3);
    let session_id = started.session_id;

    let domains = flow
        .select_domain
        .handle(SelectDomainCommand {
            session_id,
            domain: domain.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(domains.phase, DiagnosisPhase::AwaitingGoal);
    assert!(domains.goals.iter().any(|g| g.id == goal_id));

    let goal = flow
        .select_goal
        .handle(SelectGoalCommand {
            session_id,
            goal_id: goal_id.to_string(),
        })
        .await
        .unwrap();
    assert_eq!(goal.phase, DiagnosisPhase::CommonQuestions);

    let common: Vec<&'static Question> = goal.questions.iter().collect();
    let after_common = flow
        .submit
        .handle(SubmitAnswersCommand {
            session_id,
            answers: answers_for(&common),
        })
        .await
        .unwrap();
    assert_eq!(after_common.phase, DiagnosisPhase::DomainQuestions);
    assert!(after_common.phase_changed);
    assert_eq!(after_common.next_questions.len(), 6);

    let completed = flow
        .submit
        .handle(SubmitAnswersCommand {
            session_id,
            answers: answers_for(&after_common.next_questions),
        })
        .await
        .unwrap();
    assert_eq!(completed.phase, DiagnosisPhase::Completed);
    assert_eq!(completed.progress.value(), 100.0);
    assert!(completed.roadmap.is_some());

    session_id
}

#[tokio::test]
async fn full_flow_reaches_a_retrievable_roadmap() {
    let flow = Flow::new(Arc::new(InMemorySessionStore::new()));

    let session_id = run_full_flow(&flow, "backend", "be_api_developer").await;

    let result = flow
        .get_roadmap
        .handle(GetRoadmapCommand { session_id })
        .await
        .unwrap();
    assert_eq!(result.phase, DiagnosisPhase::Completed);
    assert_eq!(result.roadmap.validate(), Ok(()));
    assert_eq!(result.roadmap.domain, "backend");
}

#[tokio::test]
async fn full_flow_works_on_the_file_backend() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let flow = Flow::new(Arc::new(FileSessionStore::new(temp_dir.path())));

    let session_id = run_full_flow(&flow, "frontend", "fe_ui_engineer").await;

    // A fresh store instance over the same directory sees the result.
    let reopened = FileSessionStore::new(temp_dir.path());
    let session = reopened.load(&session_id).await.unwrap();
    assert_eq!(session.phase(), DiagnosisPhase::Completed);
    assert!(session.roadmap().is_some());
}

#[tokio::test]
async fn partial_submissions_accumulate_across_calls() {
    let flow = Flow::new(Arc::new(InMemorySessionStore::new()));

    let session_id = flow
        .start
        .handle(StartDiagnosisCommand {
            session_id: None,
            user_id: None,
        })
        .await
        .unwrap()
        .session_id;
    flow.select_domain
        .handle(SelectDomainCommand {
            session_id,
            domain: "infrastructure".to_string(),
        })
        .await
        .unwrap();
    let goal = flow
        .select_goal
        .handle(SelectGoalCommand {
            session_id,
            goal_id: "infra_devops".to_string(),
        })
        .await
        .unwrap();

    let all: Vec<&'static Question> = goal.questions.iter().collect();
    let first = flow
        .submit
        .handle(SubmitAnswersCommand {
            session_id,
            answers: answers_for(&all[..2]),
        })
        .await
        .unwrap();
    assert!(!first.phase_changed);
    assert_eq!(first.next_questions.len(), 4);

    let second = flow
        .submit
        .handle(SubmitAnswersCommand {
            session_id,
            answers: answers_for(&first.next_questions),
        })
        .await
        .unwrap();
    assert!(second.phase_changed);
    assert_eq!(second.phase, DiagnosisPhase::DomainQuestions);
}

#[tokio::test]
async fn completed_sessions_reject_further_answers() {
    let flow = Flow::new(Arc::new(InMemorySessionStore::new()));
    let session_id = run_full_flow(&flow, "backend", "be_platform_engineer").await;

    let err = flow
        .submit
        .handle(SubmitAnswersCommand {
            session_id,
            answers: vec![QuestionAnswer::new("cq_experience", vec![], None)],
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DiagnosisError::InvalidTransition {
            phase: DiagnosisPhase::Completed,
            ..
        }
    ));
}

#[tokio::test]
async fn roadmap_is_unavailable_until_completed() {
    let flow = Flow::new(Arc::new(InMemorySessionStore::new()));

    let session_id = flow
        .start
        .handle(StartDiagnosisCommand {
            session_id: None,
            user_id: None,
        })
        .await
        .unwrap()
        .session_id;

    let err = flow
        .get_roadmap
        .handle(GetRoadmapCommand { session_id })
        .await
        .unwrap_err();
    assert!(matches!(err, DiagnosisError::RoadmapNotReady(_)));
}

#[tokio::test]
async fn sessions_are_isolated_from_each_other() {
    let flow = Flow::new(Arc::new(InMemorySessionStore::new()));

    let first = run_full_flow(&flow, "backend", "be_data_engineer").await;
    let second = flow
        .start
        .handle(StartDiagnosisCommand {
            session_id: None,
            user_id: None,
        })
        .await
        .unwrap()
        .session_id;

    assert_ne!(first, second);
    // The new session is untouched by the completed one.
    let err = flow
        .get_roadmap
        .handle(GetRoadmapCommand {
            session_id: second,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DiagnosisError::RoadmapNotReady(DiagnosisPhase::AwaitingDomain)
    ));
}

#[tokio::test]
async fn concurrent_domain_selection_admits_one_winner() {
    let store = Arc::new(InMemorySessionStore::new());
    let flow = Flow::new(store.clone());

    let session_id = flow
        .start
        .handle(StartDiagnosisCommand {
            session_id: None,
            user_id: None,
        })
        .await
        .unwrap()
        .session_id;

    let handler = Arc::new(SelectDomainHandler::new(
        store.clone() as Arc<dyn SessionStore>
    ));
    let attempts = ["frontend", "backend", "infrastructure"].map(|domain| {
        let handler = handler.clone();
        async move {
            handler
                .handle(SelectDomainCommand {
                    session_id,
                    domain: domain.to_string(),
                })
                .await
        }
    });
    let results = futures::future::join_all(attempts).await;

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);
    for result in results {
        if let Err(err) = result {
            assert!(matches!(
                err,
                DiagnosisError::Store(StoreError::Conflict { .. })
                    | DiagnosisError::InvalidTransition { .. }
            ));
        }
    }

    // The stored session holds exactly one domain and moved exactly one
    // phase forward.
    let session = store.load(&session_id).await.unwrap();
    assert_eq!(session.phase(), DiagnosisPhase::AwaitingGoal);
    assert!(session.domain().is_some());
}
