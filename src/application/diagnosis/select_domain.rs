//! SelectDomainHandler - records the domain and presents its goals.

use std::sync::Arc;

use crate::domain::catalog::{self, Goal};
use crate::domain::diagnosis::{DiagnosisError, DiagnosisPhase};
use crate::domain::foundation::{Progress, SessionId};
use crate::ports::SessionStore;

/// Command to select a domain by its wire identifier.
#[derive(Debug, Clone)]
pub struct SelectDomainCommand {
    pub session_id: SessionId,
    pub domain: String,
}

/// Result of a successful selection: the goal menu for the domain.
#[derive(Debug, Clone)]
pub struct SelectDomainResult {
    pub session_id: SessionId,
    pub phase: DiagnosisPhase,
    pub progress: Progress,
    pub message: String,
    pub goals: &'static [Goal],
}

/// Handler for domain selection.
pub struct SelectDomainHandler {
    store: Arc<dyn SessionStore>,
}

impl SelectDomainHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SelectDomainCommand,
    ) -> Result<SelectDomainResult, DiagnosisError> {
        // Resolve before touching the session so an unknown domain never
        // costs a load.
        let domain = catalog::resolve_domain(&cmd.domain)?;

        let mut session = self.store.load(&cmd.session_id).await?;
        session.select_domain(domain)?;
        self.store.save(&mut session).await?;

        let label = catalog::domains()
            .iter()
            .find(|d| d.id == domain)
            .map(|d| d.label)
            .unwrap_or(domain.as_str());

        Ok(SelectDomainResult {
            session_id: cmd.session_id,
            phase: session.phase(),
            progress: session.progress(),
            message: format!("{label} selected. Now pick the goal you are aiming for."),
            goals: catalog::goals_for(domain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::diagnosis::{StartDiagnosisCommand, StartDiagnosisHandler};
    use crate::domain::catalog::DomainId;
    use crate::ports::StoreError;

    async fn started_session(store: &Arc<InMemorySessionStore>) -> SessionId {
        StartDiagnosisHandler::new(store.clone())
            .handle(StartDiagnosisCommand {
                session_id: None,
                user_id: None,
            })
            .await
            .unwrap()
            .session_id
    }

    #[tokio::test]
    async fn selecting_a_domain_presents_its_goals() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = started_session(&store).await;

        let result = SelectDomainHandler::new(store.clone())
            .handle(SelectDomainCommand {
                session_id,
                domain: "backend".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.phase, DiagnosisPhase::AwaitingGoal);
        assert_eq!(result.progress.value(), 20.0);
        assert_eq!(result.goals.len(), 4);
        assert!(result.goals.iter().all(|g| g.domain == DomainId::Backend));

        let saved = store.load(&session_id).await.unwrap();
        assert_eq!(saved.domain(), Some(DomainId::Backend));
    }

    #[tokio::test]
    async fn unknown_domain_is_rejected_without_a_write() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = started_session(&store).await;

        let err = SelectDomainHandler::new(store.clone())
            .handle(SelectDomainCommand {
                session_id,
                domain: "mobile".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DiagnosisError::UnknownDomain(d) if d == "mobile"));
        let saved = store.load(&session_id).await.unwrap();
        assert_eq!(saved.phase(), DiagnosisPhase::AwaitingDomain);
        assert_eq!(saved.version(), 1);
    }

    #[tokio::test]
    async fn selecting_twice_is_invalid() {
        let store = Arc::new(InMemorySessionStore::new());
        let session_id = started_session(&store).await;
        let handler = SelectDomainHandler::new(store.clone());

        handler
            .handle(SelectDomainCommand {
                session_id,
                domain: "frontend".to_string(),
            })
            .await
            .unwrap();

        let err = handler
            .handle(SelectDomainCommand {
                session_id,
                domain: "backend".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DiagnosisError::InvalidTransition { .. }));
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());

        let err = SelectDomainHandler::new(store)
            .handle(SelectDomainCommand {
                session_id: SessionId::new(),
                domain: "backend".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DiagnosisError::Store(StoreError::NotFound(_))
        ));
    }
}
