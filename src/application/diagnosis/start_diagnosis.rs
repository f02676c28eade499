//! StartDiagnosisHandler - opens a session and presents the domains.

use std::sync::Arc;

use crate::domain::catalog::{self, Domain};
use crate::domain::diagnosis::{DiagnosisError, DiagnosisPhase, DiagnosisSession};
use crate::domain::foundation::{Progress, SessionId, UserId};
use crate::ports::SessionStore;

/// Command to start (or resume the start of) a diagnosis.
#[derive(Debug, Clone)]
pub struct StartDiagnosisCommand {
    /// Caller-supplied session id. `None` lets the handler mint one.
    pub session_id: Option<SessionId>,
    pub user_id: Option<UserId>,
}

/// Result of a successful start: the domain menu.
#[derive(Debug, Clone)]
pub struct StartDiagnosisResult {
    pub session_id: SessionId,
    pub phase: DiagnosisPhase,
    pub progress: Progress,
    pub message: String,
    pub domains: &'static [Domain],
}

/// Handler for starting diagnosis sessions.
pub struct StartDiagnosisHandler {
    store: Arc<dyn SessionStore>,
}

impl StartDiagnosisHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Starting an existing session that is still awaiting its domain is
    /// idempotent and returns the menu again; a session past that point
    /// cannot be restarted.
    pub async fn handle(
        &self,
        cmd: StartDiagnosisCommand,
    ) -> Result<StartDiagnosisResult, DiagnosisError> {
        if let Some(id) = cmd.session_id {
            if let Some(existing) = self.store.find(&id).await? {
                if existing.phase() == DiagnosisPhase::AwaitingDomain {
                    return Ok(Self::result_for(&existing));
                }
                return Err(DiagnosisError::InvalidTransition {
                    phase: existing.phase(),
                    operation: "start the diagnosis",
                });
            }
        }

        let id = cmd.session_id.unwrap_or_else(SessionId::new);
        let mut session = DiagnosisSession::new(id, cmd.user_id);
        self.store.save(&mut session).await?;

        tracing::info!(session_id = %id, "diagnosis session started");
        Ok(Self::result_for(&session))
    }

    fn result_for(session: &DiagnosisSession) -> StartDiagnosisResult {
        StartDiagnosisResult {
            session_id: *session.id(),
            phase: session.phase(),
            progress: session.progress(),
            message: "Welcome! Pick the domain you want to grow in.".to_string(),
            domains: catalog::domains(),
        }
    }
}
