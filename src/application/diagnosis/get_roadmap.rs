//! GetRoadmapHandler - retrieves the roadmap of a completed session.

use std::sync::Arc;

use crate::domain::diagnosis::{DiagnosisError, DiagnosisPhase, Roadmap};
use crate::domain::foundation::{Progress, SessionId};
use crate::ports::SessionStore;

/// Command to fetch the roadmap for a session.
#[derive(Debug, Clone)]
pub struct GetRoadmapCommand {
    pub session_id: SessionId,
}

/// The completed session's roadmap.
#[derive(Debug, Clone)]
pub struct GetRoadmapResult {
    pub session_id: SessionId,
    pub phase: DiagnosisPhase,
    pub progress: Progress,
    pub roadmap: Roadmap,
}

/// Handler for roadmap retrieval. Read-only.
pub struct GetRoadmapHandler {
    store: Arc<dyn SessionStore>,
}

impl GetRoadmapHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: GetRoadmapCommand) -> Result<GetRoadmapResult, DiagnosisError> {
        let session = self.store.load(&cmd.session_id).await?;
        let roadmap = session
            .roadmap()
            .cloned()
            .ok_or(DiagnosisError::RoadmapNotReady(session.phase()))?;

        Ok(GetRoadmapResult {
            session_id: cmd.session_id,
            phase: session.phase(),
            progress: session.progress(),
            roadmap,
        })
    }
}
