//! SelectGoalHandler - records the goal and opens the common questions.

use std::sync::Arc;

use crate::domain::catalog::{self, Question};
use crate::domain::diagnosis::{DiagnosisError, DiagnosisPhase};
use crate::domain::foundation::{Progress, SessionId};
use crate::ports::SessionStore;

/// Command to select a goal within the already-chosen domain.
#[derive(Debug, Clone)]
pub struct SelectGoalCommand {
    pub session_id: SessionId,
    pub goal_id: String,
}

/// Result of a successful selection: the common question batch.
#[derive(Debug, Clone)]
pub struct SelectGoalResult {
    pub session_id: SessionId,
    pub phase: DiagnosisPhase,
    pub progress: Progress,
    pub message: String,
    pub questions: &'static [Question],
}

/// Handler for goal selection.
pub struct SelectGoalHandler {
    store: Arc<dyn SessionStore>,
}

impl SelectGoalHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SelectGoalCommand) -> Result<SelectGoalResult, DiagnosisError> {
        let mut session = self.store.load(&cmd.session_id).await?;
        let goal = session.select_goal(&cmd.goal_id)?;
        self.store.save(&mut session).await?;

        Ok(SelectGoalResult {
            session_id: cmd.session_id,
            phase: session.phase(),
            progress: session.progress(),
            message: format!(
                "Goal set: {}. Let's start with a few questions about your background.",
                goal.label
            ),
            questions: catalog::common_questions(),
        })
    }
}
