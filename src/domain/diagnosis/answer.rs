//! Recorded question answers.

use serde::{Deserialize, Serialize};

/// One recorded response to a catalog question.
///
/// Immutable once constructed; resubmitting the same question id makes
/// the session replace the prior entry, never append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    question_id: String,
    selected_option_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supplement: Option<String>,
}

impl QuestionAnswer {
    /// Creates an answer. `selected_option_ids` may be empty for
    /// free-text or skippable questions.
    pub fn new(
        question_id: impl Into<String>,
        selected_option_ids: Vec<String>,
        supplement: Option<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            selected_option_ids,
            supplement,
        }
    }

    /// The catalog question this answers.
    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    /// Identifiers of the chosen options, in submission order.
    pub fn selected_option_ids(&self) -> &[String] {
        &self.selected_option_ids
    }

    /// Optional free-text supplement.
    pub fn supplement(&self) -> Option<&str> {
        self.supplement.as_deref()
    }
}
